// Copyright 2023 The RocketMQ Rust Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use mqadmin_error::ToolsError;
use mqadmin_error::ToolsResult;
use tracing::debug;

use crate::acl::acl_signer::cal_signature;
use crate::acl::acl_signer::combine_request_content;
use crate::acl::session_credentials::SessionCredentials;
use crate::acl::session_credentials::ACCESS_KEY;
use crate::acl::session_credentials::SECURITY_TOKEN;
use crate::acl::session_credentials::SIGNATURE;
use crate::remoting::AdminRequest;
use crate::remoting::AdminResponse;
use crate::remoting::RPCHook;

/// Signs every outgoing admin request with the configured access key.
pub struct AclClientRPCHook {
    session_credentials: SessionCredentials,
}

impl AclClientRPCHook {
    pub fn new(session_credentials: SessionCredentials) -> Self {
        Self { session_credentials }
    }

    #[inline]
    pub fn session_credentials(&self) -> &SessionCredentials {
        &self.session_credentials
    }
}

impl RPCHook for AclClientRPCHook {
    fn do_before_request(&self, remote_addr: &str, request: &mut AdminRequest) -> ToolsResult<()> {
        let (Some(access_key), Some(secret_key)) = (
            self.session_credentials.access_key(),
            self.session_credentials.secret_key(),
        ) else {
            return Err(ToolsError::signature("access key and secret key are required"));
        };

        request.add_ext_field(ACCESS_KEY, access_key.clone());
        if let Some(security_token) = self.session_credentials.security_token() {
            request.add_ext_field(SECURITY_TOKEN, security_token.clone());
        }

        let content = combine_request_content(request.ext_fields(), request.body());
        let signature = cal_signature(&content, secret_key.as_str())?;
        request.add_ext_field(SIGNATURE, signature);
        debug!("signed request {} for {}", request.command(), remote_addr);
        Ok(())
    }

    #[inline]
    fn do_after_response(&self, _remote_addr: &str, _request: &AdminRequest, _response: &AdminResponse) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn before_request_adds_access_key_and_signature() {
        let hook = AclClientRPCHook::new(SessionCredentials::with_keys("rocketmq2", "12345678"));
        let mut request = AdminRequest::new("updateTopic");
        request.add_ext_field("topic", "TopicTest");

        hook.do_before_request("127.0.0.1:10911", &mut request).unwrap();

        assert_eq!(request.ext_field(ACCESS_KEY), Some("rocketmq2"));
        assert_eq!(request.ext_field(SECURITY_TOKEN), None);
        let expected = cal_signature(b"rocketmq2TopicTest", "12345678").unwrap();
        assert_eq!(request.ext_field(SIGNATURE), Some(expected.as_str()));
    }

    #[test]
    fn signature_covers_security_token_and_body() {
        let hook = AclClientRPCHook::new(SessionCredentials::with_token("ak", "sk", "token"));
        let mut request = AdminRequest::new("updateAclConfig").with_body(b"payload".to_vec());

        hook.do_before_request("", &mut request).unwrap();

        assert_eq!(request.ext_field(SECURITY_TOKEN), Some("token"));
        let expected = cal_signature(b"aktokenpayload", "sk").unwrap();
        assert_eq!(request.ext_field(SIGNATURE), Some(expected.as_str()));
    }

    #[test]
    fn missing_keys_fail_signing() {
        let hook = AclClientRPCHook::new(SessionCredentials::default());
        let mut request = AdminRequest::new("topicList");
        assert!(matches!(
            hook.do_before_request("", &mut request),
            Err(ToolsError::Signature { .. })
        ));
    }
}
