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

use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use mqadmin_error::ToolsError;
use mqadmin_error::ToolsResult;
use tracing::debug;
use tracing::warn;

use crate::acl::acl_client_rpc_hook::AclClientRPCHook;
use crate::acl::session_credentials::SessionCredentials;
use crate::remoting::RPCHook;

/// Builds the authentication hook from a tools ACL file.
///
/// Returns `Ok(None)` when the file does not exist or does not configure both keys, so commands
/// run unsigned against clusters without ACL. A file that exists but cannot be read or decoded is
/// an error.
pub fn get_acl_rpc_hook(path: impl AsRef<Path>) -> ToolsResult<Option<Arc<dyn RPCHook>>> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("ACL config file {} not found, requests will not be signed", path.display());
            return Ok(None);
        }
        Err(e) => return Err(ToolsError::acl_config(path.display().to_string(), e.to_string())),
    };

    let credentials = parse_session_credentials(&content)
        .map_err(|e| ToolsError::acl_config(path.display().to_string(), e.to_string()))?;
    if !credentials.is_complete() {
        warn!(
            "accessKey or secretKey is blank in {}, requests will not be signed",
            path.display()
        );
        return Ok(None);
    }

    debug!("loaded {} from {}", credentials, path.display());
    Ok(Some(Arc::new(AclClientRPCHook::new(credentials))))
}

fn parse_session_credentials(content: &str) -> ToolsResult<SessionCredentials> {
    if content.trim().is_empty() {
        return Ok(SessionCredentials::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;
    use tempfile::TempDir;

    use super::*;
    use crate::acl::session_credentials::ACCESS_KEY;
    use crate::acl::session_credentials::SIGNATURE;
    use crate::remoting::AdminRequest;

    fn acl_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_yields_no_hook() {
        let dir = TempDir::new().unwrap();
        let hook = get_acl_rpc_hook(dir.path().join("conf/tools.yml")).unwrap();
        assert!(hook.is_none());
    }

    #[test]
    fn complete_file_yields_signing_hook() {
        let file = acl_file("accessKey: rocketmq2\nsecretKey: 12345678\n");
        let hook = get_acl_rpc_hook(file.path()).unwrap().expect("hook");

        let mut request = AdminRequest::new("topicList");
        hook.do_before_request("", &mut request).unwrap();
        assert_eq!(request.ext_field(ACCESS_KEY), Some("rocketmq2"));
        assert!(request.ext_field(SIGNATURE).is_some());
    }

    #[test]
    fn blank_keys_yield_no_hook() {
        let file = acl_file("accessKey: ''\nsecretKey: 12345678\n");
        assert!(get_acl_rpc_hook(file.path()).unwrap().is_none());

        let empty = acl_file("");
        assert!(get_acl_rpc_hook(empty.path()).unwrap().is_none());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let file = acl_file("accessKey: [unterminated\n");
        assert!(matches!(
            get_acl_rpc_hook(file.path()),
            Err(ToolsError::AclConfig { .. })
        ));
    }
}
