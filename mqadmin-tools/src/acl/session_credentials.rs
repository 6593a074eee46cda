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

use std::fmt;

use cheetah_string::CheetahString;
use serde::Deserialize;
use serde::Deserializer;

pub const ACCESS_KEY: &str = "AccessKey";
pub const SIGNATURE: &str = "Signature";
pub const SECURITY_TOKEN: &str = "SecurityToken";

/// Credentials read from the tools ACL file (`accessKey`, `secretKey`, optional `securityToken`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCredentials {
    #[serde(default, deserialize_with = "scalar_as_string")]
    access_key: Option<CheetahString>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    secret_key: Option<CheetahString>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    security_token: Option<CheetahString>,
}

// `secretKey: 12345678` is a YAML integer; keys are compared as text.
fn scalar_as_string<'de, D>(deserializer: D) -> Result<Option<CheetahString>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_yaml::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_yaml::Value::String(value)) => Some(CheetahString::from_string(value)),
        Some(serde_yaml::Value::Number(value)) => Some(CheetahString::from_string(value.to_string())),
        Some(serde_yaml::Value::Bool(value)) => Some(CheetahString::from_string(value.to_string())),
        _ => None,
    })
}

impl SessionCredentials {
    pub fn with_keys(access_key: impl Into<CheetahString>, secret_key: impl Into<CheetahString>) -> Self {
        Self {
            access_key: Some(access_key.into()),
            secret_key: Some(secret_key.into()),
            security_token: None,
        }
    }

    pub fn with_token(
        access_key: impl Into<CheetahString>,
        secret_key: impl Into<CheetahString>,
        security_token: impl Into<CheetahString>,
    ) -> Self {
        Self {
            access_key: Some(access_key.into()),
            secret_key: Some(secret_key.into()),
            security_token: Some(security_token.into()),
        }
    }

    pub fn access_key(&self) -> Option<&CheetahString> {
        self.access_key.as_ref()
    }

    pub fn secret_key(&self) -> Option<&CheetahString> {
        self.secret_key.as_ref()
    }

    pub fn security_token(&self) -> Option<&CheetahString> {
        self.security_token.as_ref()
    }

    /// Both keys present and not blank.
    pub fn is_complete(&self) -> bool {
        let not_blank = |value: Option<&CheetahString>| value.is_some_and(|value| !value.as_str().trim().is_empty());
        not_blank(self.access_key()) && not_blank(self.secret_key())
    }
}

impl PartialEq for SessionCredentials {
    fn eq(&self, other: &Self) -> bool {
        self.access_key == other.access_key
            && self.secret_key == other.secret_key
            && self.security_token == other.security_token
    }
}

impl Eq for SessionCredentials {}

impl fmt::Display for SessionCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SessionCredentials [accessKey={:?}, secretKey=******, SecurityToken={:?}]",
            self.access_key, self.security_token
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_credentials_with_keys() {
        let credentials = SessionCredentials::with_keys("ak", "sk");
        assert_eq!(credentials.access_key().unwrap().as_str(), "ak");
        assert_eq!(credentials.secret_key().unwrap().as_str(), "sk");
        assert!(credentials.security_token().is_none());
        assert!(credentials.is_complete());
    }

    #[test]
    fn session_credentials_with_token() {
        let credentials = SessionCredentials::with_token("ak", "sk", "token");
        assert_eq!(credentials.security_token().unwrap().as_str(), "token");
    }

    #[test]
    fn blank_keys_are_incomplete() {
        assert!(!SessionCredentials::default().is_complete());
        assert!(!SessionCredentials::with_keys("ak", "  ").is_complete());
    }

    #[test]
    fn session_credentials_from_yaml() {
        let credentials: SessionCredentials =
            serde_yaml::from_str("accessKey: rocketmq2\nsecretKey: 12345678\n").unwrap();
        assert_eq!(credentials, SessionCredentials::with_keys("rocketmq2", "12345678"));
    }

    #[test]
    fn display_hides_secret_key() {
        let display = SessionCredentials::with_keys("ak", "super-secret").to_string();
        assert!(display.contains("ak"));
        assert!(!display.contains("super-secret"));
    }
}
