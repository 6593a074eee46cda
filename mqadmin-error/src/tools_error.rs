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

//! Admin tooling errors

use thiserror::Error;

/// Errors raised while registering, resolving, parsing or executing admin sub commands.
#[derive(Debug, Error)]
pub enum ToolsError {
    // ============================================================================
    // Registry Errors
    // ============================================================================
    /// A name or alias is already claimed by another registered command
    #[error("Sub command '{name}' is already registered")]
    DuplicateCommand { name: String },

    /// The command descriptor itself is unusable
    #[error("Invalid sub command: {reason}")]
    InvalidCommand { reason: String },

    // ============================================================================
    // Authentication Errors
    // ============================================================================
    /// ACL tools file exists but cannot be used
    #[error("Invalid ACL config '{path}': {reason}")]
    AclConfig { path: String, reason: String },

    /// Request signing failed
    #[error("Failed to sign request: {reason}")]
    Signature { reason: String },

    // ============================================================================
    // Execution Errors
    // ============================================================================
    /// A sub command failed while running
    #[error("Sub command '{command}' failed: {message}")]
    Execution { command: String, message: String },

    /// Illegal argument
    #[error("Illegal argument: {0}")]
    IllegalArgument(String),

    // ============================================================================
    // System Errors
    // ============================================================================
    /// YAML decoding error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Reading input files or writing command output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ToolsError {
    // ============================================================================
    // Convenience Constructors
    // ============================================================================

    /// Create a duplicate command error
    #[inline]
    pub fn duplicate_command(name: impl Into<String>) -> Self {
        Self::DuplicateCommand { name: name.into() }
    }

    /// Create an invalid command error
    #[inline]
    pub fn invalid_command(reason: impl Into<String>) -> Self {
        Self::InvalidCommand { reason: reason.into() }
    }

    /// Create an ACL config error
    #[inline]
    pub fn acl_config(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::AclConfig {
            path: path.into(),
            reason: reason.into(),
        }
    }

    #[inline]
    pub fn signature(reason: impl Into<String>) -> Self {
        Self::Signature { reason: reason.into() }
    }

    /// Create an execution error
    #[inline]
    pub fn execution(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Execution {
            command: command.into(),
            message: message.into(),
        }
    }

    #[inline]
    pub fn illegal_argument(message: impl Into<String>) -> Self {
        Self::IllegalArgument(message.into())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn registry_errors() {
        let err = ToolsError::duplicate_command("updateTopic");
        assert_eq!(err.to_string(), "Sub command 'updateTopic' is already registered");

        let err = ToolsError::invalid_command("empty name");
        assert_eq!(err.to_string(), "Invalid sub command: empty name");
    }

    #[test]
    fn authentication_errors() {
        let err = ToolsError::acl_config("/opt/rocketmq/conf/tools.yml", "missing secretKey");
        assert_eq!(
            err.to_string(),
            "Invalid ACL config '/opt/rocketmq/conf/tools.yml': missing secretKey"
        );

        let err = ToolsError::signature("invalid key length");
        assert_eq!(err.to_string(), "Failed to sign request: invalid key length");
    }

    #[test]
    fn yaml_error_keeps_source() {
        let err: ToolsError = serde_yaml::from_str::<Vec<String>>("accessKey: [broken").unwrap_err().into();
        assert!(err.to_string().starts_with("YAML error:"));
        assert!(err.source().is_some());
    }

    #[test]
    fn io_error_keeps_source() {
        let err: ToolsError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed").into();
        assert_eq!(err.to_string(), "IO error: stdout closed");
        assert!(err.source().is_some());
    }

    #[test]
    fn execution_errors() {
        let err = ToolsError::execution("topicRoute", "connect to 127.0.0.1:9876 failed");
        assert_eq!(
            err.to_string(),
            "Sub command 'topicRoute' failed: connect to 127.0.0.1:9876 failed"
        );

        let err = ToolsError::illegal_argument("perm must be 2, 4 or 6");
        assert_eq!(err.to_string(), "Illegal argument: perm must be 2, 4 or 6");
    }
}
