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

//! Configuration context shared by the dispatcher and every sub command.

use std::path::PathBuf;

use crate::common::mix_all::ACL_CONF_TOOLS_FILE;
use crate::utils::env_utils::EnvUtils;

/// Process level settings of one admin invocation.
///
/// The dispatcher owns a single instance, applies the `-n` override to it and then hands it to
/// the sub command by reference. Commands must read the name server address from here instead
/// of the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminConfig {
    namesrv_addr: Option<String>,
    rocketmq_home: Option<PathBuf>,
}

impl AdminConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the configuration from `rocketmq.namesrv.addr`/`NAMESRV_ADDR` and
    /// `rocketmq.home.dir`/`ROCKETMQ_HOME`.
    pub fn from_env() -> Self {
        Self {
            namesrv_addr: EnvUtils::get_namesrv_addr().and_then(normalize),
            rocketmq_home: EnvUtils::get_rocketmq_home().and_then(normalize).map(PathBuf::from),
        }
    }

    pub fn with_namesrv_addr(mut self, namesrv_addr: impl Into<String>) -> Self {
        self.set_namesrv_addr(namesrv_addr);
        self
    }

    pub fn with_rocketmq_home(mut self, rocketmq_home: impl Into<PathBuf>) -> Self {
        self.rocketmq_home = Some(rocketmq_home.into());
        self
    }

    #[inline]
    pub fn namesrv_addr(&self) -> Option<&str> {
        self.namesrv_addr.as_deref()
    }

    /// Replaces the name server address; a blank value clears it.
    pub fn set_namesrv_addr(&mut self, namesrv_addr: impl Into<String>) {
        self.namesrv_addr = normalize(namesrv_addr.into());
    }

    #[inline]
    pub fn rocketmq_home(&self) -> Option<&PathBuf> {
        self.rocketmq_home.as_ref()
    }

    /// Location of the ACL credentials read by the admin tools, `None` without an installation
    /// root.
    pub fn acl_tools_file(&self) -> Option<PathBuf> {
        self.rocketmq_home
            .as_ref()
            .map(|home| home.join(ACL_CONF_TOOLS_FILE.trim_start_matches('/')))
    }
}

fn normalize(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn namesrv_addr_is_trimmed() {
        let config = AdminConfig::new().with_namesrv_addr(" 127.0.0.1:9876 ");
        assert_eq!(config.namesrv_addr(), Some("127.0.0.1:9876"));
    }

    #[test]
    fn blank_namesrv_addr_clears_value() {
        let mut config = AdminConfig::new().with_namesrv_addr("127.0.0.1:9876");
        config.set_namesrv_addr("   ");
        assert_eq!(config.namesrv_addr(), None);
    }

    #[test]
    fn acl_tools_file_is_resolved_under_home() {
        let config = AdminConfig::new().with_rocketmq_home("/opt/rocketmq");
        assert_eq!(
            config.acl_tools_file().as_deref(),
            Some(Path::new("/opt/rocketmq/conf/tools.yml"))
        );
    }

    #[test]
    fn acl_tools_file_requires_home() {
        assert_eq!(AdminConfig::new().acl_tools_file(), None);
    }
}
