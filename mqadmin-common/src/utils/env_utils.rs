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

use std::ffi::OsStr;

use crate::common::mix_all::NAMESRV_ADDR_ENV;
use crate::common::mix_all::NAMESRV_ADDR_PROPERTY;
use crate::common::mix_all::ROCKETMQ_HOME_ENV;
use crate::common::mix_all::ROCKETMQ_HOME_PROPERTY;

/// Utility functions related to environment variables.
///
/// Dotted property keys (`rocketmq.home.dir`) are looked up as environment variables of the
/// same name, so `rocketmq.home.dir=/opt/rocketmq mqadmin ...` behaves like a JVM system
/// property.
pub struct EnvUtils;

impl EnvUtils {
    /// Gets the value of the specified environment variable.
    ///
    /// # Arguments
    ///
    /// * `key` - The name of the environment variable to retrieve.
    ///
    /// # Returns
    ///
    /// An `Option` containing the value of the environment variable, or `None` if the variable is
    /// not set.
    pub fn get_property<K: AsRef<OsStr>>(key: K) -> Option<String> {
        std::env::var(key).ok()
    }

    /// Looks up `property` first and falls back to `env`. Blank values count as unset.
    pub fn get_property_or_env(property: &str, env: &str) -> Option<String> {
        Self::get_property(property)
            .filter(|value| !value.trim().is_empty())
            .or_else(|| Self::get_property(env).filter(|value| !value.trim().is_empty()))
    }

    /// Gets the installation root of RocketMQ, `None` when neither `rocketmq.home.dir` nor
    /// `ROCKETMQ_HOME` is set.
    pub fn get_rocketmq_home() -> Option<String> {
        Self::get_property_or_env(ROCKETMQ_HOME_PROPERTY, ROCKETMQ_HOME_ENV)
    }

    /// Gets the configured name server address list.
    pub fn get_namesrv_addr() -> Option<String> {
        Self::get_property_or_env(NAMESRV_ADDR_PROPERTY, NAMESRV_ADDR_ENV)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_property_non_existing_variable() {
        assert_eq!(EnvUtils::get_property("MQADMIN_NON_EXISTING_VARIABLE"), None);
    }

    #[test]
    fn property_takes_precedence_over_env() {
        std::env::set_var("mqadmin.test.prop", "/from/property");
        std::env::set_var("MQADMIN_TEST_PROP_ENV", "/from/env");
        assert_eq!(
            EnvUtils::get_property_or_env("mqadmin.test.prop", "MQADMIN_TEST_PROP_ENV"),
            Some("/from/property".to_string())
        );
        std::env::remove_var("mqadmin.test.prop");
        std::env::remove_var("MQADMIN_TEST_PROP_ENV");
    }

    #[test]
    fn blank_property_falls_back_to_env() {
        std::env::set_var("mqadmin.test.blank", "  ");
        std::env::set_var("MQADMIN_TEST_BLANK_ENV", "/from/env");
        assert_eq!(
            EnvUtils::get_property_or_env("mqadmin.test.blank", "MQADMIN_TEST_BLANK_ENV"),
            Some("/from/env".to_string())
        );
        std::env::remove_var("mqadmin.test.blank");
        std::env::remove_var("MQADMIN_TEST_BLANK_ENV");
        assert_eq!(
            EnvUtils::get_property_or_env("mqadmin.test.blank", "MQADMIN_TEST_BLANK_ENV"),
            None
        );
    }
}
