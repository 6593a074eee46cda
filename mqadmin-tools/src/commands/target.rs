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

/// Where a broker scoped admin request goes: one broker, or every master of a cluster.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Target {
    BrokerAddr(String),
    ClusterName(String),
}

impl Target {
    /// Exactly one of the two must be given.
    pub fn new(cluster_name: Option<&str>, broker_addr: Option<&str>) -> ToolsResult<Self> {
        Self::optional(cluster_name, broker_addr)?.ok_or_else(|| {
            ToolsError::illegal_argument("Exactly one of broker address or cluster name must be specified")
        })
    }

    /// At most one of the two may be given.
    pub fn optional(cluster_name: Option<&str>, broker_addr: Option<&str>) -> ToolsResult<Option<Self>> {
        match (normalize(cluster_name), normalize(broker_addr)) {
            (Some(cluster_name), None) => Ok(Some(Target::ClusterName(cluster_name))),
            (None, Some(broker_addr)) => Ok(Some(Target::BrokerAddr(broker_addr))),
            (None, None) => Ok(None),
            (Some(_), Some(_)) => Err(ToolsError::illegal_argument(
                "Exactly one of broker address or cluster name must be specified",
            )),
        }
    }
}

fn normalize(input: Option<&str>) -> Option<String> {
    input
        .map(|input| input.trim())
        .filter(|input| !input.is_empty())
        .map(|input| input.into())
}

#[cfg(test)]
mod tests {
    use crate::commands::target::Target;

    #[test]
    fn create_valid_cluster_name_target() {
        let cluster_name = Target::new(Some("my-cluster"), None);

        assert_eq!(Target::ClusterName("my-cluster".into()), cluster_name.unwrap());
    }

    #[test]
    fn create_valid_broker_address_target() {
        let broker_addr = Target::new(None, Some(" 127.0.0.1:1111 "));

        assert_eq!(Target::BrokerAddr("127.0.0.1:1111".into()), broker_addr.unwrap());
    }

    #[test]
    fn create_target_too_many_parameters() {
        let result = Target::new(Some("my-cluster"), Some("127.0.0.1:1111"));

        assert!(result.is_err());
    }

    #[test]
    fn create_target_too_few_parameters() {
        assert!(Target::new(None, Some("  ")).is_err());
        assert_eq!(Target::optional(None, None).unwrap(), None);
    }
}
