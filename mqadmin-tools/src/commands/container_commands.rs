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

use crate::commands::opt;
use crate::commands::RequestSubCommand;

pub fn add_broker() -> RequestSubCommand {
    RequestSubCommand::new("addBroker", "Add a broker to specified container.")
        .arg(opt("brokerContainerAddr", 'c', "Broker container address").required(true))
        .arg(opt("brokerConfigPath", 'b', "Broker config path").required(true))
}

pub fn remove_broker() -> RequestSubCommand {
    RequestSubCommand::new("removeBroker", "Remove a broker from specified container.")
        .arg(opt("brokerContainerAddr", 'c', "Broker container address").required(true))
        .arg(
            opt(
                "brokerIdentity",
                'b',
                "Information to identify a broker: clusterName:brokerName:brokerId",
            )
            .required(true),
        )
}
