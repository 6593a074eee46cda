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

pub fn ha_status() -> RequestSubCommand {
    RequestSubCommand::new("haStatus", "Fetch ha runtime status data.")
        .target(true, "which broker to fetch", "which cluster")
        .arg(opt("interval", 'i', "the interval(second) of get info"))
}

pub fn get_sync_state_set() -> RequestSubCommand {
    RequestSubCommand::new("getSyncStateSet", "Fetch syncStateSet for target brokers.")
        .arg(opt("controllerAddress", 'a', "the address of controller").required(true))
        .arg(opt("brokerName", 'b', "which broker to fetch"))
        .arg(opt("clusterName", 'c', "which cluster"))
        .arg(opt("interval", 'i', "the interval(second) of get info"))
}

pub fn get_broker_epoch() -> RequestSubCommand {
    RequestSubCommand::new("getBrokerEpoch", "Fetch broker epoch entries.")
        .arg(opt("brokerName", 'b', "which broker to fetch"))
        .arg(opt("clusterName", 'c', "which cluster"))
        .arg(opt("interval", 'i', "the interval(second) of get info"))
}
