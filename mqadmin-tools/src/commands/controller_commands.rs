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

use crate::commands::flag;
use crate::commands::long_opt;
use crate::commands::opt;
use crate::commands::RequestSubCommand;

fn controller_address() -> clap::Arg {
    opt("controllerAddress", 'a', "the address of controller").required(true)
}

pub fn get_controller_metadata() -> RequestSubCommand {
    RequestSubCommand::new("getControllerMetaData", "Get controller cluster's metadata.")
        .alias("getControllerMetadata")
        .arg(controller_address())
}

pub fn get_controller_config() -> RequestSubCommand {
    RequestSubCommand::new("getControllerConfig", "Get controller config.").arg(controller_address())
}

pub fn update_controller_config() -> RequestSubCommand {
    RequestSubCommand::new("updateControllerConfig", "Update controller config.")
        .arg(controller_address())
        .arg(opt("key", 'k', "config key").required(true))
        .arg(opt("value", 'v', "config value").required(true))
}

pub fn elect_master() -> RequestSubCommand {
    RequestSubCommand::new("electMaster", "Re-elect the specified broker as master.")
        .arg(controller_address())
        .arg(opt("brokerAddress", 'b', "The address of the broker which requires to become master").required(true))
        .arg(long_opt("brokerName", "The broker name of the replicas that require to be manipulated").required(true))
        .arg(opt("clusterName", 'c', "the clusterName of broker").required(true))
}

pub fn clean_broker_metadata() -> RequestSubCommand {
    RequestSubCommand::new("cleanBrokerMetadata", "Clean metadata of broker on controller.")
        .arg(controller_address())
        .arg(opt(
            "brokerControllerIdsToClean",
            'b',
            "The brokerController id list which requires to clean metadata. eg: 1;2;3, means that clean broker-1, \
             broker-2 and broker-3",
        ))
        .arg(long_opt("brokerName", "The broker name of the replicas that require to be manipulated").required(true))
        .arg(opt("clusterName", 'c', "the clusterName of broker"))
        .arg(flag(
            "cleanLivingBroker",
            'l',
            "Whether clean up living brokers,default value is false",
        ))
}
