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

//! Plain access control of brokers, configured through `plain_acl.yml`.

use crate::commands::opt;
use crate::commands::RequestSubCommand;

pub fn update_acl_config() -> RequestSubCommand {
    RequestSubCommand::new("updateAclConfig", "Update acl config yaml file in broker.")
        .target(true, "update acl config file to which broker", "update acl config file to which cluster")
        .arg(opt("accessKey", 'a', "set accessKey in acl config file").required(true))
        .arg(opt("secretKey", 's', "set secretKey in acl config file").required(true))
        .arg(opt("whiteRemoteAddress", 'w', "set white ip Address for account in acl config file"))
        .arg(opt("defaultTopicPerm", 'i', "set default topicPerm in acl config file"))
        .arg(opt("defaultGroupPerm", 'u', "set default GroupPerm in acl config file"))
        .arg(opt("topicPerms", 't', "set topicPerms list,eg: topicA=DENY,topicD=SUB"))
        .arg(opt("groupPerms", 'g', "set groupPerms list,eg: groupD=DENY,groupD=SUB"))
        .arg(opt("admin", 'm', "set admin flag in acl config file"))
}

pub fn delete_acl_config() -> RequestSubCommand {
    RequestSubCommand::new("deleteAclConfig", "Delete Acl Config Account in broker.")
        .target(true, "delete acl config account from which broker", "delete acl config account from which cluster")
        .arg(opt("accessKey", 'a', "set accessKey in acl config file").required(true))
}

pub fn cluster_acl_config_version() -> RequestSubCommand {
    RequestSubCommand::new(
        "clusterAclConfigVersion",
        "List all of acl config version information in cluster.",
    )
    .target(true, "query acl config version for which broker", "query acl config version for specified cluster")
}

pub fn update_global_white_addr() -> RequestSubCommand {
    RequestSubCommand::new(
        "updateGlobalWhiteAddr",
        "Update global white address for acl Config File in broker.",
    )
    .target(true, "update global white address to which broker", "update global white address to which cluster")
    .arg(
        opt(
            "globalWhiteRemoteAddresses",
            'g',
            "set globalWhiteRemoteAddress list,eg: 10.10.103.*,192.168.0.*",
        )
        .required(true),
    )
}
