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

pub fn update_kv_config() -> RequestSubCommand {
    RequestSubCommand::new("updateKvConfig", "Create or update KV config.")
        .arg(opt("namespace", 's', "set the namespace").required(true))
        .arg(opt("key", 'k', "set the key name").required(true))
        .arg(opt("value", 'v', "set the key value").required(true))
}

pub fn delete_kv_config() -> RequestSubCommand {
    RequestSubCommand::new("deleteKvConfig", "Delete KV config.")
        .arg(opt("namespace", 's', "set the namespace").required(true))
        .arg(opt("key", 'k', "set the key name").required(true))
}

pub fn wipe_write_perm() -> RequestSubCommand {
    RequestSubCommand::new(
        "wipeWritePerm",
        "Wipe write perm of broker in all name server you defined in the -n param.",
    )
    .arg(opt("brokerName", 'b', "broker name").required(true))
}

pub fn add_write_perm() -> RequestSubCommand {
    RequestSubCommand::new(
        "addWritePerm",
        "Add write perm of broker in all name server you defined in the -n param.",
    )
    .arg(opt("brokerName", 'b', "broker name").required(true))
}

pub fn get_namesrv_config() -> RequestSubCommand {
    RequestSubCommand::new("getNamesrvConfig", "Get configs of name server.")
}

pub fn update_namesrv_config() -> RequestSubCommand {
    RequestSubCommand::new("updateNamesrvConfig", "Update configs of name server.")
        .arg(opt("key", 'k', "config key").required(true))
        .arg(opt("value", 'v', "config value").required(true))
}
