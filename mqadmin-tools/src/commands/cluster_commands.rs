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
use crate::commands::opt;
use crate::commands::RequestSubCommand;

pub fn cluster_list() -> RequestSubCommand {
    RequestSubCommand::new("clusterList", "List cluster infos.")
        .arg(flag("moreStats", 'm', "Print more stats"))
        .arg(opt("interval", 'i', "specify intervals numbers, it is in seconds"))
        .arg(opt("clusterName", 'c', "which cluster"))
}

pub fn cluster_rt() -> RequestSubCommand {
    RequestSubCommand::new("clusterRT", "List All clusters Message Send RT.")
        .arg(opt("amount", 'a', "message amount | default 100"))
        .arg(opt("size", 's', "message size | default 128 Byte"))
        .arg(opt("cluster", 'c', "cluster name | default display all cluster"))
        .arg(opt("printLog", 'p', "print as tlog | default false"))
        .arg(opt("machineRoom", 'm', "machine room name | default noname"))
        .arg(opt("interval", 'i', "print interval | default 10 seconds"))
}
