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

pub fn start_monitoring() -> RequestSubCommand {
    RequestSubCommand::new("startMonitoring", "Start Monitoring.")
}

pub fn stats_all() -> RequestSubCommand {
    RequestSubCommand::new("statsAll", "Topic and Consumer tps stats.")
        .arg(flag("activeTopic", 'a', "print active topic only"))
        .arg(opt("topic", 't', "print select topic only"))
}
