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

pub fn query_cq() -> RequestSubCommand {
    RequestSubCommand::new("queryCq", "Query cq command.")
        .arg(opt("topic", 't', "topic name").required(true))
        .arg(opt("queue", 'q', "queue num, ie. 1").required(true))
        .arg(opt("index", 'i', "start queue index.").required(true))
        .arg(opt("count", 'c', "how many."))
        .arg(opt("broker", 'b', "broker addr."))
        .arg(opt("consumer", 'g', "consumer group."))
}
