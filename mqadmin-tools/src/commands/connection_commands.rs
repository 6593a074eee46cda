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

pub fn producer_connection() -> RequestSubCommand {
    RequestSubCommand::new(
        "producerConnection",
        "Query producer's socket connection and client version.",
    )
    .arg(opt("producerGroup", 'g', "producer group name").required(true))
    .arg(opt("topic", 't', "topic name").required(true))
}

pub fn consumer_connection() -> RequestSubCommand {
    RequestSubCommand::new(
        "consumerConnection",
        "Query consumer's socket connection, client version and subscription.",
    )
    .arg(opt("consumerGroup", 'g', "consumer group name").required(true))
    .arg(opt("brokerAddr", 'b', "broker address"))
}
