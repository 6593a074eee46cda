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

pub fn clone_group_offset() -> RequestSubCommand {
    RequestSubCommand::new("cloneGroupOffset", "clone offset from other group.")
        .arg(opt("srcGroup", 's', "set source consumer group").required(true))
        .arg(opt("destGroup", 'd', "set destination consumer group").required(true))
        .arg(opt("topic", 't', "set the topic").required(true))
        .arg(opt("offline", 'o', "the group or the topic is offline"))
}

pub fn reset_offset_by_time() -> RequestSubCommand {
    RequestSubCommand::new(
        "resetOffsetByTime",
        "Reset consumer offset by timestamp(without client restart).",
    )
    .arg(opt("group", 'g', "set the consumer group").required(true))
    .arg(opt("topic", 't', "set the topic").required(true))
    .arg(
        opt(
            "timestamp",
            's',
            "set the timestamp[now|currentTimeMillis|yyyy-MM-dd#HH:mm:ss:SSS]",
        )
        .required(true),
    )
    .arg(opt("force", 'f', "set the force rollback by timestamp switch[true|false]"))
    .arg(opt("cplus", 'c', "reset c++ client offset"))
    .arg(opt("broker", 'b', "broker addr"))
    .arg(opt("queue", 'q', "queue id"))
    .arg(opt("offset", 'o', "Expect queue offset, not support old version broker"))
}

pub fn skip_accumulated_message() -> RequestSubCommand {
    RequestSubCommand::new(
        "skipAccumulatedMessage",
        "Skip all messages that are accumulated (not consumed) currently.",
    )
    .arg(opt("group", 'g', "set the consumer group").required(true))
    .arg(opt("topic", 't', "set the topic").required(true))
    .arg(opt("cluster", 'c', "cluster name"))
    .arg(opt("force", 'f', "set the force rollback by timestamp switch[true|false]"))
}
