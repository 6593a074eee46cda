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

pub fn query_msg_by_id() -> RequestSubCommand {
    RequestSubCommand::new("queryMsgById", "Query Message by Id.")
        .arg(opt("msgId", 'i', "Message Id").required(true))
        .arg(opt("consumerGroup", 'g', "consumer group name"))
        .arg(opt("clientId", 'd', "The consumer's client id"))
        .arg(opt("sendMessage", 's', "resend message"))
        .arg(opt("unitName", 'u', "unit name"))
        .arg(opt("bodyFormat", 'f', "print message body by the specified format"))
}

pub fn query_msg_by_key() -> RequestSubCommand {
    RequestSubCommand::new("queryMsgByKey", "Query Message by Key.")
        .arg(opt("topic", 't', "Topic name").required(true))
        .arg(opt("msgKey", 'k', "Message Key").required(true))
        .arg(opt("beginTimestamp", 'b', "Begin timestamp(ms). default:0, eg:1676730526212"))
        .arg(opt("endTimestamp", 'e', "End timestamp(ms). default:Long.MAX_VALUE, eg:1676730526212"))
        .arg(opt("maxNum", 'c', "The maximum number of messages returned by the query, default:64"))
}

pub fn query_msg_by_unique_key() -> RequestSubCommand {
    RequestSubCommand::new("queryMsgByUniqueKey", "Query Message by Unique key.")
        .arg(opt("msgId", 'i', "Message Id").required(true))
        .arg(opt("consumerGroup", 'g', "consumer group name"))
        .arg(opt("clientId", 'd', "The consumer's client id"))
        .arg(opt("topic", 't', "The topic of msg").required(true))
        .arg(flag("showAll", 'a', "Print all message, the limit is 32"))
        .arg(opt("beginTimestamp", 'b', "Begin timestamp(ms). default:0, eg:1676730526212"))
        .arg(opt("endTimestamp", 'e', "End timestamp(ms). default:Long.MAX_VALUE, eg:1676730526212"))
        .arg(opt("maxNum", 'c', "The maximum number of messages returned by the query, default:64"))
}

pub fn query_msg_by_offset() -> RequestSubCommand {
    RequestSubCommand::new("queryMsgByOffset", "Query Message by offset.")
        .arg(opt("topic", 't', "topic name").required(true))
        .arg(opt("brokerName", 'b', "Broker Name").required(true))
        .arg(opt("queueId", 'i', "Queue Id").required(true))
        .arg(opt("offset", 'o', "Queue Offset").required(true))
        .arg(opt("bodyFormat", 'f', "print message body by the specified format"))
}

pub fn query_msg_trace_by_id() -> RequestSubCommand {
    RequestSubCommand::new("queryMsgTraceById", "Query a message trace.")
        .arg(opt("msgId", 'i', "Message Id").required(true))
        .arg(opt("traceTopic", 't', "The name value of message trace topic"))
        .arg(opt("beginTimestamp", 'b', "Begin timestamp(ms). default:0, eg:1676730526212"))
        .arg(opt("endTimestamp", 'e', "End timestamp(ms). default:Long.MAX_VALUE, eg:1676730526212"))
        .arg(opt("maxNum", 'c', "The maximum number of messages returned by the query, default:64"))
}

pub fn print_msg() -> RequestSubCommand {
    RequestSubCommand::new("printMsg", "Print Message Detail.")
        .arg(opt("topic", 't', "topic name").required(true))
        .arg(opt("charsetName", 'c', "CharsetName(eg: UTF-8,GBK)"))
        .arg(opt("subExpression", 's', "Subscribe Expression(eg: TagA || TagB)"))
        .arg(opt("beginTimestamp", 'b', "Begin timestamp[currentTimeMillis|yyyy-MM-dd#HH:mm:ss:SSS]"))
        .arg(opt("endTimestamp", 'e', "End timestamp[currentTimeMillis|yyyy-MM-dd#HH:mm:ss:SSS]"))
        .arg(opt("printBody", 'd', "print body"))
        .arg(opt("lmqParentTopic", 'l', "Lmq parent topic, lmq is used to find the route."))
}

pub fn print_msg_by_queue() -> RequestSubCommand {
    RequestSubCommand::new("printMsgByQueue", "Print Message Detail by queueId.")
        .arg(opt("topic", 't', "topic name").required(true))
        .arg(opt("brokerName", 'a', "broker name").required(true))
        .arg(opt("queueId", 'i', "queue id").required(true))
        .arg(opt("charsetName", 'c', "CharsetName(eg: UTF-8,GBK)"))
        .arg(opt("subExpression", 's', "Subscribe Expression(eg: TagA || TagB)"))
        .arg(opt("beginTimestamp", 'b', "Begin timestamp[currentTimeMillis|yyyy-MM-dd#HH:mm:ss:SSS]"))
        .arg(opt("endTimestamp", 'e', "End timestamp[currentTimeMillis|yyyy-MM-dd#HH:mm:ss:SSS]"))
        .arg(flag("printMsg", 'p', "print msg. eg: true|false(default)"))
        .arg(flag("printBody", 'd', "print body. eg: true|false(default)"))
        .arg(flag("calculate", 'f', "calculate by tag. eg: true|false(default)"))
}

pub fn check_msg_send_rt() -> RequestSubCommand {
    RequestSubCommand::new("checkMsgSendRT", "check message send response time.")
        .arg(opt("topic", 't', "topic name").required(true))
        .arg(opt("amount", 'a', "message amount | default 100"))
        .arg(opt("size", 's', "message size | default 128 Byte"))
}

pub fn send_message() -> RequestSubCommand {
    RequestSubCommand::new("sendMessage", "Send a message.")
        .arg(opt("topic", 't', "Topic name").required(true))
        .arg(opt("body", 'p', "UTF-8 string format of the message body").required(true))
        .arg(opt("key", 'k', "Message keys"))
        .arg(opt("tags", 'c', "Message tags"))
        .arg(opt("broker", 'b', "Send message to target broker"))
        .arg(opt("qid", 'i', "Send message to target queue"))
        .arg(opt("msgTraceEnable", 'm', "Message Trace Enable, Default: false"))
}

pub fn consume_message() -> RequestSubCommand {
    RequestSubCommand::new("consumeMessage", "Consume message.")
        .arg(opt("topic", 't', "Topic name").required(true))
        .arg(opt("brokerName", 'b', "Broker name"))
        .arg(opt("offset", 'o', "Queue offset"))
        .arg(opt("queueId", 'i', "Queue Id"))
        .arg(opt("consumerGroup", 'g', "Consumer group name"))
        .arg(opt("beginTimestamp", 's', "Begin timestamp[currentTimeMillis|yyyy-MM-dd#HH:mm:ss:SSS]"))
        .arg(opt("endTimestamp", 'e', "End timestamp[currentTimeMillis|yyyy-MM-dd#HH:mm:ss:SSS]"))
        .arg(opt("MessageNumber", 'c', "Number of massage to be consumed"))
}

pub fn dump_compaction_log() -> RequestSubCommand {
    RequestSubCommand::new("dumpCompactionLog", "parse compaction log to message.")
        .arg(opt("file", 'f', "to dump file name").required(true))
}
