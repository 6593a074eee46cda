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

use crate::commands::long_opt;
use crate::commands::opt;
use crate::commands::RequestSubCommand;

const GROUP_RETRY_POLICY_HELP: &str = "the json string of retry policy ( exp: \
     {\"type\":\"EXPONENTIAL\",\"exponentialRetryPolicy\":{\"initial\":5000,\"max\":7200000,\"multiplier\":2}} \
     {\"type\":\"CUSTOMIZED\",\"customizedRetryPolicy\":{\"next\":[1000,5000,10000]}} )";

pub fn update_sub_group() -> RequestSubCommand {
    RequestSubCommand::new("updateSubGroup", "Update or create subscription group.")
        .target(
            true,
            "create subscription group to which broker",
            "create subscription group to which cluster",
        )
        .arg(opt("groupName", 'g', "consumer group name").required(true))
        .arg(opt("consumeEnable", 's', "consume enable"))
        .arg(opt("consumeFromMinEnable", 'm', "from min offset"))
        .arg(opt("consumeBroadcastEnable", 'd', "broadcast"))
        .arg(opt("consumeMessageOrderly", 'o', "consume message orderly"))
        .arg(opt("retryQueueNums", 'q', "retry queue nums"))
        .arg(opt("retryMaxTimes", 'r', "retry max times"))
        .arg(opt("brokerId", 'i', "consumer from which broker id"))
        .arg(opt("whichBrokerWhenConsumeSlowly", 'w', "which broker id when consume slowly"))
        .arg(opt("notifyConsumerIdsChanged", 'a', "notify consumerId changed"))
        .arg(opt("groupRetryPolicy", 'p', GROUP_RETRY_POLICY_HELP))
        .arg(long_opt("attributes", "attribute(+a=b,+c=d,-e)"))
}

pub fn set_consume_mode() -> RequestSubCommand {
    RequestSubCommand::new("setConsumeMode", "set consume mode")
        .target(
            true,
            "create subscription group to which broker",
            "create subscription group to which cluster",
        )
        .arg(opt("topicName", 't', "topic name").required(true))
        .arg(opt("groupName", 'g', "consumer group name").required(true))
        .arg(opt("mode", 'm', "consume mode. PULL/POP").required(true))
        .arg(opt("popShareQueueNum", 'q', "num of queue which share in pop mode"))
}

pub fn delete_sub_group() -> RequestSubCommand {
    RequestSubCommand::new("deleteSubGroup", "Delete subscription group from broker.")
        .target(
            true,
            "delete subscription group from which broker",
            "delete subscription group from which cluster",
        )
        .arg(opt("groupName", 'g', "subscription group name").required(true))
        .arg(opt("removeOffset", 'r', "remove offset"))
}

pub fn consumer_progress() -> RequestSubCommand {
    RequestSubCommand::new("consumerProgress", "Query consumers's progress, speed.")
        .arg(opt("groupName", 'g', "consumer group name"))
        .arg(opt("topicName", 't', "topic name"))
        .arg(opt("showClientIP", 's', "Show Client IP per Queue"))
        .arg(opt(
            "cluster",
            'c',
            "Cluster name or lmq parent topic, lmq is used to find the route.",
        ))
}

pub fn consumer_status() -> RequestSubCommand {
    RequestSubCommand::new("consumerStatus", "Query consumer's internal data structure.")
        .arg(opt("consumerGroup", 'g', "consumer group name").required(true))
        .arg(opt("clientId", 'i', "The consumer's client id"))
        .arg(opt("brokerAddr", 'b', "broker address"))
        .arg(opt("jstack", 's', "Run jstack command in the consumer progress"))
}

pub fn get_consumer_config() -> RequestSubCommand {
    RequestSubCommand::new("getConsumerConfig", "Get consumer config by subscription group name!")
        .arg(opt("groupName", 'g', "subscription group name").required(true))
}

pub fn update_sub_group_list() -> RequestSubCommand {
    RequestSubCommand::new("updateSubGroupList", "Update or create subscription group in batch.")
        .target(true, "create groups to which broker", "create groups to which cluster")
        .arg(
            opt(
                "filename",
                'f',
                "Path to a file with list of SubscriptionGroupConfig in json format",
            )
            .required(true),
        )
        .body_file("filename")
}
