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

pub fn update_topic() -> RequestSubCommand {
    RequestSubCommand::new("updateTopic", "Update or create topic.")
        .target(true, "create topic to which broker", "create topic to which cluster")
        .arg(opt("topic", 't', "topic name").required(true))
        .arg(opt("readQueueNums", 'r', "set read queue nums"))
        .arg(opt("writeQueueNums", 'w', "set write queue nums"))
        .arg(opt("perm", 'p', "set topic's permission(2|4|6), intro[2:W 4:R; 6:RW]"))
        .arg(opt("order", 'o', "set topic's order(true|false)"))
        .arg(opt("unit", 'u', "is unit topic (true|false)"))
        .arg(opt("hasUnitSub", 's', "has unit sub (true|false)"))
        .arg(opt("attributes", 'a', "attribute(+a=b,+c=d,-e)"))
}

pub fn delete_topic() -> RequestSubCommand {
    RequestSubCommand::new("deleteTopic", "Delete topic from broker and NameServer.")
        .arg(opt("topic", 't', "topic name").required(true))
        .arg(opt("clusterName", 'c', "delete topic from which cluster").required(true))
}

pub fn update_topic_perm() -> RequestSubCommand {
    RequestSubCommand::new("updateTopicPerm", "Update topic perm.")
        .target(true, "update topic perm to which broker", "update topic perm to which cluster")
        .arg(opt("topic", 't', "topic name").required(true))
        .arg(opt("perm", 'p', "set topic's permission(2|4|6), intro[2:W; 4:R; 6:RW]").required(true))
}

pub fn topic_route() -> RequestSubCommand {
    RequestSubCommand::new("topicRoute", "Examine topic route info.")
        .arg(opt("topic", 't', "topic name").required(true))
        .arg(flag("list", 'l', "Use list format to print data"))
}

pub fn topic_status() -> RequestSubCommand {
    RequestSubCommand::new("topicStatus", "Examine topic Status info.")
        .arg(opt("topic", 't', "topic name").required(true))
        .arg(opt(
            "cluster",
            'c',
            "cluster name or lmq parent topic, lmq is used to find the route.",
        ))
}

pub fn topic_cluster_list() -> RequestSubCommand {
    RequestSubCommand::new("topicClusterList", "Get cluster info for topic.")
        .arg(opt("topic", 't', "topic name").required(true))
}

pub fn topic_list() -> RequestSubCommand {
    RequestSubCommand::new("topicList", "Fetch all topic list from name server.").arg(flag(
        "clusterModel",
        'c',
        "clusterModel",
    ))
}

pub fn update_order_conf() -> RequestSubCommand {
    RequestSubCommand::new("updateOrderConf", "Create or update or delete order conf.")
        .arg(opt("topic", 't', "topic name").required(true))
        .arg(opt("orderConf", 'v', "set order conf [eg. brokerName1:num;brokerName2:num]"))
        .arg(opt("method", 'm', "option type [eg. put|get|delete]").required(true))
}

pub fn allocate_mq() -> RequestSubCommand {
    RequestSubCommand::new("allocateMQ", "Allocate MQ.")
        .arg(opt("topic", 't', "topic name").required(true))
        .arg(opt("ipList", 'i', "ipList").required(true))
}

pub fn update_static_topic() -> RequestSubCommand {
    RequestSubCommand::new(
        "updateStaticTopic",
        "Update or create static topic, which has fixed number of queues.",
    )
    .target(false, "create topic to which broker", "create topic to which cluster")
    .arg(opt("topic", 't', "topic name").required(true))
    .arg(long_opt("totalQueueNum", "total queue num"))
    .arg(long_opt("mapFile", "The mapping data file name"))
    .arg(long_opt("forceReplace", "Force replace the old mapping"))
}

pub fn remapping_static_topic() -> RequestSubCommand {
    RequestSubCommand::new("remappingStaticTopic", "Remapping static topic.")
        .arg(long_opt("brokers", "remapping static topic to brokers, comma separated"))
        .arg(opt("clusters", 'c', "remapping static topic to clusters, comma separated"))
        .arg(opt("topic", 't', "topic name").required(true))
        .arg(long_opt("mapFile", "The mapping data file name"))
        .arg(long_opt("forceReplace", "Force replace the old mapping"))
}

pub fn update_topic_list() -> RequestSubCommand {
    RequestSubCommand::new("updateTopicList", "create or update topic in batch.")
        .target(true, "create topic to which broker", "create topic to which cluster")
        .arg(opt("filename", 'f', "Path to a file with list of TopicConfig in json format").required(true))
        .body_file("filename")
}
