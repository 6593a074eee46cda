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

pub fn update_broker_config() -> RequestSubCommand {
    RequestSubCommand::new("updateBrokerConfig", "Update broker's config.")
        .target(true, "update which broker", "update which cluster")
        .arg(opt("key", 'k', "config key").required(true))
        .arg(opt("value", 'v', "config value").required(true))
        .arg(opt("updateAllBroker", 'a', "update all brokers include slave"))
}

pub fn reset_master_flush_offset() -> RequestSubCommand {
    RequestSubCommand::new("resetMasterFlushOffset", "Reset master flush offset in slave.")
        .arg(opt("brokerAddr", 'b', "which broker to reset").required(true))
        .arg(opt("offset", 'o', "the offset to reset at").required(true))
}

pub fn broker_status() -> RequestSubCommand {
    RequestSubCommand::new("brokerStatus", "Fetch broker runtime status data.").target(
        true,
        "Broker address",
        "which cluster",
    )
}

pub fn send_msg_status() -> RequestSubCommand {
    RequestSubCommand::new("sendMsgStatus", "send msg to broker.")
        .arg(opt("brokerName", 'b', "Broker Name").required(true))
        .arg(opt("messageSize", 's', "Message Size, Default: 128"))
        .arg(opt("count", 'c', "send message count, Default: 50"))
}

pub fn broker_consume_stats() -> RequestSubCommand {
    RequestSubCommand::new("brokerConsumeStats", "Fetch broker consume stats data.")
        .arg(opt("brokerAddr", 'b', "Broker address").required(true))
        .arg(opt("timeoutMillis", 't', "request timeout Millis"))
        .arg(opt("level", 'l', "threshold of print diff"))
        .arg(opt("order", 'o', "order topic"))
}

pub fn clean_expired_cq() -> RequestSubCommand {
    RequestSubCommand::new("cleanExpiredCQ", "Clean expired ConsumeQueue on broker.")
        .arg(opt("brokerAddr", 'b', "Broker address"))
        .arg(opt("cluster", 'c', "clustername"))
}

pub fn delete_expired_commit_log() -> RequestSubCommand {
    RequestSubCommand::new("deleteExpiredCommitLog", "Delete expired CommitLog files.")
        .arg(opt("brokerAddr", 'b', "Broker address"))
        .arg(opt("cluster", 'c', "cluster name"))
}

pub fn clean_unused_topic() -> RequestSubCommand {
    RequestSubCommand::new("cleanUnusedTopic", "Clean unused topic on broker.")
        .arg(opt("brokerAddr", 'b', "Broker address"))
        .arg(opt("cluster", 'c', "cluster name"))
}

pub fn get_broker_config() -> RequestSubCommand {
    RequestSubCommand::new("getBrokerConfig", "Get broker config by cluster or special broker.").target(
        true,
        "get which broker",
        "get which cluster",
    )
}

pub fn get_cold_data_flow_ctr_info() -> RequestSubCommand {
    RequestSubCommand::new("getColdDataFlowCtrInfo", "Get cold data flow ctr info.").target(
        true,
        "get from which broker",
        "get from which cluster",
    )
}

pub fn update_cold_data_flow_ctr_group_config() -> RequestSubCommand {
    RequestSubCommand::new(
        "updateColdDataFlowCtrGroupConfig",
        "Add or update cold data flow ctr group config.",
    )
    .target(true, "update which broker", "update which cluster")
    .arg(opt("consumerGroup", 'g', "specific consumerGroup").required(true))
    .arg(opt("threshold", 'v', "cold read threshold value").required(true))
}

pub fn remove_cold_data_flow_ctr_group_config() -> RequestSubCommand {
    RequestSubCommand::new(
        "removeColdDataFlowCtrGroupConfig",
        "Remove consumer from cold ctr config.",
    )
    .target(true, "update which broker", "update which cluster")
    .arg(opt("consumerGroup", 'g', "the consumer group will remove from the config").required(true))
}

pub fn set_commit_log_read_ahead_mode() -> RequestSubCommand {
    RequestSubCommand::new(
        "setCommitLogReadAheadMode",
        "Set read ahead mode for all commitlog files.",
    )
    .target(true, "set which broker", "set which cluster")
    .arg(
        opt(
            "commitLogReadAheadMode",
            'm',
            "set the CommitLog read ahead mode; 0 is default, 1 random read",
        )
        .required(true),
    )
}

pub fn switch_timer_engine() -> RequestSubCommand {
    RequestSubCommand::new("switchTimerEngine", "Switch the engine of timer message in broker.")
        .target(true, "update which broker", "update which cluster")
        .arg(opt("engineType", 'e', "R/r means RocksDBTimeline, F/f means TimingWheel").required(true))
}
