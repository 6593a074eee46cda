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

pub fn export_metadata() -> RequestSubCommand {
    RequestSubCommand::new("exportMetadata", "export metadata.")
        .target(true, "choose a broker to export", "choose a cluster to export")
        .arg(opt("filePath", 'f', "export metadata.json path | default /tmp/rocketmq/export"))
        .arg(flag("topic", 't', "only export topic metadata"))
        .arg(flag("subscriptionGroup", 'g', "only export subscriptionGroup metadata"))
        .arg(flag("specialTopic", 's', "need special topic metadata"))
}

pub fn export_configs() -> RequestSubCommand {
    RequestSubCommand::new("exportConfigs", "export configs.")
        .arg(opt("clusterName", 'c', "choose a cluster to export").required(true))
        .arg(opt("filePath", 'f', "export configs.json path | default /tmp/rocketmq/export"))
}

pub fn export_metrics() -> RequestSubCommand {
    RequestSubCommand::new("exportMetrics", "export metrics.")
        .arg(opt("clusterName", 'c', "choose a cluster to export").required(true))
        .arg(opt("filePath", 'f', "export metrics.json path | default /tmp/rocketmq/export"))
}

pub fn export_metadata_in_rocksdb() -> RequestSubCommand {
    RequestSubCommand::new(
        "exportMetadataInRocksDB",
        "export RocksDB kv config (topics/subscriptionGroups).",
    )
    .alias("rocksDBConfigToJson")
    .arg(opt("path", 'p', "Absolute path for the metadata directory").required(true))
    .arg(
        opt(
            "configType",
            't',
            "Name of kv config, e.g. topics/subscriptionGroups",
        )
        .required(true),
    )
    .arg(flag("jsonEnable", 'j', "Json format enable, Default: false"))
}
