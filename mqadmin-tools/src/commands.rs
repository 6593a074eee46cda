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

//! Built-in catalog of `mqadmin` sub commands.

use std::sync::Arc;

use clap::Arg;
use clap::ArgAction;

use crate::sub_command::SubCommand;

pub mod acl_commands;
pub mod auth_commands;
pub mod broker_commands;
pub mod cluster_commands;
pub mod connection_commands;
pub mod consumer_commands;
pub mod container_commands;
pub mod controller_commands;
pub mod export_commands;
pub mod ha_commands;
pub mod message_commands;
pub mod namesrv_commands;
pub mod offset_commands;
pub mod producer_commands;
pub mod queue_commands;
pub mod request_sub_command;
pub mod stats_commands;
pub mod target;
pub mod topic_commands;

pub use request_sub_command::RequestSubCommand;

/// Option taking a value, with a short flag and `--<id>`.
pub(crate) fn opt(id: &'static str, short: char, help: &'static str) -> Arg {
    long_opt(id, help).short(short)
}

/// Option taking a value, reachable only as `--<id>`.
pub(crate) fn long_opt(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .value_name(id)
        .action(ArgAction::Set)
        .help(help)
}

/// Switch without a value.
pub(crate) fn flag(id: &'static str, short: char, help: &'static str) -> Arg {
    Arg::new(id).short(short).long(id).action(ArgAction::SetTrue).help(help)
}

/// Every built-in sub command, in help listing order.
pub fn init_command() -> Vec<Arc<dyn SubCommand>> {
    let commands = vec![
        topic_commands::update_topic(),
        topic_commands::delete_topic(),
        consumer_commands::update_sub_group(),
        consumer_commands::set_consume_mode(),
        consumer_commands::delete_sub_group(),
        broker_commands::update_broker_config(),
        topic_commands::update_topic_perm(),
        topic_commands::topic_route(),
        topic_commands::topic_status(),
        topic_commands::topic_cluster_list(),
        container_commands::add_broker(),
        container_commands::remove_broker(),
        broker_commands::reset_master_flush_offset(),
        broker_commands::broker_status(),
        message_commands::query_msg_by_id(),
        message_commands::query_msg_by_key(),
        message_commands::query_msg_by_unique_key(),
        message_commands::query_msg_by_offset(),
        message_commands::query_msg_trace_by_id(),
        message_commands::print_msg(),
        message_commands::print_msg_by_queue(),
        broker_commands::send_msg_status(),
        broker_commands::broker_consume_stats(),
        connection_commands::producer_connection(),
        connection_commands::consumer_connection(),
        consumer_commands::consumer_progress(),
        consumer_commands::consumer_status(),
        offset_commands::clone_group_offset(),
        producer_commands::producer(),
        cluster_commands::cluster_list(),
        topic_commands::topic_list(),
        namesrv_commands::update_kv_config(),
        namesrv_commands::delete_kv_config(),
        namesrv_commands::wipe_write_perm(),
        namesrv_commands::add_write_perm(),
        offset_commands::reset_offset_by_time(),
        offset_commands::skip_accumulated_message(),
        topic_commands::update_order_conf(),
        broker_commands::clean_expired_cq(),
        broker_commands::delete_expired_commit_log(),
        broker_commands::clean_unused_topic(),
        stats_commands::start_monitoring(),
        stats_commands::stats_all(),
        topic_commands::allocate_mq(),
        message_commands::check_msg_send_rt(),
        cluster_commands::cluster_rt(),
        namesrv_commands::get_namesrv_config(),
        namesrv_commands::update_namesrv_config(),
        broker_commands::get_broker_config(),
        consumer_commands::get_consumer_config(),
        queue_commands::query_cq(),
        message_commands::send_message(),
        message_commands::consume_message(),
        acl_commands::update_acl_config(),
        acl_commands::delete_acl_config(),
        acl_commands::cluster_acl_config_version(),
        acl_commands::update_global_white_addr(),
        topic_commands::update_static_topic(),
        topic_commands::remapping_static_topic(),
        export_commands::export_metadata(),
        export_commands::export_configs(),
        export_commands::export_metrics(),
        export_commands::export_metadata_in_rocksdb(),
        ha_commands::ha_status(),
        ha_commands::get_sync_state_set(),
        ha_commands::get_broker_epoch(),
        controller_commands::get_controller_metadata(),
        controller_commands::get_controller_config(),
        controller_commands::update_controller_config(),
        controller_commands::elect_master(),
        controller_commands::clean_broker_metadata(),
        message_commands::dump_compaction_log(),
        broker_commands::get_cold_data_flow_ctr_info(),
        broker_commands::update_cold_data_flow_ctr_group_config(),
        broker_commands::remove_cold_data_flow_ctr_group_config(),
        broker_commands::set_commit_log_read_ahead_mode(),
        topic_commands::update_topic_list(),
        consumer_commands::update_sub_group_list(),
        broker_commands::switch_timer_engine(),
        auth_commands::create_user(),
        auth_commands::update_user(),
        auth_commands::delete_user(),
        auth_commands::get_user(),
        auth_commands::list_user(),
        auth_commands::copy_user(),
        auth_commands::create_acl(),
        auth_commands::update_acl(),
        auth_commands::delete_acl(),
        auth_commands::get_acl(),
        auth_commands::list_acl(),
        auth_commands::copy_acl(),
    ];
    commands
        .into_iter()
        .map(|command| Arc::new(command) as Arc<dyn SubCommand>)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::server_util;

    #[test]
    fn every_command_schema_is_consistent() {
        for command in init_command() {
            let options = command.build_command_line_options(server_util::build_command_line_options(
                server_util::base_options(command.command_name()),
            ));
            options.debug_assert();
        }
    }

    #[test]
    fn command_options_do_not_shadow_global_options() {
        for command in init_command() {
            let options = command.build_command_line_options(server_util::base_options(command.command_name()));
            for arg in options.get_arguments() {
                assert_ne!(arg.get_short(), Some('n'), "{} reuses -n", command.command_name());
                assert_ne!(arg.get_short(), Some('h'), "{} reuses -h", command.command_name());
                assert_ne!(arg.get_long(), Some(server_util::NAMESRV_ADDR_OPTION));
            }
        }
    }

    #[test]
    fn names_and_aliases_are_unique() {
        let mut seen = HashSet::new();
        for command in init_command() {
            assert!(!command.command_desc().is_empty(), "{} has no description", command.command_name());
            let mut tokens = vec![command.command_name().to_ascii_lowercase()];
            if let Some(alias) = command.command_alias().map(str::to_ascii_lowercase) {
                if !tokens.contains(&alias) {
                    tokens.push(alias);
                }
            }
            for token in tokens {
                assert!(seen.insert(token.clone()), "{token} registered twice");
            }
        }
    }

    #[test]
    fn catalog_order() {
        let commands = init_command();
        let names: Vec<&str> = commands.iter().map(|command| command.command_name()).collect();
        assert_eq!(names.len(), 91);
        assert_eq!(&names[..3], &["updateTopic", "deleteTopic", "updateSubGroup"]);
        assert_eq!(names[75], "setCommitLogReadAheadMode");
        assert_eq!(names[76], "updateTopicList");
        assert_eq!(names.last(), Some(&"copyAcl"));
    }

    #[test]
    fn aliases() {
        let aliases: Vec<(String, String)> = init_command()
            .iter()
            .filter_map(|command| {
                command
                    .command_alias()
                    .map(|alias| (command.command_name().to_string(), alias.to_string()))
            })
            .collect();
        let expected = [
            ("exportMetadataInRocksDB", "rocksDBConfigToJson"),
            ("getControllerMetaData", "getControllerMetadata"),
            ("listUser", "listUsers"),
            ("copyUser", "copyUsers"),
        ];
        assert_eq!(aliases.len(), expected.len());
        for (name, alias) in expected {
            assert!(aliases.contains(&(name.to_string(), alias.to_string())), "{name} -> {alias}");
        }
    }
}
