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

use std::sync::Arc;

use mqadmin_common::log::init_logger;
use mqadmin_common::AdminConfig;
use mqadmin_tools::admin::DryRunAdminClient;
use mqadmin_tools::AdminDispatcher;
use mqadmin_tools::SubCommandRegistry;
use tracing::debug;
use tracing::error;

fn main() {
    init_logger();

    let registry = match SubCommandRegistry::with_default_commands() {
        Ok(registry) => registry,
        Err(e) => {
            error!("failed to build the sub command registry: {}", e);
            eprintln!("{e:?}");
            return;
        }
    };
    let mut dispatcher = AdminDispatcher::new(registry, AdminConfig::from_env(), Arc::new(DryRunAdminClient));

    // The exit status stays 0 even when the command fails; the error is already reported.
    let outcome = dispatcher.dispatch(std::env::args_os().skip(1));
    if !outcome.is_success() {
        debug!("dispatch finished with {:?}", outcome);
    }
}
