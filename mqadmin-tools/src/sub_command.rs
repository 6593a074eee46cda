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

use std::io::Write;
use std::sync::Arc;

use clap::ArgMatches;
use clap::Command;
use mqadmin_common::AdminConfig;
use mqadmin_error::ToolsResult;

use crate::admin::AdminClient;
use crate::remoting::RPCHook;

/// Everything a sub command reads from its surroundings.
///
/// The name server address in `config` already reflects a `-n` given on the command line.
/// Command output goes to [`CommandContext::out`], the regular output sink of the dispatch.
pub struct CommandContext<'a> {
    config: &'a AdminConfig,
    admin_client: &'a dyn AdminClient,
    out: &'a mut dyn Write,
}

impl<'a> CommandContext<'a> {
    pub fn new(config: &'a AdminConfig, admin_client: &'a dyn AdminClient, out: &'a mut dyn Write) -> Self {
        Self {
            config,
            admin_client,
            out,
        }
    }

    #[inline]
    pub fn config(&self) -> &'a AdminConfig {
        self.config
    }

    #[inline]
    pub fn admin_client(&self) -> &'a dyn AdminClient {
        self.admin_client
    }

    #[inline]
    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }
}

/// An administrative operation exposed under its own name on the `mqadmin` command line.
pub trait SubCommand: Send + Sync {
    /// Unique, case-insensitive token that selects this command.
    fn command_name(&self) -> &str;

    /// Optional second token resolving to the same command.
    fn command_alias(&self) -> Option<&str> {
        None
    }

    /// One line summary shown by `mqadmin` without arguments.
    fn command_desc(&self) -> &str;

    /// Returns `options` extended with this command's own arguments.
    fn build_command_line_options(&self, options: Command) -> Command;

    /// Runs the command against parsed arguments.
    ///
    /// `options` is the full schema the arguments were parsed with.
    fn execute(
        &self,
        command_line: &ArgMatches,
        options: &Command,
        context: &mut CommandContext<'_>,
        rpc_hook: Option<Arc<dyn RPCHook>>,
    ) -> ToolsResult<()>;
}
