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

//! Routes one `mqadmin` invocation to help output or to a sub command.

use std::error::Error;
use std::ffi::OsString;
use std::io;
use std::io::Write;
use std::sync::Arc;

use clap::ArgMatches;
use clap::Command;
use mqadmin_common::AdminConfig;
use mqadmin_error::ToolsError;
use mqadmin_error::ToolsResult;
use tracing::debug;
use tracing::error;
use tracing::info;
use tracing::warn;

use crate::acl::get_acl_rpc_hook;
use crate::admin::AdminClient;
use crate::help;
use crate::registry::SubCommandRegistry;
use crate::remoting::RPCHook;
use crate::server_util;
use crate::server_util::ParsedCommandLine;
use crate::sub_command::CommandContext;
use crate::sub_command::SubCommand;

const HELP_COMMAND: &str = "help";

/// What a single dispatch did.
#[derive(Debug)]
pub enum DispatchOutcome {
    /// No arguments, every command was listed.
    HelpListed,
    /// `help <command>` printed the options of `command`.
    HelpDescribed { command: String },
    /// No command is registered under `name`.
    CommandNotFound { name: String },
    /// The arguments of `command` were rejected before it ran.
    OptionParseFailed { command: String },
    /// `-h` printed the options of `command` instead of running it.
    HelpRequested { command: String },
    Executed { command: String },
    /// `command` ran and failed; the error has already been reported.
    ExecutionFailed { command: String, error: ToolsError },
}

impl DispatchOutcome {
    /// `false` when a command was selected but did not complete.
    pub fn is_success(&self) -> bool {
        !matches!(
            self,
            DispatchOutcome::ExecutionFailed { .. } | DispatchOutcome::OptionParseFailed { .. }
        )
    }

    /// Name of the resolved command, if the invocation got that far.
    pub fn command(&self) -> Option<&str> {
        match self {
            DispatchOutcome::HelpDescribed { command }
            | DispatchOutcome::OptionParseFailed { command }
            | DispatchOutcome::HelpRequested { command }
            | DispatchOutcome::Executed { command }
            | DispatchOutcome::ExecutionFailed { command, .. } => Some(command.as_str()),
            DispatchOutcome::HelpListed | DispatchOutcome::CommandNotFound { .. } => None,
        }
    }
}

/// Owns the command registry and the configuration of one admin process.
///
/// A `-n <namesrvAddr>` given to a sub command replaces the name server address of the owned
/// [`AdminConfig`] before the command runs, and stays in effect for later dispatches on the same
/// dispatcher. This is the only state a dispatch changes.
pub struct AdminDispatcher {
    registry: SubCommandRegistry,
    config: AdminConfig,
    admin_client: Arc<dyn AdminClient>,
    rpc_hook: Option<Arc<dyn RPCHook>>,
}

impl AdminDispatcher {
    pub fn new(registry: SubCommandRegistry, config: AdminConfig, admin_client: Arc<dyn AdminClient>) -> Self {
        Self {
            registry,
            config,
            admin_client,
            rpc_hook: None,
        }
    }

    /// Uses `rpc_hook` for every command instead of reading the ACL tools file.
    pub fn with_rpc_hook(mut self, rpc_hook: Arc<dyn RPCHook>) -> Self {
        self.rpc_hook = Some(rpc_hook);
        self
    }

    #[inline]
    pub fn registry(&self) -> &SubCommandRegistry {
        &self.registry
    }

    #[inline]
    pub fn config(&self) -> &AdminConfig {
        &self.config
    }

    /// Dispatches `args` (without the program name), writing to stdout and stderr.
    pub fn dispatch<I, S>(&mut self, args: I) -> DispatchOutcome
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let stdout = io::stdout();
        let stderr = io::stderr();
        self.dispatch_to(args, &mut stdout.lock(), &mut stderr.lock())
    }

    /// Dispatches `args` (without the program name) writing regular output to `out` and
    /// diagnostics to `err`.
    ///
    /// Never fails: unknown commands, rejected options and command errors are reported on the
    /// sinks and described by the returned outcome. Arguments need not be valid UTF-8; a command
    /// name that is not resolves to no command, an option value that is not fails to parse.
    pub fn dispatch_to<I, S>(&mut self, args: I, out: &mut dyn Write, err: &mut dyn Write) -> DispatchOutcome
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        match args.as_slice() {
            [] => {
                report_write(help::print_help(&self.registry, out));
                DispatchOutcome::HelpListed
            }
            [keyword, name] if keyword == HELP_COMMAND => {
                let name = name.to_string_lossy();
                match self.registry.find(&name) {
                    Some(command) => {
                        report_write(help::print_command_help(command.as_ref(), out));
                        DispatchOutcome::HelpDescribed {
                            command: command.command_name().to_string(),
                        }
                    }
                    None => command_not_found(&name, out),
                }
            }
            [name, command_args @ ..] => self.run(&name.to_string_lossy(), command_args, out, err),
        }
    }

    fn run(&mut self, name: &str, args: &[OsString], out: &mut dyn Write, err: &mut dyn Write) -> DispatchOutcome {
        let Some(command) = self.registry.find(name) else {
            return command_not_found(name, out);
        };
        let command_name = command.command_name().to_string();
        debug!("resolved {} to sub command {}", name, command_name);

        let options = command.build_command_line_options(server_util::build_command_line_options(
            server_util::base_options(&command_name),
        ));
        let matches = match server_util::parse_cmd_line(&options, args) {
            ParsedCommandLine::Parsed(matches) => matches,
            ParsedCommandLine::HelpRequested(rendered) => {
                report_write(write!(out, "{rendered}"));
                return DispatchOutcome::HelpRequested { command: command_name };
            }
            ParsedCommandLine::Failed(diagnostic) => {
                report_write(write!(err, "{diagnostic}"));
                return DispatchOutcome::OptionParseFailed { command: command_name };
            }
        };

        if let Some(namesrv_addr) = server_util::supplied_value(&matches, server_util::NAMESRV_ADDR_OPTION) {
            debug!("name server address overridden by command line: {}", namesrv_addr);
            self.config.set_namesrv_addr(namesrv_addr);
        }

        match self.execute(command.as_ref(), &matches, &options, out) {
            Ok(()) => DispatchOutcome::Executed { command: command_name },
            Err(e) => {
                error!("{} command failed: {}", command_name, e);
                report_write(write_error(&command_name, &e, err));
                DispatchOutcome::ExecutionFailed {
                    command: command_name,
                    error: e,
                }
            }
        }
    }

    fn execute(
        &self,
        command: &dyn SubCommand,
        matches: &ArgMatches,
        options: &Command,
        out: &mut dyn Write,
    ) -> ToolsResult<()> {
        let rpc_hook = match &self.rpc_hook {
            Some(rpc_hook) => Some(rpc_hook.clone()),
            None => self.acl_rpc_hook()?,
        };
        let mut context = CommandContext::new(&self.config, self.admin_client.as_ref(), out);
        info!("executing sub command {}", command.command_name());
        command.execute(matches, options, &mut context, rpc_hook)
    }

    fn acl_rpc_hook(&self) -> ToolsResult<Option<Arc<dyn RPCHook>>> {
        match self.config.acl_tools_file() {
            Some(path) => get_acl_rpc_hook(path),
            None => {
                debug!("installation root not configured, requests will not be signed");
                Ok(None)
            }
        }
    }
}

fn command_not_found(name: &str, out: &mut dyn Write) -> DispatchOutcome {
    report_write(writeln!(out, "The sub command {name} not exist."));
    DispatchOutcome::CommandNotFound { name: name.to_string() }
}

fn write_error(command_name: &str, e: &ToolsError, err: &mut dyn Write) -> io::Result<()> {
    writeln!(err, "{command_name} command failed")?;
    writeln!(err, "Error: {e}")?;
    let mut source = e.source();
    while let Some(cause) = source {
        writeln!(err, "Caused by: {cause}")?;
        source = cause.source();
    }
    writeln!(err, "{e:?}")
}

fn report_write(result: io::Result<()>) {
    if let Err(e) = result {
        warn!("failed to write mqadmin output: {}", e);
    }
}
