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

use std::io;
use std::io::Write;

use crate::registry::SubCommandRegistry;
use crate::server_util;
use crate::sub_command::SubCommand;

/// Lists every registered command with its description, in registration order.
pub fn print_help(registry: &SubCommandRegistry, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "The most commonly used mqadmin commands are:")?;
    for command in registry.iter() {
        writeln!(out, "   {:<35} {}", command.command_name(), command.command_desc())?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "See 'mqadmin help <command>' for more information on a specific command."
    )?;
    Ok(())
}

/// Prints the global options together with the options of `command`.
pub fn print_command_help(command: &dyn SubCommand, out: &mut dyn Write) -> io::Result<()> {
    let options = server_util::build_command_line_options(server_util::base_options(command.command_name()));
    let options = command.build_command_line_options(options);
    write!(out, "{}", server_util::render_command_line_help(&options))
}
