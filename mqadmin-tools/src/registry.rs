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

use mqadmin_error::ToolsError;
use mqadmin_error::ToolsResult;
use tracing::debug;

use crate::commands;
use crate::sub_command::SubCommand;

/// Ordered set of sub commands, populated once and read only afterwards.
///
/// Registration order is the order of the help listing and of lookups.
#[derive(Default)]
pub struct SubCommandRegistry {
    commands: Vec<Arc<dyn SubCommand>>,
}

impl SubCommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in catalog.
    pub fn with_default_commands() -> ToolsResult<Self> {
        let mut registry = Self::new();
        for command in commands::init_command() {
            registry.register(command)?;
        }
        debug!("registered {} sub commands", registry.len());
        Ok(registry)
    }

    /// Appends `command`.
    ///
    /// Fails when the name is blank, or when its name or alias equals (ignoring case) the name
    /// or alias of a command registered earlier. An alias matching its own name is
    /// accepted.
    pub fn register(&mut self, command: Arc<dyn SubCommand>) -> ToolsResult<()> {
        let name = command.command_name();
        if name.trim().is_empty() {
            return Err(ToolsError::invalid_command("sub command name must not be empty"));
        }
        let alias = command.command_alias().filter(|alias| !alias.is_empty());
        for token in std::iter::once(name).chain(alias) {
            if self.find(token).is_some() {
                return Err(ToolsError::duplicate_command(token));
            }
        }
        self.commands.push(command);
        Ok(())
    }

    /// First command, in registration order, whose name or alias equals `name` ignoring case.
    ///
    /// Only ASCII letters are case folded; command names are plain ASCII.
    pub fn find(&self, name: &str) -> Option<Arc<dyn SubCommand>> {
        self.commands
            .iter()
            .find(|command| {
                command.command_name().eq_ignore_ascii_case(name)
                    || command
                        .command_alias()
                        .is_some_and(|alias| !alias.is_empty() && alias.eq_ignore_ascii_case(name))
            })
            .cloned()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn SubCommand>> {
        self.commands.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use clap::ArgMatches;
    use clap::Command;

    use super::*;
    use crate::remoting::RPCHook;
    use crate::sub_command::CommandContext;

    struct NamedCommand {
        name: &'static str,
        alias: Option<&'static str>,
    }

    impl SubCommand for NamedCommand {
        fn command_name(&self) -> &str {
            self.name
        }

        fn command_alias(&self) -> Option<&str> {
            self.alias
        }

        fn command_desc(&self) -> &str {
            "test command"
        }

        fn build_command_line_options(&self, options: Command) -> Command {
            options
        }

        fn execute(
            &self,
            _command_line: &ArgMatches,
            _options: &Command,
            _context: &mut CommandContext<'_>,
            _rpc_hook: Option<Arc<dyn RPCHook>>,
        ) -> ToolsResult<()> {
            Ok(())
        }
    }

    fn command(name: &'static str, alias: Option<&'static str>) -> Arc<dyn SubCommand> {
        Arc::new(NamedCommand { name, alias })
    }

    #[test]
    fn find_by_name_and_alias_ignoring_case() {
        let mut registry = SubCommandRegistry::new();
        registry.register(command("updateTopic", None)).unwrap();
        registry.register(command("listUser", Some("listUsers"))).unwrap();

        assert_eq!(registry.find("UPDATETOPIC").unwrap().command_name(), "updateTopic");
        assert_eq!(registry.find("listusers").unwrap().command_name(), "listUser");
        assert!(registry.find("deleteTopic").is_none());
        assert!(registry.find("").is_none());
    }

    #[test]
    fn find_folds_ascii_case_only() {
        let mut registry = SubCommandRegistry::new();
        registry.register(command("statsÄll", None)).unwrap();

        assert!(registry.find("STATSÄLL").is_some());
        assert!(registry.find("statsäll").is_none());
    }

    #[test]
    fn find_returns_the_registered_instance() {
        let mut registry = SubCommandRegistry::new();
        let registered = command("topicList", None);
        registry.register(registered.clone()).unwrap();

        let first = registry.find("topicList").unwrap();
        let second = registry.find("TOPICLIST").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&first, &registered));
    }

    #[test]
    fn register_rejects_blank_name() {
        let mut registry = SubCommandRegistry::new();
        assert!(matches!(
            registry.register(command(" ", None)),
            Err(ToolsError::InvalidCommand { .. })
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn register_rejects_name_and_alias_collisions() {
        let mut registry = SubCommandRegistry::new();
        registry.register(command("copyUser", Some("copyUsers"))).unwrap();

        for (name, alias) in [
            ("COPYUSER", None),
            ("copyUsers", None),
            ("other", Some("copyuser")),
            ("another", Some("COPYUSERS")),
        ] {
            assert!(
                matches!(
                    registry.register(command(name, alias)),
                    Err(ToolsError::DuplicateCommand { .. })
                ),
                "{name} should collide"
            );
        }
        assert_eq!(registry.len(), 1);

        registry
            .register(command("getControllerMetaData", Some("getControllerMetadata")))
            .unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn iter_keeps_registration_order() {
        let mut registry = SubCommandRegistry::new();
        for name in ["b", "a", "c"] {
            registry.register(command(name, None)).unwrap();
        }
        let names: Vec<&str> = registry.iter().map(|command| command.command_name()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn default_commands_register_without_collision() {
        let registry = SubCommandRegistry::with_default_commands().unwrap();
        assert_eq!(registry.iter().next().unwrap().command_name(), "updateTopic");
        assert!(registry.find("rocksDBConfigToJson").is_some());
        assert!(registry.find("getControllerMetadata").is_some());
    }
}
