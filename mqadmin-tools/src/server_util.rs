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

//! Option schema helpers shared by every sub command.
//!
//! A schema is a [`clap::Command`] built with the builder API. Global options are added by
//! [`build_command_line_options`], each sub command then layers its own [`clap::Arg`]s on top.

use clap::error::ErrorKind;
use clap::parser::ValueSource;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use mqadmin_common::common::mix_all::MQ_ADMIN_APP_NAME;
use tracing::debug;

pub const NAMESRV_ADDR_OPTION: &str = "namesrvAddr";
pub const HELP_OPTION: &str = "help";

/// Result of parsing sub command arguments against a schema.
#[derive(Debug)]
pub enum ParsedCommandLine {
    Parsed(ArgMatches),
    /// `-h` was given; carries the rendered help.
    HelpRequested(String),
    /// The parser rejected the arguments; carries its diagnostic and usage.
    Failed(String),
}

/// Empty schema for `mqadmin <command>`, parsing arguments that follow the command name.
pub fn base_options(command_name: &str) -> Command {
    Command::new(MQ_ADMIN_APP_NAME)
        .bin_name(format!("{MQ_ADMIN_APP_NAME} {command_name}"))
        .no_binary_name(true)
        .disable_version_flag(true)
        .args_override_self(true)
}

/// Adds the global options every sub command accepts.
pub fn build_command_line_options(options: Command) -> Command {
    options.arg(
        Arg::new(NAMESRV_ADDR_OPTION)
            .short('n')
            .long(NAMESRV_ADDR_OPTION)
            .value_name("namesrvAddr")
            .action(ArgAction::Set)
            .help("Name server address list, eg: '192.168.0.1:9876;192.168.0.2:9876'"),
    )
}

pub fn parse_cmd_line<I, T>(options: &Command, args: I) -> ParsedCommandLine
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match options.clone().try_get_matches_from(args) {
        Ok(matches) => ParsedCommandLine::Parsed(matches),
        Err(e) if e.kind() == ErrorKind::DisplayHelp => ParsedCommandLine::HelpRequested(e.render().to_string()),
        Err(e) => {
            debug!("option parser rejected arguments: {:?}", e.kind());
            ParsedCommandLine::Failed(e.render().to_string())
        }
    }
}

/// Usage line followed by every option with its value name and description.
pub fn render_command_line_help(options: &Command) -> String {
    let mut options = options.clone();
    options.render_help().to_string()
}

/// Value of `id` when it was given on the command line; defaults do not count.
///
/// Multiple occurrences are joined with `,`. Returns `None` for ids the schema does not declare.
pub fn supplied_value(matches: &ArgMatches, id: &str) -> Option<String> {
    let raw = matches.try_get_raw(id).ok().flatten()?;
    if matches.value_source(id) != Some(ValueSource::CommandLine) {
        return None;
    }
    let values: Vec<String> = raw.map(|value| value.to_string_lossy().into_owned()).collect();
    if values.is_empty() {
        Some("true".to_string())
    } else {
        Some(values.join(","))
    }
}

/// Sub command local options given on the command line, in schema order, keyed by option id.
pub fn supplied_command_options<'a>(matches: &ArgMatches, options: &'a Command) -> Vec<(&'a str, String)> {
    options
        .get_arguments()
        .map(|arg| arg.get_id().as_str())
        .filter(|id| *id != NAMESRV_ADDR_OPTION && *id != HELP_OPTION)
        .filter_map(|id| supplied_value(matches, id).map(|value| (id, value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Command {
        build_command_line_options(base_options("updateTopic"))
            .arg(Arg::new("topic").short('t').long("topic").required(true).help("topic name"))
            .arg(
                Arg::new("order")
                    .short('o')
                    .long("order")
                    .action(ArgAction::SetTrue)
                    .help("set topic's order"),
            )
    }

    #[test]
    fn parse_global_and_local_options() {
        let ParsedCommandLine::Parsed(matches) = parse_cmd_line(&schema(), ["-n", "127.0.0.1:9876", "-t", "T1"])
        else {
            panic!("expected parsed command line");
        };
        assert_eq!(
            supplied_value(&matches, NAMESRV_ADDR_OPTION).as_deref(),
            Some("127.0.0.1:9876")
        );
        assert_eq!(supplied_value(&matches, "topic").as_deref(), Some("T1"));
        assert_eq!(supplied_value(&matches, "order"), None);
        assert_eq!(supplied_value(&matches, "undeclared"), None);
    }

    #[test]
    fn supplied_command_options_skip_globals_and_defaults() {
        let options = schema();
        let ParsedCommandLine::Parsed(matches) =
            parse_cmd_line(&options, ["--namesrvAddr", "127.0.0.1:9876", "-o", "--topic", "T1"])
        else {
            panic!("expected parsed command line");
        };
        let supplied = supplied_command_options(&matches, &options);
        assert_eq!(supplied, vec![("topic", "T1".to_string()), ("order", "true".to_string())]);
    }

    #[test]
    fn help_flag_is_reported_not_exited() {
        match parse_cmd_line(&schema(), ["-h"]) {
            ParsedCommandLine::HelpRequested(help) => assert!(help.contains("--namesrvAddr")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn malformed_arguments_fail_with_diagnostic() {
        match parse_cmd_line(&schema(), ["-t"]) {
            ParsedCommandLine::Failed(message) => assert!(message.contains("error")),
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            parse_cmd_line(&schema(), ["--unknown"]),
            ParsedCommandLine::Failed(_)
        ));
        assert!(matches!(parse_cmd_line(&schema(), Vec::<String>::new()), ParsedCommandLine::Failed(_)));
    }

    #[test]
    fn rendered_help_lists_every_option() {
        let help = render_command_line_help(&schema());
        assert!(help.contains("mqadmin updateTopic"));
        assert!(help.contains("-n, --namesrvAddr <namesrvAddr>"));
        assert!(help.contains("-t, --topic <topic>"));
        assert!(help.contains("-o, --order"));
        assert!(help.contains("-h, --help"));
    }
}
