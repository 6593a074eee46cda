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

use std::fmt;
use std::str::FromStr;

/// Initializes the logger for the admin CLI.
///
/// The level is read from the `RUST_LOG` environment variable and defaults to `WARN`, so that
/// the command output on stdout is not interleaved with diagnostics. Logs go to stderr and
/// include levels and line numbers.
pub fn init_logger() {
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| tracing::Level::from_str(level.trim()).ok())
        .unwrap_or(tracing::Level::WARN);
    install(level);
}

pub fn init_logger_with_level(level: Level) {
    install(level.to_tracing_level());
}

fn install(level: tracing::Level) {
    // A subscriber may already be installed by an embedding process.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_level(true)
        .with_line_number(true)
        .with_target(false)
        .with_max_level(level)
        .try_init();
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Level(&'static str);

impl Level {
    /// Constant representing the ERROR log level.
    pub const ERROR: Level = Level("ERROR");

    /// Constant representing the WARN log level.
    pub const WARN: Level = Level("WARN");

    /// Constant representing the INFO log level.
    pub const INFO: Level = Level("INFO");

    /// Constant representing the DEBUG log level.
    pub const DEBUG: Level = Level("DEBUG");

    /// Constant representing the TRACE log level.
    pub const TRACE: Level = Level("TRACE");

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    fn to_tracing_level(&self) -> tracing::Level {
        match self.0 {
            "ERROR" => tracing::Level::ERROR,
            "WARN" => tracing::Level::WARN,
            "DEBUG" => tracing::Level::DEBUG,
            "TRACE" => tracing::Level::TRACE,
            _ => tracing::Level::INFO,
        }
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(level: &str) -> Result<Self, Self::Err> {
        match level.trim().to_ascii_uppercase().as_str() {
            "ERROR" => Ok(Level::ERROR),
            "WARN" => Ok(Level::WARN),
            "INFO" => Ok(Level::INFO),
            "DEBUG" => Ok(Level::DEBUG),
            "TRACE" => Ok(Level::TRACE),
            other => Err(format!("Invalid log level: {other}")),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_as_str_returns_correct_value() {
        assert_eq!(Level::ERROR.as_str(), "ERROR");
        assert_eq!(Level::WARN.as_str(), "WARN");
        assert_eq!(Level::INFO.as_str(), "INFO");
        assert_eq!(Level::DEBUG.as_str(), "DEBUG");
        assert_eq!(Level::TRACE.as_str(), "TRACE");
    }

    #[test]
    fn level_from_str_is_case_insensitive() {
        assert_eq!("error".parse::<Level>().unwrap(), Level::ERROR);
        assert_eq!("Warn".parse::<Level>().unwrap(), Level::WARN);
        assert_eq!(" INFO ".parse::<Level>().unwrap(), Level::INFO);
        assert!("verbose".parse::<Level>().is_err());
    }

    #[test]
    fn level_maps_to_tracing_level() {
        assert_eq!(Level::DEBUG.to_tracing_level(), tracing::Level::DEBUG);
        assert_eq!(Level::ERROR.to_tracing_level(), tracing::Level::ERROR);
    }

    #[test]
    fn init_logger_twice_does_not_panic() {
        init_logger_with_level(Level::INFO);
        init_logger();
    }
}
