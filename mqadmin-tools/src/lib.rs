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

//! mqadmin - the sub command front end of the RocketMQ admin CLI
//!
//! An invocation names one sub command followed by that command's flags. The dispatcher
//! resolves the command in a registry built once at startup, parses the flags against the
//! global options layered under the command's own, installs the authentication hook and runs
//! the command. Without arguments, or with `help <command>`, it prints help instead.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        AdminDispatcher (dispatcher)     │
//! │  - help / help <cmd> / <cmd> <args>     │
//! │  - -n override of AdminConfig           │
//! │  - ACL hook from conf/tools.yml         │
//! └─────────────────┬───────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────┐
//! │   SubCommandRegistry (registry)         │
//! │  - built-in catalog (commands/)         │
//! │  - name / alias lookup, ignoring case   │
//! └─────────────────┬───────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────┐
//! │   SubCommand::execute                   │
//! │  - AdminRequest signed by RPCHook       │
//! │  - sent through AdminClient (admin/)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Embedding
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use mqadmin_common::AdminConfig;
//! use mqadmin_tools::admin::DryRunAdminClient;
//! use mqadmin_tools::dispatcher::AdminDispatcher;
//! use mqadmin_tools::registry::SubCommandRegistry;
//!
//! let registry = SubCommandRegistry::with_default_commands()?;
//! let mut dispatcher = AdminDispatcher::new(registry, AdminConfig::from_env(), Arc::new(DryRunAdminClient));
//! let outcome = dispatcher.dispatch(["topicList", "-n", "127.0.0.1:9876"]);
//! assert!(outcome.is_success());
//! ```

pub mod acl;
pub mod admin;
pub mod commands;
pub mod dispatcher;
pub mod help;
pub mod registry;
pub mod remoting;
pub mod server_util;
pub mod sub_command;

pub use dispatcher::AdminDispatcher;
pub use dispatcher::DispatchOutcome;
pub use registry::SubCommandRegistry;
pub use sub_command::CommandContext;
pub use sub_command::SubCommand;
