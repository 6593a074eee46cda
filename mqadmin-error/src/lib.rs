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

//! # mqadmin error handling
//!
//! A single error enum shared by the configuration layer, the command registry,
//! the dispatcher and every admin sub command.
//!
//! ```rust
//! use mqadmin_error::ToolsError;
//! use mqadmin_error::ToolsResult;
//!
//! fn require_topic(topic: Option<&str>) -> ToolsResult<&str> {
//!     topic.ok_or_else(|| ToolsError::illegal_argument("topic is required"))
//! }
//! # assert!(require_topic(None).is_err());
//! ```

mod tools_error;

pub use tools_error::ToolsError;

/// Result alias used across the admin tooling.
pub type ToolsResult<T> = std::result::Result<T, ToolsError>;
