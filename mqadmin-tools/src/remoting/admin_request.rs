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

use std::collections::BTreeMap;
use std::fmt;

use cheetah_string::CheetahString;

use crate::commands::target::Target;

pub const SUCCESS: i32 = 0;
pub const SYSTEM_ERROR: i32 = 1;

/// An admin operation ready to be sent to the cluster.
///
/// `ext_fields` is ordered so that signatures computed over it are stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminRequest {
    command: CheetahString,
    namesrv_addr: Option<CheetahString>,
    target: Option<Target>,
    ext_fields: BTreeMap<CheetahString, CheetahString>,
    body: Option<Vec<u8>>,
}

impl AdminRequest {
    pub fn new(command: impl Into<CheetahString>) -> Self {
        Self {
            command: command.into(),
            namesrv_addr: None,
            target: None,
            ext_fields: BTreeMap::new(),
            body: None,
        }
    }

    pub fn with_namesrv_addr(mut self, namesrv_addr: Option<&str>) -> Self {
        self.namesrv_addr = namesrv_addr.map(CheetahString::from);
        self
    }

    pub fn with_target(mut self, target: Option<Target>) -> Self {
        self.target = target;
        self
    }

    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    #[inline]
    pub fn command(&self) -> &str {
        self.command.as_str()
    }

    #[inline]
    pub fn namesrv_addr(&self) -> Option<&str> {
        self.namesrv_addr.as_ref().map(|addr| addr.as_str())
    }

    #[inline]
    pub fn target(&self) -> Option<&Target> {
        self.target.as_ref()
    }

    #[inline]
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    #[inline]
    pub fn ext_fields(&self) -> &BTreeMap<CheetahString, CheetahString> {
        &self.ext_fields
    }

    pub fn ext_field(&self, key: &str) -> Option<&str> {
        self.ext_fields
            .get(&CheetahString::from(key))
            .map(|value| value.as_str())
    }

    pub fn add_ext_field(&mut self, key: impl Into<CheetahString>, value: impl Into<CheetahString>) {
        self.ext_fields.insert(key.into(), value.into());
    }

    /// Address the request is sent to: the target broker when one is given, otherwise the name
    /// server.
    pub fn remote_addr(&self) -> &str {
        match (&self.target, &self.namesrv_addr) {
            (Some(Target::BrokerAddr(addr)), _) => addr.as_str(),
            (_, Some(namesrv_addr)) => namesrv_addr.as_str(),
            _ => "",
        }
    }
}

impl fmt::Display for AdminRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AdminRequest [command={}, namesrvAddr={:?}, target={:?}, extFields={:?}]",
            self.command, self.namesrv_addr, self.target, self.ext_fields
        )
    }
}

/// Outcome reported by the cluster for one admin request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminResponse {
    code: i32,
    remark: Option<CheetahString>,
}

impl AdminResponse {
    pub fn success() -> Self {
        Self {
            code: SUCCESS,
            remark: None,
        }
    }

    pub fn failure(code: i32, remark: impl Into<CheetahString>) -> Self {
        Self {
            code,
            remark: Some(remark.into()),
        }
    }

    #[inline]
    pub fn code(&self) -> i32 {
        self.code
    }

    #[inline]
    pub fn remark(&self) -> Option<&str> {
        self.remark.as_ref().map(|remark| remark.as_str())
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_addr_prefers_broker_target() {
        let request = AdminRequest::new("updateTopic")
            .with_namesrv_addr(Some("127.0.0.1:9876"))
            .with_target(Some(Target::BrokerAddr("127.0.0.1:10911".into())));
        assert_eq!(request.remote_addr(), "127.0.0.1:10911");
    }

    #[test]
    fn remote_addr_falls_back_to_namesrv() {
        let request = AdminRequest::new("updateTopic")
            .with_namesrv_addr(Some("127.0.0.1:9876"))
            .with_target(Some(Target::ClusterName("DefaultCluster".into())));
        assert_eq!(request.remote_addr(), "127.0.0.1:9876");
        assert_eq!(AdminRequest::new("topicList").remote_addr(), "");
    }

    #[test]
    fn ext_fields_are_sorted_by_key() {
        let mut request = AdminRequest::new("updateKvConfig");
        request.add_ext_field("value", "v");
        request.add_ext_field("key", "k");
        request.add_ext_field("namespace", "ns");
        let keys: Vec<&str> = request.ext_fields().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["key", "namespace", "value"]);
        assert_eq!(request.ext_field("namespace"), Some("ns"));
        assert_eq!(request.ext_field("missing"), None);
    }

    #[test]
    fn response_codes() {
        assert!(AdminResponse::success().is_success());
        let failure = AdminResponse::failure(SYSTEM_ERROR, "broker busy");
        assert!(!failure.is_success());
        assert_eq!(failure.remark(), Some("broker busy"));
    }
}
