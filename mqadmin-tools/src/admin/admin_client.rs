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

use mqadmin_error::ToolsResult;
use tabled::settings::Style;
use tabled::Table;
use tabled::Tabled;
use tracing::info;

use crate::commands::target::Target;
use crate::remoting::AdminRequest;
use crate::remoting::AdminResponse;

/// Carries admin requests to the cluster and reports the cluster's answer.
pub trait AdminClient: Send + Sync {
    /// Sends `request`; anything meant for the user is written to `out`.
    fn invoke(&self, request: &AdminRequest, out: &mut dyn Write) -> ToolsResult<AdminResponse>;
}

/// Writes every request to the output sink instead of sending it, answering success.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunAdminClient;

impl DryRunAdminClient {
    pub fn render(&self, request: &AdminRequest) -> String {
        let mut rows = vec![RequestField::new("command", request.command())];
        if let Some(namesrv_addr) = request.namesrv_addr() {
            rows.push(RequestField::new("namesrvAddr", namesrv_addr));
        }
        match request.target() {
            Some(Target::BrokerAddr(broker_addr)) => rows.push(RequestField::new("brokerAddr", broker_addr)),
            Some(Target::ClusterName(cluster_name)) => rows.push(RequestField::new("clusterName", cluster_name)),
            None => {}
        }
        for (key, value) in request.ext_fields() {
            rows.push(RequestField::new(key.as_str(), value.as_str()));
        }
        if let Some(body) = request.body() {
            rows.push(RequestField::new("body", format!("{} bytes", body.len())));
        }

        let mut table = Table::new(&rows);
        table.with(Style::extended());

        format!("Admin request (dry run, not sent)\n{table}")
    }
}

impl AdminClient for DryRunAdminClient {
    fn invoke(&self, request: &AdminRequest, out: &mut dyn Write) -> ToolsResult<AdminResponse> {
        info!("dry run of {} against {}", request.command(), request.remote_addr());
        writeln!(out, "{}", self.render(request))?;
        Ok(AdminResponse::success())
    }
}

#[derive(Tabled)]
struct RequestField {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    value: String,
}

impl RequestField {
    fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_lists_every_request_field() {
        let mut request = AdminRequest::new("updateTopic")
            .with_namesrv_addr(Some("127.0.0.1:9876"))
            .with_target(Some(Target::ClusterName("DefaultCluster".into())));
        request.add_ext_field("topic", "TopicTest");

        let rendered = DryRunAdminClient.render(&request);
        for expected in [
            "Field",
            "Value",
            "updateTopic",
            "127.0.0.1:9876",
            "clusterName",
            "DefaultCluster",
            "TopicTest",
        ] {
            assert!(rendered.contains(expected), "missing {expected} in\n{rendered}");
        }
        assert!(!rendered.contains("brokerAddr"));
    }

    #[test]
    fn dry_run_writes_to_out_and_answers_success() {
        let mut out = Vec::new();
        let response = DryRunAdminClient
            .invoke(&AdminRequest::new("clusterList"), &mut out)
            .unwrap();
        assert!(response.is_success());
        assert!(String::from_utf8(out).unwrap().contains("clusterList"));
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "Broken pipe"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn closed_output_is_an_error() {
        let result = DryRunAdminClient.invoke(&AdminRequest::new("clusterList"), &mut ClosedPipe);
        assert!(matches!(result, Err(mqadmin_error::ToolsError::Io(_))));
    }
}
