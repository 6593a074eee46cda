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

use std::fs;
use std::sync::Arc;

use clap::Arg;
use clap::ArgGroup;
use clap::ArgMatches;
use clap::Command;
use mqadmin_error::ToolsError;
use mqadmin_error::ToolsResult;
use tracing::info;

use crate::commands::opt;
use crate::commands::target::Target;
use crate::remoting::AdminRequest;
use crate::remoting::RPCHook;
use crate::server_util;
use crate::sub_command::CommandContext;
use crate::sub_command::SubCommand;

pub(crate) const BROKER_ADDR: &str = "brokerAddr";
pub(crate) const CLUSTER_NAME: &str = "clusterName";
const TARGET_GROUP: &str = "target";

/// A sub command that turns its arguments into one [`AdminRequest`] named after the command.
///
/// Every option given on the command line is carried as an ext field keyed by its long name.
/// Commands declaring a target through [`RequestSubCommand::target`] address one broker or every
/// broker of a cluster instead. With [`RequestSubCommand::body_file`] the content of the named
/// file becomes the request body.
pub struct RequestSubCommand {
    name: &'static str,
    alias: Option<&'static str>,
    desc: &'static str,
    args: Vec<Arg>,
    groups: Vec<ArgGroup>,
    targeted: bool,
    target_required: bool,
    body_file: Option<&'static str>,
}

impl RequestSubCommand {
    pub fn new(name: &'static str, desc: &'static str) -> Self {
        Self {
            name,
            alias: None,
            desc,
            args: Vec::new(),
            groups: Vec::new(),
            targeted: false,
            target_required: false,
            body_file: None,
        }
    }

    pub fn alias(mut self, alias: &'static str) -> Self {
        self.alias = Some(alias);
        self
    }

    pub fn arg(mut self, arg: Arg) -> Self {
        self.args.push(arg);
        self
    }

    /// Adds `-b/--brokerAddr` and `-c/--clusterName`, at most one of which may be given; with
    /// `required` exactly one.
    pub fn target(mut self, required: bool, broker_help: &'static str, cluster_help: &'static str) -> Self {
        self.args.push(opt(BROKER_ADDR, 'b', broker_help));
        self.args.push(opt(CLUSTER_NAME, 'c', cluster_help));
        self.groups.push(
            ArgGroup::new(TARGET_GROUP)
                .args([BROKER_ADDR, CLUSTER_NAME])
                .required(required),
        );
        self.targeted = true;
        self.target_required = required;
        self
    }

    /// Sends the content of the file named by option `id` as the request body, instead of the
    /// path as an ext field.
    pub fn body_file(mut self, id: &'static str) -> Self {
        self.body_file = Some(id);
        self
    }

    fn resolve_target(&self, command_line: &ArgMatches) -> ToolsResult<Option<Target>> {
        if !self.targeted {
            return Ok(None);
        }
        let cluster_name = server_util::supplied_value(command_line, CLUSTER_NAME);
        let broker_addr = server_util::supplied_value(command_line, BROKER_ADDR);
        let target = if self.target_required {
            Target::new(cluster_name.as_deref(), broker_addr.as_deref()).map(Some)
        } else {
            Target::optional(cluster_name.as_deref(), broker_addr.as_deref())
        };
        target.map_err(|e| ToolsError::execution(self.name, e.to_string()))
    }

    fn build_request(
        &self,
        command_line: &ArgMatches,
        options: &Command,
        context: &CommandContext<'_>,
    ) -> ToolsResult<AdminRequest> {
        let mut request = AdminRequest::new(self.name)
            .with_namesrv_addr(context.config().namesrv_addr())
            .with_target(self.resolve_target(command_line)?);
        for (key, value) in server_util::supplied_command_options(command_line, options) {
            if self.targeted && (key == BROKER_ADDR || key == CLUSTER_NAME) {
                continue;
            }
            if self.body_file == Some(key) {
                let body = fs::read(&value)
                    .map_err(|e| ToolsError::execution(self.name, format!("read {value} failed: {e}")))?;
                request = request.with_body(body);
                continue;
            }
            request.add_ext_field(key, value);
        }
        Ok(request)
    }
}

impl SubCommand for RequestSubCommand {
    fn command_name(&self) -> &str {
        self.name
    }

    fn command_alias(&self) -> Option<&str> {
        self.alias
    }

    fn command_desc(&self) -> &str {
        self.desc
    }

    fn build_command_line_options(&self, options: Command) -> Command {
        options.args(self.args.iter().cloned()).groups(self.groups.iter().cloned())
    }

    fn execute(
        &self,
        command_line: &ArgMatches,
        options: &Command,
        context: &mut CommandContext<'_>,
        rpc_hook: Option<Arc<dyn RPCHook>>,
    ) -> ToolsResult<()> {
        let mut request = self.build_request(command_line, options, context)?;
        let remote_addr = request.remote_addr().to_string();
        if let Some(rpc_hook) = &rpc_hook {
            rpc_hook.do_before_request(&remote_addr, &mut request)?;
        }

        info!("{} sending {}", self.name, request);
        let admin_client = context.admin_client();
        let response = admin_client.invoke(&request, context.out())?;
        if let Some(rpc_hook) = &rpc_hook {
            rpc_hook.do_after_response(&remote_addr, &request, &response);
        }

        if !response.is_success() {
            return Err(ToolsError::execution(
                self.name,
                format!(
                    "CODE: {} DESC: {}",
                    response.code(),
                    response.remark().unwrap_or_default()
                ),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use mqadmin_common::AdminConfig;

    use super::*;
    use crate::acl::session_credentials::SessionCredentials;
    use crate::acl::session_credentials::ACCESS_KEY;
    use crate::acl::session_credentials::SIGNATURE;
    use crate::acl::AclClientRPCHook;
    use crate::admin::AdminClient;
    use crate::commands::flag;
    use crate::remoting::admin_request::SYSTEM_ERROR;
    use crate::remoting::AdminResponse;
    use crate::server_util::ParsedCommandLine;

    #[derive(Default)]
    struct RecordingAdminClient {
        requests: Mutex<Vec<AdminRequest>>,
        response: Option<AdminResponse>,
    }

    impl AdminClient for RecordingAdminClient {
        fn invoke(&self, request: &AdminRequest, _out: &mut dyn std::io::Write) -> ToolsResult<AdminResponse> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(self.response.clone().unwrap_or_else(AdminResponse::success))
        }
    }

    fn update_topic() -> RequestSubCommand {
        RequestSubCommand::new("updateTopic", "Update or create topic.")
            .target(true, "create topic to which broker", "create topic to which cluster")
            .arg(opt("topic", 't', "topic name").required(true))
            .arg(opt("readQueueNums", 'r', "set read queue nums"))
            .arg(flag("order", 'o', "set topic's order"))
    }

    fn run(
        command: &RequestSubCommand,
        args: &[&str],
        client: &RecordingAdminClient,
        rpc_hook: Option<Arc<dyn RPCHook>>,
    ) -> ToolsResult<()> {
        let options = command.build_command_line_options(server_util::build_command_line_options(
            server_util::base_options(command.command_name()),
        ));
        let ParsedCommandLine::Parsed(matches) = server_util::parse_cmd_line(&options, args.iter().copied()) else {
            panic!("arguments {args:?} should parse");
        };
        let config = AdminConfig::new().with_namesrv_addr("127.0.0.1:9876");
        let mut out = Vec::new();
        let mut context = CommandContext::new(&config, client, &mut out);
        command.execute(&matches, &options, &mut context, rpc_hook)
    }

    #[test]
    fn request_carries_target_and_supplied_options() {
        let client = RecordingAdminClient::default();
        run(&update_topic(), &["-c", "DefaultCluster", "-t", "TopicTest"], &client, None).unwrap();

        let requests = client.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.command(), "updateTopic");
        assert_eq!(request.namesrv_addr(), Some("127.0.0.1:9876"));
        assert_eq!(request.target(), Some(&Target::ClusterName("DefaultCluster".into())));
        assert_eq!(request.ext_field("topic"), Some("TopicTest"));
        assert_eq!(request.ext_field(CLUSTER_NAME), None);
        assert_eq!(request.ext_field("readQueueNums"), None);
        assert_eq!(request.ext_field("order"), None);
    }

    #[test]
    fn untargeted_command_keeps_broker_and_cluster_as_fields() {
        let command = RequestSubCommand::new("electMaster", "Re-elect the specified broker as master.")
            .arg(opt(BROKER_ADDR, 'b', "the address of the broker").required(true))
            .arg(opt(CLUSTER_NAME, 'c', "the cluster name").required(true));
        let client = RecordingAdminClient::default();
        run(&command, &["-b", "127.0.0.1:10911", "-c", "DefaultCluster"], &client, None).unwrap();

        let requests = client.requests.lock().unwrap();
        assert_eq!(requests[0].target(), None);
        assert_eq!(requests[0].ext_field(BROKER_ADDR), Some("127.0.0.1:10911"));
        assert_eq!(requests[0].ext_field(CLUSTER_NAME), Some("DefaultCluster"));
    }

    #[test]
    fn rpc_hook_signs_the_request() {
        let client = RecordingAdminClient::default();
        let hook: Arc<dyn RPCHook> = Arc::new(AclClientRPCHook::new(SessionCredentials::with_keys("ak", "sk")));
        run(
            &update_topic(),
            &["-b", "127.0.0.1:10911", "-t", "TopicTest", "-o"],
            &client,
            Some(hook),
        )
        .unwrap();

        let requests = client.requests.lock().unwrap();
        let request = &requests[0];
        assert_eq!(request.remote_addr(), "127.0.0.1:10911");
        assert_eq!(request.ext_field("order"), Some("true"));
        assert_eq!(request.ext_field(ACCESS_KEY), Some("ak"));
        assert!(request.ext_field(SIGNATURE).is_some());
    }

    #[test]
    fn failed_response_is_an_execution_error() {
        let client = RecordingAdminClient {
            response: Some(AdminResponse::failure(SYSTEM_ERROR, "broker busy")),
            ..Default::default()
        };
        let result = run(&update_topic(), &["-c", "DefaultCluster", "-t", "TopicTest"], &client, None);
        match result {
            Err(ToolsError::Execution { command, message }) => {
                assert_eq!(command, "updateTopic");
                assert!(message.contains("broker busy"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn blank_target_is_rejected() {
        let client = RecordingAdminClient::default();
        let result = run(&update_topic(), &["-c", " ", "-t", "TopicTest"], &client, None);
        assert!(matches!(result, Err(ToolsError::Execution { .. })));
        assert!(client.requests.lock().unwrap().is_empty());
    }

    #[test]
    fn body_file_is_sent_as_body() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"[{\"topicName\":\"TopicTest\"}]").unwrap();
        let path = file.path().to_str().unwrap().to_string();
        let command = RequestSubCommand::new("updateTopicList", "create or update topic in batch.")
            .target(true, "create topic to which broker", "create topic to which cluster")
            .arg(opt("filename", 'f', "Path to a file with list of TopicConfig in json format").required(true))
            .body_file("filename");
        let client = RecordingAdminClient::default();
        run(&command, &["-c", "DefaultCluster", "-f", path.as_str()], &client, None).unwrap();

        let requests = client.requests.lock().unwrap();
        assert_eq!(requests[0].body(), Some(&b"[{\"topicName\":\"TopicTest\"}]"[..]));
        assert_eq!(requests[0].ext_field("filename"), None);
    }

    #[test]
    fn unreadable_body_file_is_an_execution_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing.json");
        let command = RequestSubCommand::new("updateSubGroupList", "Update or create subscription group in batch.")
            .target(true, "create groups to which broker", "create groups to which cluster")
            .arg(opt("filename", 'f', "Path to a file").required(true))
            .body_file("filename");
        let client = RecordingAdminClient::default();
        let result = run(
            &command,
            &["-b", "127.0.0.1:10911", "-f", path.to_str().unwrap()],
            &client,
            None,
        );
        assert!(matches!(result, Err(ToolsError::Execution { .. })));
        assert!(client.requests.lock().unwrap().is_empty());
    }
}
