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

use mqadmin_error::ToolsResult;

use crate::remoting::AdminRequest;
use crate::remoting::AdminResponse;

/// Hook invoked around every admin request, used to sign requests for authorized clusters.
pub trait RPCHook: Send + Sync + 'static {
    fn do_before_request(&self, remote_addr: &str, request: &mut AdminRequest) -> ToolsResult<()>;

    fn do_after_response(&self, remote_addr: &str, request: &AdminRequest, response: &AdminResponse);
}
