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

//! User and ACL management of the authentication and authorization model.

use crate::commands::opt;
use crate::commands::RequestSubCommand;

pub fn create_user() -> RequestSubCommand {
    RequestSubCommand::new("createUser", "Create user to cluster.")
        .target(true, "create user to which broker", "create user to which cluster")
        .arg(opt("username", 'u', "the username of user to create").required(true))
        .arg(opt("password", 'p', "the password of user to create").required(true))
        .arg(opt("userType", 't', "the userType of user to create"))
}

pub fn update_user() -> RequestSubCommand {
    RequestSubCommand::new("updateUser", "Update user to cluster.")
        .target(true, "update user to which broker", "update user to which cluster")
        .arg(opt("username", 'u', "the username of user to update").required(true))
        .arg(opt("password", 'p', "the password of user to update"))
        .arg(opt("userType", 't', "the userType of user to update"))
        .arg(opt("userStatus", 's', "the userStatus of user to update"))
}

pub fn delete_user() -> RequestSubCommand {
    RequestSubCommand::new("deleteUser", "Delete user from cluster.")
        .target(true, "delete user from which broker", "delete user from which cluster")
        .arg(opt("username", 'u', "the username of user to delete").required(true))
}

pub fn get_user() -> RequestSubCommand {
    RequestSubCommand::new("getUser", "Get user from cluster.")
        .target(true, "get user from which broker", "get user from which cluster")
        .arg(opt("username", 'u', "the username of user to get").required(true))
}

pub fn list_user() -> RequestSubCommand {
    RequestSubCommand::new("listUser", "List user from cluster.")
        .alias("listUsers")
        .target(true, "list user from which broker", "list user from which cluster")
        .arg(opt("filter", 'f', "the filter to list users"))
}

pub fn copy_user() -> RequestSubCommand {
    RequestSubCommand::new("copyUser", "Copy user to cluster.")
        .alias("copyUsers")
        .arg(opt("fromBroker", 'f', "the source broker that the users copy from").required(true))
        .arg(opt("toBroker", 't', "the target broker that the users copy to").required(true))
        .arg(opt("usernames", 'u', "the username list of user to copy."))
}

pub fn create_acl() -> RequestSubCommand {
    RequestSubCommand::new("createAcl", "Create acl to cluster.")
        .target(true, "create acl to which broker", "create acl to which cluster")
        .arg(opt("subject", 's', "the subject of acl to create").required(true))
        .arg(opt("resources", 'r', "the resources of acl to create").required(true))
        .arg(opt("actions", 'a', "the actions of acl to create").required(true))
        .arg(opt("decision", 'd', "the decision of acl to create").required(true))
        .arg(opt("sourceIp", 'i', "the sourceIps of acl to create"))
}

pub fn update_acl() -> RequestSubCommand {
    RequestSubCommand::new("updateAcl", "Update acl to cluster.")
        .target(true, "update acl to which broker", "update acl to which cluster")
        .arg(opt("subject", 's', "the subject of acl to update").required(true))
        .arg(opt("resources", 'r', "the resources of acl to update").required(true))
        .arg(opt("actions", 'a', "the actions of acl to update").required(true))
        .arg(opt("decision", 'd', "the decision of acl to update").required(true))
        .arg(opt("sourceIp", 'i', "the sourceIps of acl to update"))
}

pub fn delete_acl() -> RequestSubCommand {
    RequestSubCommand::new("deleteAcl", "Delete acl from cluster.")
        .target(true, "delete acl from which broker", "delete acl from which cluster")
        .arg(opt("subject", 's', "the subject of acl to delete").required(true))
        .arg(opt("resources", 'r', "the resources of acl to delete"))
}

pub fn get_acl() -> RequestSubCommand {
    RequestSubCommand::new("getAcl", "Get acl from cluster.")
        .target(true, "get acl from which broker", "get acl from which cluster")
        .arg(opt("subject", 's', "the subject of acl to get").required(true))
}

pub fn list_acl() -> RequestSubCommand {
    RequestSubCommand::new("listAcl", "List acl from cluster.")
        .target(true, "list acl from which broker", "list acl from which cluster")
        .arg(opt("subject", 's', "the subject of acl to filter"))
        .arg(opt("resource", 'r', "the resource of acl to filter"))
}

pub fn copy_acl() -> RequestSubCommand {
    RequestSubCommand::new("copyAcl", "Copy acl to cluster.")
        .arg(opt("fromBroker", 'f', "the source broker that the acls copy from").required(true))
        .arg(opt("toBroker", 't', "the target broker that the acls copy to").required(true))
        .arg(opt("subjects", 's', "the subject list of acl to copy."))
}
