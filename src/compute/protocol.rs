// Copyright 2026 Instance Power Contributors
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

//! JSON structures and protocol bits for the Compute API.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::State;

/// Server status reported by the Compute API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerStatus {
    Active,
    Building,
    ShutOff,
    Suspended,
    /// Any other status, lowercased.
    Other(String),
}

/// The parts of a server the power controller cares about.
#[derive(Clone, Debug, Deserialize)]
pub struct Server {
    pub id: String,
    #[serde(deserialize_with = "de_server_status")]
    pub status: ServerStatus,
    #[serde(rename = "OS-EXT-STS:task_state", default)]
    pub task_state: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ServerRoot {
    pub server: Server,
}

/// Server actions used to change the power state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerAction {
    Start,
    Stop,
    Suspend,
    Resume,
}

impl Server {
    /// Lifecycle state string of the server.
    ///
    /// Statuses without a lifecycle counterpart are returned as is, so that
    /// the caller can reject them.
    pub fn lifecycle_state(&self) -> String {
        let task_state = self.task_state.as_deref();
        let state = match self.status {
            ServerStatus::Building => State::Pending,
            ServerStatus::Active => match task_state {
                Some("powering-off") | Some("suspending") => State::Stopping,
                _ => State::Running,
            },
            ServerStatus::ShutOff => match task_state {
                Some("powering-on") => State::Pending,
                _ => State::Stopped,
            },
            ServerStatus::Suspended => match task_state {
                Some("resuming") => State::Pending,
                _ => State::Stopped,
            },
            ServerStatus::Other(ref other) => return other.clone(),
        };
        state.to_string()
    }
}

impl ServerAction {
    /// Request body of the action.
    pub fn body(&self) -> Value {
        let name = match self {
            ServerAction::Start => "os-start",
            ServerAction::Stop => "os-stop",
            ServerAction::Suspend => "suspend",
            ServerAction::Resume => "resume",
        };
        let mut body = Map::new();
        let _ = body.insert(name.to_string(), Value::Null);
        Value::Object(body)
    }
}

fn de_server_status<'de, D>(des: D) -> Result<ServerStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(des)?;
    Ok(match s.as_ref() {
        "ACTIVE" => ServerStatus::Active,
        "BUILD" => ServerStatus::Building,
        "SHUTOFF" => ServerStatus::ShutOff,
        "SUSPENDED" => ServerStatus::Suspended,
        _ => {
            warn!("Got server status {} without a power state counterpart", s);
            ServerStatus::Other(s.to_lowercase())
        }
    })
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::{ServerAction, ServerRoot, ServerStatus};

    fn server(status: &str, task_state: Option<&str>) -> ServerRoot {
        serde_json::from_value(json!({
            "server": {
                "id": "9168b536-cd40-4630-b43f-b259807c6e87",
                "name": "new-server-test",
                "status": status,
                "OS-EXT-STS:task_state": task_state,
                "OS-EXT-STS:vm_state": "active",
                "OS-EXT-STS:power_state": 1
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_server_parse() {
        let root = server("ACTIVE", None);
        assert_eq!(root.server.id, "9168b536-cd40-4630-b43f-b259807c6e87");
        assert_eq!(root.server.status, ServerStatus::Active);
        assert!(root.server.task_state.is_none());
    }

    #[test]
    fn test_server_parse_without_extended_status() {
        let root: ServerRoot = serde_json::from_value(json!({
            "server": {"id": "abcd", "status": "SHUTOFF"}
        }))
        .unwrap();
        assert_eq!(root.server.lifecycle_state(), "stopped");
    }

    #[test]
    fn test_lifecycle_state() {
        let cases = vec![
            ("BUILD", Some("spawning"), "pending"),
            ("BUILD", None, "pending"),
            ("ACTIVE", None, "running"),
            ("ACTIVE", Some("powering-off"), "stopping"),
            ("ACTIVE", Some("suspending"), "stopping"),
            ("ACTIVE", Some("rebooting"), "running"),
            ("SHUTOFF", None, "stopped"),
            ("SHUTOFF", Some("powering-on"), "pending"),
            ("SUSPENDED", None, "stopped"),
            ("SUSPENDED", Some("resuming"), "pending"),
            ("ERROR", None, "error"),
            ("SHELVED_OFFLOADED", None, "shelved_offloaded"),
        ];
        for (status, task_state, expected) in cases {
            let root = server(status, task_state);
            assert_eq!(
                root.server.lifecycle_state(),
                expected,
                "{} / {:?}",
                status,
                task_state
            );
        }
    }

    #[test]
    fn test_action_body() {
        assert_eq!(ServerAction::Start.body(), json!({"os-start": null}));
        assert_eq!(ServerAction::Stop.body(), json!({"os-stop": null}));
        assert_eq!(ServerAction::Suspend.body(), json!({"suspend": null}));
        assert_eq!(ServerAction::Resume.body(), json!({"resume": null}));
    }
}
