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

//! Foundation bits exposing the Compute API.

use osauth::services::COMPUTE;
use osauth::{ErrorKind, Session};

use super::protocol::*;

/// Get a server by its ID, `None` if it does not exist.
pub async fn get_server<S: AsRef<str>>(
    session: &Session,
    id: S,
) -> Result<Option<Server>, osauth::Error> {
    trace!("Fetching server {}", id.as_ref());
    match session
        .get(COMPUTE, &["servers", id.as_ref()])
        .fetch::<ServerRoot>()
        .await
    {
        Ok(root) => {
            trace!(
                "Server {} has status {:?}, task state {:?}",
                root.server.id,
                root.server.status,
                root.server.task_state
            );
            Ok(Some(root.server))
        }
        Err(err) if err.kind() == ErrorKind::ResourceNotFound => {
            debug!("Server {} was not found", id.as_ref());
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Run an action against a server.
pub async fn server_action<S: AsRef<str>>(
    session: &Session,
    id: S,
    action: ServerAction,
) -> Result<(), osauth::Error> {
    trace!("Running {:?} on server {}", action, id.as_ref());
    let _ = session
        .post(COMPUTE, &["servers", id.as_ref(), "action"])
        .json(&action.body())
        .send()
        .await?;
    debug!("Successfully ran {:?} on server {}", action, id.as_ref());
    Ok(())
}
