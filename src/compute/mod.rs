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

//! Power control through the OpenStack Compute API.
//!
//! Servers are mapped onto lifecycle states using their status and task
//! state. Hibernation is implemented with the `suspend` action, and a
//! suspended server is brought back with `resume`.
//!
//! # Example
//!
//! ```rust,no_run
//! use instance_power::compute::ComputeProvider;
//! use instance_power::{Instance, Lifecycle};
//!
//! # fn example() -> instance_power::Result<()> {
//! let provider = ComputeProvider::from_config("cloud-1")?;
//! let instance = Instance::new(&provider, "8a1c355b-2e1e-440a-8aa8-f272df72bc32");
//! Lifecycle::new(instance).must_stop()?;
//! # Ok(()) }
//! ```

mod api;
mod protocol;

use std::fmt;
use std::future::Future;

use osauth::Session;
use tokio::runtime::{Builder as RuntimeBuilder, Runtime};

use self::protocol::{ServerAction, ServerStatus};
use super::provider::Provider;
use super::{Error, ErrorKind, Result};

/// Provider backed by an OpenStack Compute (Nova) endpoint.
///
/// Owns a single-threaded runtime used to block on the asynchronous
/// session.
pub struct ComputeProvider {
    session: Session,
    runtime: Runtime,
}

fn new_runtime() -> Result<Runtime> {
    RuntimeBuilder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| {
            Error::with_source(
                ErrorKind::ProviderError,
                format!("Could not create a runtime: {}", e),
                e,
            )
        })
}

impl ComputeProvider {
    /// Create a provider from an existing session.
    pub fn new(session: Session) -> Result<ComputeProvider> {
        Ok(ComputeProvider {
            session,
            runtime: new_runtime()?,
        })
    }

    /// Create a provider from a `clouds.yaml` entry.
    pub fn from_config<S: AsRef<str>>(cloud_name: S) -> Result<ComputeProvider> {
        let runtime = new_runtime()?;
        let session = runtime.block_on(Session::from_config(cloud_name))?;
        Ok(ComputeProvider { session, runtime })
    }

    /// Create a provider from the `OS_*` environment variables.
    pub fn from_env() -> Result<ComputeProvider> {
        let runtime = new_runtime()?;
        let session = runtime.block_on(Session::from_env())?;
        Ok(ComputeProvider { session, runtime })
    }

    /// Reference to the session in use.
    #[inline]
    pub fn session(&self) -> &Session {
        &self.session
    }

    fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}

impl Provider for ComputeProvider {
    fn describe_instance_states(&self, id: &str) -> Result<Vec<String>> {
        let server = self.block_on(api::get_server(&self.session, id))?;
        Ok(server.iter().map(|s| s.lifecycle_state()).collect())
    }

    fn start_instance(&self, id: &str) -> Result<()> {
        let action = match self.block_on(api::get_server(&self.session, id))? {
            Some(ref server) if server.status == ServerStatus::Suspended => ServerAction::Resume,
            Some(..) => ServerAction::Start,
            None => {
                return Err(Error::new(
                    ErrorKind::InvalidState,
                    format!("instance {} was not found", id),
                ))
            }
        };
        self.block_on(api::server_action(&self.session, id, action))?;
        Ok(())
    }

    fn stop_instance(&self, id: &str, hibernate: bool) -> Result<()> {
        let action = if hibernate {
            ServerAction::Suspend
        } else {
            ServerAction::Stop
        };
        self.block_on(api::server_action(&self.session, id, action))?;
        Ok(())
    }
}

impl fmt::Debug for ComputeProvider {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ComputeProvider")
            .field("session", &self.session)
            .finish()
    }
}
