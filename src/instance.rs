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

//! Handle to a single compute instance.

use std::fmt;

use super::provider::Provider;
use super::state::State;
use super::{Error, ErrorKind, Result};

/// A compute instance identified by its provider-assigned ID.
///
/// The provider is borrowed: it is built once per process and shared by
/// every call made through the handle.
pub struct Instance<'p, P: Provider + ?Sized> {
    id: String,
    provider: &'p P,
}

impl<'p, P: Provider + ?Sized> Instance<'p, P> {
    /// Create a handle for the instance with the given ID.
    pub fn new<Id: Into<String>>(provider: &'p P, id: Id) -> Instance<'p, P> {
        Instance {
            id: id.into(),
            provider,
        }
    }

    /// Instance unique ID.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Query the current lifecycle state.
    ///
    /// Fails with `InvalidState` unless the provider reports exactly one
    /// record with a known state.
    pub fn state(&self) -> Result<State> {
        trace!("Fetching state of instance {}", self.id);
        let mut records = self.provider.describe_instance_states(&self.id)?;
        let raw = match records.len() {
            1 => records.remove(0),
            0 => {
                return Err(Error::new(
                    ErrorKind::InvalidState,
                    format!("instance {} was not found", self.id),
                ))
            }
            n => {
                return Err(Error::new(
                    ErrorKind::InvalidState,
                    format!("{} records found for instance {}", n, self.id),
                ))
            }
        };
        let state: State = raw.parse()?;
        trace!("Instance {} is {}", self.id, state);
        Ok(state)
    }

    /// Request power on.
    pub fn start(&self) -> Result<()> {
        debug!("Requesting start of instance {}", self.id);
        self.provider.start_instance(&self.id)?;
        debug!("Successfully requested start of instance {}", self.id);
        Ok(())
    }

    /// Request power off, optionally hibernating.
    pub fn stop(&self, hibernate: bool) -> Result<()> {
        debug!(
            "Requesting stop of instance {} (hibernate: {})",
            self.id, hibernate
        );
        self.provider.stop_instance(&self.id, hibernate)?;
        debug!("Successfully requested stop of instance {}", self.id);
        Ok(())
    }
}

impl<'p, P: Provider + ?Sized> fmt::Debug for Instance<'p, P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Instance").field("id", &self.id).finish()
    }
}
