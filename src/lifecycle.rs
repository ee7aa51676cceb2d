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

//! Lifecycle controller: waiting for states and issuing power actions.
//!
//! A start is only issued once the instance is stopped, a stop only once
//! it is running. While the instance is on its way to the required state
//! (`pending` before `running`, `stopping` before `stopped`) the
//! controller polls the provider at a fixed interval. Any other state
//! aborts the operation.

use std::fmt;
use std::thread;
use std::time::{Duration, Instant};

use super::instance::Instance;
use super::provider::Provider;
use super::state::State;
use super::{Error, ErrorKind, Result};

/// Source of time for the polling loop.
pub trait Clock {
    /// Current monotonic time.
    fn now(&self) -> Instant;

    /// Block the calling thread for `duration`.
    fn sleep(&self, duration: Duration);
}

/// Clock backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }

    #[inline]
    fn sleep(&self, duration: Duration) {
        thread::sleep(duration)
    }
}

/// Polling parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitOptions {
    /// Delay between two polls.
    pub delay: Duration,
    /// Give up after this long; `None` waits forever.
    pub timeout: Option<Duration>,
}

impl Default for WaitOptions {
    fn default() -> WaitOptions {
        WaitOptions {
            delay: Duration::from_secs(1),
            timeout: Some(Duration::from_secs(600)),
        }
    }
}

/// Lifecycle controller for one instance.
pub struct Lifecycle<'p, P: Provider + ?Sized, C: Clock = SystemClock> {
    instance: Instance<'p, P>,
    clock: C,
    options: WaitOptions,
    hibernate: bool,
}

/// Waiter for an instance to reach a target state.
struct StateWaiter<'l, 'p, P: Provider + ?Sized, C: Clock> {
    instance: &'l Instance<'p, P>,
    clock: &'l C,
    options: WaitOptions,
    target: State,
    precondition: State,
}

impl<'p, P: Provider + ?Sized> Lifecycle<'p, P> {
    /// Create a controller with the system clock and default options.
    ///
    /// Stopping hibernates by default.
    pub fn new(instance: Instance<'p, P>) -> Lifecycle<'p, P> {
        Lifecycle {
            instance,
            clock: SystemClock,
            options: WaitOptions::default(),
            hibernate: true,
        }
    }
}

impl<'p, P: Provider + ?Sized, C: Clock> Lifecycle<'p, P, C> {
    /// Use a different clock.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> Lifecycle<'p, P, C2> {
        Lifecycle {
            instance: self.instance,
            clock,
            options: self.options,
            hibernate: self.hibernate,
        }
    }

    /// Use different polling options.
    #[inline]
    pub fn with_options(mut self, options: WaitOptions) -> Self {
        self.options = options;
        self
    }

    /// Whether stopping hibernates the instance.
    #[inline]
    pub fn with_hibernate(mut self, hibernate: bool) -> Self {
        self.hibernate = hibernate;
        self
    }

    /// The instance being controlled.
    #[inline]
    pub fn instance(&self) -> &Instance<'p, P> {
        &self.instance
    }

    /// Current state of the instance.
    pub fn show(&self) -> Result<State> {
        self.instance.state()
    }

    /// Wait for the instance to reach `target`.
    ///
    /// Only `Running` and `Stopped` can be waited for. The instance may
    /// pass through `Pending` (for `Running`) or `Stopping` (for `Stopped`)
    /// on its way; any other state fails with `NotReachable`.
    pub fn wait_until(&self, target: State) -> Result<()> {
        let precondition = target.precondition().ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidState,
                format!("cannot wait for transitional state {}", target),
            )
        })?;

        StateWaiter {
            instance: &self.instance,
            clock: &self.clock,
            options: self.options,
            target,
            precondition,
        }
        .wait()
    }

    /// Start the instance once it is stopped.
    ///
    /// Does not wait for the instance to become running.
    pub fn must_start(&self) -> Result<()> {
        match self.wait_until(State::Stopped) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotReachable => {
                return Err(Error::new(
                    ErrorKind::AlreadyRunning,
                    format!("instance {} is already pending or running", self.instance.id()),
                ));
            }
            Err(e) => return Err(e),
        }

        self.instance.start()?;
        info!("Requested start of instance {}", self.instance.id());
        Ok(())
    }

    /// Stop the instance once it is running.
    ///
    /// Does not wait for the instance to become stopped.
    pub fn must_stop(&self) -> Result<()> {
        match self.wait_until(State::Running) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotReachable => {
                return Err(Error::new(
                    ErrorKind::AlreadyStopped,
                    format!("instance {} is already stopping or stopped", self.instance.id()),
                ));
            }
            Err(e) => return Err(e),
        }

        self.instance.stop(self.hibernate)?;
        info!("Requested stop of instance {}", self.instance.id());
        Ok(())
    }
}

impl<'p, P: Provider + ?Sized, C: Clock> fmt::Debug for Lifecycle<'p, P, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Lifecycle")
            .field("instance", &self.instance)
            .field("options", &self.options)
            .field("hibernate", &self.hibernate)
            .finish()
    }
}

impl<'l, 'p, P: Provider + ?Sized, C: Clock> StateWaiter<'l, 'p, P, C> {
    fn timeout_error(&self) -> Error {
        Error::new(
            ErrorKind::OperationTimedOut,
            format!(
                "Timeout waiting for instance {} to reach state {}",
                self.instance.id(),
                self.target
            ),
        )
    }

    fn poll(&self) -> Result<Option<()>> {
        let current = self.instance.state()?;
        if current == self.target {
            debug!("Instance {} reached state {}", self.instance.id(), self.target);
            Ok(Some(()))
        } else if current == self.precondition {
            info!(
                "Still waiting for instance {} to get to state {}, current is {}",
                self.instance.id(),
                self.target,
                current
            );
            Ok(None)
        } else {
            debug!(
                "Instance {} cannot reach state {} from {}",
                self.instance.id(),
                self.target,
                current
            );
            Err(Error::new(
                ErrorKind::NotReachable,
                format!(
                    "instance {} is {}, cannot wait for {}",
                    self.instance.id(),
                    current,
                    self.target
                ),
            ))
        }
    }

    fn wait(self) -> Result<()> {
        // A deadline beyond what Instant can represent is never reached.
        let deadline = self
            .options
            .timeout
            .and_then(|t| self.clock.now().checked_add(t));
        loop {
            if let Some(result) = self.poll()? {
                return Ok(result);
            }

            if let Some(deadline) = deadline {
                if self.clock.now() >= deadline {
                    return Err(self.timeout_error());
                }
            }

            self.clock.sleep(self.options.delay);
        }
    }
}
