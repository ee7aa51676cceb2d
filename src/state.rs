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

//! Actions and lifecycle states.

use std::fmt;
use std::str::FromStr;

use super::{Error, ErrorKind};

/// Action requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Power the instance on.
    Start,
    /// Power the instance off.
    Stop,
    /// Print the current state.
    Show,
}

/// Lifecycle state of an instance as reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Instance is booting.
    Pending,
    /// Instance is up.
    Running,
    /// Instance is shutting down.
    Stopping,
    /// Instance is down.
    Stopped,
}

impl Action {
    /// String representation used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Start => "start",
            Action::Stop => "stop",
            Action::Show => "show",
        }
    }
}

impl State {
    /// String representation used by the provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Pending => "pending",
            State::Running => "running",
            State::Stopping => "stopping",
            State::Stopped => "stopped",
        }
    }

    /// The only state tolerated while waiting for this one.
    ///
    /// Returns `None` for transitional states, which cannot be waited for.
    pub fn precondition(&self) -> Option<State> {
        match self {
            State::Running => Some(State::Pending),
            State::Stopped => Some(State::Stopping),
            State::Pending | State::Stopping => None,
        }
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Action, Error> {
        match s {
            "start" => Ok(Action::Start),
            "stop" => Ok(Action::Stop),
            "show" => Ok(Action::Show),
            other => Err(Error::new(
                ErrorKind::InvalidInput,
                format!("unknown action {:?}, expected start, stop or show", other),
            )),
        }
    }
}

impl FromStr for State {
    type Err = Error;

    fn from_str(s: &str) -> Result<State, Error> {
        match s {
            "pending" => Ok(State::Pending),
            "running" => Ok(State::Running),
            "stopping" => Ok(State::Stopping),
            "stopped" => Ok(State::Stopped),
            other => Err(Error::new(
                ErrorKind::InvalidState,
                format!("unknown instance state {:?}", other),
            )),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::{Action, State};
    use crate::ErrorKind;

    #[test]
    fn test_action_from_str() {
        assert_eq!("start".parse::<Action>().unwrap(), Action::Start);
        assert_eq!("stop".parse::<Action>().unwrap(), Action::Stop);
        assert_eq!("show".parse::<Action>().unwrap(), Action::Show);
        for bad in &["", "Start", "restart", "show "] {
            let err = bad.parse::<Action>().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput);
        }
    }

    #[test]
    fn test_state_round_trip() {
        for s in &["running", "pending", "stopped", "stopping"] {
            let state: State = s.parse().unwrap();
            assert_eq!(&state.to_string(), s);
        }
    }

    #[test]
    fn test_state_unknown() {
        for bad in &["terminated", "shutting-down", "RUNNING", ""] {
            let err = bad.parse::<State>().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidState);
        }
    }

    #[test]
    fn test_state_precondition() {
        assert_eq!(State::Running.precondition(), Some(State::Pending));
        assert_eq!(State::Stopped.precondition(), Some(State::Stopping));
        assert_eq!(State::Pending.precondition(), None);
        assert_eq!(State::Stopping.precondition(), None);
    }
}
