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

//! Cloud provider capability.

use super::Result;

/// Control-plane operations consumed from a cloud provider.
///
/// The provider is the sole source of truth for instance state.
pub trait Provider {
    /// Lifecycle state strings of all instance records matching `id`.
    fn describe_instance_states(&self, id: &str) -> Result<Vec<String>>;

    /// Request the instance to be powered on.
    fn start_instance(&self, id: &str) -> Result<()>;

    /// Request the instance to be powered off.
    ///
    /// With `hibernate` set, memory is persisted to storage instead of
    /// being discarded.
    fn stop_instance(&self, id: &str, hibernate: bool) -> Result<()>;
}

#[cfg(test)]
pub(crate) mod test {
    //! Scripted in-memory provider.

    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::Provider;
    use crate::{Error, ErrorKind, Result};

    /// A recorded mutating call.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        Start(String),
        Stop(String, bool),
    }

    /// Provider replaying a predetermined sequence of describe results.
    ///
    /// The last entry repeats once the script is exhausted.
    #[derive(Debug, Default)]
    pub struct ScriptedProvider {
        script: RefCell<VecDeque<Vec<String>>>,
        describes: RefCell<usize>,
        calls: RefCell<Vec<Call>>,
        fail_calls: bool,
    }

    impl ScriptedProvider {
        pub fn new(states: &[&str]) -> ScriptedProvider {
            ScriptedProvider::with_records(states.iter().map(|s| vec![s.to_string()]).collect())
        }

        pub fn with_records(records: Vec<Vec<String>>) -> ScriptedProvider {
            ScriptedProvider {
                script: RefCell::new(records.into()),
                ..Default::default()
            }
        }

        /// Make start and stop requests fail after recording them.
        pub fn failing(mut self) -> ScriptedProvider {
            self.fail_calls = true;
            self
        }

        pub fn describes(&self) -> usize {
            *self.describes.borrow()
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn call_result(&self) -> Result<()> {
            if self.fail_calls {
                Err(Error::from(osauth::Error::new(
                    osauth::ErrorKind::Conflict,
                    "cannot change power state while a task is running",
                )))
            } else {
                Ok(())
            }
        }
    }

    impl Provider for ScriptedProvider {
        fn describe_instance_states(&self, _id: &str) -> Result<Vec<String>> {
            *self.describes.borrow_mut() += 1;
            let mut script = self.script.borrow_mut();
            let next = if script.len() > 1 {
                script.pop_front()
            } else {
                script.front().cloned()
            };
            next.ok_or_else(|| Error::new(ErrorKind::InvalidInput, "script is empty"))
        }

        fn start_instance(&self, id: &str) -> Result<()> {
            self.calls.borrow_mut().push(Call::Start(id.to_string()));
            self.call_result()
        }

        fn stop_instance(&self, id: &str, hibernate: bool) -> Result<()> {
            self.calls
                .borrow_mut()
                .push(Call::Stop(id.to_string(), hibernate));
            self.call_result()
        }
    }

    #[test]
    fn test_scripted_provider_repeats_last() {
        let provider = ScriptedProvider::new(&["pending", "running"]);
        assert_eq!(provider.describe_instance_states("i").unwrap(), vec!["pending"]);
        assert_eq!(provider.describe_instance_states("i").unwrap(), vec!["running"]);
        assert_eq!(provider.describe_instance_states("i").unwrap(), vec!["running"]);
        assert_eq!(provider.describes(), 3);
        assert!(provider.calls().is_empty());
    }

    #[test]
    fn test_scripted_provider_failing_calls() {
        let provider = ScriptedProvider::new(&["running"]).failing();
        let err = provider.stop_instance("i", true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ProviderError);
        assert!(provider.start_instance("i").is_err());
        assert_eq!(
            provider.calls(),
            vec![Call::Stop("i".to_string(), true), Call::Start("i".to_string())]
        );
    }
}
