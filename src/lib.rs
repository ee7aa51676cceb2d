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

//! Power control for a single cloud compute instance.
//!
//! The [Lifecycle](lifecycle/struct.Lifecycle.html) controller waits for an
//! instance to settle in a state from which the requested action makes
//! sense, then issues a start or stop through a
//! [Provider](provider/trait.Provider.html). The
//! [compute](compute/index.html) module provides an implementation for
//! OpenStack clouds.
//!
//! # Example
//!
//! ```rust,no_run
//! use instance_power::compute::ComputeProvider;
//! use instance_power::{Instance, Lifecycle};
//!
//! # fn example() -> instance_power::Result<()> {
//! let provider = ComputeProvider::from_env()?;
//! let instance = Instance::new(&provider, "8a1c355b-2e1e-440a-8aa8-f272df72bc32");
//! let lifecycle = Lifecycle::new(instance);
//! println!("Instance is {}", lifecycle.show()?);
//! lifecycle.must_start()?;
//! # Ok(()) }
//! ```

// NOTE: we do not use generic deny(warnings) to avoid breakages with new
// versions of the compiler. Add more warnings here as you discover them.
// Taken from https://github.com/rust-unofficial/patterns/
#![deny(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    non_shorthand_field_patterns,
    overflowing_literals,
    path_statements,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unsafe_code,
    unused_allocation,
    unused_comparisons,
    unused_parens,
    unused_results,
    while_true
)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod compute;
mod error;
mod instance;
pub mod lifecycle;
pub mod provider;
mod state;

pub use crate::error::{Error, ErrorKind, Result};
pub use crate::instance::Instance;
pub use crate::lifecycle::{Clock, Lifecycle, SystemClock, WaitOptions};
pub use crate::provider::Provider;
pub use crate::state::{Action, State};
