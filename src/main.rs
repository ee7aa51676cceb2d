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

use std::process;

use args::Args;
use clap::Parser;
use env_logger::Env;
use instance_power::compute::ComputeProvider;
use instance_power::{Action, Instance, Lifecycle, Result};

mod args;

fn run(args: &Args) -> Result<()> {
    let provider = match args.os_cloud {
        Some(ref cloud) => {
            log::debug!("Loading cloud {} from clouds.yaml", cloud);
            ComputeProvider::from_config(cloud)?
        }
        None => {
            log::debug!("Loading cloud credentials from the environment");
            ComputeProvider::from_env()?
        }
    };

    let instance = Instance::new(&provider, args.instance.as_str());
    let lifecycle = Lifecycle::new(instance)
        .with_options(args.wait_options())
        .with_hibernate(!args.no_hibernate);

    match args.action {
        Action::Start => lifecycle.must_start(),
        Action::Stop => lifecycle.must_stop(),
        Action::Show => {
            println!("{}", lifecycle.show()?);
            Ok(())
        }
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    log::debug!("Running {} on instance {}", args.action, args.instance);

    if let Err(err) = run(&args) {
        log::error!("Failed to {} instance {}: {}", args.action, args.instance, err);
        process::exit(1);
    }
}
