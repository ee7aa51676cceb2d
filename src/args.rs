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

use std::time::Duration;

use clap::{ArgAction, Parser};
use instance_power::{Action, WaitOptions};

#[derive(Parser, Debug, PartialEq)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Action to perform: start, stop or show
    #[arg(value_parser = parse_action)]
    pub action: Action,

    /// ID of the instance
    #[arg(env = "INSTANCE_ID", long, short, required = true)]
    pub instance: String,

    /// Cloud entry in clouds.yaml, OS_* variables are used when missing
    #[arg(env = "OS_CLOUD", long, short = 'c')]
    pub os_cloud: Option<String>,

    /// Seconds to wait for the instance to settle, 0 waits forever
    #[arg(env = "INSTANCE_POWER_TIMEOUT", long, short, default_value = "600")]
    pub timeout: u64,

    /// Seconds between two state checks
    #[arg(
        env = "INSTANCE_POWER_INTERVAL",
        long,
        default_value = "1",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub interval: u64,

    /// Power off instead of hibernating on stop
    #[arg(long, action = ArgAction::SetTrue)]
    pub no_hibernate: bool,
}

impl Args {
    pub fn wait_options(&self) -> WaitOptions {
        WaitOptions {
            delay: Duration::from_secs(self.interval),
            timeout: match self.timeout {
                0 => None,
                secs => Some(Duration::from_secs(secs)),
            },
        }
    }
}

fn parse_action(arg: &str) -> Result<Action, String> {
    arg.parse().map_err(|err: instance_power::Error| err.to_string())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use clap::Parser;
    use instance_power::Action;

    use super::{parse_action, Args};

    #[test]
    fn test_parse_action() {
        let tests = vec![
            ("start", Ok(Action::Start)),
            ("stop", Ok(Action::Stop)),
            ("show", Ok(Action::Show)),
        ];
        for (test, expected) in tests {
            let result = parse_action(test);
            assert_eq!(
                result, expected,
                "Result {result:?} didn't match Expected {expected:?}",
            );
        }
        assert!(parse_action("reboot").is_err());
    }

    #[test]
    fn test_args() {
        let args = Args::try_parse_from(
            "instance-power -i i-08725fdb6f33ea8dd -t 30 --interval 2 --no-hibernate stop"
                .split(' '),
        )
        .unwrap();
        assert_eq!(args.action, Action::Stop);
        assert_eq!(args.instance, "i-08725fdb6f33ea8dd");
        assert!(args.no_hibernate);
        let options = args.wait_options();
        assert_eq!(options.delay, Duration::from_secs(2));
        assert_eq!(options.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_args_unbounded_wait() {
        let args =
            Args::try_parse_from("instance-power -i abcd --timeout 0 start".split(' ')).unwrap();
        assert_eq!(args.action, Action::Start);
        assert!(!args.no_hibernate);
        assert_eq!(args.wait_options().timeout, None);
    }

    #[test]
    fn test_args_usage_errors() {
        let tests = vec![
            "instance-power -i abcd",
            "instance-power -i abcd restart",
            "instance-power -i abcd start stop",
            "instance-power -i abcd --interval 0 show",
        ];
        for test in tests {
            assert!(
                Args::try_parse_from(test.split(' ')).is_err(),
                "{test} should not parse"
            );
        }
    }
}
