//! CLI test harness
//!
//! Runs the built `dndroll` binary in a clean environment:
//! - `DNDROLL_*` and `RUST_LOG` variables from the caller are removed
//! - extra environment variables can be set per run

use std::path::Path;
use std::process::{Command, Output};

/// Captured result of one `dndroll` invocation
pub struct CliRun {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CliRun {
    fn from_output(output: Output) -> Self {
        Self {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({}): {}", e, self.stdout))
    }

    /// The single line printed for a plain roll, as a number
    pub fn number(&self) -> i64 {
        self.stdout
            .trim()
            .parse()
            .unwrap_or_else(|_| panic!("stdout is not a number: {:?}", self.stdout))
    }
}

/// Builder for a `dndroll` invocation
pub struct Dndroll {
    command: Command,
}

impl Dndroll {
    pub fn new() -> Self {
        let mut command = Command::new(env!("CARGO_BIN_EXE_dndroll"));
        for (key, _) in std::env::vars() {
            if key.starts_with("DNDROLL_") {
                command.env_remove(&key);
            }
        }
        command.env_remove("RUST_LOG");
        Self { command }
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.command.env(key, value);
        self
    }

    pub fn config(mut self, path: &Path) -> Self {
        self.command.arg("--config").arg(path);
        self
    }

    pub fn run(mut self, args: &[&str]) -> CliRun {
        let output = self
            .command
            .args(args)
            .output()
            .expect("Failed to run dndroll");
        CliRun::from_output(output)
    }
}

/// Run `dndroll` with `args` in a clean environment
pub fn dndroll(args: &[&str]) -> CliRun {
    Dndroll::new().run(args)
}
