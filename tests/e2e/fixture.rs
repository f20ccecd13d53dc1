//! Shared harness for end-to-end workflows.
//!
//! Each scenario gets its own temp directory; the binary runs with config
//! discovery pointed into the (empty) scenario directory so host machine
//! config never leaks in.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub struct E2EFixture {
    scenario: &'static str,
    dir: TempDir,
}

pub struct CmdOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

impl CmdOutput {
    /// Parse stdout as a single JSON document.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|err| panic!("stdout is not JSON ({err}):\n{}", self.stdout))
    }
}

impl E2EFixture {
    pub fn new(scenario: &'static str) -> Self {
        Self {
            scenario,
            dir: TempDir::new().expect("create scenario dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_index(&self, name: &str, contents: &str) -> PathBuf {
        super::common::write_index(self.dir.path(), name, contents)
    }

    pub fn log_step(&self, step: &str) {
        eprintln!("[{}] {step}", self.scenario);
    }

    pub fn run(&self, args: &[&str]) -> CmdOutput {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> CmdOutput {
        let mut cmd = Command::cargo_bin("sidx").expect("sidx binary");
        cmd.args(args)
            .current_dir(self.dir.path())
            .env("SIDX_CONFIG", self.dir.path().join("config.toml"));
        for (key, value) in env {
            cmd.env(key, value);
        }
        let output = cmd.output().expect("run sidx");
        CmdOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            success: output.status.success(),
        }
    }

    pub fn assert_success(&self, output: &CmdOutput, context: &str) {
        assert!(
            output.success,
            "[{}] {context} failed\nstdout: {}\nstderr: {}",
            self.scenario, output.stdout, output.stderr
        );
    }

    pub fn assert_failure(&self, output: &CmdOutput, context: &str) {
        assert!(
            !output.success,
            "[{}] {context} unexpectedly succeeded\nstdout: {}",
            self.scenario, output.stdout
        );
    }
}
