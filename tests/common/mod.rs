#![allow(dead_code)]

pub mod mock_data;

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Helper struct to run trellis commands against an isolated root directory
pub struct TrellisTest {
    pub temp_dir: TempDir,
    binary_path: PathBuf,
}

impl TrellisTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        TrellisTest {
            temp_dir,
            binary_path: PathBuf::from(env!("CARGO_BIN_EXE_trellis")),
        }
    }

    /// Directory used as `TRELLIS_ROOT`
    pub fn root(&self) -> PathBuf {
        self.temp_dir.path().join("root")
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.binary_path);
        cmd.args(args)
            .current_dir(self.temp_dir.path())
            .env("TRELLIS_ROOT", self.root())
            .env_remove("TRELLIS_API_URL")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .env("NO_COLOR", "1")
            .env_remove("FORCE_COLOR")
            .output()
            .expect("Failed to execute trellis command")
    }

    /// Run with colors forced on, as if attached to a color terminal
    pub fn run_with_forced_color(&self, args: &[&str]) -> Output {
        self.command(args)
            .env_remove("NO_COLOR")
            .env("FORCE_COLOR", "1")
            .output()
            .expect("Failed to execute trellis command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    /// Write a board data file and return its path
    pub fn write_board_data(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write board data");
        path
    }

    pub fn write_config(&self, content: &str) {
        let dir = self.root();
        fs::create_dir_all(&dir).expect("Failed to create root directory");
        fs::write(dir.join("config.yaml"), content).expect("Failed to write config file");
    }

    pub fn read_state(&self) -> Option<String> {
        fs::read_to_string(self.root().join("state.json")).ok()
    }

    pub fn read_config(&self) -> Option<String> {
        fs::read_to_string(self.root().join("config.yaml")).ok()
    }
}
