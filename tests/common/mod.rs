use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Runs the CLI against an isolated config/data home
pub struct TestContext {
    pub temp_dir: TempDir,
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config_dir = temp_dir.path().join("config");
        let data_dir = temp_dir.path().join("data");

        fs::create_dir_all(&config_dir).expect("Failed to create config dir");
        fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            config_dir,
            data_dir,
        }
    }

    /// Path of the default config file inside the isolated home
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("eortc-voice").join("config.json")
    }

    /// Path of the diagnostics log inside the isolated home
    pub fn audit_log(&self) -> PathBuf {
        self.data_dir.join("eortc-voice").join("unrecognized.log")
    }

    pub fn write_config(&self, path: &Path, json: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create config parent");
        }
        fs::write(path, json).expect("Failed to write config");
    }

    /// Run the binary with `args`, feeding `stdin` when given
    pub fn run(&self, args: &[&str], stdin: Option<&str>) -> Output {
        let bin_path = env!("CARGO_BIN_EXE_eortc-voice");

        let mut child = Command::new(bin_path)
            .args(args)
            .env("XDG_CONFIG_HOME", &self.config_dir)
            .env("XDG_DATA_HOME", &self.data_dir)
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn eortc-voice");

        {
            let mut pipe = child.stdin.take().expect("stdin is piped");
            if let Some(input) = stdin {
                pipe.write_all(input.as_bytes()).expect("Failed to write stdin");
            }
        }

        child.wait_with_output().expect("Failed to wait for eortc-voice")
    }
}

/// Stdout lines of a finished run
pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(String::from)
        .collect()
}
