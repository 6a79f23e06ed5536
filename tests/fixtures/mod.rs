//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Each test binary uses a different subset

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the shortcuts-popup binary
pub fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_shortcuts-popup")
}

/// Isolated environment: a config directory and a place for shortcuts files.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    /// Writes `content` to a file named `name` and returns its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    /// Command with the config directory isolated to this environment.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(bin());
        cmd.env("SHORTCUTS_POPUP_CONFIG_DIR", self.config_dir());
        cmd.env("SHORTCUTS_POPUP_LOG", "warn");
        cmd.args(args);
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to execute command")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

pub fn path_arg(path: &Path) -> &str {
    path.to_str().expect("temp path is UTF-8")
}

/// Small valid file: two apps, three categories, five shortcuts.
pub const SAMPLE: &str = r#"[
  {
    "name": "Vim",
    "types": [
      {
        "name": "Motion",
        "shortcuts": [
          { "key": "w", "description": "Next word" },
          { "key": "b", "description": "Previous word" }
        ]
      },
      {
        "name": "Editing",
        "shortcuts": [
          { "key": "u", "description": "Undo" }
        ]
      }
    ]
  },
  {
    "name": "Tmux",
    "types": [
      {
        "name": "Panes",
        "shortcuts": [
          { "key": "Prefix + %", "description": "Split vertically" },
          { "key": "Prefix + x", "description": "Close pane" }
        ]
      }
    ]
  }
]"#;

/// `apps` apps with `types` categories of `shortcuts` short entries each.
pub fn uniform_json(apps: usize, types: usize, shortcuts: usize) -> String {
    let apps: Vec<serde_json::Value> = (0..apps)
        .map(|a| {
            let types: Vec<serde_json::Value> = (0..types)
                .map(|t| {
                    let shortcuts: Vec<serde_json::Value> = (0..shortcuts)
                        .map(|s| serde_json::json!({ "key": format!("K{s}"), "description": format!("D{s}") }))
                        .collect();
                    serde_json::json!({ "name": format!("Type {t}"), "shortcuts": shortcuts })
                })
                .collect();
            serde_json::json!({ "name": format!("App {a}"), "types": types })
        })
        .collect();
    serde_json::to_string_pretty(&apps).expect("fixture serializes")
}
