//! End-to-end tests for `shortcuts-popup format`.

use std::fs;

mod fixtures;
use fixtures::*;

const MESSY: &str = r#"[
  {
    "name": "Vim",
    "types": [
      {
        "name": "editing",
        "shortcuts": [
          { "key": "ctrl+r", "description": "redo   last change" },
          { "key": "u", "description": "undo ( last change )" }
        ]
      }
    ]
  },
  {
    "name": "",
    "types": [
      {
        "name": "Orphans",
        "shortcuts": [
          { "key": "x", "description": "lost" }
        ]
      }
    ]
  },
  {
    "name": "Bash",
    "types": [
      {
        "name": "history",
        "shortcuts": [
          { "key": "ctrl+r", "description": "search history" }
        ]
      }
    ]
  }
]"#;

fn parse(text: &str) -> serde_json::Value {
    serde_json::from_str(text).expect("output is JSON")
}

#[test]
fn test_format_prints_cleaned_sorted_json() {
    let env = TestEnv::new();
    let file = env.write("shortcuts.json", MESSY);

    let output = env.run(&["format", "--file", path_arg(&file)]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let apps = parse(&stdout(&output));
    let apps = apps.as_array().unwrap();
    assert_eq!(apps.len(), 2);
    // Sorted by app name
    assert_eq!(apps[0]["name"], "Bash");
    assert_eq!(apps[1]["name"], "Vim");

    let vim = &apps[1]["types"][0]["shortcuts"];
    assert_eq!(vim[0]["key"], "Ctrl + R");
    assert_eq!(vim[0]["description"], "Redo last change");
    assert_eq!(vim[1]["key"], "U");
    assert_eq!(vim[1]["description"], "Undo (last change)");

    // Nothing written without --write
    assert_eq!(fs::read_to_string(&file).unwrap(), MESSY);
}

#[test]
fn test_format_reports_skipped_rows() {
    let env = TestEnv::new();
    let file = env.write("shortcuts.json", MESSY);

    let output = env.run(&["format", "--file", path_arg(&file)]);
    let err = stderr(&output);
    assert!(err.contains("Reason: Empty app name"), "{err}");
}

#[test]
fn test_format_write_rewrites_file() {
    let env = TestEnv::new();
    let file = env.write("shortcuts.json", MESSY);

    let output = env.run(&["format", "--file", path_arg(&file), "--write"]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Formatted 3 shortcuts"));

    let written = fs::read_to_string(&file).unwrap();
    assert!(written.contains("\n  {"), "two-space indentation expected");
    let apps = parse(&written);
    assert_eq!(apps[0]["types"][0]["name"], "History");

    // Formatting is stable
    let again = env.run(&["format", "--file", path_arg(&file)]);
    assert_eq!(parse(&stdout(&again)), apps);
}

#[test]
fn test_format_rejects_invalid_file() {
    let env = TestEnv::new();
    let file = env.write("shortcuts.json", r#"[{"name": "Vim"}]"#);

    let output = env.run(&["format", "--file", path_arg(&file), "--write"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("is missing 'types' array"));
    assert_eq!(fs::read_to_string(&file).unwrap(), r#"[{"name": "Vim"}]"#);
}
