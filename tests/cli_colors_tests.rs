//! End-to-end tests for `shortcuts-popup colors`.

mod fixtures;
use fixtures::*;

fn colors_json(env: &TestEnv, count: &str) -> Vec<String> {
    let output = env.run(&["colors", count, "--json"]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    serde_json::from_str(&stdout(&output)).expect("Should parse JSON output")
}

#[test]
fn test_colors_distinct_gradient() {
    let env = TestEnv::new();
    let colors = colors_json(&env, "5");

    assert_eq!(colors.len(), 5);
    assert_eq!(colors[0], "#570505");
    assert_eq!(colors[4], "#350557");

    let mut unique = colors.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 5);

    let hex = regex::Regex::new("^#[0-9a-f]{6}$").unwrap();
    assert!(colors.iter().all(|c| hex.is_match(c)), "{colors:?}");
}

#[test]
fn test_colors_single_group_starts_at_red() {
    let env = TestEnv::new();
    assert_eq!(colors_json(&env, "1"), vec!["#570505".to_string()]);
}

#[test]
fn test_colors_zero_is_empty() {
    let env = TestEnv::new();
    assert!(colors_json(&env, "0").is_empty());
}

#[test]
fn test_colors_human_output() {
    let env = TestEnv::new();
    let output = env.run(&["colors", "2"]);
    assert_eq!(output.status.code(), Some(0));

    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, vec!["  1  #570505", "  2  #350557"]);
}

#[test]
fn test_colors_rejects_non_number() {
    let env = TestEnv::new();
    let output = env.run(&["colors", "many"]);
    assert!(!output.status.success());
}
