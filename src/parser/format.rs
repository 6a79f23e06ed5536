//! Text cleanup for shortcut keys and descriptions.
//!
//! Used when rewriting a shortcuts file so that key combinations and labels
//! read consistently regardless of how they were typed.

use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::models::{App, Shortcut, ShortcutType};

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^a-zA-Z0-9\s])").expect("punctuation pattern"));
// ASCII word starts only: letters outside ASCII are padded as symbols above
// and keep their case.
static WORD_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\b\w)").expect("word start pattern"));
static OPENING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([\[({"])\s+"#).expect("opening bracket pattern"));
static CLOSING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([)\]},.:;?¿!])").expect("closing punctuation pattern"));
static FIRST_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.").expect("first char pattern"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

fn uppercase(caps: &Captures<'_>) -> String {
    caps[0].to_uppercase()
}

/// Formats a key combination: every symbol is spaced out and every word
/// capitalized.
///
/// ```
/// use shortcuts_popup::parser::format_shortcut;
///
/// assert_eq!(format_shortcut("ctrl+shift+t"), "Ctrl + Shift + T");
/// ```
#[must_use]
pub fn format_shortcut(text: &str) -> String {
    let text = text.to_lowercase();
    let text = PUNCTUATION.replace_all(&text, " ${1} ");
    let text = WORD_START.replace_all(&text, uppercase);
    WHITESPACE.replace_all(&text, " ").trim().to_string()
}

/// Formats a label as a sentence: lowercase with a capitalized first letter,
/// brackets glued to their contents and closing punctuation glued to the
/// preceding word.
///
/// ```
/// use shortcuts_popup::parser::format_text;
///
/// assert_eq!(format_text("OPEN file ( RECENT )"), "Open file (recent)");
/// ```
#[must_use]
pub fn format_text(text: &str) -> String {
    let text = text.to_lowercase();
    let text = PUNCTUATION.replace_all(&text, " ${1} ");
    let text = OPENING.replace_all(&text, "${1}");
    let text = CLOSING.replace_all(&text, "${1}");
    let text = FIRST_CHAR.replace(&text, uppercase);
    WHITESPACE.replace_all(&text, " ").trim().to_string()
}

/// Result of cleaning up a whole shortcuts file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatOutcome {
    /// Formatted, sorted and regrouped apps
    pub apps: Vec<App>,
    /// Human-readable description of every row that was dropped
    pub skipped: Vec<String>,
    /// Number of shortcuts kept
    pub kept: usize,
}

/// Formats every row, drops rows with an empty app or type name, and regroups
/// the rest sorted by app, type and shortcut.
#[must_use]
pub fn format_apps(apps: &[App]) -> FormatOutcome {
    let mut grouped: BTreeMap<String, BTreeMap<String, Vec<Shortcut>>> = BTreeMap::new();
    let mut skipped = Vec::new();
    let mut kept = 0;

    for app in apps {
        for shortcut_type in &app.types {
            for shortcut in &shortcut_type.shortcuts {
                let app_name = format_text(&app.name);
                let type_name = format_text(&shortcut_type.name);

                let mut reasons = Vec::new();
                if app_name.is_empty() {
                    reasons.push("Empty app name");
                }
                if type_name.is_empty() {
                    reasons.push("Empty type name");
                }
                if !reasons.is_empty() {
                    skipped.push(format!(
                        "{{app: {:?}, type: {:?}, shortcut: {:?}, description: {:?}}} - Reason: {}.",
                        app.name,
                        shortcut_type.name,
                        shortcut.key,
                        shortcut.description,
                        reasons.join(", ")
                    ));
                    continue;
                }

                grouped
                    .entry(app_name)
                    .or_default()
                    .entry(type_name)
                    .or_default()
                    .push(Shortcut::new(
                        format_shortcut(&shortcut.key),
                        format_text(&shortcut.description),
                    ));
                kept += 1;
            }
        }
    }

    let apps = grouped
        .into_iter()
        .map(|(name, types)| App {
            name,
            types: types
                .into_iter()
                .map(|(name, mut shortcuts)| {
                    shortcuts.sort_by(|a, b| a.key.cmp(&b.key));
                    ShortcutType { name, shortcuts }
                })
                .collect(),
        })
        .collect();

    FormatOutcome {
        apps,
        skipped,
        kept,
    }
}
