//! Display labels derived from mode tokens.

use crate::{ModeAxis, ModeId};

/// Characters treated as word separators in mode tokens.
const SEPARATORS: [char; 2] = ['_', '-'];

/// Words at or below this length are shown fully upper-cased (`ac` -> `AC`).
const ACRONYM_MAX_LEN: usize = 2;

/// Convert a raw mode token into a display label.
///
/// Separators become spaces, each word gets its first character
/// upper-cased (the rest is left as-is), and words of one or two
/// characters are upper-cased entirely. Runs of separators collapse into a
/// single space. Total over any input: `""` formats to `""`.
///
/// ```
/// use dell_power_tray_core::format_label;
///
/// assert_eq!(format_label("cool-bottom"), "Cool Bottom");
/// assert_eq!(format_label("primarily_ac"), "Primarily AC");
/// ```
pub fn format_label(token: &str) -> String {
    token
        .replace(SEPARATORS, " ")
        .split_whitespace()
        .map(capitalize)
        .map(|word| {
            if word.chars().count() <= ACRONYM_MAX_LEN {
                word.to_uppercase()
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Menu header for an axis, e.g. `Current Thermal Mode: Balanced`.
pub fn header_text(axis: ModeAxis, mode: &ModeId) -> String {
    format!("Current {} Mode: {}", axis.title(), format_label(mode.as_str()))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
