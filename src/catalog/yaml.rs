//! Writing YAML catalog units.
//!
//! Output is readable by [`parse_catalog_unit`](super::parse_catalog_unit):
//! keys are always double-quoted, values only when YAML would otherwise
//! misread them.

use std::{collections::BTreeSet, fmt::Write};

use serde_yaml::Value;

use super::{LocaleTable, TranslationEntry};

/// Characters that force a value into a double-quoted scalar.
const YAML_SPECIAL: &[char] = &[
    ':', '#', '\'', '"', '\n', '\r', '\t', '{', '}', '[', ']', '&', '*', '!', '|', '>', '%', '@',
    '`', ',', '?', '\\', '-', '~',
];

/// Plain scalars YAML would resolve to null, booleans or numbers.
fn resolves_to_non_string(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "" | "~" | "null" | "true" | "false" | "yes" | "no" | "on" | "off"
    ) || value.parse::<f64>().is_ok()
}

/// True when `value` written as a plain scalar loads back as the same string.
fn reads_back_plain(value: &str) -> bool {
    matches!(serde_yaml::from_str::<Value>(value), Ok(Value::String(s)) if s == value)
}

fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() || matches!(c, '\u{FEFF}' | '\u{FFFE}' | '\u{FFFF}') => {
                let code = c as u32;
                if code <= 0xFF {
                    let _ = write!(out, "\\x{:02X}", code);
                } else {
                    let _ = write!(out, "\\u{:04X}", code);
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn yaml_value(text: &str) -> String {
    let needs_quotes = text.contains(YAML_SPECIAL)
        || text.trim() != text
        || resolves_to_non_string(text)
        || !reads_back_plain(text);
    if needs_quotes { quote(text) } else { text.to_string() }
}

/// Render one locale's table as a YAML unit, keys sorted.
pub fn render_yaml_unit(locale: &str, table: &LocaleTable) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "locale: {}", yaml_value(locale));
    out.push_str("translations:\n");

    for (key, entry) in table {
        match entry {
            TranslationEntry::Plain(value) => {
                let _ = writeln!(out, "  {}: {}", quote(key), yaml_value(value));
            }
            TranslationEntry::Plural(forms) => {
                let _ = writeln!(out, "  {}:", quote(key));
                for (category, value) in forms.iter() {
                    let _ = writeln!(out, "    {}: {}", category, yaml_value(value));
                }
            }
        }
    }

    out
}

/// Append `"<key>": "<key>"` lines for keys not yet present in `yaml_text`.
///
/// Keys are deduplicated and appended in sorted order. A key counts as
/// present when it already appears as a quoted mapping key. Returns the new
/// text and the number of keys added.
pub fn append_missing_keys<'a>(
    yaml_text: &str,
    keys: impl IntoIterator<Item = &'a str>,
) -> (String, usize) {
    let keys: BTreeSet<&str> = keys.into_iter().collect();
    let mut content = yaml_text.to_string();
    let mut added = 0;

    for key in keys {
        let quoted = quote(key);
        let single_quoted = format!("'{}'", key.replace('\'', "''"));
        if content.contains(&format!("{}:", quoted))
            || content.contains(&format!("{}:", single_quoted))
        {
            continue;
        }

        if !content.is_empty() && !content.ends_with('\n') {
            content.push('\n');
        }
        let _ = writeln!(content, "  {}: {}", quoted, quoted);
        added += 1;
    }

    (content, added)
}
