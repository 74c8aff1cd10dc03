use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

use super::TEXT_ATTRIBUTES;
use crate::utils::contains_alphabetic;

static TEXT_ATTRIBUTE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let names: Vec<&str> = TEXT_ATTRIBUTES.iter().map(|(name, _)| *name).collect();
    Regex::new(&format!(r#"\b({})="([^"]*)""#, names.join("|"))).unwrap()
});
static NUMERIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+(\.\d+)?$").unwrap());
static HEX_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^0x[0-9a-fA-F]+$").unwrap());
static PERCENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+(\.\d+)?%$").unwrap());

/// One matched `name="value"` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeOccurrence {
    /// Byte offset of the attribute name.
    pub start: usize,
    /// Byte offset just past the closing quote.
    pub end: usize,
    pub attr_name: &'static str,
    /// Value exactly as written in the markup (entities not decoded).
    pub raw_value: String,
    pub tag_name: &'static str,
}

impl AttributeOccurrence {
    /// Value with XML entities decoded; the raw value if decoding fails.
    pub fn text(&self) -> Cow<'_, str> {
        quick_xml::escape::unescape(&self.raw_value)
            .unwrap_or(Cow::Borrowed(self.raw_value.as_str()))
    }
}

/// Find every text-bearing attribute in `content`, in document order.
pub fn scan(content: &str) -> Vec<AttributeOccurrence> {
    TEXT_ATTRIBUTE_REGEX
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?.as_str();
            let &(attr_name, tag_name) = TEXT_ATTRIBUTES.iter().find(|(n, _)| *n == name)?;
            Some(AttributeOccurrence {
                start: whole.start(),
                end: whole.end(),
                attr_name,
                raw_value: caps.get(2)?.as_str().to_string(),
                tag_name,
            })
        })
        .collect()
}

/// Whether `text` is not human-readable and must never be tagged.
pub fn should_skip(text: &str) -> bool {
    if text.trim().is_empty() {
        return true;
    }

    // $prop and #const references
    if text.starts_with('$') || text.starts_with('#') {
        return true;
    }

    if NUMERIC_REGEX.is_match(text) || HEX_REGEX.is_match(text) || PERCENT_REGEX.is_match(text) {
        return true;
    }

    if text.contains('/') && !contains_alphabetic(text) {
        return true;
    }

    let mut chars = text.chars();
    let first = chars.next().map(|c| c as u32).unwrap_or(0);
    let len = 1 + chars.count();

    // icon glyphs
    if len <= 4 && first >= 0xF0 {
        return true;
    }

    len == 1 && !text.chars().all(char::is_alphanumeric)
}

/// Whether the element containing an attribute that ends at `occurrence_end`
/// already carries `tag_name`.
///
/// Only the rest of the same start tag is inspected: everything up to the
/// first `>` outside a single- or double-quoted value. When no such `>`
/// exists the element is treated as untagged.
pub fn has_companion_tag(content: &str, occurrence_end: usize, tag_name: &str) -> bool {
    let Some(rest) = content.get(occurrence_end..) else {
        return false;
    };

    // The quote character that opened the current attribute value.
    let mut open_quote: Option<char> = None;
    let mut element_end = None;
    for (idx, c) in rest.char_indices() {
        match (open_quote, c) {
            (Some(q), c) if c == q => open_quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => open_quote = Some(c),
            (None, '>') => {
                element_end = Some(idx);
                break;
            }
            (None, _) => {}
        }
    }
    let Some(element_end) = element_end else {
        return false;
    };

    let element_rest = &rest[..element_end];
    let needle = format!("{}=", tag_name);
    element_rest.match_indices(&needle).any(|(idx, _)| {
        element_rest[..idx]
            .chars()
            .next_back()
            .is_none_or(|c| !(c.is_alphanumeric() || c == '_' || c == '-' || c == ':'))
    })
}
