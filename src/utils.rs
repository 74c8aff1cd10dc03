//! Common utility functions shared across the codebase.

use unicode_width::UnicodeWidthChar;

/// Checks if the text contains at least one Unicode alphabetic character.
///
/// Returns false for empty strings, pure numbers, or pure symbols.
///
/// # Examples
///
/// ```
/// use tagsmith::utils::contains_alphabetic;
///
/// assert!(contains_alphabetic("Save"));
/// assert!(contains_alphabetic("Настройки"));
/// assert!(contains_alphabetic("On/Off"));
/// assert!(!contains_alphabetic("10/20"));
/// assert!(!contains_alphabetic("---"));
/// assert!(!contains_alphabetic(""));
/// ```
pub fn contains_alphabetic(text: &str) -> bool {
    text.chars().any(|c| c.is_alphabetic())
}

/// Shorten `text` to at most `max_width` terminal columns, marking the cut
/// with `...`. Newlines are shown as spaces.
pub fn truncate_display(text: &str, max_width: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();

    let total: usize = flat.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return flat;
    }

    let budget = max_width.saturating_sub(3);
    let mut width = 0;
    let mut out = String::new();
    for c in flat.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push_str("...");
    out
}
