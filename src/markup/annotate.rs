use std::collections::BTreeSet;

use super::scan::{AttributeOccurrence, has_companion_tag, scan, should_skip};

/// One applied `text="X"` -> `text="X" translation_tag="X"` rewrite.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MigrationRecord {
    pub file: String,
    /// 1-based line of the attribute in the original content.
    pub line: usize,
    pub old_text: String,
    pub new_text: String,
    pub translation_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub content: String,
    /// Applied rewrites in ascending line order.
    pub records: Vec<MigrationRecord>,
}

impl Annotation {
    pub fn changed(&self) -> bool {
        !self.records.is_empty()
    }
}

/// Whether `occurrence` is translatable text that has no companion tag yet.
fn is_untagged_text(content: &str, occurrence: &AttributeOccurrence) -> bool {
    !should_skip(&occurrence.text())
        && !has_companion_tag(content, occurrence.end, occurrence.tag_name)
}

fn line_of(content: &str, offset: usize) -> usize {
    content[..offset].bytes().filter(|b| *b == b'\n').count() + 1
}

/// Add companion tag attributes for every untagged, known text attribute.
///
/// Occurrences are spliced from the last to the first so offsets of the
/// ones not yet processed stay valid. `file` only labels the records.
pub fn annotate(file: &str, content: &str, known_keys: &BTreeSet<String>) -> Annotation {
    let mut output = content.to_string();
    let mut records = Vec::new();

    for occurrence in scan(content).iter().rev() {
        if !is_untagged_text(content, occurrence) {
            continue;
        }

        let key = occurrence.text();
        if !known_keys.contains(key.as_ref()) {
            continue;
        }

        let old_text = format!("{}=\"{}\"", occurrence.attr_name, occurrence.raw_value);
        let new_text = format!(
            "{} {}=\"{}\"",
            old_text, occurrence.tag_name, occurrence.raw_value
        );
        output.replace_range(occurrence.start..occurrence.end, &new_text);

        records.push(MigrationRecord {
            file: file.to_string(),
            line: line_of(content, occurrence.start),
            old_text,
            new_text,
            translation_key: key.into_owned(),
        });
    }

    records.reverse();
    Annotation {
        content: output,
        records,
    }
}

/// Untagged translatable texts that are not in `known_keys`, in document
/// order. Nothing is rewritten.
pub fn collect_missing(content: &str, known_keys: &BTreeSet<String>) -> Vec<String> {
    scan(content)
        .iter()
        .filter(|occurrence| is_untagged_text(content, occurrence))
        .map(|occurrence| occurrence.text().into_owned())
        .filter(|text| !known_keys.contains(text))
        .collect()
}
