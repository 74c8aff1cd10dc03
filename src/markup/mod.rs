//! Translation-tag migration for LVGL XML markup.
//!
//! Markup is rewritten on raw text, never through a parse/serialize cycle,
//! so attribute order, whitespace and unrelated markup stay byte-identical.
//!
//! ## Submodules
//!
//! - `scan`: locating text-bearing attributes and deciding eligibility
//! - `annotate`: splicing companion tag attributes into one document
//! - `migrate`: applying `annotate` across a directory of files

pub mod annotate;
pub mod migrate;
pub mod scan;

pub use annotate::{Annotation, MigrationRecord, annotate, collect_missing};
pub use migrate::{FileFailure, MigrationReport, discover_markup_files, run_migration};
pub use scan::{AttributeOccurrence, has_companion_tag, scan, should_skip};

/// Text-bearing attributes and the companion attribute carrying their
/// translation tag.
pub const TEXT_ATTRIBUTES: &[(&str, &str)] = &[
    ("text", "translation_tag"),
    ("placeholder_text", "placeholder_tag"),
    ("label", "label_tag"),
    ("title", "title_tag"),
    ("description", "description_tag"),
    ("message", "message_tag"),
    ("value", "value_tag"),
];

/// Companion tag attribute for a text-bearing attribute.
pub fn companion_tag(attr_name: &str) -> Option<&'static str> {
    TEXT_ATTRIBUTES
        .iter()
        .find(|(name, _)| *name == attr_name)
        .map(|(_, tag)| *tag)
}
