//! Key-set consistency checks against the base locale.
//!
//! Findings never fail a run; they are turned into warning lines by
//! [`format_warnings`].

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

use super::Catalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IssueKind {
    /// Key exists in the base locale but not in this locale.
    MissingInLocale,
    /// Key exists in this locale but not in the base locale.
    ExtraInLocale,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValidationIssue {
    pub locale: String,
    pub kind: IssueKind,
    pub key: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            IssueKind::MissingInLocale => {
                write!(f, "{}: missing translation for \"{}\"", self.locale, self.key)
            }
            IssueKind::ExtraInLocale => write!(
                f,
                "{}: key \"{}\" is not present in the base locale",
                self.locale, self.key
            ),
        }
    }
}

/// Compare every non-base locale against `base_locale`.
///
/// An absent base locale counts as an empty key set. Issues come back
/// sorted by locale, then kind, then key.
pub fn validate_catalog(catalog: &Catalog, base_locale: &str) -> Vec<ValidationIssue> {
    let base_keys: BTreeSet<&str> = catalog
        .locale(base_locale)
        .map(|t| t.keys().map(String::as_str).collect())
        .unwrap_or_default();

    let mut issues = Vec::new();
    for (locale, table) in catalog.iter().filter(|(l, _)| *l != base_locale) {
        let keys: BTreeSet<&str> = table.keys().map(String::as_str).collect();

        issues.extend(base_keys.difference(&keys).map(|key| ValidationIssue {
            locale: locale.to_string(),
            kind: IssueKind::MissingInLocale,
            key: key.to_string(),
        }));
        issues.extend(keys.difference(&base_keys).map(|key| ValidationIssue {
            locale: locale.to_string(),
            kind: IssueKind::ExtraInLocale,
            key: key.to_string(),
        }));
    }

    issues.sort();
    issues
}

/// Group the keys of `kind` findings by locale. Locales without findings
/// are absent from the result.
pub fn group_by_locale(
    issues: &[ValidationIssue],
    kind: IssueKind,
) -> BTreeMap<String, Vec<String>> {
    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for issue in issues.iter().filter(|i| i.kind == kind) {
        groups
            .entry(issue.locale.clone())
            .or_default()
            .push(issue.key.clone());
    }
    groups
}

/// Missing keys per non-base locale.
pub fn find_missing_translations(
    catalog: &Catalog,
    base_locale: &str,
) -> BTreeMap<String, Vec<String>> {
    group_by_locale(
        &validate_catalog(catalog, base_locale),
        IssueKind::MissingInLocale,
    )
}

fn format_groups(groups: &BTreeMap<String, Vec<String>>, singular: &str, plural: &str) -> Vec<String> {
    groups
        .iter()
        .filter(|(_, keys)| !keys.is_empty())
        .map(|(locale, keys)| {
            format!(
                "{}: {} {}: {}",
                locale,
                keys.len(),
                if keys.len() == 1 { singular } else { plural },
                keys.join(", ")
            )
        })
        .collect()
}

/// One line per locale: `de: 2 missing translations: Cancel, Save`.
pub fn format_missing_warnings(missing: &BTreeMap<String, Vec<String>>) -> Vec<String> {
    format_groups(missing, "missing translation", "missing translations")
}

/// Warning lines for all findings: missing groups first, then extra keys.
pub fn format_warnings(issues: &[ValidationIssue]) -> Vec<String> {
    let mut lines = format_missing_warnings(&group_by_locale(issues, IssueKind::MissingInLocale));
    lines.extend(format_groups(
        &group_by_locale(issues, IssueKind::ExtraInLocale),
        "key not in base locale",
        "keys not in base locale",
    ));
    lines
}
