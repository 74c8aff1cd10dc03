//! Translation catalog data model.
//!
//! A [`Catalog`] maps locale codes to [`LocaleTable`]s, which map translation
//! keys to [`TranslationEntry`] values. Both levels are `BTreeMap`s so every
//! consumer iterates in sorted order without re-sorting.
//!
//! ## Submodules
//!
//! - `loader`: YAML catalog units -> [`Catalog`]
//! - `plural_rules`: per-language plural selection rules
//! - `validate`: key-set comparison against the base locale
//! - `xml`: reading the XML master catalog
//! - `yaml`: writing YAML catalog units

use std::{collections::BTreeMap, fmt, str::FromStr};

pub mod loader;
pub mod plural_rules;
pub mod validate;
pub mod xml;
pub mod yaml;

pub use loader::{
    CatalogUnit, LoadedCatalog, LocaleMismatch, build_catalog, load_catalog_dir,
    parse_catalog_unit,
};
pub use plural_rules::{PluralRule, plural_rule_for};
pub use validate::{
    IssueKind, ValidationIssue, find_missing_translations, format_missing_warnings,
    format_warnings, validate_catalog,
};
pub use xml::{load_master_tags, master_tags, parse_xml_catalog};
pub use yaml::{append_missing_keys, render_yaml_unit};

/// Default base locale used for validation and migration.
pub const DEFAULT_BASE_LOCALE: &str = "en";

/// Translations for a single locale, keyed by translation key.
pub type LocaleTable = BTreeMap<String, TranslationEntry>;

/// Plural category as understood by the lv_i18n runtime.
///
/// Declaration order matches `lv_i18n_plural_type_t`, so `Ord` sorts
/// categories the way the runtime enumerates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    pub const ALL: [PluralCategory; 6] = [
        PluralCategory::Zero,
        PluralCategory::One,
        PluralCategory::Two,
        PluralCategory::Few,
        PluralCategory::Many,
        PluralCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }

    /// Name of the matching `lv_i18n_plural_type_t` enumerator.
    pub fn c_constant(&self) -> &'static str {
        match self {
            PluralCategory::Zero => "LV_I18N_PLURAL_TYPE_ZERO",
            PluralCategory::One => "LV_I18N_PLURAL_TYPE_ONE",
            PluralCategory::Two => "LV_I18N_PLURAL_TYPE_TWO",
            PluralCategory::Few => "LV_I18N_PLURAL_TYPE_FEW",
            PluralCategory::Many => "LV_I18N_PLURAL_TYPE_MANY",
            PluralCategory::Other => "LV_I18N_PLURAL_TYPE_OTHER",
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PluralCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PluralCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown plural category '{}'", s))
    }
}

/// Plural forms of one entry. Always contains [`PluralCategory::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralForms(BTreeMap<PluralCategory, String>);

impl PluralForms {
    /// Build plural forms, returning `None` when the `other` form is absent.
    pub fn new(forms: BTreeMap<PluralCategory, String>) -> Option<Self> {
        forms
            .contains_key(&PluralCategory::Other)
            .then_some(Self(forms))
    }

    pub fn get(&self, category: PluralCategory) -> Option<&str> {
        self.0.get(&category).map(String::as_str)
    }

    pub fn categories(&self) -> impl Iterator<Item = PluralCategory> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PluralCategory, &str)> {
        self.0.iter().map(|(c, s)| (*c, s.as_str()))
    }
}

/// One translated value: a plain string or a set of plural forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationEntry {
    Plain(String),
    Plural(PluralForms),
}

impl TranslationEntry {
    pub fn is_plural(&self) -> bool {
        matches!(self, TranslationEntry::Plural(_))
    }

    pub fn as_plain(&self) -> Option<&str> {
        match self {
            TranslationEntry::Plain(s) => Some(s),
            TranslationEntry::Plural(_) => None,
        }
    }

    pub fn as_plural(&self) -> Option<&PluralForms> {
        match self {
            TranslationEntry::Plain(_) => None,
            TranslationEntry::Plural(forms) => Some(forms),
        }
    }
}

impl From<&str> for TranslationEntry {
    fn from(value: &str) -> Self {
        TranslationEntry::Plain(value.to_string())
    }
}

/// All loaded locales for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    locales: BTreeMap<String, LocaleTable>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the table for `locale`, returning the previous one.
    pub fn insert_locale(
        &mut self,
        locale: impl Into<String>,
        table: LocaleTable,
    ) -> Option<LocaleTable> {
        self.locales.insert(locale.into(), table)
    }

    pub fn locale(&self, locale: &str) -> Option<&LocaleTable> {
        self.locales.get(locale)
    }

    pub fn contains_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Locale codes in ascending order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LocaleTable)> {
        self.locales.iter().map(|(l, t)| (l.as_str(), t))
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Union of keys across all locales, sorted.
    pub fn all_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .locales
            .values()
            .flat_map(|t| t.keys().map(String::as_str))
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }
}

impl<L: Into<String>> FromIterator<(L, LocaleTable)> for Catalog {
    fn from_iter<T: IntoIterator<Item = (L, LocaleTable)>>(iter: T) -> Self {
        Self {
            locales: iter.into_iter().map(|(l, t)| (l.into(), t)).collect(),
        }
    }
}

/// Build a plain-only locale table from `(key, value)` pairs.
pub fn plain_table<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> LocaleTable {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), TranslationEntry::from(v)))
        .collect()
}
