//! YAML catalog unit loading.
//!
//! A catalog unit looks like:
//!
//! ```yaml
//! locale: ru
//! translations:
//!   "Settings": Настройки
//!   "file_count":
//!     one: "%d файл"
//!     few: "%d файла"
//!     other: "%d файлов"
//! ```
//!
//! An entry is plural iff its value is a mapping.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde_yaml::{Mapping, Value};
use tracing::debug;

use super::{Catalog, LocaleTable, PluralCategory, PluralForms, TranslationEntry};
use crate::error::CatalogError;

/// One parsed catalog unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogUnit {
    /// Locale declared inside the unit, if any.
    pub locale: Option<String>,
    pub table: LocaleTable,
}

/// A unit whose declared locale differs from the one implied by its file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleMismatch {
    pub source: String,
    pub expected: String,
    pub declared: String,
}

#[derive(Debug, Default)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    pub mismatches: Vec<LocaleMismatch>,
}

/// Parse the text of one catalog unit.
///
/// `source_name` only labels errors. A missing `translations` field is an
/// error; an empty one yields an empty table.
pub fn parse_catalog_unit(source_name: &str, text: &str) -> Result<CatalogUnit, CatalogError> {
    let root: Value = serde_yaml::from_str(text)
        .map_err(|e| CatalogError::malformed(source_name, e.to_string()))?;

    let Value::Mapping(root) = root else {
        return Err(CatalogError::malformed(
            source_name,
            "top level must be a mapping with 'locale' and 'translations'",
        ));
    };

    let locale = match root.get("locale") {
        None | Some(Value::Null) => None,
        Some(value) => Some(scalar_to_string(value).ok_or_else(|| {
            CatalogError::malformed(source_name, "'locale' must be a scalar string")
        })?),
    };

    let table = match root.get("translations") {
        None => {
            return Err(CatalogError::malformed(
                source_name,
                "missing 'translations' field",
            ));
        }
        Some(Value::Null) => LocaleTable::new(),
        Some(Value::Mapping(entries)) => parse_entries(source_name, entries)?,
        Some(_) => {
            return Err(CatalogError::malformed(
                source_name,
                "'translations' must be a mapping",
            ));
        }
    };

    Ok(CatalogUnit { locale, table })
}

fn parse_entries(source_name: &str, entries: &Mapping) -> Result<LocaleTable, CatalogError> {
    let mut table = LocaleTable::new();

    for (key, value) in entries {
        let key = scalar_to_string(key)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                CatalogError::malformed(source_name, "translation keys must be non-empty strings")
            })?;

        let entry = match value {
            Value::Mapping(forms) => {
                TranslationEntry::Plural(parse_plural_forms(source_name, &key, forms)?)
            }
            other => TranslationEntry::Plain(scalar_to_string(other).ok_or_else(|| {
                CatalogError::malformed(source_name, format!("value of \"{}\" is not a string", key))
            })?),
        };

        table.insert(key, entry);
    }

    Ok(table)
}

fn parse_plural_forms(
    source_name: &str,
    key: &str,
    forms: &Mapping,
) -> Result<PluralForms, CatalogError> {
    let mut parsed = BTreeMap::new();

    for (category, text) in forms {
        let category: PluralCategory = scalar_to_string(category)
            .ok_or_else(|| {
                CatalogError::malformed(source_name, format!("\"{}\": invalid plural category", key))
            })?
            .parse()
            .map_err(|e| CatalogError::malformed(source_name, format!("\"{}\": {}", key, e)))?;
        let text = scalar_to_string(text).ok_or_else(|| {
            CatalogError::malformed(
                source_name,
                format!("\"{}\": plural form '{}' is not a string", key, category),
            )
        })?;
        parsed.insert(category, text);
    }

    PluralForms::new(parsed).ok_or_else(|| {
        CatalogError::malformed(
            source_name,
            format!("\"{}\": plural entry has no 'other' form", key),
        )
    })
}

/// Strings, numbers and booleans are accepted as text; YAML turns unquoted
/// `42` or `true` into non-strings.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Build a catalog from `(expected_locale, source_name, text)` units.
///
/// The locale declared inside a unit wins over `expected_locale`; each
/// disagreement is returned as a [`LocaleMismatch`] for the caller to report.
pub fn build_catalog<'a>(
    units: impl IntoIterator<Item = (&'a str, &'a str, &'a str)>,
) -> Result<LoadedCatalog, CatalogError> {
    let mut loaded = LoadedCatalog::default();
    let mut sources: BTreeMap<String, String> = BTreeMap::new();

    for (expected, source_name, text) in units {
        let unit = parse_catalog_unit(source_name, text)?;
        let locale = match unit.locale {
            Some(declared) => {
                if declared != expected {
                    loaded.mismatches.push(LocaleMismatch {
                        source: source_name.to_string(),
                        expected: expected.to_string(),
                        declared: declared.clone(),
                    });
                }
                declared
            }
            None => expected.to_string(),
        };

        if let Some(previous) = sources.insert(locale.clone(), source_name.to_string()) {
            return Err(CatalogError::malformed(
                source_name,
                format!("locale '{}' is already declared by '{}'", locale, previous),
            ));
        }

        debug!(
            locale = %locale,
            source = source_name,
            keys = unit.table.len(),
            "loaded catalog unit"
        );
        loaded.catalog.insert_locale(locale, unit.table);
    }

    Ok(loaded)
}

/// Load every `*.yml` / `*.yaml` file in `dir` into one catalog.
///
/// Files are read in path order so conflicts are reported deterministically.
pub fn load_catalog_dir(dir: &Path) -> Result<LoadedCatalog, CatalogError> {
    if !dir.is_dir() {
        return Err(CatalogError::missing(dir));
    }

    let entries = fs::read_dir(dir).map_err(|source| CatalogError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && matches!(
                    path.extension().and_then(|e| e.to_str()),
                    Some("yml" | "yaml")
                )
        })
        .collect();
    paths.sort();

    let mut units = Vec::with_capacity(paths.len());
    for path in &paths {
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.clone(),
            source,
        })?;
        let expected = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        units.push((expected, path.to_string_lossy().to_string(), text));
    }

    build_catalog(
        units
            .iter()
            .map(|(expected, source, text)| (expected.as_str(), source.as_str(), text.as_str())),
    )
}
