//! Reading the XML master catalog.
//!
//! ```xml
//! <translations languages="de en">
//!   <translation tag="file_count" de_one="%d Datei" de_other="%d Dateien" en_one="%d file" en_other="%d files"/>
//!   <translation tag="Home" de="Startseite" en="Home"/>
//! </translations>
//! ```
//!
//! Attributes named after a locale carry plain values; `<locale>_<category>`
//! attributes carry plural forms.

use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::Path,
};

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use super::{Catalog, LocaleTable, PluralCategory, PluralForms, TranslationEntry};
use crate::error::CatalogError;

const ROOT_ELEMENT: &[u8] = b"translations";
const TRANSLATION_ELEMENT: &[u8] = b"translation";

#[derive(Debug, Default)]
struct XmlCatalogDocument {
    languages: Vec<String>,
    /// Attributes of each `<translation>` element, in document order.
    elements: Vec<Vec<(String, String)>>,
}

fn read_attributes(
    source_name: &str,
    element: &BytesStart<'_>,
) -> Result<Vec<(String, String)>, CatalogError> {
    let mut attributes = Vec::new();
    for attr in element.attributes() {
        let attr = attr.map_err(|e| CatalogError::malformed(source_name, e.to_string()))?;
        let name = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| CatalogError::malformed(source_name, e.to_string()))?
            .to_string();
        let value = attr
            .unescape_value()
            .map_err(|e| CatalogError::malformed(source_name, e.to_string()))?
            .into_owned();
        attributes.push((name, value));
    }
    Ok(attributes)
}

fn read_document(source_name: &str, text: &str) -> Result<XmlCatalogDocument, CatalogError> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut document = XmlCatalogDocument::default();
    let mut seen_root = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                let name = e.name();
                if !seen_root {
                    if name.as_ref() != ROOT_ELEMENT {
                        return Err(CatalogError::malformed(
                            source_name,
                            "root element must be <translations>",
                        ));
                    }
                    seen_root = true;
                    document.languages = read_attributes(source_name, &e)?
                        .into_iter()
                        .find(|(k, _)| k == "languages")
                        .map(|(_, v)| v.split_whitespace().map(String::from).collect())
                        .unwrap_or_default();
                } else if name.as_ref() == TRANSLATION_ELEMENT {
                    document.elements.push(read_attributes(source_name, &e)?);
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(CatalogError::malformed(
                    source_name,
                    format!("at byte {}: {}", reader.error_position(), e),
                ));
            }
        }
    }

    if !seen_root {
        return Err(CatalogError::malformed(source_name, "no <translations> element"));
    }

    Ok(document)
}

fn tag_of(attributes: &[(String, String)]) -> Option<&str> {
    attributes
        .iter()
        .find(|(k, _)| k == "tag")
        .map(|(_, v)| v.as_str())
        .filter(|v| !v.is_empty())
}

/// Every non-empty `tag` in the master catalog at `path`.
pub fn load_master_tags(path: &Path) -> Result<BTreeSet<String>, CatalogError> {
    if !path.is_file() {
        return Err(CatalogError::missing(path));
    }
    let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    master_tags(&path.to_string_lossy(), &text)
}

/// Every non-empty `tag` in an XML catalog document.
pub fn master_tags(source_name: &str, text: &str) -> Result<BTreeSet<String>, CatalogError> {
    let document = read_document(source_name, text)?;
    Ok(document
        .elements
        .iter()
        .filter_map(|attrs| tag_of(attrs).map(String::from))
        .collect())
}

/// Split `en_one` into (`en`, `One`) when `en` is a declared language.
fn split_plural_attribute<'a>(
    name: &'a str,
    languages: &BTreeSet<&str>,
) -> Option<(&'a str, PluralCategory)> {
    let (locale, category) = name.rsplit_once('_')?;
    if !languages.contains(locale) {
        return None;
    }
    Some((locale, category.parse().ok()?))
}

/// Parse an XML catalog document back into a [`Catalog`].
///
/// Locales come from the root `languages` attribute; every listed locale
/// gets a table even if no element mentions it.
pub fn parse_xml_catalog(source_name: &str, text: &str) -> Result<Catalog, CatalogError> {
    let document = read_document(source_name, text)?;
    let languages: BTreeSet<&str> = document.languages.iter().map(String::as_str).collect();

    let mut tables: BTreeMap<&str, LocaleTable> =
        languages.iter().map(|l| (*l, LocaleTable::new())).collect();

    for attributes in &document.elements {
        let Some(tag) = tag_of(attributes) else {
            continue;
        };

        let mut plurals: BTreeMap<&str, BTreeMap<PluralCategory, String>> = BTreeMap::new();
        for (name, value) in attributes {
            if let Some(table) = tables.get_mut(name.as_str()) {
                table.insert(tag.to_string(), TranslationEntry::Plain(value.clone()));
            } else if let Some((locale, category)) = split_plural_attribute(name, &languages) {
                plurals
                    .entry(locale)
                    .or_default()
                    .insert(category, value.clone());
            }
        }

        for (locale, forms) in plurals {
            let forms = PluralForms::new(forms).ok_or_else(|| {
                CatalogError::malformed(
                    source_name,
                    format!("\"{}\": {} plural forms have no 'other' form", tag, locale),
                )
            })?;
            if let Some(table) = tables.get_mut(locale) {
                table.insert(tag.to_string(), TranslationEntry::Plural(forms));
            }
        }
    }

    Ok(tables.into_iter().collect())
}
