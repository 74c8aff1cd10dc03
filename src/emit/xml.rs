//! LVGL `translations.xml` rendering.

use std::fmt::Write;

use quick_xml::escape::partial_escape;

use crate::catalog::{Catalog, TranslationEntry};

/// Escape text for use inside a double-quoted XML attribute.
///
/// Whitespace control characters become character references so parsers
/// do not normalize them to spaces.
pub fn escape_xml_attr(text: &str) -> String {
    let escaped = partial_escape(text);
    let mut out = String::with_capacity(escaped.len());
    for c in escaped.chars() {
        match c {
            '"' => out.push_str("&quot;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            '\t' => out.push_str("&#9;"),
            c => out.push(c),
        }
    }
    out
}

/// Render the catalog as an XML document.
///
/// `translation` elements are sorted by tag and attributes follow the sorted
/// locale order, so identical catalogs always render identical bytes.
pub fn render_xml(catalog: &Catalog) -> String {
    let locales: Vec<&str> = catalog.locales().collect();

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(
        out,
        "<translations languages=\"{}\">",
        escape_xml_attr(&locales.join(" "))
    );

    for key in catalog.all_keys() {
        let _ = write!(out, "  <translation tag=\"{}\"", escape_xml_attr(key));
        for (locale, table) in catalog.iter() {
            match table.get(key) {
                Some(TranslationEntry::Plain(value)) => {
                    let _ = write!(out, " {}=\"{}\"", locale, escape_xml_attr(value));
                }
                Some(TranslationEntry::Plural(forms)) => {
                    for (category, value) in forms.iter() {
                        let _ = write!(
                            out,
                            " {}_{}=\"{}\"",
                            locale,
                            category,
                            escape_xml_attr(value)
                        );
                    }
                }
                None => {}
            }
        }
        out.push_str("/>\n");
    }

    out.push_str("</translations>\n");
    out
}
