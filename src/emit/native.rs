//! lv_i18n C source and header rendering.
//!
//! Lookup tables are index-aligned: `lv_i18n_singular_keys[i]` names the
//! string found at `<locale>_singulars[i]`, and likewise for plural keys and
//! the `<locale>_plurals_<category>` arrays. Untranslated slots are `NULL` so
//! the runtime can fall back to the key.

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::Write,
};

use crate::{
    catalog::{
        Catalog, LocaleTable, PluralCategory, PluralRule, TranslationEntry, plural_rule_for,
        plural_rules::OTHER_ONLY,
    },
    error::CatalogError,
};

pub const SOURCE_FILE_NAME: &str = "lv_i18n_translations.c";
pub const HEADER_FILE_NAME: &str = "lv_i18n_translations.h";

const HEADER_GUARD: &str = "LV_I18N_TRANSLATIONS_H";
const GENERATED_NOTICE: &str = "// Generated by tagsmith from the YAML translation catalog. Do not edit.";

/// Escape text for a C string literal.
///
/// Control characters without a short escape become 3-digit octal escapes,
/// which cannot swallow a following digit the way `\x` escapes do.
pub fn escape_c(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                let _ = write!(out, "\\{:03o}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

/// C identifier prefix for a locale: `"zh-CN"` -> `"zh_cn"`.
pub fn locale_ident(locale: &str) -> String {
    locale
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Fails when two locales map to the same [`locale_ident`].
pub fn check_locale_idents(catalog: &Catalog) -> Result<(), CatalogError> {
    let mut seen: BTreeMap<String, &str> = BTreeMap::new();
    for locale in catalog.locales() {
        let ident = locale_ident(locale);
        if let Some(first) = seen.get(&ident) {
            return Err(CatalogError::malformed(
                locale,
                format!(
                    "locales '{}' and '{}' both map to the C identifier '{}'",
                    first, locale, ident
                ),
            ));
        }
        seen.insert(ident, locale);
    }
    Ok(())
}

fn c_string(text: &str) -> String {
    format!("\"{}\"", escape_c(text))
}

/// Keys in a block comment; `*/` inside a key must not close it.
fn c_comment(text: &str) -> String {
    format!("/* {} */", escape_c(text).replace("*/", "*\\/"))
}

/// Sorted union of keys whose entry satisfies `pred` in any locale.
fn key_index(catalog: &Catalog, pred: fn(&TranslationEntry) -> bool) -> Vec<&str> {
    let keys: BTreeSet<&str> = catalog
        .iter()
        .flat_map(|(_, table)| {
            table
                .iter()
                .filter(move |(_, entry)| pred(entry))
                .map(|(k, _)| k.as_str())
        })
        .collect();
    keys.into_iter().collect()
}

fn singular_keys(catalog: &Catalog) -> Vec<&str> {
    key_index(catalog, |e| !e.is_plural())
}

fn plural_keys(catalog: &Catalog) -> Vec<&str> {
    key_index(catalog, TranslationEntry::is_plural)
}

/// Plural categories used by any plural entry of `table`, in runtime order.
fn plural_categories(table: &LocaleTable) -> Vec<PluralCategory> {
    let categories: BTreeSet<PluralCategory> = table
        .values()
        .filter_map(TranslationEntry::as_plural)
        .flat_map(|forms| forms.categories())
        .collect();
    categories.into_iter().collect()
}

fn write_key_table(out: &mut String, name: &str, keys: &[&str]) {
    let _ = writeln!(out, "const char * const {}[] = {{", name);
    for key in keys {
        let _ = writeln!(out, "    {},", c_string(key));
    }
    out.push_str("    NULL // End mark\n};\n\n");
}

fn write_singulars(out: &mut String, ident: &str, table: &LocaleTable, keys: &[&str]) {
    let _ = writeln!(out, "static const char * {}_singulars[] = {{", ident);
    for key in keys {
        match table.get(*key).and_then(TranslationEntry::as_plain) {
            Some(value) => {
                let _ = writeln!(out, "    {}, {}", c_string(value), c_comment(key));
            }
            None => {
                let _ = writeln!(out, "    NULL, {}", c_comment(key));
            }
        }
    }
    out.push_str("    NULL // End mark\n};\n\n");
}

fn write_plural_array(
    out: &mut String,
    ident: &str,
    category: PluralCategory,
    table: &LocaleTable,
    keys: &[&str],
) {
    let _ = writeln!(
        out,
        "static const char * {}_plurals_{}[] = {{",
        ident,
        category.as_str()
    );
    for key in keys {
        let value = table
            .get(*key)
            .and_then(TranslationEntry::as_plural)
            .and_then(|forms| forms.get(category));
        match value {
            Some(value) => {
                let _ = writeln!(out, "    {}, {}", c_string(value), c_comment(key));
            }
            None => {
                let _ = writeln!(out, "    NULL, {}", c_comment(key));
            }
        }
    }
    out.push_str("    NULL // End mark\n};\n\n");
}

fn write_plural_fn(out: &mut String, ident: &str, rule: &PluralRule) {
    let _ = writeln!(out, "static uint8_t {}_plural_fn(int32_t num)", ident);
    out.push_str("{\n");
    out.push_str("    uint32_t n = op_n(num); UNUSED(n);\n");
    out.push_str("    uint32_t i = op_i(n); UNUSED(i);\n");
    out.push_str("    uint32_t v = op_v(n); UNUSED(v);\n\n");
    for (category, condition) in rule.branches {
        let _ = writeln!(
            out,
            "    if ({}) return {};",
            condition,
            category.c_constant()
        );
    }
    let _ = writeln!(out, "    return {};", PluralCategory::Other.c_constant());
    out.push_str("}\n\n");
}

const OPERAND_HELPERS: &str = r#"#ifndef UNUSED
#define UNUSED(x) (void)(x)
#endif

static inline uint32_t op_n(int32_t val) { return (uint32_t) (val < 0 ? - val : val); }
static inline uint32_t op_i(uint32_t val) { return val; }
// always zero, when decimal part not exists.
static inline uint32_t op_v(uint32_t val) { UNUSED(val); return 0; }
static inline uint32_t op_w(uint32_t val) { UNUSED(val); return 0; }
static inline uint32_t op_f(uint32_t val) { UNUSED(val); return 0; }
static inline uint32_t op_t(uint32_t val) { UNUSED(val); return 0; }

"#;

/// Render the C source holding every locale's tables and the language pack.
///
/// Locales with no plural entries get neither plural arrays nor a plural
/// function. Languages without a known rule select `other` only.
pub fn render_source(catalog: &Catalog) -> String {
    let singular_keys = singular_keys(catalog);
    let plural_keys = plural_keys(catalog);

    let mut out = String::new();
    let _ = writeln!(out, "{}\n", GENERATED_NOTICE);
    let _ = writeln!(out, "#include \"{}\"\n", HEADER_FILE_NAME);
    out.push_str(OPERAND_HELPERS);

    write_key_table(&mut out, "lv_i18n_singular_keys", &singular_keys);
    write_key_table(&mut out, "lv_i18n_plural_keys", &plural_keys);

    for (locale, table) in catalog.iter() {
        let ident = locale_ident(locale);
        let _ = writeln!(
            out,
            "////////////////////////////////////////////////////////////////////////////////\n// {}\n",
            locale
        );

        write_singulars(&mut out, &ident, table, &singular_keys);

        let categories = plural_categories(table);
        for category in &categories {
            write_plural_array(&mut out, &ident, *category, table, &plural_keys);
        }
        if !categories.is_empty() {
            let rule = plural_rule_for(locale).unwrap_or(OTHER_ONLY);
            write_plural_fn(&mut out, &ident, &rule);
        }

        let _ = writeln!(out, "static const lv_i18n_lang_t {}_lang = {{", ident);
        let _ = writeln!(out, "    .locale_name = {},", c_string(locale));
        let _ = write!(out, "    .singulars = {}_singulars", ident);
        for category in &categories {
            let _ = write!(
                out,
                ",\n    .plurals[{}] = {}_plurals_{}",
                category.c_constant(),
                ident,
                category.as_str()
            );
        }
        if !categories.is_empty() {
            let _ = write!(out, ",\n    .locale_plural_fn = {}_plural_fn", ident);
        }
        out.push_str("\n};\n\n");
    }

    out.push_str("const lv_i18n_language_pack_t lv_i18n_language_pack[] = {\n");
    for locale in catalog.locales() {
        let _ = writeln!(out, "    &{}_lang,", locale_ident(locale));
    }
    out.push_str("    NULL // End mark\n};\n");
    out
}

/// Render the header matching [`render_source`].
pub fn render_header(catalog: &Catalog) -> String {
    let singular_count = singular_keys(catalog).len();
    let plural_count = plural_keys(catalog).len();

    let mut out = String::new();
    let _ = writeln!(out, "{}\n", GENERATED_NOTICE);
    let _ = writeln!(out, "#ifndef {}", HEADER_GUARD);
    let _ = writeln!(out, "#define {}\n", HEADER_GUARD);
    out.push_str("#ifdef __cplusplus\nextern \"C\" {\n#endif\n\n");
    out.push_str("#include <stddef.h>\n#include <stdint.h>\n\n");

    out.push_str("typedef enum {\n");
    for category in PluralCategory::ALL {
        let _ = writeln!(out, "    {},", category.c_constant());
    }
    out.push_str("    _LV_I18N_PLURAL_TYPE_NUM,\n} lv_i18n_plural_type_t;\n\n");

    out.push_str(
        "typedef struct {\n    \
             const char * locale_name;\n    \
             const char * const * singulars;\n    \
             const char * const * plurals[_LV_I18N_PLURAL_TYPE_NUM];\n    \
             uint8_t (*locale_plural_fn)(int32_t num);\n\
         } lv_i18n_lang_t;\n\n",
    );
    out.push_str("typedef const lv_i18n_lang_t * lv_i18n_language_pack_t;\n\n");

    let _ = writeln!(out, "#define LV_I18N_SINGULAR_COUNT {}", singular_count);
    let _ = writeln!(out, "#define LV_I18N_PLURAL_COUNT {}\n", plural_count);

    out.push_str("extern const char * const lv_i18n_singular_keys[];\n");
    out.push_str("extern const char * const lv_i18n_plural_keys[];\n");
    out.push_str("extern const lv_i18n_language_pack_t lv_i18n_language_pack[];\n\n");

    out.push_str("#ifdef __cplusplus\n} /* extern \"C\" */\n#endif\n\n");
    let _ = writeln!(out, "#endif /* {} */", HEADER_GUARD);
    out
}
