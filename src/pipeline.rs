//! YAML catalog -> XML catalog + lv_i18n C tables.
//!
//! Validation findings never fail a run; they are returned as warning lines
//! in a fixed order: declared-locale conflicts, unknown plural rules,
//! missing translations, keys absent from the base locale.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::{
    catalog::{
        Catalog, LocaleMismatch, format_warnings, load_catalog_dir, plural_rule_for,
        validate_catalog,
    },
    emit::{
        HEADER_FILE_NAME, SOURCE_FILE_NAME, XML_FILE_NAME, check_locale_idents, render_header,
        render_source, render_xml,
    },
    error::CatalogError,
};

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub yaml_dir: PathBuf,
    pub xml_output_dir: PathBuf,
    pub native_output_dir: PathBuf,
    pub base_locale: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub content: String,
}

#[derive(Debug, Clone, Default)]
pub struct GenerateResult {
    /// False when the base locale is absent from the catalog. Outputs are
    /// still written.
    pub success: bool,
    pub warnings: Vec<String>,
    /// Written files, in write order: XML, C source, C header.
    pub outputs: Vec<PathBuf>,
    pub locales: Vec<String>,
    pub key_count: usize,
}

/// Warning lines for a loaded catalog.
pub fn collect_warnings(
    catalog: &Catalog,
    mismatches: &[LocaleMismatch],
    base_locale: &str,
) -> Vec<String> {
    let mut warnings: Vec<String> = mismatches
        .iter()
        .map(|m| {
            format!(
                "{}: declares locale '{}', expected '{}'",
                m.source, m.declared, m.expected
            )
        })
        .collect();

    warnings.extend(
        catalog
            .iter()
            .filter(|(_, table)| table.values().any(|entry| entry.is_plural()))
            .filter(|(locale, _)| plural_rule_for(locale).is_none())
            .map(|(locale, _)| {
                format!(
                    "{}: no plural rule known for this language, using 'other' for every quantity",
                    locale
                )
            }),
    );

    if !catalog.contains_locale(base_locale) {
        warnings.push(format!(
            "base locale '{}' not found in catalog",
            base_locale
        ));
    }

    warnings.extend(format_warnings(&validate_catalog(catalog, base_locale)));
    warnings
}

/// Render all three outputs for `catalog` without touching the filesystem.
pub fn render_outputs(catalog: &Catalog, options: &GenerateOptions) -> Vec<GeneratedFile> {
    vec![
        GeneratedFile {
            path: options.xml_output_dir.join(XML_FILE_NAME),
            content: render_xml(catalog),
        },
        GeneratedFile {
            path: options.native_output_dir.join(SOURCE_FILE_NAME),
            content: render_source(catalog),
        },
        GeneratedFile {
            path: options.native_output_dir.join(HEADER_FILE_NAME),
            content: render_header(catalog),
        },
    ]
}

fn write_output(file: &GeneratedFile) -> Result<()> {
    if let Some(parent) = file.path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(&file.path, &file.content)
        .with_context(|| format!("Failed to write: {}", file.path.display()))?;
    debug!(path = %file.path.display(), bytes = file.content.len(), "wrote output");
    Ok(())
}

fn ensure_catalog_present(dir: &Path, catalog: &Catalog) -> Result<(), CatalogError> {
    if catalog.is_empty() {
        return Err(CatalogError::missing(dir));
    }
    Ok(())
}

/// Load, validate and emit. Fails only on unreadable or malformed inputs and
/// write errors.
pub fn generate_all(options: &GenerateOptions) -> Result<GenerateResult> {
    let loaded = load_catalog_dir(&options.yaml_dir)?;
    ensure_catalog_present(&options.yaml_dir, &loaded.catalog)?;
    let catalog = loaded.catalog;
    check_locale_idents(&catalog)?;

    info!(
        locales = catalog.len(),
        dir = %options.yaml_dir.display(),
        "loaded catalog"
    );

    let warnings = collect_warnings(&catalog, &loaded.mismatches, &options.base_locale);
    debug!(count = warnings.len(), "collected warnings");

    let mut outputs = Vec::new();
    for file in render_outputs(&catalog, options) {
        write_output(&file)?;
        outputs.push(file.path);
    }

    Ok(GenerateResult {
        success: catalog.contains_locale(&options.base_locale),
        warnings,
        outputs,
        locales: catalog.locales().map(String::from).collect(),
        key_count: catalog.all_keys().len(),
    })
}
