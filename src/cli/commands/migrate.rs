use std::{fs, path::Path};

use anyhow::{Context, Result};
use tracing::info;

use super::super::{args::MigrateArgs, exit_status::ExitStatus};
use super::helper::Project;
use super::{AddMissingSummary, CommandResult, CommandSummary, MigrateSummary};
use crate::{
    catalog::{append_missing_keys, load_master_tags},
    error::CatalogError,
    markup::{discover_markup_files, run_migration},
};

pub fn migrate(args: MigrateArgs) -> Result<CommandResult> {
    let project = Project::load()?;
    let config = &project.config;

    let translations_xml =
        project.resolve(args.translations_xml.as_deref(), &config.translations_xml);
    let markup_dir = project.resolve(args.markup_dir.as_deref(), &config.markup_dir);

    let known_keys = load_master_tags(&translations_xml)?;
    info!(
        count = known_keys.len(),
        path = %translations_xml.display(),
        "loaded translation tags"
    );

    let files = discover_markup_files(&markup_dir, &config.ignore_patterns()?)?;
    info!(count = files.len(), "markup files to scan");

    let report = run_migration(&files, &known_keys, args.apply);

    let add_missing = if args.add_missing && !report.missing.is_empty() {
        let default_yaml = format!("{}/{}.yml", config.yaml_dir, config.base_locale);
        let yaml_file = project.resolve(args.yaml_file.as_deref(), &default_yaml);
        let count = if args.apply {
            add_missing_keys(&yaml_file, &report.missing)?
        } else {
            report.missing.len()
        };
        Some(AddMissingSummary { yaml_file, count })
    } else {
        None
    };

    let status = if report.is_partial() {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    };

    Ok(CommandResult {
        summary: CommandSummary::Migrate(MigrateSummary {
            translations_xml,
            known_key_count: known_keys.len(),
            report,
            add_missing,
        }),
        status,
    })
}

fn add_missing_keys(yaml_file: &Path, keys: &[String]) -> Result<usize> {
    if !yaml_file.is_file() {
        return Err(CatalogError::missing(yaml_file).into());
    }
    let content = fs::read_to_string(yaml_file)
        .with_context(|| format!("Failed to read: {}", yaml_file.display()))?;

    let (updated, added) = append_missing_keys(&content, keys.iter().map(String::as_str));
    if added > 0 {
        fs::write(yaml_file, updated)
            .with_context(|| format!("Failed to write: {}", yaml_file.display()))?;
    }
    Ok(added)
}
