use std::fs;

use anyhow::{Context, Result};
use tracing::debug;

use super::super::{args::ExportArgs, exit_status::ExitStatus};
use super::helper::Project;
use super::{CommandResult, CommandSummary, ExportSummary};
use crate::{
    catalog::{parse_xml_catalog, render_yaml_unit},
    error::CatalogError,
};

/// Convert the XML master catalog into `<locale>.yml` units, overwriting
/// existing files.
pub fn export(args: ExportArgs) -> Result<CommandResult> {
    let project = Project::load()?;
    let config = &project.config;

    let source = project.resolve(args.translations_xml.as_deref(), &config.translations_xml);
    let output_dir = project.resolve(args.output_dir.as_deref(), &config.yaml_dir);

    if !source.is_file() {
        return Err(CatalogError::missing(&source).into());
    }
    let text = fs::read_to_string(&source)
        .with_context(|| format!("Failed to read: {}", source.display()))?;
    let catalog = parse_xml_catalog(&source.to_string_lossy(), &text)?;

    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

    let mut written = Vec::with_capacity(catalog.len());
    for (locale, table) in catalog.iter() {
        let path = output_dir.join(format!("{}.yml", locale));
        fs::write(&path, render_yaml_unit(locale, table))
            .with_context(|| format!("Failed to write: {}", path.display()))?;
        debug!(path = %path.display(), entries = table.len(), "exported locale");
        written.push((path, table.len()));
    }

    Ok(CommandResult {
        summary: CommandSummary::Export(ExportSummary { source, written }),
        status: ExitStatus::Success,
    })
}
