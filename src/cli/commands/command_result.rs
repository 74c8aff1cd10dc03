use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use crate::{markup::MigrationReport, pipeline::GenerateResult};

#[derive(Debug)]
pub enum CommandSummary {
    Generate(GenerateResult),
    Migrate(MigrateSummary),
    Export(ExportSummary),
    Init(InitSummary),
}

/// Outcome of `--add-missing`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddMissingSummary {
    pub yaml_file: PathBuf,
    /// Keys appended, or that would be appended in a dry run.
    pub count: usize,
}

#[derive(Debug)]
pub struct MigrateSummary {
    pub translations_xml: PathBuf,
    pub known_key_count: usize,
    pub report: MigrationReport,
    pub add_missing: Option<AddMissingSummary>,
}

#[derive(Debug)]
pub struct ExportSummary {
    pub source: PathBuf,
    /// Written files with the number of entries in each.
    pub written: Vec<(PathBuf, usize)>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a tagsmith command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub status: ExitStatus,
}
