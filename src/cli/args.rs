//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: YAML catalog -> translations.xml + lv_i18n C tables
//! - `migrate`: add translation tag attributes to UI markup
//! - `export`: translations.xml -> one YAML unit per locale
//! - `init`: write a default `.tagsmithrc.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Generate(args)) => args.common.verbose,
            Some(Command::Migrate(args)) => args.common.verbose,
            Some(Command::Export(args)) => args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Directory of per-locale YAML files (overrides config file)
    #[arg(long)]
    pub yaml_dir: Option<PathBuf>,

    /// Directory receiving translations.xml (overrides config file)
    #[arg(long)]
    pub xml_output_dir: Option<PathBuf>,

    /// Directory receiving the generated C source and header (overrides config file)
    #[arg(long)]
    pub native_output_dir: Option<PathBuf>,

    /// Reference locale for completeness checks (overrides config file)
    #[arg(long)]
    pub base_locale: Option<String>,
}

#[derive(Debug, Args)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Directory scanned for *.xml markup (overrides config file)
    #[arg(long)]
    pub markup_dir: Option<PathBuf>,

    /// Master catalog providing the known tags (overrides config file)
    #[arg(long)]
    pub translations_xml: Option<PathBuf>,

    /// Base locale YAML file for --add-missing (default: <yamlDir>/<baseLocale>.yml)
    #[arg(long)]
    pub yaml_file: Option<PathBuf>,

    /// Actually rewrite files (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    /// Append untagged texts missing from the catalog to the base locale YAML
    #[arg(long)]
    pub add_missing: bool,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// XML catalog to convert (overrides config file)
    #[arg(long)]
    pub translations_xml: Option<PathBuf>,

    /// Directory receiving <locale>.yml files (default: config yamlDir)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate translations.xml and lv_i18n C tables from the YAML catalog
    Generate(GenerateArgs),
    /// Add translation tag attributes to text attributes in UI markup
    Migrate(MigrateArgs),
    /// Convert translations.xml into per-locale YAML files
    Export(ExportArgs),
    /// Initialize a new .tagsmithrc.json configuration file
    Init,
}
