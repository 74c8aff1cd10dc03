//! Report formatting and printing utilities.
//!
//! Every printer writes to a `Write` so output can be captured in tests.
//! Kept separate from the pipeline so tagsmith can be used as a library.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use super::commands::{
    CommandResult, CommandSummary, ExportSummary, InitSummary, MigrateSummary,
};
use crate::{config::CONFIG_FILE_NAME, pipeline::GenerateResult, utils::truncate_display};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Maximum number of migrations or missing texts listed before eliding.
const MAX_ITEMS_DISPLAY: usize = 20;

/// Display width for translation keys and texts.
const MAX_TEXT_WIDTH: usize = 60;

pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock());
}

pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Generate(summary) => print_generate(summary, writer),
        CommandSummary::Migrate(summary) => print_migrate(summary, writer),
        CommandSummary::Export(summary) => print_export(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", count, if count == 1 { singular } else { plural })
}

fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string())
}

fn print_warning<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), message);
}

/// Print at most [`MAX_ITEMS_DISPLAY`] lines, then `... and N more`.
fn print_limited<W: Write>(lines: &[String], writer: &mut W) {
    for line in lines.iter().take(MAX_ITEMS_DISPLAY) {
        let _ = writeln!(writer, "  {}", line);
    }
    if lines.len() > MAX_ITEMS_DISPLAY {
        let _ = writeln!(
            writer,
            "  {}",
            format!("... and {} more", lines.len() - MAX_ITEMS_DISPLAY).dimmed()
        );
    }
}

fn print_generate<W: Write>(result: &GenerateResult, writer: &mut W) {
    for warning in &result.warnings {
        print_warning(warning, writer);
    }
    if !result.warnings.is_empty() {
        let _ = writeln!(writer);
    }

    let headline = format!(
        "Generated {} for {} ({})",
        plural(result.outputs.len(), "file", "files"),
        plural(result.locales.len(), "locale", "locales"),
        plural(result.key_count, "key", "keys"),
    );
    if result.success {
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), headline.green());
    } else {
        let _ = writeln!(
            writer,
            "{} {} {}",
            FAILURE_MARK.red(),
            headline.red(),
            "(base locale missing)".red()
        );
    }

    for path in &result.outputs {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), path.display());
    }
}

fn print_migrate<W: Write>(summary: &MigrateSummary, writer: &mut W) {
    let report = &summary.report;

    let _ = writeln!(
        writer,
        "Loaded {} from {}",
        plural(summary.known_key_count, "translation tag", "translation tags"),
        summary.translations_xml.display()
    );
    let _ = writeln!(
        writer,
        "Scanned {}",
        plural(report.files_scanned, "markup file", "markup files")
    );
    let _ = writeln!(writer);

    if report.has_changes() {
        let verb = if report.applied {
            "Added".green().bold()
        } else {
            "Would add".yellow().bold()
        };
        let _ = writeln!(
            writer,
            "{} {} in {}:",
            verb,
            plural(report.migrations.len(), "translation tag", "translation tags"),
            plural(report.files_changed, "file", "files")
        );
        let lines: Vec<String> = report
            .migrations
            .iter()
            .map(|m| {
                format!(
                    "{}:{} - {}",
                    file_name(&m.file),
                    m.line,
                    truncate_display(&m.translation_key, MAX_TEXT_WIDTH)
                )
            })
            .collect();
        print_limited(&lines, writer);
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "No migrations needed".green()
        );
    }

    if !report.missing.is_empty() {
        let _ = writeln!(writer);
        print_warning(
            &format!(
                "{} missing from translations:",
                plural(report.missing.len(), "text", "texts")
            ),
            writer,
        );
        let lines: Vec<String> = report
            .missing
            .iter()
            .map(|text| format!("- {}", truncate_display(text, MAX_TEXT_WIDTH)))
            .collect();
        print_limited(&lines, writer);
    }

    if report.is_partial() {
        let _ = writeln!(writer);
        let _ = writeln!(
            writer,
            "{} {} could not be migrated:",
            "error:".bold().red(),
            plural(report.failures.len(), "file", "files")
        );
        let lines: Vec<String> = report
            .failures
            .iter()
            .map(|f| format!("{} {}", FAILURE_MARK, f.reason))
            .collect();
        print_limited(&lines, writer);
    }

    if let Some(added) = &summary.add_missing {
        let _ = writeln!(writer);
        if report.applied {
            let _ = writeln!(
                writer,
                "{} {} to {}",
                "Added".green().bold(),
                plural(added.count, "key", "keys"),
                added.yaml_file.display()
            );
            if added.count > 0 {
                let _ = writeln!(
                    writer,
                    "Run {} to update translations.xml.",
                    "tagsmith generate".cyan()
                );
            }
        } else {
            let _ = writeln!(
                writer,
                "{} {} to {}",
                "Would add".yellow().bold(),
                plural(added.count, "key", "keys"),
                added.yaml_file.display()
            );
        }
    }

    if !report.applied && (report.has_changes() || summary.add_missing.is_some()) {
        let _ = writeln!(writer);
        let _ = writeln!(writer, "Run with {} to write these changes.", "--apply".cyan());
    }
}

fn print_export<W: Write>(summary: &ExportSummary, writer: &mut W) {
    for (path, entries) in &summary.written {
        let _ = writeln!(
            writer,
            "  {} {} ({})",
            "-->".blue(),
            path.display(),
            plural(*entries, "entry", "entries")
        );
    }
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Exported {} from {}",
            plural(summary.written.len(), "locale", "locales"),
            summary.source.display()
        )
        .green()
    );
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} already exists", CONFIG_FILE_NAME).red()
        );
    }
}

// ============================================================
// Tests
// ============================================================
