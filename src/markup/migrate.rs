use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use glob::Pattern;
use rayon::prelude::*;
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::annotate::{MigrationRecord, annotate, collect_missing};
use crate::error::CatalogError;

/// Outcome of a migration run over a set of markup files.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    pub files_scanned: usize,
    pub files_changed: usize,
    /// All rewrites, ordered by file then line.
    pub migrations: Vec<MigrationRecord>,
    /// Untagged texts absent from the known keys, sorted and unique.
    pub missing: Vec<String>,
    /// Whether changed files were written back.
    pub applied: bool,
    /// Files that could not be read or written, sorted by path. Their
    /// rewrites are not part of `migrations`.
    pub failures: Vec<FileFailure>,
}

/// A markup file the migration could not process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub reason: String,
}

impl MigrationReport {
    pub fn has_changes(&self) -> bool {
        !self.migrations.is_empty()
    }

    /// True when some files were skipped because of I/O errors.
    pub fn is_partial(&self) -> bool {
        !self.failures.is_empty()
    }
}

fn is_markup_file(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("xml"))
}

/// Every `*.xml` file under `dir`, sorted, minus paths matching `ignores`.
///
/// Patterns are tested against both the path relative to `dir` and the full
/// path, so `**/globals.xml` works for either.
pub fn discover_markup_files(
    dir: &Path,
    ignores: &[Pattern],
) -> Result<Vec<PathBuf>, CatalogError> {
    if !dir.is_dir() {
        return Err(CatalogError::missing(dir));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("Cannot access path: {}", e);
                continue;
            }
        };
        let path = entry.path();
        if !entry.file_type().is_file() || !is_markup_file(path) {
            continue;
        }

        let relative = path.strip_prefix(dir).unwrap_or(path);
        if ignores
            .iter()
            .any(|p| p.matches_path(relative) || p.matches_path(path))
        {
            debug!(path = %path.display(), "ignored");
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

struct FileOutcome {
    records: Vec<MigrationRecord>,
    missing: Vec<String>,
}

fn migrate_file(
    path: &Path,
    known_keys: &BTreeSet<String>,
    apply: bool,
) -> Result<FileOutcome, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let label = path.display().to_string();
    let annotation = annotate(&label, &content, known_keys);
    let missing = collect_missing(&annotation.content, known_keys);

    if apply && annotation.changed() {
        fs::write(path, &annotation.content).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(file = %label, count = annotation.records.len(), "annotated");
    }

    Ok(FileOutcome {
        records: annotation.records,
        missing,
    })
}

/// Annotate `files` against `known_keys`, writing them back only when
/// `apply` is set.
///
/// Files are processed in parallel. A file that cannot be read or written
/// is recorded in [`MigrationReport::failures`] and the others still run.
pub fn run_migration(
    files: &[PathBuf],
    known_keys: &BTreeSet<String>,
    apply: bool,
) -> MigrationReport {
    let outcomes: Vec<_> = files
        .par_iter()
        .map(|path| (path, migrate_file(path, known_keys, apply)))
        .collect();

    let mut report = MigrationReport {
        files_scanned: files.len(),
        applied: apply,
        ..Default::default()
    };
    let mut missing = BTreeSet::new();

    for (path, outcome) in outcomes {
        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(path = %path.display(), "{}", e);
                report.failures.push(FileFailure {
                    path: path.clone(),
                    reason: e.to_string(),
                });
                continue;
            }
        };
        if !outcome.records.is_empty() {
            report.files_changed += 1;
        }
        report.migrations.extend(outcome.records);
        missing.extend(outcome.missing);
    }

    report.migrations.sort_by(|a, b| {
        a.file
            .cmp(&b.file)
            .then(a.line.cmp(&b.line))
            .then(a.old_text.cmp(&b.old_text))
    });
    report.missing = missing.into_iter().collect();
    report.failures.sort_by(|a, b| a.path.cmp(&b.path));
    report
}
