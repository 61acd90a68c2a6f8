//! Batch conversion of a content tree: every source file becomes a JSON record
//! and a SQL file under the data directory.
//!
//! Files are processed one after another. A file that fails is logged and
//! recorded in the report; the rest of the tree is still converted.

use std::fs;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};
use serde::Serialize;
use walkdir::WalkDir;

use super::{AuthoringError, CategoryRecord, ProblemRecord, RecordKind, readable_entry, sql};

/// Directories always skipped during traversal.
const IGNORED_DIRS: &[&str] = &["node_modules", "target", ".git", ".cache", "dist", "build"];

/// Outputs written for one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFile {
    pub source: PathBuf,
    pub json: PathBuf,
    pub sql: PathBuf,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<ConvertedFile>,
    pub failed: Vec<(PathBuf, AuthoringError)>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.converted.len() + self.failed.len()
    }
}

/// Returns `true` if this directory entry should be pruned from traversal.
fn is_ignored(entry: &walkdir::DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|n| IGNORED_DIRS.contains(&n))
}

fn source_matcher(kind: RecordKind) -> Result<GlobMatcher, AuthoringError> {
    Ok(Glob::new(&format!("*.{}", kind.source_extension()))?.compile_matcher())
}

/// All source files of `kind` under `root`, in a stable (sorted) order.
pub fn find_sources(root: &Path, kind: RecordKind) -> Result<Vec<PathBuf>, AuthoringError> {
    if !root.is_dir() {
        return Err(AuthoringError::NotADirectory(root.to_path_buf()));
    }
    let matcher = source_matcher(kind)?;
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_ignored(e));

    let mut sources = Vec::new();
    for entry in walker.filter_map(readable_entry) {
        if entry.file_type().is_file() && matcher.is_match(entry.file_name()) {
            sources.push(entry.into_path());
        }
    }
    Ok(sources)
}

/// Convert one source file and write its JSON and SQL under `data_dir`.
pub fn convert_file(
    kind: RecordKind,
    source: &Path,
    data_dir: &Path,
) -> Result<ConvertedFile, AuthoringError> {
    let text = fs::read_to_string(source).map_err(|e| AuthoringError::io(source, e))?;
    let base = data_dir.join(kind.data_subdir());
    let converted = match kind {
        RecordKind::Problem => {
            let record = ProblemRecord::from_mdx(source, &text)?;
            let dir = base.join(&record.difficulty).join(&record.category);
            write_record(source, &dir, &record.id, &record, &sql::problem_upsert(&record))?
        }
        RecordKind::Category => {
            let record = CategoryRecord::from_mdc(&text)?;
            let dir = base.join(&record.difficulty);
            write_record(source, &dir, &record.id, &record, &sql::category_upsert(&record))?
        }
    };
    log::info!(
        "Converted {} -> {}",
        source.display(),
        converted.json.display()
    );
    Ok(converted)
}

fn write_record<T: Serialize>(
    source: &Path,
    dir: &Path,
    id: &str,
    record: &T,
    sql: &str,
) -> Result<ConvertedFile, AuthoringError> {
    fs::create_dir_all(dir).map_err(|e| AuthoringError::io(dir, e))?;
    let json_path = dir.join(format!("{}.json", id));
    let sql_path = dir.join(format!("{}.sql", id));

    let json = serde_json::to_string_pretty(record)?;
    fs::write(&json_path, json).map_err(|e| AuthoringError::io(&json_path, e))?;
    fs::write(&sql_path, sql).map_err(|e| AuthoringError::io(&sql_path, e))?;

    Ok(ConvertedFile {
        source: source.to_path_buf(),
        json: json_path,
        sql: sql_path,
    })
}

/// Convert every source file of `kind` under `root`.
///
/// Only a missing root or a bad pattern aborts; per-file failures are
/// collected in the report.
pub fn process_all(
    kind: RecordKind,
    root: &Path,
    data_dir: &Path,
) -> Result<BatchReport, AuthoringError> {
    let sources = find_sources(root, kind)?;
    log::info!(
        "Found {} .{} file(s) under {}",
        sources.len(),
        kind.source_extension(),
        root.display()
    );

    let mut report = BatchReport::default();
    for source in sources {
        match convert_file(kind, &source, data_dir) {
            Ok(converted) => report.converted.push(converted),
            Err(e) => {
                log::warn!("Failed to convert {}: {}", source.display(), e);
                report.failed.push((source, e));
            }
        }
    }
    Ok(report)
}
