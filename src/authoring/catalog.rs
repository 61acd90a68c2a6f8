//! Title search over converted problem records.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use super::{ProblemRecord, RecordKind, parse_problem_json, readable_entry};
use crate::core::util::filter_by_query;

/// Load every problem JSON under `<data_dir>/problems`. Files that cannot be
/// read or parsed are skipped with a warning.
pub fn load_problems(data_dir: &Path) -> Vec<ProblemRecord> {
    let root = data_dir.join(RecordKind::Problem.data_subdir());
    if !root.is_dir() {
        log::warn!("No problem records at {}", root.display());
        return vec![];
    }

    WalkDir::new(&root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(readable_entry)
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"))
        .filter_map(|e| {
            let loaded = fs::read_to_string(e.path())
                .map_err(|err| err.to_string())
                .and_then(|json| parse_problem_json(&json).map_err(|err| err.to_string()));
            match loaded {
                Ok(problem) => Some(problem),
                Err(err) => {
                    log::warn!("Skipping {}: {}", e.path().display(), err);
                    None
                }
            }
        })
        .collect()
}

/// Problems whose title contains `query` (case-insensitive), ordered by title.
/// A blank query finds nothing.
pub fn search_titles<'a>(problems: &'a [ProblemRecord], query: &str) -> Vec<&'a ProblemRecord> {
    let query = query.trim();
    if query.is_empty() {
        return vec![];
    }
    let mut hits = filter_by_query(problems, query, |p| p.title.as_str());
    hits.sort_by(|a, b| a.title.cmp(&b.title));
    hits
}
