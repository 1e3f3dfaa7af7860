//! The `check` command: strict structural validation.

use std::path::{Path, PathBuf};

use cn_parse::check_declaration;

use super::read_file;
use crate::CommandError;

/// Every structural defect in `text`, located by line and column.
pub fn check_source(path: &Path, text: &str) -> Vec<CommandError> {
    check_declaration(text)
        .into_iter()
        .map(|defect| CommandError::parse(path, text, defect))
        .collect()
}

/// Check each file, printing defects to stderr.
///
/// Returns the number of files with at least one defect. Unreadable files
/// count as defective.
pub fn check_files(files: &[PathBuf]) -> usize {
    let mut failed = 0;
    for path in files {
        let defects = match read_file(path) {
            Ok(text) => check_source(path, &text),
            Err(e) => vec![e],
        };
        if defects.is_empty() {
            tracing::debug!(path = %path.display(), "clean");
            continue;
        }
        for defect in &defects {
            eprintln!("error: {defect}");
        }
        failed += 1;
    }
    failed
}
