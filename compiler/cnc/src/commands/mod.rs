//! Command handlers for the `cn` CLI.
//!
//! Each submodule implements one command. Shared file handling lives here.

mod check;
mod eval;
mod fmt;
mod parse;

pub use check::{check_files, check_source};
pub use eval::eval_expression;
pub use fmt::{format_content, format_file, parse_fmt_args, run_format, FmtOptions, FormatResult};
pub use parse::{dump_tree, parse_file};

use std::path::{Path, PathBuf};

use crate::CommandError;

/// File extension of notation files picked up from directories.
pub const EXTENSION: &str = "cn";

pub(crate) fn read_file(path: &Path) -> Result<String, CommandError> {
    std::fs::read_to_string(path).map_err(|source| CommandError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Expand the given paths into notation files.
///
/// Files are taken as given whatever their extension; directories are walked
/// recursively for `.cn` files, skipping hidden entries. The result is sorted
/// so output order does not depend on the file system.
pub fn collect_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>, CommandError> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            visit_notation_files(path, &mut files)?;
        } else {
            return Err(CommandError::NotFound { path: path.clone() });
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

fn visit_notation_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), CommandError> {
    let entries = std::fs::read_dir(dir).map_err(|source| CommandError::Read {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries.flatten() {
        let path = entry.path();
        if path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| name.starts_with('.'))
        {
            continue;
        }
        if path.is_dir() {
            visit_notation_files(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == EXTENSION) {
            files.push(path);
        }
    }
    Ok(())
}
