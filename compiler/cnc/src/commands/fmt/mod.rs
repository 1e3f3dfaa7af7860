//! The `fmt` command: rewrite notation files in canonical form.
//!
//! Files are parsed strictly, so a malformed file is reported rather than
//! rewritten from a degraded tree. Multiple files are processed in parallel.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use cn_fmt::{declaration_to_text, FormatConfig, Layout};
use cn_parse::parse_declaration_strict;
use rayon::prelude::*;

use super::{collect_files, read_file};
use crate::CommandError;

/// Options for the format command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FmtOptions {
    /// Report files that would change without modifying them.
    pub check: bool,
    /// Print a diff instead of modifying files.
    pub diff: bool,
    /// Serializer settings.
    pub format: FormatConfig,
}

/// Result of formatting a single file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatResult {
    /// Already in canonical form.
    Unchanged,
    /// Rewritten on disk.
    Formatted,
    /// Would change (check or diff mode).
    WouldFormat,
}

/// Canonical text for one declaration, with a trailing newline.
pub fn format_content(
    path: &Path,
    content: &str,
    config: &FormatConfig,
) -> Result<String, CommandError> {
    let declaration =
        parse_declaration_strict(content).map_err(|e| CommandError::parse(path, content, e))?;
    let mut formatted = declaration_to_text(&declaration, config);
    formatted.push('\n');
    Ok(formatted)
}

/// Format one file according to `options`.
pub fn format_file(path: &Path, options: &FmtOptions) -> Result<FormatResult, CommandError> {
    let content = read_file(path)?;
    let formatted = format_content(path, &content, &options.format)?;

    if formatted == content {
        return Ok(FormatResult::Unchanged);
    }
    if options.diff {
        print!("{}", render_diff(path, &content, &formatted));
        return Ok(FormatResult::WouldFormat);
    }
    if options.check {
        return Ok(FormatResult::WouldFormat);
    }

    std::fs::write(path, &formatted).map_err(|source| CommandError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(FormatResult::Formatted)
}

/// Line-by-line diff with two lines of context around each changed region.
fn render_diff(path: &Path, original: &str, formatted: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- {}", path.display());
    let _ = writeln!(out, "+++ {}", path.display());

    let original_lines: Vec<&str> = original.lines().collect();
    let formatted_lines: Vec<&str> = formatted.lines().collect();
    let max_lines = original_lines.len().max(formatted_lines.len());

    let mut i = 0;
    while i < max_lines {
        if original_lines.get(i) == formatted_lines.get(i) {
            i += 1;
            continue;
        }

        let start = i.saturating_sub(2);
        let end = (i + 3).min(max_lines);
        let _ = writeln!(
            out,
            "@@ -{},{} +{},{} @@",
            start + 1,
            end - start,
            start + 1,
            end - start
        );
        for j in start..end {
            match (original_lines.get(j), formatted_lines.get(j)) {
                (Some(old), Some(new)) if old == new => {
                    let _ = writeln!(out, " {old}");
                }
                (Some(old), Some(new)) => {
                    let _ = writeln!(out, "-{old}");
                    let _ = writeln!(out, "+{new}");
                }
                (Some(old), None) => {
                    let _ = writeln!(out, "-{old}");
                }
                (None, Some(new)) => {
                    let _ = writeln!(out, "+{new}");
                }
                (None, None) => {}
            }
        }
        i = end;
    }
    out
}

/// Parse `fmt` arguments into options and paths.
///
/// Paths default to the current directory.
pub fn parse_fmt_args(args: &[String]) -> Result<(FmtOptions, Vec<PathBuf>), CommandError> {
    let mut options = FmtOptions::default();
    let mut paths = Vec::new();

    for arg in args {
        match arg.as_str() {
            "--check" => options.check = true,
            "--diff" => options.diff = true,
            "--pretty" => options.format.layout = Layout::Pretty,
            "--alpha" => options.format.emit_alpha = true,
            arg if arg.starts_with("--precision=") => {
                let digits = &arg["--precision=".len()..];
                let precision = digits.parse().map_err(|_| {
                    CommandError::Usage(format!("invalid precision '{digits}'"))
                })?;
                options.format.float_precision = Some(precision);
            }
            arg if arg.starts_with('-') => {
                return Err(CommandError::Usage(format!("unknown option: {arg}")));
            }
            _ => paths.push(PathBuf::from(arg)),
        }
    }

    if paths.is_empty() {
        paths.push(PathBuf::from("."));
    }
    Ok((options, paths))
}

/// Run the format command. Returns `false` when any file failed, or when
/// check mode found a file that would change.
pub fn run_format(args: &[String]) -> bool {
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_fmt_help();
        return true;
    }

    let (options, paths) = match parse_fmt_args(args).and_then(|(options, paths)| {
        collect_files(&paths).map(|files| (options, files))
    }) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("error: {e}");
            return false;
        }
    };

    let formatted_count = AtomicUsize::new(0);
    let unchanged_count = AtomicUsize::new(0);
    let error_count = AtomicUsize::new(0);

    paths.par_iter().for_each(|path| match format_file(path, &options) {
        Ok(FormatResult::Formatted) => {
            if !options.check && !options.diff {
                println!("Formatted: {}", path.display());
            }
            formatted_count.fetch_add(1, Ordering::Relaxed);
        }
        Ok(FormatResult::WouldFormat) => {
            if options.check {
                println!("Would format: {}", path.display());
            }
            formatted_count.fetch_add(1, Ordering::Relaxed);
        }
        Ok(FormatResult::Unchanged) => {
            unchanged_count.fetch_add(1, Ordering::Relaxed);
        }
        Err(e) => {
            eprintln!("error: {e}");
            error_count.fetch_add(1, Ordering::Relaxed);
        }
    });

    let formatted = formatted_count.load(Ordering::Relaxed);
    let unchanged = unchanged_count.load(Ordering::Relaxed);
    let errors = error_count.load(Ordering::Relaxed);

    if paths.len() > 1 {
        let verb = if options.check || options.diff {
            "would format"
        } else {
            "formatted"
        };
        println!("\n{formatted} {verb}, {unchanged} unchanged");
    }

    errors == 0 && !(options.check && formatted > 0)
}

fn print_fmt_help() {
    println!("Format Component Notation files");
    println!();
    println!("Usage: cn fmt [options] [paths...]");
    println!();
    println!("Arguments:");
    println!("  paths            Files or directories to format (default: .)");
    println!();
    println!("Options:");
    println!("  --check          Check if files are formatted (exit 1 if not)");
    println!("  --diff           Show diff output instead of modifying files");
    println!("  --pretty         Break wide child lists onto indented lines");
    println!("  --alpha          Keep alpha on colors that are not opaque");
    println!("  --precision=N    Write floats with N decimals");
    println!("  --help           Show this help message");
}

#[cfg(test)]
mod tests;
