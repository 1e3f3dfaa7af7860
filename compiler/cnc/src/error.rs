use std::path::PathBuf;

use cn_parse::ParseError;

/// Failure of a CLI command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}:{column}: {source}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        #[source]
        source: ParseError,
    },

    #[error("path not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("{0}")]
    Usage(String),
}

impl CommandError {
    /// A parse error located by line and column within `text`.
    pub fn parse(path: impl Into<PathBuf>, text: &str, source: ParseError) -> Self {
        let (line, column) = line_column(text, source.offset());
        CommandError::Parse {
            path: path.into(),
            line,
            column,
            source,
        }
    }
}

/// One-based line and column (in characters) of a byte offset.
pub(crate) fn line_column(text: &str, offset: usize) -> (usize, usize) {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    let before = &text[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |pos| pos + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_line_column() {
        let text = "Root(\n  a=1,\n  b=\"é\")";
        assert_eq!(line_column(text, 0), (1, 1));
        assert_eq!(line_column(text, 6), (2, 1));
        assert_eq!(line_column(text, 10), (2, 5));
        assert_eq!(line_column(text, text.len()), (3, 9));
        assert_eq!(line_column(text, 1_000), (3, 9));
    }

    #[test]
    fn test_parse_error_display() {
        let text = "A(\n(x=1)";
        let error = CommandError::parse(
            "a.cn",
            text,
            ParseError::UnclosedDelimiter {
                open: '(',
                offset: 1,
            },
        );
        let message = error.to_string();
        assert!(message.starts_with("a.cn:1:2: "), "{message}");
    }
}
