//! The `parse` command: dump a declaration tree.

use std::fmt::Write as _;
use std::path::Path;

use cn_fmt::{value_to_text, FormatConfig};
use cn_ir::Declaration;
use cn_parse::{parse_declaration, parse_declaration_strict};

use super::read_file;
use crate::CommandError;

/// Parse a notation file and render its tree.
///
/// With `strict`, structural defects are reported instead of tolerated.
pub fn parse_file(path: &Path, strict: bool) -> Result<String, CommandError> {
    let text = read_file(path)?;
    let declaration = if strict {
        parse_declaration_strict(&text).map_err(|e| CommandError::parse(path, &text, e))?
    } else {
        parse_declaration(&text)
    };
    Ok(dump_tree(&declaration))
}

/// One line per declaration, members below it, indented by depth.
///
/// ```text
/// Foo
///   .a: str = "x,y"
///   Bar
/// ```
pub fn dump_tree(declaration: &Declaration) -> String {
    let config = FormatConfig::default();
    let mut out = String::new();
    for (node, depth) in declaration.walk() {
        let indent = "  ".repeat(depth);
        let _ = writeln!(out, "{indent}{}", node.name);
        for member in &node.members {
            let _ = writeln!(
                out,
                "{indent}  .{}: {} = {}",
                member.key,
                member.value.type_name(),
                value_to_text(&member.value, &config)
            );
        }
    }
    out
}
