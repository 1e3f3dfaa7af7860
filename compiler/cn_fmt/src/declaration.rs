//! [`Declaration`] trees to notation text.
//!
//! Compact layout follows the grammar directly: the name, then the member
//! list in parentheses only when members exist, then the child list in
//! brackets only when children exist. Members are joined with `,`, children
//! with `, `.
//!
//! Pretty layout keeps a declaration on one line while it fits in
//! [`FormatConfig::max_width`] columns at its indentation. Otherwise the
//! member list stays on the header line and each child moves to its own
//! line, one level deeper.

use cn_ir::{Declaration, Member};
use cn_stack::ensure_sufficient_stack;

use crate::config::Layout;
use crate::value::write_value;
use crate::FormatConfig;

/// Serialize a declaration tree.
#[tracing::instrument(level = "trace", skip_all, fields(name = %declaration.name))]
pub fn declaration_to_text(declaration: &Declaration, config: &FormatConfig) -> String {
    let mut out = String::new();
    match config.layout {
        Layout::Compact => write_compact(&mut out, declaration, config),
        Layout::Pretty => write_pretty(&mut out, declaration, config, 0),
    }
    out
}

fn write_compact(out: &mut String, declaration: &Declaration, config: &FormatConfig) {
    write_header(out, declaration, config);
    if declaration.children.is_empty() {
        return;
    }
    out.push('[');
    for (i, child) in declaration.children.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        ensure_sufficient_stack(|| write_compact(out, child, config));
    }
    out.push(']');
}

fn write_pretty(out: &mut String, declaration: &Declaration, config: &FormatConfig, level: usize) {
    let indent = level * config.indent_size;
    let mut flat = String::new();
    write_compact(&mut flat, declaration, config);
    if declaration.children.is_empty() || indent + flat.len() <= config.max_width {
        out.push_str(&flat);
        return;
    }

    write_header(out, declaration, config);
    out.push_str("[\n");
    let child_indent = " ".repeat(indent + config.indent_size);
    for (i, child) in declaration.children.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n");
        }
        out.push_str(&child_indent);
        ensure_sufficient_stack(|| write_pretty(out, child, config, level + 1));
    }
    out.push('\n');
    out.push_str(&" ".repeat(indent));
    out.push(']');
}

/// Name and member list.
fn write_header(out: &mut String, declaration: &Declaration, config: &FormatConfig) {
    out.push_str(&declaration.name);
    if declaration.members.is_empty() {
        return;
    }
    out.push('(');
    for (i, member) in declaration.members.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_member(out, member, config);
    }
    out.push(')');
}

fn write_member(out: &mut String, member: &Member, config: &FormatConfig) {
    out.push_str(&member.key);
    out.push('=');
    write_value(out, &member.value, config);
}
