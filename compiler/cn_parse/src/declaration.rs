//! Declaration text to [`Declaration`] trees.
//!
//! ```text
//! Declaration := Name [ "(" MemberList ")" ] [ "[" ChildList "]" ]
//! MemberList  := Member { "," Member }
//! Member      := Identifier [ "=" Value ]
//! ChildList   := Declaration { "," Declaration }
//! ```
//!
//! A member without `=` is a flag and stands for `key=true`. Member order is
//! preserved exactly as written; the object factory binds members by
//! position.

use cn_ir::{Declaration, Member};
use cn_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::literal::parse_value;
use crate::scanner::{scan_declaration, Segment};
use crate::ParseError;

/// Parse one declaration, tolerating malformed structure.
///
/// Never fails. Text without any `(`/`[` becomes a leaf named after the whole
/// trimmed text; unbalanced delimiters or unterminated quotes produce
/// whatever shape the scan reached.
#[tracing::instrument(level = "trace", skip_all, fields(len = text.len()))]
pub fn parse_declaration(text: &str) -> Declaration {
    let mut defects = Vec::new();
    let declaration = build(text, 0, &mut defects);
    if let Some(first) = defects.first() {
        debug!(
            count = defects.len(),
            first = %first,
            "tolerated malformed declaration"
        );
    }
    declaration
}

/// Parse one declaration, rejecting structural defects.
///
/// Returns the defect with the lowest offset. Literal-level
/// problems (such as a number that does not parse) are still not errors.
pub fn parse_declaration_strict(text: &str) -> Result<Declaration, ParseError> {
    let mut defects = Vec::new();
    let declaration = build(text, 0, &mut defects);
    match normalize(defects).into_iter().next() {
        Some(first) => Err(first),
        None => Ok(declaration),
    }
}

/// Every structural defect in a declaration tree, children included, ordered
/// by offset.
pub fn check_declaration(text: &str) -> Vec<ParseError> {
    let mut defects = Vec::new();
    build(text, 0, &mut defects);
    normalize(defects)
}

/// Order defects by offset and drop repeats.
///
/// A defect inside a child is seen twice: once by the parent's scan and once
/// when the child text is scanned on its own.
fn normalize(mut defects: Vec<ParseError>) -> Vec<ParseError> {
    defects.sort_by_key(ParseError::offset);
    defects.dedup();
    defects
}

fn build(text: &str, base: usize, defects: &mut Vec<ParseError>) -> Declaration {
    let scan = scan_declaration(text, base, defects);
    if scan.name.text.is_empty() {
        defects.push(ParseError::EmptyName {
            offset: scan.name.offset,
        });
    }
    trace!(
        name = scan.name.text,
        members = scan.members.len(),
        children = scan.children.len(),
        "split declaration"
    );

    let mut members = Vec::with_capacity(scan.members.len());
    for segment in scan.members.into_iter().map(Segment::trimmed) {
        if !segment.text.is_empty() {
            members.push(build_member(segment, defects));
        }
    }

    let mut children = Vec::with_capacity(scan.children.len());
    for segment in scan.children.into_iter().map(Segment::trimmed) {
        if !segment.text.is_empty() {
            children.push(ensure_sufficient_stack(|| {
                build(segment.text, segment.offset, defects)
            }));
        }
    }

    Declaration::new(scan.name.text, members, children)
}

fn build_member(segment: Segment<'_>, defects: &mut Vec<ParseError>) -> Member {
    match segment.text.split_once('=') {
        Some((key, value)) => {
            let key = key.trim();
            if key.is_empty() {
                defects.push(ParseError::EmptyMemberKey {
                    offset: segment.offset,
                });
            }
            Member::new(key, parse_value(value))
        }
        None => Member::flag(segment.text),
    }
}
