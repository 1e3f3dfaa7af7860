//! Depth- and quote-aware scanning shared by both parser layers.
//!
//! All structural characters are ASCII, so scanning runs over bytes and every
//! split position is a valid `str` boundary.
//!
//! # Quote Handling
//!
//! Single and double quotes toggle independently, but only one kind can be
//! open at a time: while a `"` run is open a `'` is plain text and vice
//! versa. Nothing inside a quoted run is structural. There is no escape
//! character.

use crate::ParseError;

/// Tracks which quote character, if any, is currently open.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct QuoteState {
    /// Open quote byte and the offset it was opened at.
    open: Option<(u8, usize)>,
}

impl QuoteState {
    /// Feed the byte at `pos`.
    ///
    /// Returns true if the byte belongs to a quoted run (both quote
    /// characters included) and must not be read structurally.
    #[inline]
    pub(crate) fn step(&mut self, byte: u8, pos: usize) -> bool {
        match self.open {
            Some((quote, _)) => {
                if byte == quote {
                    self.open = None;
                }
                true
            }
            None if byte == b'\'' || byte == b'"' => {
                self.open = Some((byte, pos));
                true
            }
            None => false,
        }
    }

    /// Defect for a quote still open at end of input.
    pub(crate) fn unterminated(self, base: usize) -> Option<ParseError> {
        self.open.map(|(quote, offset)| ParseError::UnterminatedQuote {
            quote: char::from(quote),
            offset: base + offset,
        })
    }
}

/// A slice of the input together with its absolute byte offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Segment<'a> {
    pub text: &'a str,
    pub offset: usize,
}

impl<'a> Segment<'a> {
    fn new(source: &'a str, start: usize, end: usize, base: usize) -> Self {
        Segment {
            text: &source[start..end],
            offset: base + start,
        }
    }

    /// Strip surrounding whitespace, keeping the offset pointed at the first
    /// retained byte.
    pub(crate) fn trimmed(self) -> Self {
        let start_trimmed = self.text.trim_start();
        Segment {
            offset: self.offset + (self.text.len() - start_trimmed.len()),
            text: start_trimmed.trim_end(),
        }
    }
}

/// Split `text` on commas that sit outside every `(`/`[` group and every
/// quoted run.
///
/// Pieces are returned untrimmed; empty text yields a single empty piece.
/// Unbalanced closers are tolerated (depth never goes below zero).
pub fn split_top_level(text: &str) -> Vec<&str> {
    let mut quotes = QuoteState::default();
    let mut depth = 0usize;
    let mut start = 0;
    let mut parts = Vec::new();

    for (i, &b) in text.as_bytes().iter().enumerate() {
        if quotes.step(b, i) {
            continue;
        }
        match b {
            b'(' | b'[' => depth += 1,
            b')' | b']' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => {
                parts.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    Members,
    Children,
}

/// Raw pieces of one declaration, before member values or children are
/// parsed.
#[derive(Debug)]
pub(crate) struct Scan<'a> {
    pub name: Segment<'a>,
    pub members: Vec<Segment<'a>>,
    pub children: Vec<Segment<'a>>,
}

impl<'a> Scan<'a> {
    fn push(&mut self, section: Section, segment: Segment<'a>) {
        match section {
            Section::Members => self.members.push(segment),
            Section::Children => self.children.push(segment),
        }
    }
}

const fn closer_for(open: u8) -> u8 {
    if open == b'(' {
        b')'
    } else {
        b']'
    }
}

/// Split one declaration into name, member texts and child texts.
///
/// `base` is the absolute offset of `text` within the top-level input and is
/// added to every recorded offset. Structural defects are appended to
/// `defects`; the scan itself always completes.
pub(crate) fn scan_declaration<'a>(
    text: &'a str,
    base: usize,
    defects: &mut Vec<ParseError>,
) -> Scan<'a> {
    let bytes = text.as_bytes();
    let mut quotes = QuoteState::default();
    let mut openers: Vec<(u8, usize)> = Vec::new();
    let mut section: Option<Section> = None;
    let mut name_end: Option<usize> = None;
    let mut seen_members = false;
    let mut seen_children = false;
    let mut segment_start = 0;
    let mut trailing_reported = false;
    let mut scan = Scan {
        name: Segment::new(text, 0, 0, base),
        members: Vec::new(),
        children: Vec::new(),
    };

    for (i, &b) in bytes.iter().enumerate() {
        // Past the body at depth 0: only a further section may follow.
        let after_body = openers.is_empty() && name_end.is_some();

        if quotes.step(b, i) {
            if after_body && !trailing_reported {
                defects.push(ParseError::TrailingInput { offset: base + i });
                trailing_reported = true;
            }
            continue;
        }

        match b {
            b'(' | b'[' => {
                if openers.is_empty() {
                    let next = if b == b'(' {
                        Section::Members
                    } else {
                        Section::Children
                    };
                    let out_of_order = match next {
                        Section::Members => seen_members || seen_children,
                        Section::Children => seen_children,
                    };
                    if name_end.is_none() {
                        name_end = Some(i);
                    } else if out_of_order && !trailing_reported {
                        defects.push(ParseError::TrailingInput { offset: base + i });
                        trailing_reported = true;
                    }
                    match next {
                        Section::Members => seen_members = true,
                        Section::Children => seen_children = true,
                    }
                    section = Some(next);
                    segment_start = i + 1;
                }
                openers.push((b, i));
            }
            b')' | b']' => {
                let Some((open, open_at)) = openers.pop() else {
                    defects.push(ParseError::UnexpectedCloser {
                        found: char::from(b),
                        offset: base + i,
                    });
                    continue;
                };
                if closer_for(open) != b {
                    tracing::trace!(open_at, "closer does not match opener");
                    defects.push(ParseError::MismatchedCloser {
                        open: char::from(open),
                        found: char::from(b),
                        offset: base + i,
                    });
                }
                if openers.is_empty() {
                    if let Some(closed) = section.take() {
                        scan.push(closed, Segment::new(text, segment_start, i, base));
                    }
                }
            }
            b',' if openers.len() == 1 => {
                if let Some(current) = section {
                    scan.push(current, Segment::new(text, segment_start, i, base));
                    segment_start = i + 1;
                }
            }
            _ if after_body && !trailing_reported && !b.is_ascii_whitespace() => {
                defects.push(ParseError::TrailingInput { offset: base + i });
                trailing_reported = true;
            }
            _ => {}
        }
    }

    if let Some(defect) = quotes.unterminated(base) {
        defects.push(defect);
    }
    if let Some(&(open, offset)) = openers.first() {
        defects.push(ParseError::UnclosedDelimiter {
            open: char::from(open),
            offset: base + offset,
        });
        // Keep whatever the unclosed section collected.
        if let Some(current) = section {
            scan.push(current, Segment::new(text, segment_start, text.len(), base));
        }
    }

    scan.name = Segment::new(text, 0, name_end.unwrap_or(text.len()), base).trimmed();
    scan
}
