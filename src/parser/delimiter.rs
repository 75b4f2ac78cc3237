//! Bracket families and depth tracking
//!
//! A reference opened with `(` only counts `(` and `)`; braces inside it are
//! ordinary content, and the other way round for `{`. There is no notion of
//! quoting: `$(shell echo ')')` ends at the quoted `)`.
//!
//! - [`find_close`]: raw extent of a reference body
//! - [`find_top_level`]: first depth-0 marker inside a body, skipping nested
//!   references
//! - [`Nesting`]: literal bracket depth seen by the scan loop, which decides
//!   whether a terminator byte is active

use crate::parser::constants::DOLLAR;
use crate::parser::error::{ErrorKind, ParseError};

/// The bracket pair chosen when a reference begins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Paren,
    Brace,
}

impl Delimiter {
    pub fn from_open(byte: u8) -> Option<Self> {
        match byte {
            b'(' => Some(Delimiter::Paren),
            b'{' => Some(Delimiter::Brace),
            _ => None,
        }
    }

    pub fn from_close(byte: u8) -> Option<Self> {
        match byte {
            b')' => Some(Delimiter::Paren),
            b'}' => Some(Delimiter::Brace),
            _ => None,
        }
    }

    pub fn open(self) -> u8 {
        match self {
            Delimiter::Paren => b'(',
            Delimiter::Brace => b'{',
        }
    }

    pub fn close(self) -> u8 {
        match self {
            Delimiter::Paren => b')',
            Delimiter::Brace => b'}',
        }
    }
}

/// Depth counter for a single bracket family
#[derive(Debug, Clone, Copy)]
pub struct DelimiterMatcher {
    delimiter: Delimiter,
    depth: usize,
}

impl DelimiterMatcher {
    /// Start just after an opener, at depth 1
    pub fn new(delimiter: Delimiter) -> Self {
        Self {
            delimiter,
            depth: 1,
        }
    }

    /// Feed one byte; returns true when it is the matching closer.
    pub fn feed(&mut self, byte: u8) -> bool {
        if byte == self.delimiter.open() {
            self.depth += 1;
        } else if byte == self.delimiter.close() {
            self.depth -= 1;
        }
        self.depth == 0
    }
}

/// Find the offset of the closer matching a reference whose body starts at
/// `body_start`. The search stops at `end`; `opener` is the offset of the `$`
/// reported when the closer is missing.
pub fn find_close(
    input: &[u8],
    body_start: usize,
    end: usize,
    delimiter: Delimiter,
    opener: usize,
) -> Result<usize, ParseError> {
    let end = end.min(input.len());
    let mut matcher = DelimiterMatcher::new(delimiter);
    for pos in body_start..end {
        if matcher.feed(input[pos]) {
            return Ok(pos);
        }
    }
    Err(ParseError::new(ErrorKind::UnterminatedReference, opener))
}

/// Find the first byte in `input[start..end]` matching `is_marker` at depth 0
/// of `delimiter`'s family.
///
/// `$$` escapes and nested `$(...)`/`${...}` references are skipped whole.
/// `$x` is skipped as a one-byte name unless `x` is itself a marker, in which
/// case `x` is reported: the parser will back off at the same byte. A nested
/// reference that does not close inside the window ends the search.
///
/// Every bracket of the family moves the depth, including one consumed as a
/// `$x` name or sitting inside a nested reference of the other family, so
/// depth 0 here agrees with the count [`find_close`] used to end the body.
pub fn find_top_level(
    input: &[u8],
    start: usize,
    end: usize,
    delimiter: Delimiter,
    is_marker: impl Fn(u8) -> bool,
) -> Option<usize> {
    let end = end.min(input.len());
    let mut nesting = Nesting::for_family(delimiter);
    let mut pos = start;

    while pos < end {
        let byte = input[pos];

        if byte == DOLLAR {
            let Some(&next) = input[..end].get(pos + 1) else {
                return None;
            };
            if nesting.at_top() && is_marker(next) {
                return Some(pos + 1);
            }
            let skipped = match Delimiter::from_open(next) {
                Some(nested) => find_close(input, pos + 2, end, nested, pos).ok()? + 1,
                None => pos + 2,
            };
            nesting.observe_all(&input[pos + 1..skipped]);
            pos = skipped;
            continue;
        }

        if nesting.at_top() && is_marker(byte) {
            return Some(pos);
        }
        nesting.observe(byte);
        pos += 1;
    }

    None
}

/// Literal bracket depth for the families whose closers are terminators.
///
/// Inside `$(shell echo '()')` the argument is scanned with `)` as a
/// terminator; the literal `(` raises the depth so the following `)` stays
/// content. Only the family of an active closer is tracked.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nesting {
    paren: Option<usize>,
    brace: Option<usize>,
}

impl Nesting {
    pub fn for_terminators(terminators: &[u8]) -> Self {
        let mut nesting = Nesting::default();
        for &byte in terminators {
            if let Some(family) = Delimiter::from_close(byte) {
                nesting.track(family);
            }
        }
        nesting
    }

    /// Track a single family, as a reference body of that family does
    pub fn for_family(delimiter: Delimiter) -> Self {
        let mut nesting = Nesting::default();
        nesting.track(delimiter);
        nesting
    }

    fn track(&mut self, delimiter: Delimiter) {
        match delimiter {
            Delimiter::Paren => self.paren = Some(0),
            Delimiter::Brace => self.brace = Some(0),
        }
    }

    /// Account for a literal byte. Returns true if the byte changed the depth,
    /// meaning it is content and must not be treated as a terminator.
    pub fn observe(&mut self, byte: u8) -> bool {
        let slot = match byte {
            b'(' | b')' => &mut self.paren,
            b'{' | b'}' => &mut self.brace,
            _ => return false,
        };
        let Some(depth) = slot.as_mut() else {
            return false;
        };
        if Delimiter::from_open(byte).is_some() {
            *depth += 1;
            true
        } else if *depth > 0 {
            *depth -= 1;
            true
        } else {
            false
        }
    }

    /// Account for bytes the scan consumed after a `$`: a one-byte name or a
    /// whole nested reference from its opening bracket to its closer.
    pub fn observe_all(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.observe(byte);
        }
    }

    /// True when every tracked family is back at depth 0
    pub fn at_top(&self) -> bool {
        self.paren.unwrap_or(0) == 0 && self.brace.unwrap_or(0) == 0
    }
}
