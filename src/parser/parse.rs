//! Expression parser
//!
//! This module provides the [`Parser`] struct and the free entry points
//! [`parse_expr`] and [`parse_expr_at`], which use the shared builtin
//! function registry.
//!
//! # Algorithm
//!
//! A single left-to-right scan keeps a pending literal run and a list of
//! completed parts (see [`ValueBuilder`]). On `$`:
//! - `$$` is an escaped dollar
//! - `$(` / `${` opens a reference whose body extent comes from the bracket
//!   matcher; the body is then classified as a function call, a substitution
//!   reference or a plain reference, each piece parsed recursively
//! - `$x` is a one-byte variable name, unless `x` is an active terminator:
//!   then the name is empty and `x` is left for the caller
//!
//! The caller's terminator set stops the scan without consuming the byte.
//! Inside a reference the closer is always a terminator, plus `,` for all but
//! the last argument of a fixed-arity function. Literal brackets of the
//! closer's family nest, so a terminator only counts at depth 0.

use crate::parser::ast::Value;
use crate::parser::builder::ValueBuilder;
use crate::parser::constants::{
    ARG_SEPARATOR, DEFAULT_MAX_DEPTH, DOLLAR, SUBST_COLON, SUBST_EQUALS,
};
use crate::parser::cursor::Cursor;
use crate::parser::delimiter::{self, Delimiter, Nesting};
use crate::parser::error::{ErrorKind, ParseError};
use crate::parser::functions::{Arity, FunctionRegistry};

/// Parse `input` with the builtin registry.
/// Returns the value and the number of bytes consumed.
pub fn parse_expr(input: &[u8], terminators: &[u8]) -> Result<(Value, usize), ParseError> {
    Parser::default().parse_expr(input, terminators)
}

/// Like [`parse_expr`], starting at `offset`. The consumed count is relative
/// to `offset`.
pub fn parse_expr_at(
    input: &[u8],
    offset: usize,
    terminators: &[u8],
) -> Result<(Value, usize), ParseError> {
    Parser::default().parse_expr_at(input, offset, terminators)
}

/// Whether the scan loop keeps going after handling a `$`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Recursive descent parser for macro expressions
#[derive(Debug, Clone, Copy)]
pub struct Parser<'r> {
    registry: &'r FunctionRegistry,
    max_depth: usize,
}

impl Default for Parser<'static> {
    fn default() -> Self {
        Parser::new(FunctionRegistry::shared())
    }
}

impl<'r> Parser<'r> {
    pub fn new(registry: &'r FunctionRegistry) -> Self {
        Self {
            registry,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Bound on reference nesting; deeper input fails with `NestingTooDeep`.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parse the whole of `input`, stopping early only at a terminator.
    pub fn parse_expr(
        &self,
        input: &[u8],
        terminators: &[u8],
    ) -> Result<(Value, usize), ParseError> {
        self.parse_expr_at(input, 0, terminators)
    }

    pub fn parse_expr_at(
        &self,
        input: &[u8],
        offset: usize,
        terminators: &[u8],
    ) -> Result<(Value, usize), ParseError> {
        let start = offset.min(input.len());
        self.parse_window(input, start, input.len(), terminators, 0)
    }

    /// Parse the whole input as one value
    pub fn parse(&self, input: &[u8]) -> Result<Value, ParseError> {
        self.parse_expr(input, &[]).map(|(value, _)| value)
    }

    /// Partition `input` into values separated by `separator` bytes.
    pub fn segments<'i>(&self, input: &'i [u8], separator: u8) -> Segments<'r, 'i> {
        Segments {
            parser: *self,
            input,
            separator,
            position: 0,
            done: false,
        }
    }

    // ===== Scanning =====

    fn parse_window(
        &self,
        input: &[u8],
        start: usize,
        end: usize,
        terminators: &[u8],
        depth: usize,
    ) -> Result<(Value, usize), ParseError> {
        let mut cursor = Cursor::window(input, start, end);
        let value = self.scan(&mut cursor, terminators, depth)?;
        Ok((value, cursor.position() - start))
    }

    fn scan(
        &self,
        cursor: &mut Cursor<'_>,
        terminators: &[u8],
        depth: usize,
    ) -> Result<Value, ParseError> {
        let mut builder = ValueBuilder::new();
        let mut nesting = Nesting::for_terminators(terminators);

        while let Some(byte) = cursor.peek() {
            if byte == DOLLAR {
                let flow = self.dollar(cursor, terminators, &mut nesting, &mut builder, depth)?;
                if flow == Flow::Stop {
                    break;
                }
                continue;
            }

            if !nesting.observe(byte) && nesting.at_top() && terminators.contains(&byte) {
                break;
            }
            builder.push_byte(byte);
            cursor.advance();
        }

        Ok(builder.finish())
    }

    /// Handle a `$` at the cursor.
    ///
    /// Bytes consumed after the `$` still move the bracket depth, matching the
    /// raw count that found the enclosing closer.
    fn dollar(
        &self,
        cursor: &mut Cursor<'_>,
        terminators: &[u8],
        nesting: &mut Nesting,
        builder: &mut ValueBuilder,
        depth: usize,
    ) -> Result<Flow, ParseError> {
        let Some(next) = cursor.peek_at(1) else {
            // Trailing `$`: nothing left to name
            builder.push_part(Value::var_ref(Value::empty()));
            cursor.advance();
            return Ok(Flow::Continue);
        };

        if next == DOLLAR {
            builder.push_byte(DOLLAR);
            cursor.advance_by(2);
            return Ok(Flow::Continue);
        }

        if let Some(delim) = Delimiter::from_open(next) {
            let opener = cursor.position();
            let reference = self.reference(cursor, delim, depth)?;
            nesting.observe_all(cursor.slice(opener + 1, cursor.position()));
            builder.push_part(reference);
            return Ok(Flow::Continue);
        }

        if nesting.at_top() && terminators.contains(&next) {
            builder.push_part(Value::var_ref(Value::empty()));
            cursor.advance();
            return Ok(Flow::Stop);
        }

        nesting.observe(next);
        builder.push_part(Value::var_ref(Value::Literal(vec![next])));
        cursor.advance_by(2);
        Ok(Flow::Continue)
    }

    /// Parse `$(...)` or `${...}` at the cursor and move past its closer
    fn reference(
        &self,
        cursor: &mut Cursor<'_>,
        delim: Delimiter,
        depth: usize,
    ) -> Result<Value, ParseError> {
        let opener = cursor.position();
        if depth >= self.max_depth {
            return Err(ParseError::new(ErrorKind::NestingTooDeep, opener));
        }

        let body_start = opener + 2;
        let close =
            delimiter::find_close(cursor.input(), body_start, cursor.end(), delim, opener)?;
        let value = self.classify(cursor.input(), body_start, close, delim, depth + 1)?;
        cursor.set_position(close + 1);
        Ok(value)
    }

    // ===== Body classification =====

    /// Decide what a reference body `input[start..end]` is
    fn classify(
        &self,
        input: &[u8],
        start: usize,
        end: usize,
        delim: Delimiter,
        depth: usize,
    ) -> Result<Value, ParseError> {
        let closer = [delim.close()];

        let space =
            delimiter::find_top_level(input, start, end, delim, |b| b.is_ascii_whitespace());
        if let Some(space) = space {
            if let Some((name, arity)) = self.registry.lookup(&input[start..space]) {
                let args = self.arguments(input, space + 1, end, delim, arity, depth)?;
                return Ok(Value::call(name, args));
            }
        }

        let colon = delimiter::find_top_level(input, start, end, delim, |b| b == SUBST_COLON);
        if let Some(colon) = colon {
            let equals =
                delimiter::find_top_level(input, colon + 1, end, delim, |b| b == SUBST_EQUALS);
            if let Some(equals) = equals {
                let (name, _) = self.parse_window(input, start, colon, &closer, depth)?;
                let (pattern, _) = self.parse_window(input, colon + 1, equals, &closer, depth)?;
                let (replacement, _) = self.parse_window(input, equals + 1, end, &closer, depth)?;
                return Ok(Value::subst_ref(name, pattern, replacement));
            }
        }

        let (name, _) = self.parse_window(input, start, end, &closer, depth)?;
        Ok(Value::var_ref(name))
    }

    /// Split function arguments from `input[start..end]`
    fn arguments(
        &self,
        input: &[u8],
        start: usize,
        end: usize,
        delim: Delimiter,
        arity: Arity,
        depth: usize,
    ) -> Result<Vec<Value>, ParseError> {
        let count = arity.arg_count();
        let separators = [ARG_SEPARATOR, delim.close()];
        let mut args = Vec::with_capacity(count);
        let mut position = start;

        for index in 0..count {
            let last = index + 1 == count;
            let terminators = if last { &separators[1..] } else { &separators[..] };
            let (arg, consumed) = self.parse_window(input, position, end, terminators, depth)?;
            args.push(arg);
            position += consumed;
            if !last && position < end {
                // Skip the comma that stopped this argument
                position += 1;
            }
        }

        Ok(args)
    }
}

/// One separator-delimited piece of a larger buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Offset of the first byte of the segment
    pub offset: usize,
    /// Bytes consumed by the value, excluding the separator
    pub len: usize,
    pub value: Value,
}

/// Iterator returned by [`Parser::segments`].
///
/// Each segment is parsed with the separator as its only terminator, so a
/// separator inside a reference body (for example a newline inside
/// `$(shell ...)`) does not split it. Yields nothing more after an error.
#[derive(Debug, Clone)]
pub struct Segments<'r, 'i> {
    parser: Parser<'r>,
    input: &'i [u8],
    separator: u8,
    position: usize,
    done: bool,
}

impl Iterator for Segments<'_, '_> {
    type Item = Result<Segment, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let offset = self.position;
        let separator = [self.separator];
        match self.parser.parse_expr_at(self.input, offset, &separator) {
            Ok((value, len)) => {
                self.position = offset + len;
                if self.position < self.input.len() {
                    // Stopped at the separator
                    self.position += 1;
                } else {
                    self.done = true;
                }
                Some(Ok(Segment { offset, len, value }))
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
