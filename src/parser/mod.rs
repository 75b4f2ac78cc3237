//! Make-style macro expression parser
//!
//! This module turns raw bytes into a [`Value`](ast::Value) tree:
//! - [`cursor`]: Position tracking over the input buffer
//! - [`delimiter`]: Bracket family matching and depth-0 searches
//! - [`functions`]: Function name to argument-splitting policy
//! - [`builder`]: Literal run merging and part collapsing
//! - [`parse`]: The recursive parser and its entry points
//! - [`ast`]: Value tree definitions
//! - [`error`]: Parse error types
//!
//! # Supported Syntax
//!
//! - Escapes: `$$`
//! - References: `$x`, `$(name)`, `${name}`, with computed names such as
//!   `$($(arch)_CFLAGS)`
//! - Substitution references: `$(name:.c=.o)`
//! - Function calls: `$(subst a,b,$(text))`, `$(shell cmd)`
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent over bytes, no tokenizer pass. Evaluation
//! of the tree is left to the caller.

pub mod ast;
pub mod builder;
pub mod constants;
pub mod cursor;
pub mod delimiter;
pub mod error;
pub mod functions;
pub mod parse;

pub use ast::{SourceLocation, Value};
pub use error::{ErrorKind, ParseError};
pub use functions::{Arity, FunctionRegistry};
pub use parse::{parse_expr, parse_expr_at, Parser, Segment, Segments};
