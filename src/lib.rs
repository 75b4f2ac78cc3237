//! # Introduction
//!
//! makexpr parses the macro language of Make-family build descriptions:
//! literal text, variable references, substitution references and built-in
//! function calls. The result is a [`parser::Value`] tree for an evaluator to
//! walk with its own variable environment.
//!
//! ## Parsing pipeline
//!
//! ```text
//! Bytes → Parser (+ FunctionRegistry) → Value tree → (your evaluator)
//! ```
//!
//! 1. [`parser::Parser`] — scans the bytes once, recursing into reference
//!    bodies and function arguments.
//! 2. [`parser::FunctionRegistry`] — decides which reference bodies are
//!    function calls and how their arguments split.
//! 3. [`parser::Value`] — the closed set of tree nodes.
//!
//! ## Example
//!
//! ```
//! use makexpr::parser::{parse_expr, Value};
//!
//! let (value, consumed) = parse_expr(b"$(foo:.c=.o)", &[]).unwrap();
//! assert_eq!(consumed, 12);
//! assert_eq!(
//!     value,
//!     Value::subst_ref(Value::literal("foo"), Value::literal(".c"), Value::literal(".o"))
//! );
//! ```

pub mod parser;
