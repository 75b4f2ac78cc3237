//! Built-in function registry
//!
//! The parser only needs to know which tokens name a function and how to split
//! their arguments; what a function does is the evaluator's business.
//!
//! # Argument Splitting
//!
//! - [`Arity::Fixed`]: arguments are separated by top-level commas. The last
//!   argument absorbs any further commas; missing arguments are empty.
//! - [`Arity::Rest`]: the whole remainder is a single argument, commas
//!   included (`$(shell ...)`, `$(call ...)`).

use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// How a function's argument text is split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Fixed(usize),
    Rest,
}

impl Arity {
    /// Number of arguments a call is built with. `Fixed(0)` still takes the
    /// remainder as one argument so no text is dropped.
    pub fn arg_count(self) -> usize {
        match self {
            Arity::Fixed(n) => n.max(1),
            Arity::Rest => 1,
        }
    }
}

/// GNU Make's function catalog
const BUILTIN_FUNCTIONS: &[(&str, Arity)] = &[
    // Text functions
    ("subst", Arity::Fixed(3)),
    ("patsubst", Arity::Fixed(3)),
    ("strip", Arity::Fixed(1)),
    ("findstring", Arity::Fixed(2)),
    ("filter", Arity::Fixed(2)),
    ("filter-out", Arity::Fixed(2)),
    ("sort", Arity::Fixed(1)),
    ("word", Arity::Fixed(2)),
    ("wordlist", Arity::Fixed(3)),
    ("words", Arity::Fixed(1)),
    ("firstword", Arity::Fixed(1)),
    ("lastword", Arity::Fixed(1)),
    // File name functions
    ("dir", Arity::Fixed(1)),
    ("notdir", Arity::Fixed(1)),
    ("suffix", Arity::Fixed(1)),
    ("basename", Arity::Fixed(1)),
    ("addsuffix", Arity::Fixed(2)),
    ("addprefix", Arity::Fixed(2)),
    ("join", Arity::Fixed(2)),
    ("wildcard", Arity::Fixed(1)),
    ("realpath", Arity::Fixed(1)),
    ("abspath", Arity::Fixed(1)),
    // Conditionals
    ("if", Arity::Fixed(3)),
    ("and", Arity::Rest),
    ("or", Arity::Rest),
    // Variables and control
    ("foreach", Arity::Fixed(3)),
    ("call", Arity::Rest),
    ("value", Arity::Fixed(1)),
    ("eval", Arity::Fixed(1)),
    ("origin", Arity::Fixed(1)),
    ("flavor", Arity::Fixed(1)),
    ("shell", Arity::Rest),
    ("info", Arity::Fixed(1)),
    ("warning", Arity::Fixed(1)),
    ("error", Arity::Fixed(1)),
];

/// Immutable mapping from function name to [`Arity`]
#[derive(Debug, Clone, Default)]
pub struct FunctionRegistry {
    functions: FxHashMap<String, Arity>,
}

impl FunctionRegistry {
    /// An empty registry: every reference parses as a variable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the GNU Make built-ins
    pub fn builtin() -> Self {
        BUILTIN_FUNCTIONS
            .iter()
            .fold(Self::new(), |registry, &(name, arity)| {
                registry.register(name, arity)
            })
    }

    /// Shared builtin registry, built on first use
    pub fn shared() -> &'static FunctionRegistry {
        static SHARED: OnceLock<FunctionRegistry> = OnceLock::new();
        SHARED.get_or_init(FunctionRegistry::builtin)
    }

    /// Add or replace a function
    pub fn register(mut self, name: impl Into<String>, arity: Arity) -> Self {
        self.functions.insert(name.into(), arity);
        self
    }

    /// Look up the token before the first whitespace of a reference body.
    /// Exact, case-sensitive match.
    pub fn lookup(&self, token: &[u8]) -> Option<(&str, Arity)> {
        let name = std::str::from_utf8(token).ok()?;
        self.functions
            .get_key_value(name)
            .map(|(name, arity)| (name.as_str(), *arity))
    }
}
