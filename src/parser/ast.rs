// Expression tree definitions for the macro parser

use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Line and column (both 1-based, column in bytes) of `offset` in `input`.
    /// Offsets past the end map to the position just after the last byte.
    pub fn from_offset(input: &[u8], offset: usize) -> Self {
        let prefix = &input[..offset.min(input.len())];
        let line = 1 + prefix.iter().filter(|&&b| b == b'\n').count();
        let line_start = prefix
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |nl| nl + 1);
        Self::new(line, prefix.len() - line_start + 1)
    }
}

/// A node of the parsed expression tree.
///
/// The tree is strict: every child is owned by its parent and nothing is
/// shared. Reference names are themselves values so that computed names such
/// as `$($(arch)_flags)` are representable.
#[derive(Clone, PartialEq, Eq)]
pub enum Value {
    /// Text needing no further expansion (`$$` already collapsed to `$`)
    Literal(Vec<u8>),
    /// Concatenation of two or more parts
    Sequence(Vec<Value>),
    /// `$(name)`, `${name}` or `$x`
    VarRef(Box<Value>),
    /// `$(name:pattern=replacement)`
    VarSubstRef {
        name: Box<Value>,
        pattern: Box<Value>,
        replacement: Box<Value>,
    },
    /// `$(name arg,...)` for a registered function
    FunctionCall { name: String, args: Vec<Value> },
}

impl Value {
    pub fn literal(text: impl Into<Vec<u8>>) -> Self {
        Value::Literal(text.into())
    }

    /// The empty literal, used for degenerate names and missing arguments
    pub fn empty() -> Self {
        Value::Literal(Vec::new())
    }

    pub fn var_ref(name: Value) -> Self {
        Value::VarRef(Box::new(name))
    }

    pub fn subst_ref(name: Value, pattern: Value, replacement: Value) -> Self {
        Value::VarSubstRef {
            name: Box::new(name),
            pattern: Box::new(pattern),
            replacement: Box::new(replacement),
        }
    }

    pub fn call(name: impl Into<String>, args: Vec<Value>) -> Self {
        Value::FunctionCall {
            name: name.into(),
            args,
        }
    }

    /// Get the literal bytes, returns None if not a Literal
    pub fn as_literal(&self) -> Option<&[u8]> {
        match self {
            Value::Literal(bytes) => Some(bytes),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Literal(bytes) => f
                .debug_tuple("Literal")
                .field(&String::from_utf8_lossy(bytes))
                .finish(),
            Value::Sequence(parts) => f.debug_tuple("Sequence").field(parts).finish(),
            Value::VarRef(name) => f.debug_tuple("VarRef").field(name).finish(),
            Value::VarSubstRef {
                name,
                pattern,
                replacement,
            } => f
                .debug_struct("VarSubstRef")
                .field("name", name)
                .field("pattern", pattern)
                .field("replacement", replacement)
                .finish(),
            Value::FunctionCall { name, args } => f
                .debug_struct("FunctionCall")
                .field("name", name)
                .field("args", args)
                .finish(),
        }
    }
}

/// Renders the value back into Make syntax.
///
/// References always use the `$(...)` form, so `$x` prints as `$(x)`.
/// Literals containing a bare `)` or `,` are printed as-is and may not parse
/// back to the same tree.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Literal(bytes) => {
                let text = String::from_utf8_lossy(bytes);
                write!(f, "{}", text.replace('$', "$$"))
            }
            Value::Sequence(parts) => parts.iter().try_for_each(|part| write!(f, "{}", part)),
            Value::VarRef(name) => write!(f, "$({})", name),
            Value::VarSubstRef {
                name,
                pattern,
                replacement,
            } => write!(f, "$({}:{}={})", name, pattern, replacement),
            Value::FunctionCall { name, args } => {
                write!(f, "$({}", name)?;
                for (i, arg) in args.iter().enumerate() {
                    let sep = if i == 0 { " " } else { "," };
                    write!(f, "{}{}", sep, arg)?;
                }
                write!(f, ")")
            }
        }
    }
}
