// Constants for the macro expression parser

/// Maximum number of nested references before parsing fails with
/// `NestingTooDeep`. Each level costs a handful of stack frames.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Introduces every reference and escape
pub const DOLLAR: u8 = b'$';

/// Separates fixed-arity function arguments
pub const ARG_SEPARATOR: u8 = b',';

/// Separates the name of a substitution reference from its pattern
pub const SUBST_COLON: u8 = b':';

/// Separates the pattern of a substitution reference from its replacement
pub const SUBST_EQUALS: u8 = b'=';
