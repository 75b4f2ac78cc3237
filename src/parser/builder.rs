//! Value accumulation for a single scan
//!
//! The scan loop pushes literal bytes and finished parts in order. Adjacent
//! literals are merged, so `foo$$bar` becomes one `Literal("foo$bar")`.

use crate::parser::ast::Value;

#[derive(Debug, Default)]
pub struct ValueBuilder {
    literal: Vec<u8>,
    parts: Vec<Value>,
}

impl ValueBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_byte(&mut self, byte: u8) {
        self.literal.push(byte);
    }

    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.literal.extend_from_slice(bytes);
    }

    /// Append a completed part, closing the pending literal run first.
    /// Literal parts are folded into the run instead.
    pub fn push_part(&mut self, part: Value) {
        match part {
            Value::Literal(bytes) => self.push_bytes(&bytes),
            part => {
                self.flush();
                self.parts.push(part);
            }
        }
    }

    fn flush(&mut self) {
        if !self.literal.is_empty() {
            let run = std::mem::take(&mut self.literal);
            self.parts.push(Value::Literal(run));
        }
    }

    /// Collapse: one part is returned as is, none becomes the empty literal.
    pub fn finish(mut self) -> Value {
        self.flush();
        match self.parts.len() {
            0 => Value::empty(),
            1 => self.parts.pop().unwrap_or_else(Value::empty),
            _ => Value::Sequence(self.parts),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collapses_to_empty_literal() {
        assert_eq!(ValueBuilder::new().finish(), Value::empty());
    }

    #[test]
    fn test_single_part_is_unwrapped() {
        let mut builder = ValueBuilder::new();
        builder.push_part(Value::var_ref(Value::literal("x")));
        assert_eq!(builder.finish(), Value::var_ref(Value::literal("x")));
    }

    #[test]
    fn test_literals_merge() {
        let mut builder = ValueBuilder::new();
        builder.push_bytes(b"foo");
        builder.push_byte(b'$');
        builder.push_part(Value::literal("bar"));
        assert_eq!(builder.finish(), Value::literal("foo$bar"));
    }

    #[test]
    fn test_sequence_keeps_order() {
        let mut builder = ValueBuilder::new();
        builder.push_bytes(b"a");
        builder.push_part(Value::var_ref(Value::literal("b")));
        builder.push_bytes(b"c");
        assert_eq!(
            builder.finish(),
            Value::Sequence(vec![
                Value::literal("a"),
                Value::var_ref(Value::literal("b")),
                Value::literal("c"),
            ])
        );
    }
}
