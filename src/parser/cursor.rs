//! Byte cursor over an immutable input buffer
//!
//! A [`Cursor`] is a window `[start, end)` into the caller's buffer plus a
//! current position. Offsets are always absolute into the whole buffer so
//! errors raised deep inside a reference body still point at the right byte.

/// Position-tracking view over an input buffer
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a [u8],
    position: usize,
    end: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor over `input[start..end]`, clamped to the buffer.
    pub fn window(input: &'a [u8], start: usize, end: usize) -> Self {
        let end = end.min(input.len());
        Self {
            input,
            position: start.min(end),
            end,
        }
    }

    /// Peek at current byte without consuming
    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    /// Peek ahead n bytes
    pub fn peek_at(&self, n: usize) -> Option<u8> {
        let pos = self.position + n;
        if pos < self.end {
            Some(self.input[pos])
        } else {
            None
        }
    }

    /// Advance to next byte
    pub fn advance(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.position += 1;
        Some(byte)
    }

    /// Advance by up to n bytes, stopping at the end of the window
    pub fn advance_by(&mut self, n: usize) {
        self.position = (self.position + n).min(self.end);
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Move to an absolute offset inside the window
    pub fn set_position(&mut self, position: usize) {
        self.position = position.min(self.end);
    }

    /// Absolute offset one past the last byte of the window
    pub fn end(&self) -> usize {
        self.end
    }

    /// The underlying buffer, ignoring the window
    pub fn input(&self) -> &'a [u8] {
        self.input
    }

    /// Bytes between two absolute offsets
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        let end = end.min(self.input.len());
        &self.input[start.min(end)..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_and_advance() {
        let mut cursor = Cursor::window(b"ab", 0, 2);
        assert_eq!(cursor.peek(), Some(b'a'));
        assert_eq!(cursor.peek_at(1), Some(b'b'));
        assert_eq!(cursor.peek_at(2), None);
        assert_eq!(cursor.advance(), Some(b'a'));
        assert_eq!(cursor.advance(), Some(b'b'));
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_window_hides_bytes_past_end() {
        let mut cursor = Cursor::window(b"$(foo)bar", 2, 5);
        assert_eq!(cursor.peek(), Some(b'f'));
        cursor.advance_by(10);
        assert_eq!(cursor.position(), 5);
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.slice(2, 5), b"foo");
    }

    #[test]
    fn test_window_is_clamped() {
        let cursor = Cursor::window(b"abc", 7, 9);
        assert_eq!(cursor.end(), 3);
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.peek(), None);
    }
}
