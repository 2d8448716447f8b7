//! Byte cursor over the source text.
//!
//! The cursor only moves forward. `current()` is the byte under the
//! cursor and `peek()` the one after it; both read as `0x00` past the end
//! of input, so callers never bounds-check. Use [`Cursor::is_eof`] to tell
//! the end of input apart from an interior NUL byte.

/// Whether `byte` can appear in a team name: ASCII letters and `_`.
#[inline]
pub fn is_name_byte(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

/// Whitespace skipped between tokens: space, tab, newline, carriage return.
#[inline]
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// Forward-only cursor over a source string.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Cursor { source, pos: 0 }
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The byte under the cursor, or `0x00` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// The byte after the current one, or `0x00` past end of input.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Advance one byte. A no-op at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Advance over the whole character under the cursor.
    ///
    /// Returns the character, or `None` at end of input.
    pub fn advance_char(&mut self) -> Option<char> {
        let ch = self.source.get(self.pos..)?.chars().next()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Advance while `pred` holds for the current byte.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    pub fn eat_whitespace(&mut self) {
        self.eat_while(is_whitespace);
    }

    /// Source text from `start` up to the cursor.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.source.get(start..self.pos).unwrap_or("")
    }

    #[inline]
    fn byte_at(&self, pos: usize) -> u8 {
        self.source.as_bytes().get(pos).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests;
