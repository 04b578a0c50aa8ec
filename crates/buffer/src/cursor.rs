//! Cursor: a single caret over a text buffer.
//!
//! The cursor tracks one character position in `[0, len]` and offers the
//! movement primitives an editing layer needs: stepping, vertical movement
//! with column clamping, line jumps, and word motions.
//!
//! # No stored buffer reference
//!
//! The cursor is a lightweight value type. It does not own or reference the
//! buffer; movement and query methods take `&TextBuffer` as a parameter.
//! This sidesteps mutable-aliasing knots entirely: the owner mutates the
//! buffer, then calls [`Cursor::apply_text_change`] with the mutation's
//! [`TextChange`] to keep the caret coherent.
//!
//! # No sticky column
//!
//! Vertical movement clamps the column against the target line and forgets
//! the original column. Hosts that want classic sticky-column behavior can
//! layer it on top; it does not belong in the core caret.

use crate::error::{Error, Result};
use crate::text_buffer::TextBuffer;
use crate::types::{Position, TextChange};

/// A caret position over a [`TextBuffer`].
///
/// The position is a character offset; `len` itself is a valid position
/// (the end-anchored caret).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    position: usize,
}

impl Cursor {
    /// Creates a cursor at the start of the buffer.
    pub fn new() -> Self {
        Self { position: 0 }
    }

    // ==================== Accessors ====================

    /// Returns the current character position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns true if the cursor is at position 0.
    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    /// Returns true if the cursor is at the end of the buffer.
    pub fn is_at_end(&self, buf: &TextBuffer) -> bool {
        self.position == buf.len()
    }

    /// Returns the cursor's (line, column) in `buf`.
    ///
    /// The end-anchored caret reports the last line, at the column one past
    /// its final scalar.
    pub fn line_column(&self, buf: &TextBuffer) -> Position {
        let line = buf.char_to_line(self.position);
        Position::new(line, self.position - buf.line_to_char(line))
    }

    // ==================== Positioning ====================

    /// Sets the cursor to an absolute position.
    ///
    /// Fails with [`Error::OutOfBounds`] (leaving the cursor unchanged) when
    /// `pos` exceeds the buffer length.
    pub fn set_position(&mut self, buf: &TextBuffer, pos: usize) -> Result<()> {
        if pos > buf.len() {
            return Err(Error::OutOfBounds {
                pos,
                len: buf.len(),
            });
        }
        self.position = pos;
        Ok(())
    }

    /// Moves to the start of the buffer.
    pub fn move_to_start(&mut self) {
        self.position = 0;
    }

    /// Moves to the end of the buffer.
    pub fn move_to_end(&mut self, buf: &TextBuffer) {
        self.position = buf.len();
    }

    /// Jumps to the start of line `line`.
    ///
    /// Fails with [`Error::OutOfBounds`] for an invalid line number.
    pub fn move_to_line(&mut self, buf: &TextBuffer, line: usize) -> Result<()> {
        if line >= buf.line_count() {
            return Err(Error::OutOfBounds {
                pos: line,
                len: buf.line_count(),
            });
        }
        self.position = buf.line_to_char(line);
        Ok(())
    }

    /// Jumps to `(line, col)`.
    ///
    /// Fails with [`Error::OutOfBounds`] when the line is invalid or the
    /// column exceeds the line's length.
    pub fn move_to_position(&mut self, buf: &TextBuffer, line: usize, col: usize) -> Result<()> {
        if line >= buf.line_count() {
            return Err(Error::OutOfBounds {
                pos: line,
                len: buf.line_count(),
            });
        }
        let line_length = buf.line_length(line);
        if col > line_length {
            return Err(Error::OutOfBounds {
                pos: col,
                len: line_length,
            });
        }
        self.position = buf.line_to_char(line) + col;
        Ok(())
    }

    // ==================== Stepping ====================

    /// Steps one position left. Returns false at the start of the buffer.
    ///
    /// Movement is linear: stepping left from a line start lands on the
    /// previous line's newline.
    pub fn move_left(&mut self, _buf: &TextBuffer) -> bool {
        if self.position == 0 {
            return false;
        }
        self.position -= 1;
        true
    }

    /// Steps one position right. Returns false at the end of the buffer.
    pub fn move_right(&mut self, buf: &TextBuffer) -> bool {
        if self.position >= buf.len() {
            return false;
        }
        self.position += 1;
        true
    }

    // ==================== Vertical movement ====================

    /// Moves to the previous line, keeping the column where possible.
    ///
    /// The column clamps to one before the target line's end, so the caret
    /// rests before the newline rather than on it. Returns false on line 0.
    pub fn move_up(&mut self, buf: &TextBuffer) -> bool {
        let Position { line, col } = self.line_column(buf);
        if line == 0 {
            return false;
        }
        self.position = Self::column_clamped(buf, line - 1, col);
        true
    }

    /// Moves to the next line, keeping the column where possible.
    ///
    /// Returns false on the last line.
    pub fn move_down(&mut self, buf: &TextBuffer) -> bool {
        let Position { line, col } = self.line_column(buf);
        if line + 1 >= buf.line_count() {
            return false;
        }
        self.position = Self::column_clamped(buf, line + 1, col);
        true
    }

    /// Position of `col` on `line`, clamped so the caret stays left of the
    /// line's newline.
    fn column_clamped(buf: &TextBuffer, line: usize, col: usize) -> usize {
        let max_col = buf.line_length(line).saturating_sub(1);
        buf.line_to_char(line) + col.min(max_col)
    }

    // ==================== Line-relative movement ====================

    /// Moves to the start of the current line.
    pub fn move_to_line_start(&mut self, buf: &TextBuffer) {
        let line = buf.char_to_line(self.position);
        self.position = buf.line_to_char(line);
    }

    /// Moves to the end of the current line.
    ///
    /// On the last line that is the end of the buffer; on any other line it
    /// is the newline's position, so the caret lands on (not past) the
    /// line break.
    pub fn move_to_line_end(&mut self, buf: &TextBuffer) {
        let line = buf.char_to_line(self.position);
        if line + 1 >= buf.line_count() {
            self.position = buf.len();
        } else {
            self.position = buf.line_to_char(line + 1) - 1;
        }
    }

    // ==================== Word motions ====================

    /// Moves forward to the start of the next word.
    ///
    /// A word is a maximal run of non-whitespace scalars: skip the rest of
    /// the current word, then the whitespace after it. Stops at the end of
    /// the buffer.
    pub fn move_to_next_word(&mut self, buf: &TextBuffer) {
        let len = buf.len();
        let mut pos = self.position;
        while pos < len && !buf.char_at(pos).is_whitespace() {
            pos += 1;
        }
        while pos < len && buf.char_at(pos).is_whitespace() {
            pos += 1;
        }
        self.position = pos;
    }

    /// Moves backward to the start of the previous word.
    ///
    /// Skips any whitespace immediately to the left, then the word before
    /// it. Stops at position 0.
    pub fn move_to_prev_word(&mut self, buf: &TextBuffer) {
        let mut pos = self.position;
        while pos > 0 && buf.char_at(pos - 1).is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !buf.char_at(pos - 1).is_whitespace() {
            pos -= 1;
        }
        self.position = pos;
    }

    // ==================== Reconciliation ====================

    /// Adjusts the cursor after a buffer mutation.
    ///
    /// Must be called after the mutation itself, with the [`TextChange`] the
    /// mutation returned:
    ///
    /// - Insertion at or before the caret carries it right by the inserted
    ///   length (typing at the caret keeps the caret after the new text).
    /// - Deletion entirely before the caret shifts it left; a deletion that
    ///   covered the caret clamps it to the deletion start.
    /// - Zero-delta changes leave the caret alone.
    pub fn apply_text_change(&mut self, change: TextChange) {
        if change.delta > 0 {
            if self.position >= change.pos {
                self.position += change.delta as usize;
            }
        } else if change.delta < 0 && self.position > change.pos {
            if self.position <= change.end() {
                self.position = change.pos;
            } else {
                self.position -= change.removed();
            }
        }
    }
}
