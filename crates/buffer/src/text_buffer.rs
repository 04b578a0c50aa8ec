//! TextBuffer is the main public API for text storage and mutation.
//!
//! It combines a gap buffer (for efficient character storage) with a line
//! index (for O(1) line access), keeping the two synchronized through every
//! mutation.
//!
//! Each mutation operation returns a [`TextChange`] describing where the text
//! changed and by how much. The editing layer feeds that value to
//! `Cursor::apply_text_change` so carets stay coherent; a change with
//! `delta == 0` means the operation was a no-op.

use crate::error::Result;
use crate::gap_buffer::GapBuffer;
use crate::line_index::LineIndex;
use crate::types::TextChange;

/// A line-aware text buffer over a gap buffer.
///
/// The buffer maintains:
/// - Content storage via a gap buffer
/// - Line boundary tracking for efficient line-based access
///
/// Positions are character offsets in `[0, len]`; lines are 0-indexed.
/// Out-of-range positional arguments never panic: mutations become no-ops
/// and queries clamp, so the editing layer can be optimistic about bounds.
#[derive(Debug)]
pub struct TextBuffer {
    buffer: GapBuffer,
    line_index: LineIndex,
    /// Mutation counter for sampling debug assertions (debug builds only).
    #[cfg(debug_assertions)]
    debug_mutation_count: u64,
}

impl TextBuffer {
    /// Creates a new empty text buffer with the default capacity.
    pub fn new() -> Self {
        Self {
            buffer: GapBuffer::new(),
            line_index: LineIndex::new(),
            #[cfg(debug_assertions)]
            debug_mutation_count: 0,
        }
    }

    /// Creates a new empty text buffer whose gap buffer starts at the given
    /// capacity.
    ///
    /// Fails with [`crate::Error::InvalidCapacity`] when `capacity` is zero. Bulk
    /// loaders should size this to the expected document so the first load
    /// does not reallocate.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            buffer: GapBuffer::with_capacity(capacity)?,
            line_index: LineIndex::new(),
            #[cfg(debug_assertions)]
            debug_mutation_count: 0,
        })
    }

    /// Creates a text buffer initialized with the given content.
    ///
    /// Note: We don't implement `FromStr` because it requires returning
    /// `Result`, but parsing a string into a TextBuffer cannot fail.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Self {
        let buffer = GapBuffer::from_str(content);
        let mut line_index = LineIndex::new();
        line_index.rebuild(content.chars());

        tracing::debug!(
            chars = buffer.len(),
            lines = line_index.line_count(),
            "loaded text buffer"
        );

        Self {
            buffer,
            line_index,
            #[cfg(debug_assertions)]
            debug_mutation_count: 0,
        }
    }

    // ==================== Queries ====================

    /// Returns the total character count in the buffer.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the entire buffer content as a String.
    pub fn content(&self) -> String {
        self.buffer.to_string()
    }

    /// Returns the character at `pos`, or `'\0'` when out of range.
    pub fn char_at(&self, pos: usize) -> char {
        self.buffer.char_at(pos)
    }

    /// Returns the content of `[start, end)`, clamped to the buffer.
    pub fn substring(&self, start: usize, end: usize) -> String {
        self.buffer.substring(start, end)
    }

    /// Returns every position where `needle` starts; see [`GapBuffer::find`].
    pub fn find(&self, needle: &str) -> Vec<usize> {
        self.buffer.find(needle)
    }

    /// Returns the number of lines in the buffer.
    ///
    /// Always at least 1 (even for an empty buffer). A trailing newline
    /// opens one final empty line.
    pub fn line_count(&self) -> usize {
        self.line_index.line_count()
    }

    /// Returns the character position where line `line` starts.
    ///
    /// Out-of-range line numbers clamp: past the last line yields the last
    /// line's start.
    pub fn line_to_char(&self, line: usize) -> usize {
        self.line_index
            .line_start(line)
            .unwrap_or_else(|| self.line_index.last_line_start())
    }

    /// Returns the line containing character position `pos`.
    ///
    /// Positions at or past the end of the buffer map to the last line.
    pub fn char_to_line(&self, pos: usize) -> usize {
        if pos >= self.len() {
            return self.line_count() - 1;
        }
        self.line_index.line_at_offset(pos)
    }

    /// Returns the content of the given line, including its trailing
    /// newline if present. Out-of-range lines yield an empty string.
    pub fn line(&self, line: usize) -> String {
        let Some(start) = self.line_index.line_start(line) else {
            return String::new();
        };
        let end = self
            .line_index
            .line_start(line + 1)
            .unwrap_or_else(|| self.len());
        self.buffer.substring(start, end)
    }

    /// Returns the length of the given line in scalars, excluding the
    /// trailing newline and any other trailing ASCII whitespace.
    pub fn line_length(&self, line: usize) -> usize {
        self.line(line)
            .trim_end_matches(|ch: char| ch.is_ascii_whitespace())
            .chars()
            .count()
    }

    // ==================== Mutations ====================

    /// Inserts a single character at `pos`, updating line tracking.
    ///
    /// Returns `(pos, +1)` on success; positions past the end of the buffer
    /// are no-ops reported as a zero delta.
    pub fn insert(&mut self, pos: usize, ch: char) -> TextChange {
        if pos > self.len() {
            return TextChange::none(pos);
        }

        self.buffer.insert_at(pos, ch);
        if ch == '\n' {
            self.line_index.insert_newline(pos);
        } else {
            self.line_index.insert_scalar(pos);
        }

        self.assert_line_index_consistent();
        TextChange::insertion(pos, 1)
    }

    /// Inserts a string at `pos`, updating line tracking for every newline
    /// it contains. Positions past the end append.
    ///
    /// Appending pushes one line start per newline directly; inserting
    /// mid-buffer shifts the tail of the index once and splices the new
    /// starts in as a sorted batch, so the cost is one pass over the index
    /// rather than one per character.
    pub fn insert_str(&mut self, pos: usize, s: &str) -> TextChange {
        if s.is_empty() {
            return TextChange::none(pos);
        }
        let pos = pos.min(self.len());
        let count = s.chars().count();

        self.buffer.insert_str_at(pos, s);

        if pos + count == self.len() {
            // Appended at the old end: every new line start lands past the
            // existing entries.
            for (i, ch) in s.chars().enumerate() {
                if ch == '\n' {
                    self.line_index.push_start(pos + i + 1);
                }
            }
        } else {
            self.line_index.shift_after(pos, count);
            let new_starts: Vec<usize> = s
                .chars()
                .enumerate()
                .filter(|&(_, ch)| ch == '\n')
                .map(|(i, _)| pos + i + 1)
                .collect();
            self.line_index.splice_sorted(&new_starts);
        }

        self.assert_line_index_consistent();
        TextChange::insertion(pos, count)
    }

    /// Deletes the character at `pos`, merging lines when it is a newline.
    ///
    /// Returns `(pos, -1)` on success; out-of-range positions are no-ops.
    pub fn delete(&mut self, pos: usize) -> TextChange {
        if pos >= self.len() {
            return TextChange::none(pos);
        }

        let ch = self.buffer.char_at(pos);
        self.buffer.delete_at(pos);
        if ch == '\n' {
            self.line_index.remove_newline(pos);
        } else {
            self.line_index.remove_scalar(pos);
        }

        self.assert_line_index_consistent();
        TextChange::deletion(pos, 1)
    }

    /// Deletes the range `[min(a, b), max(a, b))`, clamped to the buffer,
    /// removing the line entry of every newline the range covers.
    ///
    /// Returns `(start, -(end - start))`; empty or fully out-of-range
    /// requests are no-ops.
    pub fn delete_range(&mut self, a: usize, b: usize) -> TextChange {
        let start = a.min(b).min(self.len());
        let end = a.max(b).min(self.len());
        if start >= end {
            return TextChange::none(start);
        }

        self.buffer.delete_range(start, end);
        self.line_index.remove_range(start, end);

        self.assert_line_index_consistent();
        TextChange::deletion(start, end - start)
    }

    // ==================== Validation ====================

    /// Debug assertion: verifies that the incremental line_index matches
    /// a fresh rebuild from the buffer content.
    ///
    /// This catches cumulative drift between incremental updates and the
    /// ground truth. Compiled out in release builds.
    ///
    /// Uses a mutation counter so the O(n) rebuild doesn't tank perf
    /// in tight loops — checks every 64th mutation.
    #[cfg(debug_assertions)]
    fn assert_line_index_consistent(&mut self) {
        self.debug_mutation_count += 1;
        if self.debug_mutation_count % 64 != 0 {
            return;
        }
        let mut expected = LineIndex::new();
        expected.rebuild(self.buffer.chars());
        let actual = self.line_index.line_starts();
        let expected_starts = expected.line_starts();
        assert_eq!(
            actual, expected_starts,
            "line_index drift detected after {} mutations!\n  buffer len: {}\n  actual line_starts:   {:?}\n  expected line_starts: {:?}",
            self.debug_mutation_count, self.buffer.len(), actual, expected_starts,
        );
    }

    #[cfg(not(debug_assertions))]
    fn assert_line_index_consistent(&mut self) {}

    /// Line starts exposed for tests and debug validation.
    #[cfg(any(debug_assertions, test))]
    pub fn line_starts(&self) -> &[usize] {
        self.line_index.line_starts()
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.buffer)
    }
}
