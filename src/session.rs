//! EditorSession: the editing-layer glue over the engine.
//!
//! A session owns one [`TextBuffer`] and one [`Cursor`] and keeps them
//! coherent: every mutation goes through the buffer first, and the
//! [`TextChange`] it reports is fed straight to the cursor before the call
//! returns. Hosts that drive the pair manually (custom commands, future
//! multi-caret sets) can take both halves apart with [`parts_mut`] and do
//! the same dance themselves.
//!
//! The session is also where the renderer-facing accessors live: the visible
//! line window, the caret's (line, column), and search with line/column
//! conversion.
//!
//! [`parts_mut`]: EditorSession::parts_mut

use slate_edit_buffer::{Cursor, Position, Result, TextBuffer, TextChange};

/// A single-caret editing session over a text buffer.
#[derive(Debug, Default)]
pub struct EditorSession {
    buffer: TextBuffer,
    cursor: Cursor,
}

impl EditorSession {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self {
            buffer: TextBuffer::new(),
            cursor: Cursor::new(),
        }
    }

    /// Creates an empty session whose buffer starts at the given capacity.
    ///
    /// Sized to the expected document, this lets a subsequent [`load_str`]
    /// fill the buffer without growing it.
    ///
    /// [`load_str`]: EditorSession::load_str
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            buffer: TextBuffer::with_capacity(capacity)?,
            cursor: Cursor::new(),
        })
    }

    /// Creates a session over existing content, caret at the start.
    pub fn from_str(content: &str) -> Self {
        Self {
            buffer: TextBuffer::from_str(content),
            cursor: Cursor::new(),
        }
    }

    /// Replaces the document with `content` and rehomes the caret to 0.
    ///
    /// This is the bulk loader: the old content is dropped wholesale rather
    /// than deleted edit by edit.
    pub fn load_str(&mut self, content: &str) {
        tracing::debug!(chars = content.chars().count(), "loading document");
        self.buffer = TextBuffer::from_str(content);
        self.cursor = Cursor::new();
    }

    // ==================== Accessors ====================

    /// The underlying buffer, for read-only queries.
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// The caret.
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Both halves, mutably, for hosts that orchestrate their own edits.
    ///
    /// The caller takes over the session's one obligation: after mutating
    /// the buffer, pass each returned [`TextChange`] to the cursor.
    pub fn parts_mut(&mut self) -> (&mut TextBuffer, &mut Cursor) {
        (&mut self.buffer, &mut self.cursor)
    }

    /// The caret's (line, column).
    pub fn line_column(&self) -> Position {
        self.cursor.line_column(&self.buffer)
    }

    /// Full document text.
    pub fn content(&self) -> String {
        self.buffer.content()
    }

    // ==================== Mutations at the caret ====================

    /// Inserts a character at the caret. The caret ends up after it.
    pub fn insert_char(&mut self, ch: char) -> TextChange {
        let change = self.buffer.insert(self.cursor.position(), ch);
        self.cursor.apply_text_change(change);
        change
    }

    /// Inserts a string at the caret. The caret ends up after it.
    pub fn insert_str(&mut self, s: &str) -> TextChange {
        let change = self.buffer.insert_str(self.cursor.position(), s);
        self.cursor.apply_text_change(change);
        change
    }

    /// Deletes the character before the caret (Backspace).
    ///
    /// No-op at the start of the buffer.
    pub fn backspace(&mut self) -> TextChange {
        if self.cursor.is_at_start() {
            return TextChange::none(0);
        }
        let change = self.buffer.delete(self.cursor.position() - 1);
        self.cursor.apply_text_change(change);
        change
    }

    /// Deletes the character at the caret (Delete key).
    ///
    /// No-op at the end of the buffer.
    pub fn delete_forward(&mut self) -> TextChange {
        let change = self.buffer.delete(self.cursor.position());
        self.cursor.apply_text_change(change);
        change
    }

    /// Deletes the range `[min(a, b), max(a, b))`, clamped to the document.
    ///
    /// A caret inside the range is clamped to the range start.
    pub fn delete_range(&mut self, a: usize, b: usize) -> TextChange {
        let change = self.buffer.delete_range(a, b);
        self.cursor.apply_text_change(change);
        change
    }

    // ==================== Caret movement ====================

    /// See [`Cursor::set_position`].
    pub fn set_cursor_position(&mut self, pos: usize) -> Result<()> {
        self.cursor.set_position(&self.buffer, pos)
    }

    pub fn move_left(&mut self) -> bool {
        self.cursor.move_left(&self.buffer)
    }

    pub fn move_right(&mut self) -> bool {
        self.cursor.move_right(&self.buffer)
    }

    pub fn move_up(&mut self) -> bool {
        self.cursor.move_up(&self.buffer)
    }

    pub fn move_down(&mut self) -> bool {
        self.cursor.move_down(&self.buffer)
    }

    pub fn move_to_line_start(&mut self) {
        self.cursor.move_to_line_start(&self.buffer);
    }

    pub fn move_to_line_end(&mut self) {
        self.cursor.move_to_line_end(&self.buffer);
    }

    pub fn move_to_start(&mut self) {
        self.cursor.move_to_start();
    }

    pub fn move_to_end(&mut self) {
        self.cursor.move_to_end(&self.buffer);
    }

    /// See [`Cursor::move_to_line`].
    pub fn move_to_line(&mut self, line: usize) -> Result<()> {
        self.cursor.move_to_line(&self.buffer, line)
    }

    /// See [`Cursor::move_to_position`].
    pub fn move_to_position(&mut self, line: usize, col: usize) -> Result<()> {
        self.cursor.move_to_position(&self.buffer, line, col)
    }

    pub fn move_to_next_word(&mut self) {
        self.cursor.move_to_next_word(&self.buffer);
    }

    pub fn move_to_prev_word(&mut self) {
        self.cursor.move_to_prev_word(&self.buffer);
    }

    // ==================== Multi-cursor hooks ====================

    /// All carets in the session. A single-entry slice today; a future
    /// caret set implements the same shape by iterating.
    pub fn cursors(&self) -> &[Cursor] {
        std::slice::from_ref(&self.cursor)
    }

    /// Repositions caret `index`.
    ///
    /// Only index 0 exists today; anything else is out of bounds.
    pub fn move_cursor(&mut self, index: usize, pos: usize) -> Result<()> {
        if index != 0 {
            return Err(slate_edit_buffer::Error::OutOfBounds {
                pos: index,
                len: self.cursors().len(),
            });
        }
        self.cursor.set_position(&self.buffer, pos)
    }

    // ==================== Renderer-facing queries ====================

    /// Up to `n_lines` successive lines starting at `start_line`, fewer if
    /// the document ends first. Lines keep their trailing newline.
    pub fn visible_content(&self, start_line: usize, n_lines: usize) -> Vec<String> {
        let line_count = self.buffer.line_count();
        if start_line >= line_count {
            return Vec::new();
        }
        let end = (start_line + n_lines).min(line_count);
        (start_line..end).map(|line| self.buffer.line(line)).collect()
    }

    /// Every match start for `needle`, as character positions.
    pub fn find(&self, needle: &str) -> Vec<usize> {
        self.buffer.find(needle)
    }

    /// Every match start for `needle`, as (line, column) positions.
    pub fn find_positions(&self, needle: &str) -> Vec<Position> {
        self.buffer
            .find(needle)
            .into_iter()
            .map(|pos| {
                let line = self.buffer.char_to_line(pos);
                Position::new(line, pos - self.buffer.line_to_char(line))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_carries_the_caret() {
        let mut session = EditorSession::new();
        session.insert_str("hello");
        session.insert_char(' ');
        session.insert_str("world");

        assert_eq!(session.content(), "hello world");
        assert_eq!(session.cursor().position(), 11);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut session = EditorSession::new();
        assert!(session.backspace().is_none());

        session.insert_str("ab");
        session.move_to_start();
        assert!(session.backspace().is_none());
        assert_eq!(session.content(), "ab");
    }

    #[test]
    fn test_delete_forward_at_end_is_noop() {
        let mut session = EditorSession::from_str("ab");
        session.move_to_end();
        assert!(session.delete_forward().is_none());
        assert_eq!(session.content(), "ab");
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut session = EditorSession::from_str("hello\nworld");
        session.move_to_line(1).unwrap();
        let change = session.backspace();
        assert_eq!(change, TextChange::deletion(5, 1));
        assert_eq!(session.content(), "helloworld");
        assert_eq!(session.cursor().position(), 5);
    }

    #[test]
    fn test_delete_range_clamps_caret_inside() {
        let mut session = EditorSession::from_str("Hello World");
        session.set_cursor_position(5).unwrap();
        session.delete_range(3, 7);
        assert_eq!(session.content(), "Helorld");
        assert_eq!(session.cursor().position(), 3);
    }

    #[test]
    fn test_visible_content_window() {
        let session = EditorSession::from_str("a\nb\nc\nd\ne");
        assert_eq!(session.visible_content(1, 3), vec!["b\n", "c\n", "d\n"]);
        // Window past the end shrinks
        assert_eq!(session.visible_content(3, 10), vec!["d\n", "e"]);
        // Start past the end is empty
        assert!(session.visible_content(9, 3).is_empty());
    }

    #[test]
    fn test_find_positions_converts_lines() {
        let session = EditorSession::from_str("hello world\nhello again");
        assert_eq!(session.find("hello"), vec![0, 12]);
        assert_eq!(
            session.find_positions("hello"),
            vec![Position::new(0, 0), Position::new(1, 0)]
        );
        assert_eq!(session.find_positions("again"), vec![Position::new(1, 6)]);
    }

    #[test]
    fn test_load_str_rehomes_cursor() {
        let mut session = EditorSession::from_str("old content");
        session.move_to_end();
        session.load_str("new\ncontent");

        assert_eq!(session.content(), "new\ncontent");
        assert!(session.cursor().is_at_start());
        assert_eq!(session.buffer().line_count(), 2);
    }

    #[test]
    fn test_cursor_hooks() {
        let mut session = EditorSession::from_str("hello");
        assert_eq!(session.cursors().len(), 1);

        assert!(session.move_cursor(0, 3).is_ok());
        assert_eq!(session.cursor().position(), 3);

        assert!(session.move_cursor(1, 0).is_err());
        assert!(session.move_cursor(0, 99).is_err());
        assert_eq!(session.cursor().position(), 3);
    }

    #[test]
    fn test_parts_mut_manual_drive() {
        let mut session = EditorSession::from_str("abc");
        session.set_cursor_position(2).unwrap();

        let (buffer, cursor) = session.parts_mut();
        let change = buffer.insert(0, 'x');
        cursor.apply_text_change(change);

        assert_eq!(session.content(), "xabc");
        assert_eq!(session.cursor().position(), 3);
    }
}
