//! slate-edit-buffer: the text engine of the slate-edit editor.
//!
//! This crate provides the in-memory document model: a gap buffer for
//! character storage, a line index kept in sync with every mutation, and a
//! cursor that stays coherent across arbitrary edits.
//!
//! # Overview
//!
//! The main type is [`TextBuffer`], which provides:
//! - Positional character and string insertion and deletion
//! - Line-based access for efficient rendering
//! - Substring extraction and text search
//!
//! Every mutation returns a [`TextChange`], the `(position, delta)` pair
//! describing what happened. The editing layer forwards that value to
//! [`Cursor::apply_text_change`], which is how a caret survives insertions
//! and deletions that land before, after, or on top of it.
//!
//! # Example
//!
//! ```
//! use slate_edit_buffer::{Cursor, TextBuffer};
//!
//! let mut buffer = TextBuffer::from_str("hello\nworld");
//! let mut cursor = Cursor::new();
//! cursor.set_position(&buffer, 8).unwrap();
//!
//! // Insert before the cursor, then reconcile it
//! let change = buffer.insert_str(0, "// ");
//! cursor.apply_text_change(change);
//!
//! assert_eq!(buffer.content(), "// hello\nworld");
//! assert_eq!(cursor.position(), 11);
//! ```
//!
//! # Position model
//!
//! Positions are character offsets (Unicode scalar values), not bytes.
//! Lines are 0-indexed; a trailing newline opens one final empty line.
//! Out-of-range positional arguments never panic: mutations report a zero
//! delta and queries clamp. The two real failure modes (zero construction
//! capacity and out-of-bounds cursor targets) surface as [`Error`].

mod cursor;
mod error;
mod gap_buffer;
mod line_index;
mod text_buffer;
mod types;

pub use cursor::Cursor;
pub use error::{Error, Result};
pub use gap_buffer::GapBuffer;
pub use text_buffer::TextBuffer;
pub use types::{Position, TextChange};
