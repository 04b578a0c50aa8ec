//! slate-edit: the editing core of a terminal text editor.
//!
//! This crate ties the engine's pieces together for a host UI. The storage
//! and positional machinery live in [`slate_edit_buffer`]; this crate adds
//! [`EditorSession`], the single-owner façade that keeps a buffer and its
//! caret coherent through every edit.
//!
//! Rendering, input decoding, key dispatch, and file I/O are the host's
//! concern. The session exposes exactly what those layers need: mutations at
//! the caret, movement commands, the visible line window, (line, column)
//! for the status display, and search.
//!
//! # Example
//!
//! ```
//! use slate_edit::EditorSession;
//!
//! let mut session = EditorSession::from_str("fn main() {}\n");
//! session.move_to_line_end();
//! session.insert_str(" // entry point");
//!
//! assert_eq!(session.content(), "fn main() {} // entry point\n");
//! assert_eq!(session.visible_content(0, 1), vec!["fn main() {} // entry point\n"]);
//! ```

mod session;

pub use session::EditorSession;
pub use slate_edit_buffer::{Cursor, Error, Position, Result, TextBuffer, TextChange};
