//! Widget components, leaf-first.
//!
//! SYSTEM CONTEXT
//! ==============
//! `CommentItem` renders one record, `CommentList` renders the keyed sequence,
//! and `CommentEditor` is the static entry box. `app::CommentsWidget` composes
//! the editor and the list.

pub mod comment_editor;
pub mod comment_item;
pub mod comment_list;
