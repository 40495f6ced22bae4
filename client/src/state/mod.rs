//! Client-side data owned by the widget.
//!
//! DESIGN
//! ======
//! The widget holds a single immutable comment sequence. Components receive
//! it through props and only ever read from it.

pub mod comments;
