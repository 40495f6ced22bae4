//! Comment records and the fixed seed set shown by the widget.

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipisicing elit. Cumque et facilis illo nemo \
reprehenderit totam ut voluptatem voluptatum. Consequatur dignissimos, ducimus eveniet laboriosam numquam \
pariatur quae ratione repudiandae velit voluptatem.";

const SEED_SUBJECTS: [&str; 5] = [
    "Hello World!",
    "Hello America!",
    "Hello México!",
    "Hello Veracruz!",
    "Hello Coatzacoalcos!",
];

/// Stable identifier of a comment. Doubles as the list render key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub u32);

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single read-only comment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub subject: String,
    pub body: String,
}

impl Comment {
    pub fn new(id: u32, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self { id: CommentId(id), subject: subject.into(), body: body.into() }
    }

    /// Key used by the list view to track this comment across renders.
    #[must_use]
    pub fn key(&self) -> CommentId {
        self.id
    }
}

/// The five comments the widget ships with, in display order.
#[must_use]
pub fn seed_comments() -> Vec<Comment> {
    SEED_SUBJECTS
        .iter()
        .zip(0u32..)
        .map(|(subject, id)| Comment::new(id, *subject, LOREM))
        .collect()
}

/// Render keys of `comments`, in sequence order.
#[must_use]
pub fn render_keys(comments: &[Comment]) -> Vec<CommentId> {
    comments.iter().map(Comment::key).collect()
}

/// Whether every comment in `comments` has a distinct key.
#[must_use]
pub fn keys_are_unique(comments: &[Comment]) -> bool {
    let mut seen = HashSet::with_capacity(comments.len());
    comments.iter().all(|c| seen.insert(c.key()))
}
