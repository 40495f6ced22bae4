//! Single comment card.

#[cfg(test)]
#[path = "comment_item_test.rs"]
mod comment_item_test;

use leptos::prelude::*;

use crate::state::comments::Comment;

/// Renders one comment's subject and body as text.
#[component]
pub fn CommentItem(comment: Comment) -> impl IntoView {
    let Comment { id, subject, body } = comment;

    view! {
        <article class="comment-item" data-comment-id=id.to_string()>
            <h4 class="comment-item__subject">{subject}</h4>
            <p class="comment-item__body">{body}</p>
        </article>
    }
}
