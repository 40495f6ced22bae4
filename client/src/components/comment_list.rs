//! Keyed list of comment cards.

#[cfg(test)]
#[path = "comment_list_test.rs"]
mod comment_list_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::comment_item::CommentItem;
use crate::state::comments::Comment;

/// Renders one [`CommentItem`] per comment, in sequence order, keyed by id.
#[component]
pub fn CommentList(comments: Arc<[Comment]>) -> impl IntoView {
    view! {
        <section class="comment-list">
            <For
                each=move || comments.to_vec()
                key=Comment::key
                children=move |comment: Comment| view! { <CommentItem comment/> }
            />
        </section>
    }
}
