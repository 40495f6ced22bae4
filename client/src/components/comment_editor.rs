//! Static comment editor box.
//!
//! The submit button carries no handler; the editor is presentational only.

#[cfg(test)]
#[path = "comment_editor_test.rs"]
mod comment_editor_test;

use leptos::prelude::*;

/// Text input plus submit button.
#[component]
pub fn CommentEditor() -> impl IntoView {
    view! {
        <div class="comment-editor">
            <input type="text" class="comment-editor__input"/>
            <button type="button" class="comment-editor__submit">"Submit"</button>
        </div>
    }
}
