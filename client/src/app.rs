//! Widget root and the HTML shell that hosts it.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::components::{comment_editor::CommentEditor, comment_list::CommentList};
use crate::state::comments::{Comment, seed_comments};

/// Id of the DOM element the widget mounts into.
pub const ANCHOR_ID: &str = "comments-widget";

/// Console line written once the widget is attached to the page.
pub const MOUNTED_MESSAGE: &str = "Comments Widget: Successfully mounted!";

/// Widget root: owns the comment sequence its children render.
#[derive(Clone, Debug)]
pub struct Widget {
    comments: Arc<[Comment]>,
}

impl Widget {
    /// Widget holding the five seed comments.
    #[must_use]
    pub fn new() -> Self {
        Self::with_comments(seed_comments())
    }

    pub fn with_comments(comments: impl Into<Arc<[Comment]>>) -> Self {
        Self { comments: comments.into() }
    }

    /// Read-only view of the comments, shared with the rendered tree.
    #[must_use]
    pub fn comments(&self) -> Arc<[Comment]> {
        Arc::clone(&self.comments)
    }

    /// Render tree for this widget.
    pub fn view(&self) -> AnyView {
        let comments = self.comments();
        view! { <CommentsWidget comments/> }.into_any()
    }
}

impl Default for Widget {
    fn default() -> Self {
        Self::new()
    }
}

/// Editor followed by the comment list.
#[component]
pub fn CommentsWidget(comments: Arc<[Comment]>) -> impl IntoView {
    view! {
        <div class="comments-widget">
            <CommentEditor/>
            <CommentList comments/>
        </div>
    }
}

/// HTML document served by the host, with a server-rendered copy of the
/// widget inside the mount anchor.
pub fn shell(options: LeptosOptions, widget: Widget) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>"Comments"</title>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
            </head>
            <body>
                <div id=ANCHOR_ID>{widget.view()}</div>
            </body>
        </html>
    }
}
