//! Browser mount: attaches the widget to its anchor once the document is ready.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host page carries a server-rendered copy of the widget inside the
//! anchor. Mounting clears the anchor and renders a live copy in its place,
//! so mounting again replaces the previous render instead of appending to it.
//! Everything touching the DOM is gated behind `#[cfg(feature = "hydrate")]`.

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

#[cfg(feature = "hydrate")]
use leptos::mount::{UnmountHandle, mount_to};
#[cfg(feature = "hydrate")]
use leptos::tachys::view::any_view::AnyViewState;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};
#[cfg(feature = "hydrate")]
use web_sys::{Document, HtmlElement};

#[cfg(feature = "hydrate")]
use crate::app::{MOUNTED_MESSAGE, Widget};

/// Reasons the widget could not be attached to the page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    #[error("no window object available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("mount anchor #{id} not found")]
    AnchorNotFound { id: String },
    #[error("mount anchor #{id} is not an HTML element")]
    AnchorNotHtmlElement { id: String },
    #[error("could not register DOMContentLoaded listener: {0}")]
    Listener(String),
}

/// A widget attached to the page.
///
/// Dropping this value unmounts the rendered tree; call [`MountedWidget::forget`]
/// to keep it for the lifetime of the page.
#[cfg(feature = "hydrate")]
pub struct MountedWidget {
    widget: Widget,
    handle: UnmountHandle<AnyViewState>,
}

#[cfg(feature = "hydrate")]
impl MountedWidget {
    #[must_use]
    pub fn widget(&self) -> &Widget {
        &self.widget
    }

    /// Leave the rendered tree in place for the rest of the page's life.
    pub fn forget(self) {
        self.handle.forget();
    }
}

/// Mount `widget` into the element with id `anchor_id`.
///
/// # Errors
///
/// Returns a [`MountError`] when the anchor cannot be resolved.
#[cfg(feature = "hydrate")]
pub fn mount(anchor_id: &str, widget: Widget) -> Result<MountedWidget, MountError> {
    let anchor = find_anchor(&document()?, anchor_id)?;
    anchor.set_inner_html("");

    let root = widget.clone();
    let handle = mount_to(anchor, move || root.view());
    log::info!("{MOUNTED_MESSAGE}");

    Ok(MountedWidget { widget, handle })
}

/// Run `callback` once the DOM has been parsed.
///
/// Runs immediately when the document is already past `loading`.
///
/// # Errors
///
/// Returns a [`MountError`] when there is no document or the listener is rejected.
#[cfg(feature = "hydrate")]
pub fn on_document_ready<F>(callback: F) -> Result<(), MountError>
where
    F: FnOnce() + 'static,
{
    let document = document()?;
    if document.ready_state() != "loading" {
        callback();
        return Ok(());
    }

    let listener = Closure::once_into_js(callback);
    document
        .add_event_listener_with_callback("DOMContentLoaded", listener.unchecked_ref::<js_sys::Function>())
        .map_err(|e| MountError::Listener(format!("{e:?}")))
}

#[cfg(feature = "hydrate")]
fn document() -> Result<Document, MountError> {
    web_sys::window()
        .ok_or(MountError::NoWindow)?
        .document()
        .ok_or(MountError::NoDocument)
}

#[cfg(feature = "hydrate")]
fn find_anchor(document: &Document, id: &str) -> Result<HtmlElement, MountError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| MountError::AnchorNotFound { id: id.to_owned() })?
        .dyn_into::<HtmlElement>()
        .map_err(|_| MountError::AnchorNotHtmlElement { id: id.to_owned() })
}
