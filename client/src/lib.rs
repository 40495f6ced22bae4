//! # comments-client
//!
//! Leptos + WASM comments widget: a read-only list of comments under a static
//! editor box. The `ssr` feature renders the page shell on the host; the
//! `hydrate` feature builds the browser bundle that mounts the live widget.

pub mod app;
pub mod components;
pub mod mount;
pub mod state;

/// WASM entry point, called by the hydration script once the bundle loads.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }

    let ready = mount::on_document_ready(|| match mount::mount(app::ANCHOR_ID, app::Widget::new()) {
        Ok(mounted) => mounted.forget(),
        Err(e) => log::error!("comments widget mount failed: {e}"),
    });
    if let Err(e) = ready {
        log::error!("comments widget not scheduled: {e}");
    }
}
