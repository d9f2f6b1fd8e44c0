//! Application router component.
//!
//! Handles URL-based routing with hash history.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: navigation happens by setting the
//!   hash, and the route signal is derived from `hashchange` events
//! - **hashchange events**: browser back/forward buttons work automatically
//! - **Views are swapped whole**: the preview component is recreated per id,
//!   so its fetch runs exactly once per identifier change

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::documents::DocumentsView;
use crate::components::preview::PreviewView;
use crate::components::status::NoticeBar;
use crate::models::AppRoute;

/// Main application router.
///
/// Routes:
/// - `#/` → document list (upload panel + table + modals)
/// - `#/document/{id}` → inline preview of one document
#[component]
pub fn AppRouter() -> impl IntoView {
    let route = RwSignal::new(AppRoute::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    view! {
        <NoticeBar />
        {move || match route.get() {
            AppRoute::List => view! { <DocumentsView /> }.into_any(),
            AppRoute::Preview { id } => view! { <PreviewView id=id /> }.into_any(),
        }}
    }
}
