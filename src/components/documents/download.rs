//! Download action for a single table row.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::core::api;
use crate::models::Document;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/documents/table.module.css");

/// Fetches the document binary, hands it to the browser as a named save,
/// then re-fetches the download counter for the row.
#[component]
pub fn DownloadButton(document: Document) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let handle_download = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        let id = document.id.clone();
        let name = document.name.clone();
        spawn_local(async move {
            match api::generate_download_link(&id).await {
                Ok(link) => {
                    if !dom::trigger_download(link.as_str(), &name) {
                        ctx.notices.error(format!("Could not start download of {}", name));
                        return;
                    }
                    // Counter moves server-side once the binary is served.
                    match api::fetch_download_count(&id).await {
                        Ok(count) => ctx.docs.set_download_count(&id, count),
                        Err(err) => web_sys::console::error_1(
                            &format!("Download count for {} failed: {}", id, err).into(),
                        ),
                    }
                    // `link` dropped here, releasing the object URL.
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("Download of {} failed: {}", name, err).into(),
                    );
                    ctx.notices.error(format!("Download failed: {}", err));
                }
            }
        });
    };

    view! {
        <button
            class=format!("{} {}", css::action, css::actionShare)
            on:click=handle_download
        >
            "Download"
        </button>
    }
}
