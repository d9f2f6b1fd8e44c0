//! Inline preview of a single document.
//!
//! Fetches the preview binary exactly once per document id (the router
//! recreates this component when the id changes) and renders it from an
//! object URL. PDFs go into an iframe so the browser's own viewer handles
//! pagination and reports the page count; everything else renders as an
//! image. The object URL is revoked when the view goes away.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::api::{self, PreviewBinary};
use crate::models::{AppRoute, DocumentId};

stylance::import_crate_style!(css, "src/components/preview/preview.module.css");

#[component]
pub fn PreviewView(id: DocumentId) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // The fetched binary is a JS-backed handle, so it lives in local storage.
    let payload = RwSignal::new_local(None::<Rc<PreviewBinary>>);

    // Known name from the collection; a deep link may arrive before the
    // first listing, in which case the generic title stands in.
    let title_id = id.clone();
    let title = Memo::new(move |_| {
        ctx.docs.documents.with(|docs| {
            docs.iter()
                .find(|doc| doc.id == title_id)
                .map(|doc| doc.name.clone())
        })
    });

    let fetch_id = id.clone();
    spawn_local(async move {
        match api::fetch_document_preview(&fetch_id).await {
            Ok(binary) => {
                let _ = payload.try_set(Some(Rc::new(binary)));
            }
            Err(err) => {
                web_sys::console::error_1(
                    &format!("Preview of {} failed: {}", fetch_id, err).into(),
                );
                ctx.notices.error(format!("Preview failed: {}", err));
            }
        }
    });

    let on_back = move |_: leptos::ev::MouseEvent| {
        AppRoute::List.push();
    };

    view! {
        <div class=css::page>
            <div class=css::header>
                <button class=css::backButton on:click=on_back>
                    <Icon icon=ic::CHEVRON_LEFT />
                    "Back to documents"
                </button>
                <h1 class=css::title>
                    {move || title.get().unwrap_or_else(|| "Document Preview".to_string())}
                </h1>
            </div>
            {move || match payload.get() {
                None => view! { <p class=css::placeholder>"Loading preview..."</p> }.into_any(),
                Some(binary) => {
                    let url = binary.url.as_str().to_string();
                    if binary.mime == "application/pdf" {
                        view! {
                            <iframe class=css::frame src=url title="Document preview"></iframe>
                        }
                        .into_any()
                    } else {
                        view! { <img class=css::image src=url alt="Document preview" /> }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}
