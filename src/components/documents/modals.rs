//! Action modals for the selected document: confirm-delete and share-link.
//!
//! Both are gated by a visibility flag owned by the list view and read the
//! selection from the app context. Neither retries anything; a failed action
//! leaves the modal open with the error surfaced on the notice bar.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{MAX_VALID_HOURS, MIN_VALID_HOURS};
use crate::core::api;
use crate::models::ValidHours;
use crate::utils::dom;
use crate::utils::format::format_expiry_hint;

stylance::import_crate_style!(css, "src/components/documents/modals.module.css");

#[component]
pub fn DeleteModal(visible: RwSignal<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let selected = ctx.docs.selected;

    let on_close = move |_: leptos::ev::MouseEvent| visible.set(false);

    let on_confirm = move |_: leptos::ev::MouseEvent| {
        let Some(doc) = selected.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::delete_document(&doc.id).await {
                Ok(()) => {
                    ctx.refresh_documents().await;
                    let _ = visible.try_set(false);
                    ctx.docs.clear_selection();
                    ctx.notices.success(format!("Deleted {}", doc.name));
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("Delete of {} failed: {}", doc.name, err).into(),
                    );
                    ctx.notices.error(format!("Delete failed: {}", err));
                }
            }
        });
    };

    view! {
        <Show when=move || visible.get()>
            <div class=css::backdrop>
                <div class=css::modal>
                    <button class=css::close on:click=on_close title="Close modal">
                        <Icon icon=ic::CLOSE />
                    </button>
                    <div class=css::body>
                        <span class=format!("{} {}", css::headerIcon, css::headerIconDanger)>
                            <Icon icon=ic::TRASH />
                        </span>
                        <h3 class=css::title>"Delete Document"</h3>
                        <p class=css::text>"Are you sure you want to delete this document?"</p>
                        {move || {
                            selected
                                .get()
                                .map(|doc| view! { <p class=css::targetName>{doc.name}</p> })
                        }}
                        <div class=css::buttonRow>
                            <button class=css::dangerButton on:click=on_confirm>
                                "Delete"
                            </button>
                            <button class=css::neutralButton on:click=on_close>
                                "Cancel"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn ShareModal(visible: RwSignal<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let selected = ctx.docs.selected;

    let hours_input = RwSignal::new(MIN_VALID_HOURS.to_string());
    // Generated link plus its locally computed expiry hint in milliseconds.
    let link = RwSignal::new(None::<(String, u64)>);

    // A stale link must not survive a close or a change of target.
    Effect::new(move |_| {
        let _ = selected.get();
        let _ = visible.get();
        link.set(None);
    });

    let on_close = move |_: leptos::ev::MouseEvent| visible.set(false);

    let on_hours = move |ev: leptos::ev::Event| {
        if let Some(value) = dom::event_input_value(&ev) {
            hours_input.set(value);
        }
    };

    let on_generate = move |_: leptos::ev::MouseEvent| {
        let Some(doc) = selected.get_untracked() else {
            return;
        };
        let hours = ValidHours::parse(&hours_input.get_untracked());
        spawn_local(async move {
            match api::generate_share_link(&doc.id, hours).await {
                Ok(resp) => {
                    let _ = link.try_set(Some((resp.share_link, hours.expiry_hint_ms())));
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("Share link for {} failed: {}", doc.name, err).into(),
                    );
                    ctx.notices.error(format!("Share link failed: {}", err));
                }
            }
        });
    };

    let on_copy = move |_: leptos::ev::MouseEvent| {
        let Some((url, _)) = link.get_untracked() else {
            return;
        };
        spawn_local(async move {
            if dom::copy_to_clipboard(&url).await {
                ctx.notices.success("Link copied to clipboard");
            } else {
                ctx.notices.error("Could not copy link to clipboard");
            }
        });
    };

    view! {
        <Show when=move || visible.get()>
            <div class=css::backdrop>
                <div class=css::modal>
                    <button class=css::close on:click=on_close title="Close modal">
                        <Icon icon=ic::CLOSE />
                    </button>
                    <div class=css::body>
                        <span class=css::headerIcon>
                            <Icon icon=ic::SHARE />
                        </span>
                        <h3 class=css::title>"Share Link"</h3>
                        <p class=css::text>"Copy the link below to share the document:"</p>
                        {move || {
                            selected
                                .get()
                                .map(|doc| {
                                    let alt = doc.name.clone();
                                    view! {
                                        <div class=css::target>
                                            <h4 class=css::targetName>{doc.name.clone()}</h4>
                                            <img
                                                src=doc.preview_url.clone()
                                                alt=alt
                                                class=css::targetThumb
                                            />
                                        </div>
                                    }
                                })
                        }}
                        <div class=css::hoursRow>
                            <input
                                type="number"
                                min=MIN_VALID_HOURS.to_string()
                                max=MAX_VALID_HOURS.to_string()
                                class=css::hoursInput
                                placeholder="Set expiration time"
                                prop:value=move || hours_input.get()
                                on:input=on_hours
                            />
                            <span class=css::hoursUnit>"hours"</span>
                        </div>
                        <button class=css::primaryButton on:click=on_generate>
                            "Generate Share Link"
                        </button>
                        {move || {
                            link.get()
                                .map(|(url, hint_ms)| {
                                    view! {
                                        <input
                                            type="text"
                                            class=css::linkField
                                            readonly=true
                                            prop:value=url
                                        />
                                        <p class=css::expiry>{format_expiry_hint(hint_ms)}</p>
                                        <button class=css::primaryButton on:click=on_copy>
                                            <span class=css::buttonIcon>
                                                <Icon icon=ic::CLIPBOARD />
                                            </span>
                                            "Copy Link"
                                        </button>
                                    }
                                })
                        }}
                    </div>
                </div>
            </div>
        </Show>
    }
}
