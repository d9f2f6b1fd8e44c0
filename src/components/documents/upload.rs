//! Upload panel with drag-and-drop staging.
//!
//! Pending files accumulate (picker and drop both append, never replace)
//! until the user submits or cancels. Submission walks the set strictly in
//! selection order, one request at a time, and keeps an explicit outcome per
//! file: failed files stay staged, successes leave the set.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::FileList;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{FILE_INPUT_ID, SUCCESS_FLASH_MS};
use crate::core::api;
use crate::utils::dom;

use super::hooks::PagerState;

stylance::import_crate_style!(css, "src/components/documents/upload.module.css");

// File handles are JS objects, so the pending set lives in local storage
// (this is a single-threaded wasm app; nothing crosses threads).
fn append_files(pending: RwSignal<Vec<web_sys::File>, LocalStorage>, files: FileList) {
    pending.update(|list| {
        for index in 0..files.length() {
            if let Some(file) = files.get(index) {
                list.push(file);
            }
        }
    });
}

#[component]
pub fn UploadPanel(pager: PagerState) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let pending = RwSignal::new_local(Vec::<web_sys::File>::new());
    let uploading = RwSignal::new(false);
    let success = RwSignal::new(false);

    let on_pick = move |ev: leptos::ev::Event| {
        if let Some(target) = ev.target()
            && let Ok(input) = target.dyn_into::<web_sys::HtmlInputElement>()
            && let Some(files) = input.files()
        {
            append_files(pending, files);
        }
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        if let Some(transfer) = ev.data_transfer()
            && let Some(files) = transfer.files()
        {
            append_files(pending, files);
        }
    };

    let suppress = |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
    };

    // Discard the staged set without any network activity.
    let on_cancel = move |_: leptos::ev::MouseEvent| {
        pending.set(Vec::new());
        success.set(false);
    };

    let on_upload = move |_: leptos::ev::MouseEvent| {
        let files = pending.get_untracked();
        if files.is_empty() || uploading.get_untracked() {
            return;
        }
        uploading.set(true);

        spawn_local(async move {
            // Strictly sequential, in selection order; every file is
            // attempted and yields an explicit outcome.
            let mut outcomes = Vec::with_capacity(files.len());
            for file in files {
                let result = api::upload_document(&file).await;
                outcomes.push((file, result));
            }

            let attempted = outcomes.len();
            let mut failed = Vec::new();
            for (file, result) in outcomes {
                if let Err(err) = result {
                    web_sys::console::error_1(
                        &format!("Upload of {} failed: {}", file.name(), err).into(),
                    );
                    ctx.notices
                        .error(format!("Upload of {} failed: {}", file.name(), err));
                    failed.push(file);
                }
            }

            let all_ok = failed.is_empty();
            let uploaded_any = failed.len() < attempted;
            let _ = pending.try_set(failed);
            let _ = uploading.try_set(false);

            if uploaded_any {
                // Server truth over local patching: re-fetch the collection,
                // then land on the page holding the appended rows.
                ctx.refresh_documents().await;
                let len = ctx.docs.documents.with_untracked(|docs| docs.len());
                pager.goto_last(len);
            }

            if all_ok {
                dom::reset_input_value(FILE_INPUT_ID);
                let _ = success.try_set(true);
                TimeoutFuture::new(SUCCESS_FLASH_MS).await;
                let _ = success.try_set(false);
            }
        });
    };

    let pending_count = Signal::derive(move || pending.with(|list| list.len()));
    let pending_names = Signal::derive(move || {
        pending.with(|list| list.iter().map(|file| file.name()).collect::<Vec<_>>())
    });
    let show_actions =
        Signal::derive(move || pending_count.get() > 0 && !uploading.get() && !success.get());

    view! {
        <div
            class=css::dropArea
            on:dragover=suppress
            on:dragenter=suppress
            on:dragleave=suppress
            on:drop=on_drop
        >
            <label for=FILE_INPUT_ID class=css::dropzone>
                {move || {
                    if uploading.get() {
                        view! {
                            <div class=css::stateBox>
                                <div class=css::spinner></div>
                                <p class=css::hint>"Uploading..."</p>
                            </div>
                        }
                        .into_any()
                    } else if success.get() {
                        view! {
                            <div class=css::stateBox>
                                <span class=css::successIcon>
                                    <Icon icon=ic::CHECK />
                                </span>
                                <p class=css::hint>"Upload successful!"</p>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class=css::stateBox>
                                <span class=css::uploadIcon>
                                    <Icon icon=ic::UPLOAD />
                                </span>
                                <p class=css::prompt>
                                    <span class=css::promptStrong>"Click to upload"</span>
                                    " or drag and drop"
                                </p>
                                <Show when=move || (pending_count.get() > 0)>
                                    <div class=css::pendingBox>
                                        <p class=css::hint>
                                            {move || {
                                                format!("{} file(s) selected", pending_count.get())
                                            }}
                                        </p>
                                        <ul class=css::pendingList>
                                            <For
                                                each=move || {
                                                    pending_names
                                                        .get()
                                                        .into_iter()
                                                        .enumerate()
                                                        .collect::<Vec<_>>()
                                                }
                                                key=|(index, _)| *index
                                                children=move |(_, name)| view! { <li>{name}</li> }
                                            />
                                        </ul>
                                    </div>
                                </Show>
                            </div>
                        }
                        .into_any()
                    }
                }}
                <input
                    id=FILE_INPUT_ID
                    type="file"
                    multiple=true
                    class=css::hiddenInput
                    on:change=on_pick
                    disabled=move || uploading.get() || success.get()
                />
                <Show when=move || show_actions.get()>
                    <div class=css::actions>
                        <button class=css::uploadButton on:click=on_upload>
                            "Upload"
                        </button>
                        <button class=css::cancelButton on:click=on_cancel>
                            "Cancel"
                        </button>
                    </div>
                </Show>
            </label>
        </div>
    }
}
