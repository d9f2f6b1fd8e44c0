//! Paginated document table.
//!
//! Renders the canonical collection one page at a time. Pagination is purely
//! client-side; the page index is re-clamped on every collection change so
//! deletions can never strand the view past the last page.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::PAGE_SIZE_CHOICES;
use crate::core::paging;
use crate::models::{AppRoute, Document, FileKind};
use crate::utils::dom;
use crate::utils::format::{display_name, format_upload_date};

use super::download::DownloadButton;
use super::hooks::PagerState;

stylance::import_crate_style!(css, "src/components/documents/table.module.css");

/// Icon for a document, mapped from its MIME type.
fn kind_icon(kind: FileKind) -> IconData {
    match kind {
        FileKind::Pdf => ic::FILE_PDF,
        FileKind::Image => ic::FILE_IMAGE,
        FileKind::Word => ic::FILE_WORD,
        FileKind::Excel => ic::FILE_EXCEL,
        FileKind::Powerpoint => ic::FILE_SLIDES,
        FileKind::Other => ic::FILE,
    }
}

#[component]
pub fn DocumentTable(
    pager: PagerState,
    show_delete: RwSignal<bool>,
    show_share: RwSignal<bool>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let documents = ctx.docs.documents;

    // Current page is derived state: re-clamp whenever the collection
    // length or page size changes.
    Effect::new(move |_| {
        let len = documents.with(|docs| docs.len());
        let _ = pager.size.get();
        pager.clamp(len);
    });

    let total_pages = Memo::new(move |_| {
        paging::page_count(documents.with(|docs| docs.len()), pager.size.get())
    });

    // Rows of the current page only.
    let visible = Memo::new(move |_| {
        documents.with(|docs| {
            let (start, end) =
                paging::page_bounds(pager.index.get(), docs.len(), pager.size.get());
            docs[start..end].to_vec()
        })
    });

    view! {
        <div class=css::wrapper>
            <table class=css::table>
                <thead class=css::head>
                    <tr>
                        <th class=css::headCell>"Name"</th>
                        <th class=css::headCell>"Type"</th>
                        <th class=css::headCell>"Preview"</th>
                        <th class=css::headCell>"Upload Date"</th>
                        <th class=css::headCell>"Downloads"</th>
                        <th class=css::headCell>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show
                        when=move || ctx.docs.loaded.get()
                        fallback=|| view! {
                            <tr>
                                <td colspan="6" class=css::emptyCell>"Loading documents..."</td>
                            </tr>
                        }
                    >
                        // The key carries the counter: a row whose count
                        // moved is recreated instead of kept stale.
                        <For
                            each=move || visible.get()
                            key=|doc| (doc.id.clone(), doc.downloads)
                            children=move |doc| {
                                view! {
                                    <DocumentRow
                                        document=doc
                                        show_delete=show_delete
                                        show_share=show_share
                                    />
                                }
                            }
                        />
                    </Show>
                </tbody>
            </table>
            <Pager pager=pager total_pages=total_pages />
        </div>
    }
}

#[component]
fn DocumentRow(
    document: Document,
    show_delete: RwSignal<bool>,
    show_share: RwSignal<bool>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let kind = document.kind();
    let name = display_name(&document.name).to_string();
    let date = format_upload_date(&document.upload_date_time);
    let downloads = document.downloads.to_string();
    let preview_url = document.preview_url.clone();
    let alt = document.name.clone();

    // Row click opens the inline preview for this document.
    let preview_route = AppRoute::Preview {
        id: document.id.clone(),
    };
    let handle_click = move |_: leptos::ev::MouseEvent| {
        preview_route.push();
    };

    // Action buttons must not bubble into the row click.
    let share_doc = document.clone();
    let handle_share = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        ctx.docs.select(share_doc.clone());
        show_share.set(true);
    };

    let delete_doc = document.clone();
    let handle_delete = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        ctx.docs.select(delete_doc.clone());
        show_delete.set(true);
    };

    view! {
        <tr class=css::row on:click=handle_click>
            <td class=css::cell>{name}</td>
            <td class=css::cell>
                <span class=css::typeIcon aria-hidden="true">
                    <Icon icon=kind_icon(kind) />
                </span>
            </td>
            <td class=css::cell>
                {if kind == FileKind::Pdf {
                    // Paginated content shows its first page; the browser's
                    // viewer renders it inside the frame.
                    view! {
                        <iframe class=css::thumbFrame src=preview_url title=alt></iframe>
                    }
                    .into_any()
                } else {
                    view! { <img src=preview_url alt=alt class=css::thumb /> }.into_any()
                }}
            </td>
            <td class=css::cell>{date}</td>
            <td class=css::cell>{downloads}</td>
            <td class=css::cell>
                <button
                    class=format!("{} {}", css::action, css::actionShare)
                    on:click=handle_share
                >
                    "Share"
                </button>
                <DownloadButton document=document />
                <button
                    class=format!("{} {}", css::action, css::actionDelete)
                    on:click=handle_delete
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

/// Pagination controls: previous/next, page indicator, go-to, page size.
#[component]
fn Pager(pager: PagerState, total_pages: Memo<usize>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let documents = ctx.docs.documents;
    let len = move || documents.with(|docs| docs.len());

    let can_prev = Signal::derive(move || pager.index.get() > 0);
    let can_next = Signal::derive(move || pager.index.get() + 1 < total_pages.get());

    let on_prev = move |_: leptos::ev::MouseEvent| pager.prev();
    let on_next = move |_: leptos::ev::MouseEvent| pager.next(len());

    let on_goto = move |ev: leptos::ev::Event| {
        if let Some(value) = dom::event_input_value(&ev)
            && let Ok(page) = value.trim().parse::<usize>()
        {
            pager.goto(page.saturating_sub(1), len());
        }
    };

    let on_size = move |ev: leptos::ev::Event| {
        if let Some(value) = dom::event_select_value(&ev)
            && let Ok(size) = value.parse::<usize>()
        {
            pager.set_size(size, len());
        }
    };

    view! {
        <div class=css::pagination>
            <div class=css::pageButtons>
                <button
                    class=css::pageButton
                    disabled=move || !can_prev.get()
                    on:click=on_prev
                >
                    <Icon icon=ic::CHEVRON_LEFT />
                    "Previous"
                </button>
                <button
                    class=css::pageButton
                    disabled=move || !can_next.get()
                    on:click=on_next
                >
                    "Next"
                    <Icon icon=ic::CHEVRON_RIGHT />
                </button>
            </div>
            <div class=css::pageMeta>
                <span>
                    "Page "
                    <strong>
                        {move || format!("{} of {}", pager.index.get() + 1, total_pages.get())}
                    </strong>
                </span>
                <span class=css::gotoLabel>
                    "Go to page:"
                    <input
                        type="number"
                        min="1"
                        class=css::gotoInput
                        prop:value=move || (pager.index.get() + 1).to_string()
                        on:change=on_goto
                    />
                </span>
                <select class=css::sizeSelect on:change=on_size>
                    {PAGE_SIZE_CHOICES
                        .iter()
                        .map(|&size| {
                            view! {
                                <option
                                    value=size.to_string()
                                    selected=move || pager.size.get() == size
                                >
                                    {format!("Show {}", size)}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </div>
        </div>
    }
}
