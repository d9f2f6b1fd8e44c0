//! Document list view: upload panel, paginated table, and action modals.

mod download;
mod hooks;
mod modals;
mod table;
mod upload;

use leptos::prelude::*;

pub use hooks::PagerState;

use modals::{DeleteModal, ShareModal};
use table::DocumentTable;
use upload::UploadPanel;

stylance::import_crate_style!(css, "src/components/documents/documents.module.css");

/// The list route: upload panel above the paginated document table, with
/// the delete and share modals gated by their visibility flags.
#[component]
pub fn DocumentsView() -> impl IntoView {
    let pager = PagerState::new();
    let show_delete = RwSignal::new(false);
    let show_share = RwSignal::new(false);

    view! {
        <div class=css::page>
            <h2 class=css::heading>"Document List"</h2>
            <UploadPanel pager=pager />
            <DocumentTable pager=pager show_delete=show_delete show_share=show_share />
            <DeleteModal visible=show_delete />
            <ShareModal visible=show_share />
        </div>
    }
}
