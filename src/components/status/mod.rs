//! Notice bar surfacing errors and confirmations.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::NoticeKind;

stylance::import_crate_style!(css, "src/components/status/status.module.css");

/// Stacked list of active notices with per-notice dismissal.
#[component]
pub fn NoticeBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let notices = ctx.notices.notices;

    view! {
        <div class=css::bar aria-live="polite">
            <For
                each=move || notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let item_class = match notice.kind {
                        NoticeKind::Error => format!("{} {}", css::notice, css::noticeError),
                        NoticeKind::Success => format!("{} {}", css::notice, css::noticeSuccess),
                    };
                    let id = notice.id;
                    view! {
                        <div class=item_class role="status">
                            <span class=css::message>{notice.message.clone()}</span>
                            <button
                                class=css::dismiss
                                on:click=move |_| ctx.notices.dismiss(id)
                                title="Dismiss"
                            >
                                <Icon icon=ic::CLOSE />
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
