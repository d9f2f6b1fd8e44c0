//! Root application module.
//!
//! Contains the main App component, AppContext definition, DocumentsState,
//! NoticeState, and application-level setup logic following Leptos conventions.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::AppRouter;
use crate::core::api;
use crate::models::{Document, DocumentId, Notice, NoticeKind};

// ============================================================================
// DocumentsState
// ============================================================================

/// Canonical document collection and the current modal selection.
///
/// The collection is owned here exclusively: descendants read it through the
/// context and every write funnels through [`AppContext::refresh_documents`],
/// which replaces it wholesale with whatever the backend returned. There is
/// no patching and no optimistic local state.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct DocumentsState {
    /// The document collection, in backend order.
    pub documents: RwSignal<Vec<Document>>,
    /// Whether the first fetch has completed (drives the loading row).
    pub loaded: RwSignal<bool>,
    /// Document currently targeted by the delete/share modals.
    pub selected: RwSignal<Option<Document>>,
}

impl DocumentsState {
    pub fn new() -> Self {
        Self {
            documents: RwSignal::new(Vec::new()),
            loaded: RwSignal::new(false),
            selected: RwSignal::new(None),
        }
    }

    /// Target a document for a modal action.
    pub fn select(&self, document: Document) {
        self.selected.set(Some(document));
    }

    /// Drop the modal selection.
    pub fn clear_selection(&self) {
        let _ = self.selected.try_set(None);
    }

    /// Update one document's download counter in place.
    ///
    /// The only in-place mutation the client performs; everything else goes
    /// through a wholesale refresh.
    pub fn set_download_count(&self, id: &DocumentId, count: u32) {
        let _ = self.documents.try_update(|documents| {
            if let Some(doc) = documents.iter_mut().find(|doc| &doc.id == id) {
                doc.downloads = count;
            }
        });
    }
}

impl Default for DocumentsState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// NoticeState
// ============================================================================

/// User-visible status messages rendered by the notice bar.
///
/// Every API failure lands here in addition to the console, so a failed
/// action is visible as more than an absent state change.
#[derive(Clone, Copy)]
pub struct NoticeState {
    pub notices: RwSignal<Vec<Notice>>,
    next_id: RwSignal<u64>,
}

impl NoticeState {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    fn push(&self, kind: NoticeKind, message: String) {
        let id = self
            .next_id
            .try_update(|n| {
                let id = *n;
                *n += 1;
                id
            })
            .unwrap_or_default();
        let _ = self.notices.try_update(|list| {
            list.push(Notice { id, kind, message });
        });
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NoticeKind::Error, message.into());
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NoticeKind::Success, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        let _ = self
            .notices
            .try_update(|list| list.retain(|notice| notice.id != id));
    }
}

impl Default for NoticeState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component using `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Canonical collection and modal selection.
    pub docs: DocumentsState,
    /// Typed error/success channel for the notice bar.
    pub notices: NoticeState,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            docs: DocumentsState::new(),
            notices: NoticeState::new(),
        }
    }

    /// Single mutation entry point for the document collection.
    ///
    /// Replaces the collection with the fetched listing; on failure the
    /// previous collection is kept, the error is logged and surfaced as a
    /// notice. Writes go through `try_set` so a response that arrives after
    /// the owning view unmounted is ignored rather than crashing.
    pub async fn refresh_documents(self) {
        match api::list_documents().await {
            Ok(documents) => {
                let _ = self.docs.documents.try_set(documents);
                let _ = self.docs.loaded.try_set(true);
            }
            Err(err) => {
                web_sys::console::error_1(&format!("Failed to fetch documents: {}", err).into());
                self.notices
                    .error(format!("Could not load documents: {}", err));
                let _ = self.docs.loaded.try_set(true);
            }
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Kicks off the initial collection fetch
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    // Initial fetch on mount; later refreshes are triggered by mutations.
    spawn_local(async move {
        ctx.refresh_documents().await;
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                ">
                    <h1 style="color: #dc2626; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <p style="color: #6b7280; margin-bottom: 2rem;">
                        "An unexpected error occurred. Please try reloading the page."
                    </p>
                    <ul style="color: #dc2626; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
