//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`documents`] - Document list view: upload panel, table, action modals
//! - [`preview`] - Inline preview of a single document
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`status`] - Notice bar surfacing errors and confirmations

pub mod documents;
pub mod icons;
pub mod preview;
pub mod router;
pub mod status;

pub use router::AppRouter;
