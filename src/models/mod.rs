//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Document`], [`DocumentDescriptor`], [`DocumentId`] - Backend document records
//! - [`FileKind`] - MIME-derived document classification
//! - [`AppRoute`] - Hash-based navigation between list and preview views
//! - [`ValidHours`] - Bounded share-link validity period
//! - [`Notice`], [`NoticeKind`] - Typed status/error messages for the notice bar

mod document;
mod file_kind;
mod notice;
mod route;
mod share;

pub use document::{Document, DocumentDescriptor, DocumentId};
pub use file_kind::FileKind;
pub use notice::{Notice, NoticeKind};
pub use route::AppRoute;
pub use share::ValidHours;
