//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`fetch`] - Fetch API transport with timeout racing
//! - [`format`] - Display formatting (names, dates, expiry hints)
//! - [`dom`] - DOM helpers (inputs, downloads, clipboard, hash navigation)

pub mod dom;
pub mod fetch;
pub mod format;
