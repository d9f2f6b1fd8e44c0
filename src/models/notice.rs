//! Typed status messages surfaced by the notice bar.

/// Severity of a [`Notice`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

/// A single user-visible status message.
///
/// Failures are never swallowed into the console alone; each one becomes a
/// notice so the user sees more than "nothing happened".
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    /// Monotonic id, used as the render key and for dismissal.
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}
