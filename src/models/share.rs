//! Share-link validity period.

use std::fmt;

use crate::config::{DEFAULT_VALID_HOURS, MAX_VALID_HOURS, MIN_VALID_HOURS};

/// Milliseconds in one hour.
const MS_PER_HOUR: u64 = 3_600_000;

/// Requested share-link validity in whole hours.
///
/// Bounded to `MIN_VALID_HOURS..=MAX_VALID_HOURS`; construction clamps
/// instead of failing so the input field can never carry an out-of-range
/// value into a request. The backend remains the authority on the actual
/// expiry; [`ValidHours::expiry_hint_ms`] is only the locally computed hint
/// shown next to a generated link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidHours(u32);

impl ValidHours {
    /// Create a validity period, clamping into the accepted range.
    pub fn new(hours: u32) -> Self {
        Self(hours.clamp(MIN_VALID_HOURS, MAX_VALID_HOURS))
    }

    /// Parse user input, falling back to the default when unparseable.
    pub fn parse(input: &str) -> Self {
        input
            .trim()
            .parse::<u32>()
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn hours(self) -> u32 {
        self.0
    }

    /// Locally computed expiration hint in milliseconds.
    pub fn expiry_hint_ms(self) -> u64 {
        u64::from(self.0) * MS_PER_HOUR
    }
}

impl Default for ValidHours {
    fn default() -> Self {
        Self::new(DEFAULT_VALID_HOURS)
    }
}

impl fmt::Display for ValidHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_into_accepted_range() {
        assert_eq!(ValidHours::new(0).hours(), MIN_VALID_HOURS);
        assert_eq!(ValidHours::new(5).hours(), 5);
        assert_eq!(ValidHours::new(10_000).hours(), MAX_VALID_HOURS);
    }

    #[test]
    fn parse_falls_back_to_default() {
        assert_eq!(ValidHours::parse("24").hours(), 24);
        assert_eq!(ValidHours::parse(" 2 ").hours(), 2);
        assert_eq!(ValidHours::parse("").hours(), DEFAULT_VALID_HOURS);
        assert_eq!(ValidHours::parse("abc").hours(), DEFAULT_VALID_HOURS);
        assert_eq!(ValidHours::parse("-3").hours(), DEFAULT_VALID_HOURS);
    }

    #[test]
    fn expiry_hint_is_hours_in_milliseconds() {
        assert_eq!(ValidHours::new(2).expiry_hint_ms(), 7_200_000);
        assert_eq!(ValidHours::default().expiry_hint_ms(), 3_600_000);
    }
}
