//! Availability windows and the containment predicate.
//!
//! A car publishes an ordered list of [`DateRange`] windows during which it
//! may be booked. A booking request is accepted only when it lies wholly
//! inside a single window: a request spanning two adjacent windows is
//! rejected even when their union covers it. All instants are UTC; dates
//! arriving at the API boundary are parsed from RFC 3339 before they reach
//! this module.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A half-open date range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Inclusive start instant
    pub start: DateTime<Utc>,

    /// Exclusive end instant
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Creates a new date range without validating its ordering
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Whether `start` strictly precedes `end`.
    ///
    /// Zero-length and inverted ranges are rejected at the validation
    /// boundary, so well-formedness is checked before persistence rather
    /// than enforced by construction.
    pub fn is_well_formed(&self) -> bool {
        self.start < self.end
    }

    /// Whether the requested `[start, end)` lies wholly inside this window
    pub fn contains(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        start >= self.start && end <= self.end
    }
}

/// Decides whether a car with the given availability windows can satisfy a
/// booking request for `[start, end)`.
///
/// This is a containment check, not a general interval-overlap check: the
/// request must fit inside one published window. An empty window list is
/// never bookable. Linear scan; window counts per car are small.
pub fn is_bookable(slots: &[DateRange], start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
    slots.iter().any(|slot| slot.contains(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, day, 0, 0, 0).unwrap()
    }

    #[test]
    fn request_inside_single_slot_is_bookable() {
        let slots = vec![DateRange::new(date(1), date(10))];
        assert!(is_bookable(&slots, date(3), date(7)));
    }

    #[test]
    fn request_matching_slot_boundaries_is_bookable() {
        let slots = vec![DateRange::new(date(1), date(10))];
        assert!(is_bookable(&slots, date(1), date(10)));
    }

    #[test]
    fn request_extending_past_slot_end_is_rejected() {
        let slots = vec![DateRange::new(date(1), date(10))];
        assert!(!is_bookable(&slots, date(5), date(12)));
    }

    #[test]
    fn request_starting_before_slot_is_rejected() {
        let slots = vec![DateRange::new(date(5), date(10))];
        assert!(!is_bookable(&slots, date(3), date(8)));
    }

    #[test]
    fn spanning_two_adjacent_slots_is_rejected() {
        // slot1=[Jan1,Jan5), slot2=[Jan5,Jan10): their union covers
        // [Jan3,Jan7) but no single slot does.
        let slots = vec![
            DateRange::new(date(1), date(5)),
            DateRange::new(date(5), date(10)),
        ];
        assert!(!is_bookable(&slots, date(3), date(7)));
        assert!(is_bookable(&slots, date(2), date(4)));
        assert!(is_bookable(&slots, date(6), date(9)));
    }

    #[test]
    fn empty_availability_is_never_bookable() {
        assert!(!is_bookable(&[], date(1), date(2)));
    }

    #[test]
    fn later_slot_can_satisfy_request() {
        let slots = vec![
            DateRange::new(date(1), date(3)),
            DateRange::new(date(10), date(20)),
        ];
        assert!(is_bookable(&slots, date(12), date(15)));
    }

    #[test]
    fn well_formedness_rejects_inverted_and_zero_length() {
        assert!(DateRange::new(date(1), date(2)).is_well_formed());
        assert!(!DateRange::new(date(2), date(1)).is_well_formed());
        assert!(!DateRange::new(date(1), date(1)).is_well_formed());
    }
}
