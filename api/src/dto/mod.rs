//! Request and response DTOs
//!
//! Shape validation lives here (`validator` derives plus RFC 3339 date
//! parsing); business rules stay in the core services.

pub mod booking;
pub mod car;
pub mod payment;
pub mod review;
pub mod user;
pub mod verify;

use chrono::{DateTime, Utc};

use ws_core::errors::{DomainResult, ValidationError};

/// Parse an RFC 3339 timestamp into a UTC instant
///
/// All dates in the API compare as UTC instants regardless of the offset
/// the client sent.
pub(crate) fn parse_utc(field: &str, value: &str) -> DomainResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            ValidationError::InvalidFormat {
                field: field.to_string(),
            }
            .into()
        })
}

/// Parse a `[start, end)` pair, rejecting empty and inverted ranges
pub(crate) fn parse_utc_range(
    start_field: &str,
    start: &str,
    end_field: &str,
    end: &str,
) -> DomainResult<(DateTime<Utc>, DateTime<Utc>)> {
    let start = parse_utc(start_field, start)?;
    let end = parse_utc(end_field, end)?;
    if start >= end {
        return Err(ValidationError::InvalidDateRange.into());
    }
    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ws_core::errors::DomainError;

    #[test]
    fn offsets_normalise_to_utc() {
        let parsed = parse_utc("start_date", "2025-06-01T05:30:00+05:30").unwrap();
        assert_eq!(parsed, parse_utc("start_date", "2025-06-01T00:00:00Z").unwrap());
    }

    #[test]
    fn malformed_dates_are_rejected() {
        assert!(matches!(
            parse_utc("start_date", "June 1st"),
            Err(DomainError::ValidationErr(ValidationError::InvalidFormat { .. }))
        ));
    }

    #[test]
    fn inverted_and_empty_ranges_are_rejected() {
        for (start, end) in [
            ("2025-06-05T00:00:00Z", "2025-06-01T00:00:00Z"),
            ("2025-06-01T00:00:00Z", "2025-06-01T00:00:00Z"),
        ] {
            assert!(matches!(
                parse_utc_range("start_date", start, "end_date", end),
                Err(DomainError::ValidationErr(ValidationError::InvalidDateRange))
            ));
        }
    }
}
