use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::errors::{Error, Result, ValidationError};

/// Current UTC instant as a naive timestamp, the form every record stores.
pub fn now_naive() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Parses a client-supplied date or timestamp.
///
/// Accepts RFC 3339 (`2025-03-01T09:00:00Z`), a naive ISO timestamp with
/// or without fractional seconds (`2025-03-01T09:00:00`), a space separated
/// timestamp, or a bare date (midnight is assumed).
pub fn parse_datetime(raw: &str) -> Result<NaiveDateTime> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(Error::invalid_input("date must not be empty"));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc).naive_utc());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(dt);
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|d| d.and_hms_opt(0, 0, 0).unwrap_or_default())
        .map_err(|e| Error::Validation(ValidationError::DateTimeParse(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_bare_date_as_midnight() {
        let dt = parse_datetime("2025-03-01").unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn parses_rfc3339_into_utc() {
        let dt = parse_datetime("2025-03-01T10:30:00+02:00").unwrap();
        assert_eq!(dt.hour(), 8);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn parses_naive_iso_timestamp() {
        let dt = parse_datetime("2025-03-01T10:30:15.250").unwrap();
        assert_eq!(dt.second(), 15);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_datetime("next tuesday").is_err());
        assert!(parse_datetime("   ").is_err());
    }
}
