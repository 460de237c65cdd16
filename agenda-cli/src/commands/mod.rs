pub mod day;
pub mod delete;
pub mod edit;
pub mod month;
pub mod new;
pub mod upcoming;
pub mod week;

use anyhow::{Result, anyhow};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse a YYYY-MM-DD date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| anyhow!("Invalid date '{s}'. Expected YYYY-MM-DD"))
}

/// Parse a datetime like "2026-03-20T15:00" (a space also works), UTC.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>> {
    for format in ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt.and_utc());
        }
    }
    Err(anyhow!("Invalid datetime '{s}'. Expected YYYY-MM-DDTHH:MM"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_datetime_separators() {
        assert_eq!(
            parse_datetime("2026-03-20T15:00").unwrap(),
            parse_datetime("2026-03-20 15:00").unwrap()
        );
    }

    #[test]
    fn rejects_bare_dates_as_datetimes() {
        assert!(parse_datetime("2026-03-20").is_err());
        assert!(parse_date("2026-03-20").is_ok());
    }
}
