//! Wire time formats
//!
//! Query parameters such as `start_date` take an offset timestamp
//! (`2024-03-01T08:00:00+0800`); log records come back as local time
//! without an offset (`2024-03-01T08:00:00`).

use chrono::{DateTime, NaiveDateTime, TimeZone};

/// Format of time parameters sent to the API
pub const REQUEST_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Format of time fields returned by the API
pub const RESPONSE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Formats a timestamp for a request parameter
pub fn format_request_time<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    time.format(REQUEST_TIME_FORMAT).to_string()
}

/// Parses a response time field
pub fn parse_response_time(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(raw.trim(), RESPONSE_TIME_FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, Utc};

    #[test]
    fn test_format_request_time_with_offset() {
        let offset = FixedOffset::east_opt(8 * 3600).unwrap();
        let time = offset.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap();
        assert_eq!(format_request_time(&time), "2024-03-01T08:30:00+0800");

        let utc = Utc.with_ymd_and_hms(2024, 3, 1, 0, 30, 0).unwrap();
        assert_eq!(format_request_time(&utc), "2024-03-01T00:30:00+0000");
    }

    #[test]
    fn test_parse_response_time() {
        let parsed = parse_response_time("2024-03-01T08:30:15").unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(8, 30, 15)
            .unwrap();
        assert_eq!(parsed, expected);
        assert!(parse_response_time("01/03/2024").is_err());
    }
}
