//! Collecting slow-query records across pages
//!
//! ListSlowLogs pages with `offset` as a 1-based page number. The window
//! start is only honoured to the minute by the service, so records that
//! started at or before it are dropped from the result.

use chrono::{DateTime, FixedOffset, TimeDelta};
use rds_model::model::log::{ListSlowLogsRequest, SlowLog};
use rds_model::time::format_request_time;
use tracing::debug;

use crate::client::RdsClient;
use crate::error::{CoreError, Result};

/// Largest page the service accepts
pub const MAX_PAGE_SIZE: i32 = 100;

/// Oldest slow log the service keeps, counted back from the window end
pub const MAX_WINDOW_DAYS: i64 = 30;

/// Time window and page size of a collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlowLogWindow {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub page_size: i32,
}

impl SlowLogWindow {
    /// A window with the largest page size
    #[must_use]
    pub fn new(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Self {
        Self {
            start,
            end,
            page_size: MAX_PAGE_SIZE,
        }
    }

    fn validate(&self) -> Result<()> {
        if !(1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(CoreError::Validation(format!(
                "page size must be between 1 and {MAX_PAGE_SIZE}, got {}",
                self.page_size
            )));
        }
        if self.end <= self.start {
            return Err(CoreError::Validation(
                "window end must be after its start".to_string(),
            ));
        }
        if self.end - self.start > TimeDelta::days(MAX_WINDOW_DAYS) {
            return Err(CoreError::Validation(format!(
                "window must not exceed {MAX_WINDOW_DAYS} days"
            )));
        }
        Ok(())
    }
}

/// Fetch every slow log of `instance_id` in `window`
///
/// Pages are requested until one comes back shorter than the page size.
pub async fn collect_slow_logs(
    client: &RdsClient,
    instance_id: &str,
    window: &SlowLogWindow,
) -> Result<Vec<SlowLog>> {
    window.validate()?;

    let start_date = format_request_time(&window.start);
    let end_date = format_request_time(&window.end);
    let mut logs = Vec::new();
    let mut page = 1;

    loop {
        let request = ListSlowLogsRequest::builder()
            .instance_id(instance_id)
            .start_date(start_date.as_str())
            .end_date(end_date.as_str())
            .offset(page)
            .limit(window.page_size)
            .build();
        let batch = client.call(&request).await?.slow_log_list.unwrap_or_default();
        let fetched = batch.len();
        debug!(instance_id, page, fetched, "Fetched slow log page");

        logs.extend(started_after(batch, &window.start)?);

        if fetched < window.page_size as usize {
            break;
        }
        page += 1;
    }

    Ok(logs)
}

/// Drops records that started at or before `since`
///
/// `start_time` carries no offset and is read as local to `since`. A record
/// whose start time does not parse fails the whole collection.
pub fn started_after(logs: Vec<SlowLog>, since: &DateTime<FixedOffset>) -> Result<Vec<SlowLog>> {
    let since = since.naive_local();
    let mut kept = Vec::with_capacity(logs.len());
    for log in logs {
        let started = log.started_at().map_err(|source| CoreError::TimeFormat {
            raw: log.start_time.clone(),
            source,
        })?;
        if started > since {
            kept.push(log);
        }
    }
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32, second: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(8 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 1, hour, minute, second)
            .unwrap()
    }

    fn log(start_time: &str) -> SlowLog {
        serde_json::from_value(serde_json::json!({
            "query_sample": "select 1",
            "start_time": start_time
        }))
        .unwrap()
    }

    #[test]
    fn test_started_after_filters_window_start() {
        let logs = vec![
            log("2024-03-01T08:00:00"),
            log("2024-03-01T08:00:01"),
            log("2024-03-01T07:59:59"),
        ];
        let kept = started_after(logs, &at(8, 0, 0)).unwrap();
        let starts: Vec<_> = kept.iter().map(|l| l.start_time.as_str()).collect();
        assert_eq!(starts, vec!["2024-03-01T08:00:01"]);
    }

    #[test]
    fn test_unparseable_start_time_fails() {
        let logs = vec![log("2024-03-01T08:00:01"), log("not a time")];
        let err = started_after(logs, &at(8, 0, 0)).unwrap_err();
        assert!(matches!(err, CoreError::TimeFormat { ref raw, .. } if raw == "not a time"));
        assert!(err.to_string().contains("not a time"));
    }

    #[test]
    fn test_window_validation() {
        assert!(SlowLogWindow::new(at(8, 0, 0), at(9, 0, 0)).validate().is_ok());
        assert!(SlowLogWindow::new(at(9, 0, 0), at(8, 0, 0)).validate().is_err());

        let mut window = SlowLogWindow::new(at(8, 0, 0), at(9, 0, 0));
        window.page_size = 0;
        assert!(window.validate().unwrap_err().is_bad_request());
        window.page_size = 101;
        assert!(window.validate().is_err());

        let long = SlowLogWindow::new(at(8, 0, 0) - TimeDelta::days(31), at(8, 0, 0));
        assert!(long.validate().is_err());
    }
}
