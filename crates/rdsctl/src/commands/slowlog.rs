//! Slow log collection

use chrono::{DateTime, FixedOffset, Utc};
use rds_core::slowlog::{SlowLogWindow, collect_slow_logs};
use rds_model::time::REQUEST_TIME_FORMAT;
use tracing::info;

use crate::cli::{self, SlowLogCommands};
use crate::connection::ConnectionManager;
use crate::error::{RdsCtlError, Result as CliResult};
use crate::output::{self, OutputFormat};

/// Parse `2024-03-01T08:00:00+0800` or RFC 3339
fn parse_time(flag: &str, raw: &str) -> CliResult<DateTime<FixedOffset>> {
    DateTime::parse_from_str(raw, REQUEST_TIME_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map_err(|e| RdsCtlError::InvalidInput {
            message: format!("{flag} '{raw}' is not a timestamp like 2024-03-01T08:00:00+0800: {e}"),
        })
}

pub async fn handle_slowlog_command(
    cmd: &SlowLogCommands,
    conn_mgr: &ConnectionManager,
    profile_name: Option<&str>,
    output_format: cli::OutputFormat,
    query: Option<&str>,
) -> CliResult<()> {
    match cmd {
        SlowLogCommands::Collect {
            instance_id,
            start,
            end,
            page_size,
        } => {
            let start = parse_time("--start", start)?;
            let end = match end {
                Some(end) => parse_time("--end", end)?,
                None => Utc::now().with_timezone(start.offset()),
            };
            let mut window = SlowLogWindow::new(start, end);
            window.page_size = *page_size;

            let client = conn_mgr.create_client(profile_name)?;
            let logs = collect_slow_logs(&client, instance_id, &window).await?;
            info!("Collected {} slow log records", logs.len());

            let format = OutputFormat::resolve(output_format, OutputFormat::Table);
            output::print_output(logs, format, query)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_formats() {
        let wire = parse_time("--start", "2024-03-01T08:00:00+0800").unwrap();
        let rfc = parse_time("--start", "2024-03-01T08:00:00+08:00").unwrap();
        assert_eq!(wire, rfc);
        assert_eq!(wire.offset().local_minus_utc(), 8 * 3600);

        let err = parse_time("--end", "yesterday").unwrap_err();
        assert!(err.to_string().contains("--end"));
    }
}
