//! Job tracking with a progress spinner

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use rds_core::RdsClient;
use rds_core::jobs::{ProgressCallback, ProgressEvent, wait_for_job};
use rds_model::model::job::ListJobInfoRequest;

use crate::cli::{self, JobCommands};
use crate::connection::ConnectionManager;
use crate::error::{RdsCtlError, Result as CliResult};
use crate::output::{self, OutputFormat};

pub async fn handle_job_command(
    cmd: &JobCommands,
    conn_mgr: &ConnectionManager,
    profile_name: Option<&str>,
    output_format: cli::OutputFormat,
    query: Option<&str>,
) -> CliResult<()> {
    let client = conn_mgr.create_client(profile_name)?;
    match cmd {
        JobCommands::Get { job_id } => {
            let request = ListJobInfoRequest::builder().id(job_id.as_str()).build();
            let response = client.call(&request).await?;
            let job = response.job.ok_or_else(|| RdsCtlError::ApiError {
                status: response.http_status_code,
                message: format!("job {job_id} not found"),
            })?;
            let format = OutputFormat::resolve(output_format, OutputFormat::Table);
            output::print_output(job, format, query)?;
            Ok(())
        }
        JobCommands::Wait {
            job_id,
            timeout,
            interval,
        } => {
            wait_with_spinner(
                &client,
                job_id,
                Duration::from_secs(*timeout),
                Duration::from_secs(*interval),
                output_format,
                query,
            )
            .await
        }
    }
}

/// Format job status for display with status icons
fn format_job_status(status: &str) -> String {
    match status {
        "Completed" => format!("\u{2713} {}", status),
        "Failed" => format!("\u{2717} {}", status),
        "Running" => format!("\u{21bb} {}", status),
        "" => "pending".to_string(),
        _ => status.to_string(),
    }
}

/// Wait for a job, showing a spinner, then print the finished job
pub async fn wait_with_spinner(
    client: &RdsClient,
    job_id: &str,
    timeout: Duration,
    interval: Duration,
    output_format: cli::OutputFormat,
    query: Option<&str>,
) -> CliResult<()> {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) =
        ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed_precise}]")
    {
        pb.set_style(style);
    }
    pb.enable_steady_tick(Duration::from_millis(120));
    pb.set_message(format!("Waiting for job {}", job_id));

    let pb_clone = pb.clone();
    let progress_callback: ProgressCallback = Box::new(move |event: ProgressEvent| match &event {
        ProgressEvent::Started { job_id } => {
            pb_clone.set_message(format!("Job {} started", job_id));
        }
        ProgressEvent::Polling {
            job_id,
            status,
            process,
            ..
        } => {
            let progress = process
                .as_deref()
                .map(|p| format!(" ({p})"))
                .unwrap_or_default();
            pb_clone.set_message(format!(
                "Job {}: {}{}",
                job_id,
                format_job_status(status),
                progress
            ));
        }
        ProgressEvent::Completed { job_id } => {
            pb_clone.finish_with_message(format!(
                "Job {}: {}",
                job_id,
                format_job_status("Completed")
            ));
        }
        ProgressEvent::Failed { job_id, error } => {
            pb_clone.finish_with_message(format!("Job {} failed: {}", job_id, error));
        }
    });

    match wait_for_job(client, job_id, timeout, interval, Some(progress_callback)).await {
        Ok(job) => {
            let format = OutputFormat::resolve(output_format, OutputFormat::Table);
            output::print_output(job, format, query)?;
            Ok(())
        }
        Err(e) => {
            if !pb.is_finished() {
                pb.finish_with_message(format!("Job {} did not complete", job_id));
            }
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_job_status() {
        assert!(format_job_status("Completed").ends_with("Completed"));
        assert!(format_job_status("Failed").starts_with('\u{2717}'));
        assert_eq!(format_job_status(""), "pending");
        assert_eq!(format_job_status("Queued"), "Queued");
    }
}
