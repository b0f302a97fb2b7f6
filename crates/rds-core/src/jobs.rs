//! Polling of asynchronous jobs
//!
//! Mutating calls such as CreateInstance or EnlargeVolume answer with a
//! `job_id`. [`wait_for_job`] polls ListJobInfo until the job reaches a
//! terminal status, with an optional callback for UI updates.

use std::time::{Duration, Instant};

use rds_model::model::job::{JobInfo, JobStatus, ListJobInfoRequest};
use tracing::debug;

use crate::client::RdsClient;
use crate::error::{CoreError, Result};

/// Default time to wait for a job
pub const DEFAULT_JOB_TIMEOUT: Duration = Duration::from_secs(1800);

/// Default delay between polls
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Progress events emitted while waiting for a job
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    /// Polling has started
    Started { job_id: String },
    /// One poll with the status seen
    Polling {
        job_id: String,
        status: String,
        process: Option<String>,
        elapsed: Duration,
    },
    /// Job completed
    Completed { job_id: String },
    /// Job failed
    Failed { job_id: String, error: String },
}

/// Callback type for progress updates
pub type ProgressCallback = Box<dyn Fn(ProgressEvent) + Send + Sync>;

/// Poll a job until it completes, fails or `timeout` elapses
///
/// A job that is not visible yet (no `job` in the response) is treated as
/// still running.
///
/// ```rust,ignore
/// use rds_core::jobs::{wait_for_job, ProgressEvent};
/// use std::time::Duration;
///
/// let job = wait_for_job(
///     &client,
///     &job_id,
///     Duration::from_secs(1800),
///     Duration::from_secs(10),
///     Some(Box::new(|event| {
///         if let ProgressEvent::Polling { status, elapsed, .. } = event {
///             eprintln!("{status} ({}s)", elapsed.as_secs());
///         }
///     })),
/// )
/// .await?;
/// ```
pub async fn wait_for_job(
    client: &RdsClient,
    job_id: &str,
    timeout: Duration,
    interval: Duration,
    on_progress: Option<ProgressCallback>,
) -> Result<JobInfo> {
    if job_id.is_empty() {
        return Err(CoreError::Validation("job id must not be empty".to_string()));
    }

    let start = Instant::now();
    let request = ListJobInfoRequest::builder().id(job_id).build();

    emit(
        &on_progress,
        ProgressEvent::Started {
            job_id: job_id.to_string(),
        },
    );

    loop {
        let elapsed = start.elapsed();
        if elapsed > timeout {
            return Err(CoreError::JobTimeout(timeout));
        }

        let response = client.call(&request).await?;
        let job = response.job;
        let status = job.as_ref().and_then(|j| j.status.clone());

        emit(
            &on_progress,
            ProgressEvent::Polling {
                job_id: job_id.to_string(),
                status: status
                    .as_ref()
                    .map(|s| s.value().to_string())
                    .unwrap_or_default(),
                process: job.as_ref().and_then(|j| j.process.clone()),
                elapsed,
            },
        );

        match (job, status) {
            (Some(job), Some(JobStatus::Completed)) => {
                debug!(job_id, elapsed_ms = elapsed.as_millis() as u64, "Job completed");
                emit(
                    &on_progress,
                    ProgressEvent::Completed {
                        job_id: job_id.to_string(),
                    },
                );
                return Ok(job);
            }
            (Some(job), Some(JobStatus::Failed)) => {
                let error = job
                    .fail_reason
                    .clone()
                    .unwrap_or_else(|| format!("job {job_id} failed"));
                emit(
                    &on_progress,
                    ProgressEvent::Failed {
                        job_id: job_id.to_string(),
                        error: error.clone(),
                    },
                );
                return Err(CoreError::JobFailed(error));
            }
            _ => {
                tokio::time::sleep(interval).await;
            }
        }
    }
}

fn emit(callback: &Option<ProgressCallback>, event: ProgressEvent) {
    if let Some(cb) = callback {
        cb(event);
    }
}
