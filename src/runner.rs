//! High-level runner API for the sample job.
//!
//! The runner takes an already-resolved [`JobConfig`], processes each item in
//! order, and writes the progress trail and final JSON summary to the supplied
//! sink. It never reads the environment and never exits the process; callers
//! decide how a [`JobError`] maps to an exit code.

use std::io::Write;

use thiserror::Error;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::config::JobConfig;
use crate::report::{ConsoleReport, SummaryTotals};
use crate::summary::{ItemResult, JobSummary, local_timestamp};
use crate::telemetry::{JobEvent, ProgressStats};

/// Any fault that aborts a job run
#[derive(Debug, Error)]
pub enum JobError {
    #[error("failed to write job output")]
    Output(#[from] std::io::Error),

    #[error("failed to serialize job summary")]
    Serialize(#[from] serde_json::Error),
}

/// Run the job described by `config`, writing all output to `out`
///
/// Items are processed strictly one after another: each prints a progress
/// line, waits `config.step_delay`, records a completed [`ItemResult`] and
/// prints a completion line. When every item is done the summary block and
/// the pretty-printed [`JobSummary`] are written and the summary is returned.
///
/// # Example
///
/// ```no_run
/// use ecs_sample_job::config::JobConfig;
/// use ecs_sample_job::runner::run_job;
///
/// # async fn example() -> Result<(), ecs_sample_job::runner::JobError> {
/// let config = JobConfig::new("nightly-etl", 3);
/// let summary = run_job(&config, std::io::stdout()).await?;
/// assert_eq!(summary.results.len(), 3);
/// # Ok(())
/// # }
/// ```
pub async fn run_job<W: Write>(config: &JobConfig, out: W) -> Result<JobSummary, JobError> {
    let mut report = ConsoleReport::new(out);
    let mut stats = ProgressStats::new();
    let job_start = Instant::now();

    info!(
        job_name = %config.job_name,
        process_count = config.process_count,
        "Starting job"
    );
    report.banner(&config.job_name, &local_timestamp(), config.process_count)?;

    // Grows per completed item; process_count may be far larger than memory allows
    let mut results = Vec::new();
    for item_id in 1..=config.process_count {
        results.push(process_item(config, item_id, &mut report, &mut stats).await?);
    }

    let totals = SummaryTotals {
        total_items: config.process_count,
        successful: results.len(),
        failed: stats.items_failed,
    };
    report.summary_block(&totals, &local_timestamp())?;

    let (p50, p90, p99) = stats.get_percentiles();
    debug!(?p50, ?p90, ?p99, "Item duration percentiles (ms)");
    info!(
        "Job complete: {} of {} started items processed in {:.2}s",
        stats.items_completed,
        stats.items_started,
        job_start.elapsed().as_secs_f64()
    );

    let summary = JobSummary::success(config.job_name.clone(), results);
    report.results_json(&summary.to_pretty_json()?)?;

    Ok(summary)
}

/// Simulate work for a single item and record its result
async fn process_item<W: Write>(
    config: &JobConfig,
    item_id: u64,
    report: &mut ConsoleReport<W>,
    stats: &mut ProgressStats,
) -> Result<ItemResult, JobError> {
    stats.update(&JobEvent::ItemStarted { item_id });
    report.item_started(item_id, config.process_count)?;

    let started = Instant::now();
    tokio::time::sleep(config.step_delay).await;
    let result = ItemResult::completed(item_id);

    stats.update(&JobEvent::ItemCompleted {
        item_id,
        duration_ms: started.elapsed().as_millis() as u64,
    });
    report.item_completed(item_id)?;
    debug!(item_id, processed_at = %result.processed_at, "Item completed");

    Ok(result)
}
