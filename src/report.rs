//! Human-readable console output for a job run
//!
//! Line formats are consumed by log scrapers downstream, so they are kept stable.

use std::io::{self, Write};

const SEPARATOR_WIDTH: usize = 60;

/// Counters printed in the summary block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryTotals {
    pub total_items: u64,
    pub successful: usize,
    pub failed: usize,
}

/// Writes job progress to any [`Write`] sink (stdout in the binary, a buffer in tests)
pub struct ConsoleReport<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn separator(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "=".repeat(SEPARATOR_WIDTH))
    }

    pub fn banner(&mut self, job_name: &str, start_time: &str, process_count: u64) -> io::Result<()> {
        self.separator()?;
        writeln!(self.out, "ECS Job Started: {}", job_name)?;
        writeln!(self.out, "Start Time: {}", start_time)?;
        writeln!(self.out, "Process Count: {}", process_count)?;
        self.separator()
    }

    pub fn item_started(&mut self, item_id: u64, process_count: u64) -> io::Result<()> {
        writeln!(self.out, "Processing item {}/{}...", item_id, process_count)?;
        // Progress lines should show up immediately when tailing task logs
        self.out.flush()
    }

    pub fn item_completed(&mut self, item_id: u64) -> io::Result<()> {
        writeln!(self.out, "  -> Item {} completed", item_id)?;
        self.out.flush()
    }

    pub fn summary_block(&mut self, totals: &SummaryTotals, end_time: &str) -> io::Result<()> {
        writeln!(self.out)?;
        self.separator()?;
        writeln!(self.out, "Job Summary:")?;
        writeln!(self.out, "  Total Items: {}", totals.total_items)?;
        writeln!(self.out, "  Successful: {}", totals.successful)?;
        writeln!(self.out, "  Failed: {}", totals.failed)?;
        writeln!(self.out, "  End Time: {}", end_time)?;
        self.separator()
    }

    /// Print the `Results JSON:` header followed by an already rendered summary
    pub fn results_json(&mut self, json: &str) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Results JSON:")?;
        writeln!(self.out, "{}", json)?;
        self.out.flush()
    }
}
