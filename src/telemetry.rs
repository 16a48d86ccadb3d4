use tracing::trace;

/// Progress events recorded by the runner as items move through the job
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobEvent {
    /// Runner began work on an item
    ItemStarted { item_id: u64 },
    /// Item finished and its result was recorded
    ItemCompleted { item_id: u64, duration_ms: u64 },
}

/// Statistics aggregated from job events
#[derive(Debug, Default, Clone)]
pub struct ProgressStats {
    pub items_started: usize,
    pub items_completed: usize,
    /// Nothing in the job emits a failure event, so this stays zero
    pub items_failed: usize,
    pub item_durations_ms: Vec<u64>,
}

impl ProgressStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update stats with a job event
    pub fn update(&mut self, event: &JobEvent) {
        match event {
            JobEvent::ItemStarted { item_id } => {
                trace!(item_id, "Item started");
                self.items_started += 1;
            }
            JobEvent::ItemCompleted {
                item_id,
                duration_ms,
            } => {
                trace!(item_id, duration_ms, "Item completed");
                self.items_completed += 1;
                self.item_durations_ms.push(*duration_ms);
            }
        }
    }

    /// Calculate percentile from item durations
    pub fn percentile(&self, p: f64) -> Option<u64> {
        if self.item_durations_ms.is_empty() {
            return None;
        }

        let mut sorted = self.item_durations_ms.clone();
        sorted.sort_unstable();

        let index = ((p / 100.0) * sorted.len() as f64).ceil() as usize;
        let index = index.saturating_sub(1).min(sorted.len() - 1);

        Some(sorted[index])
    }

    /// Get p50, p90, p99 percentiles
    pub fn get_percentiles(&self) -> (Option<u64>, Option<u64>, Option<u64>) {
        (
            self.percentile(50.0),
            self.percentile(90.0),
            self.percentile(99.0),
        )
    }
}
