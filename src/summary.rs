use chrono::Local;
use serde::{Deserialize, Serialize};

/// ISO-8601 format used for every timestamp the job prints
///
/// Local wall-clock time without an offset, microsecond precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Current local time formatted with [`TIMESTAMP_FORMAT`]
pub fn local_timestamp() -> String {
    Local::now()
        .naive_local()
        .format(TIMESTAMP_FORMAT)
        .to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Completed,
}

/// Outcome of a single simulated work item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemResult {
    /// 1-based position of the item within the job
    pub item_id: u64,
    pub status: ItemStatus,
    pub processed_at: String,
}

impl ItemResult {
    pub fn completed(item_id: u64) -> Self {
        Self {
            item_id,
            status: ItemStatus::Completed,
            processed_at: local_timestamp(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Success,
    Failure,
}

/// Machine-readable record of a finished job, printed as the last block of output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSummary {
    pub job_name: String,
    pub status: JobStatus,
    pub results: Vec<ItemResult>,
}

impl JobSummary {
    pub fn success(job_name: impl Into<String>, results: Vec<ItemResult>) -> Self {
        Self {
            job_name: job_name.into(),
            status: JobStatus::Success,
            results,
        }
    }

    /// Render as JSON indented by two spaces
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn fixed_item(item_id: u64) -> ItemResult {
        ItemResult {
            item_id,
            status: ItemStatus::Completed,
            processed_at: format!("2024-05-01T12:00:0{}.000000", item_id),
        }
    }

    #[test]
    fn test_timestamp_is_iso8601() {
        let ts = local_timestamp();
        let parsed = NaiveDateTime::parse_from_str(&ts, TIMESTAMP_FORMAT);
        assert!(parsed.is_ok(), "unparseable timestamp: {}", ts);
        assert!(ts.contains('T'));
        // Microsecond precision, no offset suffix
        let fraction = ts.rsplit('.').next().unwrap();
        assert_eq!(fraction.len(), 6);
    }

    #[test]
    fn test_completed_item() {
        let item = ItemResult::completed(4);
        assert_eq!(item.item_id, 4);
        assert_eq!(item.status, ItemStatus::Completed);
        assert!(NaiveDateTime::parse_from_str(&item.processed_at, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_status_serialized_lowercase() {
        assert_eq!(
            serde_json::to_string(&ItemStatus::Completed).unwrap(),
            "\"completed\""
        );
        assert_eq!(
            serde_json::to_string(&JobStatus::Success).unwrap(),
            "\"success\""
        );
        assert_eq!(
            serde_json::to_string(&JobStatus::Failure).unwrap(),
            "\"failure\""
        );
    }

    #[test]
    fn test_pretty_json_layout() {
        let summary = JobSummary::success("nightly-etl", vec![fixed_item(1)]);
        let json = summary.to_pretty_json().unwrap();

        let expected = r#"{
  "job_name": "nightly-etl",
  "status": "success",
  "results": [
    {
      "item_id": 1,
      "status": "completed",
      "processed_at": "2024-05-01T12:00:01.000000"
    }
  ]
}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_empty_results_json() {
        let summary = JobSummary::success("sample-job", Vec::new());
        let value: serde_json::Value = serde_json::from_str(&summary.to_pretty_json().unwrap()).unwrap();
        assert_eq!(value["results"], serde_json::json!([]));
        assert_eq!(value["status"], "success");
    }

    #[test]
    fn test_reserialization_is_byte_identical() {
        let summary = JobSummary::success("repeat", (1..=3).map(fixed_item).collect());
        let first = summary.to_pretty_json().unwrap();
        let second = summary.to_pretty_json().unwrap();
        assert_eq!(first, second);

        let parsed: JobSummary = serde_json::from_str(&first).unwrap();
        assert_eq!(parsed, summary);
        assert_eq!(parsed.to_pretty_json().unwrap(), first);
    }
}
