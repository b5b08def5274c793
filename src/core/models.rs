use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PollStatus {
    Success,
    Failure,
}

impl PollStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PollStatus::Success => "success",
            PollStatus::Failure => "failure",
        }
    }
}

/// Outcome record written once per invocation. Built fresh each run and
/// discarded after the write; the on-disk file is the only persisted state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollResult {
    pub timestamp: DateTime<Utc>,
    pub status: PollStatus,
    pub message: String,
}

impl PollResult {
    pub fn success(timestamp: DateTime<Utc>, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            status: PollStatus::Success,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PollStatus::Success).unwrap(),
            "\"success\""
        );
        assert_eq!(
            serde_json::to_string(&PollStatus::Failure).unwrap(),
            "\"failure\""
        );
    }

    #[test]
    fn test_status_as_str_matches_wire_format() {
        for status in [PollStatus::Success, PollStatus::Failure] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));

            let deserialized: PollStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(status, deserialized);
        }
    }

    #[test]
    fn test_poll_result_has_exactly_three_fields() {
        let result = PollResult::success(
            Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap(),
            "Poll completed successfully",
        );

        let json = serde_json::to_value(&result).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj.len(), 3);
        assert!(obj.contains_key("timestamp"));
        assert!(obj.contains_key("status"));
        assert!(obj.contains_key("message"));
    }

    #[test]
    fn test_timestamp_serializes_utc_with_z_suffix() {
        let result = PollResult::success(
            Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap(),
            "Poll completed successfully",
        );

        let json = serde_json::to_value(&result).unwrap();
        let timestamp = json["timestamp"].as_str().unwrap();

        assert_eq!(timestamp, "2026-08-30T12:00:00Z");
    }
}
