use serde::Deserialize;
use serde_json::Value;

use super::{post_authenticated, ApiError};

/// Aggregate dashboard payload. All three sections are required; a
/// response missing any of them is a parse error, which the page treats
/// the same as an invalid session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardData {
    pub stats: Vec<StatCard>,
    pub progress: CaseProgress,
    pub activity: Vec<ActivityItem>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatCard {
    pub label: String,
    /// The server mixes numbers and strings here; rendered verbatim.
    pub value: Value,
}

impl StatCard {
    pub fn display_value(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CaseProgress {
    pub steps: Vec<String>,
    #[serde(rename = "currentStepIndex", default)]
    pub current_step_index: usize,
}

impl CaseProgress {
    /// Completion as a percentage of steps, clamped to the step count.
    pub fn percent_complete(&self) -> u32 {
        if self.steps.is_empty() {
            return 0;
        }
        let done = (self.current_step_index + 1).min(self.steps.len());
        (done * 100 / self.steps.len()) as u32
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActivityItem {
    #[serde(default)]
    pub icon: String,
    pub message: String,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub time: String,
}

/// One aggregate-data request per dashboard mount.
pub async fn fetch_dashboard() -> Result<DashboardData, ApiError> {
    log::trace!("Fetching dashboard data");
    let result = post_authenticated::<DashboardData>("/auth/dashboard/").await;
    if let Err(ref e) = result {
        log::error!("Failed to fetch dashboard data: {}", e);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "stats": [
            {"label": "cases", "value": 4},
            {"label": "recovered", "value": "$1,200"}
        ],
        "progress": {"steps": ["Submitted", "Review", "Resolved"], "currentStepIndex": 1},
        "activity": [
            {"icon": "📄", "message": "Case opened", "detail": "C-1001", "time": "2h ago"}
        ]
    }"#;

    #[test]
    fn full_payload_parses() {
        let data: DashboardData = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(data.stats.len(), 2);
        assert_eq!(data.stats[0].display_value(), "4");
        assert_eq!(data.stats[1].display_value(), "$1,200");
        assert_eq!(data.progress.current_step_index, 1);
        assert_eq!(data.activity[0].detail.as_deref(), Some("C-1001"));
    }

    #[test]
    fn missing_section_is_a_parse_error() {
        let without_progress = r#"{"stats": [], "activity": []}"#;
        assert!(serde_json::from_str::<DashboardData>(without_progress).is_err());
    }

    #[test]
    fn progress_percent_is_clamped() {
        let progress = CaseProgress {
            steps: vec!["a".into(), "b".into()],
            current_step_index: 9,
        };
        assert_eq!(progress.percent_complete(), 100);

        let empty = CaseProgress {
            steps: vec![],
            current_step_index: 0,
        };
        assert_eq!(empty.percent_complete(), 0);

        let first = CaseProgress {
            steps: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            current_step_index: 0,
        };
        assert_eq!(first.percent_complete(), 25);
    }
}
