use serde::Deserialize;
use serde_json::Value;

use super::{get_authenticated, ApiError};

/// The API reports the unread count as `{ "unread_count": n }`. The
/// field is kept loose here: a non-numeric value is tolerated and
/// surfaced as `None` so the poller keeps its previous badge.
#[derive(Debug, Deserialize)]
struct UnreadCountBody {
    #[serde(default)]
    unread_count: Value,
}

pub(crate) fn parse_unread(value: &Value) -> Option<u32> {
    value.as_u64().and_then(|n| u32::try_from(n).ok())
}

/// One poll cycle: fetch the unread count for the current session.
pub async fn unread_count() -> Result<Option<u32>, ApiError> {
    let body: UnreadCountBody = get_authenticated("/notification/count/").await?;
    Ok(parse_unread(&body.unread_count))
}

/// A single entry on the notifications page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub created_at: String,
    #[serde(default)]
    pub read: bool,
}

/// Fetch the notification list, newest first as the API returns them.
pub async fn list_notifications() -> Result<Vec<Notification>, ApiError> {
    log::trace!("Fetching notification list");
    get_authenticated("/notification/").await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_counts_are_accepted() {
        assert_eq!(parse_unread(&json!(0)), Some(0));
        assert_eq!(parse_unread(&json!(42)), Some(42));
    }

    #[test]
    fn non_numeric_counts_are_rejected() {
        assert_eq!(parse_unread(&json!("3")), None);
        assert_eq!(parse_unread(&json!(null)), None);
        assert_eq!(parse_unread(&json!(-1)), None);
        assert_eq!(parse_unread(&json!(2.5)), None);
    }

    #[test]
    fn missing_field_deserializes_to_none() {
        let body: UnreadCountBody = serde_json::from_str("{}").unwrap();
        assert_eq!(parse_unread(&body.unread_count), None);
    }
}
