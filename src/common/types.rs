use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain model đại diện một phản hồi đã lưu trên server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub message: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Body gửi lên server khi tạo phản hồi mới.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFeedback {
    pub name: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_decodes_wire_field_names() {
        let json = r#"{
            "_id": "65f0c2",
            "name": "Ann",
            "message": "Great service",
            "createdAt": "2024-01-01T00:00:00Z"
        }"#;

        let entry: FeedbackEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, "65f0c2");
        assert_eq!(entry.name, "Ann");
        assert_eq!(entry.message, "Great service");
        assert_eq!(entry.created_at.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn new_feedback_encodes_only_name_and_message() {
        let draft = NewFeedback {
            name: "Ann".to_string(),
            message: "Great service".to_string(),
        };

        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "name": "Ann", "message": "Great service" })
        );
    }
}
