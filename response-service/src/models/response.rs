use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored prompt/generated-content pair.
///
/// `id` and `created_at` are assigned once at construction and never change;
/// updates only touch `prompt` and `content`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub prompt: String,
    pub content: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl ResponseRecord {
    pub fn new(prompt: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            prompt,
            content,
            // BSON datetimes carry millisecond precision; construct at that
            // precision so a stored record reads back identical.
            created_at: mongodb::bson::DateTime::now().to_chrono(),
        }
    }
}
