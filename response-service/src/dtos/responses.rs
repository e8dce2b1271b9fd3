use crate::models::ResponseRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    pub prompt: Option<String>,
    pub content: Option<String>,
}

/// Wire representation of a stored response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResponseData {
    pub id: String,
    pub prompt: String,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl From<ResponseRecord> for ResponseData {
    fn from(record: ResponseRecord) -> Self {
        Self {
            id: record.id,
            prompt: record.prompt,
            content: record.content,
            created_at: record.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateResponseBody {
    pub message: String,
    pub data: ResponseData,
}

#[derive(Debug, Serialize)]
pub struct ListResponsesBody {
    pub data: Vec<ResponseData>,
}

#[derive(Debug, Serialize)]
pub struct GetResponseBody {
    pub data: ResponseData,
}

#[derive(Debug, Serialize)]
pub struct UpdateResponseBody {
    pub message: String,
    pub data: ResponseData,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponseBody {
    pub message: String,
}
