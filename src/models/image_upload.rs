use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Processing,
}

/// Audit record of an uploaded image pair (`image_uploads` collection).
/// Images are kept base64-encoded; the record is never read back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageUpload {
    pub id: String,
    pub user_id: String,
    pub front_image: String,
    pub side_image: String,
    pub status: UploadStatus,
    #[serde(deserialize_with = "super::timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
}

impl ImageUpload {
    pub fn new(user_id: &str, front_image: String, side_image: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            front_image,
            side_image,
            status: UploadStatus::Processing,
            created_at: Utc::now(),
        }
    }
}
