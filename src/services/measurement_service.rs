use crate::database::Repository;
use crate::models::{BodyMeasurements, ImageUpload};
use crate::utils::AppError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UploadResponse {
    pub message: String,
    pub upload_id: String,
    pub measurements: BodyMeasurements,
}

/// Stores both images as an audit record and returns the placeholder
/// measurements. Image content has no influence on the result.
pub async fn upload_images(
    repo: &dyn Repository,
    user_id: &str,
    front_image: &[u8],
    side_image: &[u8],
) -> Result<UploadResponse, AppError> {
    let upload = ImageUpload::new(user_id, STANDARD.encode(front_image), STANDARD.encode(side_image));
    repo.insert_image_upload(&upload).await?;

    log::info!(
        "📷 Stored upload {} for user {} ({} + {} bytes)",
        upload.id,
        user_id,
        front_image.len(),
        side_image.len()
    );

    let measurements = BodyMeasurements::placeholder(user_id);
    repo.insert_measurements(&measurements).await?;

    Ok(UploadResponse {
        message: "Images uploaded and processed successfully".to_string(),
        upload_id: upload.id,
        measurements,
    })
}

/// Stored measurements for the user, or a single unsaved placeholder.
pub async fn get_measurements(
    repo: &dyn Repository,
    user_id: &str,
) -> Result<Vec<BodyMeasurements>, AppError> {
    let stored = repo.find_measurements(user_id).await?;
    if stored.is_empty() {
        return Ok(vec![BodyMeasurements::placeholder(user_id)]);
    }
    Ok(stored)
}
