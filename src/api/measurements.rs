use crate::config::Config;
use crate::database::Repository;
use crate::models::BodyMeasurements;
use crate::services::measurement_service::{self, UploadResponse};
use crate::utils::AppError;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use futures::StreamExt;
use serde::Deserialize;

const FRONT_IMAGE: &str = "front_image";
const SIDE_IMAGE: &str = "side_image";

fn default_user_id() -> String {
    "demo-user".to_string()
}

/// OpenAPI description of the multipart body.
#[derive(utoipa::ToSchema)]
#[allow(dead_code)]
pub struct UploadForm {
    #[schema(value_type = String, format = Binary)]
    front_image: Vec<u8>,
    #[schema(value_type = String, format = Binary)]
    side_image: Vec<u8>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UploadQuery {
    /// Owner of the upload
    #[serde(default = "default_user_id")]
    pub user_id: String,
}

/// Reads the two image fields, enforcing a cap on the total bytes read.
async fn read_images(mut payload: Multipart, limit: usize) -> Result<(Vec<u8>, Vec<u8>), AppError> {
    let mut front = None;
    let mut side = None;
    let mut total = 0usize;

    while let Some(field) = payload.next().await {
        let mut field = field.map_err(|e| AppError::BadRequest(format!("Invalid multipart payload: {}", e)))?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name())
            .map(str::to_string)
            .unwrap_or_default();

        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| AppError::BadRequest(format!("Invalid multipart payload: {}", e)))?;
            total += chunk.len();
            if total > limit {
                return Err(AppError::PayloadTooLarge(format!(
                    "Upload exceeds the {} byte limit",
                    limit
                )));
            }
            data.extend_from_slice(&chunk);
        }

        match name.as_str() {
            FRONT_IMAGE => front = Some(data),
            SIDE_IMAGE => side = Some(data),
            other => log::debug!("Ignoring multipart field '{}'", other),
        }
    }

    let front = front.ok_or_else(|| AppError::BadRequest(format!("{} is required", FRONT_IMAGE)))?;
    let side = side.ok_or_else(|| AppError::BadRequest(format!("{} is required", SIDE_IMAGE)))?;
    Ok((front, side))
}

#[utoipa::path(
    post,
    path = "/api/measurements/upload",
    tag = "Measurements",
    params(UploadQuery),
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Images stored, placeholder measurements returned", body = UploadResponse),
        (status = 400, description = "Missing image field"),
        (status = 413, description = "Upload too large")
    )
)]
pub async fn upload_images(
    repo: web::Data<dyn Repository>,
    config: web::Data<Config>,
    query: web::Query<UploadQuery>,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    log::info!("📤 POST /measurements/upload - user: {}", query.user_id);

    let (front, side) = read_images(payload, config.max_upload_bytes).await?;
    let response = measurement_service::upload_images(repo.get_ref(), &query.user_id, &front, &side).await?;

    log::info!("✅ Upload {} processed", response.upload_id);
    Ok(HttpResponse::Ok().json(response))
}

#[utoipa::path(
    get,
    path = "/api/measurements/{user_id}",
    tag = "Measurements",
    params(
        ("user_id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Stored measurements, or one placeholder record", body = [BodyMeasurements])
    )
)]
pub async fn get_measurements(
    repo: web::Data<dyn Repository>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    log::info!("📏 GET /measurements/{}", user_id);

    let measurements = measurement_service::get_measurements(repo.get_ref(), &user_id).await?;
    Ok(HttpResponse::Ok().json(measurements))
}
