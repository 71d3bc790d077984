use crate::database::Repository;
use crate::models::SizeRecommendation;
use crate::services::recommendation_service;
use crate::utils::AppError;
use actix_web::{web, HttpResponse};

#[utoipa::path(
    get,
    path = "/api/recommendations/{user_id}",
    tag = "Recommendations",
    params(
        ("user_id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Stored recommendations, or placeholder guesses", body = [SizeRecommendation])
    )
)]
pub async fn get_recommendations(
    repo: web::Data<dyn Repository>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    log::info!("👕 GET /recommendations/{}", user_id);

    let recommendations = recommendation_service::get_recommendations(repo.get_ref(), &user_id).await?;
    Ok(HttpResponse::Ok().json(recommendations))
}
