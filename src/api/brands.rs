use crate::database::Repository;
use crate::models::Brand;
use crate::services::brand_service;
use crate::utils::AppError;
use actix_web::{web, HttpResponse};

#[utoipa::path(
    get,
    path = "/api/brands",
    tag = "Brands",
    responses(
        (status = 200, description = "All brands", body = [Brand])
    )
)]
pub async fn list_brands(repo: web::Data<dyn Repository>) -> Result<HttpResponse, AppError> {
    let brands = brand_service::list_brands(repo.get_ref()).await?;
    log::info!("🏷️  GET /brands - {} brands", brands.len());
    Ok(HttpResponse::Ok().json(brands))
}

#[utoipa::path(
    get,
    path = "/api/brands/{brand_id}",
    tag = "Brands",
    params(
        ("brand_id" = String, Path, description = "Brand id")
    ),
    responses(
        (status = 200, description = "Brand details", body = Brand),
        (status = 404, description = "Brand not found")
    )
)]
pub async fn get_brand(
    repo: web::Data<dyn Repository>,
    brand_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    log::info!("🏷️  GET /brands/{}", brand_id);

    let brand = brand_service::get_brand(repo.get_ref(), &brand_id).await?;
    Ok(HttpResponse::Ok().json(brand))
}
