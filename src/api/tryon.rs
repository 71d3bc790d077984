use crate::services::tryon_service::{self, TryOnResponse};
use actix_web::{web, HttpResponse};
use serde::Deserialize;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TryOnQuery {
    pub user_id: String,
    pub item_id: String,
    pub brand: String,
}

#[utoipa::path(
    post,
    path = "/api/virtual-tryon",
    tag = "Try-On",
    params(TryOnQuery),
    responses(
        (status = 200, description = "Placeholder preview", body = TryOnResponse),
        (status = 400, description = "Missing query parameter")
    )
)]
pub async fn virtual_tryon(query: web::Query<TryOnQuery>) -> HttpResponse {
    let TryOnQuery { user_id, item_id, brand } = query.into_inner();
    log::info!("🪞 POST /virtual-tryon - user: {}, item: {}, brand: {}", user_id, item_id, brand);

    HttpResponse::Ok().json(tryon_service::try_on(user_id, item_id, brand))
}
