pub mod brands;
pub mod health;
pub mod measurements;
pub mod recommendations;
pub mod swagger;
pub mod tryon;
pub mod users;


use crate::middleware::auth::AuthMiddleware;
use crate::utils::AppError;
use actix_web::{error, web, HttpRequest};

fn json_error(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

fn query_error(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

fn path_error(err: error::PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

/// Registers every route. Shared by `main` and the HTTP tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::QueryConfig::default().error_handler(query_error))
        .app_data(web::PathConfig::default().error_handler(path_error))
        .route("/api/health", web::get().to(health::health_check))
        .service(
            web::scope("/api/users")
                .route("/register", web::post().to(users::register))
                .route("/login", web::post().to(users::login))
                // Must stay ahead of "/{user_id}"
                .service(
                    web::resource("/me")
                        .wrap(AuthMiddleware)
                        .route(web::get().to(users::get_me)),
                )
                .route("/{user_id}", web::get().to(users::get_user)),
        )
        .service(
            web::scope("/api/measurements")
                .route("/upload", web::post().to(measurements::upload_images))
                .route("/{user_id}", web::get().to(measurements::get_measurements)),
        )
        .route(
            "/api/recommendations/{user_id}",
            web::get().to(recommendations::get_recommendations),
        )
        .service(
            web::scope("/api/brands")
                .route("", web::get().to(brands::list_brands))
                .route("/{brand_id}", web::get().to(brands::get_brand)),
        )
        .route("/api/virtual-tryon", web::post().to(tryon::virtual_tryon));
}
