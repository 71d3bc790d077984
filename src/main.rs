mod api;
mod config;
mod database;
mod middleware;
mod models;
mod seeds;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{
    middleware::{Compress, Logger},
    web, App, HttpServer,
};
use database::{InMemoryStore, MongoDB, Repository};
use dotenv::dotenv;
use services::auth_service::{PasswordHasher, TokenService};
use std::io;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn build_cors(allowed_origins: &[String]) -> Cors {
    if allowed_origins.is_empty() {
        return Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);
    }

    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .supports_credentials()
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = config::Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    log::info!("🚀 Starting FitSnap Service...");

    let repo: Arc<dyn Repository> = if config.uses_memory_store() {
        log::warn!("⚠️  Using the in-memory store, data is lost on restart");
        Arc::new(InMemoryStore::new())
    } else {
        let db = MongoDB::new(&config.database_url)
            .await
            .map_err(|e| io::Error::other(format!("Failed to connect to MongoDB: {}", e)))?;
        log::info!("✅ MongoDB connected successfully");
        Arc::new(db)
    };

    if config.seed_brands {
        log::info!("🌱 Seeding default brands...");
        if let Err(e) = seeds::brands_seed::seed_default_brands(repo.as_ref()).await {
            log::error!("❌ Failed to seed default brands: {}", e);
        }
    }

    let repo_data = web::Data::from(repo);
    let hasher = PasswordHasher::new(config.bcrypt_cost).map_err(|e| io::Error::other(e.to_string()))?;
    let hasher_data = web::Data::new(hasher);
    let tokens_data = web::Data::new(TokenService::new(config.jwt.clone()));
    let config_data = web::Data::new(config.clone());

    let (host, port) = (config.host.clone(), config.port);

    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);

    HttpServer::new(move || {
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(repo_data.clone())
            .app_data(hasher_data.clone())
            .app_data(tokens_data.clone())
            .app_data(config_data.clone())
            .wrap(build_cors(&config_data.cors_allowed_origins))
            .wrap(middleware::SecurityHeaders)
            .wrap(Compress::default())
            .wrap(Logger::default())
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
            .configure(api::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    #[actix_web::test]
    async fn responses_are_gzipped_when_accepted() {
        let repo: Arc<dyn Repository> = Arc::new(InMemoryStore::new());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(repo))
                .wrap(Compress::default())
                .configure(api::configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/brands")
            .insert_header((header::ACCEPT_ENCODING, "gzip"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        assert_eq!(resp.headers().get(header::CONTENT_ENCODING).unwrap(), "gzip");
    }
}
