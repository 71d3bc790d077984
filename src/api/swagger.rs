use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FitSnap API",
        version = "1.0.0",
        description = "Backend for the FitSnap size and fit demo.\n\n**Authentication:** `POST /api/users/login` returns a JWT. Send it as a Bearer token to `/api/users/me`.\n\nMeasurements and recommendations are placeholder values until a real estimation pipeline is connected."
    ),
    paths(
        crate::api::health::health_check,
        crate::api::users::register,
        crate::api::users::login,
        crate::api::users::get_me,
        crate::api::users::get_user,
        crate::api::measurements::upload_images,
        crate::api::measurements::get_measurements,
        crate::api::recommendations::get_recommendations,
        crate::api::brands::list_brands,
        crate::api::brands::get_brand,
        crate::api::tryon::virtual_tryon,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::api::measurements::UploadForm,
            crate::services::user_service::RegisterRequest,
            crate::services::user_service::RegisterResponse,
            crate::services::user_service::LoginRequest,
            crate::services::user_service::LoginResponse,
            crate::services::measurement_service::UploadResponse,
            crate::services::tryon_service::TryOnResponse,
            crate::models::UserProfile,
            crate::models::UserSummary,
            crate::models::BodyMeasurements,
            crate::models::SizeRecommendation,
            crate::models::Brand,
        )
    ),
    tags(
        (name = "Health", description = "Service and database status."),
        (name = "Users", description = "Registration, login and profiles."),
        (name = "Measurements", description = "Body image upload and placeholder measurements."),
        (name = "Recommendations", description = "Size recommendations per brand and category."),
        (name = "Brands", description = "Brand catalog with size charts."),
        (name = "Try-On", description = "Virtual try-on preview (placeholder)."),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token returned by /api/users/login"))
                        .build(),
                ),
            );
        }
    }
}
