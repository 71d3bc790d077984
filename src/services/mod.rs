pub mod auth_service;
pub mod brand_service;
pub mod measurement_service;
pub mod recommendation_service;
pub mod tryon_service;
pub mod user_service;
