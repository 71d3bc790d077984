use serde::{Deserialize, Serialize};

const PREVIEW_URL: &str =
    "https://via.placeholder.com/400x600/1e1e2e/ffffff?text=Virtual+Try-On+Coming+Soon";

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TryOnResponse {
    pub message: String,
    pub user_id: String,
    pub item_id: String,
    pub brand: String,
    pub preview_url: String,
}

/// Echoes the request with a fixed preview image.
pub fn try_on(user_id: String, item_id: String, brand: String) -> TryOnResponse {
    TryOnResponse {
        message: "Virtual try-on feature coming soon!".to_string(),
        user_id,
        item_id,
        brand,
        preview_url: PREVIEW_URL.to_string(),
    }
}
