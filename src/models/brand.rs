use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Clothing brand with its size chart (`brands` collection).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Brand {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    /// Generic size label (XS..XL) to the brand's own size
    #[serde(default)]
    pub size_chart: BTreeMap<String, String>,
    #[serde(default)]
    pub categories: Vec<String>,
}
