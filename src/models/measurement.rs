use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body measurements in centimetres (weight in kilograms).
/// Stored in the `measurements` collection; a user may have many.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BodyMeasurements {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub chest: Option<f64>,
    #[serde(default)]
    pub waist: Option<f64>,
    #[serde(default)]
    pub hips: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub shoulder_width: Option<f64>,
    #[serde(default)]
    pub arm_length: Option<f64>,
    #[serde(default)]
    pub leg_length: Option<f64>,
    #[serde(deserialize_with = "super::timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
}

impl BodyMeasurements {
    /// Fixed measurement vector used until a real estimation pipeline exists.
    /// Does not depend on any uploaded image.
    pub fn placeholder(user_id: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            chest: Some(96.5),
            waist: Some(81.3),
            hips: Some(102.1),
            height: Some(175.0),
            weight: Some(70.0),
            shoulder_width: Some(42.0),
            arm_length: Some(61.0),
            leg_length: Some(84.0),
            created_at: Utc::now(),
        }
    }
}
