use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Suggested size for a user at a given brand and category
/// (`recommendations` collection).
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SizeRecommendation {
    pub id: String,
    pub user_id: String,
    pub brand: String,
    pub category: String,
    pub recommended_size: String,
    /// Always within [0, 1]
    pub confidence: f64,
    #[serde(deserialize_with = "super::timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
}

impl SizeRecommendation {
    pub fn new(user_id: &str, brand: &str, category: &str, recommended_size: &str, confidence: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            brand: brand.to_string(),
            category: category.to_string(),
            recommended_size: recommended_size.to_string(),
            confidence: clamp_confidence(confidence),
            created_at: Utc::now(),
        }
    }

    /// Brings a stored record back into the valid confidence range.
    pub fn normalized(mut self) -> Self {
        let clamped = clamp_confidence(self.confidence);
        if clamped != self.confidence {
            log::warn!(
                "⚠️  Recommendation {} had confidence {} outside [0, 1], clamped to {}",
                self.id, self.confidence, clamped
            );
            self.confidence = clamped;
        }
        self
    }
}

fn clamp_confidence(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_is_clamped_on_creation() {
        assert_eq!(SizeRecommendation::new("u", "Zara", "Shirts", "M", 1.7).confidence, 1.0);
        assert_eq!(SizeRecommendation::new("u", "Zara", "Shirts", "M", -0.2).confidence, 0.0);
        assert_eq!(SizeRecommendation::new("u", "Zara", "Shirts", "M", 0.5).confidence, 0.5);
    }

    #[test]
    fn normalized_repairs_stored_records() {
        let mut rec = SizeRecommendation::new("u", "Nike", "T-Shirts", "L", 0.8);
        rec.confidence = f64::NAN;
        assert_eq!(rec.normalized().confidence, 0.0);
    }
}
