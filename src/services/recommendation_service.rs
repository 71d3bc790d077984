use crate::database::Repository;
use crate::models::SizeRecommendation;
use crate::utils::AppError;

fn placeholder_recommendations(user_id: &str) -> Vec<SizeRecommendation> {
    vec![
        SizeRecommendation::new(user_id, "Zara", "Shirts", "M", 0.92),
        SizeRecommendation::new(user_id, "H&M", "Jeans", "32", 0.88),
        SizeRecommendation::new(user_id, "Nike", "T-Shirts", "L", 0.85),
    ]
}

/// Stored recommendations, or three unsaved placeholder guesses.
pub async fn get_recommendations(
    repo: &dyn Repository,
    user_id: &str,
) -> Result<Vec<SizeRecommendation>, AppError> {
    let stored = repo.find_recommendations(user_id).await?;
    if stored.is_empty() {
        return Ok(placeholder_recommendations(user_id));
    }
    Ok(stored.into_iter().map(SizeRecommendation::normalized).collect())
}
