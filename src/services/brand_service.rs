use crate::database::Repository;
use crate::models::Brand;
use crate::seeds::brands_seed::default_brands;
use crate::utils::AppError;

pub async fn list_brands(repo: &dyn Repository) -> Result<Vec<Brand>, AppError> {
    let brands = repo.list_brands().await?;
    if brands.is_empty() {
        log::debug!("No stored brands, serving the default catalog");
        return Ok(default_brands());
    }
    Ok(brands)
}

/// Looks the brand up in storage. While storage holds no brands the
/// default catalog answers instead, matching what `list_brands` returns.
pub async fn get_brand(repo: &dyn Repository, brand_id: &str) -> Result<Brand, AppError> {
    if let Some(brand) = repo.find_brand(brand_id).await? {
        return Ok(brand);
    }

    if repo.count_brands().await? == 0 {
        if let Some(brand) = default_brands().into_iter().find(|b| b.id == brand_id) {
            return Ok(brand);
        }
    }

    Err(AppError::NotFound("Brand not found".to_string()))
}
