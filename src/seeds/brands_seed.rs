use crate::database::Repository;
use crate::models::Brand;
use crate::utils::AppError;
use std::collections::BTreeMap;

fn size_chart(values: [&str; 5]) -> BTreeMap<String, String> {
    ["XS", "S", "M", "L", "XL"]
        .into_iter()
        .zip(values)
        .map(|(label, value)| (label.to_string(), value.to_string()))
        .collect()
}

fn brand(id: &str, name: &str, logo_url: &str, categories: &[&str], chart: [&str; 5]) -> Brand {
    Brand {
        id: id.to_string(),
        name: name.to_string(),
        logo_url: Some(logo_url.to_string()),
        size_chart: size_chart(chart),
        categories: categories.iter().map(|c| c.to_string()).collect(),
    }
}

/// The four default brands. Ids are fixed so they resolve across calls.
pub fn default_brands() -> Vec<Brand> {
    vec![
        brand(
            "brand-zara",
            "Zara",
            "https://via.placeholder.com/100x50/000000/FFFFFF?text=ZARA",
            &["Shirts", "Jeans", "Dresses", "Jackets"],
            ["34", "36", "38", "40", "42"],
        ),
        brand(
            "brand-hm",
            "H&M",
            "https://via.placeholder.com/100x50/E50000/FFFFFF?text=H%26M",
            &["T-Shirts", "Jeans", "Dresses", "Jackets"],
            ["32", "34", "36", "38", "40"],
        ),
        brand(
            "brand-nike",
            "Nike",
            "https://via.placeholder.com/100x50/000000/FFFFFF?text=NIKE",
            &["T-Shirts", "Shorts", "Athletic Wear"],
            ["XS", "S", "M", "L", "XL"],
        ),
        brand(
            "brand-adidas",
            "Adidas",
            "https://via.placeholder.com/100x50/000000/FFFFFF?text=ADIDAS",
            &["T-Shirts", "Shorts", "Athletic Wear"],
            ["XS", "S", "M", "L", "XL"],
        ),
    ]
}

/// Inserts the default catalog when the `brands` collection is empty.
/// Returns how many brands were inserted.
pub async fn seed_default_brands(repo: &dyn Repository) -> Result<usize, AppError> {
    let count = repo.count_brands().await?;
    if count > 0 {
        log::info!("🏷️  Brands: {} already in store — skipping seed", count);
        return Ok(0);
    }

    let brands = default_brands();
    repo.insert_brands(&brands).await?;
    log::info!("   ✅ Seeded {} default brands", brands.len());

    Ok(brands.len())
}
