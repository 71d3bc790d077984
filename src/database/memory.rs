use super::Repository;
use crate::models::{BodyMeasurements, Brand, ImageUpload, SizeRecommendation, User};
use crate::utils::StoreError;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Collections {
    users: Vec<User>,
    measurements: Vec<BodyMeasurements>,
    image_uploads: Vec<ImageUpload>,
    recommendations: Vec<SizeRecommendation>,
    /// Insertion order is kept so listings are stable
    brands: Vec<Brand>,
    brand_index: HashMap<String, usize>,
}

/// Process-local repository. Selected with `MONGO_URL=memory` and used by tests.
#[derive(Default)]
pub struct InMemoryStore {
    inner: RwLock<Collections>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn insert_recommendation(&self, recommendation: SizeRecommendation) {
        self.inner.write().await.recommendations.push(recommendation);
    }

    #[cfg(test)]
    pub async fn image_upload_count(&self) -> usize {
        self.inner.read().await.image_uploads.len()
    }
}

#[async_trait]
impl Repository for InMemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn insert_user(&self, user: &User) -> Result<(), StoreError> {
        // Check and insert under the same write lock
        let mut inner = self.inner.write().await;
        if inner.users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::DuplicateKey(format!("users.email {}", user.email)));
        }
        if inner.users.iter().any(|u| u.id == user.id) {
            return Err(StoreError::DuplicateKey(format!("users.id {}", user.id)));
        }
        inner.users.push(user.clone());
        Ok(())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.id == id).cloned())
    }

    async fn insert_measurements(&self, measurements: &BodyMeasurements) -> Result<(), StoreError> {
        self.inner.write().await.measurements.push(measurements.clone());
        Ok(())
    }

    async fn find_measurements(&self, user_id: &str) -> Result<Vec<BodyMeasurements>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .measurements
            .iter()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn insert_image_upload(&self, upload: &ImageUpload) -> Result<(), StoreError> {
        self.inner.write().await.image_uploads.push(upload.clone());
        Ok(())
    }

    async fn find_recommendations(&self, user_id: &str) -> Result<Vec<SizeRecommendation>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .recommendations
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn insert_brands(&self, brands: &[Brand]) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        if let Some(dup) = brands.iter().find(|b| inner.brand_index.contains_key(&b.id)) {
            return Err(StoreError::DuplicateKey(format!("brands.id {}", dup.id)));
        }
        for brand in brands {
            let position = inner.brands.len();
            inner.brand_index.insert(brand.id.clone(), position);
            inner.brands.push(brand.clone());
        }
        Ok(())
    }

    async fn list_brands(&self) -> Result<Vec<Brand>, StoreError> {
        Ok(self.inner.read().await.brands.clone())
    }

    async fn find_brand(&self, id: &str) -> Result<Option<Brand>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.brand_index.get(id).map(|&i| inner.brands[i].clone()))
    }

    async fn count_brands(&self) -> Result<u64, StoreError> {
        Ok(self.inner.read().await.brands.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn user(email: &str) -> User {
        User::new(email.to_string(), "Test".to_string(), "hash".to_string())
    }

    #[actix_web::test]
    async fn duplicate_email_is_rejected() {
        let store = InMemoryStore::new();
        store.insert_user(&user("a@x.com")).await.unwrap();

        let err = store.insert_user(&user("a@x.com")).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateKey(_)));

        // Case-sensitive match
        store.insert_user(&user("A@x.com")).await.unwrap();
    }

    #[actix_web::test]
    async fn concurrent_registrations_admit_exactly_one() {
        let store = Arc::new(InMemoryStore::new());

        let attempts = (0..16).map(|_| {
            let store = Arc::clone(&store);
            async move { store.insert_user(&user("race@x.com")).await.is_ok() }
        });
        let results = futures::future::join_all(attempts).await;

        assert_eq!(results.into_iter().filter(|ok| *ok).count(), 1);
    }

    #[actix_web::test]
    async fn brands_keep_insertion_order_and_unique_ids() {
        let store = InMemoryStore::new();
        let brand = |id: &str| Brand {
            id: id.to_string(),
            name: id.to_uppercase(),
            logo_url: None,
            size_chart: Default::default(),
            categories: vec![],
        };

        store.insert_brands(&[brand("b"), brand("a")]).await.unwrap();
        assert!(store.insert_brands(&[brand("a")]).await.is_err());

        let ids: Vec<_> = store.list_brands().await.unwrap().into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(store.find_brand("a").await.unwrap().unwrap().name, "A");
        assert_eq!(store.count_brands().await.unwrap(), 2);
    }
}
