pub mod memory;
pub mod mongo;

pub use memory::InMemoryStore;
pub use mongo::MongoDB;

use crate::models::{BodyMeasurements, Brand, ImageUpload, SizeRecommendation, User};
use crate::utils::StoreError;
use async_trait::async_trait;

pub const USERS: &str = "users";
pub const MEASUREMENTS: &str = "measurements";
pub const IMAGE_UPLOADS: &str = "image_uploads";
pub const BRANDS: &str = "brands";
pub const RECOMMENDATIONS: &str = "recommendations";

/// Storage operations used by the services.
///
/// `insert_user` must reject a second user with the same email atomically,
/// returning `StoreError::DuplicateKey`.
#[async_trait]
pub trait Repository: Send + Sync {
    async fn ping(&self) -> Result<(), StoreError>;

    async fn insert_user(&self, user: &User) -> Result<(), StoreError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
    async fn find_user_by_id(&self, id: &str) -> Result<Option<User>, StoreError>;

    async fn insert_measurements(&self, measurements: &BodyMeasurements) -> Result<(), StoreError>;
    async fn find_measurements(&self, user_id: &str) -> Result<Vec<BodyMeasurements>, StoreError>;

    async fn insert_image_upload(&self, upload: &ImageUpload) -> Result<(), StoreError>;

    async fn find_recommendations(&self, user_id: &str) -> Result<Vec<SizeRecommendation>, StoreError>;

    async fn insert_brands(&self, brands: &[Brand]) -> Result<(), StoreError>;
    async fn list_brands(&self) -> Result<Vec<Brand>, StoreError>;
    async fn find_brand(&self, id: &str) -> Result<Option<Brand>, StoreError>;
    async fn count_brands(&self) -> Result<u64, StoreError>;
}
