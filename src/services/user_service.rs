use crate::database::Repository;
use crate::models::{User, UserProfile, UserSummary};
use crate::services::auth_service::{PasswordHasher, TokenService};
use crate::utils::{AppError, StoreError};
use serde::{Deserialize, Serialize};

const EMAIL_TAKEN: &str = "Email already registered";
const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: String,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserSummary,
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl RegisterRequest {
    fn validate(&self) -> Result<(), AppError> {
        if self.email.trim().is_empty() || self.name.trim().is_empty() || self.password.is_empty() {
            return Err(AppError::BadRequest("email, name and password are required".to_string()));
        }
        if !self.email.contains('@') {
            return Err(AppError::BadRequest("Invalid email address".to_string()));
        }
        Ok(())
    }
}

pub async fn register(
    repo: &dyn Repository,
    hasher: &PasswordHasher,
    request: RegisterRequest,
) -> Result<RegisterResponse, AppError> {
    request.validate()?;

    // Fast path; the unique index still decides under concurrent inserts
    if repo.find_user_by_email(&request.email).await?.is_some() {
        return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
    }

    let password_hash = hasher.hash(&request.password).await?;
    let user = User::new(request.email, request.name, password_hash);

    repo.insert_user(&user).await.map_err(|e| match e {
        StoreError::DuplicateKey(_) => AppError::Conflict(EMAIL_TAKEN.to_string()),
        other => other.into(),
    })?;

    log::info!("✅ User registered successfully: {} ({})", user.email, user.id);

    Ok(RegisterResponse {
        message: "User registered successfully".to_string(),
        user_id: user.id,
    })
}

pub async fn login(
    repo: &dyn Repository,
    hasher: &PasswordHasher,
    tokens: &TokenService,
    request: LoginRequest,
) -> Result<LoginResponse, AppError> {
    let user = repo.find_user_by_email(&request.email).await?;

    let password_matches = match user.as_ref().and_then(|u| u.password_hash.as_deref()) {
        Some(hash) => hasher.verify(&request.password, hash).await?,
        None => {
            if let Some(user) = &user {
                log::warn!("⚠️  Login refused for {}: account has no password hash", user.id);
            }
            hasher.reject(&request.password).await?
        }
    };

    let user = match user {
        Some(user) if password_matches => user,
        _ => return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string())),
    };

    let issued = tokens.issue(&user)?;

    Ok(LoginResponse {
        message: "Login successful".to_string(),
        user: UserSummary::from(&user),
        token: issued.token,
        token_type: "Bearer".to_string(),
        expires_in: issued.expires_in,
    })
}

pub async fn get_user(repo: &dyn Repository, user_id: &str) -> Result<UserProfile, AppError> {
    repo.find_user_by_id(user_id)
        .await?
        .map(UserProfile::from)
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::InMemoryStore;
    use crate::models::{BodyMeasurements, Brand, ImageUpload, SizeRecommendation};
    use async_trait::async_trait;
    use std::sync::Arc;

    /// Store whose email lookup never sees existing users, as when a
    /// concurrent registration commits between the pre-check and the insert.
    #[derive(Default)]
    struct StaleEmailLookup {
        inner: InMemoryStore,
    }

    #[async_trait]
    impl Repository for StaleEmailLookup {
        async fn ping(&self) -> Result<(), StoreError> {
            self.inner.ping().await
        }
        async fn insert_user(&self, user: &User) -> Result<(), StoreError> {
            self.inner.insert_user(user).await
        }
        async fn find_user_by_email(&self, _email: &str) -> Result<Option<User>, StoreError> {
            Ok(None)
        }
        async fn find_user_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
            self.inner.find_user_by_id(id).await
        }
        async fn insert_measurements(&self, measurements: &BodyMeasurements) -> Result<(), StoreError> {
            self.inner.insert_measurements(measurements).await
        }
        async fn find_measurements(&self, user_id: &str) -> Result<Vec<BodyMeasurements>, StoreError> {
            self.inner.find_measurements(user_id).await
        }
        async fn insert_image_upload(&self, upload: &ImageUpload) -> Result<(), StoreError> {
            self.inner.insert_image_upload(upload).await
        }
        async fn find_recommendations(&self, user_id: &str) -> Result<Vec<SizeRecommendation>, StoreError> {
            self.inner.find_recommendations(user_id).await
        }
        async fn insert_brands(&self, brands: &[Brand]) -> Result<(), StoreError> {
            self.inner.insert_brands(brands).await
        }
        async fn list_brands(&self) -> Result<Vec<Brand>, StoreError> {
            self.inner.list_brands().await
        }
        async fn find_brand(&self, id: &str) -> Result<Option<Brand>, StoreError> {
            self.inner.find_brand(id).await
        }
        async fn count_brands(&self) -> Result<u64, StoreError> {
            self.inner.count_brands().await
        }
    }

    fn request(email: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            name: "Sarah Johnson".to_string(),
            password: "SecurePass123!".to_string(),
        }
    }

    fn assert_email_taken(result: Result<RegisterResponse, AppError>) {
        match result {
            Err(AppError::Conflict(detail)) => assert_eq!(detail, "Email already registered"),
            other => panic!("expected a conflict, got {:?}", other.map(|r| r.user_id)),
        }
    }

    #[actix_web::test]
    async fn duplicate_insert_after_a_clean_precheck_conflicts() {
        let store = StaleEmailLookup::default();
        let hasher = PasswordHasher::new(4).unwrap();

        register(&store, &hasher, request("race@x.com")).await.unwrap();
        assert_email_taken(register(&store, &hasher, request("race@x.com")).await);
    }

    #[actix_web::test]
    async fn concurrent_registrations_admit_exactly_one() {
        let store = Arc::new(InMemoryStore::new());
        let hasher = PasswordHasher::new(4).unwrap();

        let attempts = (0..8).map(|_| {
            let store = Arc::clone(&store);
            let hasher = hasher.clone();
            async move { register(&*store, &hasher, request("race@x.com")).await }
        });
        let results = futures::future::join_all(attempts).await;

        let (admitted, refused): (Vec<_>, Vec<_>) = results.into_iter().partition(Result::is_ok);
        assert_eq!(admitted.len(), 1);
        assert_eq!(refused.len(), 7);
        refused.into_iter().for_each(assert_email_taken);
    }

    #[actix_web::test]
    async fn account_without_a_hash_cannot_log_in() {
        let store = InMemoryStore::new();
        let hasher = PasswordHasher::new(4).unwrap();
        let tokens = TokenService::new(crate::config::JwtSettings {
            secret: "secret".to_string(),
            issuer: "fitsnap-service".to_string(),
            audience: "fitsnap-api".to_string(),
            ttl_hours: 1,
        });

        let mut legacy = User::new("old@x.com".to_string(), "Old".to_string(), String::new());
        legacy.password_hash = None;
        store.insert_user(&legacy).await.unwrap();

        for email in ["old@x.com", "nobody@x.com"] {
            let login_request = LoginRequest {
                email: email.to_string(),
                password: "anything".to_string(),
            };
            match login(&store, &hasher, &tokens, login_request).await {
                Err(AppError::Unauthorized(detail)) => assert_eq!(detail, "Invalid credentials"),
                Err(other) => panic!("expected unauthorized, got {:?}", other),
                Ok(_) => panic!("login should have been refused for {}", email),
            }
        }
    }
}
