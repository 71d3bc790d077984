use crate::config::JwtSettings;
use crate::models::User;
use crate::utils::AppError;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// JWT Claims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // user id
    pub email: String,
    pub name: String,
    pub iat: usize,
    pub exp: usize,
    pub jti: String,
    pub aud: String,
    pub iss: String,
}

/// Signs and verifies access tokens. Built once from `JwtSettings`.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    settings: JwtSettings,
}

/// A freshly signed token and its lifetime in seconds.
pub struct IssuedToken {
    pub token: String,
    pub expires_in: i64,
}

impl TokenService {
    pub fn new(settings: JwtSettings) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[settings.audience.as_str()]);
        validation.set_issuer(&[settings.issuer.as_str()]);

        Self {
            encoding_key: EncodingKey::from_secret(settings.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(settings.secret.as_bytes()),
            validation,
            settings,
        }
    }

    pub fn issue(&self, user: &User) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let ttl = Duration::hours(self.settings.ttl_hours);

        let claims = Claims {
            sub: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            iat: now.timestamp() as usize,
            exp: (now + ttl).timestamp() as usize,
            jti: Uuid::new_v4().to_string(),
            aud: self.settings.audience.clone(),
            iss: self.settings.issuer.clone(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to generate token: {}", e)))?;

        Ok(IssuedToken {
            token,
            expires_in: ttl.num_seconds(),
        })
    }

    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                log::debug!("Token rejected: {}", e);
                AppError::Unauthorized("Invalid or expired token".to_string())
            })
    }
}

/// bcrypt hashing with a configurable cost.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
    /// Hash at the same cost, checked when there is no real hash to compare
    decoy_hash: String,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Result<Self, AppError> {
        let decoy_hash = bcrypt::hash(Uuid::new_v4().to_string(), cost)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
        Ok(Self { cost, decoy_hash })
    }

    /// Hashing is CPU-bound, so it runs off the async workers.
    pub async fn hash(&self, password: &str) -> Result<String, AppError> {
        let password = password.to_string();
        let cost = self.cost;
        actix_web::web::block(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AppError::Internal(format!("Hashing task failed: {}", e)))?
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
    }

    pub async fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let password = password.to_string();
        let hash = hash.to_string();
        actix_web::web::block(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| AppError::Internal(format!("Verification task failed: {}", e)))?
            .map_err(|e| AppError::Internal(format!("Password verification error: {}", e)))
    }

    /// Spends the same bcrypt work as `verify` and always fails, so unknown
    /// accounts answer in the same time as wrong passwords.
    pub async fn reject(&self, password: &str) -> Result<bool, AppError> {
        self.verify(password, &self.decoy_hash).await?;
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(secret: &str) -> JwtSettings {
        JwtSettings {
            secret: secret.to_string(),
            issuer: "fitsnap-service".to_string(),
            audience: "fitsnap-api".to_string(),
            ttl_hours: 1,
        }
    }

    fn user() -> User {
        User::new("sam@example.com".into(), "Sam".into(), "hash".into())
    }

    #[test]
    fn issued_token_verifies() {
        let tokens = TokenService::new(settings("secret"));
        let user = user();

        let issued = tokens.issue(&user).unwrap();
        assert_eq!(issued.expires_in, 3600);

        let claims = tokens.verify(&issued.token).unwrap();
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.email, "sam@example.com");
    }

    #[test]
    fn token_from_another_key_is_rejected() {
        let issued = TokenService::new(settings("one")).issue(&user()).unwrap();
        let err = TokenService::new(settings("two")).verify(&issued.token).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn token_for_another_audience_is_rejected() {
        let mut other = settings("secret");
        other.audience = "somebody-else".to_string();
        let issued = TokenService::new(other).issue(&user()).unwrap();

        assert!(TokenService::new(settings("secret")).verify(&issued.token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let tokens = TokenService::new(settings("secret"));
        let past = (Utc::now() - Duration::hours(2)).timestamp() as usize;
        let claims = Claims {
            sub: "u1".into(),
            email: "e@x.com".into(),
            name: "E".into(),
            iat: past,
            exp: past,
            jti: "j".into(),
            aud: "fitsnap-api".into(),
            iss: "fitsnap-service".into(),
        };
        let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(b"secret")).unwrap();

        assert!(tokens.verify(&token).is_err());
    }

    #[test]
    fn legacy_dummy_tokens_are_rejected() {
        let tokens = TokenService::new(settings("secret"));
        assert!(tokens.verify("dummy-token-1234").is_err());
    }

    #[actix_web::test]
    async fn password_hash_round_trip() {
        let hasher = PasswordHasher::new(4).unwrap();
        let hash = hasher.hash("SecurePass123!").await.unwrap();

        assert_ne!(hash, "SecurePass123!");
        assert!(hasher.verify("SecurePass123!", &hash).await.unwrap());
        assert!(!hasher.verify("wrong", &hash).await.unwrap());
    }

    #[actix_web::test]
    async fn rejection_runs_bcrypt_at_the_configured_cost() {
        let hasher = PasswordHasher::new(5).unwrap();

        assert!(hasher.decoy_hash.starts_with("$2b$05$"));
        assert!(!hasher.reject("SecurePass123!").await.unwrap());
    }
}
