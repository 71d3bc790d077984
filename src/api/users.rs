use crate::database::Repository;
use crate::models::UserProfile;
use crate::services::auth_service::{Claims, PasswordHasher, TokenService};
use crate::services::user_service::{self, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::utils::AppError;
use actix_web::{web, HttpResponse};

#[utoipa::path(
    post,
    path = "/api/users/register",
    tag = "Users",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered", body = RegisterResponse),
        (status = 400, description = "Missing fields or email already registered")
    )
)]
pub async fn register(
    repo: web::Data<dyn Repository>,
    hasher: web::Data<PasswordHasher>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let email = request.email.clone();
    log::info!("📝 POST /users/register - email: {}", email);

    match user_service::register(repo.get_ref(), &hasher, request).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => {
            log::warn!("❌ Registration failed: {} - {}", email, e);
            Err(e)
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/users/login",
    tag = "Users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    repo: web::Data<dyn Repository>,
    hasher: web::Data<PasswordHasher>,
    tokens: web::Data<TokenService>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let email = request.email.clone();
    log::info!("🔐 POST /users/login - email: {}", email);

    match user_service::login(repo.get_ref(), &hasher, &tokens, request).await {
        Ok(response) => {
            log::info!("✅ Login successful: {}", email);
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => {
            log::warn!("❌ Login failed: {} - {}", email, e);
            Err(e)
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = "Users",
    responses(
        (status = 200, description = "Profile of the token holder", body = UserProfile),
        (status = 401, description = "Missing, invalid or expired token")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_me(
    repo: web::Data<dyn Repository>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, AppError> {
    log::info!("👤 GET /users/me - user: {}", claims.sub);

    let profile = user_service::get_user(repo.get_ref(), &claims.sub).await?;
    Ok(HttpResponse::Ok().json(profile))
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    tag = "Users",
    params(
        ("user_id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Public profile", body = UserProfile),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    repo: web::Data<dyn Repository>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    log::info!("👤 GET /users/{}", user_id);

    let profile = user_service::get_user(repo.get_ref(), &user_id).await?;
    Ok(HttpResponse::Ok().json(profile))
}
