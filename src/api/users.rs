use actix_web::{web, HttpResponse};
use crate::database::UserStore;
use crate::models::{User, UserPayload};
use crate::services::user_service;
use crate::utils::{AppError, ErrorResponse};

/// Largest accepted request body, for POST and PUT alike.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Registers the `/api/users` routes and the body size policy.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
        .service(
            web::resource("/api/users")
                .route(web::post().to(create_user))
                .route(web::get().to(list_users))
                .route(web::head().to(list_users))
                .default_service(web::route().to(method_not_allowed)),
        )
        .service(
            web::resource("/api/users/{id}")
                .route(web::get().to(get_user))
                .route(web::head().to(get_user))
                .route(web::put().to(update_user))
                .route(web::delete().to(delete_user))
                .default_service(web::route().to(method_not_allowed)),
        );
}

/// Any body that cannot be read (too large, broken stream) or decoded is a 400
/// with a generic message. The Content-Type header is not enforced.
fn decode_payload(body: Result<web::Bytes, actix_web::Error>) -> Result<UserPayload, AppError> {
    let body = body.map_err(|e| AppError::InvalidPayload(e.to_string()))?;
    UserPayload::from_json(&body).map_err(|e| AppError::InvalidPayload(e.to_string()))
}

async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(ErrorResponse::new("Method not allowed"))
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Invalid JSON payload or validation failure", body = ErrorResponse)
    )
)]
pub async fn create_user(
    store: web::Data<UserStore>,
    body: Result<web::Bytes, actix_web::Error>,
) -> Result<HttpResponse, AppError> {
    log::info!("📝 POST /api/users");

    let payload = decode_payload(body)?;
    match user_service::create_user(&store, payload).await {
        Ok(user) => {
            log::info!("✅ User created: {}", user.id);
            Ok(HttpResponse::Created().json(user))
        }
        Err(e) => {
            log::warn!("❌ Create user failed: {}", e);
            Err(e)
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users, in no particular order", body = [User])
    )
)]
pub async fn list_users(store: web::Data<UserStore>) -> HttpResponse {
    let users = store.find_all().await;
    log::info!("📋 GET /api/users - {} users", users.len());
    HttpResponse::Ok().json(users)
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User identifier (UUID)")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "Malformed identifier or no such user", body = ErrorResponse)
    )
)]
pub async fn get_user(
    store: web::Data<UserStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let raw_id = path.into_inner();
    log::info!("🔍 GET /api/users/{}", raw_id);

    let id = user_service::parse_user_id(&raw_id)?;
    let user = store.find_by_id(id).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// The identifier is checked before the body, so a bad id always wins with 404.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User identifier (UUID)")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Invalid JSON payload or validation failure", body = ErrorResponse),
        (status = 404, description = "Malformed identifier or no such user", body = ErrorResponse)
    )
)]
pub async fn update_user(
    store: web::Data<UserStore>,
    path: web::Path<String>,
    body: Result<web::Bytes, actix_web::Error>,
) -> Result<HttpResponse, AppError> {
    let raw_id = path.into_inner();
    log::info!("✏️  PUT /api/users/{}", raw_id);

    let id = user_service::parse_user_id(&raw_id)?;
    let payload = decode_payload(body)?;

    match user_service::update_user(&store, id, payload).await {
        Ok(user) => {
            log::info!("✅ User updated: {}", user.id);
            Ok(HttpResponse::Ok().json(user))
        }
        Err(e) => {
            log::warn!("❌ Update user {} failed: {}", id, e);
            Err(e)
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User identifier (UUID)")),
    responses(
        (status = 200, description = "Deleted user", body = User),
        (status = 404, description = "Malformed identifier or no such user", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    store: web::Data<UserStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let raw_id = path.into_inner();
    log::info!("🗑️  DELETE /api/users/{}", raw_id);

    let id = user_service::parse_user_id(&raw_id)?;
    let user = store.delete(id).await?;
    log::info!("✅ User deleted: {}", user.id);
    Ok(HttpResponse::Ok().json(user))
}
