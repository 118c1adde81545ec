use crate::{
    database::UserStore,
    models::{User, UserPayload},
    utils::AppError,
};
use uuid::Uuid;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 20;
pub const BIOGRAPHY_MIN_CHARS: usize = 20;
pub const BIOGRAPHY_MAX_CHARS: usize = 450;

/// Lengths are counted in Unicode code points, not bytes.
fn check_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(AppError::Validation(format!(
            "{} must be between {} and {} characters",
            field, min, max
        )));
    }
    Ok(())
}

/// Valida um payload de criação/atualização. A primeira regra que falhar vence.
pub fn validate_user(payload: &UserPayload) -> Result<(), AppError> {
    check_length("first_name", &payload.first_name, NAME_MIN_CHARS, NAME_MAX_CHARS)?;
    check_length("last_name", &payload.last_name, NAME_MIN_CHARS, NAME_MAX_CHARS)?;
    check_length("biography", &payload.biography, BIOGRAPHY_MIN_CHARS, BIOGRAPHY_MAX_CHARS)?;
    Ok(())
}

/// A malformed identifier is reported exactly like an absent one.
pub fn parse_user_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound)
}

pub async fn create_user(store: &UserStore, payload: UserPayload) -> Result<User, AppError> {
    validate_user(&payload)?;
    Ok(store.insert(payload).await)
}

pub async fn update_user(store: &UserStore, id: Uuid, payload: UserPayload) -> Result<User, AppError> {
    validate_user(&payload)?;
    store.update(id, payload).await
}
