use axum::{extract::Request, middleware::Next, response::Response};

use super::auth::AuthUser;
use crate::database::DatabaseManager;
use crate::error::ApiError;
use crate::services::usuarios;

/// Resolves the token subject to an active user with its permissions.
/// Must run after [`super::jwt_auth_middleware`].
pub async fn current_user_middleware(mut request: Request, next: Next) -> Result<Response, ApiError> {
    let auth_user = request
        .extensions()
        .get::<AuthUser>()
        .cloned()
        .ok_or_else(ApiError::invalid_credentials)?;

    let pool = DatabaseManager::pool()?;
    let user = usuarios::find_user(&pool, &auth_user.username).await?.ok_or_else(|| {
        tracing::warn!("Token subject '{}' is not a known user", auth_user.username);
        ApiError::invalid_credentials()
    })?;

    if user.disabled {
        tracing::warn!("Inactive user '{}' presented a valid token", user.username);
        return Err(ApiError::unauthorized("Unauthorized (usuario inactivo)"));
    }

    tracing::debug!("Authenticated '{}'", user.username);
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
