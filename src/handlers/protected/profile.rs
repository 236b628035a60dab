// handlers/protected/profile.rs - GET /profile

use axum::extract::Extension;

use crate::auth::CurrentUser;
use crate::middleware::{ApiResponse, ApiResult};

/// The caller's own profile and permissions
pub async fn profile_get(Extension(user): Extension<CurrentUser>) -> ApiResult<CurrentUser> {
    Ok(ApiResponse::success(user))
}
