// handlers/public/token.rs - POST /token handler
//
// Form-encoded `username` and `password`; answers with a bearer token.

use serde::Deserialize;

use crate::auth::{Token, TokenSettings};
use crate::database::DatabaseManager;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, Form};
use crate::services::usuarios;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

pub async fn token_post(Form(form): Form<LoginForm>) -> ApiResult<Token> {
    let pool = DatabaseManager::pool()?;
    let user = usuarios::authenticate_user(&pool, &form.username, &form.password)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Failed login for '{}'", form.username);
            ApiError::unauthorized("Usuario o contraseña incorrectos")
        })?;

    let settings = TokenSettings::from_config()?;
    let access_token = settings.create_access_token(&user.username, Some(settings.login_expiry()))?;
    tracing::info!("Issued access token for '{}'", user.username);

    Ok(ApiResponse::success(Token::bearer(access_token, user.username)))
}
