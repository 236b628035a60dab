use axum::{
    extract::Request,
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::auth::{Claims, TokenSettings};
use crate::error::ApiError;

/// Authenticated identity extracted from the bearer token
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub username: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self { username: claims.sub }
    }
}

/// Bearer authentication middleware: validates the token and stores the caller in the request
pub async fn jwt_auth_middleware(headers: HeaderMap, mut request: Request, next: Next) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&headers).map_err(|reason| {
        tracing::warn!("Rejected request: {}", reason);
        ApiError::invalid_credentials()
    })?;

    let claims = TokenSettings::from_config()?.decode_token(token)?;

    request.extensions_mut().insert(AuthUser::from(claims));
    Ok(next.run(request).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header
fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, &'static str> {
    let auth_str = headers
        .get(header::AUTHORIZATION)
        .ok_or("missing Authorization header")?
        .to_str()
        .map_err(|_| "invalid Authorization header format")?;

    let (scheme, token) = auth_str.split_once(' ').ok_or("Authorization header must use Bearer token format")?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err("Authorization header must use Bearer token format");
    }
    let token = token.trim();
    if token.is_empty() {
        return Err("empty bearer token");
    }
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn extracts_bearer_token() {
        assert_eq!(extract_bearer_token(&headers("Bearer abc.def.ghi")), Ok("abc.def.ghi"));
        assert_eq!(extract_bearer_token(&headers("bearer abc")), Ok("abc"));
    }

    #[test]
    fn rejects_other_schemes_and_empty_tokens() {
        assert!(extract_bearer_token(&HeaderMap::new()).is_err());
        assert!(extract_bearer_token(&headers("Basic dXNlcjpwYXNz")).is_err());
        assert!(extract_bearer_token(&headers("Bearer   ")).is_err());
        assert!(extract_bearer_token(&headers("Bearer")).is_err());
    }
}
