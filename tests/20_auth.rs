mod common;

use anyhow::Result;
use reqwest::{header, StatusCode};
use serde_json::Value;

#[tokio::test]
async fn listing_without_token_is_rejected() -> Result<()> {
    let server = common::start_server().await?;

    let res = common::client().get(format!("{}/v2/distritos", server.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        res.headers().get(header::WWW_AUTHENTICATE).and_then(|v| v.to_str().ok()),
        Some("Bearer")
    );

    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], true);
    Ok(())
}

#[tokio::test]
async fn profile_without_token_is_rejected() -> Result<()> {
    let server = common::start_server().await?;

    let res = common::client().get(format!("{}/profile", server.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn garbage_token_is_rejected() -> Result<()> {
    let server = common::start_server().await?;

    let res = common::client()
        .get(format!("{}/v2/cit_citas", server.base_url))
        .bearer_auth("not.a.token")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Could not validate credentials");
    Ok(())
}

#[tokio::test]
async fn token_signed_with_another_key_is_rejected() -> Result<()> {
    let server = common::start_server().await?;
    let forged = citas_admin_api::auth::TokenSettings::new("some-other-key", "HS256", 30)?
        .create_access_token("admin@example.com", None)?;

    let res = common::client()
        .get(format!("{}/v2/oficinas", server.base_url))
        .bearer_auth(forged)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn valid_token_reaches_the_user_lookup() -> Result<()> {
    let server = common::start_server().await?;

    // The token passes; resolving its user needs the (unreachable) database
    let res = common::client()
        .get(format!("{}/v2/distritos", server.base_url))
        .bearer_auth(common::token_for("admin@example.com"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    Ok(())
}

#[tokio::test]
async fn login_without_database_is_unavailable() -> Result<()> {
    let server = common::start_server().await?;

    let res = common::client()
        .post(format!("{}/token", server.base_url))
        .form(&[("username", "admin@example.com"), ("password", "secreto")])
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    Ok(())
}
