use axum::extract::{FromRequest, FromRequestParts};

use crate::error::ApiError;

/// Query string extractor whose rejection is a JSON `ApiError`
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct Query<T>(pub T);

/// Path extractor whose rejection is a JSON `ApiError`
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct Path<T>(pub T);

/// Form body extractor whose rejection is a JSON `ApiError`
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Form), rejection(ApiError))]
pub struct Form<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        routing::{get, post},
        Router,
    };
    use chrono::NaiveDate;
    use serde::Deserialize;
    use serde_json::Value;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct FechaParams {
        fecha: NaiveDate,
    }

    #[derive(Deserialize)]
    struct Credentials {
        #[allow(dead_code)]
        username: String,
        #[allow(dead_code)]
        password: String,
    }

    fn router() -> Router {
        Router::new()
            .route("/fecha", get(|Query(p): Query<FechaParams>| async move { p.fecha.to_string() }))
            .route("/items/:id", get(|Path(id): Path<i64>| async move { id.to_string() }))
            .route("/login", post(|Form(_): Form<Credentials>| async { "ok" }))
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn bad_query_value_is_json_422() {
        let response = router()
            .oneshot(Request::get("/fecha?fecha=bad").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json_body(response).await;
        assert_eq!(body["error"], true);
        assert_eq!(body["code"], "UNPROCESSABLE_ENTITY");
        assert!(body["field_errors"]["query"].is_string());
    }

    #[tokio::test]
    async fn good_query_value_passes_through() {
        let response = router()
            .oneshot(Request::get("/fecha?fecha=2024-03-01").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn non_numeric_id_is_json_422() {
        let response = router()
            .oneshot(Request::get("/items/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json_body(response).await;
        assert_eq!(body["message"], "Invalid path parameters");
    }

    #[tokio::test]
    async fn missing_form_field_is_json_422() {
        let request = Request::post("/login")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("username=a"))
            .unwrap();
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json_body(response).await;
        assert_eq!(body["error"], true);
        assert_eq!(body["message"], "Invalid form data");
    }
}
