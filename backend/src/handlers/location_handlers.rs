use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::Json as AxumJson,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::AppState;

/// Reported when the CDN header is missing, e.g. on a local dev server.
pub const INTERNATIONAL: &str = "INTL";

#[derive(Debug, Serialize)]
pub struct LocationResponse {
    pub country_code: String,
}

/// Echoes the country the hosting edge detected for this request.
pub async fn get_location(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<AxumJson<LocationResponse>, (StatusCode, AxumJson<Value>)> {
    let header_name = &state.config.country_header;

    let country_code = match headers.get(header_name) {
        Some(value) => value
            .to_str()
            .map_err(|e| {
                tracing::error!("Failed to read {} header: {}", header_name, e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    AxumJson(json!({"error": "Internal Server Error reading location header"})),
                )
            })?
            .trim()
            .to_string(),
        None => String::new(),
    };

    let country_code = if country_code.is_empty() {
        INTERNATIONAL.to_string()
    } else {
        country_code
    };

    tracing::info!(
        "Detected country code: {} (header present: {})",
        country_code,
        headers.contains_key(header_name)
    );

    Ok(AxumJson(LocationResponse { country_code }))
}

/// Fallback for OPTIONS when the router runs without its CORS layer. With
/// the layer in place, the layer answers every OPTIONS request itself.
pub async fn location_preflight() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, HeaderValue, Method, Request};
    use std::collections::HashMap;
    use tower::ServiceExt;

    fn state_with(pairs: &[(&str, &str)]) -> Arc<AppState> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let config = Config::from_lookup(|key| vars.get(key).cloned()).unwrap();
        Arc::new(AppState { config })
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn returns_country_from_cdn_header() {
        let app = crate::app(state_with(&[]));
        let request = Request::builder()
            .uri("/api/get-location")
            .header("x-vercel-ip-country", "EG")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"country_code": "EG"}));
    }

    #[tokio::test]
    async fn missing_header_reports_international() {
        let app = crate::app(state_with(&[]));
        let request = Request::builder()
            .uri("/api/get-location")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"country_code": "INTL"}));
    }

    #[tokio::test]
    async fn empty_header_reports_international() {
        let app = crate::app(state_with(&[]));
        let request = Request::builder()
            .uri("/api/get-location")
            .header("x-vercel-ip-country", "")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(body_json(response).await, json!({"country_code": "INTL"}));
    }

    #[tokio::test]
    async fn unreadable_header_is_an_internal_error() {
        let app = crate::app(state_with(&[]));
        let request = Request::builder()
            .uri("/api/get-location")
            .header("x-vercel-ip-country", HeaderValue::from_bytes(b"\xffEG").unwrap())
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Internal Server Error reading location header"})
        );
    }

    #[tokio::test]
    async fn custom_country_header_is_honored() {
        let app = crate::app(state_with(&[("COUNTRY_HEADER", "cf-ipcountry")]));
        let request = Request::builder()
            .uri("/api/get-location")
            .header("cf-ipcountry", "SA")
            .header("x-vercel-ip-country", "EG")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(body_json(response).await, json!({"country_code": "SA"}));
    }

    #[tokio::test]
    async fn plain_options_gets_empty_ok() {
        let app = crate::app(state_with(&[]));
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/get-location")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn preflight_route_answers_without_the_cors_layer() {
        let app = axum::Router::new()
            .route("/api/get-location", axum::routing::options(location_preflight));
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/get-location")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn permissive_cors_by_default() {
        let app = crate::app(state_with(&[]));
        let request = Request::builder()
            .uri("/api/get-location")
            .header(header::ORIGIN, "https://example.com")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn cors_restricted_to_configured_origin() {
        let origin = "https://dr-fares-rezq.vercel.app";
        let app = crate::app(state_with(&[("ALLOWED_ORIGIN", origin)]));

        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/get-location")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            origin
        );

        let request = Request::builder()
            .uri("/api/get-location")
            .header(header::ORIGIN, "https://elsewhere.example")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        // The configured origin is sent whoever asks; browsers reject the mismatch.
        let allowed = response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap();
        assert_eq!(allowed, origin);
        assert_ne!(allowed, "https://elsewhere.example");
    }

    #[tokio::test]
    async fn health_check_answers_ok() {
        let app = crate::app(state_with(&[]));
        let request = Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"OK");
    }
}
