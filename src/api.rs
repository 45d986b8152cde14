use std::any::Any;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use http::header::{
    HeaderName, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE,
};
use http::{HeaderValue, Method, StatusCode, Uri};
use log::{debug, error};
use sayit::{Category, MessageOptions};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Invalid request URL")]
    InvalidUrl,
    #[error("Invalid type: {0}")]
    UnknownCategory(String),
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                json!({ "error": self.to_string() }),
            ),
            ApiError::InvalidUrl => (
                StatusCode::BAD_REQUEST,
                json!({ "error": self.to_string() }),
            ),
            ApiError::UnknownCategory(_) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": self.to_string(),
                    "availableTypes": sayit::list_categories(),
                }),
            ),
            ApiError::Internal(message) => {
                error!("{self}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error", "message": message }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

#[derive(Serialize)]
struct Endpoints {
    #[serde(rename = "/")]
    root: &'static str,
    #[serde(rename = "/:type")]
    by_type: &'static str,
    #[serde(rename = "/all")]
    all: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IndexResponse {
    message: &'static str,
    available_types: Vec<Category>,
    endpoints: Endpoints,
}

#[derive(Serialize)]
struct AllTypesResponse {
    types: Vec<Category>,
}

async fn index() -> Json<IndexResponse> {
    debug!("index()");
    Json(IndexResponse {
        message: "Say Something API",
        available_types: sayit::list_categories(),
        endpoints: Endpoints {
            root: "List all available types",
            by_type: "Get a random response of the specified type",
            all: "Get all available types",
        },
    })
}

async fn all_types() -> Json<AllTypesResponse> {
    debug!("all_types()");
    Json(AllTypesResponse {
        types: sayit::list_categories(),
    })
}

/// Handles `/{category}` and every other unrouted path. The candidate is the
/// raw path without its leading slash, so `/no/` or `/thank%2Dyou` are not valid.
async fn category_message(uri: Uri) -> Result<Response, ApiError> {
    let candidate = uri.path().strip_prefix('/').unwrap_or(uri.path());
    message_response(candidate, uri.query())
}

/// True when the first `format` query parameter is `json`.
fn wants_json(query: Option<&str>) -> Result<bool, ApiError> {
    let pairs: Vec<(String, String)> =
        serde_urlencoded::from_str(query.unwrap_or_default()).map_err(|e| {
            debug!("Rejected query {query:?}: {e}");
            ApiError::InvalidUrl
        })?;
    Ok(pairs
        .iter()
        .find(|(key, _)| key == "format")
        .is_some_and(|(_, value)| value == "json"))
}

fn message_response(candidate: &str, query: Option<&str>) -> Result<Response, ApiError> {
    debug!("message({candidate:?}, {query:?})");
    if !sayit::is_valid_category(candidate) {
        return Err(ApiError::UnknownCategory(candidate.to_string()));
    }
    let json = wants_json(query)?;
    let said = sayit::get_message_with_meta(MessageOptions::for_category(candidate))
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    if json {
        Ok(Json(said).into_response())
    } else {
        Ok(([(CONTENT_TYPE, TEXT_PLAIN)], said.message).into_response())
    }
}

/// Answers preflight requests and rejects everything that is not a GET.
async fn allow_get_only(request: Request, next: Next) -> Response {
    let method = request.method();
    if method == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else if method == Method::GET {
        next.run(request).await
    } else {
        debug!("{method} {} rejected", request.uri());
        ApiError::MethodNotAllowed.into_response()
    }
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown error".to_string()
    };
    ApiError::Internal(message).into_response()
}

fn cors_header(name: HeaderName, value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(name, HeaderValue::from_static(value))
}

fn with_layers(routes: Router) -> Router {
    routes
        .layer(middleware::from_fn(allow_get_only))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors_header(ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .layer(cors_header(ACCESS_CONTROL_ALLOW_METHODS, "GET, OPTIONS"))
        .layer(cors_header(ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
}

pub fn router() -> Router {
    with_layers(
        Router::new()
            .route("/", get(index))
            .route("/all", get(all_types))
            .route("/{category}", get(category_message))
            .fallback(category_message),
    )
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use anyhow::Result;

    use super::*;

    async fn serve(app: Router) -> Result<SocketAddr> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move { axum::serve(listener, app).await });
        Ok(addr)
    }

    #[test]
    fn query_format() {
        assert!(!wants_json(None).unwrap());
        assert!(!wants_json(Some("")).unwrap());
        assert!(!wants_json(Some("format=text")).unwrap());
        assert!(!wants_json(Some("format=JSON")).unwrap());
        assert!(wants_json(Some("format=json")).unwrap());
        assert!(wants_json(Some("x=1&format=json")).unwrap());
        assert!(wants_json(Some("format=json&format=text")).unwrap());
        assert!(wants_json(Some("format=json&format=json")).unwrap());
        assert!(!wants_json(Some("format=text&format=json")).unwrap());
    }

    #[test]
    fn category_checked_before_query() {
        assert!(matches!(
            message_response("nope", Some("format=a&format=b")),
            Err(ApiError::UnknownCategory(c)) if c == "nope"
        ));
        let response = message_response("no", Some("format=json&format=json")).unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("application/json"));
    }

    #[test]
    fn percent_encoded_category_is_not_decoded() {
        assert!(matches!(
            message_response("thank%2Dyou", None),
            Err(ApiError::UnknownCategory(c)) if c == "thank%2Dyou"
        ));
        assert!(message_response("thank-you", None).is_ok());
    }

    #[test]
    fn error_statuses() {
        assert_eq!(
            ApiError::MethodNotAllowed.into_response().status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::InvalidUrl.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::UnknownCategory("x".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal("x".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn panic_payload_becomes_message() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let response = panic_response(Box::new(String::from("boom")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn panicking_handler_returns_500() -> Result<()> {
        async fn explode() -> &'static str {
            panic!("handler exploded")
        }
        let app = with_layers(Router::new().route("/boom", get(explode)));
        let addr = serve(app).await?;

        let response = reqwest::get(format!("http://{addr}/boom")).await?;
        assert_eq!(response.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
        let body: serde_json::Value = serde_json::from_str(&response.text().await?)?;
        assert_eq!(body["error"], "Internal server error");
        assert_eq!(body["message"], "handler exploded");
        Ok(())
    }
}
