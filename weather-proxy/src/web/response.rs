//! Handler response type, CORS headers and the error taxonomy.

use std::collections::HashMap;

use axum::body::Body;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::{error, warn};

use crate::aviation::AviationError;

use super::dto::ErrorResponse;

/// Query-string parameters as received by a handler.
pub type QueryParams = HashMap<String, String>;

const JSON: &str = "application/json";
const TEXT: &str = "text/plain";

/// A fully shaped handler response.
#[derive(Debug, Clone)]
pub struct ProxyResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl ProxyResponse {
    /// 200 JSON response with the full CORS header set.
    ///
    /// `cache_control` becomes the `Cache-Control` header when present.
    pub fn json<T: Serialize + ?Sized>(
        value: &T,
        cache_control: Option<&'static str>,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            status: StatusCode::OK,
            headers: success_headers(JSON, cache_control),
            body: serde_json::to_string(value)?,
        })
    }

    /// 200 plain-text response, body passed through verbatim.
    pub fn text(body: String, cache_control: &'static str) -> Self {
        Self {
            status: StatusCode::OK,
            headers: success_headers(TEXT, Some(cache_control)),
            body,
        }
    }

    /// Empty 204 answer to a CORS preflight request.
    pub fn preflight() -> Self {
        let mut headers = cors_headers();
        headers.remove(header::CONTENT_TYPE);
        Self {
            status: StatusCode::NO_CONTENT,
            headers,
            body: String::new(),
        }
    }

    /// Header value as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

impl IntoResponse for ProxyResponse {
    fn into_response(self) -> Response {
        // An empty String body would get a text/plain content type.
        if self.body.is_empty() {
            return (self.status, self.headers, Body::empty()).into_response();
        }
        (self.status, self.headers, self.body).into_response()
    }
}

fn cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET,OPTIONS"),
    );
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(JSON));
    headers
}

fn success_headers(content_type: &'static str, cache_control: Option<&'static str>) -> HeaderMap {
    let mut headers = cors_headers();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    if let Some(value) = cache_control {
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(value));
    }
    headers
}

/// Failures a handler can report to the client.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Malformed or out-of-range parameters.
    #[error("{0}")]
    InvalidInput(String),

    /// Valid input, but nothing matched.
    #[error("{0}")]
    NotFound(String),

    /// The upstream API answered with an error status, mirrored to the client.
    #[error("{message}")]
    UpstreamHttp { status: u16, message: String },

    /// The upstream API could not be reached.
    #[error("{0}")]
    ServiceUnavailable(String),

    /// The upstream API returned something we could not parse.
    #[error("{0}")]
    UpstreamData(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::UpstreamHttp { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::UpstreamData(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Map a station API failure for a handler.
    ///
    /// `product` names what was being fetched ("METAR", "airport", ...) and
    /// `service` the upstream as the client should see it ("weather",
    /// "aviation").
    pub fn from_upstream(err: AviationError, product: &str, service: &str) -> Self {
        match err {
            AviationError::Status { status, reason } => ApiError::UpstreamHttp {
                status,
                message: format!("Failed to fetch {product} data: HTTP {status} {reason}"),
            },
            AviationError::Unreachable(e) => {
                ApiError::ServiceUnavailable(format!("Failed to connect to {service} service: {e}"))
            }
            AviationError::Json { .. } => {
                ApiError::UpstreamData(format!("Invalid response from {service} service"))
            }
            AviationError::Http(e) => ApiError::Internal(format!("Internal server error: {e}")),
        }
    }

    /// Shape the error as a JSON `{error}` response. Only the CORS origin
    /// header is set alongside the content type.
    pub fn into_proxy_response(self) -> ProxyResponse {
        let status = self.status();
        if status.is_client_error() {
            warn!(status = status.as_u16(), error = %self, "request rejected");
        } else {
            error!(status = status.as_u16(), error = %self, "request failed");
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        );
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(JSON));

        let body = serde_json::to_string(&ErrorResponse {
            error: self.to_string(),
        })
        .unwrap_or_else(|_| r#"{"error":"Internal server error"}"#.to_string());

        ProxyResponse {
            status,
            headers,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_success_headers() {
        let value = serde_json::json!({"a": 1});
        let resp = ProxyResponse::json(&value, Some("max-age=3600")).unwrap();
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.header("access-control-allow-origin"), Some("*"));
        assert_eq!(
            resp.header("access-control-allow-headers"),
            Some("Content-Type")
        );
        assert_eq!(
            resp.header("access-control-allow-methods"),
            Some("GET,OPTIONS")
        );
        assert_eq!(resp.header("content-type"), Some("application/json"));
        assert_eq!(resp.header("cache-control"), Some("max-age=3600"));
        assert_eq!(resp.body, r#"{"a":1}"#);
    }

    #[test]
    fn json_without_cache_control() {
        let resp = ProxyResponse::json(&Vec::<u8>::new(), None).unwrap();
        assert_eq!(resp.header("cache-control"), None);
        assert_eq!(resp.body, "[]");
    }

    #[test]
    fn text_success_headers() {
        let resp = ProxyResponse::text("KBOS 011254Z".to_string(), "max-age=300");
        assert_eq!(resp.header("content-type"), Some("text/plain"));
        assert_eq!(resp.header("cache-control"), Some("max-age=300"));
        assert_eq!(resp.body, "KBOS 011254Z");
    }

    #[test]
    fn preflight_is_empty_204() {
        let resp = ProxyResponse::preflight();
        assert_eq!(resp.status, StatusCode::NO_CONTENT);
        assert_eq!(
            resp.header("access-control-allow-methods"),
            Some("GET,OPTIONS")
        );
        assert_eq!(resp.header("content-type"), None);
        assert!(resp.body.is_empty());
    }

    #[test]
    fn error_statuses() {
        assert_eq!(
            ApiError::InvalidInput("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("x".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::UpstreamHttp {
                status: 429,
                message: "x".into()
            }
            .status(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            ApiError::ServiceUnavailable("x".into()).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::UpstreamData("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Internal("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn error_response_shape() {
        let resp = ApiError::NotFound("Airport KZZZ not found in FAA database".into())
            .into_proxy_response();
        assert_eq!(resp.status, StatusCode::NOT_FOUND);
        assert_eq!(resp.header("access-control-allow-origin"), Some("*"));
        assert_eq!(resp.header("content-type"), Some("application/json"));
        assert_eq!(resp.header("access-control-allow-methods"), None);
        assert_eq!(resp.header("cache-control"), None);
        assert_eq!(
            resp.body,
            r#"{"error":"Airport KZZZ not found in FAA database"}"#
        );
    }

    #[test]
    fn upstream_status_mapping() {
        let err = ApiError::from_upstream(
            AviationError::Status {
                status: 404,
                reason: "Not Found".into(),
            },
            "METAR",
            "weather",
        );
        assert_eq!(
            err,
            ApiError::UpstreamHttp {
                status: 404,
                message: "Failed to fetch METAR data: HTTP 404 Not Found".into()
            }
        );
    }

    #[test]
    fn upstream_json_mapping() {
        let err = ApiError::from_upstream(
            AviationError::Json {
                message: "bad".into(),
                body: None,
            },
            "airport",
            "aviation",
        );
        assert_eq!(
            err,
            ApiError::UpstreamData("Invalid response from aviation service".into())
        );
    }
}
