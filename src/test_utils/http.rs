use axum::{
    body::Body,
    http::{HeaderMap, HeaderValue, header::AUTHORIZATION},
    response::Response,
};
use axum_extra::headers::{Authorization, HeaderMapExt};
use serde::de::DeserializeOwned;

/// Read the body of `response` and deserialize it as JSON.
pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Could not read response body");

    serde_json::from_slice(&body).expect("Could not parse response body as JSON")
}

/// The value of an `Authorization` header for `username` and `password`.
pub(crate) fn basic_auth_header(username: &str, password: &str) -> HeaderValue {
    let mut headers = HeaderMap::new();
    headers.typed_insert(Authorization::basic(username, password));

    headers
        .remove(AUTHORIZATION)
        .expect("Authorization header missing")
}
