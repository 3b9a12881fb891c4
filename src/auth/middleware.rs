//! Authentication middleware that checks the basic auth header on every request.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Basic};

use crate::{Error, auth::Credentials};

/// Middleware function that checks the request's basic auth header against the
/// configured [Credentials].
///
/// The request is executed normally if the credentials match, otherwise a 401
/// response with a `WWW-Authenticate: Basic` challenge is returned.
///
/// **Note**: No session is created, the credentials must be sent with every request.
pub async fn auth_guard(
    State(credentials): State<Credentials>,
    request: Request,
    next: Next,
) -> Response {
    let is_authorized = request
        .headers()
        .typed_get::<Authorization<Basic>>()
        .is_some_and(|Authorization(basic)| credentials.verify(basic.username(), basic.password()));

    if !is_authorized {
        tracing::warn!(
            "Rejected {} {} with missing or invalid credentials.",
            request.method(),
            request.uri().path()
        );
        return Error::InvalidCredentials.into_response();
    }

    next.run(request).await
}
