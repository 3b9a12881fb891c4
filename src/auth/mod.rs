//! HTTP Basic authentication against a single configured credential pair.

mod credentials;
mod middleware;

pub use credentials::Credentials;
pub use middleware::auth_guard;
