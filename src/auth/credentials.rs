//! The username and password that every request must present.

use std::fmt::Debug;

use subtle::ConstantTimeEq;

use crate::Error;

/// The one username and password pair that is allowed to use the API.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Create the credential pair that requests are checked against.
    ///
    /// # Errors
    ///
    /// Returns [Error::EmptyCredentials] if either `username` or `password` is empty.
    pub fn new(username: &str, password: &str) -> Result<Self, Error> {
        if username.is_empty() || password.is_empty() {
            return Err(Error::EmptyCredentials);
        }

        Ok(Self {
            username: username.to_owned(),
            password: password.to_owned(),
        })
    }

    /// Check a supplied username and password in constant time.
    ///
    /// Both fields are always compared so that the response time does not
    /// reveal which of the two was wrong.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let username_matches = self.username.as_bytes().ct_eq(username.as_bytes());
        let password_matches = self.password.as_bytes().ct_eq(password.as_bytes());

        (username_matches & password_matches).into()
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}
