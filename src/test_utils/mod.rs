#![allow(missing_docs)]

pub(crate) mod db;
pub(crate) mod http;

pub(crate) use db::{get_test_connection, get_test_db_connection};
pub(crate) use http::{basic_auth_header, parse_json};
