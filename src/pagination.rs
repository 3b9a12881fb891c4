//! This modules defines the common functionality for paging through lists of records.

use serde::Deserialize;

/// The config for pagination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    /// The maximum number of records to return when the request does not specify a limit.
    pub default_limit: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self { default_limit: 100 }
    }
}

/// The `skip` and `limit` query parameters of a list request.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PaginationQuery {
    /// The number of records to skip.
    pub skip: Option<u64>,
    /// The maximum number of records to return.
    pub limit: Option<u64>,
}

/// A window into an insertion-ordered list of records, ready to be bound to
/// `LIMIT` and `OFFSET`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// The number of records to skip.
    pub offset: i64,
    /// The maximum number of records to return.
    pub limit: i64,
}

impl PaginationConfig {
    /// Fill in the parameters missing from `query` with the defaults.
    ///
    /// Values too large for SQLite's integer type are clamped.
    pub fn page(&self, query: PaginationQuery) -> Page {
        let to_sql_int = |value: u64| i64::try_from(value).unwrap_or(i64::MAX);

        Page {
            offset: to_sql_int(query.skip.unwrap_or(0)),
            limit: to_sql_int(query.limit.unwrap_or(self.default_limit)),
        }
    }
}
