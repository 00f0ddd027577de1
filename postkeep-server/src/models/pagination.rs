//! Pagination parameters for the list query

use serde::Deserialize;

use super::ValidationError;

/// Maximum rows a single request may return
const MAX_LIMIT: i64 = 100;

/// Default rows per request
const DEFAULT_LIMIT: i64 = 10;

/// Validated skip/limit window
#[derive(Debug, Clone, Copy)]
pub struct Page {
    /// Rows to skip from the start of the result set (passes through
    /// unmodified)
    pub skip: i64,
    /// Maximum rows to return, capped at 100
    pub limit: i64,
}

/// Raw query-string parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl Page {
    /// Resolve raw parameters into a usable window.
    ///
    /// - `skip` defaults to 0
    /// - `limit` defaults to 10 and is silently capped at 100 (an
    ///   oversized limit is clamped, not rejected)
    /// - a negative value for either is a validation error
    pub fn resolve(params: PageParams) -> Result<Self, ValidationError> {
        let skip = params.skip.unwrap_or(0);
        if skip < 0 {
            return Err(ValidationError::Negative {
                field: "skip",
                value: skip,
            });
        }

        let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
        if limit < 0 {
            return Err(ValidationError::Negative {
                field: "limit",
                value: limit,
            });
        }

        Ok(Self {
            skip,
            limit: limit.min(MAX_LIMIT),
        })
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}
