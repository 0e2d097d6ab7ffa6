//! Query-string parsing for the recommendation endpoint.
//!
//! Each of `north`, `east`, `south`, `west` must be a base-10 integer.
//! Every parameter is attempted even after an earlier one fails, so the
//! caller sees the complete list of failures.

use std::num::ParseIntError;

use thiserror::Error;

use crate::advisor::DirectionalCounts;

/// Query parameters read by the endpoint, in table order.
pub const COUNT_PARAMS: [&str; 4] = ["north", "east", "south", "west"];

/// A query parameter that could not be turned into a count.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("missing query parameter '{param}'")]
    Missing { param: &'static str },

    #[error("query parameter '{param}' is not an integer: '{value}'")]
    InvalidInteger {
        param: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl QueryError {
    pub fn param(&self) -> &'static str {
        match self {
            QueryError::Missing { param } | QueryError::InvalidInteger { param, .. } => *param,
        }
    }
}

/// First value of `name` in a raw query string, percent-decoded.
pub fn first_value(query: &str, name: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

pub fn parse_param(query: &str, param: &'static str) -> Result<i64, QueryError> {
    let value = first_value(query, param).ok_or(QueryError::Missing { param })?;
    value
        .parse::<i64>()
        .map_err(|source| QueryError::InvalidInteger {
            param,
            value,
            source,
        })
}

/// Parse all four counts, collecting every failure.
pub fn parse_counts(query: Option<&str>) -> Result<DirectionalCounts, Vec<QueryError>> {
    let query = query.unwrap_or_default();
    let mut values = [0i64; 4];
    let mut errors = Vec::new();

    for (slot, param) in values.iter_mut().zip(COUNT_PARAMS) {
        match parse_param(query, param) {
            Ok(value) => *slot = value,
            Err(e) => errors.push(e),
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let [north, east, south, west] = values;
    Ok(DirectionalCounts::new(north, east, south, west))
}
