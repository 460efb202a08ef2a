//! # Query Parameter Parser
//!
//! Parses `GET /questions` query parameters into a [`QuestionQuery`].
//!
//! - `category`: exact category name; empty means no filter
//! - `random`: `"true"` selects random sampling, anything else a plain scan
//! - `limit`: positive integer; required when sampling

use std::collections::HashMap;

use crate::store::{QuestionQuery, Selection};

use super::errors::{RestError, RestResult};

/// Parse question list parameters
pub fn parse_question_query(params: &HashMap<String, String>) -> RestResult<QuestionQuery> {
    let category = params
        .get("category")
        .filter(|c| !c.is_empty())
        .cloned();
    let random = params.get("random").map(|v| v == "true").unwrap_or(false);
    let limit = match params.get("limit").filter(|v| !v.is_empty()) {
        Some(value) => Some(parse_limit(value)?),
        None => None,
    };

    let selection = match (random, limit) {
        (true, Some(n)) => Selection::Sample(n),
        (true, None) => {
            return Err(RestError::invalid_parameter(
                "limit",
                "random sampling requires a limit",
            ))
        }
        (false, Some(n)) => Selection::First(n),
        (false, None) => Selection::All,
    };

    Ok(QuestionQuery {
        category,
        selection,
    })
}

/// Parse a strictly positive limit
fn parse_limit(value: &str) -> RestResult<u64> {
    let limit: i64 = value.parse().map_err(|_| {
        RestError::invalid_parameter("limit", format!("{:?} is not an integer", value))
    })?;

    if limit <= 0 {
        return Err(RestError::invalid_parameter(
            "limit",
            format!("{} is not positive", limit),
        ));
    }

    Ok(limit as u64)
}
