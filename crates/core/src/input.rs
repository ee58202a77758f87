//! Tool input parsing and validation
//!
//! Arguments of a `mycf-job-list` call are checked here before anything touches the
//! network. Unknown fields, wrong types and out-of-range pagination values all end up
//! as a [`ValidationError`] listing every offending field.

use std::fmt::Write;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::search::DEFAULT_SEARCH_TERM;

pub const DEFAULT_LIMIT: u32 = 20;
pub const MIN_LIMIT: u32 = 1;
pub const MAX_LIMIT: u32 = 50;
pub const DEFAULT_PAGE: u32 = 0;
pub const MAX_PAGE: u32 = 50;

/// Raw tool arguments, as sent by the client
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct JobSearchInput {
    #[serde(
        rename = "searchTerm",
        alias = "search_term",
        default = "default_search_term"
    )]
    pub search_term: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default = "default_page")]
    pub page: i64,
}

fn default_search_term() -> Option<String> {
    Some(DEFAULT_SEARCH_TERM.to_string())
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT.into()
}

fn default_page() -> i64 {
    DEFAULT_PAGE.into()
}

/// Validated search parameters
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    pub search_term: Option<String>,
    pub limit: u32,
    pub page: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            search_term: default_search_term(),
            limit: DEFAULT_LIMIT,
            page: DEFAULT_PAGE,
        }
    }
}

/// A single offending input field
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Input rejected before the search runs
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Input validation error: {}", describe(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

fn describe(errors: &[FieldError]) -> String {
    let mut out = String::new();
    for (i, error) in errors.iter().enumerate() {
        if i > 0 {
            out.push_str("; ");
        }
        let _ = write!(out, "{}: {}", error.field, error.message);
    }
    out
}

fn in_range(field: &str, value: i64, min: u32, max: u32) -> Result<u32, FieldError> {
    u32::try_from(value)
        .ok()
        .filter(|v| (min..=max).contains(v))
        .ok_or_else(|| {
            FieldError::new(
                field,
                format!("must be between {min} and {max}, got {value}"),
            )
        })
}

impl JobSearchInput {
    /// Check pagination bounds, collecting every violation
    pub fn validate(self) -> Result<SearchParams, ValidationError> {
        let limit = in_range("limit", self.limit, MIN_LIMIT, MAX_LIMIT);
        let page = in_range("page", self.page, 0, MAX_PAGE);

        match (limit, page) {
            (Ok(limit), Ok(page)) => Ok(SearchParams {
                search_term: self.search_term,
                limit,
                page,
            }),
            (limit, page) => Err(ValidationError {
                errors: [limit.err(), page.err()].into_iter().flatten().collect(),
            }),
        }
    }
}

/// Parse and validate the `arguments` of a tool call
///
/// Missing or `null` arguments mean "use every default". Anything else must be a
/// JSON object.
pub fn parse_job_search_input(arguments: Option<Value>) -> Result<SearchParams, ValidationError> {
    let arguments = match arguments {
        None | Some(Value::Null) => Value::Object(Default::default()),
        Some(value @ Value::Object(_)) => value,
        Some(_) => {
            return Err(ValidationError {
                errors: vec![FieldError::new("arguments", "expected an object")],
            })
        }
    };

    let input: JobSearchInput = serde_json::from_value(arguments).map_err(|e| ValidationError {
        errors: vec![FieldError::new("arguments", e.to_string())],
    })?;

    input.validate()
}

/// JSON Schema advertised for the tool's input
pub fn input_schema() -> Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "searchTerm": {
                "type": "string",
                "description": format!(
                    "Phrase to search for on MyCareersFuture (default: '{DEFAULT_SEARCH_TERM}')."
                ),
                "default": DEFAULT_SEARCH_TERM
            },
            "limit": {
                "type": "integer",
                "description": format!("Maximum number of results to fetch ({MIN_LIMIT}-{MAX_LIMIT})."),
                "minimum": MIN_LIMIT,
                "maximum": MAX_LIMIT,
                "default": DEFAULT_LIMIT
            },
            "page": {
                "type": "integer",
                "description": "Zero-based page of results to request.",
                "minimum": 0,
                "maximum": MAX_PAGE,
                "default": DEFAULT_PAGE
            }
        },
        "additionalProperties": false
    })
}
