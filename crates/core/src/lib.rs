//! Core library for mycf
//!
//! This crate implements the **Functional Core** of the mycf application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The mycf project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`mycf_core`** (this crate): Pure transformation functions with zero I/O
//! - **`mycf`**: HTTP calls, the MCP server, and the CLI (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`salary`]: Salary range rendering
//! - [`posting`]: Raw MyCareersFuture search items and their normalized [`posting::JobPosting`]
//! - [`search`]: Search term resolution, result assembly and the tool summary line
//! - [`input`]: Tool input parsing, range validation and the JSON input schema
//! - [`widget`]: Identifiers and metadata of the job list widget
//! - [`lenient`]: Deserializers that turn malformed provider data into absent values
//!
//! # Example Usage
//!
//! ```rust
//! use mycf_core::posting::RawSearchResponse;
//! use mycf_core::search::build_search_result;
//!
//! let response: RawSearchResponse = serde_json::from_value(serde_json::json!({
//!     "results": [{ "title": "Data Engineer" }],
//!     "total": 42
//! }))
//! .unwrap();
//!
//! let result = build_search_result("data".to_string(), response);
//!
//! assert_eq!(result.total, 42);
//! assert_eq!(result.jobs[0].title, "Data Engineer");
//! assert_eq!(result.jobs[0].id, "0");
//! ```

pub mod input;
pub mod lenient;
pub mod posting;
pub mod salary;
pub mod search;
pub mod widget;
