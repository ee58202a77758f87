//! Search term resolution and result assembly

use serde::Serialize;

use crate::posting::{normalize_all, JobPosting, RawSearchResponse};
use crate::salary::group_digits;

/// Term searched for when the caller leaves it blank
pub const DEFAULT_SEARCH_TERM: &str = "software engineer";

/// Aggregate of one search call, serialized as the tool's structured content
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobSearchResult {
    pub search_term: String,
    pub total: u64,
    pub jobs: Vec<JobPosting>,
}

/// Trim the requested term, falling back to [`DEFAULT_SEARCH_TERM`] when blank
pub fn resolve_search_term(term: Option<&str>) -> String {
    term.map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_SEARCH_TERM)
        .to_string()
}

/// Build the search result from the provider response
///
/// Postings keep provider order. `total` is the provider's count, or the number of
/// postings actually returned when the provider reports none.
pub fn build_search_result(search_term: String, response: RawSearchResponse) -> JobSearchResult {
    let jobs = normalize_all(&response.results);
    let total = response
        .total
        .filter(|total| *total > 0)
        .unwrap_or(jobs.len() as u64);

    JobSearchResult {
        search_term,
        total,
        jobs,
    }
}

/// One-line description of a search result for the conversation transcript
pub fn summarize(result: &JobSearchResult) -> String {
    if result.jobs.is_empty() {
        format!(
            "No jobs found for '{}'. Try a broader search.",
            result.search_term
        )
    } else {
        format!(
            "Found {} jobs for '{}'. Showing top {} results.",
            group_digits(&result.total.to_string()),
            result.search_term,
            result.jobs.len()
        )
    }
}
