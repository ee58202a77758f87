use crate::search::{search_jobs, JobSearchProvider};
use mycf_core::input::parse_job_search_input;
use mycf_core::search::summarize;
use mycf_core::widget::{tool_meta, COMPONENT_URI, MIME_TYPE, TOOL_NAME, WIDGET_TITLE};

use super::{to_json, CallToolResult, Content, JsonRpcError, ResourceContents};

/// `mycf-job-list`: search, then return structured jobs, a summary and the widget
///
/// Bad input and provider failures come back as `isError` results so the model can
/// read them; only serialization problems become JSON-RPC errors.
pub async fn handle_job_list<P: JobSearchProvider + Sync>(
    arguments: Option<serde_json::Value>,
    provider: &P,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let params = match parse_job_search_input(arguments) {
        Ok(params) => params,
        Err(e) => {
            log::warn!("Validation error for tool {TOOL_NAME}: {e}");
            return to_json(CallToolResult::error(e.to_string()));
        }
    };

    log::info!(
        "Tool {TOOL_NAME} invoked with searchTerm={:?}, limit={}, page={}",
        params.search_term,
        params.limit,
        params.page
    );

    let result = match search_jobs(provider, &params).await {
        Ok(result) => result,
        Err(e) => {
            log::error!(
                "Tool {TOOL_NAME} failed to fetch jobs (term={:?}): {e}",
                params.search_term
            );
            return to_json(CallToolResult::error(format!(
                "Unable to fetch jobs from MyCareersFuture: {e}"
            )));
        }
    };

    log::info!(
        "Tool {TOOL_NAME} returning {} jobs (total_available={})",
        result.jobs.len(),
        result.total
    );

    let structured_content = to_json(&result)?;
    let component_html = crate::widget::load_component_html(&global.assets_dir);
    log::debug!(
        "Embedding component HTML in response ({} bytes)",
        component_html.len()
    );

    to_json(CallToolResult {
        content: vec![
            Content::Resource {
                resource: ResourceContents {
                    uri: COMPONENT_URI.to_string(),
                    mime_type: MIME_TYPE.to_string(),
                    text: component_html,
                    title: Some(WIDGET_TITLE.to_string()),
                    meta: None,
                },
            },
            Content::Text {
                text: summarize(&result),
            },
        ],
        structured_content: Some(structured_content),
        is_error: None,
        meta: Some(tool_meta()),
    })
}
