use mycf_core::widget::{
    resource_meta, COMPONENT_URI, MIME_TYPE, RESOURCE_DESCRIPTION, WIDGET_NAME, WIDGET_TITLE,
};
use serde::{Deserialize, Serialize};

use super::{to_json, JsonRpcError, ResourceContents};

#[derive(Debug, Serialize)]
struct Resource {
    name: String,
    title: String,
    uri: String,
    description: String,
    #[serde(rename = "mimeType")]
    mime_type: String,
    #[serde(rename = "_meta")]
    meta: serde_json::Value,
}

#[derive(Debug, Serialize)]
struct ResourceTemplate {
    name: String,
    title: String,
    #[serde(rename = "uriTemplate")]
    uri_template: String,
    description: String,
    #[serde(rename = "mimeType")]
    mime_type: String,
    #[serde(rename = "_meta")]
    meta: serde_json::Value,
}

#[derive(Debug, Serialize)]
struct ResourcesList {
    resources: Vec<Resource>,
}

#[derive(Debug, Serialize)]
struct ResourceTemplatesList {
    #[serde(rename = "resourceTemplates")]
    resource_templates: Vec<ResourceTemplate>,
}

#[derive(Debug, Deserialize)]
struct ReadResourceParams {
    uri: String,
}

#[derive(Debug, Serialize)]
struct ReadResourceResult {
    contents: Vec<ResourceContents>,
    #[serde(rename = "_meta", skip_serializing_if = "Option::is_none")]
    meta: Option<serde_json::Value>,
}

pub fn handle_resources_list() -> Result<serde_json::Value, JsonRpcError> {
    log::info!("Registering widget resource {COMPONENT_URI}");

    to_json(ResourcesList {
        resources: vec![Resource {
            name: WIDGET_NAME.to_string(),
            title: WIDGET_TITLE.to_string(),
            uri: COMPONENT_URI.to_string(),
            description: RESOURCE_DESCRIPTION.to_string(),
            mime_type: MIME_TYPE.to_string(),
            meta: resource_meta(),
        }],
    })
}

pub fn handle_resource_templates_list() -> Result<serde_json::Value, JsonRpcError> {
    to_json(ResourceTemplatesList {
        resource_templates: vec![ResourceTemplate {
            name: WIDGET_NAME.to_string(),
            title: WIDGET_TITLE.to_string(),
            uri_template: COMPONENT_URI.to_string(),
            description: RESOURCE_DESCRIPTION.to_string(),
            mime_type: MIME_TYPE.to_string(),
            meta: resource_meta(),
        }],
    })
}

pub fn handle_resources_read(
    params: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: ReadResourceParams =
        serde_json::from_value(params.unwrap_or(serde_json::Value::Null)).map_err(|e| {
            JsonRpcError {
                code: -32602,
                message: format!("Invalid params: {e}"),
                data: None,
            }
        })?;

    log::info!("read_resource() called for URI {}", params.uri);

    if params.uri != COMPONENT_URI {
        log::warn!("Unknown resource requested: {}", params.uri);
        return to_json(ReadResourceResult {
            contents: vec![],
            meta: Some(serde_json::json!({ "error": format!("Unknown resource: {}", params.uri) })),
        });
    }

    let component_html = crate::widget::load_component_html(&global.assets_dir);

    to_json(ReadResourceResult {
        contents: vec![ResourceContents {
            uri: COMPONENT_URI.to_string(),
            mime_type: MIME_TYPE.to_string(),
            text: component_html,
            title: None,
            meta: Some(resource_meta()),
        }],
        meta: None,
    })
}
