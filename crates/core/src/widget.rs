//! Job list widget identifiers and metadata
//!
//! The widget itself is a pre-built HTML bundle. This module only knows how it is
//! named, how it is advertised to MCP clients, and which bundle file to pick.

use serde_json::Value;

pub const TOOL_NAME: &str = "mycf-job-list";
pub const TOOL_DESCRIPTION: &str =
    "Search for jobs on MyCareersFuture and return an interactive carousel of results.";
pub const WIDGET_NAME: &str = "mycf-job-list";
pub const WIDGET_TITLE: &str = "MyCareersFuture job list";
pub const WIDGET_DESCRIPTION: &str = "Displays a horizontal carousel of job listings from \
    MyCareersFuture with details like salary, location, and company.";
pub const RESOURCE_DESCRIPTION: &str = "MyCareersFuture job list widget markup";
pub const COMPONENT_URI: &str = "ui://widget/mycf-job-list.html";
pub const MIME_TYPE: &str = "text/html+skybridge";

/// Bundle files are named `mycareersfuture-<hash>.html`
pub const BUNDLE_PREFIX: &str = "mycareersfuture-";
pub const BUNDLE_SUFFIX: &str = ".html";

/// Served when no built bundle can be found
pub const PLACEHOLDER_HTML: &str = r#"<!doctype html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>MyCareersFuture Jobs</title>
  <style>
    body {
      font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
      padding: 2rem;
      text-align: center;
    }
    .error {
      background: #fee;
      border: 1px solid #fcc;
      padding: 1rem;
      border-radius: 8px;
      color: #c00;
    }
  </style>
</head>
<body>
  <div class="error">
    <h2>Component Not Built</h2>
    <p>
      Please run <code>pnpm install && pnpm run build</code>
      to build the component.
    </p>
  </div>
  <div id="mycareersfuture-root"></div>
</body>
</html>"#;

/// `_meta` attached to the tool descriptor and its call results
pub fn tool_meta() -> Value {
    serde_json::json!({
        "openai/outputTemplate": COMPONENT_URI,
        "openai/toolInvocation/invoking": "Gathering job listings…",
        "openai/toolInvocation/invoked": "Job listings ready.",
        "openai/widgetAccessible": true,
        "openai/resultCanProduceWidget": true,
        "annotations": {
            "destructiveHint": false,
            "openWorldHint": false,
            "readOnlyHint": true
        }
    })
}

/// `_meta` attached to the widget resource: the tool meta plus the widget description
pub fn resource_meta() -> Value {
    let mut meta = tool_meta();
    if let Value::Object(map) = &mut meta {
        map.insert(
            "openai/widgetDescription".to_string(),
            Value::String(WIDGET_DESCRIPTION.to_string()),
        );
    }
    meta
}

/// Pick the bundle to serve out of a directory listing
///
/// Only `mycareersfuture-*.html` files qualify; the lexicographically first one wins.
pub fn select_bundle<'a, I>(file_names: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    file_names
        .into_iter()
        .filter(|name| {
            name.len() > BUNDLE_PREFIX.len() + BUNDLE_SUFFIX.len()
                && name.starts_with(BUNDLE_PREFIX)
                && name.ends_with(BUNDLE_SUFFIX)
        })
        .min()
}
