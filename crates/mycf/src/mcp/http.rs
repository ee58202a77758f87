use crate::prelude::{eprintln, *};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub async fn run_http(options: super::cli::HttpOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!(
            "Starting MCP server with HTTP transport on {}:{}...",
            options.host, options.port
        );
    }

    let addr = format!("{}:{}", options.host, options.port);
    let shared_global = Arc::new(global.clone());

    if global.verbose {
        eprintln!("MCP endpoint: http://{}/mcp", addr);
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    axum::serve(listener, router(shared_global))
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

fn router(global: Arc<crate::Global>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/mcp", post(message_handler))
        .layer(cors)
        .with_state(global)
}

/// Raw body in, so malformed JSON still gets a JSON-RPC parse error back
async fn message_handler(State(global): State<Arc<crate::Global>>, body: String) -> Response {
    match super::handle_request(&body, &global).await {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}
