use crate::prelude::*;
use clap::Parser;
use std::path::PathBuf;

mod error;
mod mcp;
mod prelude;
mod search;
mod widget;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Search MyCareersFuture job listings from the terminal or over MCP"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "MYCF_VERBOSE", global = true, default_value = "false")]
    verbose: bool,

    /// MyCareersFuture search endpoint
    #[clap(long, env = "MYCF_API_URL", global = true, default_value = search::DEFAULT_API_URL)]
    api_url: String,

    /// Timeout for MyCareersFuture requests, in seconds
    #[clap(long, env = "MYCF_TIMEOUT", global = true, default_value = "12")]
    timeout: u64,

    /// User-Agent sent to MyCareersFuture
    #[clap(long, env = "MYCF_USER_AGENT", global = true, default_value = search::DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Directory holding the built job list widget (mycareersfuture-*.html)
    #[clap(long, env = "MYCF_ASSETS_DIR", global = true, default_value = "assets")]
    assets_dir: PathBuf,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Search MyCareersFuture job listings
    Search(crate::search::SearchOptions),

    /// Model Context Protocol server
    MCP(crate::mcp::App),
}

fn init_logging(global: &Global) {
    let default_filter = if global.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = App::parse();
    init_logging(&app.global);

    match app.command {
        SubCommands::Search(options) => crate::search::run(options, app.global).await,
        SubCommands::MCP(sub_app) => crate::mcp::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}

#[cfg(test)]
pub(crate) fn test_global(api_url: &str, assets_dir: &std::path::Path) -> Global {
    Global {
        verbose: false,
        api_url: api_url.to_string(),
        timeout: 5,
        user_agent: search::DEFAULT_USER_AGENT.to_string(),
        assets_dir: assets_dir.to_path_buf(),
    }
}
