#[derive(Debug, clap::Parser)]
#[command(name = "mcp")]
#[command(about = "Model Context Protocol server")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Start MCP server with stdio transport
    #[clap(name = "stdio")]
    Stdio,

    /// Start MCP server with stateless streamable HTTP transport
    #[clap(name = "http")]
    Http(HttpOptions),
}

#[derive(Debug, clap::Args)]
pub struct HttpOptions {
    /// Port to listen on
    #[arg(short, long, env = "MYCF_PORT", default_value = "8000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "MYCF_HOST", default_value = "127.0.0.1")]
    pub host: String,
}
