#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request never completed: connection, timeout, or an undecodable body.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}
