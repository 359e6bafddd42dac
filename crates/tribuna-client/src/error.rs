use thiserror::Error;

/// Failures terminal for one invocation. Nothing here is retried; the
/// caller converts whichever variant surfaces into the failure envelope.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("process identifier has no digits: {0:?}")]
    InvalidIdentifier(String),

    #[error("no credential configured: set PDPJ_TOKEN or TRIBUNAL_API_KEY")]
    MissingCredential,

    #[error("tribunal returned {status}: {snippet}")]
    Remote { status: u16, snippet: String },

    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed tribunal response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}
