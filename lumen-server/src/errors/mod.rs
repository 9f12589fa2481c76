mod forward;

pub use forward::ForwardError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address: {0}")]
    Address(#[from] std::net::AddrParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to build gateway client: {0}")]
    Client(#[from] reqwest::Error),
}
