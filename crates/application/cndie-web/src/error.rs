//! Errors for the storefront server

/// Result type for cndie-web operations
pub type Result<T> = std::result::Result<T, WebError>;

/// Errors that can occur in cndie-web
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}
