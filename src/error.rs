//! Error types for Career Compass.

/// Top-level error type for the application.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {key}. {hint}")]
    MissingEnvVar { key: String, hint: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors from the advisory gateway and its completion transport.
///
/// The session controller collapses all of these into one generic
/// user-facing message; the typed variant only reaches the tracing log.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Completion request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("Provider rate limited")]
    RateLimited,

    #[error("Authentication failed for completion provider")]
    AuthFailed,

    #[error("Invalid response from provider: {reason}")]
    InvalidResponse { reason: String },

    #[error("Provider returned no text in the response candidates")]
    EmptyReply,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for the application.
pub type Result<T> = std::result::Result<T, Error>;
