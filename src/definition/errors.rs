//! Error types for the project-definition domain

use thiserror::Error;

/// Errors that can occur while extracting or rendering project definitions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    /// Input validation failed
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Fetching the project definition failed
    #[error("{0}")]
    Api(#[from] ApiError),

    /// Re-encoding the kind list into the value model failed
    #[error("Encode error: {0}")]
    Encode(String),

    /// Writing JSON output failed
    #[error("JSON output error: {0}")]
    Json(String),

    /// Writing YAML output failed
    #[error("YAML output error: {0}")]
    Yaml(String),
}

impl From<serde_json::Error> for DefinitionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for DefinitionError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Validation errors for command input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Project name is required
    #[error("projectName required")]
    MissingProjectName,

    /// Project name does not match the lowercase-hyphenated pattern
    #[error("projectName {name} format error: {reason}")]
    InvalidProjectName {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Module name does not match the lowercase-hyphenated pattern
    #[error("moduleName {name} format error: {reason}")]
    InvalidModuleName {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Kind token is not part of the selector vocabulary
    #[error("kind {token} format error: not correct, options: {options}")]
    UnknownKind {
        /// The offending token.
        token: String,
        /// The valid tokens, joined for display.
        options: String,
    },

    /// Output format is neither yaml nor json
    #[error("--output must be yaml or json")]
    InvalidOutput(String),
}

/// Errors raised while fetching a project definition
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request could not be sent or no response arrived
    #[error("request {url} error: {message}")]
    Transport {
        /// Requested URL.
        url: String,
        /// Transport error text.
        message: String,
    },

    /// The server answered with a non-success HTTP status
    #[error("request {url} error: status {status}: {message}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Message from the response envelope, or the raw body.
        message: String,
    },

    /// The response envelope reported a failure
    #[error("{message}")]
    Rejected {
        /// Requested URL.
        url: String,
        /// Envelope status.
        status: String,
        /// Envelope message.
        message: String,
    },

    /// The payload is not a project definition
    #[error("decode project definition error: {0}")]
    Decode(String),

    /// Reading a local project definition file failed
    #[error("read {path} error: {message}")]
    Read {
        /// File path.
        path: String,
        /// I/O error text.
        message: String,
    },
}
