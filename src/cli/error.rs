use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::view::ViewError;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error("Failed to connect to API server")]
    #[diagnostic(
        code(examdesk::cli::connection_failed),
        help(
            "Is the exam API reachable? Pass --api-url or set EXD_API_URL to point to the correct server."
        )
    )]
    ConnectionFailed {
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid response from API server: {message}")]
    #[diagnostic(
        code(examdesk::cli::invalid_response),
        help(
            "The server returned data in an unexpected format. This might indicate a version mismatch."
        )
    )]
    InvalidResponse { message: String },

    #[error("API error ({status}): {message}")]
    #[diagnostic(code(examdesk::cli::api_error))]
    ApiError { status: u16, message: String },

    #[error("Unknown field '{field}' for {resource}")]
    #[diagnostic(
        code(examdesk::cli::unknown_field),
        help("Valid fields: {valid}")
    )]
    UnknownField {
        resource: String,
        field: String,
        valid: String,
    },

    #[error("Failed to read {path}")]
    #[diagnostic(code(examdesk::cli::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not a JSON array of records: {message}")]
    #[diagnostic(
        code(examdesk::cli::invalid_file),
        help("The file must hold a JSON array using the API's camelCase field names.")
    )]
    InvalidFile { path: PathBuf, message: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    View(#[from] ViewError),
}

impl From<reqwest::Error> for CliError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            CliError::ConnectionFailed { source: e }
        } else {
            CliError::InvalidResponse {
                message: e.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::InvalidResponse {
            message: e.to_string(),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
