use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Stored user is not valid JSON: {message}")]
    #[diagnostic(
        code(examdesk::session::corrupt_user),
        help("Sign out to clear the stored session, then sign in again.")
    )]
    CorruptUser { message: String },

    #[error("Stored token expiry '{value}' is not an RFC 3339 timestamp: {message}")]
    #[diagnostic(code(examdesk::session::corrupt_expiry))]
    CorruptExpiry { value: String, message: String },

    #[error("Session storage error: {message}")]
    #[diagnostic(code(examdesk::session::storage))]
    Storage { message: String },
}

pub type SessionResult<T> = Result<T, SessionError>;
