//! View configuration errors.
//!
//! The view stages themselves never fail; only building a view with
//! nonsensical parameters does.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("Page size must be at least 1")]
    #[diagnostic(
        code(examdesk::view::invalid_page_size),
        help("Pass a page size of 1 or more.")
    )]
    InvalidPageSize,

    #[error("Unknown sort order '{value}'")]
    #[diagnostic(
        code(examdesk::view::invalid_sort_order),
        help("Use 'asc' or 'desc'.")
    )]
    InvalidSortOrder { value: String },
}

pub type ViewResult<T> = Result<T, ViewError>;
