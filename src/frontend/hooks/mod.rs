//! Reactive wrappers around the list view stages
//!
//! Compose them in pipeline order: search, then sort, then paginate.

mod use_pagination;
mod use_search;
mod use_sort;

pub use use_pagination::*;
pub use use_search::*;
pub use use_sort::*;
