pub mod pagination;
pub mod search_input;
pub mod sort_header;

pub use pagination::Pagination;
pub use search_input::SearchInput;
pub use sort_header::SortHeader;
