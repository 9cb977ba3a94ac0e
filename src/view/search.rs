//! Text search across a fixed set of record fields.

use crate::view::Record;

/// Transient search query of one list screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    query: String,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }

    /// Whether the query narrows anything. Whitespace-only queries do not.
    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty()
    }

    pub fn apply<T: Record>(
        &self,
        items: impl IntoIterator<Item = T>,
        fields: &[T::Field],
    ) -> Vec<T> {
        filter(items, fields, &self.query)
    }
}

/// Keep the records where at least one of `fields` contains `query`,
/// case-insensitively.
///
/// An empty or whitespace-only query keeps everything. The query is not
/// trimmed for matching, so `"jane "` only matches values with a trailing
/// space after `jane`.
pub fn filter<T: Record>(
    items: impl IntoIterator<Item = T>,
    fields: &[T::Field],
    query: &str,
) -> Vec<T> {
    if query.trim().is_empty() {
        return items.into_iter().collect();
    }

    let needle = query.to_lowercase();
    items
        .into_iter()
        .filter(|item| matches_lowercase(item, fields, &needle))
        .collect()
}

/// Per-record form of [`filter`].
pub fn matches<T: Record>(item: &T, fields: &[T::Field], query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    matches_lowercase(item, fields, &query.to_lowercase())
}

fn matches_lowercase<T: Record>(item: &T, fields: &[T::Field], needle: &str) -> bool {
    fields
        .iter()
        .any(|field| item.field(*field).contains_lowercase(needle))
}
