//! Stable, single-key ordering of records.

use crate::view::{FieldName, Record, SortOrder};

/// Sort key and direction of one list screen, with the screen's defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState<F> {
    key: Option<F>,
    order: SortOrder,
    default_key: Option<F>,
    default_order: SortOrder,
}

impl<F: FieldName> SortState<F> {
    pub fn new(default_key: Option<F>, default_order: SortOrder) -> Self {
        Self {
            key: default_key,
            order: default_order,
            default_key,
            default_order,
        }
    }

    /// No sort key: records keep their input order.
    pub fn unsorted() -> Self {
        Self::new(None, SortOrder::Asc)
    }

    pub fn key(&self) -> Option<F> {
        self.key
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Column-header click: the active key flips direction, any other key
    /// becomes active in ascending order.
    pub fn toggle(&mut self, key: F) {
        if self.key == Some(key) {
            self.order = self.order.toggled();
        } else {
            self.key = Some(key);
            self.order = SortOrder::Asc;
        }
    }

    pub fn set(&mut self, key: Option<F>, order: SortOrder) {
        self.key = key;
        self.order = order;
    }

    pub fn reset(&mut self) {
        self.key = self.default_key;
        self.order = self.default_order;
    }

    pub fn apply<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T>
    where
        T: Record<Field = F>,
    {
        sort_by_field(items, self.key, self.order)
    }
}

/// Return the records ordered by `key`.
///
/// The sort is stable in both directions: descending reverses the
/// comparison, so records with equal keys keep their input order either way.
/// Without a key the input order is returned as is.
pub fn sort_by_field<T: Record>(
    items: impl IntoIterator<Item = T>,
    key: Option<T::Field>,
    order: SortOrder,
) -> Vec<T> {
    let mut sorted: Vec<T> = items.into_iter().collect();
    if let Some(key) = key {
        sorted.sort_by(|a, b| order.apply(a.field(key).compare(&b.field(key))));
    }
    sorted
}
