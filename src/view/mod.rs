//! Client-side data views for list screens.
//!
//! A list screen pipes its base collection through three stages, always in
//! this order: [`search`] narrows it, [`sort`] orders it and [`pagination`]
//! slices it. Every stage is a pure function of its inputs; [`ListView`]
//! composes them and caches each stage until one of its inputs changes.

pub mod error;
pub mod list_view;
pub mod pagination;
pub mod search;
pub mod sort;

#[cfg(test)]
pub(crate) mod test_support;


#[cfg(test)]
#[path = "sort_test.rs"]
mod sort_test;

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;


use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use error::{ViewError, ViewResult};
pub use list_view::ListView;
pub use pagination::{Page, Paginator};
pub use search::SearchState;
pub use sort::SortState;

// =============================================================================
// Record Shape
// =============================================================================

/// Names the fields of one record type.
///
/// Search fields and sort keys are values of this type, so a screen can only
/// refer to fields its records actually have.
pub trait FieldName: Copy + Eq + fmt::Debug + 'static {
    /// Every field, in display order.
    const ALL: &'static [Self];

    /// Canonical snake_case name.
    fn name(self) -> &'static str;

    /// Look a field up by name.
    ///
    /// Case, `_` and `-` are ignored, so `created_at`, `createdAt` and
    /// `CREATED-AT` all resolve to the same field.
    fn from_name(name: &str) -> Option<Self> {
        let wanted = normalize_field_name(name);
        Self::ALL
            .iter()
            .copied()
            .find(|field| normalize_field_name(field.name()) == wanted)
    }
}

fn normalize_field_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// A record that list screens can search and sort.
pub trait Record {
    type Field: FieldName;

    /// Read one field. Missing values are [`FieldValue::Null`].
    fn field(&self, field: Self::Field) -> FieldValue<'_>;
}

impl<R: Record + ?Sized> Record for &R {
    type Field = R::Field;

    fn field(&self, field: Self::Field) -> FieldValue<'_> {
        (**self).field(field)
    }
}

// =============================================================================
// Field Values
// =============================================================================

/// A borrowed view of a single field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(&'a str),
}

impl FieldValue<'_> {
    /// Case-insensitive substring test against an already lowercased needle.
    ///
    /// `Null` never matches, not even the empty needle.
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        match self {
            FieldValue::Null => false,
            FieldValue::Text(text) => text.to_lowercase().contains(needle),
            other => other.to_string().to_lowercase().contains(needle),
        }
    }

    /// Total order used by the sort stage.
    ///
    /// Text compares lowercased, numbers compare numerically across `Int`
    /// and `Float`, and values of different kinds order by kind:
    /// `Null` < `Bool` < numbers < `Text`.
    pub fn compare(&self, other: &FieldValue<'_>) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (FieldValue::Int(a), FieldValue::Int(b)) => a.cmp(b),
            (FieldValue::Int(a), FieldValue::Float(b)) => (*a as f64).total_cmp(b),
            (FieldValue::Float(a), FieldValue::Int(b)) => a.total_cmp(&(*b as f64)),
            (FieldValue::Float(a), FieldValue::Float(b)) => a.total_cmp(b),
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            FieldValue::Null => 0,
            FieldValue::Bool(_) => 1,
            FieldValue::Int(_) | FieldValue::Float(_) => 2,
            FieldValue::Text(_) => 3,
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Bool(value) => write!(f, "{}", value),
            FieldValue::Int(value) => write!(f, "{}", value),
            FieldValue::Float(value) => write!(f, "{}", value),
            FieldValue::Text(value) => f.write_str(value),
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::Text(value)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(value: &'a String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue<'_> {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<u32> for FieldValue<'_> {
    fn from(value: u32) -> Self {
        FieldValue::Int(i64::from(value))
    }
}

impl From<f64> for FieldValue<'_> {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue<'_> {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl<'a, T> From<Option<T>> for FieldValue<'a>
where
    T: Into<FieldValue<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

// =============================================================================
// Sort Direction
// =============================================================================

/// Sort direction for list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// Orient an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortOrder {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            _ => Err(ViewError::InvalidSortOrder {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::test_support::RowField;

    #[test]
    fn null_never_matches() {
        assert!(!FieldValue::Null.contains_lowercase(""));
        assert!(!FieldValue::Null.contains_lowercase("null"));
    }

    #[test]
    fn numbers_match_their_string_form() {
        assert!(FieldValue::Int(1042).contains_lowercase("04"));
        assert!(FieldValue::Float(60.5).contains_lowercase("0.5"));
        assert!(FieldValue::Bool(true).contains_lowercase("tru"));
    }

    #[test]
    fn text_compares_case_insensitively() {
        assert_eq!(
            FieldValue::Text("alice").compare(&FieldValue::Text("Bob")),
            Ordering::Less
        );
        assert_eq!(
            FieldValue::Text("ALICE").compare(&FieldValue::Text("alice")),
            Ordering::Equal
        );
    }

    #[test]
    fn mixed_numbers_compare_numerically() {
        assert_eq!(
            FieldValue::Int(2).compare(&FieldValue::Float(1.5)),
            Ordering::Greater
        );
        assert_eq!(
            FieldValue::Float(2.0).compare(&FieldValue::Int(2)),
            Ordering::Equal
        );
    }

    #[test]
    fn mixed_kinds_fall_back_to_kind_rank() {
        assert_eq!(
            FieldValue::Null.compare(&FieldValue::Int(0)),
            Ordering::Less
        );
        assert_eq!(
            FieldValue::Text("0").compare(&FieldValue::Int(9)),
            Ordering::Greater
        );
    }

    #[test]
    fn sort_order_parses_and_toggles() {
        assert_eq!("DESC".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert!("sideways".parse::<SortOrder>().is_err());
        assert_eq!(SortOrder::Asc.toggled().toggled(), SortOrder::Asc);
    }

    #[test]
    fn field_names_resolve_loosely() {
        assert_eq!(RowField::from_name("name"), Some(RowField::Name));
        assert_eq!(RowField::from_name("Name"), Some(RowField::Name));
        assert_eq!(RowField::from_name("nope"), None);
    }
}
