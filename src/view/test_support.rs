//! Minimal record type shared by the view tests.

use proptest::prelude::*;

use crate::view::{FieldName, FieldValue, Record};

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub score: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    Id,
    Name,
    Email,
    Score,
}

impl FieldName for RowField {
    const ALL: &'static [Self] = &[RowField::Id, RowField::Name, RowField::Email, RowField::Score];

    fn name(self) -> &'static str {
        match self {
            RowField::Id => "id",
            RowField::Name => "name",
            RowField::Email => "email",
            RowField::Score => "score",
        }
    }
}

impl Record for Row {
    type Field = RowField;

    fn field(&self, field: RowField) -> FieldValue<'_> {
        match field {
            RowField::Id => self.id.into(),
            RowField::Name => (&self.name).into(),
            RowField::Email => self.email.as_ref().into(),
            RowField::Score => self.score.into(),
        }
    }
}

pub fn row(id: i64, name: &str, score: i64) -> Row {
    Row {
        id,
        name: name.to_string(),
        email: None,
        score,
    }
}

/// `count` rows with ids `0..count`.
pub fn rows(count: usize) -> Vec<Row> {
    (0..count as i64)
        .map(|id| row(id, &format!("row {}", id), id % 7))
        .collect()
}

prop_compose! {
    pub fn arb_row()(
        name in "[a-zA-Z ]{0,8}",
        email in proptest::option::of("[a-z]{1,5}@[a-z]{1,4}"),
        score in 0i64..5,
    ) -> Row {
        Row { id: 0, name, email, score }
    }
}

prop_compose! {
    /// Rows with unique ids matching their input position.
    pub fn arb_rows(max: usize)(rows in proptest::collection::vec(arb_row(), 0..max)) -> Vec<Row> {
        rows.into_iter()
            .enumerate()
            .map(|(idx, row)| Row { id: idx as i64, ..row })
            .collect()
    }
}
