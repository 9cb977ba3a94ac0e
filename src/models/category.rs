use serde::{Deserialize, Serialize};

use crate::view::{FieldName, FieldValue, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub exam_count: u32,
    /// Badge color as a `#RRGGBB` hex string.
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryField {
    Id,
    Name,
    Description,
    ExamCount,
    Color,
}

impl FieldName for CategoryField {
    const ALL: &'static [Self] = &[
        CategoryField::Id,
        CategoryField::Name,
        CategoryField::Description,
        CategoryField::ExamCount,
        CategoryField::Color,
    ];

    fn name(self) -> &'static str {
        match self {
            CategoryField::Id => "id",
            CategoryField::Name => "name",
            CategoryField::Description => "description",
            CategoryField::ExamCount => "exam_count",
            CategoryField::Color => "color",
        }
    }
}

impl Record for Category {
    type Field = CategoryField;

    fn field(&self, field: CategoryField) -> FieldValue<'_> {
        match field {
            CategoryField::Id => self.id.into(),
            CategoryField::Name => (&self.name).into(),
            CategoryField::Description => self.description.as_ref().into(),
            CategoryField::ExamCount => self.exam_count.into(),
            CategoryField::Color => self.color.as_ref().into(),
        }
    }
}
