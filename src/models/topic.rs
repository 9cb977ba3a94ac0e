use serde::{Deserialize, Serialize};

use crate::view::{FieldName, FieldValue, Record};

/// A topic inside a subject. Deleted topics stay in the collection and are
/// hidden by the screen's status filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// `easy`, `medium` or `hard`.
    pub level: String,
    pub subject_id: i64,
    #[serde(default)]
    pub subject_name: Option<String>,
    #[serde(default)]
    pub is_deleted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicField {
    Id,
    Name,
    Description,
    Level,
    SubjectId,
    SubjectName,
    IsDeleted,
}

impl FieldName for TopicField {
    const ALL: &'static [Self] = &[
        TopicField::Id,
        TopicField::Name,
        TopicField::Description,
        TopicField::Level,
        TopicField::SubjectId,
        TopicField::SubjectName,
        TopicField::IsDeleted,
    ];

    fn name(self) -> &'static str {
        match self {
            TopicField::Id => "id",
            TopicField::Name => "name",
            TopicField::Description => "description",
            TopicField::Level => "level",
            TopicField::SubjectId => "subject_id",
            TopicField::SubjectName => "subject_name",
            TopicField::IsDeleted => "is_deleted",
        }
    }
}

impl Record for Topic {
    type Field = TopicField;

    fn field(&self, field: TopicField) -> FieldValue<'_> {
        match field {
            TopicField::Id => self.id.into(),
            TopicField::Name => (&self.name).into(),
            TopicField::Description => self.description.as_ref().into(),
            TopicField::Level => (&self.level).into(),
            TopicField::SubjectId => self.subject_id.into(),
            TopicField::SubjectName => self.subject_name.as_ref().into(),
            TopicField::IsDeleted => self.is_deleted.into(),
        }
    }
}
