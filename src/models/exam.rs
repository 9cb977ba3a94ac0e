use serde::{Deserialize, Serialize};

use crate::view::{FieldName, FieldValue, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Minutes.
    pub duration: u32,
    /// Number of questions.
    pub questions: u32,
    #[serde(default)]
    pub difficulty: Option<String>,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamField {
    Id,
    Title,
    Description,
    Category,
    Duration,
    Questions,
    Difficulty,
    Status,
    CreatedAt,
    Author,
}

impl FieldName for ExamField {
    const ALL: &'static [Self] = &[
        ExamField::Id,
        ExamField::Title,
        ExamField::Description,
        ExamField::Category,
        ExamField::Duration,
        ExamField::Questions,
        ExamField::Difficulty,
        ExamField::Status,
        ExamField::CreatedAt,
        ExamField::Author,
    ];

    fn name(self) -> &'static str {
        match self {
            ExamField::Id => "id",
            ExamField::Title => "title",
            ExamField::Description => "description",
            ExamField::Category => "category",
            ExamField::Duration => "duration",
            ExamField::Questions => "questions",
            ExamField::Difficulty => "difficulty",
            ExamField::Status => "status",
            ExamField::CreatedAt => "created_at",
            ExamField::Author => "author",
        }
    }
}

impl Record for Exam {
    type Field = ExamField;

    fn field(&self, field: ExamField) -> FieldValue<'_> {
        match field {
            ExamField::Id => self.id.into(),
            ExamField::Title => (&self.title).into(),
            ExamField::Description => self.description.as_ref().into(),
            ExamField::Category => self.category.as_ref().into(),
            ExamField::Duration => self.duration.into(),
            ExamField::Questions => self.questions.into(),
            ExamField::Difficulty => self.difficulty.as_ref().into(),
            ExamField::Status => (&self.status).into(),
            ExamField::CreatedAt => self.created_at.as_ref().into(),
            ExamField::Author => self.author.as_ref().into(),
        }
    }
}
