use tabled::Tabled;

use crate::cli::commands::{DataSource, ListParams, Resource, list_fields, list_records};
use crate::cli::error::CliResult;
use crate::cli::utils::{format_optional, truncate_with_ellipsis};
use crate::models::{Exam, ExamField, mock_exams};

pub(crate) const EXAMS: Resource<Exam> = Resource {
    name: "exams",
    mock: mock_exams,
    search_fields: &[
        ExamField::Title,
        ExamField::Description,
        ExamField::Category,
        ExamField::Author,
    ],
    default_sort: None,
    hidden: None,
};

#[derive(Tabled)]
pub(crate) struct ExamDisplay {
    #[tabled(rename = "ID")]
    pub(crate) id: i64,
    #[tabled(rename = "Title")]
    pub(crate) title: String,
    #[tabled(rename = "Category")]
    pub(crate) category: String,
    #[tabled(rename = "Minutes")]
    pub(crate) duration: u32,
    #[tabled(rename = "Questions")]
    pub(crate) questions: u32,
    #[tabled(rename = "Difficulty")]
    pub(crate) difficulty: String,
    #[tabled(rename = "Status")]
    pub(crate) status: String,
}

impl From<&Exam> for ExamDisplay {
    fn from(exam: &Exam) -> Self {
        Self {
            id: exam.id,
            title: truncate_with_ellipsis(&exam.title, 40),
            category: format_optional(exam.category.as_deref()),
            duration: exam.duration,
            questions: exam.questions,
            difficulty: format_optional(exam.difficulty.as_deref()),
            status: exam.status.clone(),
        }
    }
}

/// List exams, searched by title, description, category and author
pub async fn list_exams(
    source: DataSource<'_>,
    params: &ListParams<'_>,
    format: &str,
) -> CliResult<String> {
    list_records::<Exam, ExamDisplay>(&EXAMS, source, params, format).await
}

pub fn exam_fields() -> String {
    list_fields::<ExamField>()
}
