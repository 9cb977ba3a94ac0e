use tabled::Tabled;

use crate::cli::commands::{DataSource, ListParams, Resource, list_fields, list_records};
use crate::cli::error::CliResult;
use crate::cli::utils::{format_optional, truncate_with_ellipsis};
use crate::models::{Category, CategoryField, mock_categories};

pub(crate) const CATEGORIES: Resource<Category> = Resource {
    name: "categories",
    mock: mock_categories,
    search_fields: &[CategoryField::Name, CategoryField::Description],
    default_sort: Some(CategoryField::Name),
    hidden: None,
};

#[derive(Tabled)]
pub(crate) struct CategoryDisplay {
    #[tabled(rename = "ID")]
    pub(crate) id: i64,
    #[tabled(rename = "Name")]
    pub(crate) name: String,
    #[tabled(rename = "Description")]
    pub(crate) description: String,
    #[tabled(rename = "Exams")]
    pub(crate) exam_count: u32,
    #[tabled(rename = "Color")]
    pub(crate) color: String,
}

impl From<&Category> for CategoryDisplay {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
            description: truncate_with_ellipsis(
                &format_optional(category.description.as_deref()),
                50,
            ),
            exam_count: category.exam_count,
            color: format_optional(category.color.as_deref()),
        }
    }
}

/// List exam categories, sorted by name unless asked otherwise
pub async fn list_categories(
    source: DataSource<'_>,
    params: &ListParams<'_>,
    format: &str,
) -> CliResult<String> {
    list_records::<Category, CategoryDisplay>(&CATEGORIES, source, params, format).await
}

pub fn category_fields() -> String {
    list_fields::<CategoryField>()
}
