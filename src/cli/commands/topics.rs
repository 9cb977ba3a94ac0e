use tabled::Tabled;

use crate::cli::commands::{DataSource, ListParams, Resource, list_fields, list_records};
use crate::cli::error::CliResult;
use crate::cli::utils::{format_optional, truncate_with_ellipsis};
use crate::models::{Topic, TopicField, mock_topics};

pub(crate) const TOPICS: Resource<Topic> = Resource {
    name: "topics",
    mock: mock_topics,
    search_fields: &[
        TopicField::Name,
        TopicField::Description,
        TopicField::SubjectName,
    ],
    default_sort: Some(TopicField::Name),
    hidden: Some(is_deleted),
};

fn is_deleted(topic: &Topic) -> bool {
    topic.is_deleted
}

#[derive(Tabled)]
pub(crate) struct TopicDisplay {
    #[tabled(rename = "ID")]
    pub(crate) id: i64,
    #[tabled(rename = "Name")]
    pub(crate) name: String,
    #[tabled(rename = "Subject")]
    pub(crate) subject: String,
    #[tabled(rename = "Level")]
    pub(crate) level: String,
    #[tabled(rename = "Deleted")]
    pub(crate) deleted: String,
}

impl From<&Topic> for TopicDisplay {
    fn from(topic: &Topic) -> Self {
        Self {
            id: topic.id,
            name: truncate_with_ellipsis(&topic.name, 40),
            subject: format_optional(topic.subject_name.as_deref()),
            level: topic.level.clone(),
            deleted: if topic.is_deleted { "yes" } else { "-" }.to_string(),
        }
    }
}

/// List topics, searched by name, description and subject
pub async fn list_topics(
    source: DataSource<'_>,
    params: &ListParams<'_>,
    format: &str,
) -> CliResult<String> {
    list_records::<Topic, TopicDisplay>(&TOPICS, source, params, format).await
}

pub fn topic_fields() -> String {
    list_fields::<TopicField>()
}
