use tabled::Tabled;

use crate::cli::commands::{DataSource, ListParams, Resource, list_fields, list_records};
use crate::cli::error::CliResult;
use crate::cli::utils::{format_optional, truncate_with_ellipsis};
use crate::models::{User, UserField, mock_users};

pub(crate) const USERS: Resource<User> = Resource {
    name: "users",
    mock: mock_users,
    search_fields: &[UserField::Username, UserField::Email],
    default_sort: None,
    hidden: None,
};

#[derive(Tabled)]
pub(crate) struct UserDisplay {
    #[tabled(rename = "ID")]
    pub(crate) id: i64,
    #[tabled(rename = "Username")]
    pub(crate) username: String,
    #[tabled(rename = "Email")]
    pub(crate) email: String,
    #[tabled(rename = "Role")]
    pub(crate) role: String,
    #[tabled(rename = "Status")]
    pub(crate) status: String,
    #[tabled(rename = "Last Login")]
    pub(crate) last_login: String,
}

impl From<&User> for UserDisplay {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: truncate_with_ellipsis(&user.username, 30),
            email: truncate_with_ellipsis(&user.email, 40),
            role: user.role.to_string(),
            status: user.status.clone(),
            last_login: format_optional(user.last_login.as_deref()),
        }
    }
}

/// List users, searched by username and email
pub async fn list_users(
    source: DataSource<'_>,
    params: &ListParams<'_>,
    format: &str,
) -> CliResult<String> {
    list_records::<User, UserDisplay>(&USERS, source, params, format).await
}

pub fn user_fields() -> String {
    list_fields::<UserField>()
}
