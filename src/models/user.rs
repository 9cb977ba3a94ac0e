use std::fmt;

use serde::{Deserialize, Serialize};

use crate::view::{FieldName, FieldValue, Record};

/// Access role of a platform account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    #[default]
    User,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_login: Option<String>,
}

impl User {
    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case("active")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Id,
    Username,
    Email,
    Role,
    Status,
    CreatedAt,
    LastLogin,
}

impl FieldName for UserField {
    const ALL: &'static [Self] = &[
        UserField::Id,
        UserField::Username,
        UserField::Email,
        UserField::Role,
        UserField::Status,
        UserField::CreatedAt,
        UserField::LastLogin,
    ];

    fn name(self) -> &'static str {
        match self {
            UserField::Id => "id",
            UserField::Username => "username",
            UserField::Email => "email",
            UserField::Role => "role",
            UserField::Status => "status",
            UserField::CreatedAt => "created_at",
            UserField::LastLogin => "last_login",
        }
    }
}

impl Record for User {
    type Field = UserField;

    fn field(&self, field: UserField) -> FieldValue<'_> {
        match field {
            UserField::Id => self.id.into(),
            UserField::Username => (&self.username).into(),
            UserField::Email => (&self.email).into(),
            UserField::Role => self.role.as_str().into(),
            UserField::Status => (&self.status).into(),
            UserField::CreatedAt => self.created_at.as_ref().into(),
            UserField::LastLogin => self.last_login.as_ref().into(),
        }
    }
}
