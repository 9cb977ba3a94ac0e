//! Record types of the admin screens.
//!
//! These mirror the JSON the exam platform API returns (camelCase keys) and
//! implement [`Record`](crate::view::Record) so every list screen can search,
//! sort and page them.

mod category;
mod exam;
mod mock;
mod topic;
mod user;

pub use category::{Category, CategoryField};
pub use exam::{Exam, ExamField};
pub use mock::{mock_categories, mock_exams, mock_topics, mock_users};
pub use topic::{Topic, TopicField};
pub use user::{Role, User, UserField};

#[cfg(test)]
#[path = "models_test.rs"]
mod models_test;
