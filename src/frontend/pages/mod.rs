mod exams;
mod users;

pub use exams::Exams;
pub use users::Users;
