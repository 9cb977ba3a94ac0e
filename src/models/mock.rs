//! Demo data used when no API or file source is configured.

use crate::models::{Category, Exam, Role, Topic, User};

fn user(
    id: i64,
    username: &str,
    role: Role,
    status: &str,
    created_at: &str,
    last_login: &str,
) -> User {
    let handle = username.split('_').next().unwrap_or(username);
    User {
        id,
        username: username.to_string(),
        email: format!("{}@example.com", handle),
        role,
        status: status.to_string(),
        created_at: Some(created_at.to_string()),
        last_login: Some(last_login.to_string()),
    }
}

pub fn mock_users() -> Vec<User> {
    vec![
        user(1, "john_doe", Role::Admin, "active", "2024-01-15", "2024-01-20"),
        user(2, "jane_smith", Role::Manager, "active", "2024-01-18", "2024-01-21"),
        user(3, "bob_wilson", Role::User, "inactive", "2024-01-10", "2024-01-19"),
        user(4, "alice_brown", Role::Manager, "active", "2024-01-12", "2024-01-22"),
        user(5, "charlie_davis", Role::User, "active", "2024-01-20", "2024-01-22"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn exam(
    id: i64,
    title: &str,
    description: &str,
    category: &str,
    duration: u32,
    questions: u32,
    difficulty: &str,
    status: &str,
    created_at: &str,
    author: &str,
) -> Exam {
    Exam {
        id,
        title: title.to_string(),
        description: Some(description.to_string()),
        category: Some(category.to_string()),
        duration,
        questions,
        difficulty: Some(difficulty.to_string()),
        status: status.to_string(),
        created_at: Some(created_at.to_string()),
        author: Some(author.to_string()),
    }
}

pub fn mock_exams() -> Vec<Exam> {
    vec![
        exam(
            1,
            "JavaScript Fundamentals",
            "Basic JavaScript concepts and syntax",
            "Programming",
            60,
            25,
            "Beginner",
            "published",
            "2024-01-15",
            "John Doe",
        ),
        exam(
            2,
            "React Advanced Concepts",
            "Advanced React patterns and hooks",
            "Programming",
            90,
            35,
            "Advanced",
            "draft",
            "2024-01-18",
            "Jane Smith",
        ),
        exam(
            3,
            "Database Design",
            "Relational database design principles",
            "Database",
            120,
            40,
            "Intermediate",
            "published",
            "2024-01-10",
            "Bob Wilson",
        ),
        exam(
            4,
            "CSS Grid & Flexbox",
            "Modern CSS layout techniques",
            "Web Design",
            45,
            20,
            "Intermediate",
            "published",
            "2024-01-12",
            "Alice Brown",
        ),
        exam(
            5,
            "Node.js Backend Development",
            "Server-side JavaScript with Node.js",
            "Backend",
            100,
            30,
            "Advanced",
            "draft",
            "2024-01-20",
            "Charlie Davis",
        ),
    ]
}

fn category(id: i64, name: &str, description: &str, exam_count: u32, color: &str) -> Category {
    Category {
        id,
        name: name.to_string(),
        description: Some(description.to_string()),
        exam_count,
        color: Some(color.to_string()),
    }
}

pub fn mock_categories() -> Vec<Category> {
    vec![
        category(1, "Programming", "Programming languages and concepts", 15, "#3B82F6"),
        category(2, "Database", "Database design and management", 8, "#10B981"),
        category(3, "Web Design", "Frontend design and development", 12, "#F59E0B"),
        category(4, "Backend", "Server-side development", 10, "#EF4444"),
    ]
}

fn topic(id: i64, name: &str, level: &str, subject: (i64, &str), is_deleted: bool) -> Topic {
    Topic {
        id,
        name: name.to_string(),
        description: Some(format!("{} ({})", name, subject.1)),
        level: level.to_string(),
        subject_id: subject.0,
        subject_name: Some(subject.1.to_string()),
        is_deleted,
    }
}

pub fn mock_topics() -> Vec<Topic> {
    let javascript = (1, "JavaScript");
    let databases = (2, "Databases");
    vec![
        topic(1, "Closures", "medium", javascript, false),
        topic(2, "Promises", "medium", javascript, false),
        topic(3, "Hoisting", "easy", javascript, true),
        topic(4, "Normalization", "hard", databases, false),
        topic(5, "Indexes", "medium", databases, false),
        topic(6, "Transactions", "hard", databases, false),
    ]
}
