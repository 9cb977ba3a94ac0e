//! Tests for the admin record types.

use crate::models::*;
use crate::view::{FieldName, FieldValue, Record};

#[test]
fn user_deserializes_from_api_format() {
    let json = r#"{
        "id": 7,
        "username": "dora_lee",
        "email": "dora@example.com",
        "role": "manager",
        "status": "active",
        "createdAt": "2024-02-01",
        "lastLogin": null
    }"#;
    let user: User = serde_json::from_str(json).unwrap();

    assert_eq!(user.role, Role::Manager);
    assert_eq!(user.created_at.as_deref(), Some("2024-02-01"));
    assert_eq!(user.field(UserField::LastLogin), FieldValue::Null);
    assert!(user.is_active());
}

#[test]
fn user_role_defaults_to_plain_user() {
    let json = r#"{"id": 1, "username": "x", "email": "x@y.z", "status": "inactive"}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.role, Role::User);
    assert!(!user.is_active());
}

#[test]
fn topic_reads_camel_case_keys() {
    let json = r#"{
        "id": 3,
        "name": "Joins",
        "level": "hard",
        "subjectId": 2,
        "subjectName": "Databases",
        "isDeleted": true
    }"#;
    let topic: Topic = serde_json::from_str(json).unwrap();
    assert_eq!(topic.subject_id, 2);
    assert!(topic.is_deleted);
    assert_eq!(topic.field(TopicField::IsDeleted), FieldValue::Bool(true));
}

#[test]
fn exam_numeric_fields_are_numbers() {
    let exams = mock_exams();
    assert_eq!(exams[0].field(ExamField::Duration), FieldValue::Int(60));
    assert_eq!(exams[2].field(ExamField::Questions), FieldValue::Int(40));
}

#[test]
fn camel_case_field_names_resolve() {
    assert_eq!(UserField::from_name("lastLogin"), Some(UserField::LastLogin));
    assert_eq!(
        CategoryField::from_name("examCount"),
        Some(CategoryField::ExamCount)
    );
    assert_eq!(TopicField::from_name("subject_name"), Some(TopicField::SubjectName));
}

#[test]
fn every_field_name_round_trips() {
    for field in ExamField::ALL {
        assert_eq!(ExamField::from_name(field.name()), Some(*field));
    }
    for field in UserField::ALL {
        assert_eq!(UserField::from_name(field.name()), Some(*field));
    }
}

#[test]
fn mock_data_matches_the_demo_screens() {
    assert_eq!(mock_users().len(), 5);
    assert_eq!(mock_exams().len(), 5);
    assert_eq!(mock_categories().len(), 4);
    assert_eq!(mock_users()[1].email, "jane@example.com");
    assert_eq!(mock_topics().iter().filter(|t| t.is_deleted).count(), 1);
}
