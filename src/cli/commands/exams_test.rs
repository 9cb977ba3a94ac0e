use crate::cli::commands::exams::*;
use crate::cli::commands::{DataSource, ListParams};
use serde_json::Value;

async fn list_json(params: &ListParams<'_>) -> Value {
    let output = list_exams(DataSource::Mock, params, "json")
        .await
        .expect("list_exams failed");
    serde_json::from_str(&output).expect("output is not JSON")
}

fn ids(json: &Value) -> Vec<i64> {
    json["items"]
        .as_array()
        .expect("items array")
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_search_covers_title_and_description() {
    let json = list_json(&ListParams {
        search: Some("javascript"),
        ..Default::default()
    })
    .await;

    // "JavaScript Fundamentals" by title, "Node.js Backend" by description
    assert_eq!(ids(&json), vec![1, 5]);
}

#[tokio::test]
async fn test_search_covers_category_and_author() {
    let by_category = list_json(&ListParams {
        search: Some("web design"),
        ..Default::default()
    })
    .await;
    assert_eq!(ids(&by_category), vec![4]);

    let by_author = list_json(&ListParams {
        search: Some("bob wilson"),
        ..Default::default()
    })
    .await;
    assert_eq!(ids(&by_author), vec![3]);
}

#[tokio::test]
async fn test_sort_by_duration_both_directions() {
    let asc = list_json(&ListParams {
        sort: Some("duration"),
        ..Default::default()
    })
    .await;
    assert_eq!(ids(&asc), vec![4, 1, 2, 5, 3]);

    let desc = list_json(&ListParams {
        sort: Some("duration"),
        order: Some("desc"),
        ..Default::default()
    })
    .await;
    assert_eq!(ids(&desc), vec![3, 5, 2, 1, 4]);
}

#[tokio::test]
async fn test_search_then_sort_then_page() {
    let json = list_json(&ListParams {
        search: Some("java"),
        sort: Some("questions"),
        order: Some("descending"),
        page: 2,
        page_size: 1,
        ..Default::default()
    })
    .await;

    // exams 5 (30 questions) and 1 (25 questions) match; page 2 holds the second
    assert_eq!(json["total_items"], 2);
    assert_eq!(json["total_pages"], 2);
    assert_eq!(json["page"], 2);
    assert_eq!(ids(&json), vec![1]);
}

#[tokio::test]
async fn test_json_items_use_api_field_names() {
    let json = list_json(&ListParams {
        search: Some("css"),
        ..Default::default()
    })
    .await;

    let exam = &json["items"][0];
    assert_eq!(exam["title"], "CSS Grid & Flexbox");
    assert_eq!(exam["createdAt"], "2024-01-12");
    assert_eq!(exam["duration"], 45);
    assert!(json.get("page_size").is_none());
}

#[tokio::test]
async fn test_table_output() {
    let output = list_exams(
        DataSource::Mock,
        &ListParams {
            sort: Some("title"),
            ..Default::default()
        },
        "table",
    )
    .await
    .unwrap();

    assert!(output.contains("Minutes"));
    assert!(output.contains("Database Design"));
    assert!(output.contains("Page 1 of 1 | Showing 1 - 5 of 5"));
    let css = output.find("CSS Grid").unwrap();
    let react = output.find("React Advanced").unwrap();
    assert!(css < react);
}

#[test]
fn test_exam_fields() {
    let fields = exam_fields();
    assert!(fields.lines().any(|f| f == "duration"));
    assert!(fields.lines().any(|f| f == "created_at"));
    assert_eq!(fields.lines().count(), 10);
}
