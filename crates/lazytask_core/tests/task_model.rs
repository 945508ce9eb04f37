use chrono::NaiveDate;
use lazytask_core::{Category, Priority, Task, TaskInput, ValidationError};

fn sample_task() -> Task {
    Task {
        id: 7,
        title: "Pay rent".to_string(),
        description: "before noon".to_string(),
        priority: Priority::Urgent,
        due_date: NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
        is_completed: false,
        category: Category::Custom("Home".to_string()),
        created_at: NaiveDate::from_ymd_opt(2025, 10, 15).unwrap(),
    }
}

#[test]
fn task_serialization_uses_display_labels_and_dates() {
    let task = sample_task();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["priority"], "Urgent");
    assert_eq!(json["category"], "Home");
    assert_eq!(json["due_date"], "01.11.2025");
    assert_eq!(json["created_at"], "15.10.2025");
    assert_eq!(json["is_completed"], false);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn deserialize_maps_default_category_labels() {
    let mut json = serde_json::to_value(sample_task()).unwrap();
    json["category"] = serde_json::json!("Finance");

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded.category, Category::Finance);
}

#[test]
fn deserialize_rejects_invalid_fields() {
    let mut json = serde_json::to_value(sample_task()).unwrap();
    json["due_date"] = serde_json::json!("2025-11-01");
    let err = serde_json::from_value::<Task>(json).unwrap_err();
    assert!(err.to_string().contains("invalid date"), "unexpected error: {err}");

    let mut json = serde_json::to_value(sample_task()).unwrap();
    json["category"] = serde_json::json!("  ");
    assert!(serde_json::from_value::<Task>(json).is_err());
}

#[test]
fn input_from_task_round_trips_through_validation() {
    let task = sample_task();
    let fields = TaskInput::from_task(&task).validate().unwrap();

    assert_eq!(fields.title, task.title);
    assert_eq!(fields.priority, task.priority);
    assert_eq!(fields.due_date, task.due_date);
    assert_eq!(fields.category, task.category);
}

#[test]
fn validate_reports_first_failing_field() {
    let input = TaskInput {
        title: " ".to_string(),
        description: String::new(),
        priority: "nope".to_string(),
        due_date: "x".to_string(),
        category: String::new(),
    };
    assert_eq!(input.validate().unwrap_err(), ValidationError::EmptyTitle);
}
