//! Tests for taskgen-model types.

use taskgen_model::{
    CategoryFile, CollisionPolicy, GenerateOptions, GeneratedTask, Task, TaskId, TitleMode,
};

#[test]
fn task_deserializes_without_title() {
    let json = r#"{"category":"Ops","description":"Fix pipeline","complexity":3,"time_estimate":1.5}"#;
    let task: Task = serde_json::from_str(json).expect("deserialize task");
    assert_eq!(task, Task::new("Ops", "Fix pipeline", 3, 1.5));
    assert!(task.title.is_none());
}

#[test]
fn task_ignores_unknown_keys() {
    let json = r#"{"category":"Ops","description":"d","complexity":1,"time_estimate":2,"owner":"sam"}"#;
    let task: Task = serde_json::from_str(json).expect("deserialize task");
    assert_eq!(task.category, "Ops");
    assert!((task.time_estimate - 2.0).abs() < f64::EPSILON);
}

#[test]
fn task_requires_description() {
    let json = r#"{"category":"Ops","complexity":1,"time_estimate":2.0}"#;
    assert!(serde_json::from_str::<Task>(json).is_err());
}

#[test]
fn generated_task_field_order_puts_id_first() {
    let task = GeneratedTask {
        id: TaskId::from_parts("O", 1),
        description: "Fix pipeline".to_string(),
        complexity: 3,
        time_estimate: 1.5,
        title: Some("Fix".to_string()),
    };
    let json = serde_json::to_string(&task).expect("serialize task");
    assert!(json.starts_with(r#"{"id":"O-001","description":"Fix pipeline""#));
    assert!(json.ends_with(r#""title":"Fix"}"#));
}

#[test]
fn category_file_first_and_last_ids() {
    let make = |index| GeneratedTask {
        id: TaskId::from_parts("O", index),
        description: String::new(),
        complexity: 0,
        time_estimate: 0.0,
        title: None,
    };
    let file = CategoryFile {
        category: "Ops".to_string(),
        tasks: vec![make(1), make(2), make(3)],
    };
    assert_eq!(file.first_id().map(TaskId::as_str), Some("O-001"));
    assert_eq!(file.last_id().map(TaskId::as_str), Some("O-003"));

    let empty = CategoryFile {
        category: "Ops".to_string(),
        tasks: Vec::new(),
    };
    assert!(empty.first_id().is_none());
}

#[test]
fn option_presets() {
    assert_eq!(GenerateOptions::for_csv().title_mode, TitleMode::Preserve);
    assert_eq!(
        GenerateOptions::for_yaml().title_mode,
        TitleMode::DeriveWhenMissing
    );
    let options = GenerateOptions::for_yaml().with_collision_policy(CollisionPolicy::Reject);
    assert_eq!(options.collision_policy, CollisionPolicy::Reject);
    assert_eq!(options.title_mode, TitleMode::DeriveWhenMissing);
}
