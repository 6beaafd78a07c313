//! Integration tests for the pipeline module.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use taskgen_cli::pipeline::{RunConfig, SourceKind, ingest, plan, run};
use taskgen_model::{CategoryFile, CollisionPolicy};

const TASKS_CSV: &str = "category;description;complexity;time_estimate\n\
                         \"Ops\";\"Fix pipeline\";3;1.5\n\
                         \"Data & Analytics\";\"Build dashboard\";5;4.0\n\
                         \"Ops\";\"Add metric\";2;0.5\n\
                         \"Ops\";\"short\"\n";

const TASKS_YAML: &str = r#"- category: Ops
  description: Fix pipeline
  complexity: 3
  time_estimate: 1.5
- category: Data & Analytics
  description: Build a dashboard that tracks weekly active users across every product
  complexity: 5
  time_estimate: 4.0
- category: Ops
  description: Add metric
  complexity: 2
  time_estimate: 0.5
  title: Metrics
"#;

fn write_input(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn read_category(path: &Path) -> CategoryFile {
    serde_yaml::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn csv_run_writes_one_file_per_category() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "tasks.csv", TASKS_CSV);
    let out = dir.path().join("tasks");

    let result = run(&RunConfig::new(SourceKind::Csv, &input, &out)).unwrap();

    assert_eq!(result.categories.len(), 2);
    assert_eq!(result.task_count(), 3);
    assert_eq!(result.skipped_rows, 1);
    assert_eq!(result.categories[0].file_name, "ops.yaml");
    assert_eq!(result.categories[0].first_id.as_deref(), Some("O-001"));
    assert_eq!(result.categories[0].last_id.as_deref(), Some("O-002"));
    assert_eq!(result.categories[1].file_name, "data_and_analytics.yaml");

    let ops = read_category(&out.join("ops.yaml"));
    assert_eq!(ops.category, "Ops");
    let ids: Vec<&str> = ops.tasks.iter().map(|task| task.id.as_str()).collect();
    assert_eq!(ids, vec!["O-001", "O-002"]);
    assert_eq!(ops.tasks[1].description, "Add metric");
    assert!(ops.tasks.iter().all(|task| task.title.is_none()));

    let data = read_category(&out.join("data_and_analytics.yaml"));
    assert_eq!(data.category, "Data & Analytics");
    assert_eq!(data.tasks[0].id, "DA-001");
}

#[test]
fn yaml_run_derives_missing_titles() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "tasks.yaml", TASKS_YAML);
    let out = dir.path().join("tasks");

    let result = run(&RunConfig::new(SourceKind::Yaml, &input, &out)).unwrap();
    assert_eq!(result.categories.len(), 2);

    let ops = read_category(&out.join("ops.yaml"));
    assert_eq!(ops.tasks[0].title.as_deref(), Some("Fix pipeline..."));
    assert_eq!(ops.tasks[1].title.as_deref(), Some("Metrics"));

    let data = read_category(&out.join("data_and_analytics.yaml"));
    assert_eq!(
        data.tasks[0].title.as_deref(),
        Some("Build a dashboard that tracks weekly active users ...")
    );
}

#[test]
fn header_only_csv_produces_no_files() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "tasks.csv",
        "category;description;complexity;time_estimate\n",
    );
    let out = dir.path().join("tasks");

    let result = run(&RunConfig::new(SourceKind::Csv, &input, &out)).unwrap();

    assert!(result.categories.is_empty());
    assert!(!out.exists());
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "tasks.csv", TASKS_CSV);
    let out = dir.path().join("tasks");
    let mut config = RunConfig::new(SourceKind::Csv, &input, &out);
    config.dry_run = true;

    let result = run(&config).unwrap();

    assert_eq!(result.categories.len(), 2);
    assert!(result.categories.iter().all(|summary| summary.written.is_none()));
    assert!(!out.exists());
}

#[test]
fn reject_policy_fails_on_filename_collision() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "tasks.csv",
        "category;description;complexity;time_estimate\n\
         Data & Analytics;one;1;1\n\
         data and analytics;two;1;1\n",
    );
    let out = dir.path().join("tasks");
    let mut config = RunConfig::new(SourceKind::Csv, &input, &out);
    config.options = config
        .options
        .with_collision_policy(CollisionPolicy::Reject);

    let err = run(&config).unwrap_err();

    assert!(format!("{err:#}").contains("data_and_analytics.yaml"));
    assert!(!out.join("data_and_analytics.yaml").exists());
}

#[test]
fn missing_input_is_fatal() {
    let dir = TempDir::new().unwrap();
    let err = ingest(SourceKind::Yaml, &dir.path().join("absent.yaml")).unwrap_err();
    assert!(format!("{err:#}").contains("source file not found"));
}

#[test]
fn plan_counts_prefix_collisions() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "tasks.csv",
        "category;description;complexity;time_estimate\n\
         Data Analytics;one;1;1\n\
         Dev Automation;two;1;1\n",
    );
    let tasks = ingest(SourceKind::Csv, &input).unwrap().tasks;

    let output_plan = plan(tasks, &SourceKind::Csv.default_options());

    assert_eq!(output_plan.files.len(), 2);
    assert_eq!(output_plan.prefix_collisions.len(), 1);
    assert_eq!(output_plan.files[1].file.tasks[0].id, "DA-001");
}
