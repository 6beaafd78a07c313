//! Task splitting pipeline with explicit stages.
//!
//! 1. **Ingest**: read task records from the CSV or YAML source
//! 2. **Plan**: group by category, derive file names and ids, detect collisions
//! 3. **Output**: write one YAML file per category (skipped on dry runs)
//!
//! Each stage takes the output of the previous stage and returns typed results.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use taskgen_core::{OutputPlan, group_by_category, plan_outputs};
use taskgen_ingest::{read_task_csv, read_task_yaml};
use taskgen_model::{GenerateOptions, Task};
use taskgen_output::{WrittenFile, write_output_plan};

use crate::types::{CategorySummary, RunResult};

/// Which kind of source file a run reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Csv,
    Yaml,
}

impl SourceKind {
    /// Generation defaults for this source; only YAML runs derive titles.
    pub fn default_options(self) -> GenerateOptions {
        match self {
            SourceKind::Csv => GenerateOptions::for_csv(),
            SourceKind::Yaml => GenerateOptions::for_yaml(),
        }
    }

    fn label(self) -> &'static str {
        match self {
            SourceKind::Csv => "csv",
            SourceKind::Yaml => "yaml",
        }
    }
}

/// Everything a single run needs.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source: SourceKind,
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub options: GenerateOptions,
    pub dry_run: bool,
}

impl RunConfig {
    pub fn new(
        source: SourceKind,
        input: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source,
            input: input.into(),
            output_dir: output_dir.into(),
            options: source.default_options(),
            dry_run: false,
        }
    }
}

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Result of the ingest stage.
#[derive(Debug)]
pub struct IngestResult {
    /// Task records in source order.
    pub tasks: Vec<Task>,
    /// CSV rows dropped for having too few fields.
    pub skipped_rows: usize,
}

/// Read every task record from the source.
pub fn ingest(source: SourceKind, input: &Path) -> Result<IngestResult> {
    match source {
        SourceKind::Csv => {
            let ingest = read_task_csv(input)
                .with_context(|| format!("read task csv {}", input.display()))?;
            Ok(IngestResult {
                tasks: ingest.tasks,
                skipped_rows: ingest.skipped_rows.len(),
            })
        }
        SourceKind::Yaml => {
            let tasks = read_task_yaml(input)
                .with_context(|| format!("read task yaml {}", input.display()))?;
            Ok(IngestResult {
                tasks,
                skipped_rows: 0,
            })
        }
    }
}

// ============================================================================
// Stage 2: Plan
// ============================================================================

/// Group tasks and derive every output file, logging collisions.
pub fn plan(tasks: Vec<Task>, options: &GenerateOptions) -> OutputPlan {
    let groups = group_by_category(tasks);
    let plan = plan_outputs(&groups, options);
    for collision in &plan.prefix_collisions {
        warn!(
            prefix = %collision.prefix,
            categories = %collision.categories.join(", "),
            "categories share an id prefix; ids repeat across files"
        );
    }
    info!(
        category_count = groups.len(),
        task_count = plan.task_count(),
        filename_collisions = plan.filename_collisions.len(),
        "plan complete"
    );
    plan
}

// ============================================================================
// Stage 3: Output
// ============================================================================

/// Write planned files, or nothing on a dry run.
pub fn output(plan: &OutputPlan, config: &RunConfig) -> Result<Vec<WrittenFile>> {
    if config.dry_run {
        info!(file_count = plan.files.len(), "dry run, skipping writes");
        return Ok(Vec::new());
    }
    let output_dir = &config.output_dir;
    write_output_plan(plan, output_dir, config.options.collision_policy)
        .with_context(|| format!("write category files to {}", output_dir.display()))
}

/// Run all stages for one source file.
pub fn run(config: &RunConfig) -> Result<RunResult> {
    let run_span = info_span!(
        "run",
        source = config.source.label(),
        input = %config.input.display(),
        output_dir = %config.output_dir.display()
    );
    let _run_guard = run_span.enter();

    let ingest_start = Instant::now();
    let IngestResult {
        tasks,
        skipped_rows,
    } = info_span!("ingest").in_scope(|| ingest(config.source, &config.input))?;
    info!(
        task_count = tasks.len(),
        skipped_rows,
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let output_plan = info_span!("plan").in_scope(|| plan(tasks, &config.options));

    let output_start = Instant::now();
    let written = info_span!("output").in_scope(|| output(&output_plan, config))?;
    info!(
        file_count = written.len(),
        duration_ms = output_start.elapsed().as_millis(),
        "output complete"
    );

    Ok(RunResult {
        input: config.input.clone(),
        output_dir: config.output_dir.clone(),
        categories: summarize(&output_plan, &written),
        skipped_rows,
        filename_collisions: output_plan.filename_collisions.len(),
        prefix_collisions: output_plan.prefix_collisions.len(),
        dry_run: config.dry_run,
    })
}

fn summarize(plan: &OutputPlan, written: &[WrittenFile]) -> Vec<CategorySummary> {
    plan.files
        .iter()
        .enumerate()
        .map(|(idx, planned)| CategorySummary {
            category: planned.file.category.clone(),
            file_name: planned.file_name.clone(),
            task_count: planned.file.tasks.len(),
            first_id: planned.file.first_id().map(ToString::to_string),
            last_id: planned.file.last_id().map(ToString::to_string),
            written: written.get(idx).map(|file| file.path.clone()),
        })
        .collect()
}
