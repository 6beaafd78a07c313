use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use taskgen_cli::pipeline::{RunConfig, SourceKind, run};
use taskgen_cli::types::RunResult;
use taskgen_output::clear_completed_tasks;

use crate::cli::{ClearCompletedArgs, OutputArgs};

pub fn run_generate(source: SourceKind, input: &Path, args: &OutputArgs) -> Result<RunResult> {
    let mut config = RunConfig::new(source, input, &args.output_dir);
    config.options = config
        .options
        .with_collision_policy(args.on_collision.into());
    config.dry_run = args.dry_run;
    run(&config)
}

pub fn run_clear_completed(args: &ClearCompletedArgs) -> Result<PathBuf> {
    clear_completed_tasks(&args.state_file)
        .with_context(|| format!("clear {}", args.state_file.display()))?;
    Ok(args.state_file.clone())
}
