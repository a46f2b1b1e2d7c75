pub mod command;
pub mod error;
pub mod measure;

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::report::RunResult;
use command::Invocation;
use error::RunError;
use measure::Measurement;

pub const DEFAULT_TIME_CMD: &str = "/usr/bin/time";
pub const DEFAULT_NCCOPY_CMD: &str = "nccopy";
pub const DEFAULT_OUTDIR: &str = "tmp";

/// One point of the sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSpec {
    pub input: PathBuf,
    pub level: u32,
    pub truncate_unlimited: bool,
    pub shuffle: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// External `time` binary; must understand `-f FORMAT`.
    pub time_cmd: String,
    pub nccopy_cmd: String,
    /// Existing directory the copies are written into.
    pub outdir: PathBuf,
    /// Passed as `nccopy -c` when set.
    pub chunking: Option<String>,
    /// Print the command lines instead of running them.
    pub dry_run: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            time_cmd: DEFAULT_TIME_CMD.to_string(),
            nccopy_cmd: DEFAULT_NCCOPY_CMD.to_string(),
            outdir: PathBuf::from(DEFAULT_OUTDIR),
            chunking: None,
            dry_run: false,
        }
    }
}

#[derive(Debug)]
pub enum RunOutcome {
    Completed(RunResult),
    /// Dry run: the command line that would have been executed.
    Planned(String),
}

pub trait Runner {
    fn run(&mut self, spec: &RunSpec) -> Result<RunOutcome, RunError>;
}

/// Runs nccopy under the time wrapper, one blocking child per call.
pub struct NccopyRunner {
    config: RunnerConfig,
}

impl NccopyRunner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }
}

fn file_size(path: &Path) -> Result<u64, RunError> {
    fs::metadata(path)
        .map(|m| m.len())
        .map_err(|source| RunError::Metadata {
            path: path.to_path_buf(),
            source,
        })
}

impl Runner for NccopyRunner {
    fn run(&mut self, spec: &RunSpec) -> Result<RunOutcome, RunError> {
        let invocation = Invocation::new(&self.config, spec)?;
        let line = invocation.command_line();
        debug!("{}", line);

        if self.config.dry_run {
            return Ok(RunOutcome::Planned(line));
        }

        let output = invocation
            .to_command()
            .output()
            .map_err(|source| RunError::Spawn {
                program: self.config.time_cmd.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            return Err(RunError::Exit {
                status: output.status,
                output: format!("{}{}", stdout, stderr),
            });
        }

        // time writes its report to stderr after the child finished.
        let measurement = if stderr.trim().is_empty() {
            Measurement::parse(&stdout)?
        } else {
            Measurement::parse(&stderr)?
        };

        // Historical naming: `orig_size` is the copy, `comp_size` the input.
        let orig_size = file_size(&invocation.output)?;
        let comp_size = file_size(&spec.input)?;

        Ok(RunOutcome::Completed(RunResult {
            input: spec.input.clone(),
            level: spec.level,
            truncate_unlimited: spec.truncate_unlimited,
            shuffle: spec.shuffle,
            measurement,
            orig_size,
            comp_size,
        }))
    }
}
