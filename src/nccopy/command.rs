use std::path::{Path, PathBuf};
use std::process::Command;

use super::error::RunError;
use super::measure::TIME_FORMAT;
use super::{RunSpec, RunnerConfig};

/// A fully resolved `time -f ... nccopy ...` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub argv: Vec<String>,
    pub output: PathBuf,
}

/// `<outdir>/<basename(input)>`
pub fn output_path(outdir: &Path, input: &Path) -> Result<PathBuf, RunError> {
    let name = input
        .file_name()
        .ok_or_else(|| RunError::NoFileName(input.to_path_buf()))?;
    Ok(outdir.join(name))
}

impl Invocation {
    pub fn new(config: &RunnerConfig, spec: &RunSpec) -> Result<Self, RunError> {
        let output = output_path(&config.outdir, &spec.input)?;

        let mut argv = vec![
            config.time_cmd.clone(),
            "-f".to_string(),
            TIME_FORMAT.to_string(),
            config.nccopy_cmd.clone(),
            "-d".to_string(),
            spec.level.to_string(),
        ];
        if spec.truncate_unlimited {
            argv.push("-u".to_string());
        }
        if spec.shuffle {
            argv.push("-s".to_string());
        }
        if let Some(chunking) = &config.chunking {
            argv.push("-c".to_string());
            argv.push(chunking.clone());
        }
        argv.push(spec.input.to_string_lossy().into_owned());
        argv.push(output.to_string_lossy().into_owned());

        Ok(Invocation { argv, output })
    }

    /// Shell-quoted form, for dry runs and logs.
    pub fn command_line(&self) -> String {
        shell_words::join(&self.argv)
    }

    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.argv[0]);
        cmd.args(&self.argv[1..]);
        cmd
    }
}
