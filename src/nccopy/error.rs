use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

/// Why a single nccopy invocation produced no result.
#[derive(Debug)]
pub enum RunError {
    /// The input path has no file name to derive the output path from.
    NoFileName(PathBuf),
    /// The measurement wrapper could not be started.
    Spawn { program: String, source: io::Error },
    /// The wrapped command exited nonzero or was killed.
    Exit { status: ExitStatus, output: String },
    /// Size lookup failed for the input or the output copy.
    Metadata { path: PathBuf, source: io::Error },
    /// The wrapper output did not hold the four `%e %S %U %M` fields.
    Measurement { text: String },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::NoFileName(path) => {
                write!(f, "input path '{}' has no file name", path.display())
            }
            RunError::Spawn { program, source } => {
                write!(f, "failed to execute '{}': {}", program, source)
            }
            RunError::Exit { status, output } => {
                write!(f, "command failed with {}", status)?;
                let output = output.trim();
                if !output.is_empty() {
                    write!(f, ": {}", output)?;
                }
                Ok(())
            }
            RunError::Metadata { path, source } => {
                write!(f, "cannot stat '{}': {}", path.display(), source)
            }
            RunError::Measurement { text } => {
                write!(f, "unexpected measurement output {:?}", text)
            }
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunError::Spawn { source, .. } | RunError::Metadata { source, .. } => Some(source),
            _ => None,
        }
    }
}
