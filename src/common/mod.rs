pub mod config;
pub mod levels;

use std::path::PathBuf;

use clap::Args;

use crate::nccopy::{DEFAULT_NCCOPY_CMD, DEFAULT_OUTDIR, DEFAULT_TIME_CMD, RunnerConfig};
use config::Settings;

/// Tool locations and copy options shared by every run of the sweep.
#[derive(Debug, Clone, Default, Args)]
pub struct ToolArgs {
    /// Chunking specification passed to nccopy -c (e.g. "time/1,lat/180")
    #[clap(short, long)]
    pub chunking: Option<String>,

    /// Existing directory the copies are written to [default: tmp]
    #[clap(long, env = "NCCOPY_BENCH_OUTDIR")]
    pub outdir: Option<PathBuf>,

    /// nccopy executable [default: nccopy]
    #[clap(long, env = "NCCOPY")]
    pub nccopy: Option<String>,

    /// time executable accepting -f FORMAT [default: /usr/bin/time]
    #[clap(long, env = "NCCOPY_BENCH_TIME")]
    pub time_cmd: Option<String>,

    /// Print the commands instead of running them
    #[clap(long)]
    pub dry_run: bool,

    /// TOML settings file; command line values take precedence
    #[clap(long)]
    pub config: Option<PathBuf>,
}

impl ToolArgs {
    /// Loads the settings file, if any, and merges it under the command line.
    pub fn to_config(&self) -> anyhow::Result<RunnerConfig> {
        let settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        Ok(self.merge(settings))
    }

    fn merge(&self, settings: Settings) -> RunnerConfig {
        RunnerConfig {
            time_cmd: self
                .time_cmd
                .clone()
                .or(settings.time)
                .unwrap_or_else(|| DEFAULT_TIME_CMD.to_string()),
            nccopy_cmd: self
                .nccopy
                .clone()
                .or(settings.nccopy)
                .unwrap_or_else(|| DEFAULT_NCCOPY_CMD.to_string()),
            outdir: self
                .outdir
                .clone()
                .or(settings.outdir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTDIR)),
            chunking: self.chunking.clone().or(settings.chunking),
            dry_run: self.dry_run || settings.dry_run,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ToolArgs::default().to_config().unwrap();
        assert_eq!(config, RunnerConfig::default());
        assert_eq!(config.time_cmd, "/usr/bin/time");
        assert_eq!(config.nccopy_cmd, "nccopy");
        assert_eq!(config.outdir, PathBuf::from("tmp"));
    }

    #[test]
    fn settings_fill_gaps() {
        let settings = Settings {
            nccopy: Some("/opt/nccopy".to_string()),
            chunking: Some("lat/10".to_string()),
            ..Default::default()
        };
        let config = ToolArgs::default().merge(settings);
        assert_eq!(config.nccopy_cmd, "/opt/nccopy");
        assert_eq!(config.chunking.as_deref(), Some("lat/10"));
        assert_eq!(config.time_cmd, "/usr/bin/time");
    }

    #[test]
    fn command_line_wins() {
        let args = ToolArgs {
            outdir: Some(PathBuf::from("cli-out")),
            nccopy: Some("cli-nccopy".to_string()),
            ..Default::default()
        };
        let settings = Settings {
            outdir: Some(PathBuf::from("file-out")),
            nccopy: Some("file-nccopy".to_string()),
            dry_run: true,
            ..Default::default()
        };
        let config = args.merge(settings);
        assert_eq!(config.outdir, PathBuf::from("cli-out"));
        assert_eq!(config.nccopy_cmd, "cli-nccopy");
        assert!(config.dry_run);
    }

    #[test]
    fn reads_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bench.toml");
        std::fs::write(&path, "outdir = \"scratch\"\n").unwrap();
        let args = ToolArgs {
            config: Some(path),
            ..Default::default()
        };
        assert_eq!(args.to_config().unwrap().outdir, PathBuf::from("scratch"));
    }
}
