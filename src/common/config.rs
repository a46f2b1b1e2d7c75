use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Optional settings file, e.g.
///
/// ```toml
/// time = "/usr/bin/time"
/// nccopy = "/opt/netcdf/bin/nccopy"
/// outdir = "scratch"
/// chunking = "time/1,lat/180,lon/360"
/// ```
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub time: Option<String>,
    pub nccopy: Option<String>,
    pub outdir: Option<PathBuf>,
    pub chunking: Option<String>,
    #[serde(default)]
    pub dry_run: bool,
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Failed to parse settings file {}", path.display()))
    }
}
