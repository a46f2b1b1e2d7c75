use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};

use crate::common::ToolArgs;
use crate::common::levels::{DeflateLevels, parse_levels};
use crate::nccopy::{NccopyRunner, RunOutcome, RunSpec, Runner};

#[derive(Parser)]
pub struct SweepArgs {
    /// Deflate levels to try, either "N" or "N-M"
    #[clap(short = 'd', long = "dlevel", value_parser = parse_levels, default_value = "0-9")]
    pub levels: DeflateLevels,

    /// netCDF files to copy
    #[clap(required = true)]
    pub files: Vec<PathBuf>,

    #[clap(flatten)]
    pub tools: ToolArgs,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepSummary {
    pub attempted: usize,
    pub completed: usize,
    pub failed: usize,
}

/// Every (level, truncate, shuffle) point for one file, in sweep order.
pub fn combinations(levels: &DeflateLevels) -> impl Iterator<Item = (u32, bool, bool)> + '_ {
    levels.iter().flat_map(|level| {
        [true, false].into_iter().flat_map(move |truncate| {
            [true, false]
                .into_iter()
                .map(move |shuffle| (level, truncate, shuffle))
        })
    })
}

/// Runs the whole matrix, writing one line per combination to `out`.
///
/// A failed combination prints a diagnostic naming the file and the sweep
/// moves on. Only errors writing to `out` abort.
pub fn sweep<R: Runner, W: Write>(
    runner: &mut R,
    files: &[PathBuf],
    levels: &DeflateLevels,
    out: &mut W,
) -> io::Result<SweepSummary> {
    let mut summary = SweepSummary::default();

    for file in files {
        for (level, truncate_unlimited, shuffle) in combinations(levels) {
            let spec = RunSpec {
                input: file.clone(),
                level,
                truncate_unlimited,
                shuffle,
            };
            summary.attempted += 1;

            match runner.run(&spec) {
                Ok(RunOutcome::Completed(result)) => {
                    summary.completed += 1;
                    writeln!(out, "{}", result)?;
                }
                Ok(RunOutcome::Planned(line)) => {
                    writeln!(out, "{}", line)?;
                }
                Err(e) => {
                    summary.failed += 1;
                    warn!(
                        "{} d = {} unlim = {} shuffle = {}: {}",
                        file.display(),
                        level,
                        truncate_unlimited,
                        shuffle,
                        e
                    );
                    writeln!(out, "Something went wrong with {}", file.display())?;
                }
            }
            out.flush()?;
        }
    }

    writeln!(out)?;
    out.flush()?;

    Ok(summary)
}

pub fn run(args: SweepArgs) -> anyhow::Result<()> {
    let config = args.tools.to_config()?;
    info!(
        "sweeping {} file(s) over deflate levels {} (nccopy: {}, outdir: {})",
        args.files.len(),
        args.levels,
        config.nccopy_cmd,
        config.outdir.display()
    );
    if args.levels.is_empty() {
        warn!("deflate range {} is empty, nothing to run", args.levels);
    }

    let mut runner = NccopyRunner::new(config);
    let stdout = io::stdout();
    let summary = sweep(&mut runner, &args.files, &args.levels, &mut stdout.lock())?;

    info!(
        "{} combinations, {} completed, {} failed",
        summary.attempted, summary.completed, summary.failed
    );

    Ok(())
}
