use clap::Parser;

mod commands;
mod common;
mod nccopy;
mod report;

#[derive(Parser)]
#[command(name = "nccopy-bench")]
#[command(about = "Time nccopy across deflate, shuffle and unlimited-dimension settings")]
#[command(version = "0.1")]
struct Cli {
    #[command(flatten)]
    sweep: commands::sweep::SweepArgs,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();

    commands::sweep::run(cli.sweep)
}
