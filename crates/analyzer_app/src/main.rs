mod app;
mod cli;
mod effects;
mod ui;

use std::process::ExitCode;

use clap::Parser;

fn main() -> anyhow::Result<ExitCode> {
    let cli = cli::Cli::parse();
    app::run_app(cli)
}
