mod command;
mod render;
mod session;

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dispatch_core::app::BoardBuilder;
use dispatch_core::config::DispatchConfig;
use dispatch_core::domain::ScheduleDate;
use dispatch_core::ports::SystemClock;

/// Interactive delivery schedule for one session. Nothing is saved on exit.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Config file (defaults to ./dispatch.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Reference date, YYYY-MM-DD
    #[arg(long)]
    today: Option<ScheduleDate>,
    /// Start with an empty schedule instead of the sample deliveries
    #[arg(long)]
    no_seed: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = DispatchConfig::load(args.config.as_deref()).context("loading config")?;
    let config = apply_args(&args, config);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let mut board = BoardBuilder::from_config(&config)
        .build(SystemClock)
        .context("building delivery board")?;

    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    session::run(&mut board, stdin.lock(), &mut io::stdout().lock(), prompt)
}

/// コマンドラインのフラグは設定ファイルと環境変数より優先する
fn apply_args(args: &Args, mut config: DispatchConfig) -> DispatchConfig {
    if let Some(today) = args.today {
        config.today = Some(today);
    }
    if args.no_seed {
        config.seed_mock_data = false;
    }
    config
}
