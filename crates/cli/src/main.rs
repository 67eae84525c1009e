mod game;
mod ui;

use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use othello_core::eval::{DeltaMode, EvalConfig};
use othello_core::game_state::PlayerKind;
use othello_core::level::{self, MAX_LEVEL};
use othello_core::search::options::SearchOptions;
use simplelog::{Config, LevelFilter, WriteLogger};

#[derive(Parser, Debug)]
#[command(version, about = "Play Othello against a minimax engine in the terminal")]
struct Cli {
    /// Difficulty level; the search depth is the level plus 3
    #[arg(short, long, default_value_t = 2,
          value_parser = clap::value_parser!(u8).range(0..=MAX_LEVEL as i64))]
    level: u8,

    /// Who plays Black (human or computer)
    #[arg(long, default_value = "human")]
    black: PlayerKind,

    /// Who plays White (human or computer)
    #[arg(long, default_value = "computer")]
    white: PlayerKind,

    /// Write engine logs to this file
    #[arg(long = "log-file", value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    log_file: Option<PathBuf>,

    /// Score leaves against the whole start position instead of the changed cells
    #[arg(long)]
    reference_delta: bool,

    /// Disable alpha-beta pruning
    #[arg(long)]
    no_pruning: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging(&args)?;

    let delta_mode = if args.reference_delta {
        DeltaMode::Reference
    } else {
        DeltaMode::Cellwise
    };
    let level = args.level as usize;
    let options = SearchOptions::new(level::search_depth(level)?)
        .with_pruning(!args.no_pruning)
        .with_eval_config(EvalConfig::default().with_delta_mode(delta_mode));

    log::info!(
        "starting: black={} white={} level={level} options={options:?}",
        args.black,
        args.white
    );
    ui::ui_loop(&options, level, [args.black, args.white])
}

fn init_logging(args: &Cli) -> anyhow::Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), file)
        .context("failed to install logger")?;
    Ok(())
}
