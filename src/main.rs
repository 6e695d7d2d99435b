mod app;
mod args;
mod command;
mod config;
mod consts;
mod game;
mod highscores;
mod random;
mod util;
use crate::app::App;
use crate::args::{Arguments, Command};
use crate::config::Config;
use crate::game::Engine;
use crate::highscores::HighscoreFile;
use anyhow::Context;
use simplelog::WriteLogger;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cmd = match Command::from_parser(lexopt::Parser::from_env()) {
        Ok(cmd) => cmd,
        Err(e) => {
            eprintln!("{}: {e}", env!("CARGO_PKG_NAME"));
            eprintln!(
                "Try '{} --help' for more information.",
                env!("CARGO_PKG_NAME")
            );
            return ExitCode::from(2);
        }
    };
    let args = match cmd {
        Command::Run(args) => args,
        Command::Help => {
            print!("{}", args::USAGE);
            return ExitCode::SUCCESS;
        }
        Command::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
    };
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e:?}", env!("CARGO_PKG_NAME"));
            ExitCode::FAILURE
        }
    }
}

fn run(args: Arguments) -> anyhow::Result<()> {
    let data_dir = match args.data_dir {
        Some(dir) => dir,
        None => config::default_data_dir()?,
    };
    fs_err::create_dir_all(&data_dir).context("failed to create data directory")?;
    let logfile = fs_err::File::create(data_dir.join(consts::LOG_FILE_NAME))
        .context("failed to create log file")?;
    WriteLogger::init(args.log_level, simplelog::Config::default(), logfile)
        .context("failed to initialize logging")?;

    let (cfg_path, allow_missing) = match args.config {
        Some(path) => (path, false),
        None => (Config::default_path()?, true),
    };
    let cfg = Config::load(&cfg_path, allow_missing).with_context(|| {
        format!("failed to load configuration from {}", cfg_path.display())
    })?;
    let board = cfg.board();
    log::info!(
        "Starting with config {}: {}x{} board, {:?} per tick",
        cfg_path.display(),
        board.width(),
        board.height(),
        cfg.tick_period()
    );

    let sink = HighscoreFile::new(cfg.highscores_file(&data_dir));
    let highscores = sink.load().context("failed to load leaderboard")?;
    log::info!(
        "Using leaderboard at {} with {} entries",
        sink.path().display(),
        highscores.entries().len()
    );
    let engine = Engine::new(board, cfg.tick_period(), highscores, sink, rand::rng());

    let terminal = ratatui::init();
    let r = App::new(engine, cfg.tile_size()).run(terminal);
    ratatui::restore();
    r
}
