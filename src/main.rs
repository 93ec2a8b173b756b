use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use log::{debug, LevelFilter};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

use todotxt::cli::args::{Cli, Commands};
use todotxt::cli::commands::{self, Workspace};
use todotxt::config::{ColorSetting, Config, Paths};
use todotxt::core::SystemClock;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // Without a logger the log macros are no-ops
    if let Err(e) = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("{}: {e}", "warning".yellow().bold());
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = Paths::default();
    let config_file = cli.config.clone().unwrap_or_else(|| paths.config_file.clone());
    let config = Config::load_from_path(&config_file)?;
    debug!("config loaded from {}", config_file.display());

    match config.general.color {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {},
    }

    let format = cli.output.unwrap_or(config.general.default_output);
    let todo_file = config.todo_file(cli.file.as_deref(), &paths);
    debug!("using task file {}", todo_file.display());

    let clock = SystemClock;
    let ws = Workspace {
        todo_file,
        config,
        format,
        clock: &clock,
    };

    let output = match cli.command {
        Commands::Ls(args) => commands::list(&ws, &args)?,
        Commands::Add { text } => commands::add(&ws, &text.join(" "))?,
        Commands::Do { id } => commands::complete(&ws, id)?,
        Commands::Reopen { id } => commands::reopen(&ws, id)?,
        Commands::Rm { id } => commands::remove(&ws, id)?,
        Commands::Parse { text } => commands::parse_line(&text.join(" "), &ws.config, format)?,
        Commands::Fmt { check } => commands::fmt(&ws, check)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
