//! Toy robot simulator: console front-end.
//!
//! Reads commands from a script file or stdin, feeds them to a [`Table`] and
//! prints every response. Logs go to stderr so stdout carries only responses.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;
use toy_robot::console::{self, ConsoleOptions};
use toy_robot::{Config, MapStyle, Table};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Toy robot simulator on a bounded grid table
#[derive(Parser, Debug)]
#[command(name = "toy-robot")]
#[command(version)]
#[command(
    about = "Drive a toy robot around a table with PLACE, MOVE, LEFT, RIGHT and REPORT",
    long_about = None
)]
struct Cli {
    /// Command file to run; reads stdin when omitted
    script: Option<PathBuf>,

    /// TOML config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Table width (overrides config)
    #[arg(long)]
    width: Option<u32>,

    /// Table height (overrides config)
    #[arg(long)]
    height: Option<u32>,

    /// Print the table map after every command
    #[arg(long)]
    map: bool,

    /// Map glyph set (overrides config)
    #[arg(long, value_enum)]
    map_style: Option<StyleArg>,

    /// Log level: trace, debug, info, warn, error (RUST_LOG takes precedence)
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum StyleArg {
    Emoji,
    Ascii,
}

impl From<StyleArg> for MapStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Emoji => MapStyle::Emoji,
            StyleArg::Ascii => MapStyle::Ascii,
        }
    }
}

impl Cli {
    /// Applies flags on top of the file configuration.
    fn resolve(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => Config::default(),
        };
        if let Some(width) = self.width {
            config.table.width = width;
        }
        if let Some(height) = self.height {
            config.table.height = height;
        }
        if self.map {
            config.table.show_map = true;
        }
        if let Some(style) = self.map_style {
            config.table.map_style = style.into();
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve()?;

    // Precedence: RUST_LOG env var > --log-level > config file > "warn"
    let default_filter = format!("toy_robot={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut table = Table::new(config.table.clone()).context("invalid table configuration")?;
    tracing::info!(width = table.width(), height = table.height(), "table ready");

    let show_map = config.table.show_map;
    let stdout = io::stdout().lock();
    match &cli.script {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            let options = ConsoleOptions {
                prompt: false,
                show_map,
            };
            console::run(&mut table, BufReader::new(file), stdout, options)?;
        }
        None => {
            let stdin = io::stdin();
            let options = ConsoleOptions {
                prompt: stdin.is_terminal(),
                show_map,
            };
            console::run(&mut table, stdin.lock(), stdout, options)?;
        }
    }

    Ok(())
}
