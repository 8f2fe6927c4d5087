//! MenuBoard - headless menu-board designer
//!
//! Lays out digital signage menu boards, estimates how many items a board
//! can hold and edits the menu files behind them.

use clap::{Parser, Subcommand};
use menuboard::cli::{
    CapacityArgs, CliError, ConfigArgs, DisplayArgs, ExitCode, ItemArgs, LayoutArgs,
};
use menuboard::config::{Config, DEFAULT_LOG_LEVEL};
use menuboard::constants::APP_NAME;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// MenuBoard - headless menu-board designer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lay out the board and print its columns
    Layout(LayoutArgs),
    /// Estimate how many items the board can hold
    Capacity(CapacityArgs),
    /// Manage menu items
    Item(ItemArgs),
    /// Manage published displays
    Display(DisplayArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        Config::load()
            .map(|config| config.ui.log_level)
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
    };

    // Logs go to stderr so JSON on stdout stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    tracing::debug!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    let result: Result<(), CliError> = match &cli.command {
        Commands::Layout(args) => args.execute(),
        Commands::Capacity(args) => args.execute(),
        Commands::Item(args) => args.execute(),
        Commands::Display(args) => args.execute(),
        Commands::Config(args) => args.execute(),
    };

    let code = match result {
        Ok(()) => ExitCode::Success.code(),
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    };
    std::process::exit(code);
}
