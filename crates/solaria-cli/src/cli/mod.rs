//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use solaria_core::config::Config;
use solaria_tui::RunOptions;

mod commands;

#[derive(Parser)]
#[command(name = "solaria")]
#[command(version = "0.1")]
#[command(about = "Solaria VC system-entry terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Jump straight to the main screen
    #[arg(long)]
    skip_boot: bool,

    /// Disable scramble reveals and the boot sequence
    #[arg(long)]
    reduced_motion: bool,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print the current market snapshot
    Feed,
    /// Print one generated news headline
    Headline,
    /// Join the priority-access list
    Subscribe {
        /// Email address to submit
        #[arg(value_name = "EMAIL")]
        email: String,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Show the path to the config file
    Path,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load().context("load config")?;

    // default to the full-screen UI
    let Some(command) = cli.command else {
        // The TUI owns the terminal, so logs go to a file under
        // ${SOLARIA_HOME}/logs instead of stderr.
        let _guard = solaria_core::logging::init().context("init logging")?;
        let options = RunOptions {
            skip_boot: cli.skip_boot,
            reduced_motion: cli.reduced_motion,
        };
        return solaria_tui::run(config, options).await;
    };

    match command {
        Commands::Feed => commands::feed::run(&config).await,
        Commands::Headline => commands::headline::run(&config).await,
        Commands::Subscribe { email } => commands::subscribe::run(&config, &email).await,
        Commands::Config { command } => match command {
            ConfigCommands::Show => commands::config::show(&config),
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
        },
    }
}
