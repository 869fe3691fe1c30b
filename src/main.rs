use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use tabledef::commands;
use tabledef::config::{self, OutputArgs};
use tabledef::constants::CONFIG_FILENAME;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value = CONFIG_FILENAME, global = true)]
    config_file: String,

    /// Enable verbose output (info level)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Suppress all non-essential output (error level only)
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    /// Enable debug output (debug level)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print CREATE TABLE statements for the configured tables
    Render {
        /// Render only this table
        #[arg(long)]
        table: Option<String>,

        #[command(flatten)]
        output_args: OutputArgs,
    },

    /// Check every configured table definition
    Validate,

    /// Show the kind and SQL literal of a JSON value
    Literal {
        /// JSON value, e.g. '[1, 2, 3]' or '{"a": 1}'
        value: String,
    },
}

fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    initialize_logging(&cli);
    run_main(cli)
}

fn initialize_logging(cli: &Cli) {
    let level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else if cli.quiet {
        "error"
    } else {
        "warn" // default level
    };

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level)
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run_main(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Literal { value } => commands::cmd_literal(value),
        _ => {
            let file_config = config::load_config(&cli.config_file)?;

            match &cli.command {
                Commands::Literal { .. } => unreachable!(),
                Commands::Render { table, output_args } => {
                    let cli_config = config::ConfigInput {
                        tables: None,
                        output: Some(output_args.clone().into()),
                    };

                    let config = config::ConfigBuilder::new()
                        .with_file(file_config)
                        .with_cli_args(cli_config)
                        .resolve()?;
                    debug!("Resolved {} table(s)", config.tables.len());

                    commands::cmd_render(&config, table.as_deref())
                }
                Commands::Validate => {
                    let config = config::ConfigBuilder::new()
                        .with_file(file_config)
                        .resolve()?;

                    commands::cmd_validate(&config)
                }
            }
        }
    }
}
