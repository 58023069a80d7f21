use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use calc_server::{ServerConfig, app, commands, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Unit converters, financial calculators and calculator search.
///
/// `serve` runs the HTTP API; the other subcommands compute one result and
/// print it.
#[derive(Debug, Parser)]
#[command(name = "unitcalc", version, about)]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true, env = "UNITCALC_CONFIG")]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `calc_server=trace`. RUST_LOG wins.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP API.
    Serve {
        /// Address to listen on, e.g. `0.0.0.0:3000`.
        #[arg(long)]
        bind: Option<String>,

        /// Database connection string. For SQLite a file path or `:memory:`.
        #[arg(long)]
        database: Option<String>,

        /// Do not load the built-in catalogue into an empty index.
        #[arg(long)]
        no_seed: bool,
    },

    /// Convert a value between two units of one quantity.
    #[command(allow_negative_numbers = true)]
    Convert {
        /// Quantity, e.g. `length`, `temperature`, `fuel-economy`.
        quantity: String,
        value: String,
        from: String,
        to: String,
        #[arg(long, default_value_t = 6)]
        decimals: usize,
    },

    /// List quantities and their units.
    Units {
        quantity: Option<String>,
    },

    /// Print a reference table of common values.
    #[command(allow_negative_numbers = true)]
    Reference {
        quantity: String,
        from: String,
        to: String,
        /// Comma-separated sample values; defaults to 1,2,5,10,20,50,100.
        #[arg(long, value_delimiter = ',')]
        samples: Vec<f64>,
    },

    /// Compound annual growth rate.
    Cagr {
        initial: String,
        #[arg(value_name = "FINAL")]
        final_value: String,
        years: String,
    },

    /// Simple interest with a yearly projection. Rate is in percent.
    SimpleInterest {
        principal: String,
        rate: String,
        years: String,
    },

    /// Compound interest with optional contributions. Rate is in percent.
    CompoundInterest {
        principal: String,
        rate: String,
        years: u32,
        /// `annually`, `quarterly`, `monthly`, `daily`, ... or periods per year.
        #[arg(long, default_value = "monthly")]
        frequency: String,
        /// Deposit at the end of every compounding period.
        #[arg(long, default_value = "0")]
        contribution: String,
    },

    /// Distance covered by a number of steps.
    Steps {
        steps: f64,
        /// Stride length in meters.
        #[arg(long)]
        stride: Option<f64>,
        /// Height in centimeters, used to estimate the stride.
        #[arg(long)]
        height: Option<f64>,
        /// `male`, `female` or `unspecified`.
        #[arg(long, default_value = "unspecified")]
        sex: String,
    },

    /// Search the calculator index.
    Search {
        query: String,
        #[arg(long)]
        database: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
}

// ─── configuration ───────────────────────────────────────────────────────────

fn load_config(cli: &Cli) -> Result<ServerConfig> {
    let mut config = ServerConfig::load(cli.config.as_deref())?;
    config.apply_env(|key| std::env::var(key).ok())?;

    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    match &cli.command {
        Command::Serve {
            bind,
            database,
            no_seed,
        } => {
            if let Some(bind) = bind {
                config.bind = bind.clone();
            }
            if let Some(database) = database {
                config.database.connection_string = database.clone();
            }
            if *no_seed {
                config.seed_on_start = false;
            }
        }
        Command::Search {
            database, limit, ..
        } => {
            if let Some(database) = database {
                config.database.connection_string = database.clone();
            }
            if let Some(limit) = limit {
                config.search_limit = *limit;
            }
        }
        _ => {}
    }

    config.validate()?;
    Ok(config)
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging("warn");

    let cli = Cli::parse();
    let config = load_config(&cli).context("Invalid configuration")?;

    logging::set_log_level(&config.log_level)?;
    if let Some(path) = &config.log_file {
        logging::enable_file_logging(path)?;
    }
    debug!(?config, "configuration loaded");

    let output = match cli.command {
        Command::Serve { .. } => {
            info!(bind = %config.bind, database = %config.database.connection_string, "starting unitcalc");
            app::serve(&config).await?;
            return Ok(());
        }
        Command::Convert {
            quantity,
            value,
            from,
            to,
            decimals,
        } => commands::convert(&quantity, &value, &from, &to, decimals)?,
        Command::Units { quantity } => commands::units(quantity.as_deref())?,
        Command::Reference {
            quantity,
            from,
            to,
            samples,
        } => commands::reference(&quantity, &from, &to, &samples)?,
        Command::Cagr {
            initial,
            final_value,
            years,
        } => commands::cagr(&initial, &final_value, &years)?,
        Command::SimpleInterest {
            principal,
            rate,
            years,
        } => commands::simple_interest(&principal, &rate, &years)?,
        Command::CompoundInterest {
            principal,
            rate,
            years,
            frequency,
            contribution,
        } => commands::compound_interest(&principal, &rate, years, &frequency, &contribution)?,
        Command::Steps {
            steps,
            stride,
            height,
            sex,
        } => commands::steps(steps, stride, height, &sex)?,
        Command::Search { query, .. } => {
            let repo = app::open_repository(&config.database, config.seed_on_start).await?;
            commands::search(&*repo, &query, config.search_limit).await?
        }
    };

    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
