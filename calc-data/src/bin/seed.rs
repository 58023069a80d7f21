use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use calc_data::CatalogSeeder;
use calc_db_sqlite::SqliteRepository;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Load the calculator catalogue into the search index.
///
/// Without `--file` the built-in catalogue is used. A CSV file must have the
/// columns `id,name,description,category,url,keywords`, with keywords
/// separated by `;` and an empty `url` meaning `/calculators/{id}`.
#[derive(Parser, Debug)]
#[command(name = "calc-seed")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a CSV file with calculator records
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// SQLite database path or URL; created if missing
    #[arg(short, long, default_value = "data/calculators.db")]
    database: String,

    /// Parse and validate the input without writing to the database
    #[arg(long, default_value_t = false)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args = Args::parse();

    let calculators = match &args.file {
        Some(path) => {
            println!("Loading calculators from: {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("Failed to open: {}", path.display()))?;
            CatalogSeeder::parse(file)
                .with_context(|| format!("Failed to parse CSV: {}", path.display()))?
        }
        None => CatalogSeeder::builtin(),
    };

    println!("Parsed {} calculators", calculators.len());

    if args.dry_run {
        CatalogSeeder::validate(&calculators).context("Catalogue failed validation")?;
        println!("Dry run: catalogue is valid, nothing written.");
        return Ok(());
    }

    let repo = SqliteRepository::new(&args.database)
        .await
        .with_context(|| format!("Failed to connect to database: {}", args.database))?;
    repo.run_migrations()
        .await
        .context("Failed to run migrations")?;

    let inserted = CatalogSeeder::seed(&repo, &calculators)
        .await
        .context("Failed to seed calculator index")?;

    println!(
        "Successfully loaded {} calculators into {}.",
        inserted, args.database
    );

    Ok(())
}
