use std::path::PathBuf;

use anyhow::Result;
use clans::{config::Config, infrastructure::database, telemetry};
use clans_importer::import_clans;
use clap::Parser;
use dotenvy::dotenv;

// the sample ships at the workspace root, next to this crate
const DEFAULT_CSV_PATH: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/../data/clan_sample_data.csv");

/// Load clans from a CSV file into the clans database.
#[derive(Debug, Parser)]
#[command(name = "import", version)]
struct Args {
    /// CSV file with a `name` column and optional `region` / `created_at` columns
    #[arg(default_value = DEFAULT_CSV_PATH)]
    csv_path: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env()?;

    telemetry::init(config.debug);

    if !args.csv_path.exists() {
        eprintln!("Error: CSV file not found at {}", args.csv_path.display());
        std::process::exit(1);
    }

    println!("Importing clans from: {}", args.csv_path.display());

    let db = database::create_pool(&config.database).await?;
    let summary = import_clans(&db, &args.csv_path).await?;

    println!(
        "Import complete: {} imported, {} skipped",
        summary.imported, summary.skipped
    );

    Ok(())
}
