use crate::error::CliError;
use clap::Parser;
use commands::Commands;
use connectors::{adapter::StoreAdapter, sql::postgres::adapter::PgAdapter};
use engine::{generator, resolve};
use model::core::context::AmbientContext;
use statement::dialect::{BigQuery, Dialect, Postgres};
use tracing::{Level, info};

mod commands;
mod error;

#[derive(Parser)]
#[command(
    name = "mergekit",
    version = "0.1.0",
    about = "Schema-driven MERGE statement generator"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Initialize logger
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Merge {
            target,
            source,
            keys,
            options,
            conn_str,
        } => {
            let adapter = PgAdapter::connect(&conn_str).await?;
            let options = parse_options(options.as_deref())?;
            let status =
                generator::generate_and_execute(&adapter, &target, &source, &keys, options).await?;
            println!("{status}");
        }
        Commands::Render {
            target,
            source,
            keys,
            options,
            conn_str,
            dialect,
        } => {
            let adapter = PgAdapter::connect(&conn_str).await?;
            let options = parse_options(options.as_deref())?;
            let generated = generator::generate(&adapter, &target, &source, &keys, options).await?;
            let dialect = parse_dialect(&dialect)?;
            println!("{}", generated.render(dialect.as_ref()));
        }
        Commands::Columns {
            table,
            conn_str,
            output,
        } => {
            let adapter = PgAdapter::connect(&conn_str).await?;
            let ambient = AmbientContext::new(adapter.current_catalog().await?);
            let reference = resolve::resolve(&table, &ambient);
            let columns = adapter.table_columns(&reference).await?;

            let columns_json =
                serde_json::to_string_pretty(&columns).map_err(CliError::JsonSerialize)?;

            if let Some(output_file) = output {
                std::fs::write(output_file, columns_json)?;
            } else {
                println!("{columns_json}");
            }
        }
        Commands::TestConn { conn_str } => {
            let adapter = PgAdapter::connect(&conn_str).await?;
            let catalog = adapter.current_catalog().await?;
            info!("Connection OK, current catalog: {catalog}");
        }
    }

    Ok(())
}

fn parse_options(raw: Option<&str>) -> Result<Option<serde_json::Value>, CliError> {
    match raw {
        None => Ok(None),
        Some(text) => {
            let value = serde_json::from_str(text).map_err(CliError::OptionsParse)?;
            Ok(Some(value))
        }
    }
}

fn parse_dialect(name: &str) -> Result<Box<dyn Dialect>, CliError> {
    match name.to_ascii_lowercase().as_str() {
        "postgres" | "pg" => Ok(Box::new(Postgres)),
        "bigquery" | "bq" => Ok(Box::new(BigQuery)),
        other => Err(CliError::UnknownDialect(other.to_string())),
    }
}
