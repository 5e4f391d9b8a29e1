//! Dataset I/O CLI - open, save and convert datasets through the I/O registry

mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use std::sync::Arc;
use tabled::{Table, Tabled};
use tracing::info;

use dataset_io_core::application::IoService;
use dataset_io_core::domain::Item;
use dataset_io_core::port::IoPlugin;
use dataset_io_infra_system::{wired_dataset_plugin, ExecutionConfig, FormatConfig};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "dataset-io")]
#[command(about = "Open and save datasets by identifier", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Upper bound on a single command wait, in milliseconds (0 = no limit)
    #[arg(long)]
    wait_timeout_ms: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show which plugins would open/save an identifier
    Probe {
        /// Source or destination identifier
        id: String,
    },

    /// Open a dataset and print a summary
    Info {
        /// Source identifier
        source: String,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Open a dataset and save it elsewhere
    Convert {
        /// Source identifier
        source: String,

        /// Destination identifier
        destination: String,
    },
}

#[derive(Tabled)]
struct ProbeRow {
    plugin: String,
    data_type: String,
    priority: String,
    open: String,
    save: String,
}

#[derive(Serialize)]
struct DatasetSummary {
    source: String,
    name: String,
    dims: Vec<usize>,
    samples: usize,
}

fn mark(supported: bool) -> String {
    if supported {
        "✓".green().to_string()
    } else {
        "✗".red().to_string()
    }
}

/// Wire the system adapters into the registry (DI wiring)
fn build_io_service(cli: &Cli) -> IoService {
    let mut execution = ExecutionConfig::from_env();
    if cli.wait_timeout_ms.is_some() {
        execution.wait_timeout_ms = cli.wait_timeout_ms.filter(|ms| *ms > 0);
    }
    let formats = FormatConfig::from_env();

    info!(
        wait_timeout_ms = ?execution.wait_timeout_ms,
        open_extensions = ?formats.open_extensions,
        save_extensions = ?formats.save_extensions,
        "Configuring I/O plugins"
    );

    let plugins: Vec<Arc<dyn IoPlugin>> =
        vec![Arc::new(wired_dataset_plugin(&execution, &formats))];
    IoService::new(plugins)
}

async fn open_dataset(io: &IoService, source: &str) -> Result<Item> {
    io.open(source)
        .await
        .with_context(|| format!("Failed to open {}", source))?
        .with_context(|| format!("No plugin could open {}", source))
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging()?;

    let cli = Cli::parse();
    info!("Dataset I/O v{} starting...", VERSION);

    let io = build_io_service(&cli);

    match &cli.command {
        Commands::Probe { id } => {
            let rows: Vec<ProbeRow> = io
                .plugins()
                .iter()
                .map(|plugin| ProbeRow {
                    plugin: plugin.name().to_string(),
                    data_type: plugin.data_type().to_string(),
                    priority: plugin.priority().to_string(),
                    open: mark(plugin.supports_open(id)),
                    save: mark(plugin.supports_save(id)),
                })
                .collect();

            println!("{}", format!("Plugins for {}", id).cyan().bold());
            println!();
            println!("{}", Table::new(rows));
        }

        Commands::Info { source, json } => {
            let item = open_dataset(&io, source).await?;
            let dataset = item
                .as_dataset()
                .with_context(|| format!("{} did not open as a dataset", source))?;

            let summary = DatasetSummary {
                source: source.clone(),
                name: dataset.name().to_string(),
                dims: dataset.dims().to_vec(),
                samples: dataset.len(),
            };

            if *json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", summary.name.cyan().bold());
                println!("  {} {}", "Source:".bold(), summary.source);
                println!("  {} {:?}", "Dims:".bold(), summary.dims);
                println!("  {} {}", "Samples:".bold(), summary.samples);
            }
        }

        Commands::Convert {
            source,
            destination,
        } => {
            let item = open_dataset(&io, source).await?;
            io.save(item, destination)
                .await
                .with_context(|| format!("Failed to save {}", destination))?;

            println!(
                "{}",
                format!("✓ Converted {} -> {}", source, destination)
                    .green()
                    .bold()
            );
        }
    }

    Ok(())
}
