//! CLI Adapter.

mod output;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use url::Url;

use crate::app::api;
use crate::app::config::{ConfigOverrides, load_config};
use crate::app::logging;
use crate::domain::{AppError, InstanceId, InterfaceId, InventoryConfig};

#[derive(Parser)]
#[command(name = "eniscope")]
#[command(version)]
#[command(
    about = "Look up network interfaces and the instances they are attached to",
    long_about = None
)]
struct Cli {
    /// Configuration file (defaults to $ENISCOPE_CONFIG or ./eniscope.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Inventory gateway base URL
    #[arg(long, global = true, value_name = "URL", conflicts_with = "snapshot")]
    endpoint: Option<Url>,
    /// Serve lookups from a JSON inventory snapshot
    #[arg(long, global = true, value_name = "PATH")]
    snapshot: Option<PathBuf>,
    /// Provider region forwarded to the gateway
    #[arg(long, global = true)]
    region: Option<String>,
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List network interfaces with their attached instances (all when no IDs given)
    #[clap(visible_alias = "enis")]
    Interfaces {
        /// Interface IDs to resolve
        ids: Vec<InterfaceId>,
    },
    /// Show a single network interface
    #[clap(visible_alias = "eni")]
    Interface {
        /// Interface ID
        id: InterfaceId,
    },
    /// Show instances by ID
    Instances {
        /// Instance IDs to resolve
        #[arg(required = true)]
        ids: Vec<InstanceId>,
    },
    /// Show a single instance
    Instance {
        /// Instance ID
        id: InstanceId,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = execute(cli) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn execute(cli: Cli) -> Result<(), AppError> {
    let config = resolve_config(&cli)?;
    let json = cli.json;

    let lines = match cli.command {
        Commands::Interfaces { ids } => {
            let filter = (!ids.is_empty()).then_some(ids.as_slice());
            let interfaces = api::interfaces(&config, filter)?;
            if json {
                return print_json(&interfaces);
            }
            output::interface_lines(&interfaces)
        }
        Commands::Interface { id } => {
            let interface = api::interface(&config, &id)?;
            if json {
                return print_json(&interface);
            }
            output::interface_lines(std::slice::from_ref(&interface))
        }
        Commands::Instances { ids } => {
            let instances = api::instances(&config, &ids)?;
            if json {
                return print_json(&instances);
            }
            output::instance_lines(&instances)
        }
        Commands::Instance { id } => {
            let instance = api::instance(&config, &id)?;
            if json {
                return print_json(&instance);
            }
            output::instance_lines(std::slice::from_ref(&instance))
        }
    };

    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<InventoryConfig, AppError> {
    let mut config = load_config(cli.config.as_deref())?.inventory;
    ConfigOverrides {
        endpoint: cli.endpoint.clone(),
        snapshot: cli.snapshot.clone(),
        region: cli.region.clone(),
    }
    .apply(&mut config);
    Ok(config)
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    println!("{}", output::to_json(value)?);
    Ok(())
}
