pub mod shipment;
pub mod toml_config;

pub use shipment::ShipmentFile;
pub use toml_config::{ClientConfig, GatewayConfig};

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "ups-rate")]
#[command(about = "Fetch UPS shipping rates for a shipment")]
pub struct CliConfig {
    #[arg(
        long,
        default_value = "ups.toml",
        help = "Client configuration (credentials, units, gateway)"
    )]
    pub config: String,

    #[arg(long, help = "Shipment description (addresses and packages)")]
    pub shipment: String,

    #[arg(long, help = "Override the packaging type code from the shipment file")]
    pub packaging_type: Option<String>,

    #[arg(long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}
