use anyhow::Context;
use clap::Parser;
use ups_rate::config::OutputFormat;
use ups_rate::core::catalog::packaging_name;
use ups_rate::utils::error::ErrorCategory;
use ups_rate::utils::{logger, validation::Validate};
use ups_rate::{
    CliConfig, ClientConfig, HttpRateGateway, RateClient, RateError, RateReport, ShipmentFile,
};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting ups-rate CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let report = match run(&cli).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("❌ Rating failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e);
            std::process::exit(exit_code(&e));
        }
    };

    if let Err(e) = print_report(&report, cli.output) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &CliConfig) -> ups_rate::Result<RateReport> {
    let config = ClientConfig::from_file(&cli.config)?;
    config.validate()?;

    let shipment = ShipmentFile::from_file(&cli.shipment)?;
    shipment.validate()?;

    let packaging_type = cli
        .packaging_type
        .clone()
        .unwrap_or_else(|| shipment.packaging_type.clone());
    if packaging_name(&packaging_type).is_none() {
        tracing::warn!("Packaging type {} is not a known carrier code", packaging_type);
    }

    let gateway = HttpRateGateway::new(
        config.gateway.endpoint.clone(),
        config.credentials.clone(),
        config.gateway.timeout(),
    )
    .map_err(|e| RateError::ConfigError {
        message: format!("cannot create HTTP client: {}", e),
    })?;

    let client =
        RateClient::with_settings(gateway, config.credentials, config.units, config.request);
    client
        .rate(
            &shipment.packages,
            &shipment.shipper,
            &shipment.recipient,
            &packaging_type,
        )
        .await
}

fn print_report(report: &RateReport, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(report).context("rendering rate report as JSON")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!("Status: {}", report.status);
            for quote in &report.quotes {
                println!(
                    "  {:<32} {:>10} {}",
                    quote.service, quote.cost, quote.currency
                );
            }
        }
    }
    Ok(())
}

// 根據錯誤類別決定退出碼
fn exit_code(error: &RateError) -> i32 {
    match error.category() {
        ErrorCategory::Validation | ErrorCategory::Configuration => 2,
        ErrorCategory::Contract => 3,
        ErrorCategory::Carrier | ErrorCategory::Transport => 1,
    }
}
