use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use payflow::application::orchestrator::PaymentOrchestrator;
use payflow::config::PaymentConfig;
use payflow::infrastructure::providers::default_registry;
use payflow::interfaces::csv::request_reader::PaymentRequestReader;
use payflow::interfaces::csv::result_writer::PaymentResultWriter;
use payflow::interfaces::http;
use std::fs::File;
use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Process every payment in a CSV file and print the results as CSV
    Process {
        /// Input CSV with an `amount,currency` header
        input: PathBuf,

        #[command(flatten)]
        providers: ProviderArgs,
    },
    /// Serve the payment API over HTTP
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1:8080")]
        addr: SocketAddr,

        #[command(flatten)]
        providers: ProviderArgs,
    },
}

#[derive(Args)]
struct ProviderArgs {
    /// Simulated provider latency in milliseconds
    #[arg(long, default_value_t = 50)]
    latency_ms: u64,

    /// Provider call timeout in milliseconds (0 disables it)
    #[arg(long, default_value_t = 5000)]
    timeout_ms: u64,
}

impl ProviderArgs {
    fn orchestrator(&self) -> Result<PaymentOrchestrator> {
        let config = PaymentConfig::from_millis(self.latency_ms, self.timeout_ms);
        let registry = default_registry(&config).into_diagnostic()?;
        registry.ensure_covers_policy().into_diagnostic()?;
        tracing::info!(providers = ?registry.names(), "providers registered");
        Ok(PaymentOrchestrator::new(Arc::new(registry))
            .with_provider_timeout(config.provider_timeout))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Process { input, providers } => {
            let orchestrator = providers.orchestrator()?;
            let file = File::open(input).into_diagnostic()?;
            let reader = PaymentRequestReader::new(file);

            let stdout = io::stdout();
            let mut writer = PaymentResultWriter::new(stdout.lock());
            for request in reader.requests() {
                let request = match request {
                    Ok(request) => request,
                    Err(e) => {
                        tracing::warn!("Error reading payment request: {}", e);
                        continue;
                    }
                };
                match orchestrator.execute(&request).await {
                    Ok(result) => writer.write_result(&result).into_diagnostic()?,
                    Err(e) => tracing::warn!("Error processing payment: {}", e),
                }
            }
            writer.flush().into_diagnostic()?;
        }
        Command::Serve { addr, providers } => {
            let orchestrator = Arc::new(providers.orchestrator()?);
            http::serve(addr, orchestrator).await.into_diagnostic()?;
        }
    }

    Ok(())
}
