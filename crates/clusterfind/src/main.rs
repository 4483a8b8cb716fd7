use anyhow::Result;
use clap::{Parser, Subcommand};

use clusterfind_common::{logger, AppConfig};

#[derive(Parser)]
#[command(name = "clusterfind")]
#[command(about = "Nearest-centroid cluster search service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value = "8080")]
        port: u16,

        /// API key clients must present in the x-api-key header
        #[arg(long)]
        api_key: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables early so CLI overrides land on top
    dotenv::dotenv().ok();

    match cli.command {
        Some(Commands::Serve {
            host,
            port,
            api_key,
        }) => {
            // CLI arguments override the environment
            std::env::set_var("SERVER_HOST", &host);
            std::env::set_var("SERVER_PORT", port.to_string());
            if let Some(key) = &api_key {
                std::env::set_var("API_KEY", key);
            }

            let config = AppConfig::from_env()?;
            logger::setup_logging(&config.log_dir, &config.log_level)?;

            tracing::info!("clusterfind starting...");
            tracing::info!("  Bind address: {}", config.server_bind_address());
            tracing::info!("  Log directory: {}", config.log_dir.display());

            println!("Server listening on http://{}", config.server_bind_address());

            clusterfind_server::start_server(config).await?;
        }
        None => {
            // Default: serve with environment configuration
            let config = AppConfig::from_env()?;
            logger::setup_logging(&config.log_dir, &config.log_level)?;

            tracing::info!("clusterfind starting with default configuration...");

            println!("Server listening on http://{}", config.server_bind_address());

            clusterfind_server::start_server(config).await?;
        }
    }

    Ok(())
}
