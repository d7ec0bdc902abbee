use buyhere_api::{start_server, ApiState};
use buyhere_chain::ChainClient;
use buyhere_core::Registry;
use buyhere_geo::GeoClient;
use clap::Parser;
use owo_colors::OwoColorize;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "buyhered")]
#[command(about = "BuyHere API Server")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the listening port
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Debug, Default, Deserialize)]
struct Config {
    #[serde(default)]
    server: ServerConfig,
    #[serde(default)]
    geocoder: GeocoderConfig,
    #[serde(default)]
    solana: SolanaConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct ServerConfig {
    host: String,
    port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct GeocoderConfig {
    url: String,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        GeocoderConfig {
            url: buyhere_geo::DEFAULT_SEARCH_URL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct SolanaConfig {
    rpc_url: String,
    keypair_path: Option<PathBuf>,
}

impl Default for SolanaConfig {
    fn default() -> Self {
        SolanaConfig {
            rpc_url: buyhere_chain::DEFAULT_RPC_URL.to_string(),
            keypair_path: None,
        }
    }
}

fn load_config(path: &PathBuf) -> Result<Config, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents).unwrap_or_else(|_| Config::default());
    Ok(config)
}

fn print_banner(addr: &SocketAddr, config: &Config, sender: Option<&str>) {
    println!(
        "{}",
        "╔═══════════════════════════════════════════════════╗".cyan()
    );
    println!(
        "{}",
        "║                  BuyHere API                      ║".cyan().bold()
    );
    println!(
        "{}",
        "╚═══════════════════════════════════════════════════╝".cyan()
    );

    println!("\n{}: http://{}", "Listening".yellow().bold(), addr);
    println!("{}: {}", "Geocoder".yellow().bold(), config.geocoder.url);
    println!("{}: {}", "Solana RPC".yellow().bold(), config.solana.rpc_url);
    match sender {
        Some(pubkey) => println!("{}: {}", "Sender".yellow().bold(), pubkey),
        None => println!(
            "{}: {}",
            "Sender".yellow().bold(),
            "not configured".red()
        ),
    }
    println!();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let signer = match &config.solana.keypair_path {
        Some(path) => Some(ChainClient::load_keypair(path)?),
        None => {
            tracing::warn!("No signing keypair configured; /solana/send will fail until one is set");
            None
        }
    };

    let chain = ChainClient::new(config.solana.rpc_url.clone(), signer);
    let sender = chain.signer_pubkey().map(|pubkey| pubkey.to_string());
    let geo = GeoClient::new(config.geocoder.url.clone());

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    print_banner(&addr, &config, sender.as_deref());

    let state = ApiState::new(Registry::with_seed_data(), geo, chain);
    start_server(addr, state).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_config_is_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.geocoder.url, buyhere_geo::DEFAULT_SEARCH_URL);
        assert_eq!(config.solana.rpc_url, buyhere_chain::DEFAULT_RPC_URL);
        assert!(config.solana.keypair_path.is_none());
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 8080

            [solana]
            keypair_path = "/var/lib/buyhere/sender.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.solana.rpc_url, buyhere_chain::DEFAULT_RPC_URL);
        assert_eq!(
            config.solana.keypair_path,
            Some(PathBuf::from("/var/lib/buyhere/sender.json"))
        );
    }
}
