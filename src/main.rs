//! wallet-height CLI
//!
//! Native front end over the wallet session. Wallet "injection points" are
//! JSON-RPC endpoints that answer the EIP-1193 vocabulary (for example a
//! local dev node with unlocked accounts).
//!
//! ```text
//! config file + flags
//!     → endpoint pick (local / random candidate / override)
//!     → WalletSession { InjectionPoints, RpcNetworkClient, ConsoleView }
//!     → connect → check_block_height
//! ```

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::path::PathBuf;
    use std::process::ExitCode;
    use std::time::Duration;

    use clap::{Parser, Subcommand};

    use wallet_height::chain::RpcNetworkClient;
    use wallet_height::config::validation::validate_config;
    use wallet_height::config::{load_config, resolve_rpc_endpoint, AppConfig, ConfigError};
    use wallet_height::observability::logging::init_logging;
    use wallet_height::session::{ConsoleView, WalletSession};
    use wallet_height::wallet::InjectionPoints;

    #[derive(Parser)]
    #[command(name = "wallet-height")]
    #[command(about = "Connect a Web3 wallet and report the current block height", long_about = None)]
    struct Cli {
        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Host the session runs under; localhost selects the local endpoint
        #[arg(long)]
        hostname: Option<String>,

        /// Fixed RPC endpoint, skipping environment detection
        #[arg(long)]
        rpc_url: Option<String>,

        /// Generic wallet provider endpoint
        #[arg(long)]
        wallet_url: Option<String>,

        /// Phantom wallet provider endpoint (preferred over --wallet-url)
        #[arg(long)]
        phantom_url: Option<String>,

        #[command(subcommand)]
        command: Commands,
    }

    #[derive(Subcommand)]
    enum Commands {
        /// Connect the wallet and show the account
        Connect,
        /// Connect, switch the wallet to the target chain, read the block height
        BlockHeight,
        /// Print the resolved RPC endpoint
        Endpoint,
    }

    fn build_config(cli: &Cli) -> Result<AppConfig, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => load_config(path)?,
            None => AppConfig::default(),
        };

        if cli.hostname.is_some() {
            config.network.hostname = cli.hostname.clone();
        }
        if cli.rpc_url.is_some() {
            config.network.rpc_url = cli.rpc_url.clone();
        }
        if cli.wallet_url.is_some() {
            config.wallet.ethereum_url = cli.wallet_url.clone();
        }
        if cli.phantom_url.is_some() {
            config.wallet.phantom_url = cli.phantom_url.clone();
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }

    #[tokio::main(flavor = "current_thread")]
    pub async fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
        let cli = Cli::parse();
        let config = build_config(&cli)?;

        if let Err(e) = init_logging(&config.logging) {
            eprintln!("Logging already initialized: {}", e);
        }

        let endpoint = resolve_rpc_endpoint(
            config.network.hostname.as_deref(),
            &config.network,
            &mut rand::thread_rng(),
        );

        tracing::info!(
            rpc_url = %endpoint.url,
            source = ?endpoint.source,
            hostname = ?config.network.hostname,
            "RPC endpoint selected"
        );

        if let Commands::Endpoint = cli.command {
            println!("{}", endpoint.url);
            return Ok(ExitCode::SUCCESS);
        }

        let timeout = Duration::from_secs(config.network.request_timeout_secs);
        let network = RpcNetworkClient::new(&endpoint.url, timeout)?;
        let injection = InjectionPoints::from_config(&config.wallet, timeout);

        let mut session = WalletSession::new(Box::new(injection), Box::new(network), ConsoleView);

        if session.connect().await.is_err() {
            return Ok(ExitCode::FAILURE);
        }

        if let Commands::BlockHeight = cli.command {
            if session.check_block_height().await.is_err() {
                return Ok(ExitCode::FAILURE);
            }
        }

        Ok(ExitCode::SUCCESS)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_flags_override_defaults() {
            let cli = Cli::parse_from([
                "wallet-height",
                "--hostname",
                "localhost",
                "--wallet-url",
                "http://127.0.0.1:8545",
                "block-height",
            ]);
            let config = build_config(&cli).unwrap();
            assert_eq!(config.network.hostname.as_deref(), Some("localhost"));
            assert_eq!(config.wallet.ethereum_url.as_deref(), Some("http://127.0.0.1:8545"));
            assert!(matches!(cli.command, Commands::BlockHeight));
        }

        #[test]
        fn test_invalid_flag_url_rejected() {
            let cli = Cli::parse_from(["wallet-height", "--rpc-url", "polygon", "endpoint"]);
            assert!(matches!(build_config(&cli), Err(ConfigError::Validation(_))));
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<std::process::ExitCode, Box<dyn std::error::Error>> {
    cli::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {}
