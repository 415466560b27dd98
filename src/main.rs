//! Standalone Casdoor bridge server.

// std
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
// crates.io
use clap::Parser;
use color_eyre::Result;
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
// self
use casdoor_bridge::{CasdoorConfig, ReqwestCasdoorClient, config::load_env_file, endpoint};

/// Serve Casdoor login, signup, and callback routes.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
	/// Address to listen on.
	#[arg(long, env = "CASDOOR_BIND", default_value = "0.0.0.0:8000")]
	bind: SocketAddr,
	/// Environment file loaded before reading `CASDOOR_*` variables; defaults to `./.env`.
	#[arg(long)]
	env_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	tracing_subscriber::registry()
		.with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "casdoor_bridge=info".into()))
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();

	load_env_file(Cli::parse().env_file.as_deref())?;

	// Parse again so `CASDOOR_BIND` from the env file is visible to clap.
	let cli = Cli::parse();
	let config = CasdoorConfig::from_env()?;

	tracing::info!(
		endpoint = config.endpoint.as_str(),
		application = %config.application,
		"Loaded Casdoor configuration."
	);

	let client = Arc::new(ReqwestCasdoorClient::new(config)?);
	let listener = TcpListener::bind(cli.bind).await?;

	tracing::info!(addr = %listener.local_addr()?, "Casdoor bridge listening.");

	axum::serve(listener, endpoint::router(client))
		.with_graceful_shutdown(async {
			if let Err(e) = tokio::signal::ctrl_c().await {
				tracing::error!(error = %e, "Failed to listen for the shutdown signal.");
			}

			tracing::info!("Shutting down.");
		})
		.await?;

	Ok(())
}
