//! Avri API server binary.
//!
//! Loads the static dataset, then serves the REST API and the pre-built
//! front-end bundle until the process is stopped.

use std::path::PathBuf;
use std::sync::Arc;

use avri_core::Dataset;
use axum::ServiceExt;
use axum::extract::Request;
use clap::Parser;
use tracing::info;

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "avri_api_server", about = "Avri chat API server")]
struct Args {
    /// Interface to listen on.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on (0 = ephemeral).
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,

    /// Directory holding chats.json, messages.json and users.json.
    #[arg(long, env = "DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Directory of the pre-built front-end bundle.
    #[arg(long, env = "FRONTEND_DIR", default_value = "dist/avri")]
    frontend_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,avri_api=debug,avri_core=debug".into()),
        )
        .init();

    let args = Args::parse();

    info!(
        version = avri_core::version(),
        data_dir = %args.data_dir.display(),
        frontend_dir = %args.frontend_dir.display(),
        "starting avri_api_server"
    );

    let dataset = Dataset::load(&args.data_dir)?;

    let config = avri_api::config::ApiConfig {
        bind_addr: format!("{}:{}", args.host, args.port),
        data_dir: args.data_dir,
        frontend_dir: args.frontend_dir,
    };

    let state = avri_api::AppState {
        dataset: Arc::new(dataset),
        config: config.clone(),
    };

    let app = avri_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;

    info!(addr = %local_addr, "REST API listening");
    info!("API corriendo en http://localhost:{}", local_addr.port());

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
