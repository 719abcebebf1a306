//! API server entry point.

use std::process::ExitCode;

use metrics_exporter_prometheus::PrometheusBuilder;
use sbom_api::config::{Config, LogFormat};
use sbom_api::{routes, server};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // 1. Load configuration and initialize tracing
    let config = Config::from_env();
    init_tracing(&config);

    // 2. Install Prometheus metrics recorder
    let metrics_handle = match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => handle,
        Err(error) => {
            tracing::error!(%error, "failed to install Prometheus recorder");
            return ExitCode::FAILURE;
        }
    };
    routes::metrics::describe();

    // 3. Build the application
    let app = sbom_api::create_app(metrics_handle);

    // 4. Bind before accepting anything; a taken port is fatal
    let addr = config.addr();
    tracing::info!(%addr, "starting SBOM API server");
    let listener = match server::bind(&addr).await {
        Ok(listener) => listener,
        Err(error) => {
            tracing::error!(%error, "startup failed");
            return ExitCode::FAILURE;
        }
    };

    // 5. Serve until SIGINT/SIGTERM
    if let Err(error) = server::serve(listener, app, server::shutdown_signal()).await {
        tracing::error!(%error, "server stopped");
        return ExitCode::FAILURE;
    }

    tracing::info!("server shut down gracefully");
    ExitCode::SUCCESS
}
