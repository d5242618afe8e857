use dotenvy::dotenv;
use snafu::ResultExt;
use tokio::net::TcpListener;

use channel_dashboard::dataset::Dataset;
use channel_dashboard::error::*;
use channel_dashboard::{api, config, logger};

#[tokio::main]
async fn main() -> Result<(), ApplicationError> {
    dotenv().ok();

    let config = config::load()?;

    let _guard = logger::init(&config)?;

    let dataset = Dataset::load(&config.data_dir).context(LoadDatasetSnafu)?;
    let app = api::create_app(dataset).context(LoadTemplatesSnafu)?;
    let router = api::create_router(app, &config);

    let address = config.host;
    let listener = TcpListener::bind(address)
        .await
        .context(BindAddressSnafu { address })?;

    tracing::info!("serving dashboard on http://{}", address);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context(WebServerSnafu)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?err, "unable to listen for the shutdown signal");
        std::future::pending::<()>().await;
    }

    tracing::info!("shutting down");
}
