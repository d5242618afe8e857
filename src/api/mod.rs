use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tower_livereload::LiveReloadLayer;

use crate::config::Config;

mod charts;
mod error;
mod page;
mod state;

pub use charts::SelectionQuery;
pub use error::*;
pub use state::*;

pub type Result<T, E = ApiError> = std::result::Result<T, E>;

pub fn create_router(app: App, config: &Config) -> Router {
    let router = Router::new()
        .route("/", get(page::index))
        .route("/api/channels", get(charts::channels))
        .route("/api/dashboard", get(charts::render))
        .route("/api/dashboard/:slot", get(charts::render_chart))
        .nest_service("/assets", ServeDir::new(&config.assets_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(app);

    if config.live_reload {
        tracing::info!("live reload is enabled");
        router.layer(LiveReloadLayer::new())
    } else {
        router
    }
}
