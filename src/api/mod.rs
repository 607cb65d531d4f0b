pub mod error;
pub mod inventory;
pub mod status;

use axum::{
    http::{Method, StatusCode},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::{config::Config, state::AppState};

/// Routes only, no middleware.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/status", get(status::get_status))
        .route("/inventory", get(inventory::list_items))
        .route("/inventory/:id", get(inventory::get_item))
        .with_state(state)
}

pub fn router(state: AppState, cfg: &Config) -> Router {
    let mut router = routes(state);

    if cfg.server.enable_cors {
        use tower_http::cors::Any;
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET])
            .allow_headers(Any);
        router = router.layer(cors);
    }

    // A burn never yields, so the timeout can only fire once it is done.
    if let Some(secs) = cfg.server.request_timeout_secs {
        router = router.layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(secs),
        ));
    }

    router.layer(TraceLayer::new_for_http())
}

#[cfg(feature = "metrics")]
pub fn with_metrics(app: Router) -> Router {
    use axum_prometheus::PrometheusMetricLayer;
    let (layer, handle) = PrometheusMetricLayer::pair();

    let metrics_router =
        Router::new().route("/metrics", get(move || async move { handle.render() }));

    app.layer(layer).merge(metrics_router)
}
