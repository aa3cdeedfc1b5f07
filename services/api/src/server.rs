use crate::cli::ServeArgs;
use crate::infra::{load_catalog, server_state, AppState};
use crate::routes::with_operational_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use lanka_rent::config::AppConfig;
use lanka_rent::error::AppError;
use lanka_rent::marketplace::marketplace_router;
use lanka_rent::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = load_catalog(&config.catalog)?;
    info!(
        vehicles = catalog.vehicles().len(),
        materials = catalog.materials().len(),
        "catalog loaded"
    );
    let state = server_state(catalog);

    let app = with_operational_routes(marketplace_router(state))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "lanka rent marketplace ready");

    axum::serve(listener, app).await?;
    Ok(())
}
