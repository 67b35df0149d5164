use crate::cli::ServeArgs;
use crate::infra::{bootstrap_desk, AppState, InMemoryNotificationCenter};
use crate::routes::with_talent_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use recycleflow::config::AppConfig;
use recycleflow::error::AppError;
use recycleflow::telemetry;
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

    let notifications = Arc::new(InMemoryNotificationCenter::default());
    let desk = Arc::new(bootstrap_desk(
        config.talent.random_seed,
        notifications,
        config.desk_settings(),
    ));

    let app = with_talent_routes(desk)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        latency_ms = config.talent.evaluation_latency.as_millis() as u64,
        "talent desk ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
