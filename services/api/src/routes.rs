use crate::infra::{AppState, ServiceDesk};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use recycleflow::workflows::talent::talent_router;
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_talent_routes(desk: Arc<ServiceDesk>) -> axum::Router {
    talent_router(desk)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{bootstrap_desk, InMemoryNotificationCenter};
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use recycleflow::workflows::talent::DeskSettings;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tower::ServiceExt;

    fn app(ready: bool) -> (axum::Router, Arc<InMemoryNotificationCenter>) {
        let notifications = Arc::new(InMemoryNotificationCenter::default());
        let desk = Arc::new(bootstrap_desk(
            Some(42),
            notifications.clone(),
            DeskSettings::default(),
        ));
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        state.readiness.store(ready, Ordering::Release);

        (with_talent_routes(desk).layer(Extension(state)), notifications)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request builds")
    }

    async fn read_json(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    #[tokio::test]
    async fn readiness_reflects_startup_flag() {
        let (starting, _) = app(false);
        let response = starting.oneshot(get("/ready")).await.expect("responds");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let (ready, _) = app(true);
        let response = ready.oneshot(get("/ready")).await.expect("responds");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await, json!({ "status": "ready" }));
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn talent_routes_are_mounted_next_to_service_endpoints() {
        let (router, notifications) = app(true);

        let response = router
            .clone()
            .oneshot(get("/api/v1/candidates/leaderboard"))
            .await
            .expect("responds");
        assert_eq!(response.status(), StatusCode::OK);
        let leaderboard = read_json(response).await;
        assert_eq!(leaderboard.as_array().map(Vec::len), Some(10));

        let response = router
            .oneshot(get("/api/v1/candidates/c5/share"))
            .await
            .expect("responds");
        let payload = read_json(response).await;
        assert_eq!(
            payload.get("link"),
            Some(&json!("http://127.0.0.1:3000/candidates/c5"))
        );
        assert_eq!(notifications.events().len(), 1);
    }
}
