use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::activity::RECENT_ACTIVITY_LIMIT;
use super::desk::TalentDesk;
use super::domain::CandidateId;
use super::notify::NotificationPublisher;
use super::random::RandomSource;
use crate::error::AppError;

const DEFAULT_LEADERBOARD_LIMIT: usize = 10;

/// Router builder exposing the dashboard read models and the reassessment action.
pub fn talent_router<R, N>(desk: Arc<TalentDesk<R, N>>) -> Router
where
    R: RandomSource + 'static,
    N: NotificationPublisher + 'static,
{
    Router::new()
        .route("/api/v1/candidates", get(population_handler::<R, N>))
        .route(
            "/api/v1/candidates/leaderboard",
            get(leaderboard_handler::<R, N>),
        )
        .route(
            "/api/v1/candidates/:candidate_id",
            get(candidate_handler::<R, N>),
        )
        .route(
            "/api/v1/candidates/:candidate_id/evaluate",
            post(evaluate_handler::<R, N>),
        )
        .route(
            "/api/v1/candidates/:candidate_id/share",
            get(share_handler::<R, N>),
        )
        .route("/api/v1/skills/matrix", get(skill_matrix_handler::<R, N>))
        .route("/api/v1/activity", get(activity_handler::<R, N>))
        .route("/api/v1/status", get(status_handler::<R, N>))
        .with_state(desk)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LimitQuery {
    pub(crate) limit: Option<usize>,
}

pub(crate) async fn population_handler<R, N>(
    State(desk): State<Arc<TalentDesk<R, N>>>,
) -> Response
where
    R: RandomSource + 'static,
    N: NotificationPublisher + 'static,
{
    Json(desk.scored_population()).into_response()
}

pub(crate) async fn leaderboard_handler<R, N>(
    State(desk): State<Arc<TalentDesk<R, N>>>,
    Query(query): Query<LimitQuery>,
) -> Response
where
    R: RandomSource + 'static,
    N: NotificationPublisher + 'static,
{
    let limit = query.limit.unwrap_or(DEFAULT_LEADERBOARD_LIMIT);
    Json(desk.leaderboard(limit)).into_response()
}

pub(crate) async fn candidate_handler<R, N>(
    State(desk): State<Arc<TalentDesk<R, N>>>,
    Path(candidate_id): Path<String>,
) -> Result<Response, AppError>
where
    R: RandomSource + 'static,
    N: NotificationPublisher + 'static,
{
    let detail = desk.candidate(&CandidateId(candidate_id))?;
    Ok(Json(detail).into_response())
}

pub(crate) async fn evaluate_handler<R, N>(
    State(desk): State<Arc<TalentDesk<R, N>>>,
    Path(candidate_id): Path<String>,
) -> Response
where
    R: RandomSource + 'static,
    N: NotificationPublisher + 'static,
{
    let id = CandidateId(candidate_id);
    match desk.begin_evaluation(&id) {
        Ok(pending) => {
            let payload = json!({
                "candidate_id": pending.candidate_id(),
                "status": "evaluating",
            });
            // Detached so a dropped request cannot strand the busy marker.
            let _worker = desk.spawn_evaluation(pending);

            (StatusCode::ACCEPTED, Json(payload)).into_response()
        }
        Err(rejection) => {
            let payload = json!({
                "candidate_id": id,
                "status": "ignored",
                "reason": rejection.label(),
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn share_handler<R, N>(
    State(desk): State<Arc<TalentDesk<R, N>>>,
    Path(candidate_id): Path<String>,
) -> Result<Response, AppError>
where
    R: RandomSource + 'static,
    N: NotificationPublisher + 'static,
{
    let id = CandidateId(candidate_id);
    let link = desk.share(&id)?;
    Ok(Json(json!({ "candidate_id": id, "link": link })).into_response())
}

pub(crate) async fn skill_matrix_handler<R, N>(
    State(desk): State<Arc<TalentDesk<R, N>>>,
) -> Response
where
    R: RandomSource + 'static,
    N: NotificationPublisher + 'static,
{
    let matrix = desk.skill_matrix();
    Json(json!({
        "matrix": matrix,
        "chart": matrix.rows(),
    }))
    .into_response()
}

pub(crate) async fn activity_handler<R, N>(
    State(desk): State<Arc<TalentDesk<R, N>>>,
    Query(query): Query<LimitQuery>,
) -> Response
where
    R: RandomSource + 'static,
    N: NotificationPublisher + 'static,
{
    let limit = query.limit.unwrap_or(RECENT_ACTIVITY_LIMIT);
    Json(desk.recent_activity(limit)).into_response()
}

pub(crate) async fn status_handler<R, N>(State(desk): State<Arc<TalentDesk<R, N>>>) -> Response
where
    R: RandomSource + 'static,
    N: NotificationPublisher + 'static,
{
    Json(json!({ "evaluating": desk.evaluating() })).into_response()
}
