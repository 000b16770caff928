//! JSON views of panel state.

use archcraft_common::{Project, User};
use archcraft_panel::status::StatusView;
use archcraft_panel::DashboardCounts;
use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: Option<StatusView>,
    pub counts: DashboardCounts,
}

pub async fn api_status(State(state): State<SharedState>) -> Json<StatusResponse> {
    let panel = state.panel.read().await;
    Json(StatusResponse {
        status: panel.status.view(),
        counts: panel.summary(),
    })
}

pub async fn api_projects(State(state): State<SharedState>) -> Json<Vec<Project>> {
    Json(state.panel.read().await.projects.records().to_vec())
}

pub async fn api_users(State(state): State<SharedState>) -> Json<Vec<User>> {
    Json(state.panel.read().await.users.records().to_vec())
}
