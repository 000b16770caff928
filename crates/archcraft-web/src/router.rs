//! Axum router — maps all URL paths to handlers.

use axum::{
    Router,
    routing::get,
};
use tower_http::{
    services::ServeDir,
    cors::CorsLayer,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use crate::state::SharedState;
use crate::handlers::{
    dashboard::dashboard,
    projects::{projects_page, project_create, project_view, project_edit, project_delete_prompt, project_delete},
    users::{users_page, user_view, user_edit, user_remove_prompt, user_remove},
    server::{command_prompt, command_submit},
    api::{api_status, api_projects, api_users},
};
use crate::sse;

/// Build and return the full Axum router.
pub fn build_router(state: SharedState) -> Router {
    let static_dir = state.config.server.static_dir.clone();

    Router::new()
        // Pages
        .route("/",                get(dashboard))
        .route("/projects",        get(projects_page).post(project_create))
        .route("/projects/view",   get(project_view))
        .route("/projects/edit",   get(project_edit))
        .route("/projects/delete", get(project_delete_prompt).post(project_delete))
        .route("/users",           get(users_page))
        .route("/users/view",      get(user_view))
        .route("/users/edit",      get(user_edit))
        .route("/users/remove",    get(user_remove_prompt).post(user_remove))
        .route("/server/command",  get(command_prompt).post(command_submit))

        // SSE streaming
        .route("/api/events", get(sse::events))

        // API endpoints
        .route("/api/status",   get(api_status))
        .route("/api/projects", get(api_projects))
        .route("/api/users",    get(api_users))

        // Static files
        .nest_service("/static", ServeDir::new(static_dir))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
