//! Registry loading over HTTP against a throwaway local backend.

use archcraft_common::Project;
use archcraft_panel::source::HttpSource;
use archcraft_panel::ProjectRegistry;
use axum::{http::StatusCode, routing::get, Json, Router};

async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/projects", get(|| async {
            Json(vec![
                Project::new("Riverside", "Alice", "2024-03-01", "1:500"),
                Project::new("Hilltop", "Bob", "2024-03-02", "1:250"),
            ])
        }))
        .route("/broken", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .route("/garbage", get(|| async { "not json" }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_load_from_backend() {
    let base = spawn_backend().await;
    let mut registry = ProjectRegistry::new();
    assert!(registry.load(&HttpSource::new(format!("{}/projects", base))).await);
    assert_eq!(registry.count(), 2);
    assert_eq!(registry.records()[1].name, "Hilltop");
}

#[tokio::test]
async fn test_server_error_shows_load_failure() {
    let base = spawn_backend().await;
    let mut registry = ProjectRegistry::new();
    assert!(!registry.load(&HttpSource::new(format!("{}/broken", base))).await);
    assert_eq!(registry.count(), 0);
    assert!(registry.render().to_html().contains("No projects found or failed to load projects."));
}

#[tokio::test]
async fn test_malformed_body_is_load_failure() {
    let base = spawn_backend().await;
    let mut registry = ProjectRegistry::new();
    assert!(!registry.load(&HttpSource::new(format!("{}/garbage", base))).await);
    assert_eq!(registry.count(), 0);
}
