//! Shared application state for the web server.

use std::sync::Arc;

use archcraft_common::{Project, User};
use archcraft_config::Config;
use archcraft_panel::source::{DataSource, EmptySource, HttpSource};
use archcraft_panel::{AdminPanel, StatusSource, SyntheticStatus};
use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, RwLock};
use tokio::task::JoinHandle;

/// Events pushed to connected clients via SSE.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    /// A project was added through the form
    ProjectCreated { name: String, count: usize },
    /// A project was deleted
    ProjectDeleted { name: String, count: usize },
    /// A user was removed
    UserRemoved { id: String, count: usize },
    /// Server command acknowledged
    ServerCommand { command: String, online: bool },
    /// Status snapshot replaced
    StatusRefreshed { online: bool, uptime: String },
}

impl AppEvent {
    /// The serialised `type` tag, used as the SSE event name.
    pub fn kind(&self) -> &'static str {
        match self {
            AppEvent::ProjectCreated { .. } => "project_created",
            AppEvent::ProjectDeleted { .. } => "project_deleted",
            AppEvent::UserRemoved { .. } => "user_removed",
            AppEvent::ServerCommand { .. } => "server_command",
            AppEvent::StatusRefreshed { .. } => "status_refreshed",
        }
    }
}

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub panel: RwLock<AdminPanel>,
    pub config: Config,
    pub status_source: Arc<dyn StatusSource>,
    /// Broadcast channel for SSE push events
    pub event_tx: broadcast::Sender<AppEvent>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(config: Config, panel: AdminPanel, status_source: Arc<dyn StatusSource>) -> Self {
        let (event_tx, _) = broadcast::channel(256);
        Self { panel: RwLock::new(panel), config, status_source, event_tx }
    }

    /// Build state from configuration: load both registries once and take
    /// the first status snapshot.
    pub async fn from_config(config: Config) -> Self {
        let projects: Box<dyn DataSource<Project>> = match &config.data.projects_url {
            Some(url) => Box::new(HttpSource::new(url.clone())),
            None      => Box::new(EmptySource),
        };
        let users: Box<dyn DataSource<User>> = match &config.data.users_url {
            Some(url) => Box::new(HttpSource::new(url.clone())),
            None      => Box::new(EmptySource),
        };
        let status_source: Arc<dyn StatusSource> = Arc::new(SyntheticStatus {
            address:         config.minecraft.address.clone(),
            version:         config.minecraft.version.clone(),
            memory_total_gb: config.minecraft.memory_total_gb,
            max_players:     config.minecraft.max_players,
        });

        let mut panel = AdminPanel::new();
        panel.projects.load(projects.as_ref()).await;
        panel.users.load(users.as_ref()).await;
        panel.status.refresh(status_source.as_ref()).await;

        Self::new(config, panel, status_source)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.event_tx.subscribe()
    }

    /// Send to subscribers; having none is not an error.
    pub fn publish(&self, event: AppEvent) {
        let _ = self.event_tx.send(event);
    }

    /// Replace the status snapshot from the configured source.
    ///
    /// The source is awaited before the panel lock is taken, so a slow
    /// status feed never stalls page handlers.
    pub async fn refresh_status(&self) -> bool {
        let snapshot = match self.status_source.snapshot().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!("Status refresh failed: {}", e);
                return false;
            }
        };

        let view = {
            let mut panel = self.panel.write().await;
            panel.status.apply(snapshot);
            panel.status.view()
        };
        if let Some(view) = view {
            self.publish(AppEvent::StatusRefreshed { online: view.online, uptime: view.uptime });
        }
        true
    }
}

/// Refresh status every `server.refresh_interval_secs`. The startup refresh
/// already happened in [`AppState::from_config`], so the first tick is skipped.
pub fn spawn_status_refresher(state: SharedState) -> JoinHandle<()> {
    let period = state.config.server.refresh_interval();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.tick().await;
        loop {
            interval.tick().await;
            tracing::debug!("Refreshing server status");
            state.refresh_status().await;
        }
    })
}
