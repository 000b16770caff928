//! Server status card and server control commands.
//!
//! The status panel owns two things: the most recent [`StatusSnapshot`] and
//! the displayed [`ServerState`]. Refreshing replaces the snapshot only; the
//! state changes solely through acknowledged commands.

use std::fmt;
use std::str::FromStr;

use archcraft_common::{time_between, PanelError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::dialog::Dialogs;

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub address: String,
    pub version: String,
    pub started_at: DateTime<Utc>,
    pub observed_at: DateTime<Utc>,
    pub memory_used_gb: u32,
    pub memory_total_gb: u32,
    /// Ticks per second; 20.0 is a healthy server.
    pub tps: f64,
    pub online_players: u32,
    pub max_players: u32,
    pub loaded_worlds: u32,
}

impl StatusSnapshot {
    pub fn uptime(&self) -> String {
        time_between(self.started_at, self.observed_at)
    }

    pub fn memory_display(&self) -> String {
        format!("{}GB / {}GB", self.memory_used_gb, self.memory_total_gb)
    }

    pub fn tps_display(&self) -> String {
        format!("{:.1}", self.tps)
    }

    pub fn players_display(&self) -> String {
        format!("{} / {}", self.online_players, self.max_players)
    }
}

#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn snapshot(&self) -> Result<StatusSnapshot>;
}

/// Randomised placeholder metrics standing in for a live status feed.
#[derive(Debug, Clone)]
pub struct SyntheticStatus {
    pub address: String,
    pub version: String,
    pub memory_total_gb: u32,
    pub max_players: u32,
}

impl Default for SyntheticStatus {
    fn default() -> Self {
        Self {
            address: "play.archcraft.example.com".to_string(),
            version: "Paper 1.16.5".to_string(),
            memory_total_gb: 4,
            max_players: 20,
        }
    }
}

const WEEK_SECS: i64 = 7 * 24 * 60 * 60;

impl SyntheticStatus {
    pub fn sample(&self) -> StatusSnapshot {
        let mut rng = rand::thread_rng();
        let now = Utc::now();
        let started_at = now - Duration::seconds(rng.gen_range(0..WEEK_SECS));

        StatusSnapshot {
            address: self.address.clone(),
            version: self.version.clone(),
            started_at,
            observed_at: now,
            memory_used_gb: rng.gen_range(1..self.memory_total_gb.max(2)),
            memory_total_gb: self.memory_total_gb,
            tps: 20.0 - rng.gen::<f64>() * 0.5,
            online_players: rng.gen_range(0..=self.max_players.min(4)),
            max_players: self.max_players,
            loaded_worlds: rng.gen_range(1..=3),
        }
    }
}

#[async_trait]
impl StatusSource for SyntheticStatus {
    async fn snapshot(&self) -> Result<StatusSnapshot> {
        Ok(self.sample())
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerCommand {
    Restart,
    Stop,
    Backup,
}

impl ServerCommand {
    pub const ALL: [ServerCommand; 3] = [ServerCommand::Restart, ServerCommand::Stop, ServerCommand::Backup];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServerCommand::Restart => "restart",
            ServerCommand::Stop    => "stop",
            ServerCommand::Backup  => "backup",
        }
    }

    /// Question asked before destructive commands.
    pub fn confirmation(&self) -> Option<&'static str> {
        match self {
            ServerCommand::Restart => Some("Are you sure you want to restart the server? All players will be disconnected."),
            ServerCommand::Stop    => Some("Are you sure you want to stop the server? All players will be disconnected and the server will shut down."),
            ServerCommand::Backup  => None,
        }
    }

    pub fn acknowledgement(&self) -> &'static str {
        match self {
            ServerCommand::Restart => "Server restart initiated. This will take about 30 seconds.",
            ServerCommand::Stop    => "Server stopping. You will need to manually restart it.",
            ServerCommand::Backup  => "Backup process started. This will take a few minutes depending on world size.",
        }
    }
}

impl fmt::Display for ServerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServerCommand {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "restart" => Ok(ServerCommand::Restart),
            "stop"    => Ok(ServerCommand::Stop),
            "backup"  => Ok(ServerCommand::Backup),
            other     => Err(PanelError::UnknownCommand(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Panel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ServerState {
    #[default]
    Online,
    Offline,
}

impl ServerState {
    pub fn label(&self) -> &'static str {
        match self {
            ServerState::Online  => "Online",
            ServerState::Offline => "Offline",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            ServerState::Online  => "badge bg-success",
            ServerState::Offline => "badge bg-danger",
        }
    }
}

/// Display-ready status fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusView {
    pub state: ServerState,
    pub online: bool,
    pub address: String,
    pub version: String,
    pub uptime: String,
    pub memory: String,
    pub tps: String,
    pub players: String,
    pub loaded_worlds: u32,
}

#[derive(Debug, Clone, Default)]
pub struct StatusPanel {
    state: ServerState,
    snapshot: Option<StatusSnapshot>,
}

impl StatusPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ServerState {
        self.state
    }

    pub fn snapshot(&self) -> Option<&StatusSnapshot> {
        self.snapshot.as_ref()
    }

    /// Pull a fresh snapshot. A failing source keeps the previous one.
    pub async fn refresh(&mut self, source: &dyn StatusSource) -> bool {
        match source.snapshot().await {
            Ok(snapshot) => {
                self.apply(snapshot);
                true
            }
            Err(e) => {
                tracing::warn!("Status refresh failed: {}", e);
                false
            }
        }
    }

    /// Install an already-fetched snapshot.
    pub fn apply(&mut self, snapshot: StatusSnapshot) {
        self.snapshot = Some(snapshot);
    }

    pub fn view(&self) -> Option<StatusView> {
        self.snapshot.as_ref().map(|s| StatusView {
            state: self.state,
            online: self.state == ServerState::Online,
            address: s.address.clone(),
            version: s.version.clone(),
            uptime: s.uptime(),
            memory: s.memory_display(),
            tps: s.tps_display(),
            players: s.players_display(),
            loaded_worlds: s.loaded_worlds,
        })
    }

    /// Run a named command. `Ok(None)` when the operator declines.
    pub fn send_command(&mut self, command: &str, dialogs: &mut dyn Dialogs) -> Result<Option<ServerCommand>> {
        let command = match command.parse::<ServerCommand>() {
            Ok(c) => c,
            Err(e) => {
                dialogs.alert(&format!("Unknown command: {}", command));
                return Err(e);
            }
        };

        if let Some(question) = command.confirmation() {
            if !dialogs.confirm(question) {
                tracing::debug!(%command, "Server command declined");
                return Ok(None);
            }
        }

        tracing::info!(%command, "Server command acknowledged");
        dialogs.alert(command.acknowledgement());
        match command {
            ServerCommand::Stop    => self.state = ServerState::Offline,
            ServerCommand::Restart => self.state = ServerState::Online,
            ServerCommand::Backup  => {}
        }
        Ok(Some(command))
    }
}
