//! archcraft-panel — In-memory registries and server status for the ArchCraft admin panel.
//! Provides:
//!   - Project and user registries with create/view/edit/delete flows
//!   - A structured table view-model rendered to escaped HTML rows
//!   - The server status panel with its command state machine
//!   - Seams for record sources, status sources, and user dialogs

pub mod dialog;
pub mod source;
pub mod table;
pub mod registry;
pub mod projects;
pub mod users;
pub mod status;

use serde::Serialize;

pub use dialog::Dialogs;
pub use projects::{NewProject, ProjectRegistry};
pub use status::{ServerCommand, ServerState, StatusPanel, StatusSnapshot, StatusSource, SyntheticStatus};
pub use users::UserRegistry;

/// Read-only counters shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardCounts {
    pub projects: usize,
    pub zones: usize,
    pub users: usize,
}

/// Owns every registry and the status panel.
#[derive(Debug, Default)]
pub struct AdminPanel {
    pub projects: ProjectRegistry,
    pub users: UserRegistry,
    pub status: StatusPanel,
}

impl AdminPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary(&self) -> DashboardCounts {
        DashboardCounts {
            projects: self.projects.count(),
            zones: self.projects.zone_count(),
            users: self.users.count(),
        }
    }
}
