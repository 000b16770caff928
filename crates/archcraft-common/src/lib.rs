//! archcraft-common — Shared records, errors, and formatting helpers used across all ArchCraft crates.

pub mod error;
pub mod entities;
pub mod escape;
pub mod uptime;

// Re-export commonly used types
pub use entities::{Project, User, Zone};
pub use error::{PanelError, Result};
pub use escape::escape_html;
pub use uptime::{format_uptime, time_between};
