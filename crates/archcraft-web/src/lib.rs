//! archcraft-web — Web GUI for the ArchCraft admin panel
//! Provides a server administration dashboard with:
//!   - Live server status and control commands
//!   - Project registry table with create/view/edit/delete
//!   - User registry table with view/edit/remove
//!   - JSON views and a live event feed

pub mod router;
pub mod handlers;
pub mod state;
pub mod dialogs;
pub mod sse;
