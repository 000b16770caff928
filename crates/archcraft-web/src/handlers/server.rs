//! Server control commands — restart, stop, backup.

use axum::{
    extract::{Query, State},
    response::Html,
    Form,
};
use serde::Deserialize;

use super::dashboard::render_dashboard;
use super::render_confirm;
use crate::dialogs::PageDialogs;
use crate::state::{AppEvent, SharedState};

#[derive(Debug, Deserialize)]
pub struct CommandQuery {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CommandForm {
    pub name: String,
    #[serde(default)]
    pub confirmed: bool,
}

/// Commands that need confirmation render a confirm page; the rest run now.
pub async fn command_prompt(
    State(state): State<SharedState>,
    Query(q): Query<CommandQuery>,
) -> Html<String> {
    let mut dialogs = PageDialogs::asking();
    let result = state.panel.write().await.status.send_command(&q.name, &mut dialogs);

    if let Some(question) = dialogs.pending_confirmation() {
        return Html(render_confirm("Server Command", question, "/server/command", "name", &q.name, "/"));
    }
    finish(&state, result, &dialogs).await
}

pub async fn command_submit(
    State(state): State<SharedState>,
    Form(form): Form<CommandForm>,
) -> Html<String> {
    let mut dialogs = PageDialogs::answered(form.confirmed);
    let result = state.panel.write().await.status.send_command(&form.name, &mut dialogs);
    finish(&state, result, &dialogs).await
}

async fn finish(
    state: &SharedState,
    result: archcraft_common::Result<Option<archcraft_panel::ServerCommand>>,
    dialogs: &PageDialogs,
) -> Html<String> {
    let panel = state.panel.read().await;
    let status = panel.status.view();
    let counts = panel.summary();
    let online = panel.status.state() == archcraft_panel::ServerState::Online;
    drop(panel);

    if let Ok(Some(command)) = &result {
        state.publish(AppEvent::ServerCommand { command: command.to_string(), online });
    }

    // The browser is still on /server/command; refreshing it would resend the command.
    Html(render_dashboard(
        status.as_ref(),
        counts,
        state.config.server.refresh_interval_secs,
        false,
        &dialogs.notices_html(result.is_err()),
    ))
}
