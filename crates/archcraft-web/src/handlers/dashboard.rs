//! Dashboard handler — landing page with server status, counts, and server controls.

use archcraft_common::escape_html;
use archcraft_panel::status::StatusView;
use archcraft_panel::DashboardCounts;
use axum::{extract::State, response::Html};

use super::render_page;
use crate::state::SharedState;

pub async fn dashboard(State(state): State<SharedState>) -> Html<String> {
    let panel = state.panel.read().await;
    let status = panel.status.view();
    let counts = panel.summary();
    drop(panel);

    Html(render_dashboard(status.as_ref(), counts, state.config.server.refresh_interval_secs, true, ""))
}

/// Dashboard markup. `notices` is pre-rendered alert HTML.
///
/// `auto_refresh` adds a meta refresh of the current URL, so it must only be
/// set when that URL is `/`.
pub(crate) fn render_dashboard(
    status: Option<&StatusView>,
    counts: DashboardCounts,
    refresh_secs: u64,
    auto_refresh: bool,
    notices: &str,
) -> String {
    let status_html = match status {
        Some(s) => format!(r#"
            <table class="table table-sm mb-0">
                <tr><th>Status</th><td><span id="serverStatus" class="{}">{}</span></td></tr>
                <tr><th>Address</th><td id="serverAddress">{}</td></tr>
                <tr><th>Version</th><td id="serverVersion">{}</td></tr>
                <tr><th>Uptime</th><td id="serverUptime">{}</td></tr>
                <tr><th>Memory</th><td id="memoryUsage">{}</td></tr>
                <tr><th>TPS</th><td id="serverTPS">{}</td></tr>
                <tr><th>Players</th><td id="onlinePlayers">{}</td></tr>
                <tr><th>Worlds</th><td id="loadedWorlds">{}</td></tr>
            </table>"#,
            s.state.badge_class(), s.state.label(),
            escape_html(s.address.as_str()),
            escape_html(s.version.as_str()),
            s.uptime, s.memory, s.tps, s.players, s.loaded_worlds),
        None => r#"<p class="text-muted">Server status unavailable.</p>"#.to_string(),
    };

    let body = format!(r#"
    <div class="page-header">
        <h1 class="page-title">Server Dashboard</h1>
        <p class="text-muted">Status refreshes every {refresh} seconds</p>
    </div>

    <div class="stats-grid">
        <div class="stat-card"><div class="stat-value" id="projectCount">{projects}</div><div class="stat-label">Projects</div></div>
        <div class="stat-card"><div class="stat-value" id="zoneCount">{zones}</div><div class="stat-label">Zones</div></div>
        <div class="stat-card"><div class="stat-value" id="userCount">{users}</div><div class="stat-label">Users</div></div>
    </div>

    <div class="grid-2">
        <div class="card">
            <div class="card-header">Server Status</div>
            <div class="card-body">{status}</div>
        </div>
        <div class="card">
            <div class="card-header">Server Controls</div>
            <div class="card-body d-flex gap-3">
                <form method="get" action="/server/command">
                    <input type="hidden" name="name" value="restart">
                    <button type="submit" id="restartBtn" class="btn btn-warning">Restart</button>
                </form>
                <form method="get" action="/server/command">
                    <input type="hidden" name="name" value="stop">
                    <button type="submit" id="stopBtn" class="btn btn-danger">Stop</button>
                </form>
                <form method="post" action="/server/command">
                    <input type="hidden" name="name" value="backup">
                    <button type="submit" id="backupBtn" class="btn btn-primary">Backup</button>
                </form>
            </div>
        </div>
    </div>"#,
        refresh = refresh_secs,
        projects = counts.projects,
        zones = counts.zones,
        users = counts.users,
        status = status_html,
    );

    let head = if auto_refresh {
        format!(r#"<meta http-equiv="refresh" content="{}">"#, refresh_secs)
    } else {
        String::new()
    };
    render_page("Dashboard", &head, notices, &body)
}
