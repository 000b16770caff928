//! Project registry pages — table, new-project form, and row actions.

use archcraft_panel::NewProject;
use axum::{
    extract::{Query, State},
    response::Html,
    Form,
};

use super::{render_confirm, render_page, ConfirmForm, IdQuery};
use crate::dialogs::PageDialogs;
use crate::state::{AppEvent, SharedState};

// ── Handlers ──────────────────────────────────────────────────────────────────

pub async fn projects_page(State(state): State<SharedState>) -> Html<String> {
    Html(render_projects(&state, "").await)
}

pub async fn project_create(
    State(state): State<SharedState>,
    Form(form): Form<NewProject>,
) -> Html<String> {
    let mut dialogs = PageDialogs::answered(true);
    let name = form.name.clone();
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();

    let result = {
        let mut panel = state.panel.write().await;
        let result = panel.projects.create(form, &state.config.panel.current_user, &today, &mut dialogs);
        (result, panel.projects.count())
    };

    match result {
        (Ok(()), count) => {
            state.publish(AppEvent::ProjectCreated { name, count });
            Html(render_projects(&state, &dialogs.notices_html(false)).await)
        }
        (Err(e), _) => {
            tracing::debug!("Project form rejected: {}", e);
            Html(render_projects(&state, &dialogs.notices_html(true)).await)
        }
    }
}

pub async fn project_view(
    State(state): State<SharedState>,
    Query(q): Query<IdQuery>,
) -> Html<String> {
    let mut dialogs = PageDialogs::answered(false);
    let failed = state.panel.read().await.projects.view(&q.id, &mut dialogs).is_err();
    Html(render_projects(&state, &dialogs.notices_html(failed)).await)
}

pub async fn project_edit(
    State(state): State<SharedState>,
    Query(q): Query<IdQuery>,
) -> Html<String> {
    let mut dialogs = PageDialogs::answered(false);
    let failed = state.panel.read().await.projects.edit(&q.id, &mut dialogs).is_err();
    Html(render_projects(&state, &dialogs.notices_html(failed)).await)
}

/// First step of deletion: ask, or report not-found.
pub async fn project_delete_prompt(
    State(state): State<SharedState>,
    Query(q): Query<IdQuery>,
) -> Html<String> {
    let mut dialogs = PageDialogs::asking();
    let result = state.panel.write().await.projects.remove(&q.id, &mut dialogs);

    if let Some(question) = dialogs.pending_confirmation() {
        return Html(render_confirm("Delete Project", question, "/projects/delete", "id", &q.id, "/projects"));
    }
    Html(render_projects(&state, &dialogs.notices_html(result.is_err())).await)
}

pub async fn project_delete(
    State(state): State<SharedState>,
    Form(form): Form<ConfirmForm>,
) -> Html<String> {
    let mut dialogs = PageDialogs::answered(form.confirmed);
    let (result, count) = {
        let mut panel = state.panel.write().await;
        let result = panel.projects.remove(&form.id, &mut dialogs);
        (result, panel.projects.count())
    };

    if let Ok(true) = result {
        state.publish(AppEvent::ProjectDeleted { name: form.id.clone(), count });
    }
    Html(render_projects(&state, &dialogs.notices_html(result.is_err())).await)
}

// ── Rendering ─────────────────────────────────────────────────────────────────

async fn render_projects(state: &SharedState, notices: &str) -> String {
    let table = state.panel.read().await.projects.render();

    let body = format!(r#"
    <div class="page-header">
        <h1 class="page-title">Projects</h1>
        <p class="text-muted">Architecture and urban planning projects on the server</p>
    </div>

    <div class="card mb-4">
        <div class="card-header">All Projects</div>
        <div class="table-container">
            <table class="table" id="projectsTable">
                <thead><tr>{}</tr></thead>
                <tbody>{}</tbody>
            </table>
        </div>
    </div>

    <div class="card">
        <div class="card-header">New Project</div>
        <div class="card-body">
            <form method="post" action="/projects" id="newProjectForm">
                <div class="form-group">
                    <label for="projectName">Project Name</label>
                    <input type="text" class="form-control" id="projectName" name="name" required>
                </div>
                <div class="form-group">
                    <label for="projectScale">Scale</label>
                    <select class="form-control" id="projectScale" name="scale">
                        <option value="1:1">1:1</option>
                        <option value="1:100">1:100</option>
                        <option value="1:500" selected>1:500</option>
                        <option value="1:1000">1:1000</option>
                    </select>
                </div>
                <div class="form-group">
                    <label for="projectDescription">Description</label>
                    <textarea class="form-control" id="projectDescription" name="description" rows="3"></textarea>
                </div>
                <div class="form-group">
                    <label for="worldType">World Type</label>
                    <select class="form-control" id="worldType" name="world_type">
                        <option value="flat">Flat</option>
                        <option value="normal">Normal</option>
                        <option value="void">Void</option>
                    </select>
                </div>
                <button type="submit" class="btn btn-primary" id="createProjectBtn">Create Project</button>
            </form>
        </div>
    </div>"#, table.header_html(), table.to_html());

    render_page("Projects", "", notices, &body)
}
