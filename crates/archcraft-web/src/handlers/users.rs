//! User registry pages — table and row actions.

use axum::{
    extract::{Query, State},
    response::Html,
    Form,
};

use super::{render_confirm, render_page, ConfirmForm, IdQuery};
use crate::dialogs::PageDialogs;
use crate::state::{AppEvent, SharedState};

pub async fn users_page(State(state): State<SharedState>) -> Html<String> {
    Html(render_users(&state, "").await)
}

pub async fn user_view(
    State(state): State<SharedState>,
    Query(q): Query<IdQuery>,
) -> Html<String> {
    let mut dialogs = PageDialogs::answered(false);
    let failed = state.panel.read().await.users.view(&q.id, &mut dialogs).is_err();
    Html(render_users(&state, &dialogs.notices_html(failed)).await)
}

pub async fn user_edit(
    State(state): State<SharedState>,
    Query(q): Query<IdQuery>,
) -> Html<String> {
    let mut dialogs = PageDialogs::answered(false);
    let failed = state.panel.read().await.users.edit(&q.id, &mut dialogs).is_err();
    Html(render_users(&state, &dialogs.notices_html(failed)).await)
}

pub async fn user_remove_prompt(
    State(state): State<SharedState>,
    Query(q): Query<IdQuery>,
) -> Html<String> {
    let mut dialogs = PageDialogs::asking();
    let result = state.panel.write().await.users.remove(&q.id, &mut dialogs);

    if let Some(question) = dialogs.pending_confirmation() {
        return Html(render_confirm("Remove User", question, "/users/remove", "id", &q.id, "/users"));
    }
    Html(render_users(&state, &dialogs.notices_html(result.is_err())).await)
}

pub async fn user_remove(
    State(state): State<SharedState>,
    Form(form): Form<ConfirmForm>,
) -> Html<String> {
    let mut dialogs = PageDialogs::answered(form.confirmed);
    let (result, count) = {
        let mut panel = state.panel.write().await;
        let result = panel.users.remove(&form.id, &mut dialogs);
        (result, panel.users.count())
    };

    if let Ok(true) = result {
        state.publish(AppEvent::UserRemoved { id: form.id.clone(), count });
    }
    Html(render_users(&state, &dialogs.notices_html(result.is_err())).await)
}

async fn render_users(state: &SharedState, notices: &str) -> String {
    let table = state.panel.read().await.users.render();

    let body = format!(r#"
    <div class="page-header">
        <h1 class="page-title">Users</h1>
        <p class="text-muted">Players with access to the planning platform</p>
    </div>

    <div class="card">
        <div class="card-header">Registered Users</div>
        <div class="table-container">
            <table class="table" id="usersTable">
                <thead><tr>{}</tr></thead>
                <tbody>{}</tbody>
            </table>
        </div>
    </div>"#, table.header_html(), table.to_html());

    render_page("Users", "", notices, &body)
}
