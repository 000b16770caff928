//! HTTP handlers for all web routes.

pub mod dashboard;
pub mod projects;
pub mod users;
pub mod server;
pub mod api;

use archcraft_common::escape_html;
use serde::Deserialize;

/// Navigation HTML template shared across all pages
pub const NAV_HTML: &str = include_str!("../../templates/nav.html");

/// `?id=` on row actions.
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: String,
}

/// Answer posted from a confirmation page.
#[derive(Debug, Deserialize)]
pub struct ConfirmForm {
    pub id: String,
    #[serde(default)]
    pub confirmed: bool,
}

/// Full HTML document around a page body.
pub(crate) fn render_page(title: &str, head_extra: &str, notices: &str, body: &str) -> String {
    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{} — ArchCraft</title>
    {}
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{}
<main class="container py-4">
    <div id="notices">{}</div>
{}
</main>
</body>
</html>"#, title, head_extra, NAV_HTML, notices, body)
}

/// Yes/cancel page for a pending confirmation.
pub(crate) fn render_confirm(
    title: &str,
    question: &str,
    action: &str,
    field: &str,
    value: &str,
    cancel_href: &str,
) -> String {
    let body = format!(r#"
    <div class="card">
        <div class="card-header">{title}</div>
        <div class="card-body">
            <p class="confirm-question">{question}</p>
            <form method="post" action="{action}">
                <input type="hidden" name="{field}" value="{value}">
                <input type="hidden" name="confirmed" value="true">
                <button type="submit" class="btn btn-danger">Confirm</button>
                <a href="{cancel_href}" class="btn btn-outline-secondary">Cancel</a>
            </form>
        </div>
    </div>"#,
        title = escape_html(title),
        question = escape_html(question),
        action = action,
        field = field,
        value = escape_html(value),
        cancel_href = cancel_href,
    );
    render_page(title, "", "", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_page_escapes_value() {
        let html = render_confirm("Delete Project", "Sure?", "/projects/delete", "id", "a\"b", "/projects");
        assert!(html.contains(r#"name="id" value="a&quot;b""#));
        assert!(html.contains(r#"<a href="/projects""#));
        assert!(html.contains("Delete Project — ArchCraft"));
    }
}
