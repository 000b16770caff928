//! Table view-model produced by the registries.
//!
//! Registries never build markup directly: `render()` returns a [`TableView`]
//! whose cell text is already HTML-escaped, and [`TableView::to_html`] turns it
//! into `<tr>` rows. Each action button becomes its own small GET form, so
//! every render rebinds exactly one handler per button.

use archcraft_common::escape_html;
use serde::Serialize;

/// Per-row operations offered by a registry table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowAction {
    View,
    Edit,
    Delete,
    Remove,
}

impl RowAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowAction::View   => "view",
            RowAction::Edit   => "edit",
            RowAction::Delete => "delete",
            RowAction::Remove => "remove",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RowAction::View   => "View",
            RowAction::Edit   => "Edit",
            RowAction::Delete => "Delete",
            RowAction::Remove => "Remove",
        }
    }

    fn button_class(&self) -> &'static str {
        match self {
            RowAction::View                     => "btn-primary",
            RowAction::Edit                     => "btn-secondary",
            RowAction::Delete | RowAction::Remove => "btn-danger",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            RowAction::View   => "eye",
            RowAction::Edit   => "edit-2",
            RowAction::Delete => "trash-2",
            RowAction::Remove => "user-x",
        }
    }
}

/// Markup conventions for one registry's table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStyle {
    /// URL prefix the action forms submit to, e.g. `/projects`.
    pub base_path: &'static str,
    /// Name of the `data-*` attribute carrying the row key.
    pub data_attr: &'static str,
    /// Suffix of the per-action marker class, e.g. `btn` → `view-btn`.
    pub marker: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionButton {
    pub action: RowAction,
    /// Escaped row key.
    pub target_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    /// Escaped cell text, one per data column.
    pub cells: Vec<String>,
    pub actions: Vec<ActionButton>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub columns: Vec<&'static str>,
    pub rows: Vec<RowView>,
    /// Message shown in place of rows when there are none.
    pub empty_message: Option<&'static str>,
    #[serde(skip)]
    pub style: TableStyle,
}

impl TableView {
    pub(crate) fn build<'a, R: 'a>(
        columns: &[&'static str],
        style: TableStyle,
        records: impl IntoIterator<Item = &'a R>,
        actions: &[RowAction],
        empty_message: &'static str,
        to_row: impl Fn(&R) -> (String, Vec<String>),
    ) -> Self {
        let rows: Vec<RowView> = records
            .into_iter()
            .map(|record| {
                let (key, cells) = to_row(record);
                let target_id = escape_html(key.as_str());
                RowView {
                    cells,
                    actions: actions
                        .iter()
                        .map(|&action| ActionButton { action, target_id: target_id.clone() })
                        .collect(),
                }
            })
            .collect();

        let empty_message = rows.is_empty().then_some(empty_message);
        Self { columns: columns.to_vec(), rows, empty_message, style }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of bound action handlers.
    pub fn action_count(&self) -> usize {
        self.rows.iter().map(|r| r.actions.len()).sum()
    }

    pub fn header_html(&self) -> String {
        self.columns.iter().map(|c| format!("<th>{}</th>", c)).collect()
    }

    /// `<tr>` rows for the table body.
    pub fn to_html(&self) -> String {
        if let Some(message) = self.empty_message {
            return format!(
                r#"<tr><td colspan="{}" class="text-center">{}</td></tr>"#,
                self.columns.len(), message
            );
        }

        self.rows.iter().map(|row| {
            let cells: String = row.cells.iter()
                .map(|c| format!("\n            <td>{}</td>", c))
                .collect();
            let buttons: String = row.actions.iter()
                .map(|b| self.button_html(b))
                .collect();
            format!(r#"
        <tr>{}
            <td>{}
            </td>
        </tr>"#, cells, buttons)
        }).collect()
    }

    fn button_html(&self, button: &ActionButton) -> String {
        let action = button.action;
        format!(r#"
                <form method="get" action="{base}/{path}" class="d-inline">
                    <input type="hidden" name="id" value="{id}">
                    <button type="submit" class="btn btn-sm {class} {path}-{marker}" {attr}="{id}">
                        <i data-feather="{icon}" class="icon-sm"></i> {label}
                    </button>
                </form>"#,
            base = self.style.base_path,
            path = action.as_str(),
            id = button.target_id,
            class = action.button_class(),
            marker = self.style.marker,
            attr = self.style.data_attr,
            icon = action.icon(),
            label = action.label(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const STYLE: TableStyle = TableStyle {
        base_path: "/things",
        data_attr: "data-thing-id",
        marker: "btn",
    };

    fn table(records: &[(&str, &str)]) -> TableView {
        TableView::build(
            &["Key", "Value", "Actions"],
            STYLE,
            records,
            &[RowAction::View, RowAction::Edit, RowAction::Delete],
            "Nothing here.",
            |(k, v)| (k.to_string(), vec![escape_html(*k), escape_html(*v)]),
        )
    }

    #[test]
    fn test_empty_table_single_spanning_row() {
        let view = table(&[]);
        assert!(view.is_empty());
        assert_eq!(view.action_count(), 0);
        assert_eq!(
            view.to_html(),
            r#"<tr><td colspan="3" class="text-center">Nothing here.</td></tr>"#
        );
    }

    #[test]
    fn test_three_actions_per_row() {
        let view = table(&[("a", "1"), ("b", "2")]);
        assert_eq!(view.action_count(), 6);
        let html = view.to_html();
        assert_eq!(html.matches("<form").count(), 6);
        assert_eq!(html.matches("<tr>").count(), 2);
        assert!(html.contains(r#"action="/things/delete""#));
        assert!(html.contains(r#"class="btn btn-sm btn-danger delete-btn" data-thing-id="b""#));
    }

    #[test]
    fn test_key_escaped_in_attributes() {
        let view = table(&[(r#"x" onclick="evil()"#, "v")]);
        let html = view.to_html();
        assert!(!html.contains(r#"onclick="evil()""#));
        assert!(html.contains("x&quot; onclick=&quot;evil()"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let records = [("a", "<1>"), ("b", "&2")];
        assert_eq!(table(&records).to_html(), table(&records).to_html());
    }

    #[test]
    fn test_header() {
        assert_eq!(table(&[]).header_html(), "<th>Key</th><th>Value</th><th>Actions</th>");
    }
}
