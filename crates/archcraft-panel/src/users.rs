//! User registry: the user table and its view/edit/remove flows.

use archcraft_common::{escape_html, PanelError, Result, User};

use crate::dialog::Dialogs;
use crate::registry::{EmptyState, Registry};
use crate::source::DataSource;
use crate::table::{RowAction, TableStyle, TableView};

const KIND: &str = "User";

pub const COLUMNS: [&str; 5] = ["Username", "Role", "Projects", "Last Active", "Actions"];
pub const EMPTY_MESSAGE: &str = "No users found.";
pub const LOAD_FAILED_MESSAGE: &str = "No users found or failed to load users.";

const STYLE: TableStyle = TableStyle {
    base_path: "/users",
    data_attr: "data-user-id",
    marker: "user-btn",
};

const ACTIONS: [RowAction; 3] = [RowAction::View, RowAction::Edit, RowAction::Remove];

#[derive(Debug, Clone, Default)]
pub struct UserRegistry {
    inner: Registry<User>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[User] {
        self.inner.records()
    }

    pub fn count(&self) -> usize {
        self.inner.count()
    }

    pub fn find(&self, id: &str) -> Option<&User> {
        self.inner.find(id)
    }

    pub async fn load(&mut self, source: &dyn DataSource<User>) -> bool {
        self.inner.load_from("users", source).await
    }

    pub fn add(&mut self, user: User) -> Result<()> {
        if user.id.trim().is_empty() {
            return Err(PanelError::Validation("User ID is required".to_string()));
        }
        self.inner.push(user);
        Ok(())
    }

    pub fn view(&self, id: &str, dialogs: &mut dyn Dialogs) -> Result<&User> {
        let user = self.lookup(id, dialogs)?;
        dialogs.alert(&format!(
            "Viewing user \"{}\". In a real application, this would open the user details view.",
            user.username
        ));
        Ok(user)
    }

    pub fn edit(&self, id: &str, dialogs: &mut dyn Dialogs) -> Result<&User> {
        let user = self.lookup(id, dialogs)?;
        dialogs.alert(&format!(
            "Editing user \"{}\". In a real application, this would open the user edit form.",
            user.username
        ));
        Ok(user)
    }

    /// Remove after confirmation. `Ok(false)` when the operator declines.
    pub fn remove(&mut self, id: &str, dialogs: &mut dyn Dialogs) -> Result<bool> {
        let username = self.lookup(id, dialogs)?.username.clone();

        let question = format!(
            "Are you sure you want to remove \"{}\" from the platform? This action cannot be undone.",
            username
        );
        if !dialogs.confirm(&question) {
            return Ok(false);
        }

        self.inner.remove_key(id);
        tracing::info!(id, username = %username, "User removed");
        dialogs.alert(&format!("User \"{}\" removed successfully.", username));
        Ok(true)
    }

    pub fn render(&self) -> TableView {
        let empty = match self.inner.empty_state() {
            EmptyState::NoRecords  => EMPTY_MESSAGE,
            EmptyState::LoadFailed => LOAD_FAILED_MESSAGE,
        };
        TableView::build(&COLUMNS, STYLE, self.inner.records(), &ACTIONS, empty, |u: &User| {
            (u.id.clone(), vec![
                escape_html(u.username.as_str()),
                escape_html(u.role.as_str()),
                u.project_count.to_string(),
                escape_html(u.last_active.as_str()),
            ])
        })
    }

    fn lookup(&self, id: &str, dialogs: &mut dyn Dialogs) -> Result<&User> {
        self.inner.find(id).ok_or_else(|| {
            dialogs.alert(&format!("User with ID \"{}\" not found.", id));
            PanelError::not_found(KIND, id)
        })
    }
}
