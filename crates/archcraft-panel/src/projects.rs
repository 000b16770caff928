//! Project registry: the project table and its create/view/edit/delete flows.

use archcraft_common::{escape_html, PanelError, Project, Result};
use serde::Deserialize;

use crate::dialog::Dialogs;
use crate::registry::{EmptyState, Registry};
use crate::source::DataSource;
use crate::table::{RowAction, TableStyle, TableView};

const KIND: &str = "Project";

pub const COLUMNS: [&str; 6] = ["Name", "Owner", "Created", "Scale", "Team Size", "Actions"];
pub const EMPTY_MESSAGE: &str = "No projects found. Create a new project to get started.";
pub const LOAD_FAILED_MESSAGE: &str = "No projects found or failed to load projects.";

const STYLE: TableStyle = TableStyle {
    base_path: "/projects",
    data_attr: "data-project-id",
    marker: "btn",
};

const ACTIONS: [RowAction; 3] = [RowAction::View, RowAction::Edit, RowAction::Delete];

/// Fields submitted by the new-project form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewProject {
    pub name: String,
    #[serde(default)]
    pub scale: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub world_type: String,
}

#[derive(Debug, Clone, Default)]
pub struct ProjectRegistry {
    inner: Registry<Project>,
}

impl ProjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Project] {
        self.inner.records()
    }

    pub fn count(&self) -> usize {
        self.inner.count()
    }

    /// Zones across all projects.
    pub fn zone_count(&self) -> usize {
        self.inner.records().iter().map(|p| p.zones.len()).sum()
    }

    pub fn find(&self, name: &str) -> Option<&Project> {
        self.inner.find(name)
    }

    /// Replace the collection with what `source` returns.
    pub async fn load(&mut self, source: &dyn DataSource<Project>) -> bool {
        self.inner.load_from("projects", source).await
    }

    /// Append a project. Names are not deduplicated.
    pub fn add(&mut self, project: Project) -> Result<()> {
        if project.name.is_empty() {
            return Err(PanelError::Validation("Project name is required".to_string()));
        }
        tracing::debug!(name = %project.name, "Adding project");
        self.inner.push(project);
        Ok(())
    }

    /// New-project form submission.
    pub fn create(
        &mut self,
        form: NewProject,
        owner: &str,
        today: &str,
        dialogs: &mut dyn Dialogs,
    ) -> Result<()> {
        if form.name.is_empty() {
            dialogs.alert("Project name is required");
            return Err(PanelError::Validation("Project name is required".to_string()));
        }

        let name = form.name.clone();
        let project = Project {
            description: form.description,
            world_type: form.world_type,
            ..Project::new(form.name, owner, today, form.scale)
        };
        self.add(project)?;

        dialogs.alert(&format!("Project \"{}\" created successfully.", name));
        Ok(())
    }

    pub fn view(&self, id: &str, dialogs: &mut dyn Dialogs) -> Result<&Project> {
        let project = self.lookup(id, dialogs)?;
        dialogs.alert(&format!(
            "Viewing project \"{}\". In a real application, this would open the project details view.",
            id
        ));
        Ok(project)
    }

    pub fn edit(&self, id: &str, dialogs: &mut dyn Dialogs) -> Result<&Project> {
        let project = self.lookup(id, dialogs)?;
        dialogs.alert(&format!(
            "Editing project \"{}\". In a real application, this would open the project edit form.",
            id
        ));
        Ok(project)
    }

    /// Delete after confirmation. `Ok(false)` when the operator declines.
    pub fn remove(&mut self, id: &str, dialogs: &mut dyn Dialogs) -> Result<bool> {
        self.lookup(id, dialogs)?;

        let question = format!(
            "Are you sure you want to delete project \"{}\"? This action cannot be undone.",
            id
        );
        if !dialogs.confirm(&question) {
            tracing::debug!(name = id, "Project deletion declined");
            return Ok(false);
        }

        let removed = self.inner.remove_key(id);
        tracing::info!(name = id, removed, "Project deleted");
        dialogs.alert(&format!("Project \"{}\" deleted successfully.", id));
        Ok(true)
    }

    pub fn render(&self) -> TableView {
        let empty = match self.inner.empty_state() {
            EmptyState::NoRecords  => EMPTY_MESSAGE,
            EmptyState::LoadFailed => LOAD_FAILED_MESSAGE,
        };
        TableView::build(&COLUMNS, STYLE, self.inner.records(), &ACTIONS, empty, |p: &Project| {
            (p.name.clone(), vec![
                escape_html(p.name.as_str()),
                escape_html(p.owner.as_str()),
                escape_html(p.created.as_str()),
                escape_html(p.scale.as_str()),
                p.team_size.to_string(),
            ])
        })
    }

    fn lookup(&self, id: &str, dialogs: &mut dyn Dialogs) -> Result<&Project> {
        self.inner.find(id).ok_or_else(|| {
            dialogs.alert(&format!("Project \"{}\" not found.", id));
            PanelError::not_found(KIND, id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::testing::RecordedDialogs;
    use crate::source::{EmptySource, StaticSource};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    struct FailingSource;

    #[async_trait]
    impl DataSource<Project> for FailingSource {
        async fn fetch(&self) -> Result<Vec<Project>> {
            Err(PanelError::LoadFailure("backend unavailable".into()))
        }
    }

    fn riverside() -> Project {
        Project::new("Riverside", "Alice", "2024-03-01", "1:500")
    }

    #[test]
    fn test_add_appends_last() {
        let mut reg = ProjectRegistry::new();
        reg.add(Project::new("First", "Bob", "2024-01-01", "1:100")).unwrap();
        reg.add(riverside()).unwrap();
        assert_eq!(reg.count(), 2);
        assert_eq!(reg.records().last().unwrap().name, "Riverside");
    }

    #[test]
    fn test_add_rejects_empty_name() {
        let mut reg = ProjectRegistry::new();
        let err = reg.add(Project::new("", "Bob", "", "")).unwrap_err();
        assert!(matches!(err, PanelError::Validation(_)));
        assert_eq!(reg.count(), 0);
    }

    #[test]
    fn test_whitespace_name_is_a_name() {
        let mut reg = ProjectRegistry::new();
        reg.add(Project::new("  ", "Bob", "", "")).unwrap();
        assert_eq!(reg.count(), 1);
        assert!(reg.find("  ").is_some());
    }

    #[test]
    fn test_duplicate_names_accepted() {
        let mut reg = ProjectRegistry::new();
        reg.add(riverside()).unwrap();
        reg.add(riverside()).unwrap();
        assert_eq!(reg.count(), 2);
    }

    #[test]
    fn test_remove_present_confirmed() {
        let mut reg = ProjectRegistry::new();
        reg.add(riverside()).unwrap();
        reg.add(Project::new("Hilltop", "Bob", "", "1:250")).unwrap();

        let mut dialogs = RecordedDialogs::accepting();
        assert!(reg.remove("Riverside", &mut dialogs).unwrap());
        assert_eq!(reg.count(), 1);
        assert!(reg.find("Riverside").is_none());
        assert_eq!(dialogs.confirms, vec![
            "Are you sure you want to delete project \"Riverside\"? This action cannot be undone.".to_string()
        ]);
        assert_eq!(dialogs.alerts, vec!["Project \"Riverside\" deleted successfully.".to_string()]);
    }

    #[test]
    fn test_remove_declined_keeps_state() {
        let mut reg = ProjectRegistry::new();
        reg.add(riverside()).unwrap();
        let mut dialogs = RecordedDialogs::declining();
        assert!(!reg.remove("Riverside", &mut dialogs).unwrap());
        assert_eq!(reg.count(), 1);
        assert!(dialogs.alerts.is_empty());
    }

    #[test]
    fn test_remove_absent_reports_not_found() {
        let mut reg = ProjectRegistry::new();
        reg.add(riverside()).unwrap();
        let mut dialogs = RecordedDialogs::accepting();
        let err = reg.remove("Nowhere", &mut dialogs).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(reg.count(), 1);
        assert!(dialogs.confirms.is_empty());
        assert_eq!(dialogs.alerts, vec!["Project \"Nowhere\" not found.".to_string()]);
    }

    #[test]
    fn test_view_and_edit_stubs() {
        let mut reg = ProjectRegistry::new();
        reg.add(riverside()).unwrap();
        let mut dialogs = RecordedDialogs::default();

        assert_eq!(reg.view("Riverside", &mut dialogs).unwrap().owner, "Alice");
        assert!(reg.edit("Riverside", &mut dialogs).is_ok());
        assert!(reg.view("Other", &mut dialogs).unwrap_err().is_not_found());
        assert!(dialogs.alerts[0].starts_with("Viewing project \"Riverside\"."));
        assert!(dialogs.alerts[1].starts_with("Editing project \"Riverside\"."));
        assert_eq!(dialogs.alerts[2], "Project \"Other\" not found.");
    }

    #[test]
    fn test_create_from_form() {
        let mut reg = ProjectRegistry::new();
        let mut dialogs = RecordedDialogs::default();
        let form = NewProject {
            name: "Harbor".into(),
            scale: "1:1000".into(),
            description: "Port district".into(),
            world_type: "flat".into(),
        };
        reg.create(form, "Current User", "2024-05-06", &mut dialogs).unwrap();

        let project = reg.find("Harbor").unwrap();
        assert_eq!(project.owner, "Current User");
        assert_eq!(project.created, "2024-05-06");
        assert_eq!(project.team_size, 1);
        assert_eq!(project.world_type, "flat");
        assert_eq!(dialogs.alerts, vec!["Project \"Harbor\" created successfully.".to_string()]);
    }

    #[test]
    fn test_create_requires_name() {
        let mut reg = ProjectRegistry::new();
        let mut dialogs = RecordedDialogs::default();
        let err = reg.create(NewProject::default(), "Current User", "", &mut dialogs).unwrap_err();
        assert!(matches!(err, PanelError::Validation(_)));
        assert_eq!(dialogs.alerts, vec!["Project name is required".to_string()]);
        assert_eq!(reg.count(), 0);
    }

    #[test]
    fn test_render_escapes_and_is_idempotent() {
        let mut reg = ProjectRegistry::new();
        reg.add(Project::new("<script>", "O'Neil & Co", "\"today\"", "1:500")).unwrap();

        let view = reg.render();
        assert_eq!(view.rows[0].cells, vec![
            "&lt;script&gt;".to_string(),
            "O&#039;Neil &amp; Co".to_string(),
            "&quot;today&quot;".to_string(),
            "1:500".to_string(),
            "1".to_string(),
        ]);
        assert_eq!(view.action_count(), 3);
        assert_eq!(reg.render().to_html(), view.to_html());
    }

    #[test]
    fn test_riverside_scenario() {
        let mut reg = ProjectRegistry::new();
        assert!(reg.render().to_html().contains(EMPTY_MESSAGE));

        reg.add(riverside()).unwrap();
        assert_eq!(reg.count(), 1);
        let view = reg.render();
        assert_eq!(view.rows.len(), 1);
        assert_eq!(&view.rows[0].cells[..2], &["Riverside".to_string(), "Alice".to_string()]);

        let mut dialogs = RecordedDialogs::accepting();
        reg.remove("Riverside", &mut dialogs).unwrap();
        assert_eq!(reg.count(), 0);
        assert_eq!(reg.render().empty_message, Some(EMPTY_MESSAGE));
    }

    #[tokio::test]
    async fn test_load_replaces_records() {
        let mut reg = ProjectRegistry::new();
        reg.add(Project::new("Old", "x", "", "")).unwrap();
        assert!(reg.load(&StaticSource(vec![riverside()])).await);
        assert_eq!(reg.count(), 1);
        assert_eq!(reg.records()[0].name, "Riverside");

        assert!(reg.load(&EmptySource).await);
        assert_eq!(reg.count(), 0);
    }

    #[tokio::test]
    async fn test_load_failure_shows_failure_empty_state() {
        let mut reg = ProjectRegistry::new();
        assert!(!reg.load(&FailingSource).await);
        assert_eq!(reg.count(), 0);
        assert_eq!(reg.render().empty_message, Some(LOAD_FAILED_MESSAGE));

        reg.add(riverside()).unwrap();
        reg.remove("Riverside", &mut RecordedDialogs::accepting()).unwrap();
        assert_eq!(reg.render().empty_message, Some(EMPTY_MESSAGE));
    }
}
