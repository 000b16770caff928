//! Page-based dialogs: confirmations become a confirm page, alerts become notices.

use archcraft_common::escape_html;
use archcraft_panel::Dialogs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// First request: record the question, do nothing.
    Ask,
    /// Follow-up request carrying the operator's answer.
    Answer(bool),
}

#[derive(Debug)]
pub struct PageDialogs {
    mode: Mode,
    pending: Option<String>,
    notices: Vec<String>,
}

impl PageDialogs {
    pub fn asking() -> Self {
        Self { mode: Mode::Ask, pending: None, notices: Vec::new() }
    }

    pub fn answered(confirmed: bool) -> Self {
        Self { mode: Mode::Answer(confirmed), pending: None, notices: Vec::new() }
    }

    /// Question the operator still has to answer.
    pub fn pending_confirmation(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// Notices as alert banners. `error` picks the danger style.
    pub fn notices_html(&self, error: bool) -> String {
        let class = if error { "alert alert-danger" } else { "alert alert-info" };
        self.notices
            .iter()
            .map(|n| format!(r#"<div class="{}" role="alert">{}</div>"#, class, escape_html(n.as_str())))
            .collect()
    }
}

impl Dialogs for PageDialogs {
    fn confirm(&mut self, message: &str) -> bool {
        match self.mode {
            Mode::Ask => {
                self.pending = Some(message.to_string());
                false
            }
            Mode::Answer(answer) => answer,
        }
    }

    fn alert(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asking_records_question_and_declines() {
        let mut dialogs = PageDialogs::asking();
        assert!(!dialogs.confirm("Sure?"));
        assert_eq!(dialogs.pending_confirmation(), Some("Sure?"));
    }

    #[test]
    fn test_answered_passes_answer_through() {
        let mut dialogs = PageDialogs::answered(true);
        assert!(dialogs.confirm("Sure?"));
        assert!(dialogs.pending_confirmation().is_none());
        assert!(!PageDialogs::answered(false).confirm("Sure?"));
    }

    #[test]
    fn test_notices_escaped() {
        let mut dialogs = PageDialogs::answered(true);
        dialogs.alert("Project \"<b>\" not found.");
        assert_eq!(
            dialogs.notices_html(true),
            r#"<div class="alert alert-danger" role="alert">Project &quot;&lt;b&gt;&quot; not found.</div>"#
        );
    }
}
