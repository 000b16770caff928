//! User-facing prompts and notices.

/// Confirmation prompts and one-shot messages shown to the operator.
///
/// Registries and the status panel never talk to the UI directly; every
/// message and every confirmation goes through this trait.
pub trait Dialogs {
    /// Ask a yes/no question. `true` means the operator accepted.
    fn confirm(&mut self, message: &str) -> bool;

    /// Show an informational or error message.
    fn alert(&mut self, message: &str);
}
