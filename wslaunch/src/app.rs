use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use wslaunch_core::{EditorVariant, Selection, WorkspaceItem};

pub const KEY_HINTS: &str =
    "Q/X/Esc: exit    N/I: Standard/Insiders    Tab/Shift+Tab: navigate    Enter/Space: launch";

/// Side effects the event loop must perform after a key transition.
/// Everything else (focus movement, status text) mutates `App`
/// directly, so the transition itself is testable without a terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    /// Launch the item at this index with the current variant.
    Launch(usize),
    /// The variant changed and must be persisted immediately.
    VariantChanged(EditorVariant),
}

/// Central application state, constructed once at startup and threaded
/// through the event loop.
pub struct App {
    pub items: Vec<WorkspaceItem>,
    pub selection: Selection,
    pub variant: EditorVariant,
    pub status: Option<String>,
}

impl App {
    pub fn new(items: Vec<WorkspaceItem>, variant: EditorVariant) -> Self {
        let selection = Selection::new(items.len());
        Self {
            items,
            selection,
            variant,
            status: None,
        }
    }

    pub fn focused_item(&self) -> Option<&WorkspaceItem> {
        self.selection.focused().and_then(|i| self.items.get(i))
    }

    /// Pure transition over the key event; crossterm delivers modifiers
    /// with the event, so Shift+Tab needs no device polling.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    self.selection.previous();
                } else {
                    self.selection.next();
                }
                Action::None
            }
            // Terminals report Shift+Tab as BackTab.
            KeyCode::BackTab => {
                self.selection.previous();
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.selection.focused() {
                Some(i) => Action::Launch(i),
                None => {
                    self.status = Some("No workspaces to launch".to_string());
                    Action::None
                }
            },
            KeyCode::Char('n') | KeyCode::Char('N') => self.set_variant(EditorVariant::Standard),
            KeyCode::Char('i') | KeyCode::Char('I') => self.set_variant(EditorVariant::Insiders),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('x') | KeyCode::Char('X')
            | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    fn set_variant(&mut self, variant: EditorVariant) -> Action {
        if self.variant == variant {
            return Action::None;
        }
        self.variant = variant;
        self.status = Some(format!("VS Code variant set to {}", variant));
        Action::VariantChanged(variant)
    }

    pub fn note_launched(&mut self, item: &WorkspaceItem) {
        self.status = Some(format!(
            "Launched {} ({}, {})",
            item.display_name, item.environment, self.variant
        ));
    }

    pub fn note_launch_failed(&mut self, message: &str) {
        self.status = Some(format!("Launch failed: {}", message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use wslaunch_core::Environment;

    fn items(n: usize) -> Vec<WorkspaceItem> {
        (0..n)
            .map(|i| WorkspaceItem {
                display_name: format!("ws{}", i),
                file_name: format!("ws{} [Win].code-workspace", i),
                path: PathBuf::from(format!("/ws/ws{} [Win].code-workspace", i)),
                environment: Environment::Windows,
            })
            .collect()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn tab_cycles_forward_with_wraparound() {
        let mut app = App::new(items(5), EditorVariant::Standard);
        for _ in 0..5 {
            app.handle_key(key(KeyCode::Tab));
        }
        assert_eq!(app.selection.focused(), Some(0));
    }

    #[test]
    fn shift_tab_and_backtab_cycle_backward() {
        let mut app = App::new(items(5), EditorVariant::Standard);
        app.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT));
        assert_eq!(app.selection.focused(), Some(4));
        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.selection.focused(), Some(3));
    }

    #[test]
    fn enter_and_space_launch_the_focused_item() {
        let mut app = App::new(items(3), EditorVariant::Standard);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.handle_key(key(KeyCode::Enter)), Action::Launch(1));
        assert_eq!(app.handle_key(key(KeyCode::Char(' '))), Action::Launch(1));
    }

    #[test]
    fn enter_with_no_items_is_refused() {
        let mut app = App::new(items(0), EditorVariant::Standard);
        assert_eq!(app.handle_key(key(KeyCode::Enter)), Action::None);
        assert!(app.status.is_some());
    }

    #[test]
    fn variant_keys_change_and_request_persistence() {
        let mut app = App::new(items(1), EditorVariant::Standard);
        assert_eq!(
            app.handle_key(key(KeyCode::Char('i'))),
            Action::VariantChanged(EditorVariant::Insiders)
        );
        assert_eq!(app.variant, EditorVariant::Insiders);

        // Re-selecting the current variant is not a change.
        assert_eq!(app.handle_key(key(KeyCode::Char('i'))), Action::None);

        assert_eq!(
            app.handle_key(key(KeyCode::Char('N'))),
            Action::VariantChanged(EditorVariant::Standard)
        );
    }

    #[test]
    fn exit_keys_quit() {
        let mut app = App::new(items(1), EditorVariant::Standard);
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(app.handle_key(key(KeyCode::Char('X'))), Action::Quit);
        assert_eq!(app.handle_key(key(KeyCode::Esc)), Action::Quit);
    }

    #[test]
    fn unhandled_keys_do_nothing() {
        let mut app = App::new(items(2), EditorVariant::Standard);
        assert_eq!(app.handle_key(key(KeyCode::Char('z'))), Action::None);
        assert_eq!(app.selection.focused(), Some(0));
    }
}
