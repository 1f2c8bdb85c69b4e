mod classify;
mod selection;
mod types;
mod wslpath;

pub use classify::{classify, Classified, WORKSPACE_EXTENSION};
pub use selection::{grid_slot, Selection};
pub use types::{command_key, EditorVariant, Environment, WorkspaceItem};
pub use wslpath::{to_wsl_mount, TranslateError};
