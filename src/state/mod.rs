// State management module.
// Loading and selection state shared by the TUI tabs.

pub mod list;

pub use list::{LoadingState, SelectableList};
