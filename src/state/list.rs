// Loading and selection state for the TUI panes.
// Tracks async data status and keyboard selection for list tabs.

use ratatui::widgets::ListState;

/// Loading state for async data.
#[derive(Debug, Clone, Default)]
pub enum LoadingState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> LoadingState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadingState::Loaded(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadingState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// State for a selectable list with keyboard navigation.
#[derive(Debug, Clone)]
pub struct SelectableList<T> {
    pub data: LoadingState<Vec<T>>,
    pub list_state: ListState,
}

impl<T> Default for SelectableList<T> {
    fn default() -> Self {
        Self {
            data: LoadingState::Idle,
            list_state: ListState::default(),
        }
    }
}

impl<T> SelectableList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently selected index.
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    fn len(&self) -> usize {
        self.data.data().map_or(0, Vec::len)
    }

    /// Select the next item, staying on the last one.
    pub fn select_next(&mut self) {
        let len = self.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Select the previous item, staying on the first one.
    pub fn select_prev(&mut self) {
        if self.len() == 0 {
            return;
        }
        let i = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(i));
    }

    /// Get the selected item.
    pub fn selected_item(&self) -> Option<&T> {
        let index = self.list_state.selected()?;
        self.data.data()?.get(index)
    }

    /// Set loaded data and select the first item.
    pub fn set_loaded(&mut self, items: Vec<T>) {
        let first = if items.is_empty() { None } else { Some(0) };
        self.data = LoadingState::Loaded(items);
        self.list_state.select(first);
    }

    pub fn set_loading(&mut self) {
        self.data = LoadingState::Loading;
    }

    pub fn set_error(&mut self, error: String) {
        self.data = LoadingState::Error(error);
        self.list_state.select(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_clamps_at_both_ends() {
        let mut list = SelectableList::new();
        list.set_loaded(vec!["a", "b", "c"]);
        assert_eq!(list.selected(), Some(0));

        list.select_prev();
        assert_eq!(list.selected(), Some(0));

        list.select_next();
        list.select_next();
        list.select_next();
        assert_eq!(list.selected(), Some(2));
        assert_eq!(list.selected_item(), Some(&"c"));
    }

    #[test]
    fn test_empty_and_error_have_no_selection() {
        let mut list: SelectableList<u8> = SelectableList::new();
        list.set_loaded(Vec::new());
        list.select_next();
        assert_eq!(list.selected(), None);

        list.set_error("boom".to_string());
        assert!(list.selected_item().is_none());
        assert!(!list.data.is_loaded());
    }

    #[test]
    fn test_loading_state_accessors() {
        let state: LoadingState<u8> = LoadingState::Loading;
        assert!(state.is_loading());
        assert!(state.data().is_none());
        assert_eq!(LoadingState::Loaded(3).data(), Some(&3));
    }
}
