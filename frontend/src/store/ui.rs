use std::rc::Rc;

use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub dark_mode: bool,
    pub sidebar_open: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            dark_mode: false,
            sidebar_open: true,
            loading: false,
            error: None,
        }
    }
}

pub enum UiAction {
    ToggleDarkMode,
    ToggleSidebar,
    SetLoading(bool),
    SetError(Option<String>),
}

impl Reducible for UiState {
    type Action = UiAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            UiAction::ToggleDarkMode => next.dark_mode = !next.dark_mode,
            UiAction::ToggleSidebar => next.sidebar_open = !next.sidebar_open,
            UiAction::SetLoading(loading) => next.loading = loading,
            UiAction::SetError(error) => next.error = error,
        }
        Rc::new(next)
    }
}

pub type UiContext = UseReducerHandle<UiState>;

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: UiState, action: UiAction) -> UiState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn defaults() {
        let state = UiState::default();
        assert!(!state.dark_mode);
        assert!(state.sidebar_open);
        assert!(!state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn toggles_flip_back_and_forth() {
        let state = reduce(UiState::default(), UiAction::ToggleDarkMode);
        assert!(state.dark_mode);
        let state = reduce(state, UiAction::ToggleDarkMode);
        assert!(!state.dark_mode);

        let state = reduce(state, UiAction::ToggleSidebar);
        assert!(!state.sidebar_open);
    }

    #[test]
    fn error_can_be_set_and_cleared() {
        let state = reduce(UiState::default(), UiAction::SetError(Some("offline".to_string())));
        assert_eq!(state.error.as_deref(), Some("offline"));
        let state = reduce(state, UiAction::SetError(None));
        assert_eq!(state.error, None);
        let state = reduce(state, UiAction::SetLoading(true));
        assert!(state.loading);
    }
}
