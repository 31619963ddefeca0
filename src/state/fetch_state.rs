use crate::error::AppError;

/// What a view knows about one remote resource.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
    /// The user closed the failure message.
    Dismissed,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    /// `None` for cancelled results: those must not touch view state.
    pub fn from_result(result: Result<T, AppError>) -> Option<Self> {
        match result {
            Ok(data) => Some(FetchState::Loaded(data)),
            Err(AppError::Cancelled) => None,
            Err(e) => Some(FetchState::Failed(e.user_message())),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchState<U> {
        match self {
            FetchState::Idle => FetchState::Idle,
            FetchState::Loading => FetchState::Loading,
            FetchState::Loaded(data) => FetchState::Loaded(f(data)),
            FetchState::Failed(message) => FetchState::Failed(message),
            FetchState::Dismissed => FetchState::Dismissed,
        }
    }
}

impl<T: Clone> FetchState<T> {
    /// Local edit of loaded data. Other states are returned unchanged.
    pub fn edited(&self, edit: impl FnOnce(&T) -> T) -> Self {
        match self {
            FetchState::Loaded(data) => FetchState::Loaded(edit(data)),
            other => other.clone(),
        }
    }

    /// Closing a failure hides it. Nothing else is dismissible.
    pub fn dismissed(&self) -> Self {
        match self {
            FetchState::Failed(_) => FetchState::Dismissed,
            other => other.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_results_are_not_committed() {
        assert_eq!(FetchState::<u8>::from_result(Err(AppError::Cancelled)), None);
    }

    #[test]
    fn errors_become_user_messages() {
        let state = FetchState::<u8>::from_result(Err(AppError::http(500, None))).unwrap();
        assert_eq!(state.error(), Some("API request failed with status 500"));
        assert!(state.data().is_none());
    }

    #[test]
    fn failures_can_be_dismissed_but_data_cannot() {
        let failed = FetchState::<u8>::Failed("API request failed with status 500".into());
        assert_eq!(failed.dismissed(), FetchState::Dismissed);
        assert_eq!(FetchState::Loaded(3u8).dismissed(), FetchState::Loaded(3));
        assert_eq!(FetchState::<u8>::Loading.dismissed(), FetchState::Loading);
    }

    #[test]
    fn successive_edits_build_on_each_other() {
        let state = FetchState::Loaded(vec!["a", "b", "c"]);
        let state = state.edited(|items| items.iter().copied().filter(|i| *i != "a").collect());
        let state = state.edited(|items| items.iter().copied().filter(|i| *i != "b").collect());
        assert_eq!(state, FetchState::Loaded(vec!["c"]));
        assert_eq!(FetchState::<Vec<&str>>::Loading.edited(|_| vec![]), FetchState::Loading);
    }

    #[test]
    fn map_keeps_non_loaded_variants() {
        assert_eq!(FetchState::<u8>::Loading.map(|n| n * 2), FetchState::Loading);
        assert_eq!(FetchState::Loaded(2u8).map(|n| n * 2), FetchState::Loaded(4));
    }
}
