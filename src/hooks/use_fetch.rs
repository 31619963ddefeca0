// ============================================================================
// USE FETCH - one remote resource per view, cancelled with the view
// ============================================================================

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use yew::prelude::*;

use crate::error::AppError;
use crate::state::{FetchState, RequestScope};

pub struct UseFetchHandle<T> {
    pub state: UseStateHandle<FetchState<T>>,
    /// Re-runs the fetch with the current deps.
    pub reload: Callback<()>,
    /// Hides a failure message.
    pub dismiss: Callback<()>,
    latest: Rc<RefCell<FetchState<T>>>,
}

impl<T> Clone for UseFetchHandle<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            reload: self.reload.clone(),
            dismiss: self.dismiss.clone(),
            latest: self.latest.clone(),
        }
    }
}

fn publish<T: Clone>(state: &UseStateHandle<FetchState<T>>, latest: &RefCell<FetchState<T>>, next: FetchState<T>) {
    *latest.borrow_mut() = next.clone();
    state.set(next);
}

impl<T: Clone> UseFetchHandle<T> {
    /// Local edit after a mutation, without going back to the server.
    ///
    /// Applied to the newest state, not the one captured at render, so
    /// overlapping edits compose.
    pub fn update_data(&self, edit: impl FnOnce(&T) -> T) {
        let next = self.latest.borrow().edited(edit);
        publish(&self.state, &self.latest, next);
    }

    pub fn set_data(&self, data: T) {
        publish(&self.state, &self.latest, FetchState::Loaded(data));
    }
}

/// Runs `fetch(deps)` on mount and whenever `deps` change.
///
/// A new run cancels the previous one and unmounting cancels the current one,
/// so a late response never overwrites newer state.
#[hook]
pub fn use_fetch<T, D, F, Fut>(deps: D, fetch: F) -> UseFetchHandle<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: FnOnce(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, AppError>> + 'static,
{
    let state = use_state(FetchState::<T>::default);
    let latest = use_mut_ref(FetchState::<T>::default);
    let scope = use_memo((), |_| RequestScope::new());
    let generation = use_state(|| 0u32);

    {
        let state = state.clone();
        let latest = latest.clone();
        let scope = scope.clone();
        use_effect_with((deps, *generation), move |(deps, _)| {
            let token = scope.begin();
            publish(&state, &latest, FetchState::Loading);
            let request = fetch(deps.clone());
            wasm_bindgen_futures::spawn_local(async move {
                let result = token.guard(request.await);
                if let Some(next) = FetchState::from_result(result) {
                    token.commit(|| publish(&state, &latest, next));
                }
            });
            move || scope.cancel()
        });
    }

    let reload = {
        let generation = generation.clone();
        Callback::from(move |_| generation.set(generation.wrapping_add(1)))
    };

    let dismiss = {
        let state = state.clone();
        let latest = latest.clone();
        Callback::from(move |_| {
            let next = latest.borrow().dismissed();
            publish(&state, &latest, next);
        })
    };

    UseFetchHandle { state, reload, dismiss, latest }
}
