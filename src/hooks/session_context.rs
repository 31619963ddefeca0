// ============================================================================
// SESSION CONTEXT - share the session service with every view
// ============================================================================
// The provider owns the one SessionService for the app, restores the stored
// session once, and bumps a revision whenever login/logout writes the
// AuthState so context consumers re-render.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;

use crate::models::Session;
use crate::services::{PlaylistService, SessionService, UploadService};

/// What views get from [`use_session`].
#[derive(Clone)]
pub struct SessionHandle {
    service: Rc<SessionService>,
    revision: u32,
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.service, &other.service) && self.revision == other.revision
    }
}

impl SessionHandle {
    pub fn new(service: Rc<SessionService>) -> Self {
        Self { service, revision: 0 }
    }

    pub fn service(&self) -> &SessionService {
        &self.service
    }

    pub fn current(&self) -> Option<Session> {
        self.service.current()
    }

    pub fn is_authenticated(&self) -> bool {
        self.service.is_authenticated()
    }

    pub fn playlists(&self) -> PlaylistService {
        PlaylistService::new(self.service.api().clone(), self.service.state().clone())
    }

    pub fn uploads(&self) -> UploadService {
        UploadService::new(self.service.api().clone(), self.service.state().clone())
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let service = use_memo((), |_| {
        let service = SessionService::browser();
        service.restore();
        service
    });
    let revision = use_state(|| 0u32);

    {
        let service = service.clone();
        let revision = revision.clone();
        use_effect_with((), move |_| {
            let counter = Rc::new(Cell::new(0u32));
            let id = service.state().subscribe(move || {
                counter.set(counter.get().wrapping_add(1));
                revision.set(counter.get());
            });
            move || service.state().unsubscribe(id)
        });
    }

    let handle = SessionHandle { service: service.clone(), revision: *revision };

    html! {
        <ContextProvider<SessionHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<SessionHandle>>
    }
}

#[hook]
pub fn use_session() -> SessionHandle {
    let context = use_context::<SessionHandle>();
    let fallback = use_memo((), |_| Rc::new(SessionService::browser()));
    context.unwrap_or_else(|| {
        log::error!("❌ use_session called outside SessionProvider");
        SessionHandle::new((*fallback).clone())
    })
}
