use yew::prelude::*;

use crate::components::alert::{InlineAlert, Spinner};
use crate::hooks::{use_fetch, use_shell};
use crate::router::Route;
use crate::services::{group_by_college, CatalogService};
use crate::state::{FetchState, Severity};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let shell = use_shell();
    let majors = use_fetch((), |_| async move { CatalogService::new().majors().await });

    let body = match &*majors.state {
        FetchState::Idle | FetchState::Loading => html! { <Spinner /> },
        FetchState::Failed(message) => html! {
            <InlineAlert message={message.clone()} on_dismiss={Some(majors.dismiss.clone())} />
        },
        FetchState::Dismissed => html! {},
        FetchState::Loaded(result) => {
            let groups = group_by_college(&result.data);
            html! {
                <>
                    if result.is_mock() {
                        <InlineAlert
                            message="The server is unreachable. Showing sample data."
                            severity={Severity::Info}
                        />
                    }
                    if groups.is_empty() {
                        <p class="empty-state">{"No majors available."}</p>
                    }
                    { for groups.into_iter().map(|group| html! {
                        <section class="college" key={group.college.clone()}>
                            <h2 class="college-title">{group.college.clone()}</h2>
                            <div class="card-grid">
                                { for group.majors.into_iter().map(|major| {
                                    let navigate = shell.navigate.clone();
                                    let route = Route::Major { title: major.title.clone() };
                                    html! {
                                        <button
                                            class="card major-card"
                                            key={major.title.clone()}
                                            onclick={Callback::from(move |_: MouseEvent| navigate.emit(route.clone()))}
                                        >
                                            {major.title.clone()}
                                        </button>
                                    }
                                }) }
                            </div>
                        </section>
                    }) }
                </>
            }
        }
    };

    html! {
        <div class="page home-page">
            <h1>{"Browse Majors"}</h1>
            {body}
        </div>
    }
}
