use yew::prelude::*;

use crate::components::alert::{InlineAlert, Spinner};
use crate::hooks::{use_fetch, use_shell};
use crate::models::Course;
use crate::router::Route;
use crate::services::{CatalogService, Sourced};
use crate::state::{FetchState, Severity};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Notice {
    SampleData,
    NoCourses,
}

/// Notices above the course list. The sample-data notice never hides behind an empty list.
fn notices(result: &Sourced<Vec<Course>>) -> Vec<Notice> {
    let mut notices = Vec::new();
    if result.is_mock() {
        notices.push(Notice::SampleData);
    }
    if result.data.is_empty() {
        notices.push(Notice::NoCourses);
    }
    notices
}

#[derive(Properties, PartialEq)]
pub struct MajorDetailsProps {
    pub title: String,
}

#[function_component(MajorDetails)]
pub fn major_details(props: &MajorDetailsProps) -> Html {
    let shell = use_shell();
    let courses = use_fetch(props.title.clone(), |title| async move {
        CatalogService::new().courses_for_major(&title).await
    });

    let back = {
        let navigate = shell.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Route::Home))
    };

    let body = match &*courses.state {
        FetchState::Idle | FetchState::Loading => html! { <Spinner /> },
        FetchState::Failed(message) => html! {
            <InlineAlert message={message.clone()} on_dismiss={Some(courses.dismiss.clone())} />
        },
        FetchState::Dismissed => html! {},
        FetchState::Loaded(result) => html! {
            <>
                { for notices(result).into_iter().map(|notice| match notice {
                    Notice::SampleData => html! {
                        <InlineAlert message="The server is unreachable. Showing sample data." severity={Severity::Info} />
                    },
                    Notice::NoCourses => html! {
                        <p class="empty-state">{"No courses found for this major."}</p>
                    },
                }) }
                <ul class="course-list">
                    { for result.data.iter().map(|course| {
                        let navigate = shell.navigate.clone();
                        let route = Route::Course { id: course.id.clone() };
                        html! {
                            <li key={course.id.clone()}>
                                <button class="list-item" onclick={Callback::from(move |_: MouseEvent| navigate.emit(route.clone()))}>
                                    if let Some(code) = &course.code {
                                        <span class="course-code">{code.clone()}</span>
                                    }
                                    <span class="course-name">{course.course_name.clone()}</span>
                                </button>
                            </li>
                        }
                    }) }
                </ul>
            </>
        },
    };

    html! {
        <div class="page major-details">
            <nav class="breadcrumbs">
                <a href="/" onclick={back.clone()}>{"Home"}</a>
                <span>{" / "}</span>
                <span>{props.title.clone()}</span>
            </nav>
            <div class="page-header">
                <button class="icon-button" aria-label="Back" onclick={back}>{"←"}</button>
                <h1>{props.title.clone()}</h1>
            </div>
            {body}
        </div>
    }
}
