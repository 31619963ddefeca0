use yew::prelude::*;

use crate::components::alert::{InlineAlert, Spinner};
use crate::hooks::{use_fetch, use_shell};
use crate::models::{Course, Professor};
use crate::router::Route;
use crate::services::CatalogService;
use crate::state::FetchState;

#[derive(Properties, PartialEq)]
pub struct CourseDetailsProps {
    pub id: String,
}

/// Materials page of `professor` for `course`, under the course's first major.
fn materials_route(course: &Course, course_id: &str, professor: &Professor) -> Option<Route> {
    let major = course.primary_major()?;
    Some(Route::Materials {
        major: major.title.clone(),
        course: course.course_name.clone(),
        professor: professor.professor_name.clone(),
        kind: None,
        professor_id: Some(professor.id.clone()),
        course_id: Some(course_id.to_string()),
    })
}

#[function_component(CourseDetails)]
pub fn course_details(props: &CourseDetailsProps) -> Html {
    let shell = use_shell();
    let course = use_fetch(props.id.clone(), |id| async move { CatalogService::new().course(&id).await });

    let back = {
        let navigate = shell.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Route::Home))
    };

    let body = match &*course.state {
        FetchState::Idle | FetchState::Loading => html! { <Spinner /> },
        FetchState::Failed(message) => html! {
            <InlineAlert message={message.clone()} on_dismiss={Some(course.dismiss.clone())} />
        },
        FetchState::Dismissed => html! {},
        FetchState::Loaded(data) => {
            html! {
                <>
                    <div class="page-header">
                        <button class="icon-button" aria-label="Back" onclick={back.clone()}>{"←"}</button>
                        <h1>{data.course_name.clone()}</h1>
                    </div>
                    if let Some(major) = data.primary_major() {
                        <p class="subtitle">{major.title.clone()}</p>
                    }
                    <h2>{"Professors"}</h2>
                    if data.professors.is_empty() {
                        <p class="empty-state">{"No professors listed for this course."}</p>
                    }
                    <ul class="professor-list">
                        { for data.professors.iter().map(|professor| {
                            let onclick = materials_route(data, &props.id, professor).map(|route| {
                                let navigate = shell.navigate.clone();
                                Callback::from(move |_: MouseEvent| navigate.emit(route.clone()))
                            });
                            html! {
                                <li key={professor.id.clone()}>
                                    <button class="list-item" {onclick} disabled={data.majors.is_empty()}>
                                        <span class="professor-icon">{"👤"}</span>
                                        <span class="professor-name">{professor.professor_name.clone()}</span>
                                        if let Some(email) = &professor.email {
                                            <span class="professor-email">{email.clone()}</span>
                                        }
                                        if let Some(office) = &professor.office {
                                            <span class="professor-office">{office.clone()}</span>
                                        }
                                    </button>
                                </li>
                            }
                        }) }
                    </ul>
                </>
            }
        }
    };

    html! {
        <div class="page course-details">
            <nav class="breadcrumbs">
                <a href="/" onclick={back}>{"Home"}</a>
                <span>{" / Course"}</span>
            </nav>
            {body}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Major;

    #[test]
    fn professor_link_uses_first_major_and_carries_ids() {
        let course = Course {
            id: "c1".into(),
            course_name: "Data Structures".into(),
            code: None,
            majors: vec![
                Major { id: None, title: "Computer Science".into(), college: String::new() },
                Major { id: None, title: "Software Engineering".into(), college: String::new() },
            ],
            professors: vec![],
        };
        let professor = Professor { id: "p9".into(), professor_name: "Dr. Brown".into(), email: None, office: None };
        let route = materials_route(&course, "c1", &professor).unwrap();
        assert_eq!(route.to_path(), "/Computer%20Science/Data%20Structures/Dr.%20Brown?professor_id=p9&course_id=c1");
    }

    #[test]
    fn course_without_majors_has_no_professor_link() {
        let course = Course { id: "c1".into(), course_name: "X".into(), code: None, majors: vec![], professors: vec![] };
        let professor = Professor { id: "p".into(), professor_name: "Dr. P".into(), email: None, office: None };
        assert!(materials_route(&course, "c1", &professor).is_none());
    }
}
