use yew::prelude::*;

use crate::models::MaterialContent;

#[derive(Properties, PartialEq)]
pub struct MaterialPreviewProps {
    pub title: AttrValue,
    pub url: AttrValue,
}

/// Inline viewer picked from the file extension.
#[function_component(MaterialPreview)]
pub fn material_preview(props: &MaterialPreviewProps) -> Html {
    let url = props.url.clone();
    match MaterialContent::from_url(&url) {
        MaterialContent::Image => html! {
            <img class="material-image" src={url} alt={props.title.clone()} loading="lazy" />
        },
        MaterialContent::Pdf => html! {
            <iframe class="material-pdf" src={url} title={props.title.clone()}></iframe>
        },
        MaterialContent::Video => html! {
            <video class="material-video" src={url} controls=true></video>
        },
        MaterialContent::Audio => html! {
            <audio class="material-audio" src={url} controls=true></audio>
        },
        MaterialContent::External => html! {
            <a class="material-link" href={url} target="_blank" rel="noopener noreferrer">{"Open material ↗"}</a>
        },
    }
}
