// ============================================================================
// ROUTER - typed route table over the History API
// ============================================================================

use urlencoding::{decode, encode};

use crate::models::MaterialKind;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Major { title: String },
    Course { id: String },
    /// `/{major}/{course}/{professor}[/{kind}]?professor_id=..&course_id=..`
    Materials {
        major: String,
        course: String,
        professor: String,
        kind: Option<MaterialKind>,
        professor_id: Option<String>,
        course_id: Option<String>,
    },
    Suggestions,
    Playlists,
    Playlist { id: String },
    NotFound,
}

fn decode_segment(raw: &str) -> String {
    decode(raw).map(|s| s.into_owned()).unwrap_or_else(|_| raw.to_string())
}

fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| decode_segment(v))
        .filter(|v| !v.is_empty())
}

impl Route {
    /// Parses `path[?query]`. Anything unrecognised is `NotFound`.
    pub fn parse(location: &str) -> Self {
        let (path, query) = location.split_once('?').unwrap_or((location, ""));
        let path = path.split('#').next().unwrap_or(path);
        let segments: Vec<String> = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(decode_segment)
            .collect();
        let segs: Vec<&str> = segments.iter().map(String::as_str).collect();

        match segs.as_slice() {
            [] => Route::Home,
            ["major", title] => Route::Major { title: title.to_string() },
            ["course", id] => Route::Course { id: id.to_string() },
            ["suggestions"] => Route::Suggestions,
            ["playlists"] => Route::Playlists,
            ["playlists", id] => Route::Playlist { id: id.to_string() },
            [major, course, professor, rest @ ..] if rest.len() <= 1 => {
                let kind = match rest.first() {
                    Some(raw) => match raw.parse::<MaterialKind>() {
                        Ok(kind) => Some(kind),
                        Err(_) => return Route::NotFound,
                    },
                    None => None,
                };
                Route::Materials {
                    major: major.to_string(),
                    course: course.to_string(),
                    professor: professor.to_string(),
                    kind,
                    professor_id: query_param(query, "professor_id"),
                    course_id: query_param(query, "course_id"),
                }
            }
            _ => Route::NotFound,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Major { title } => format!("/major/{}", encode(title)),
            Route::Course { id } => format!("/course/{}", encode(id)),
            Route::Materials { major, course, professor, kind, professor_id, course_id } => {
                let mut path = format!("/{}/{}/{}", encode(major), encode(course), encode(professor));
                if let Some(kind) = kind {
                    path.push('/');
                    path.push_str(kind.as_str());
                }
                let params: Vec<String> = [("professor_id", professor_id), ("course_id", course_id)]
                    .into_iter()
                    .filter_map(|(key, value)| value.as_ref().map(|v| format!("{}={}", key, encode(v))))
                    .collect();
                if !params.is_empty() {
                    path.push('?');
                    path.push_str(&params.join("&"));
                }
                path
            }
            Route::Suggestions => "/suggestions".to_string(),
            Route::Playlists => "/playlists".to_string(),
            Route::Playlist { id } => format!("/playlists/{}", encode(id)),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Same materials page with another kind; other routes are returned unchanged.
    pub fn with_kind(&self, new_kind: MaterialKind) -> Self {
        match self {
            Route::Materials { major, course, professor, professor_id, course_id, .. } => Route::Materials {
                major: major.clone(),
                course: course.clone(),
                professor: professor.clone(),
                kind: Some(new_kind),
                professor_id: professor_id.clone(),
                course_id: course_id.clone(),
            },
            other => other.clone(),
        }
    }
}

/// Route for the browser's current location.
pub fn current_route() -> Route {
    web_sys::window()
        .map(|w| w.location())
        .and_then(|loc| Some(format!("{}{}", loc.pathname().ok()?, loc.search().unwrap_or_default())))
        .map(|location| Route::parse(&location))
        .unwrap_or(Route::Home)
}

/// Pushes a history entry. The caller re-renders.
pub fn push_route(route: &Route) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        log::warn!("⚠️ History API unavailable");
        return;
    };
    if let Err(e) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&route.to_path())) {
        log::error!("❌ pushState failed: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn materials(kind: Option<MaterialKind>, professor_id: Option<&str>, course_id: Option<&str>) -> Route {
        Route::Materials {
            major: "Computer Science".into(),
            course: "Data Structures".into(),
            professor: "Dr. Emily Brown".into(),
            kind,
            professor_id: professor_id.map(str::to_string),
            course_id: course_id.map(str::to_string),
        }
    }

    #[test]
    fn every_route_survives_format_then_parse() {
        let routes = vec![
            Route::Home,
            Route::Major { title: "Human Resource Management".into() },
            Route::Course { id: "285dbf9e-adb5".into() },
            materials(None, None, None),
            materials(Some(MaterialKind::Assignments), Some("prof 1"), Some("c/7")),
            materials(Some(MaterialKind::Olds), None, Some("c7")),
            Route::Suggestions,
            Route::Playlists,
            Route::Playlist { id: "p-42".into() },
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.to_path()), route, "{}", route.to_path());
        }
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::parse("/major"), Route::NotFound);
        assert_eq!(Route::parse("/a/b/c/slides"), Route::NotFound);
        assert_eq!(Route::parse("/a/b/c/d/e"), Route::NotFound);
        assert_eq!(Route::parse("/404"), Route::NotFound);
    }

    #[test]
    fn trailing_slash_and_fragment_are_ignored() {
        assert_eq!(Route::parse("/playlists/"), Route::Playlists);
        assert_eq!(Route::parse("/suggestions#top"), Route::Suggestions);
    }

    #[test]
    fn with_kind_keeps_ids() {
        let route = materials(None, Some("p1"), Some("c1")).with_kind(MaterialKind::Notes);
        assert_eq!(route, materials(Some(MaterialKind::Notes), Some("p1"), Some("c1")));
        assert_eq!(Route::Home.with_kind(MaterialKind::Notes), Route::Home);
    }
}
