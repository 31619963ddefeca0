// ============================================================================
// CATALOG SERVICE - majors, courses, professors and their materials
// ============================================================================
// Read-only. Majors and courses fall back to the bundled mock catalog when
// the backend cannot be reached, and say so through `DataSource`.
// ============================================================================

use crate::config::CONFIG;
use crate::error::AppError;
use crate::models::{Course, Major, Material, MaterialKind};
use crate::services::api_client::ApiClient;
use crate::services::mock_catalog;
use crate::services::transport::{GlooTransport, Transport};
use crate::utils::matches_search;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataSource {
    Live,
    /// Bundled data; the view shows an offline notice.
    Mock,
}

/// A payload plus where it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct Sourced<T> {
    pub data: T,
    pub source: DataSource,
}

impl<T> Sourced<T> {
    pub fn live(data: T) -> Self {
        Self { data, source: DataSource::Live }
    }

    pub fn mock(data: T) -> Self {
        Self { data, source: DataSource::Mock }
    }

    pub fn is_mock(&self) -> bool {
        self.source == DataSource::Mock
    }
}

/// Majors of one college, in the order the backend listed them.
#[derive(Clone, Debug, PartialEq)]
pub struct CollegeGroup {
    pub college: String,
    pub majors: Vec<Major>,
}

pub fn group_by_college(majors: &[Major]) -> Vec<CollegeGroup> {
    let mut groups: Vec<CollegeGroup> = Vec::new();
    for major in majors {
        match groups.iter_mut().find(|g| g.college == major.college) {
            Some(group) => group.majors.push(major.clone()),
            None => groups.push(CollegeGroup {
                college: major.college.clone(),
                majors: vec![major.clone()],
            }),
        }
    }
    groups
}

/// Case-insensitive title search. Materials without a title only match an empty query.
pub fn filter_materials(materials: &[Material], query: &str) -> Vec<Material> {
    materials
        .iter()
        .filter(|m| matches_search(m.title.as_deref(), query))
        .cloned()
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogService<T = GlooTransport> {
    api: ApiClient<T>,
    mock_fallback: bool,
}

impl CatalogService<GlooTransport> {
    pub fn new() -> Self {
        Self::with_client(ApiClient::new(), CONFIG.use_mock_fallback)
    }
}

impl Default for CatalogService<GlooTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> CatalogService<T> {
    pub fn with_client(api: ApiClient<T>, mock_fallback: bool) -> Self {
        Self { api, mock_fallback }
    }

    fn fallback<R>(&self, what: &str, err: AppError, mock: impl FnOnce() -> R) -> Result<Sourced<R>, AppError> {
        if self.mock_fallback && err.is_unreachable() {
            log::warn!("📴 {} unavailable ({}), using bundled data", what, err);
            Ok(Sourced::mock(mock()))
        } else {
            Err(err)
        }
    }

    pub async fn majors(&self) -> Result<Sourced<Vec<Major>>, AppError> {
        match self.api.majors().await {
            Ok(majors) => {
                log::info!("🎓 {} majors loaded", majors.len());
                Ok(Sourced::live(majors))
            }
            Err(e) => self.fallback("majors", e, mock_catalog::majors),
        }
    }

    pub async fn courses_for_major(&self, major_title: &str) -> Result<Sourced<Vec<Course>>, AppError> {
        match self.api.courses_for_major(major_title).await {
            Ok(courses) => Ok(Sourced::live(courses)),
            Err(e) => self.fallback("courses", e, || mock_catalog::courses_for_major(major_title)),
        }
    }

    /// No fallback: a missing course is reported, not invented.
    pub async fn course(&self, course_id: &str) -> Result<Course, AppError> {
        self.api.course(course_id).await
    }

    /// No fallback here: there are no bundled materials.
    pub async fn materials(
        &self,
        major_title: &str,
        course_name: &str,
        professor_name: &str,
        kind: MaterialKind,
    ) -> Result<Vec<Material>, AppError> {
        self.api
            .materials(major_title, course_name, professor_name, kind)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::transport::testing::ScriptedTransport;
    use futures::executor::block_on;
    use serde_json::json;

    fn service(transport: &ScriptedTransport, mock_fallback: bool) -> CatalogService<ScriptedTransport> {
        CatalogService::with_client(ApiClient::with_transport(transport.clone()), mock_fallback)
    }

    fn major(title: &str, college: &str) -> Major {
        Major { id: None, title: title.into(), college: college.into() }
    }

    #[test]
    fn colleges_keep_first_appearance_order() {
        let majors = vec![
            major("Law", "College of Law"),
            major("Finance", "College of Business Administration"),
            major("Physics", "College of Arts and Sciences"),
            major("Accounting", "College of Business Administration"),
        ];
        let groups = group_by_college(&majors);
        let colleges: Vec<_> = groups.iter().map(|g| g.college.as_str()).collect();
        assert_eq!(colleges, vec!["College of Law", "College of Business Administration", "College of Arts and Sciences"]);
        let business: Vec<_> = groups[1].majors.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(business, vec!["Finance", "Accounting"]);
    }

    #[test]
    fn live_majors_are_flagged_live() {
        let transport = ScriptedTransport::new().reply(200, json!([{ "title": "Law", "college": "College of Law" }]));
        let result = block_on(service(&transport, true).majors()).unwrap();
        assert!(!result.is_mock());
        assert_eq!(result.data.len(), 1);
    }

    #[test]
    fn unreachable_backend_falls_back_to_mock_majors() {
        let transport = ScriptedTransport::new().fail(AppError::Network("offline".into()));
        let result = block_on(service(&transport, true).majors()).unwrap();
        assert!(result.is_mock());
        assert!(result.data.iter().any(|m| m.title == "Computer Science"));
    }

    #[test]
    fn fallback_disabled_surfaces_the_error() {
        let transport = ScriptedTransport::new().reply(503, json!({}));
        let err = block_on(service(&transport, false).majors()).unwrap_err();
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn malformed_body_never_falls_back() {
        let transport = ScriptedTransport::new().reply_raw(200, "<html>");
        let err = block_on(service(&transport, true).majors()).unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn mock_courses_are_filtered_to_the_major() {
        let transport = ScriptedTransport::new().reply(500, json!({ "message": "boom" }));
        let result = block_on(service(&transport, true).courses_for_major("Computer Science")).unwrap();
        assert!(result.is_mock());
        assert!(result.data.iter().all(|c| c.majors.iter().any(|m| m.title == "Computer Science")));
    }

    #[test]
    fn unknown_course_is_an_http_error_even_with_fallback_on() {
        let transport = ScriptedTransport::new().reply(404, json!({ "message": "Course not found" }));
        let err = block_on(service(&transport, true).course("does-not-exist")).unwrap_err();
        assert_eq!(err, AppError::Http { status: 404, message: "Course not found".into() });
    }

    #[test]
    fn unreachable_backend_does_not_invent_course_details() {
        let transport = ScriptedTransport::new().fail(AppError::Network("offline".into()));
        let err = block_on(service(&transport, true).course("mock-cs-101")).unwrap_err();
        assert!(matches!(err, AppError::Network(_)));
    }

    #[test]
    fn title_search_is_case_insensitive_and_skips_untitled() {
        let materials = vec![
            Material { title: Some("Midterm Review".into()), ..Default::default() },
            Material { title: None, ..Default::default() },
            Material { title: Some("Final".into()), ..Default::default() },
        ];
        assert_eq!(filter_materials(&materials, "REVIEW").len(), 1);
        assert_eq!(filter_materials(&materials, "").len(), 3);
    }
}
