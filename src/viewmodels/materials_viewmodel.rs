use crate::models::{Material, MaterialKind};
use crate::services::filter_materials;

/// Search box + kind selector over the fetched materials of one professor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MaterialsViewModel {
    pub materials: Vec<Material>,
    pub search: String,
    pub kind: MaterialKind,
}

impl MaterialsViewModel {
    pub fn new(kind: MaterialKind, materials: Vec<Material>) -> Self {
        Self { materials, search: String::new(), kind }
    }

    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self { search: search.into(), ..self.clone() }
    }

    pub fn visible(&self) -> Vec<Material> {
        filter_materials(&self.materials, &self.search)
    }

    /// Message for an empty result, distinguishing "nothing uploaded" from "nothing matched".
    pub fn empty_message(&self) -> Option<String> {
        if !self.visible().is_empty() {
            return None;
        }
        Some(if self.materials.is_empty() {
            format!("No {} available yet.", self.kind.label().to_lowercase())
        } else {
            format!("No materials match \"{}\".", self.search.trim())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(title: &str) -> Material {
        Material { title: Some(title.into()), data: format!("https://cdn/{}.pdf", title), ..Default::default() }
    }

    #[test]
    fn search_narrows_visible_materials() {
        let vm = MaterialsViewModel::new(MaterialKind::Notes, vec![titled("Week 1"), titled("Week 2"), titled("Syllabus")]);
        assert_eq!(vm.visible().len(), 3);
        assert_eq!(vm.with_search("week").visible().len(), 2);
    }

    #[test]
    fn empty_messages_tell_cases_apart() {
        let none = MaterialsViewModel::new(MaterialKind::Olds, vec![]);
        assert_eq!(none.empty_message().as_deref(), Some("No old exams available yet."));

        let unmatched = MaterialsViewModel::new(MaterialKind::Olds, vec![titled("Final")]).with_search("quiz");
        assert_eq!(unmatched.empty_message().as_deref(), Some("No materials match \"quiz\"."));
        assert!(unmatched.with_search("").empty_message().is_none());
    }
}
