use serde::{Deserialize, Serialize};

use super::material::{Material, MaterialContent};

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
pub struct PlaylistMaterial {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub material_type: Option<String>,
    #[serde(default)]
    pub data: String,
}

impl PlaylistMaterial {
    pub fn content(&self) -> MaterialContent {
        MaterialContent::from_url(&self.data)
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub materials: Vec<PlaylistMaterial>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct NewPlaylist {
    pub name: String,
}

/// Body of `POST /playlists/{id}/materials`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct AddMaterialRequest {
    pub title: String,
    #[serde(rename = "type")]
    pub material_type: Option<String>,
    pub data: String,
}

impl From<&Material> for AddMaterialRequest {
    fn from(material: &Material) -> Self {
        Self {
            title: material.display_title(),
            material_type: material.material_type.clone(),
            data: material.data.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_request_uses_file_name_when_untitled() {
        let material = Material {
            material_type: Some("notes".into()),
            data: "https://files.example.edu/week3-notes.pdf".into(),
            ..Default::default()
        };
        let req = AddMaterialRequest::from(&material);
        assert_eq!(req.title, "week3-notes");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["type"], "notes");
    }

    #[test]
    fn playlist_without_materials_defaults_empty() {
        let p: Playlist = serde_json::from_str(r#"{ "id": "p1", "name": "Finals" }"#).unwrap();
        assert!(p.materials.is_empty());
    }
}
