use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Material categories the backend files uploads under.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    Notes,
    Assignments,
    #[default]
    Olds,
}

impl MaterialKind {
    pub const ALL: [MaterialKind; 3] = [MaterialKind::Notes, MaterialKind::Assignments, MaterialKind::Olds];

    /// Path segment and form value.
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialKind::Notes => "notes",
            MaterialKind::Assignments => "assignments",
            MaterialKind::Olds => "olds",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MaterialKind::Notes => "Lecture Notes",
            MaterialKind::Assignments => "Assignments",
            MaterialKind::Olds => "Old Exams",
        }
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaterialKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "notes" => Ok(MaterialKind::Notes),
            "assignments" => Ok(MaterialKind::Assignments),
            "olds" => Ok(MaterialKind::Olds),
            other => Err(format!("unknown material type: {}", other)),
        }
    }
}

/// A published course material. `data` is the file URL.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
pub struct Material {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "type", default)]
    pub material_type: Option<String>,
    #[serde(default)]
    pub data: String,
}

impl Material {
    /// Title for display; falls back to the file name in the URL.
    pub fn display_title(&self) -> String {
        match self.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => crate::utils::extract_file_name(&self.data),
        }
    }

    pub fn content(&self) -> MaterialContent {
        MaterialContent::from_url(&self.data)
    }
}

/// How a material URL is previewed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MaterialContent {
    Image,
    Pdf,
    Video,
    Audio,
    External,
}

impl MaterialContent {
    /// Decided by extension, checked in order: `.ogg` counts as video.
    pub fn from_url(url: &str) -> Self {
        let path = url.split(['?', '#']).next().unwrap_or(url);
        let ext = path
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "jpeg" | "jpg" | "gif" | "png" => MaterialContent::Image,
            "pdf" => MaterialContent::Pdf,
            "mp4" | "webm" | "ogg" => MaterialContent::Video,
            "mp3" | "wav" => MaterialContent::Audio,
            _ => MaterialContent::External,
        }
    }
}
