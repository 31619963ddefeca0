use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Major {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub college: String,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Professor {
    pub id: String,
    #[serde(rename = "professorName")]
    pub professor_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub office: Option<String>,
}

/// Course record; the list endpoint and the detail endpoint share it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Course {
    pub id: String,
    #[serde(rename = "courseName")]
    pub course_name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub majors: Vec<Major>,
    #[serde(default)]
    pub professors: Vec<Professor>,
}

impl Course {
    /// Major used to build professor material links (the first listed one).
    pub fn primary_major(&self) -> Option<&Major> {
        self.majors.first()
    }
}
