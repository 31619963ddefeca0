use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
pub struct Suggestion {
    pub suggestion: String,
    #[serde(default)]
    pub description: String,
}
