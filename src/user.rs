use serde::{Deserialize, Serialize};

/// Referenced by work-package and task assignment sets; owns nothing on the
/// timeline itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wage: Option<f64>,
}

impl User {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            wage: None,
        }
    }
}
