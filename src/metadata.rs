use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Project-level settings fetched once per view activation. A missing start
/// date means no calendar anchor exists yet and no bars can be produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectMetadata {
    pub project_name: String,
    pub project_description: String,
    #[serde(default, alias = "start_date")]
    pub project_start_date: Option<NaiveDate>,
}

impl Default for ProjectMetadata {
    fn default() -> Self {
        Self {
            project_name: "New Project".to_string(),
            project_description: "No description".to_string(),
            project_start_date: None,
        }
    }
}
