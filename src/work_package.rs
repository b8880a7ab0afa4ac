use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Closed,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Closed => "closed",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Status::Active),
            "closed" => Some(Status::Closed),
            _ => None,
        }
    }
}

/// Top-level timeline entity. Tasks reference their owning work package by
/// id; `start_month`/`end_month` are project-month indices counted from 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkPackage {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: Status,
    #[serde(alias = "start_date")]
    pub start_month: i32,
    #[serde(alias = "end_date")]
    pub end_month: i32,
    #[serde(default)]
    pub users: Vec<i32>,
}

impl WorkPackage {
    pub fn new(id: i32, name: impl Into<String>, start_month: i32, end_month: i32) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            status: Status::Active,
            start_month,
            end_month,
            users: Vec::new(),
        }
    }
}
