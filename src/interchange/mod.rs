use crate::snapshot::ProjectSnapshot;
use crate::snapshot_validation;
use serde_json::Error as SerdeJsonError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum InterchangeError {
    Serialization(SerdeJsonError),
    Io(io::Error),
    Csv(csv::Error),
    InvalidData(String),
}

impl fmt::Display for InterchangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterchangeError::Serialization(err) => write!(f, "serialization error: {err}"),
            InterchangeError::Io(err) => write!(f, "io error: {err}"),
            InterchangeError::Csv(err) => write!(f, "csv error: {err}"),
            InterchangeError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
        }
    }
}

impl std::error::Error for InterchangeError {}

impl From<SerdeJsonError> for InterchangeError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

impl From<io::Error> for InterchangeError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for InterchangeError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

pub type InterchangeResult<T> = Result<T, InterchangeError>;

pub fn validate_snapshot(snapshot: &ProjectSnapshot) -> InterchangeResult<()> {
    snapshot_validation::validate_snapshot(snapshot)
        .map_err(|err| InterchangeError::InvalidData(err.to_string()))
}

pub mod file;

pub use file::{
    load_snapshot_from_json, save_snapshot_to_json, save_timeline_to_csv, save_timeline_to_json,
};
