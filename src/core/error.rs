//! Error types for data file loading.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that can occur when loading RON data files.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// The file parsed but its values make no sense.
    #[error("Invalid data in '{path}': {details}")]
    Invalid { path: String, details: String },
}

/// Read and deserialize one RON file.
pub fn load_ron_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, DataLoadError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    if !path.exists() {
        return Err(DataLoadError::FileNotFound(display));
    }

    let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
        path: display.clone(),
        details: e.to_string(),
    })?;

    ron::from_str(&contents).map_err(|e| DataLoadError::ParseError {
        path: display,
        details: e.to_string(),
    })
}
