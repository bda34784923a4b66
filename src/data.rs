use rust_embed::Embed;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{Blog, Lecture, Project};

/// Collections bundled into the binary, served when the API is unavailable.
#[derive(Embed)]
#[folder = "data"]
pub struct FallbackData;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    #[error("Bundled data file {0} is missing")]
    Missing(&'static str),
    #[error("Couldn't parse bundled data file {file}: {reason}")]
    Malformed { file: &'static str, reason: String },
}

fn load<T: DeserializeOwned>(file: &'static str) -> Result<Vec<T>, DataError> {
    let content = FallbackData::get(file).ok_or(DataError::Missing(file))?;
    serde_json::from_slice(&content.data).map_err(|e| DataError::Malformed {
        file,
        reason: e.to_string(),
    })
}

pub fn projects() -> Result<Vec<Project>, DataError> {
    load("projects.json")
}

pub fn blogs() -> Result<Vec<Blog>, DataError> {
    load("blogs.json")
}

pub fn lectures() -> Result<Vec<Lecture>, DataError> {
    load("lectures.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_data_parses() {
        let projects = projects().expect("projects.json should parse");
        assert!(!projects.is_empty());
        let blogs = blogs().expect("blogs.json should parse");
        assert!(!blogs.is_empty());
        let lectures = lectures().expect("lectures.json should parse");
        assert!(!lectures.is_empty());
    }

    #[test]
    fn test_bundled_ids_unique() {
        let mut ids = projects()
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect::<Vec<_>>();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_missing_file() {
        assert_eq!(
            load::<Project>("nope.json"),
            Err(DataError::Missing("nope.json"))
        );
    }
}
