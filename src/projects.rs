// Project gallery data.
// Loads the static list of portfolio entries from a local JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;

/// One linked image card within a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCard {
    pub link: String,
    pub image: String,
    pub alt: String,
}

/// A portfolio entry and its cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub cards: Vec<ProjectCard>,
}

/// Read and decode the gallery file.
pub async fn load_projects(path: &Path) -> Result<Vec<Project>> {
    let contents = tokio::fs::read_to_string(path).await.inspect_err(|e| {
        warn!(path = %path.display(), error = %e, "failed to read project gallery");
    })?;
    let projects = parse_projects(&contents)?;
    info!(count = projects.len(), "project gallery loaded");
    Ok(projects)
}

pub fn parse_projects(json: &str) -> Result<Vec<Project>> {
    Ok(serde_json::from_str(json)?)
}
