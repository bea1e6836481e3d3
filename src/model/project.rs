//! Project identity and the seed data the board starts from

use super::category::Category;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

/// Stable identifier naming one project across list moves
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Initial content of one project on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSeed {
    pub id: ProjectId,
    pub title: String,
    /// Extra information shown in the project's tooltip
    #[serde(default)]
    pub info: String,
    pub category: Category,
}

impl ProjectSeed {
    pub fn new(id: &str, title: &str, info: &str, category: Category) -> Self {
        Self {
            id: ProjectId::new(id),
            title: title.to_string(),
            info: info.to_string(),
            category,
        }
    }
}

/// Load project seeds from a JSON file
///
/// The file holds an array of seeds. Duplicate ids are rejected because an
/// identifier must name exactly one project.
pub fn load_seeds(path: &Path) -> Result<Vec<ProjectSeed>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    parse_seeds(&contents).with_context(|| format!("Invalid seed file {}", path.display()))
}

/// Parse project seeds from JSON text
pub fn parse_seeds(contents: &str) -> Result<Vec<ProjectSeed>> {
    let seeds: Vec<ProjectSeed> = serde_json::from_str(contents)?;

    let mut seen = HashSet::new();
    for seed in &seeds {
        if !seen.insert(&seed.id) {
            anyhow::bail!("duplicate project id `{}`", seed.id);
        }
    }

    Ok(seeds)
}

/// Built-in board used when no seed file is configured
pub fn sample_seeds() -> Vec<ProjectSeed> {
    vec![
        ProjectSeed::new(
            "p1",
            "Finish the Course",
            "Finish the course within the next two weeks.",
            Category::Active,
        ),
        ProjectSeed::new(
            "p2",
            "Buy Groceries",
            "Don't forget to pick up some bread and milk.",
            Category::Active,
        ),
        ProjectSeed::new(
            "p3",
            "Book Hotel",
            "Academind conference takes place in December, don't forget about that.",
            Category::Finished,
        ),
    ]
}
