use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planning,
    /// Any status string this build does not know.
    #[serde(other)]
    Unknown,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in progress",
            Self::Planning => "planning",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Frontend,
    Fullstack,
    Backend,
    Mobile,
}

/// Descriptive payload of a catalog entry. Never inspected by selection logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub github_url: String,
    #[serde(default)]
    pub live_url: Option<String>,
    pub status: ProjectStatus,
    pub category: Category,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    #[serde(flatten)]
    pub project: Project,
}

/// Ordered, read-only list of entries with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> AppResult<Self> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(AppError::DuplicateEntry {
                    id: entry.id.clone(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// For static data whose ids are unique by construction.
    pub(super) fn from_static(entries: Vec<CatalogEntry>) -> Self {
        debug_assert!(Self::new(entries.clone()).is_ok());
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first(&self) -> Option<&CatalogEntry> {
        self.entries.first()
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn at(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::Catalog;
    use crate::catalog::sample_catalog;
    use crate::error::AppError;

    #[test]
    fn new_rejects_duplicate_ids() {
        let mut entries = sample_catalog().entries().to_vec();
        let mut duplicate = entries[0].clone();
        duplicate.project.title = "Copy".to_string();
        entries.push(duplicate);

        let err = Catalog::new(entries).expect_err("duplicates should be rejected");
        assert!(matches!(err, AppError::DuplicateEntry { ref id } if id == "1"));
    }

    #[test]
    fn lookups_follow_display_order() {
        let catalog = sample_catalog();
        assert_eq!(catalog.first().map(|e| e.id.as_str()), Some("1"));
        assert_eq!(catalog.position("3"), Some(2));
        assert_eq!(catalog.at(1).map(|e| e.id.as_str()), Some("2"));
        assert!(catalog.get("missing").is_none());
    }
}
