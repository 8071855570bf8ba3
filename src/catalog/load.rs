use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{AppError, AppResult};

use super::types::{Catalog, CatalogEntry};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    projects: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CatalogFormat {
    Toml,
    Json,
}

impl CatalogFormat {
    fn from_path(path: &Path) -> AppResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(AppError::invalid_argument(format!(
                "catalog must be a .toml or .json file: {}",
                path.display()
            ))),
        }
    }
}

/// Reads a catalog file. An empty `projects` list is returned as an empty
/// catalog; rejecting it is the selection coordinator's call.
pub fn load_catalog_file(path: impl AsRef<Path>) -> AppResult<Catalog> {
    let path = path.as_ref();
    let format = CatalogFormat::from_path(path)?;
    let raw = fs::read_to_string(path).map_err(|source| {
        AppError::io_with_context(source, format!("failed to read catalog: {}", path.display()))
    })?;

    let parsed = match format {
        CatalogFormat::Toml => toml::from_str::<CatalogFile>(&raw)
            .map_err(|err| AppError::catalog_parse(path, err.to_string()))?,
        CatalogFormat::Json => serde_json::from_str::<CatalogFile>(&raw)
            .map_err(|err| AppError::catalog_parse(path, err.to_string()))?,
    };
    Catalog::new(parsed.projects)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::process;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::load_catalog_file;
    use crate::catalog::{Category, ProjectStatus};
    use crate::error::AppError;

    fn unique_temp_path(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("folio_catalog_{}_{}_{name}", process::id(), nanos));
        path
    }

    #[test]
    fn loads_toml_projects_in_file_order() {
        let path = unique_temp_path("projects.toml");
        fs::write(
            &path,
            r#"
            [[projects]]
            id = "b"
            title = "Beta"
            description = "second letter"
            github_url = "https://example.com/beta"
            status = "in-progress"
            category = "backend"
            technologies = ["Rust"]

            [[projects]]
            id = "a"
            title = "Alpha"
            description = "first letter"
            github_url = "https://example.com/alpha"
            live_url = "https://alpha.example.com"
            status = "completed"
            category = "frontend"
            featured = true
            "#,
        )
        .expect("catalog should be written");

        let catalog = load_catalog_file(&path).expect("catalog should parse");
        let ids: Vec<&str> = catalog.iter().map(|entry| entry.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);

        let beta = catalog.get("b").expect("beta present");
        assert_eq!(beta.project.status, ProjectStatus::InProgress);
        assert_eq!(beta.project.category, Category::Backend);
        assert_eq!(beta.project.live_url, None);
        assert!(catalog.get("a").expect("alpha present").project.featured);

        fs::remove_file(&path).expect("catalog should be removed");
    }

    #[test]
    fn loads_json_projects() {
        let path = unique_temp_path("projects.json");
        fs::write(
            &path,
            r#"{"projects": [{
                "id": "x",
                "title": "X",
                "description": "d",
                "github_url": "https://example.com/x",
                "status": "planning",
                "category": "mobile"
            }]}"#,
        )
        .expect("catalog should be written");

        let catalog = load_catalog_file(&path).expect("catalog should parse");
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.first().map(|entry| entry.project.status),
            Some(ProjectStatus::Planning)
        );

        fs::remove_file(&path).expect("catalog should be removed");
    }

    #[test]
    fn unrecognized_status_loads_as_unknown() {
        let path = unique_temp_path("archived.toml");
        fs::write(
            &path,
            r#"
            [[projects]]
            id = "old"
            title = "Old"
            description = "retired"
            github_url = "https://example.com/old"
            status = "archived"
            category = "backend"
            "#,
        )
        .expect("catalog should be written");

        let catalog = load_catalog_file(&path).expect("unknown status should not fail the catalog");
        assert_eq!(
            catalog.get("old").map(|entry| entry.project.status),
            Some(ProjectStatus::Unknown)
        );

        fs::remove_file(&path).expect("catalog should be removed");
    }

    #[test]
    fn rejects_unknown_extension_and_bad_content() {
        let yaml = unique_temp_path("projects.yaml");
        assert!(matches!(
            load_catalog_file(&yaml),
            Err(AppError::InvalidArgument(_))
        ));

        let path = unique_temp_path("broken.toml");
        fs::write(&path, "[[projects]]\nid = 3").expect("catalog should be written");
        assert!(matches!(
            load_catalog_file(&path),
            Err(AppError::CatalogParse { .. })
        ));
        fs::remove_file(&path).expect("catalog should be removed");
    }
}
