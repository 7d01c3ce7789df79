//! Template catalog functionality.
//!
//! Templates are JSON documents describing a project structure plus
//! metadata. The manager scans a templates directory recursively, keeps a
//! registry keyed by template name, and answers lookup/search/listing
//! queries. Individual documents that fail to load are skipped with a log
//! message so one broken file does not hide the rest of the catalog.

use crate::error::{Error, Result};
use crate::generator::{Generator, Options, Stats};
use crate::model::Node;
use crate::structure;
use crate::validators;
use indexmap::IndexMap;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_category() -> String {
    "other".to_string()
}

/// Template metadata as declared in the JSON document.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TemplateInfo {
    pub name: String,
    pub description: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TemplateDocument {
    #[serde(flatten)]
    info: TemplateInfo,
    structure: Option<serde_json::Value>,
}

/// A loaded template: metadata plus the raw structure object.
#[derive(Debug, Clone)]
pub struct Template {
    pub info: TemplateInfo,
    pub structure: serde_json::Value,
    pub source_path: PathBuf,
}

impl Template {
    /// Loads and parses a single template document.
    ///
    /// # Errors
    /// * `Error::FileNotFound` / `Error::PermissionDenied` if unreadable
    /// * `Error::InvalidJsonFormat` if the document does not parse
    /// * `Error::InvalidTemplateStructure` if `structure` is missing
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        validators::validate_file_readable(path)?;

        let content = std::fs::read_to_string(path).map_err(Error::IoError)?;
        let document: TemplateDocument =
            serde_json::from_str(&content).map_err(|e| Error::InvalidJsonFormat {
                message: format!("failed to parse template: {}", path.display()),
                detail: e.to_string(),
            })?;

        let Some(structure) = document.structure else {
            return Err(Error::InvalidTemplateStructure(format!(
                "template missing 'structure' field: {}",
                path.display()
            )));
        };

        Ok(Self { info: document.info, structure, source_path: path.to_path_buf() })
    }

    pub fn is_valid(&self) -> bool {
        !self.info.name.is_empty()
            && !self.info.description.is_empty()
            && self.structure.is_object()
    }
}

/// Returns the first existing candidate templates directory, falling back
/// to `./templates`.
pub fn default_templates_dir() -> PathBuf {
    let candidates = [
        "./templates",
        "../templates",
        "/usr/share/mason/templates",
        "/usr/local/share/mason/templates",
    ];

    candidates
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_dir())
        .unwrap_or_else(|| PathBuf::from("./templates"))
}

/// Discovers and serves templates from a directory.
pub struct TemplateManager {
    templates_dir: PathBuf,
    templates: IndexMap<String, Template>,
}

impl TemplateManager {
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        Self { templates_dir: templates_dir.into(), templates: IndexMap::new() }
    }

    pub fn with_default_dir() -> Self {
        Self::new(default_templates_dir())
    }

    /// Scans the templates directory recursively for `.json` documents and
    /// rebuilds the registry. A template that fails to load is skipped.
    ///
    /// # Errors
    /// * `Error::DirectoryNotFound` if the templates directory is missing
    pub fn load(&mut self) -> Result<()> {
        info!("Loading templates from '{}'", self.templates_dir.display());

        if !self.templates_dir.exists() {
            return Err(Error::DirectoryNotFound(format!(
                "templates directory not found: {}",
                self.templates_dir.display()
            )));
        }

        self.templates.clear();

        for entry in WalkDir::new(&self.templates_dir) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Error scanning templates directory: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() || !validators::has_json_extension(entry.path()) {
                continue;
            }

            match Template::load_from_file(entry.path()) {
                Ok(template) => {
                    debug!("Loaded template '{}'", template.info.name);
                    self.templates.insert(template.info.name.clone(), template);
                }
                Err(e) => {
                    warn!("Skipping template '{}': {}", entry.path().display(), e);
                }
            }
        }

        info!("Loaded {} templates", self.templates.len());
        Ok(())
    }

    /// All template names, sorted.
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.templates.keys().cloned().collect();
        names.sort();
        names
    }

    /// All categories, sorted and deduplicated.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> =
            self.templates.values().map(|t| t.info.category.clone()).collect();
        categories.sort();
        categories.dedup();
        categories
    }

    pub fn list_in_category(&self, category: &str) -> Vec<&TemplateInfo> {
        self.templates
            .values()
            .filter(|t| t.info.category == category)
            .map(|t| &t.info)
            .collect()
    }

    /// Case-insensitive substring search over template names and
    /// descriptions.
    pub fn search(&self, query: &str) -> Vec<&TemplateInfo> {
        let query = query.to_lowercase();

        self.templates
            .values()
            .filter(|t| {
                t.info.name.to_lowercase().contains(&query)
                    || t.info.description.to_lowercase().contains(&query)
            })
            .map(|t| &t.info)
            .collect()
    }

    /// # Errors
    /// * `Error::TemplateNotFound` for an unknown name
    pub fn get(&self, name: &str) -> Result<&Template> {
        self.templates.get(name).ok_or_else(|| Error::TemplateNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// # Errors
    /// * `Error::TemplateInvalid` when required metadata is missing or the
    ///   structure is not an object
    /// * `Error::InvalidTemplateStructure` when a structure value is
    ///   neither a string nor a nested object
    pub fn validate(&self, template: &Template) -> Result<()> {
        if !template.is_valid() {
            return Err(Error::TemplateInvalid(template.info.name.clone()));
        }

        if !valid_structure(&template.structure) {
            return Err(Error::InvalidTemplateStructure(template.info.name.clone()));
        }

        Ok(())
    }

    /// Converts the named template's structure to a hierarchy rooted at
    /// `project_name` and materializes it.
    pub fn generate_from_template(
        &self,
        name: &str,
        project_name: &str,
        destination: impl AsRef<Path>,
        options: Options,
    ) -> Result<Stats> {
        info!("Generating project from template '{}'", name);

        let template = self.get(name)?;
        self.validate(template)?;

        let root: Node = structure::from_json(&template.structure, project_name)?;

        Generator::new(options).generate(&root, destination)
    }
}

/// A structure value is a string (file) or an object (directory), all the
/// way down.
fn valid_structure(structure: &serde_json::Value) -> bool {
    let Some(object) = structure.as_object() else {
        return false;
    };

    object.values().all(|value| match value {
        serde_json::Value::Object(_) => valid_structure(value),
        serde_json::Value::String(_) => true,
        _ => false,
    })
}
