//! Template Service - template family queries.
//!
//! Read-only view over the family registry for listing and help output.
//! Separated from ScaffoldService for single responsibility.

use serde::Serialize;

use crate::{
    domain::{FAMILY_REGISTRY, ProjectConfig, TemplateFamily},
    error::DeployResult,
};

/// Information about a template family for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub selector: String,
    pub language: String,
    pub description: String,
    pub files: Vec<String>,
}

/// Service for template family queries.
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateService;

impl TemplateService {
    pub fn new() -> Self {
        Self
    }

    /// List every registered family with the files it generates.
    pub fn list(&self) -> DeployResult<Vec<TemplateInfo>> {
        // File paths are fixed per family, so any valid config will do.
        let sample = ProjectConfig::builder().project_name("example").build()?;

        Ok(FAMILY_REGISTRY
            .iter()
            .map(|def| TemplateInfo {
                selector: def.selector.to_string(),
                language: def.language.display_name().to_string(),
                description: def.description.to_string(),
                files: (def.build)(&sample)
                    .paths()
                    .map(ToString::to_string)
                    .collect(),
            })
            .collect())
    }

    /// Look up one family by selector.
    pub fn get(&self, selector: &str) -> DeployResult<TemplateFamily> {
        Ok(TemplateFamily::from_selector(selector)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_includes_every_family_in_registry_order() {
        let infos = TemplateService::new().list().unwrap();
        let selectors: Vec<_> = infos.iter().map(|i| i.selector.as_str()).collect();
        assert_eq!(selectors, ["go", "nodejs", "python"]);
    }

    #[test]
    fn list_reports_generated_files() {
        let infos = TemplateService::new().list().unwrap();
        let go = &infos[0];
        assert!(go.files.iter().any(|f| f == "go.mod"));
        assert!(go.files.iter().any(|f| f == ".deploygo.yml"));
        assert_eq!(infos[1].language, "Node.js");
    }

    #[test]
    fn get_rejects_unknown_selector() {
        assert!(TemplateService::new().get("ruby").is_err());
        assert_eq!(
            TemplateService::new().get("go").unwrap(),
            TemplateFamily::Go
        );
    }
}
