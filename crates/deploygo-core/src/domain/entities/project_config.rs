//! Project configuration: the immutable input to every scaffold run.

use std::fmt;

use serde::{Serialize, Serializer, ser::SerializeStruct};

use crate::domain::{
    error::DomainError,
    value_objects::{Language, Port, ProjectName, Version},
};

/// What is being generated.
///
/// Fields are private; a `ProjectConfig` can only be obtained from
/// [`ProjectConfigBuilder::build`], which validates every field. Its
/// serialized form is the render context handed to template renderers:
///
/// ```text
/// { "project_name": "My Api", "project_slug": "my-api", "language": "go",
///   "port": 9090, "version": "1.0.0" }
/// ```
///
/// `project_slug` is derived, never stored. Templates use it wherever the
/// name must be a lowercase identifier, such as Docker image references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    project_name: ProjectName,
    language: Language,
    port: Port,
    version: Version,
}

impl ProjectConfig {
    pub fn builder() -> ProjectConfigBuilder {
        ProjectConfigBuilder::default()
    }

    pub fn project_name(&self) -> &ProjectName {
        &self.project_name
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn port(&self) -> Port {
        self.port
    }

    pub fn version(&self) -> &Version {
        &self.version
    }
}

impl Serialize for ProjectConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ProjectConfig", 5)?;
        state.serialize_field("project_name", &self.project_name)?;
        state.serialize_field("project_slug", &self.project_name.slug())?;
        state.serialize_field("language", &self.language)?;
        state.serialize_field("port", &self.port)?;
        state.serialize_field("version", &self.version)?;
        state.end()
    }
}

impl fmt::Display for ProjectConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, port {}, v{})",
            self.project_name, self.language, self.port, self.version
        )
    }
}

/// Builder for [`ProjectConfig`].
///
/// Only the project name is required. Language defaults to Go, port to
/// 8080 and version to `1.0.0`.
#[derive(Debug, Default, Clone)]
pub struct ProjectConfigBuilder {
    project_name: Option<String>,
    language: Option<Language>,
    port: Option<u16>,
    version: Option<String>,
}

impl ProjectConfigBuilder {
    pub fn project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn build(self) -> Result<ProjectConfig, DomainError> {
        let name = self
            .project_name
            .ok_or(DomainError::MissingRequiredField {
                field: "project_name",
            })?;

        Ok(ProjectConfig {
            project_name: ProjectName::new(name)?,
            language: self.language.unwrap_or(Language::Go),
            port: self.port.map(Port::new).transpose()?.unwrap_or_default(),
            version: self
                .version
                .map(Version::new)
                .transpose()?
                .unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_applies_defaults() {
        let config = ProjectConfig::builder().project_name("demo").build().unwrap();

        assert_eq!(config.project_name().as_str(), "demo");
        assert_eq!(config.language(), Language::Go);
        assert_eq!(config.port().get(), 8080);
        assert_eq!(config.version().as_str(), "1.0.0");
    }

    #[test]
    fn builder_full() {
        let config = ProjectConfig::builder()
            .project_name("api")
            .language(Language::Python)
            .port(5000)
            .version("0.3.0")
            .build()
            .unwrap();

        assert_eq!(config.language(), Language::Python);
        assert_eq!(config.port().get(), 5000);
        assert_eq!(config.to_string(), "api (python, port 5000, v0.3.0)");
    }

    #[test]
    fn builder_requires_name() {
        assert_eq!(
            ProjectConfig::builder().build().unwrap_err(),
            DomainError::MissingRequiredField {
                field: "project_name"
            }
        );
    }

    #[test]
    fn builder_rejects_zero_port() {
        let result = ProjectConfig::builder().project_name("demo").port(0).build();
        assert!(matches!(result, Err(DomainError::InvalidPort { .. })));
    }

    #[test]
    fn builder_rejects_empty_version() {
        let result = ProjectConfig::builder()
            .project_name("demo")
            .version("")
            .build();
        assert!(matches!(result, Err(DomainError::InvalidVersion { .. })));
    }
}
