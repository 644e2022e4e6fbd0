use std::collections::HashSet;

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// The files one template family produces for one configuration.
///
/// Entries keep insertion order, so two builds from the same family and
/// configuration iterate identically. Content is raw template text; the
/// write engine substitutes configuration values when it materializes
/// each entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    entries: Vec<FileTemplate>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, path: impl Into<RelativePath>, content: impl Into<String>) {
        self.entries.push(FileTemplate {
            path: path.into(),
            content: content.into(),
        });
    }

    pub fn with_file(mut self, path: impl Into<RelativePath>, content: impl Into<String>) -> Self {
        self.add_file(path, content);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(&entry.path) {
                return Err(DomainError::DuplicatePath {
                    path: entry.path.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn files(&self) -> impl Iterator<Item = &FileTemplate> {
        self.entries.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &RelativePath> {
        self.entries.iter().map(|e| &e.path)
    }

    pub fn get(&self, path: &str) -> Option<&FileTemplate> {
        let wanted = std::path::Path::new(path);
        self.entries.iter().find(|e| e.path.as_path() == wanted)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One output file: where it goes and the template it is rendered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTemplate {
    pub path: RelativePath,
    pub content: String,
}

impl FileTemplate {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}
