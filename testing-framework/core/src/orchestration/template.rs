use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to read template {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("template {} is not valid YAML: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// A deployment template loaded from disk. Validated as YAML on load and
/// submitted verbatim.
#[derive(Clone, Debug)]
pub struct TemplateSource {
    path: PathBuf,
    raw: String,
}

impl TemplateSource {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let path = path.as_ref().to_path_buf();
        let raw = fs::read_to_string(&path).map_err(|source| TemplateError::Read {
            path: path.clone(),
            source,
        })?;
        serde_yaml::from_str::<serde_yaml::Value>(&raw).map_err(|source| TemplateError::Parse {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path, raw })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}
