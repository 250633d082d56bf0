//! Template variables.
//! Loads user supplied context files and assembles the variable mapping that
//! every template in a new project is rendered against.

use crate::constants::PROJECT_KEY;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Context mappings keyed by their identity, in the order they were loaded.
pub type Context = IndexMap<String, serde_json::Value>;

/// The reserved `project` entry.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProjectInfo {
    /// Zero-padded project number, `None` when numbering is disabled
    pub number: Option<String>,
    pub name: String,
}

/// Reads a YAML (or JSON) context file.
///
/// # Returns
/// * `(identity, value)` where identity is the file stem, so `course.yaml`
///   is exposed to templates as `course`
///
/// # Errors
/// * `Error::FileError` if the file cannot be read
/// * `Error::ContextLoadError` if its contents are not valid YAML
pub fn load_context_file<P: AsRef<Path>>(path: P) -> Result<(String, serde_json::Value)> {
    let path = path.as_ref();
    let identity = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    debug!("Loading context '{}' from {}", identity, path.display());
    let content = fs::read_to_string(path).map_err(|e| Error::file(path, e))?;
    let value: serde_json::Value = serde_yaml::from_str(&content).map_err(|source| {
        Error::ContextLoadError { path: path.display().to_string(), source }
    })?;

    Ok((identity, value))
}

/// Loads several context files into one [`Context`].
///
/// A later file with the same identity replaces an earlier one.
pub fn load_context<I, P>(paths: I) -> Result<Context>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut context = Context::new();
    for path in paths {
        let (identity, value) = load_context_file(path)?;
        if context.insert(identity.clone(), value).is_some() {
            debug!("Context '{identity}' replaced by a later file");
        }
    }
    Ok(context)
}

/// Builds the variable mapping passed to every template.
///
/// The result holds each context identity at the top level next to the
/// reserved `project` entry.
///
/// # Errors
/// * `Error::ReservedContextKey` if `context` tries to supply `project`
pub fn build_variables(project: &ProjectInfo, context: &Context) -> Result<serde_json::Value> {
    if context.contains_key(PROJECT_KEY) {
        return Err(Error::ReservedContextKey { key: PROJECT_KEY.to_string() });
    }

    let mut variables = serde_json::Map::new();
    for (key, value) in context {
        variables.insert(key.clone(), value.clone());
    }
    variables.insert(
        PROJECT_KEY.to_string(),
        serde_json::to_value(project).map_err(|e| Error::IoError(e.into()))?,
    );

    Ok(serde_json::Value::Object(variables))
}
