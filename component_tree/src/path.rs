//! Path resolution logic
//!
//! This module handles walking name sequences through a component tree and
//! parsing string paths into components.

use crate::node::Component;
use thiserror::Error;

/// Errors that can occur while parsing a string path
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// Path is empty or invalid
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

/// Path resolver
///
/// Walks name sequences from a caller-supplied root and splits string paths
/// into validated components.
pub struct PathResolver;

impl PathResolver {
    /// Resolves a sequence of names starting at `root`
    ///
    /// An empty sequence returns `root` itself (identity lookup). Each name
    /// descends into the first child of the current folder whose name matches
    /// exactly (case-sensitive). A file terminates resolution: any remaining
    /// names yield `None`, since a file cannot contain further path segments.
    pub fn resolve<'a>(root: &'a Component, names: &[&str]) -> Option<&'a Component> {
        let mut current = root;
        for name in names {
            let folder = current.as_folder()?;
            current = folder.child_by_name(name)?;
        }
        Some(current)
    }

    /// Splits a path into components
    ///
    /// # Examples
    ///
    /// ```
    /// use component_tree::PathResolver;
    ///
    /// let components = PathResolver::split_path("docs/notes/todo.txt").unwrap();
    /// assert_eq!(components, vec!["docs", "notes", "todo.txt"]);
    ///
    /// let components = PathResolver::split_path("todo.txt").unwrap();
    /// assert_eq!(components, vec!["todo.txt"]);
    /// ```
    pub fn split_path(path: &str) -> Result<Vec<&str>, PathError> {
        // Remove leading/trailing slashes
        let path = path.trim_matches('/');

        if path.is_empty() {
            return Err(PathError::InvalidPath("Empty path".to_string()));
        }

        let components: Vec<&str> = path.split('/').collect();

        for component in &components {
            if component.is_empty() {
                return Err(PathError::InvalidPath(
                    "Path contains empty component".to_string(),
                ));
            }
            if *component == "." || *component == ".." {
                return Err(PathError::InvalidPath(
                    "Relative path components (. or ..) are not supported".to_string(),
                ));
            }
        }

        Ok(components)
    }

    /// Validates a single path component name
    ///
    /// Returns true if the name is valid for a tree component.
    pub fn is_valid_name(name: &str) -> bool {
        !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains('/')
            && !name.contains('\0')
    }
}
