//! Tree operations
//!
//! This module defines the operations provided by the component tree service.

use component_tree::{Component, ComponentKind, NodeError, PathError};
use core_types::ComponentId;
use serde::{Deserialize, Serialize};
use services_changelog::NotificationLog;
use thiserror::Error;

/// Errors that can occur during tree operations
#[derive(Debug, Error)]
pub enum OperationError {
    /// Invalid name on create or rename
    #[error("Node error: {0}")]
    Node(#[from] NodeError),

    /// Invalid string path
    #[error("Path error: {0}")]
    Path(#[from] PathError),

    /// Component not known to the service
    #[error("Component not found: {0}")]
    NotFound(String),

    /// Attempted to treat a file as a parent
    #[error("Not a folder: {0}")]
    NotAFolder(String),
}

/// Metadata snapshot for a component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatInfo {
    /// Component identity
    pub id: ComponentId,
    /// Component kind
    pub kind: ComponentKind,
    /// Declared size
    pub size: u64,
    /// Direct child count (folders only)
    pub child_count: Option<usize>,
}

/// Component tree operations trait
///
/// This trait defines the public surface of the tree facade.
pub trait TreeOperations {
    /// Create a file component
    ///
    /// The new component is retained as a forest root until linked under a
    /// parent. Fails on an empty name.
    fn create_file(
        &mut self,
        name: &str,
        size: u64,
        content: &str,
    ) -> Result<Component, OperationError>;

    /// Create an empty folder component
    ///
    /// The new component is retained as a forest root until linked under a
    /// parent. Fails on an empty name.
    fn create_folder(&mut self, name: &str) -> Result<Component, OperationError>;

    /// Link components under a folder, in call order
    ///
    /// Fails if `parent` is a file or unknown to the service. A child that is
    /// currently a forest root moves together with its subtree.
    fn add_children(
        &mut self,
        parent: &Component,
        children: &[Component],
    ) -> Result<(), OperationError>;

    /// Resolve a sequence of names starting at `root`
    ///
    /// Returns a snapshot of the final match, or `None` on any miss. An empty
    /// sequence returns `root` itself. Resolution never descends into a file.
    fn component_by_path(&self, root: &Component, names: &[&str]) -> Option<Component>;

    /// Replace `target` with a renamed, identity-preserving copy
    ///
    /// The copy is written back at the target's position in its parent (or
    /// root slot). Returns the new value. Renaming a component unknown to the
    /// service changes nothing and returns the pure renamed copy.
    fn rename(&mut self, target: &Component, new_name: &str) -> Result<Component, OperationError>;

    /// Unlink `target` from its parent
    ///
    /// A folder's whole subtree is detached as a unit. Deleting a forest root
    /// or an unknown component changes no structure.
    fn delete(&mut self, target: &Component) -> Result<(), OperationError>;

    /// Subscribe `target`'s identity to change notifications (idempotent)
    fn notify_on_change(&mut self, target: &Component);

    /// Read-only view of the notification log
    fn notification_log(&self) -> &NotificationLog;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_info_creation() {
        let id = ComponentId::new();
        let stat = StatInfo {
            id,
            kind: ComponentKind::File,
            size: 1024,
            child_count: None,
        };

        assert_eq!(stat.id, id);
        assert_eq!(stat.kind, ComponentKind::File);
        assert_eq!(stat.size, 1024);
        assert_eq!(stat.child_count, None);
    }

    #[test]
    fn test_operation_error_from_node_error() {
        let err: OperationError = NodeError::InvalidName("empty name".to_string()).into();
        assert!(matches!(err, OperationError::Node(_)));
    }

    #[test]
    fn test_operation_error_from_path_error() {
        let err: OperationError = PathError::InvalidPath("Empty path".to_string()).into();
        assert!(matches!(err, OperationError::Path(_)));
    }
}
