//! Component tree service implementation
//!
//! This module provides the facade service that owns the forest and performs
//! identity-addressed structural edits on it.

use crate::operations::{OperationError, StatInfo, TreeOperations};
use component_tree::{Component, PathResolver};
use core_types::ComponentId;
use services_changelog::{ChangeEvent, ChangeLogService, NotificationLog};
use tracing::{debug, warn};

/// Finds a node by identity anywhere in the given subtrees
fn find_in(nodes: &[Component], id: ComponentId) -> Option<&Component> {
    for node in nodes {
        if node.id() == id {
            return Some(node);
        }
        if let Some(children) = node.children() {
            if let Some(found) = find_in(children, id) {
                return Some(found);
            }
        }
    }
    None
}

/// Computes the index path to a node: first element indexes the slice itself,
/// the rest index successive child sequences. Depth-first, insertion order.
fn index_path_in(nodes: &[Component], id: ComponentId) -> Option<Vec<usize>> {
    for (index, node) in nodes.iter().enumerate() {
        if node.id() == id {
            return Some(vec![index]);
        }
        if let Some(children) = node.children() {
            if let Some(mut rest) = index_path_in(children, id) {
                let mut path = Vec::with_capacity(rest.len() + 1);
                path.push(index);
                path.append(&mut rest);
                return Some(path);
            }
        }
    }
    None
}

/// Descends an index path mutably
fn node_at_mut<'a>(roots: &'a mut [Component], path: &[usize]) -> Option<&'a mut Component> {
    let (first, rest) = path.split_first()?;
    let mut current = roots.get_mut(*first)?;
    for &index in rest {
        current = current.as_folder_mut()?.child_mut(index)?;
    }
    Some(current)
}

/// The component tree service
///
/// Retains every component created through it as part of a forest: freshly
/// created components are roots; `add_children` relinks them under parents.
/// Caller-held components are snapshots, matched against the forest by
/// identity.
///
/// The service assumes exclusive, single-threaded access; callers sharing an
/// instance across threads must serialize access themselves.
#[derive(Debug, Clone, Default)]
pub struct TreeService {
    roots: Vec<Component>,
    changelog: ChangeLogService,
}

impl TreeService {
    /// Creates a new service with an empty forest
    pub fn new() -> Self {
        Self {
            roots: Vec::new(),
            changelog: ChangeLogService::new(),
        }
    }

    /// Counts current forest roots
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    /// Returns true if the identity is linked anywhere in the forest
    pub fn contains(&self, id: ComponentId) -> bool {
        find_in(&self.roots, id).is_some()
    }

    /// Read-only view of the change log service (watch set + log)
    pub fn changelog(&self) -> &ChangeLogService {
        &self.changelog
    }

    /// Resolves a string path such as `"docs/notes/todo.txt"` from `root`
    pub fn component_by_str_path(
        &self,
        root: &Component,
        path: &str,
    ) -> Result<Option<Component>, OperationError> {
        let names = PathResolver::split_path(path)?;
        Ok(self.component_by_path(root, &names))
    }

    /// Returns snapshots of a folder's current children
    pub fn list_children(&self, target: &Component) -> Result<Vec<Component>, OperationError> {
        let current = find_in(&self.roots, target.id())
            .ok_or_else(|| OperationError::NotFound(target.name().to_string()))?;
        match current.children() {
            Some(children) => Ok(children.to_vec()),
            None => Err(OperationError::NotAFolder(current.name().to_string())),
        }
    }

    /// Returns a metadata snapshot for a linked component
    pub fn stat(&self, target: &Component) -> Option<StatInfo> {
        let current = find_in(&self.roots, target.id())?;
        Some(StatInfo {
            id: current.id(),
            kind: current.kind(),
            size: current.size(),
            child_count: current.children().map(|children| children.len()),
        })
    }
}

impl TreeOperations for TreeService {
    fn create_file(
        &mut self,
        name: &str,
        size: u64,
        content: &str,
    ) -> Result<Component, OperationError> {
        let component = Component::file(name, size, content)?;
        debug!(name, id = %component.id(), "created file");
        self.roots.push(component.clone());
        Ok(component)
    }

    fn create_folder(&mut self, name: &str) -> Result<Component, OperationError> {
        let component = Component::folder(name)?;
        debug!(name, id = %component.id(), "created folder");
        self.roots.push(component.clone());
        Ok(component)
    }

    fn add_children(
        &mut self,
        parent: &Component,
        children: &[Component],
    ) -> Result<(), OperationError> {
        let parent_id = parent.id();
        let current = find_in(&self.roots, parent_id)
            .ok_or_else(|| OperationError::NotFound(parent.name().to_string()))?;
        if !current.is_folder() {
            return Err(OperationError::NotAFolder(current.name().to_string()));
        }

        // Detach children that are currently forest roots so each moves
        // together with its subtree; anything else is linked from the caller's
        // snapshot. A component already linked elsewhere ends up under two
        // parents, an accepted modeling limitation.
        let mut moved = Vec::with_capacity(children.len());
        for child in children {
            let child_id = child.id();
            let root_slot = self.roots.iter().position(|root| root.id() == child_id);
            let detached = match root_slot {
                Some(index) => self.roots.remove(index),
                None => child.clone(),
            };
            moved.push(detached);
        }

        let path = index_path_in(&self.roots, parent_id)
            .ok_or_else(|| OperationError::NotFound(parent.name().to_string()))?;
        let folder = node_at_mut(&mut self.roots, &path)
            .and_then(|node| node.as_folder_mut())
            .ok_or_else(|| OperationError::NotAFolder(parent.name().to_string()))?;
        for child in moved {
            debug!(parent = folder.name.as_str(), child = child.name(), "linked child");
            folder.push_child(child);
        }
        Ok(())
    }

    fn component_by_path(&self, root: &Component, names: &[&str]) -> Option<Component> {
        // Any component can serve as a traversal root; prefer the live forest
        // value over the caller's snapshot when the identity is known.
        let start = match find_in(&self.roots, root.id()) {
            Some(node) => node,
            None => root,
        };
        PathResolver::resolve(start, names).cloned()
    }

    fn rename(&mut self, target: &Component, new_name: &str) -> Result<Component, OperationError> {
        match index_path_in(&self.roots, target.id()) {
            Some(path) => {
                let slot = node_at_mut(&mut self.roots, &path)
                    .ok_or_else(|| OperationError::NotFound(target.name().to_string()))?;
                // Rename the current tree value, not the caller's snapshot,
                // and write the copy back at the same position.
                let old_name = slot.name().to_string();
                let renamed = slot.rename(new_name)?;
                *slot = renamed.clone();
                debug!(from = old_name.as_str(), to = new_name, "renamed component");
                self.changelog.record(
                    renamed.id(),
                    ChangeEvent::Renamed {
                        from: old_name,
                        to: new_name.to_string(),
                    },
                );
                Ok(renamed)
            }
            None => {
                let renamed = target.rename(new_name)?;
                warn!(name = target.name(), "rename target not linked in any retained tree");
                Ok(renamed)
            }
        }
    }

    fn delete(&mut self, target: &Component) -> Result<(), OperationError> {
        match index_path_in(&self.roots, target.id()) {
            None => {
                warn!(name = target.name(), "delete target not linked in any retained tree");
                Ok(())
            }
            Some(path) if path.len() == 1 => {
                // Parentless root: no parent link to repair; a watched root
                // still reports the event.
                if let Some(root) = self.roots.get(path[0]) {
                    let name = root.name().to_string();
                    let id = root.id();
                    debug!(name = name.as_str(), "delete on parentless root");
                    self.changelog.record(id, ChangeEvent::Deleted { name });
                }
                Ok(())
            }
            Some(path) => {
                let removed = node_at_mut(&mut self.roots, &path[..path.len() - 1])
                    .and_then(|node| node.as_folder_mut())
                    .and_then(|folder| folder.remove_child(target.id()));
                if let Some(component) = removed {
                    debug!(name = component.name(), "deleted component");
                    self.changelog.record(
                        component.id(),
                        ChangeEvent::Deleted {
                            name: component.name().to_string(),
                        },
                    );
                }
                Ok(())
            }
        }
    }

    fn notify_on_change(&mut self, target: &Component) {
        debug!(name = target.name(), id = %target.id(), "watching component");
        self.changelog.watch(target.id());
    }

    fn notification_log(&self) -> &NotificationLog {
        self.changelog.log()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_creation() {
        let service = TreeService::new();
        assert_eq!(service.root_count(), 0);
        assert!(service.notification_log().is_empty());
    }

    #[test]
    fn test_create_retains_root() {
        let mut service = TreeService::new();
        let folder = service.create_folder("docs").unwrap();

        assert_eq!(service.root_count(), 1);
        assert!(service.contains(folder.id()));
    }

    #[test]
    fn test_add_children_moves_root_with_subtree() {
        let mut service = TreeService::new();
        let root = service.create_folder("root").unwrap();
        let docs = service.create_folder("docs").unwrap();
        let file = service.create_file("todo.txt", 4, "todo").unwrap();

        // Build bottom-up: file under docs first, then docs under root.
        service.add_children(&docs, &[file.clone()]).unwrap();
        service.add_children(&root, &[docs.clone()]).unwrap();

        assert_eq!(service.root_count(), 1);
        let found = service
            .component_by_path(&root, &["docs", "todo.txt"])
            .unwrap();
        assert_eq!(found.id(), file.id());
    }

    #[test]
    fn test_add_children_to_file_fails() {
        let mut service = TreeService::new();
        let file = service.create_file("notes.txt", 1, "x").unwrap();
        let child = service.create_file("inner.txt", 1, "y").unwrap();

        let result = service.add_children(&file, &[child]);
        assert!(matches!(result, Err(OperationError::NotAFolder(_))));
    }

    #[test]
    fn test_add_children_unknown_parent_fails() {
        let mut service = TreeService::new();
        let child = service.create_file("orphan.txt", 1, "x").unwrap();
        let foreign = Component::folder("foreign").unwrap();

        let result = service.add_children(&foreign, &[child]);
        assert!(matches!(result, Err(OperationError::NotFound(_))));
    }

    #[test]
    fn test_component_by_path_empty_names_returns_root() {
        let mut service = TreeService::new();
        let root = service.create_folder("root").unwrap();

        let found = service.component_by_path(&root, &[]).unwrap();
        assert_eq!(found.id(), root.id());
    }

    #[test]
    fn test_component_by_path_prefers_live_forest_value() {
        let mut service = TreeService::new();
        let root = service.create_folder("root").unwrap();
        let file = service.create_file("late.txt", 1, "x").unwrap();
        // The caller's `root` snapshot predates the link below.
        service.add_children(&root, &[file.clone()]).unwrap();

        let found = service.component_by_path(&root, &["late.txt"]).unwrap();
        assert_eq!(found.id(), file.id());
    }

    #[test]
    fn test_component_by_path_unknown_root_walks_snapshot() {
        let service = TreeService::new();
        let mut folder = component_tree::FolderNode::new("detached").unwrap();
        let file = Component::file("inside.txt", 1, "x").unwrap();
        folder.push_child(file.clone());
        let root = Component::Folder(folder);

        let found = service.component_by_path(&root, &["inside.txt"]).unwrap();
        assert_eq!(found.id(), file.id());
    }

    #[test]
    fn test_rename_root_updates_slot() {
        let mut service = TreeService::new();
        let root = service.create_folder("before").unwrap();

        let renamed = service.rename(&root, "after").unwrap();
        assert_eq!(renamed.id(), root.id());
        assert_eq!(renamed.name(), "after");

        let current = service.component_by_path(&renamed, &[]).unwrap();
        assert_eq!(current.name(), "after");
        assert_eq!(service.root_count(), 1);
    }

    #[test]
    fn test_rename_unknown_target_returns_pure_copy() {
        let mut service = TreeService::new();
        let foreign = Component::file("foreign.txt", 1, "x").unwrap();
        service.notify_on_change(&foreign);

        let renamed = service.rename(&foreign, "renamed.txt").unwrap();
        assert_eq!(renamed.id(), foreign.id());
        assert_eq!(renamed.name(), "renamed.txt");
        // no structural change, no notification for a no-op
        assert_eq!(service.root_count(), 0);
        assert_eq!(service.notification_log().count(), 0);
    }

    #[test]
    fn test_rename_empty_name_fails() {
        let mut service = TreeService::new();
        let root = service.create_folder("root").unwrap();

        let result = service.rename(&root, "");
        assert!(matches!(result, Err(OperationError::Node(_))));
        let current = service.component_by_path(&root, &[]).unwrap();
        assert_eq!(current.name(), "root");
    }

    #[test]
    fn test_delete_unknown_target_is_silent() {
        let mut service = TreeService::new();
        let foreign = Component::file("foreign.txt", 1, "x").unwrap();
        service.notify_on_change(&foreign);

        service.delete(&foreign).unwrap();
        assert_eq!(service.notification_log().count(), 0);
    }

    #[test]
    fn test_delete_root_keeps_structure_but_notifies() {
        let mut service = TreeService::new();
        let root = service.create_folder("root").unwrap();
        service.notify_on_change(&root);

        service.delete(&root).unwrap();
        assert_eq!(service.root_count(), 1);
        assert_eq!(service.notification_log().peek(), Some("root was deleted."));
    }

    #[test]
    fn test_list_children() {
        let mut service = TreeService::new();
        let root = service.create_folder("root").unwrap();
        let a = service.create_file("a.txt", 1, "").unwrap();
        let b = service.create_file("b.txt", 2, "").unwrap();
        service.add_children(&root, &[a.clone(), b.clone()]).unwrap();

        let children = service.list_children(&root).unwrap();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].id(), a.id());
        assert_eq!(children[1].id(), b.id());

        let result = service.list_children(&a);
        assert!(matches!(result, Err(OperationError::NotAFolder(_))));
    }

    #[test]
    fn test_stat() {
        let mut service = TreeService::new();
        let root = service.create_folder("root").unwrap();
        let file = service.create_file("a.txt", 42, "body").unwrap();
        service.add_children(&root, &[file.clone()]).unwrap();

        let stat = service.stat(&root).unwrap();
        assert_eq!(stat.id, root.id());
        assert_eq!(stat.child_count, Some(1));

        let stat = service.stat(&file).unwrap();
        assert_eq!(stat.size, 42);
        assert_eq!(stat.child_count, None);

        let foreign = Component::file("foreign.txt", 1, "x").unwrap();
        assert!(service.stat(&foreign).is_none());
    }

    #[test]
    fn test_component_by_str_path() {
        let mut service = TreeService::new();
        let root = service.create_folder("root").unwrap();
        let docs = service.create_folder("docs").unwrap();
        let file = service.create_file("todo.txt", 4, "todo").unwrap();
        service.add_children(&docs, &[file.clone()]).unwrap();
        service.add_children(&root, &[docs]).unwrap();

        let found = service
            .component_by_str_path(&root, "docs/todo.txt")
            .unwrap()
            .unwrap();
        assert_eq!(found.id(), file.id());

        let result = service.component_by_str_path(&root, "docs//todo.txt");
        assert!(matches!(result, Err(OperationError::Path(_))));
    }
}
