//! Component node types
//!
//! This module defines the file and folder variants that make up a tree.

use core_types::ComponentId;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised when constructing or renaming a node
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NodeError {
    /// Name is empty or otherwise unusable
    #[error("Invalid name: {0}")]
    InvalidName(String),
}

fn validate_name(name: &str) -> Result<(), NodeError> {
    if name.is_empty() {
        return Err(NodeError::InvalidName("empty name".to_string()));
    }
    Ok(())
}

/// The two kinds of tree components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentKind {
    /// Leaf node carrying textual content
    File,
    /// Interior node carrying an ordered child sequence
    Folder,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentKind::File => write!(f, "File"),
            ComponentKind::Folder => write!(f, "Folder"),
        }
    }
}

/// A file node
///
/// Carries textual content alongside the common name/identity/size fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    /// Identity assigned at creation, preserved across renames
    pub id: ComponentId,
    /// Display name (non-empty)
    pub name: String,
    /// Declared size
    pub size: u64,
    /// Textual content
    pub content: String,
}

impl FileNode {
    /// Creates a new file node with a fresh identity
    pub fn new(
        name: impl Into<String>,
        size: u64,
        content: impl Into<String>,
    ) -> Result<Self, NodeError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            id: ComponentId::new(),
            name,
            size,
            content: content.into(),
        })
    }

    /// Returns a copy of this file under a new name
    ///
    /// Identity, size, and content are carried over unchanged.
    pub fn renamed(&self, new_name: impl Into<String>) -> Result<Self, NodeError> {
        let new_name = new_name.into();
        validate_name(&new_name)?;
        Ok(Self {
            id: self.id,
            name: new_name,
            size: self.size,
            content: self.content.clone(),
        })
    }
}

/// A folder node
///
/// Holds an ordered sequence of child components. Insertion order is
/// significant; duplicate sibling names are permitted and lookup takes the
/// first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNode {
    /// Identity assigned at creation, preserved across renames
    pub id: ComponentId,
    /// Display name (non-empty)
    pub name: String,
    /// Declared size
    pub size: u64,
    children: Vec<Component>,
}

impl FolderNode {
    /// Creates a new empty folder node with a fresh identity
    pub fn new(name: impl Into<String>) -> Result<Self, NodeError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            id: ComponentId::new(),
            name,
            size: 0,
            children: Vec::new(),
        })
    }

    /// Returns a copy of this folder under a new name
    ///
    /// Identity, size, and the child sequence are carried over unchanged.
    pub fn renamed(&self, new_name: impl Into<String>) -> Result<Self, NodeError> {
        let new_name = new_name.into();
        validate_name(&new_name)?;
        Ok(Self {
            id: self.id,
            name: new_name,
            size: self.size,
            children: self.children.clone(),
        })
    }

    /// Appends a child, preserving insertion order
    pub fn push_child(&mut self, child: Component) {
        self.children.push(child);
    }

    /// Returns the first child with the given name, if any
    pub fn child_by_name(&self, name: &str) -> Option<&Component> {
        self.children.iter().find(|child| child.name() == name)
    }

    /// Returns the index of the child with the given identity
    pub fn position_of(&self, id: ComponentId) -> Option<usize> {
        self.children.iter().position(|child| child.id() == id)
    }

    /// Removes and returns the child with the given identity
    pub fn remove_child(&mut self, id: ComponentId) -> Option<Component> {
        let index = self.position_of(id)?;
        Some(self.children.remove(index))
    }

    /// Replaces the child at `index`, returning the previous value
    pub fn replace_child(&mut self, index: usize, child: Component) -> Option<Component> {
        let slot = self.children.get_mut(index)?;
        Some(std::mem::replace(slot, child))
    }

    /// Returns a mutable reference to the child at `index`
    pub fn child_mut(&mut self, index: usize) -> Option<&mut Component> {
        self.children.get_mut(index)
    }

    /// Returns the child sequence in insertion order
    pub fn children(&self) -> &[Component] {
        &self.children
    }

    /// Counts the number of direct children
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

/// A tree component
///
/// Tagged union of the two node variants. All mutation-flavored operations
/// (`rename`) produce new values; identity never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Component {
    /// Leaf node with textual content
    File(FileNode),
    /// Interior node with ordered children
    Folder(FolderNode),
}

impl Component {
    /// Creates a file component with a fresh identity
    pub fn file(
        name: impl Into<String>,
        size: u64,
        content: impl Into<String>,
    ) -> Result<Self, NodeError> {
        FileNode::new(name, size, content).map(Component::File)
    }

    /// Creates an empty folder component with a fresh identity
    pub fn folder(name: impl Into<String>) -> Result<Self, NodeError> {
        FolderNode::new(name).map(Component::Folder)
    }

    /// Returns the component's identity
    pub fn id(&self) -> ComponentId {
        match self {
            Component::File(file) => file.id,
            Component::Folder(folder) => folder.id,
        }
    }

    /// Returns the component's name
    pub fn name(&self) -> &str {
        match self {
            Component::File(file) => &file.name,
            Component::Folder(folder) => &folder.name,
        }
    }

    /// Returns the component's declared size
    pub fn size(&self) -> u64 {
        match self {
            Component::File(file) => file.size,
            Component::Folder(folder) => folder.size,
        }
    }

    /// Returns the component's kind tag
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::File(_) => ComponentKind::File,
            Component::Folder(_) => ComponentKind::Folder,
        }
    }

    /// Returns true for folder components
    pub fn is_folder(&self) -> bool {
        matches!(self, Component::Folder(_))
    }

    /// Returns a copy of this component under a new name
    ///
    /// Pure function: the receiver and any tree it is linked into are left
    /// untouched. The copy keeps the same variant, identity, size, content
    /// (files), and child sequence (folders).
    pub fn rename(&self, new_name: impl Into<String>) -> Result<Component, NodeError> {
        match self {
            Component::File(file) => file.renamed(new_name).map(Component::File),
            Component::Folder(folder) => folder.renamed(new_name).map(Component::Folder),
        }
    }

    /// Returns the child sequence for folders, `None` for files
    pub fn children(&self) -> Option<&[Component]> {
        match self {
            Component::File(_) => None,
            Component::Folder(folder) => Some(folder.children()),
        }
    }

    /// Returns the file variant, if this is a file
    pub fn as_file(&self) -> Option<&FileNode> {
        match self {
            Component::File(file) => Some(file),
            Component::Folder(_) => None,
        }
    }

    /// Returns the folder variant, if this is a folder
    pub fn as_folder(&self) -> Option<&FolderNode> {
        match self {
            Component::File(_) => None,
            Component::Folder(folder) => Some(folder),
        }
    }

    /// Returns the folder variant mutably, if this is a folder
    pub fn as_folder_mut(&mut self) -> Option<&mut FolderNode> {
        match self {
            Component::File(_) => None,
            Component::Folder(folder) => Some(folder),
        }
    }
}
