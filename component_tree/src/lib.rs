//! # Component Tree
//!
//! This crate provides the node types for an in-memory hierarchical namespace
//! of files and folders with immutable node semantics.
//!
//! ## Philosophy
//!
//! - **Nodes are values, not objects**: A component is a plain immutable value;
//!   there are no setters and no hidden shared state
//! - **Rename produces a copy**: Renaming yields a new value with the same
//!   identity; the original is never touched
//! - **Identity survives appearance**: The [`core_types::ComponentId`] assigned
//!   at creation is carried through every rename
//! - **Order is meaning**: A folder's children keep insertion order; sibling
//!   lookup takes the first name match
//!
//! ## Design
//!
//! - A component is a tagged union: `File` carries content, `Folder` carries an
//!   ordered child sequence
//! - Path resolution walks child names step-by-step from a caller-supplied root
//! - A file terminates resolution; it never contains further path segments

pub mod node;
pub mod path;

pub use node::{Component, ComponentKind, FileNode, FolderNode, NodeError};
pub use path::{PathError, PathResolver};
