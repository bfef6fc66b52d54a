//! # Component Tree Service
//!
//! This service orchestrates an in-memory forest of immutable file/folder
//! components: construction, structural edits, path lookup, and opt-in change
//! notifications.
//!
//! ## Philosophy
//!
//! - **Snapshots out, identity in**: Callers hold component values; the service
//!   addresses them by identity against its retained forest
//! - **Immutable update in a mutable container**: A rename replaces the old
//!   child value at the same index with an identity-preserving copy, never
//!   mutating a node in place
//! - **Cascade by unlinking**: Deleting a folder detaches the whole subtree as
//!   a unit; no per-descendant events are emitted
//! - **Notification is opt-in**: Only identities registered through
//!   `notify_on_change` produce log entries
//!
//! ## Operations
//!
//! - `create_file(name, size, content)`: Create a file component
//! - `create_folder(name)`: Create a folder component
//! - `add_children(parent, children)`: Link components under a folder
//! - `component_by_path(root, names)`: Resolve a name sequence
//! - `rename(target, new_name)`: Replace a node with a renamed copy
//! - `delete(target)`: Unlink a node (and its subtree)
//! - `notify_on_change(target)`: Subscribe a component to the change log

pub mod operations;
pub mod service;

pub use operations::{OperationError, StatInfo, TreeOperations};
pub use service::TreeService;
