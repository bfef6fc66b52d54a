//! # Change Log Service
//!
//! Tracks watch subscriptions by component identity and records formatted
//! change messages for watched components.
//!
//! ## Philosophy
//!
//! - **Observer by identity**: Subscriptions key on [`core_types::ComponentId`],
//!   never on tree position, so nodes stay plain immutable values
//! - **Append-only**: The log grows monotonically for the service's lifetime
//!   and is never trimmed
//! - **One entry per discrete event**: A watched rename and a later watched
//!   delete produce two entries, not one per structural change
//! - **Testable**: The full history can be inspected
//!
//! ## Example
//!
//! ```
//! use core_types::ComponentId;
//! use services_changelog::{ChangeEvent, ChangeLogService};
//!
//! let mut service = ChangeLogService::new();
//! let id = ComponentId::new();
//!
//! service.watch(id);
//! service.record(
//!     id,
//!     ChangeEvent::Renamed {
//!         from: "draft".to_string(),
//!         to: "final".to_string(),
//!     },
//! );
//!
//! assert_eq!(service.log().peek(), Some("draft was renamed to final."));
//! ```

use core_types::ComponentId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A structural change observed on a component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeEvent {
    /// The component was renamed
    Renamed {
        /// Name before the rename
        from: String,
        /// Name after the rename
        to: String,
    },
    /// The component was deleted
    Deleted {
        /// Name at the time of deletion
        name: String,
    },
}

impl fmt::Display for ChangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeEvent::Renamed { from, to } => write!(f, "{} was renamed to {}.", from, to),
            ChangeEvent::Deleted { name } => write!(f, "{} was deleted.", name),
        }
    }
}

/// Append-only log of formatted change messages
///
/// Created empty; entries are only ever appended. The most recent entry is
/// viewed with [`NotificationLog::peek`] without removing it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationLog {
    entries: Vec<String>,
}

impl NotificationLog {
    /// Creates a new empty log
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn append(&mut self, message: String) {
        self.entries.push(message);
    }

    /// Returns the most recently appended entry without removing it
    pub fn peek(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    /// Returns the total number of entries ever appended
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been appended yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries, oldest first
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Returns up to `limit` entries, most recent first
    pub fn recent(&self, limit: usize) -> Vec<&str> {
        self.entries
            .iter()
            .rev()
            .take(limit)
            .map(String::as_str)
            .collect()
    }
}

/// Change log service
///
/// Owns the watch set and the notification log together, so recording is a
/// single call: events on unwatched identities are dropped.
#[derive(Debug, Clone, Default)]
pub struct ChangeLogService {
    watched: HashSet<ComponentId>,
    log: NotificationLog,
}

impl ChangeLogService {
    /// Creates a new service with an empty watch set and log
    pub fn new() -> Self {
        Self {
            watched: HashSet::new(),
            log: NotificationLog::new(),
        }
    }

    /// Subscribes an identity to change notifications
    ///
    /// Idempotent: watching twice has the same effect as once.
    pub fn watch(&mut self, id: ComponentId) {
        self.watched.insert(id);
    }

    /// Removes a subscription, returning whether it existed
    pub fn unwatch(&mut self, id: ComponentId) -> bool {
        self.watched.remove(&id)
    }

    /// Returns true if the identity is currently watched
    pub fn is_watched(&self, id: ComponentId) -> bool {
        self.watched.contains(&id)
    }

    /// Counts current subscriptions
    pub fn watched_count(&self) -> usize {
        self.watched.len()
    }

    /// Records an event for the given identity
    ///
    /// Appends the formatted message iff the identity is watched. Returns
    /// whether an entry was appended.
    pub fn record(&mut self, id: ComponentId, event: ChangeEvent) -> bool {
        if !self.watched.contains(&id) {
            return false;
        }
        self.log.append(event.to_string());
        true
    }

    /// Read-only view of the notification log
    pub fn log(&self) -> &NotificationLog {
        &self.log
    }
}
