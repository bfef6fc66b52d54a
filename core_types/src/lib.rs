//! # Core Types
//!
//! This crate defines the fundamental types used throughout Arbor.
//!
//! ## Philosophy
//!
//! Core types are designed with these principles:
//! - **Explicit over implicit**: Identity is a typed token, never a bare string or index.
//! - **Type safety first**: The type system prevents confusing a component's name with
//!   its identity.
//! - **Identity outlives appearance**: A component keeps its identity across renames;
//!   only identity equality means "the same logical component".
//!
//! ## Key Types
//!
//! - [`ComponentId`]: Unique identifier for a tree component

pub mod ids;

pub use ids::ComponentId;
