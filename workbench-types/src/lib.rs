//! Core type definitions for Workbench.
//!
//! This crate defines the fundamental, host-agnostic types used throughout
//! the facade:
//! - Hierarchy and item identifiers, including the host's reserved item-id
//!   sentinels
//! - The closed node-kind enum and its GUID mapping
//! - Build actions and their translation into the host's flag vocabulary
//!
//! Nothing here touches native handles; the host seam lives in
//! `workbench-host`.

mod action;
mod ids;
mod kind;

pub use action::{BuildAction, BuildFlags, QueryFlags};
pub use ids::{HierarchyId, ItemId, NodeId};
pub use kind::{guid, NodeKind};
