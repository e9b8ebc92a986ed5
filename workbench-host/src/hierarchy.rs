//! The host hierarchy object.

use crate::error::HostResult;
use crate::handle::HostRef;
use std::sync::Arc;
use uuid::Uuid;
use workbench_types::{HierarchyId, ItemId};

/// Borrowed reference to a host hierarchy, with no release duty.
pub type HierarchyRef = Arc<dyn Hierarchy>;

/// A host-owned, tree-structured object (workspace, project, or sub-tree).
///
/// All queries take an item id within this hierarchy's namespace. A query
/// against an item the host has torn down answers `Ok(None)`; `Err` is
/// reserved for the host failing to answer at all.
pub trait Hierarchy: HostRef {
    /// Stable identity of this hierarchy object.
    fn identity(&self) -> HierarchyId;

    /// The canonical kind GUID of a node, or `None` if the node is gone.
    fn kind_guid(&self, item: ItemId) -> HostResult<Option<Uuid>>;

    /// The display name of a node, if the host publishes one.
    fn display_name(&self, item: ItemId) -> HostResult<Option<String>>;

    /// The nested hierarchy a node delegates to, if any.
    ///
    /// Project nodes commonly delegate item enumeration to their own
    /// sub-hierarchy; the returned pair is that hierarchy plus the item id
    /// the node maps to inside it. The reference is borrowed (property
    /// query), not counted.
    fn nested_hierarchy(&self, item: ItemId) -> HostResult<Option<(HierarchyRef, ItemId)>>;
}
