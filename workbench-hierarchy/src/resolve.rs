//! Node identity resolution.
//!
//! Resolution borrows the handle for the duration of the call only; it
//! never acquires or releases host-side counts. A handle/item combination
//! the host reports as torn down resolves to `Ok(None)`, never an error.

use crate::node::NodeDescriptor;
use std::sync::Arc;
use tracing::debug;
use workbench_host::{HierarchyRef, HostResult};
use workbench_types::{ItemId, NodeId, NodeKind};

/// Delegation chains longer than this are treated as unresolvable. Guards
/// against hosts that report a delegation cycle.
const MAX_DELEGATION_DEPTH: usize = 8;

/// Resolves an item id against a hierarchy into a [`NodeDescriptor`].
///
/// Nodes that delegate to a nested hierarchy (common for project nodes)
/// are resolved in the nested hierarchy's namespace: the descriptor's
/// identity is the nested one and [`NodeDescriptor::nested_hierarchy`]
/// records the delegation. Items under such a node must be resolved with
/// [`resolve_child`] so ids are never reinterpreted in the wrong
/// namespace.
pub fn resolve(hierarchy: &HierarchyRef, item: ItemId) -> HostResult<Option<NodeDescriptor>> {
    resolve_at(hierarchy, item, MAX_DELEGATION_DEPTH)
}

/// Resolves an item id in the namespace a node's items actually live in.
///
/// For a delegated node the carried hierarchy reference already is the
/// nested hierarchy, so child item ids resolve against the right
/// namespace.
pub fn resolve_child(node: &NodeDescriptor, item: ItemId) -> HostResult<Option<NodeDescriptor>> {
    resolve(node.hierarchy(), item)
}

fn resolve_at(
    hierarchy: &HierarchyRef,
    item: ItemId,
    depth: usize,
) -> HostResult<Option<NodeDescriptor>> {
    if item.is_nil() || item.is_multi_selection() {
        return Ok(None);
    }
    if depth == 0 {
        debug!(hierarchy = %hierarchy.identity(), %item, "delegation chain too deep");
        return Ok(None);
    }

    if let Some((nested, nested_item)) = hierarchy.nested_hierarchy(item)? {
        if nested.identity() != hierarchy.identity() {
            let resolved = resolve_at(&nested, nested_item, depth - 1)?;
            return Ok(resolved.map(|node| node.with_delegation(nested.identity())));
        }
    }

    let Some(guid) = hierarchy.kind_guid(item)? else {
        debug!(hierarchy = %hierarchy.identity(), %item, "stale handle, node gone");
        return Ok(None);
    };
    let name = hierarchy.display_name(item)?;

    Ok(Some(NodeDescriptor::new(
        NodeKind::from_guid(guid),
        NodeId::new(hierarchy.identity(), item),
        name,
        Arc::clone(hierarchy),
    )))
}
