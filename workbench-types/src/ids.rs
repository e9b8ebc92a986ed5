//! Identifier types for hierarchy objects and the nodes inside them.
//!
//! A `HierarchyId` names a host-side hierarchy object for the lifetime of
//! that object; an `ItemId` names a node within one hierarchy's namespace.
//! The `(HierarchyId, ItemId)` pair is a `NodeId`, the identity every
//! deduplication and equality decision in the facade is based on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Stable identity of a host hierarchy object.
///
/// Uses UUID v7 so identities minted by the same host sort in creation
/// order. The identity must remain stable for the lifetime of the
/// underlying host object; a disposed hierarchy's id is never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HierarchyId(Uuid);

impl HierarchyId {
    /// Mints a fresh hierarchy identity.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates a hierarchy identity from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// Parses a hierarchy identity from a string.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for HierarchyId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HierarchyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HierarchyId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Identifier of a node within one hierarchy's namespace.
///
/// The top of the `u32` range is reserved by the host for sentinels:
/// [`ItemId::ROOT`] (the hierarchy's own root node), [`ItemId::SELECTION`]
/// (the "multiple items are selected" marker) and [`ItemId::NIL`]
/// (no item). Everything below is an ordinary node id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u32);

impl ItemId {
    /// The root node of a hierarchy.
    pub const ROOT: ItemId = ItemId(0xFFFF_FFFE);
    /// Sentinel reported when more than one item is selected.
    pub const SELECTION: ItemId = ItemId(0xFFFF_FFFD);
    /// Sentinel for "no item".
    pub const NIL: ItemId = ItemId(0xFFFF_FFFF);

    /// Creates an item id from its raw host value.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw host value.
    #[must_use]
    pub const fn as_raw(&self) -> u32 {
        self.0
    }

    /// True for the "no item" sentinel.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        self.0 == Self::NIL.0
    }

    /// True for the hierarchy-root sentinel.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.0 == Self::ROOT.0
    }

    /// True for the multi-selection sentinel.
    #[must_use]
    pub const fn is_multi_selection(&self) -> bool {
        self.0 == Self::SELECTION.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::ROOT => write!(f, "ROOT"),
            Self::SELECTION => write!(f, "SELECTION"),
            Self::NIL => write!(f, "NIL"),
            Self(raw) => write!(f, "{raw}"),
        }
    }
}

/// Identity of a node: which hierarchy it lives in and which item it is.
///
/// Two node descriptors with equal `NodeId` refer to the same node even if
/// they were resolved independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId {
    hierarchy: HierarchyId,
    item: ItemId,
}

impl NodeId {
    /// Creates a node identity from its parts.
    #[must_use]
    pub const fn new(hierarchy: HierarchyId, item: ItemId) -> Self {
        Self { hierarchy, item }
    }

    /// The hierarchy the node lives in.
    #[must_use]
    pub const fn hierarchy(&self) -> HierarchyId {
        self.hierarchy
    }

    /// The item within that hierarchy.
    #[must_use]
    pub const fn item(&self) -> ItemId {
        self.item
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.hierarchy, self.item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_are_distinct() {
        assert_ne!(ItemId::ROOT, ItemId::SELECTION);
        assert_ne!(ItemId::ROOT, ItemId::NIL);
        assert_ne!(ItemId::SELECTION, ItemId::NIL);
    }

    #[test]
    fn sentinel_predicates() {
        assert!(ItemId::NIL.is_nil());
        assert!(ItemId::ROOT.is_root());
        assert!(ItemId::SELECTION.is_multi_selection());
        assert!(!ItemId::new(7).is_nil());
        assert!(!ItemId::new(7).is_root());
        assert!(!ItemId::new(7).is_multi_selection());
    }

    #[test]
    fn item_id_display_names_sentinels() {
        assert_eq!(ItemId::ROOT.to_string(), "ROOT");
        assert_eq!(ItemId::SELECTION.to_string(), "SELECTION");
        assert_eq!(ItemId::NIL.to_string(), "NIL");
        assert_eq!(ItemId::new(42).to_string(), "42");
    }

    #[test]
    fn node_id_equality_is_by_both_parts() {
        let h1 = HierarchyId::new();
        let h2 = HierarchyId::new();
        assert_eq!(NodeId::new(h1, ItemId::ROOT), NodeId::new(h1, ItemId::ROOT));
        assert_ne!(NodeId::new(h1, ItemId::ROOT), NodeId::new(h2, ItemId::ROOT));
        assert_ne!(
            NodeId::new(h1, ItemId::new(1)),
            NodeId::new(h1, ItemId::new(2))
        );
    }
}
