//! Domain node types.

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use workbench_host::HierarchyRef;
use workbench_types::{HierarchyId, NodeId, NodeKind};

/// Stable, owned representation of one hierarchy node.
///
/// Constructed on demand by the resolver and never cached by the core.
/// Equality and hashing are by [`NodeId`] identity alone: two descriptors
/// resolved independently for the same node compare equal. The carried
/// hierarchy reference is a borrowed property-query reference with no
/// release duty; a descriptor whose underlying host object is torn down
/// simply stops resolving, it never dangles.
#[derive(Clone)]
pub struct NodeDescriptor {
    kind: NodeKind,
    id: NodeId,
    name: Option<String>,
    nested: Option<HierarchyId>,
    hierarchy: HierarchyRef,
}

impl NodeDescriptor {
    pub(crate) fn new(
        kind: NodeKind,
        id: NodeId,
        name: Option<String>,
        hierarchy: HierarchyRef,
    ) -> Self {
        Self {
            kind,
            id,
            name,
            nested: None,
            hierarchy,
        }
    }

    pub(crate) fn with_delegation(mut self, nested: HierarchyId) -> Self {
        self.nested = Some(nested);
        self
    }

    /// The node's kind.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// The node's identity; basis for equality and deduplication.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Display name, if the host published one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Identity of the child hierarchy this node delegates to, if any.
    #[must_use]
    pub fn nested_hierarchy(&self) -> Option<HierarchyId> {
        self.nested
    }

    /// The hierarchy the node's items live in (borrowed, never released).
    #[must_use]
    pub fn hierarchy(&self) -> &HierarchyRef {
        &self.hierarchy
    }

    /// True if this node can scope a build to a single project.
    #[must_use]
    pub fn is_project(&self) -> bool {
        self.kind.is_project()
    }
}

impl PartialEq for NodeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for NodeDescriptor {}

impl Hash for NodeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for NodeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeDescriptor")
            .field("kind", &self.kind)
            .field("id", &self.id)
            .field("name", &self.name)
            .field("nested", &self.nested)
            .finish()
    }
}

/// Ordered, identity-deduplicated sequence of nodes.
///
/// Insertion order reflects the order the host reported items; duplicate
/// identities are silently dropped.
#[derive(Debug, Default)]
pub struct SelectionSet {
    nodes: Vec<NodeDescriptor>,
    seen: HashSet<NodeId>,
}

impl SelectionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node unless its identity is already present.
    ///
    /// Returns whether the node was inserted.
    pub fn insert(&mut self, node: NodeDescriptor) -> bool {
        if !self.seen.insert(node.id()) {
            return false;
        }
        self.nodes.push(node);
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.seen.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NodeDescriptor> {
        self.nodes.iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<NodeDescriptor> {
        self.nodes
    }
}

impl IntoIterator for SelectionSet {
    type Item = NodeDescriptor;
    type IntoIter = std::vec::IntoIter<NodeDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a NodeDescriptor;
    type IntoIter = std::slice::Iter<'a, NodeDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
