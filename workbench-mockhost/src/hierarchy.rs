//! Scriptable hierarchy and workspace-root doubles.

use crate::ledger::{Counts, ThreadWitness};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::thread::ThreadId;
use uuid::Uuid;
use workbench_host::{
    Hierarchy, HierarchyRef, HostError, HostRef, HostResult, Owned, SolutionService,
};
use workbench_types::{HierarchyId, ItemId, NodeKind};

#[derive(Clone, Default)]
struct MockNode {
    kind_guid: Option<Uuid>,
    name: Option<String>,
    nested: Option<(Arc<MockHierarchy>, ItemId)>,
    stale: bool,
    fail: bool,
}

/// A scriptable host hierarchy.
///
/// Populate it with [`put_node`](MockHierarchy::put_node) and friends, then
/// hand it to the code under test as a `HierarchyRef` or wrap it in
/// [`Owned`] guards. Queries against items that were never scripted behave
/// like stale handles (`Ok(None)`).
pub struct MockHierarchy {
    identity: HierarchyId,
    counts: Counts,
    witness: ThreadWitness,
    nodes: Mutex<HashMap<u32, MockNode>>,
}

impl MockHierarchy {
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            identity: HierarchyId::new(),
            counts: Counts::default(),
            witness: ThreadWitness::default(),
            nodes: Mutex::new(HashMap::new()),
        })
    }

    /// Scripts a node with a known kind and display name.
    pub fn put_node(&self, item: ItemId, kind: NodeKind, name: &str) {
        self.nodes.lock().unwrap().insert(
            item.as_raw(),
            MockNode {
                kind_guid: kind.as_guid(),
                name: Some(name.to_string()),
                ..MockNode::default()
            },
        );
    }

    /// Scripts a node whose kind GUID the facade does not know.
    pub fn put_foreign_node(&self, item: ItemId, kind_guid: Uuid) {
        self.nodes.lock().unwrap().insert(
            item.as_raw(),
            MockNode {
                kind_guid: Some(kind_guid),
                ..MockNode::default()
            },
        );
    }

    /// Scripts a node the host considers torn down.
    pub fn put_stale(&self, item: ItemId) {
        self.nodes.lock().unwrap().insert(
            item.as_raw(),
            MockNode {
                stale: true,
                ..MockNode::default()
            },
        );
    }

    /// Scripts a node whose queries fail outright.
    pub fn put_failing(&self, item: ItemId) {
        self.nodes.lock().unwrap().insert(
            item.as_raw(),
            MockNode {
                fail: true,
                ..MockNode::default()
            },
        );
    }

    /// Scripts a node that delegates to a nested hierarchy.
    pub fn put_nested(
        &self,
        item: ItemId,
        kind: NodeKind,
        nested: Arc<MockHierarchy>,
        nested_item: ItemId,
    ) {
        self.nodes.lock().unwrap().insert(
            item.as_raw(),
            MockNode {
                kind_guid: kind.as_guid(),
                nested: Some((nested, nested_item)),
                ..MockNode::default()
            },
        );
    }

    /// Stable identity of this hierarchy (also available via the
    /// `Hierarchy` trait).
    #[must_use]
    pub fn identity(&self) -> HierarchyId {
        self.identity
    }

    /// Hands out one counted reference, as host enumerations do.
    #[must_use]
    pub fn handout(this: &Arc<Self>) -> Owned<dyn Hierarchy> {
        this.counts.add_ref();
        Owned::adopt(Arc::clone(this) as HierarchyRef)
    }

    fn node(&self, item: ItemId) -> Option<MockNode> {
        self.nodes.lock().unwrap().get(&item.as_raw()).cloned()
    }

    // ── ledger / witness accessors ────────────────────────────────

    pub fn add_refs(&self) -> i64 {
        self.counts.add_refs()
    }

    pub fn releases(&self) -> i64 {
        self.counts.releases()
    }

    pub fn balance(&self) -> i64 {
        self.counts.balance()
    }

    pub fn last_thread(&self) -> Option<ThreadId> {
        self.witness.last()
    }
}

impl HostRef for MockHierarchy {
    fn add_ref(&self) {
        self.counts.add_ref();
    }

    fn release(&self) {
        self.counts.release();
    }
}

impl Hierarchy for MockHierarchy {
    fn identity(&self) -> HierarchyId {
        self.identity
    }

    fn kind_guid(&self, item: ItemId) -> HostResult<Option<Uuid>> {
        self.witness.touch();
        match self.node(item) {
            Some(node) if node.fail => Err(HostError::unavailable("injected kind failure")),
            Some(node) if node.stale => Ok(None),
            Some(node) => Ok(node.kind_guid),
            None => Ok(None),
        }
    }

    fn display_name(&self, item: ItemId) -> HostResult<Option<String>> {
        self.witness.touch();
        match self.node(item) {
            Some(node) if node.fail => Err(HostError::unavailable("injected name failure")),
            Some(node) => Ok(node.name),
            None => Ok(None),
        }
    }

    fn nested_hierarchy(&self, item: ItemId) -> HostResult<Option<(HierarchyRef, ItemId)>> {
        self.witness.touch();
        match self.node(item) {
            Some(node) => Ok(node
                .nested
                .map(|(hier, id)| (hier as HierarchyRef, id))),
            None => Ok(None),
        }
    }
}

/// Scriptable workspace-root service.
pub struct MockSolutionService {
    root: Arc<MockHierarchy>,
    projects: Mutex<Vec<Arc<MockHierarchy>>>,
    witness: ThreadWitness,
}

impl MockSolutionService {
    /// Creates the service around a root hierarchy.
    ///
    /// The root node itself is scripted as a `Solution` named `root_name`.
    #[must_use]
    pub fn new(root: Arc<MockHierarchy>, root_name: &str) -> Self {
        root.put_node(ItemId::ROOT, NodeKind::Solution, root_name);
        Self {
            root,
            projects: Mutex::new(Vec::new()),
            witness: ThreadWitness::default(),
        }
    }

    /// Adds a top-level hierarchy to the enumeration.
    pub fn add_project(&self, hierarchy: Arc<MockHierarchy>) {
        self.projects.lock().unwrap().push(hierarchy);
    }

    pub fn root(&self) -> &Arc<MockHierarchy> {
        &self.root
    }

    pub fn last_thread(&self) -> Option<ThreadId> {
        self.witness.last()
    }
}

impl SolutionService for MockSolutionService {
    fn root_hierarchy(&self) -> HostResult<HierarchyRef> {
        self.witness.touch();
        Ok(Arc::clone(&self.root) as HierarchyRef)
    }

    fn project_hierarchies(&self) -> HostResult<Vec<Owned<dyn Hierarchy>>> {
        self.witness.touch();
        let projects = self.projects.lock().unwrap();
        Ok(projects.iter().map(MockHierarchy::handout).collect())
    }
}
