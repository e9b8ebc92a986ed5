//! Service traits consumed from the host.
//!
//! These are the only collaborators the facade talks to. Counted
//! references cross these seams as [`Owned`] guards so the release duty is
//! explicit in the signature; plain `Arc`s are borrowed property-query
//! references.

use crate::error::{HostError, HostResult};
use crate::handle::{HostRef, Owned};
use crate::hierarchy::{Hierarchy, HierarchyRef};
use tracing::warn;
use workbench_types::{BuildFlags, ItemId, QueryFlags};

/// Opaque selection-container object. The facade never queries it; it only
/// owes the host one release for it.
pub trait SelectionContainer: HostRef {}

/// Accessor for the items of a multi-selection.
pub trait MultiSelect: HostRef {
    /// Number of selected items.
    fn count(&self) -> HostResult<u32>;

    /// Returns `count` selected items starting at `first`.
    ///
    /// Each returned hierarchy reference is counted; the caller owes one
    /// release per item, which the [`Owned`] guards carry.
    fn items(&self, first: u32, count: u32) -> HostResult<Vec<SelectedItem>>;
}

/// One entry of a multi-selection.
pub struct SelectedItem {
    /// Counted hierarchy reference, or `None` for workspace-level rows the
    /// host reports without a hierarchy.
    pub hierarchy: Option<Owned<dyn Hierarchy>>,
    pub item: ItemId,
}

/// The raw selection quadruple as the host reports it.
///
/// Every present reference is counted and released when the guard drops.
/// Which fields are populated encodes the selection shape; see
/// `workbench-hierarchy` for the normalization rules.
pub struct RawSelection {
    pub hierarchy: Option<Owned<dyn Hierarchy>>,
    pub item: ItemId,
    pub multi: Option<Owned<dyn MultiSelect>>,
    pub container: Option<Owned<dyn SelectionContainer>>,
}

/// The host's selection service.
pub trait SelectionService: Send + Sync {
    /// Queries the current selection. Must be called on the affinity thread.
    fn current_selection(&self) -> HostResult<RawSelection>;
}

/// The host's workspace-root service.
pub trait SolutionService: Send + Sync {
    /// The workspace root as a hierarchy. Borrowed property-query reference.
    fn root_hierarchy(&self) -> HostResult<HierarchyRef>;

    /// All top-level project hierarchies, in host enumeration order.
    ///
    /// Enumerated references are counted; one release is owed per entry.
    fn project_hierarchies(&self) -> HostResult<Vec<Owned<dyn Hierarchy>>>;
}

/// The host's stateful build manager.
///
/// Requests are issued with no polling interval; completion is reported
/// through host-side events outside this facade.
pub trait BuildManager: Send + Sync {
    /// Whether an in-progress operation can currently be cancelled.
    fn can_cancel(&self) -> HostResult<bool>;

    /// Requests cancellation of the in-progress operation.
    fn cancel_build(&self) -> HostResult<()>;

    /// Starts a build scoped to one project hierarchy.
    fn build_project(
        &self,
        hierarchy: &HierarchyRef,
        flags: BuildFlags,
        query: QueryFlags,
    ) -> HostResult<()>;

    /// Starts a build scoped to the whole workspace.
    fn build_solution(&self, flags: BuildFlags, query: QueryFlags) -> HostResult<()>;
}

/// Fire-and-forget error sink.
///
/// Used when a sub-step fails but the overall call should still return
/// partial results. Implementations must not panic.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, error: &HostError);
}

/// Default reporter backed by `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, error: &HostError) {
        warn!(%error, "host interaction failed");
    }
}
