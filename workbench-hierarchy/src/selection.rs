//! Selection enumeration.
//!
//! Normalizes the host's sentinel-encoded selection quadruple into one
//! [`SelectionShape`], then resolves it into a deduplicated
//! [`SelectionSet`]. Failures in any sub-step are reported and treated as
//! "no additional items from this path": the call still returns whatever
//! was collected. Every counted reference travels inside an [`Owned`]
//! guard, so release-exactly-once holds on all exit paths.

use crate::node::SelectionSet;
use crate::resolve::resolve;
use tracing::debug;
use workbench_host::{
    ErrorReporter, Hierarchy, HierarchyRef, HostError, MultiSelect, Owned, RawSelection,
    SelectionContainer, SelectionService, SolutionService,
};
use workbench_types::ItemId;

/// The three selection shapes, decided in one place.
pub enum SelectionShape {
    /// Nothing is selected.
    Empty,
    /// One concrete node is selected.
    Single(Owned<dyn Hierarchy>, ItemId),
    /// Multiple nodes are selected; the accessor enumerates them.
    Multi(Owned<dyn MultiSelect>),
}

/// Classifies a raw selection quadruple.
///
/// The container reference is returned separately so the caller can hold
/// it until enumeration finishes, matching the host's release timing.
/// References not carried by the returned shape (e.g. an outer hierarchy
/// accompanying a multi-selection sentinel) are released here.
pub fn classify(
    raw: RawSelection,
    reporter: &dyn ErrorReporter,
) -> (SelectionShape, Option<Owned<dyn SelectionContainer>>) {
    let RawSelection {
        hierarchy,
        item,
        multi,
        container,
    } = raw;

    let shape = if item.is_multi_selection() {
        match multi {
            Some(accessor) => SelectionShape::Multi(accessor),
            None => {
                reporter.report(&HostError::unavailable(
                    "multi-selection sentinel without accessor",
                ));
                SelectionShape::Empty
            }
        }
    } else if let Some(hierarchy) = hierarchy {
        SelectionShape::Single(hierarchy, item)
    } else {
        SelectionShape::Empty
    };

    // `hierarchy` (if still held) and an unused `multi` drop here; their
    // counts are paid back before enumeration starts.
    (shape, container)
}

/// Enumerates the host's current selection as domain nodes.
///
/// Must run on the affinity thread. When nothing is selected the workspace
/// root stands in, so callers always get at least the root while a
/// workspace is open.
pub fn selected_nodes(
    selection: &dyn SelectionService,
    solution: &dyn SolutionService,
    reporter: &dyn ErrorReporter,
) -> SelectionSet {
    let raw = match selection.current_selection() {
        Ok(raw) => raw,
        Err(err) => {
            reporter.report(&err);
            return SelectionSet::new();
        }
    };

    // Held until the end of the call.
    let (shape, _container) = classify(raw, reporter);

    let mut set = SelectionSet::new();
    match shape {
        SelectionShape::Multi(accessor) => collect_multi(&accessor, &mut set, reporter),
        SelectionShape::Single(hierarchy, item) => {
            push_resolved(&hierarchy.share(), item, &mut set, reporter);
        }
        SelectionShape::Empty => push_root(solution, &mut set, reporter),
    }
    set
}

fn collect_multi(
    accessor: &Owned<dyn MultiSelect>,
    set: &mut SelectionSet,
    reporter: &dyn ErrorReporter,
) {
    let count = match accessor.count() {
        Ok(count) => count,
        Err(err) => {
            reporter.report(&err);
            return;
        }
    };
    let items = match accessor.items(0, count) {
        Ok(items) => items,
        Err(err) => {
            reporter.report(&err);
            return;
        }
    };
    for entry in items {
        // Workspace-level rows carry no hierarchy; skip them.
        let Some(hierarchy) = entry.hierarchy else {
            continue;
        };
        push_resolved(&hierarchy.share(), entry.item, set, reporter);
        // The per-item count is paid back as `hierarchy` drops.
    }
}

fn push_resolved(
    hierarchy: &HierarchyRef,
    item: ItemId,
    set: &mut SelectionSet,
    reporter: &dyn ErrorReporter,
) {
    match resolve(hierarchy, item) {
        Ok(Some(node)) => {
            if !set.insert(node) {
                debug!(%item, "duplicate selection identity dropped");
            }
        }
        Ok(None) => debug!(%item, "selected node did not resolve"),
        Err(err) => reporter.report(&err),
    }
}

fn push_root(solution: &dyn SolutionService, set: &mut SelectionSet, reporter: &dyn ErrorReporter) {
    match solution.root_hierarchy() {
        Ok(root) => push_resolved(&root, ItemId::ROOT, set, reporter),
        Err(err) => reporter.report(&err),
    }
}
