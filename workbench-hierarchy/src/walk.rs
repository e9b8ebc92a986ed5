//! Workspace-level enumeration.

use crate::node::NodeDescriptor;
use crate::resolve::resolve;
use tracing::debug;
use workbench_host::{ErrorReporter, SolutionService};
use workbench_types::{ItemId, NodeKind};

/// Enumerates all top-level project nodes reachable from the workspace
/// root.
///
/// Keeps `Project` nodes always and `SolutionFolder` nodes only when
/// `include_folders` is set; everything else is dropped. A fresh host
/// query each call, in host enumeration order. Must run on the affinity
/// thread.
pub fn project_nodes(
    solution: &dyn SolutionService,
    include_folders: bool,
    reporter: &dyn ErrorReporter,
) -> Vec<NodeDescriptor> {
    let hierarchies = match solution.project_hierarchies() {
        Ok(hierarchies) => hierarchies,
        Err(err) => {
            reporter.report(&err);
            return Vec::new();
        }
    };

    let mut nodes = Vec::new();
    for hierarchy in hierarchies {
        match resolve(&hierarchy.share(), ItemId::ROOT) {
            Ok(Some(node)) if keeps(node.kind(), include_folders) => nodes.push(node),
            Ok(Some(node)) => debug!(kind = ?node.kind(), "non-project hierarchy skipped"),
            Ok(None) => debug!("top-level hierarchy did not resolve"),
            Err(err) => reporter.report(&err),
        }
        // The enumeration count is paid back as `hierarchy` drops.
    }
    nodes
}

/// Resolves the workspace root node itself. Must run on the affinity
/// thread.
pub fn root_node(solution: &dyn SolutionService, reporter: &dyn ErrorReporter) -> Option<NodeDescriptor> {
    let root = match solution.root_hierarchy() {
        Ok(root) => root,
        Err(err) => {
            reporter.report(&err);
            return None;
        }
    };
    match resolve(&root, ItemId::ROOT) {
        Ok(node) => node,
        Err(err) => {
            reporter.report(&err);
            None
        }
    }
}

fn keeps(kind: NodeKind, include_folders: bool) -> bool {
    match kind {
        NodeKind::Project => true,
        NodeKind::SolutionFolder => include_folders,
        _ => false,
    }
}
