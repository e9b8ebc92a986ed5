//! Build request issuing and cancellation.

use tracing::{info, warn};
use workbench_hierarchy::NodeDescriptor;
use workbench_host::BuildManager;
use workbench_types::{BuildAction, QueryFlags};

/// Starts a build operation against the host build manager.
///
/// A `Project` target scopes the request to that project's hierarchy; any
/// other target, including a solution folder, falls back to the whole
/// workspace. Returns whether the host accepted the request; a rejected
/// status is `false`, not an error. Must run on the affinity thread.
pub fn start(manager: &dyn BuildManager, action: BuildAction, target: Option<&NodeDescriptor>) -> bool {
    let flags = action.flags();
    let query = QueryFlags::NO_DEPLOY_ON_ERROR;

    let status = match target {
        Some(node) if node.is_project() => {
            info!(%action, node = %node.id(), "starting project build");
            manager.build_project(node.hierarchy(), flags, query)
        }
        Some(node) => {
            info!(%action, kind = ?node.kind(), "non-project target, building whole workspace");
            manager.build_solution(flags, query)
        }
        None => {
            info!(%action, "starting workspace build");
            manager.build_solution(flags, query)
        }
    };

    match status {
        Ok(()) => true,
        Err(err) => {
            warn!(%action, %err, "build request not accepted");
            false
        }
    }
}

/// Requests cancellation of the in-progress build.
///
/// Best effort: the host is asked whether cancellation is currently
/// possible, and no cancel is issued when it is not. Returns whether a
/// cancel was issued and accepted. Must run on the affinity thread.
pub fn cancel(manager: &dyn BuildManager) -> bool {
    match manager.can_cancel() {
        Ok(true) => {}
        Ok(false) => return false,
        Err(err) => {
            warn!(%err, "cancellability query failed");
            return false;
        }
    }
    match manager.cancel_build() {
        Ok(()) => true,
        Err(err) => {
            warn!(%err, "cancel request not accepted");
            false
        }
    }
}
