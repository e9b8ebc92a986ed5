//! Build-manager double that records every issued request.

use crate::ledger::ThreadWitness;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Mutex;
use std::thread::ThreadId;
use workbench_host::{BuildManager, HierarchyRef, HostError, HostResult};
use workbench_types::{BuildFlags, HierarchyId, QueryFlags};

/// Scope of a recorded build request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildScope {
    Solution,
    Project(HierarchyId),
}

/// One build request as issued to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildCall {
    pub scope: BuildScope,
    pub flags: BuildFlags,
    pub query: QueryFlags,
}

/// Scriptable build manager.
///
/// Defaults: builds accepted, cancellation not possible.
#[derive(Default)]
pub struct MockBuildManager {
    can_cancel: AtomicBool,
    reject_cancel: AtomicBool,
    reject_builds: AtomicBool,
    cancels_issued: AtomicU32,
    calls: Mutex<Vec<BuildCall>>,
    witness: ThreadWitness,
}

impl MockBuildManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the current operation as cancellable.
    pub fn allow_cancel(&self) {
        self.can_cancel.store(true, Ordering::SeqCst);
    }

    /// Cancellation possible, but the cancel request itself gets rejected.
    pub fn reject_cancel(&self) {
        self.can_cancel.store(true, Ordering::SeqCst);
        self.reject_cancel.store(true, Ordering::SeqCst);
    }

    /// All build requests get a non-success status.
    pub fn reject_builds(&self) {
        self.reject_builds.store(true, Ordering::SeqCst);
    }

    /// Requests issued so far, in order.
    pub fn calls(&self) -> Vec<BuildCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of cancel requests actually issued.
    pub fn cancels_issued(&self) -> u32 {
        self.cancels_issued.load(Ordering::SeqCst)
    }

    pub fn last_thread(&self) -> Option<ThreadId> {
        self.witness.last()
    }

    fn record(&self, call: BuildCall) -> HostResult<()> {
        self.calls.lock().unwrap().push(call);
        if self.reject_builds.load(Ordering::SeqCst) {
            return Err(HostError::Rejected { code: -0x7fff_0001 });
        }
        Ok(())
    }
}

impl BuildManager for MockBuildManager {
    fn can_cancel(&self) -> HostResult<bool> {
        self.witness.touch();
        Ok(self.can_cancel.load(Ordering::SeqCst))
    }

    fn cancel_build(&self) -> HostResult<()> {
        self.witness.touch();
        self.cancels_issued.fetch_add(1, Ordering::SeqCst);
        if self.reject_cancel.load(Ordering::SeqCst) {
            return Err(HostError::Rejected { code: -0x7fff_0002 });
        }
        Ok(())
    }

    fn build_project(
        &self,
        hierarchy: &HierarchyRef,
        flags: BuildFlags,
        query: QueryFlags,
    ) -> HostResult<()> {
        self.witness.touch();
        self.record(BuildCall {
            scope: BuildScope::Project(hierarchy.identity()),
            flags,
            query,
        })
    }

    fn build_solution(&self, flags: BuildFlags, query: QueryFlags) -> HostResult<()> {
        self.witness.touch();
        self.record(BuildCall {
            scope: BuildScope::Solution,
            flags,
            query,
        })
    }
}
