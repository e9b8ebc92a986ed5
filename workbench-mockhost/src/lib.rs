//! In-memory host doubles for Workbench test suites.
//!
//! Provides scriptable implementations of every host service trait so the
//! core crates can be tested without a real host:
//!
//! - [`MockHierarchy`] — a hierarchy with per-item nodes, staleness, nested
//!   delegation, and injected query failures
//! - [`MockSelectionService`] / [`MockMultiSelect`] — all three selection
//!   shapes, with mid-enumeration failure injection
//! - [`MockSolutionService`] — workspace root plus top-level project list
//! - [`MockBuildManager`] — records every issued build request
//! - [`CollectingReporter`] — captures reported errors for assertions
//!
//! Every double keeps a reference-count ledger (`add_refs`/`releases`) and
//! records the thread its methods ran on, so tests can assert the exact
//! release invariant and affinity-thread confinement.

mod build;
mod hierarchy;
mod ledger;
mod report;
mod selection;

pub use build::{BuildCall, BuildScope, MockBuildManager};
pub use hierarchy::{MockHierarchy, MockSolutionService};
pub use report::CollectingReporter;
pub use selection::{MockContainer, MockMultiSelect, MockSelectionService};
