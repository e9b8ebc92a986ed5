//! Host seam for Workbench.
//!
//! Everything the facade consumes from the surrounding application is
//! declared here as a trait, so the core logic never links against a
//! concrete host:
//! - [`HostRef`] and [`Owned`] — the host's reference-counted object
//!   protocol and the scoped guard that releases exactly once
//! - [`Hierarchy`] — a host-owned tree object, queried per item id
//! - Service traits — selection, workspace root, build manager, error sink
//! - [`UiDispatcher`] — the mandatory rendezvous onto the host's affinity
//!   thread
//!
//! Test doubles for all of these live in `workbench-mockhost`.

mod dispatch;
mod error;
mod handle;
mod hierarchy;
mod services;

pub use dispatch::UiDispatcher;
pub use error::{HostError, HostResult};
pub use handle::{HostRef, Owned};
pub use hierarchy::{Hierarchy, HierarchyRef};
pub use services::{
    BuildManager, ErrorReporter, MultiSelect, RawSelection, SelectedItem, SelectionContainer,
    SelectionService, SolutionService, TracingReporter,
};
