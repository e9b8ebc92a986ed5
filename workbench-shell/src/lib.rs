//! Published facade for Workbench.
//!
//! [`Workbench`] is the one surface embedders call. Every operation first
//! rendezvouses on the host's affinity thread via
//! [`UiDispatcher`](workbench_host::UiDispatcher), then runs the
//! synchronous core from `workbench-hierarchy` / `workbench-build`.
//!
//! Host-interaction failures never surface as errors here: selection and
//! enumeration return partial results, builds return `false`. The only
//! hard failure is calling into a facade whose affinity thread has shut
//! down ([`ShellError::Detached`]).

mod error;
mod facade;

pub use error::{ShellError, ShellResult};
pub use facade::{HostServices, Workbench};

pub use workbench_hierarchy::{NodeDescriptor, SelectionSet};
pub use workbench_types::{BuildAction, HierarchyId, ItemId, NodeId, NodeKind};
