//! Hierarchy core for Workbench.
//!
//! Turns the host's raw, reference-counted hierarchy handles into stable
//! domain nodes:
//! - [`resolve`] — native handle + item id → [`NodeDescriptor`], following
//!   nested-hierarchy delegation
//! - [`selected_nodes`] — the host's three selection shapes, normalized
//!   into one deduplicated [`SelectionSet`] with every acquired reference
//!   released exactly once
//! - [`project_nodes`] / [`root_node`] — workspace-level enumeration
//!
//! All functions here assume they already run on the host's affinity
//! thread; the rendezvous lives in `workbench-shell`.

mod node;
mod resolve;
mod selection;
mod walk;

pub use node::{NodeDescriptor, SelectionSet};
pub use resolve::{resolve, resolve_child};
pub use selection::{classify, selected_nodes, SelectionShape};
pub use walk::{project_nodes, root_node};
