//! Build orchestration for Workbench.
//!
//! Translates a [`BuildAction`] plus an optional target node into the host
//! build manager's flag vocabulary and issues the request. The build
//! manager owns all session state; this crate only starts operations and
//! forwards capability-gated cancellation.

mod orchestrator;

pub use orchestrator::{cancel, start};
