//! The `Workbench` facade.

use crate::error::{ShellError, ShellResult};
use std::sync::Arc;
use workbench_hierarchy::{NodeDescriptor, SelectionSet};
use workbench_host::{
    BuildManager, ErrorReporter, SelectionService, SolutionService, UiDispatcher,
};
use workbench_types::BuildAction;

/// The host services a `Workbench` is wired to.
pub struct HostServices {
    pub selection: Arc<dyn SelectionService>,
    pub solution: Arc<dyn SolutionService>,
    pub build: Arc<dyn BuildManager>,
    pub reporter: Arc<dyn ErrorReporter>,
}

/// Facade over the host's workspace tree and build manager.
///
/// Cheap to clone; clones share the same affinity thread and services.
#[derive(Clone)]
pub struct Workbench {
    services: Arc<HostServices>,
    ui: UiDispatcher,
}

impl Workbench {
    /// Wires the facade to its host services on a freshly spawned
    /// affinity thread.
    #[must_use]
    pub fn new(services: HostServices) -> Self {
        Self::with_dispatcher(services, UiDispatcher::spawn())
    }

    /// Wires the facade to an existing affinity thread, for embedders
    /// that already own one.
    #[must_use]
    pub fn with_dispatcher(services: HostServices, ui: UiDispatcher) -> Self {
        Self {
            services: Arc::new(services),
            ui,
        }
    }

    /// Enumerates the host's current selection as domain nodes.
    ///
    /// Always at least the workspace root while a workspace is open; no
    /// two returned nodes share an identity.
    pub async fn selection(&self) -> ShellResult<SelectionSet> {
        let services = Arc::clone(&self.services);
        self.invoke(move || {
            workbench_hierarchy::selected_nodes(
                services.selection.as_ref(),
                services.solution.as_ref(),
                services.reporter.as_ref(),
            )
        })
        .await
    }

    /// All top-level project nodes, optionally with solution folders.
    pub async fn project_nodes(&self, include_folders: bool) -> ShellResult<Vec<NodeDescriptor>> {
        let services = Arc::clone(&self.services);
        self.invoke(move || {
            workbench_hierarchy::project_nodes(
                services.solution.as_ref(),
                include_folders,
                services.reporter.as_ref(),
            )
        })
        .await
    }

    /// The workspace root node, if it resolves.
    pub async fn root_node(&self) -> ShellResult<Option<NodeDescriptor>> {
        let services = Arc::clone(&self.services);
        self.invoke(move || {
            workbench_hierarchy::root_node(services.solution.as_ref(), services.reporter.as_ref())
        })
        .await
    }

    /// Starts a build; `None` targets the whole workspace.
    ///
    /// Returns whether the host accepted the request.
    pub async fn start_build(
        &self,
        action: BuildAction,
        target: Option<NodeDescriptor>,
    ) -> ShellResult<bool> {
        let services = Arc::clone(&self.services);
        self.invoke(move || {
            workbench_build::start(services.build.as_ref(), action, target.as_ref())
        })
        .await
    }

    /// Requests cancellation of an in-progress build.
    ///
    /// Returns whether a cancel was actually issued and accepted.
    pub async fn cancel_build(&self) -> ShellResult<bool> {
        let services = Arc::clone(&self.services);
        self.invoke(move || workbench_build::cancel(services.build.as_ref()))
            .await
    }

    async fn invoke<T, F>(&self, f: F) -> ShellResult<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        self.ui.invoke(f).await.map_err(|_| ShellError::Detached)
    }
}
