use std::sync::Arc;
use workbench_hierarchy::{project_nodes, root_node};
use workbench_mockhost::{CollectingReporter, MockHierarchy, MockSolutionService};
use workbench_types::{ItemId, NodeKind};

fn project(name: &str) -> Arc<MockHierarchy> {
    let hier = MockHierarchy::new();
    hier.put_node(ItemId::ROOT, NodeKind::Project, name);
    hier
}

fn folder(name: &str) -> Arc<MockHierarchy> {
    let hier = MockHierarchy::new();
    hier.put_node(ItemId::ROOT, NodeKind::SolutionFolder, name);
    hier
}

fn workspace() -> MockSolutionService {
    MockSolutionService::new(MockHierarchy::new(), "Workspace")
}

// ── kind filter ───────────────────────────────────────────────────

#[test]
fn without_folders_only_projects_survive() {
    let sol = workspace();
    sol.add_project(project("alpha"));
    sol.add_project(folder("shared"));
    sol.add_project(project("beta"));
    let reporter = CollectingReporter::new();

    let nodes = project_nodes(&sol, false, &reporter);

    let names: Vec<_> = nodes.iter().map(|n| n.name().unwrap()).collect();
    assert_eq!(names, ["alpha", "beta"]);
    assert!(nodes.iter().all(|n| n.kind() == NodeKind::Project));
    assert!(reporter.is_empty());
}

#[test]
fn with_folders_projects_and_folders_survive() {
    let sol = workspace();
    sol.add_project(project("alpha"));
    sol.add_project(folder("shared"));
    let reporter = CollectingReporter::new();

    let nodes = project_nodes(&sol, true, &reporter);

    let kinds: Vec<_> = nodes.iter().map(|n| n.kind()).collect();
    assert_eq!(kinds, [NodeKind::Project, NodeKind::SolutionFolder]);
}

#[test]
fn other_kinds_never_survive() {
    let stray = MockHierarchy::new();
    stray.put_node(ItemId::ROOT, NodeKind::PhysicalFile, "loose.txt");
    let sol = workspace();
    sol.add_project(stray);
    sol.add_project(project("alpha"));

    let nodes = project_nodes(&sol, true, &CollectingReporter::new());

    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].name(), Some("alpha"));
}

// ── ordering and resources ────────────────────────────────────────

#[test]
fn host_enumeration_order_is_preserved() {
    let sol = workspace();
    for name in ["one", "two", "three"] {
        sol.add_project(project(name));
    }

    let nodes = project_nodes(&sol, false, &CollectingReporter::new());

    let names: Vec<_> = nodes.iter().map(|n| n.name().unwrap()).collect();
    assert_eq!(names, ["one", "two", "three"]);
}

#[test]
fn enumeration_references_are_all_released() {
    let alpha = project("alpha");
    let shared = folder("shared");
    let sol = workspace();
    sol.add_project(Arc::clone(&alpha));
    sol.add_project(Arc::clone(&shared));

    let nodes = project_nodes(&sol, false, &CollectingReporter::new());

    // Dropped and kept hierarchies alike owe nothing afterwards.
    assert_eq!(alpha.balance(), 0);
    assert_eq!(shared.balance(), 0);
    drop(nodes);
    assert_eq!(alpha.balance(), 0);
}

#[test]
fn unresolvable_hierarchy_is_skipped() {
    let torn_down = MockHierarchy::new(); // no root node scripted
    let sol = workspace();
    sol.add_project(torn_down);
    sol.add_project(project("alpha"));
    let reporter = CollectingReporter::new();

    let nodes = project_nodes(&sol, false, &reporter);

    assert_eq!(nodes.len(), 1);
    assert!(reporter.is_empty());
}

// ── root node ─────────────────────────────────────────────────────

#[test]
fn root_node_resolves_the_workspace_root() {
    let sol = workspace();
    let node = root_node(&sol, &CollectingReporter::new()).unwrap();
    assert_eq!(node.kind(), NodeKind::Solution);
    assert_eq!(node.name(), Some("Workspace"));
    assert_eq!(node.id().hierarchy(), sol.root().identity());
}

#[test]
fn root_node_is_none_when_root_is_gone() {
    let bare = MockHierarchy::new();
    let sol = MockSolutionService::new(Arc::clone(&bare), "gone");
    bare.put_stale(ItemId::ROOT);

    assert!(root_node(&sol, &CollectingReporter::new()).is_none());
}
