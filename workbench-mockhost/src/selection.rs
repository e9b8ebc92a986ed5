//! Scriptable selection-service doubles.

use crate::hierarchy::MockHierarchy;
use crate::ledger::{Counts, ThreadWitness};
use std::sync::{Arc, Mutex};
use std::thread::ThreadId;
use workbench_host::{
    HostError, HostRef, HostResult, MultiSelect, Owned, RawSelection, SelectedItem,
    SelectionContainer, SelectionService,
};
use workbench_types::ItemId;

/// Opaque selection container. Exists only to be released.
#[derive(Default)]
pub struct MockContainer {
    counts: Counts,
}

impl MockContainer {
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn balance(&self) -> i64 {
        self.counts.balance()
    }

    pub fn releases(&self) -> i64 {
        self.counts.releases()
    }
}

impl HostRef for MockContainer {
    fn add_ref(&self) {
        self.counts.add_ref();
    }

    fn release(&self) {
        self.counts.release();
    }
}

impl SelectionContainer for MockContainer {}

/// Multi-selection accessor over a scripted item list.
pub struct MockMultiSelect {
    counts: Counts,
    items: Vec<(Option<Arc<MockHierarchy>>, ItemId)>,
    fail_count: bool,
    fail_items: bool,
}

impl MockMultiSelect {
    #[must_use]
    pub fn new(items: Vec<(Option<Arc<MockHierarchy>>, ItemId)>) -> Arc<Self> {
        Arc::new(Self {
            counts: Counts::default(),
            items,
            fail_count: false,
            fail_items: false,
        })
    }

    /// Accessor whose `count` query fails.
    #[must_use]
    pub fn failing_count() -> Arc<Self> {
        Arc::new(Self {
            counts: Counts::default(),
            items: Vec::new(),
            fail_count: true,
            fail_items: false,
        })
    }

    /// Accessor whose `items` query fails after `count` succeeded.
    #[must_use]
    pub fn failing_items(items: Vec<(Option<Arc<MockHierarchy>>, ItemId)>) -> Arc<Self> {
        Arc::new(Self {
            counts: Counts::default(),
            items,
            fail_count: false,
            fail_items: true,
        })
    }

    pub fn balance(&self) -> i64 {
        self.counts.balance()
    }
}

impl HostRef for MockMultiSelect {
    fn add_ref(&self) {
        self.counts.add_ref();
    }

    fn release(&self) {
        self.counts.release();
    }
}

impl MultiSelect for MockMultiSelect {
    fn count(&self) -> HostResult<u32> {
        if self.fail_count {
            return Err(HostError::unavailable("injected count failure"));
        }
        Ok(self.items.len() as u32)
    }

    fn items(&self, first: u32, count: u32) -> HostResult<Vec<SelectedItem>> {
        if self.fail_items {
            return Err(HostError::unavailable("injected items failure"));
        }
        let first = first as usize;
        let end = (first + count as usize).min(self.items.len());
        Ok(self.items[first..end]
            .iter()
            .map(|(hier, item)| SelectedItem {
                hierarchy: hier.as_ref().map(MockHierarchy::handout),
                item: *item,
            })
            .collect())
    }
}

enum Script {
    None,
    Single(Arc<MockHierarchy>, ItemId),
    Multi(Arc<MockMultiSelect>),
    DanglingMulti,
    Fail,
}

/// Scriptable selection service covering all three selection shapes.
pub struct MockSelectionService {
    script: Mutex<Script>,
    container: Arc<MockContainer>,
    witness: ThreadWitness,
}

impl MockSelectionService {
    /// No selection: null handle, nil item id.
    #[must_use]
    pub fn none() -> Self {
        Self::with_script(Script::None)
    }

    /// Single concrete selection.
    #[must_use]
    pub fn single(hierarchy: Arc<MockHierarchy>, item: ItemId) -> Self {
        Self::with_script(Script::Single(hierarchy, item))
    }

    /// Multi-selection backed by the given accessor.
    #[must_use]
    pub fn multi(accessor: Arc<MockMultiSelect>) -> Self {
        Self::with_script(Script::Multi(accessor))
    }

    /// Multi-selection sentinel reported without an accessor.
    #[must_use]
    pub fn dangling_multi() -> Self {
        Self::with_script(Script::DanglingMulti)
    }

    /// Service whose selection query itself fails.
    #[must_use]
    pub fn failing() -> Self {
        Self::with_script(Script::Fail)
    }

    fn with_script(script: Script) -> Self {
        Self {
            script: Mutex::new(script),
            container: MockContainer::new(),
            witness: ThreadWitness::default(),
        }
    }

    /// The container handed out with every selection quadruple.
    pub fn container(&self) -> &Arc<MockContainer> {
        &self.container
    }

    pub fn last_thread(&self) -> Option<ThreadId> {
        self.witness.last()
    }

    fn counted_container(&self) -> Owned<dyn SelectionContainer> {
        self.container.add_ref();
        Owned::adopt(Arc::clone(&self.container) as Arc<dyn SelectionContainer>)
    }
}

impl SelectionService for MockSelectionService {
    fn current_selection(&self) -> HostResult<RawSelection> {
        self.witness.touch();
        let script = self.script.lock().unwrap();
        match &*script {
            Script::None => Ok(RawSelection {
                hierarchy: None,
                item: ItemId::NIL,
                multi: None,
                container: Some(self.counted_container()),
            }),
            Script::Single(hierarchy, item) => Ok(RawSelection {
                hierarchy: Some(MockHierarchy::handout(hierarchy)),
                item: *item,
                multi: None,
                container: Some(self.counted_container()),
            }),
            Script::Multi(accessor) => {
                accessor.add_ref();
                Ok(RawSelection {
                    hierarchy: None,
                    item: ItemId::SELECTION,
                    multi: Some(Owned::adopt(
                        Arc::clone(accessor) as Arc<dyn MultiSelect>
                    )),
                    container: Some(self.counted_container()),
                })
            }
            Script::DanglingMulti => Ok(RawSelection {
                hierarchy: None,
                item: ItemId::SELECTION,
                multi: None,
                container: Some(self.counted_container()),
            }),
            Script::Fail => Err(HostError::unavailable("injected selection failure")),
        }
    }
}
