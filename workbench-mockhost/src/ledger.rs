//! Bookkeeping shared by all doubles: reference-count ledger and
//! thread-affinity witness.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;
use std::thread::{self, ThreadId};

/// Counts host-protocol `add_ref`/`release` calls against one object.
#[derive(Debug, Default)]
pub(crate) struct Counts {
    add_refs: AtomicI64,
    releases: AtomicI64,
}

impl Counts {
    pub(crate) fn add_ref(&self) {
        self.add_refs.fetch_add(1, Ordering::SeqCst);
    }

    pub(crate) fn release(&self) {
        self.releases.fetch_add(1, Ordering::SeqCst);
    }

    pub(crate) fn add_refs(&self) -> i64 {
        self.add_refs.load(Ordering::SeqCst)
    }

    pub(crate) fn releases(&self) -> i64 {
        self.releases.load(Ordering::SeqCst)
    }

    /// Acquisitions minus releases. Zero once every count was paid back.
    pub(crate) fn balance(&self) -> i64 {
        self.add_refs() - self.releases()
    }
}

/// Remembers the last thread a service method ran on.
#[derive(Debug, Default)]
pub(crate) struct ThreadWitness {
    last: Mutex<Option<ThreadId>>,
}

impl ThreadWitness {
    pub(crate) fn touch(&self) {
        *self.last.lock().unwrap() = Some(thread::current().id());
    }

    pub(crate) fn last(&self) -> Option<ThreadId> {
        *self.last.lock().unwrap()
    }
}
