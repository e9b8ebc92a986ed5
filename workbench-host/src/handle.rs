//! The host's reference-counted object protocol.
//!
//! The host hands out references that carry a count: every acquisition must
//! be matched by exactly one release, on every exit path. [`Owned`] is the
//! scoped guard that makes that pairing structural — adopt the count on
//! receipt, release on drop. References obtained through plain property
//! queries carry no count and are passed around as bare `Arc`s instead.

use std::ops::Deref;
use std::sync::Arc;

/// A host object that participates in the host's reference counting.
///
/// `add_ref`/`release` manipulate the host-side count only; Rust-side
/// memory is managed by `Arc` independently of it.
pub trait HostRef: Send + Sync {
    /// Increments the host-side reference count.
    fn add_ref(&self);

    /// Decrements the host-side reference count.
    fn release(&self);
}

/// Scoped ownership of one host-side reference count.
///
/// Created with [`Owned::adopt`] when the host has already counted the
/// reference on our behalf (the convention for selection queries and
/// enumerations), or [`Owned::acquire`] to take an additional count.
/// The count is released exactly once, when the guard drops.
pub struct Owned<T: HostRef + ?Sized> {
    raw: Arc<T>,
}

impl<T: HostRef + ?Sized> Owned<T> {
    /// Takes over a count the host has already added.
    #[must_use]
    pub fn adopt(raw: Arc<T>) -> Self {
        Self { raw }
    }

    /// Adds a fresh count and owns it.
    #[must_use]
    pub fn acquire(raw: Arc<T>) -> Self {
        raw.add_ref();
        Self { raw }
    }

    /// Hands out a borrowed reference with no release duty.
    ///
    /// The returned `Arc` must not be released by the caller; it stays
    /// valid for as long as the host keeps the object alive.
    #[must_use]
    pub fn share(&self) -> Arc<T> {
        Arc::clone(&self.raw)
    }
}

impl<T: HostRef + ?Sized> Deref for Owned<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.raw
    }
}

impl<T: HostRef + ?Sized> Drop for Owned<T> {
    fn drop(&mut self) {
        self.raw.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI64, Ordering};

    struct Counted {
        count: AtomicI64,
    }

    impl Counted {
        fn new() -> Self {
            Self {
                count: AtomicI64::new(1), // host hands it out pre-counted
            }
        }
    }

    impl HostRef for Counted {
        fn add_ref(&self) {
            self.count.fetch_add(1, Ordering::SeqCst);
        }

        fn release(&self) {
            self.count.fetch_sub(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn adopt_releases_once_on_drop() {
        let raw = Arc::new(Counted::new());
        {
            let _owned = Owned::adopt(Arc::clone(&raw));
        }
        assert_eq!(raw.count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn acquire_adds_then_releases() {
        let raw = Arc::new(Counted::new());
        {
            let owned = Owned::acquire(Arc::clone(&raw));
            assert_eq!(raw.count.load(Ordering::SeqCst), 2);
            drop(owned);
        }
        assert_eq!(raw.count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn share_carries_no_release_duty() {
        let raw = Arc::new(Counted::new());
        let owned = Owned::adopt(Arc::clone(&raw));
        {
            let _borrowed = owned.share();
        }
        assert_eq!(raw.count.load(Ordering::SeqCst), 1);
        drop(owned);
        assert_eq!(raw.count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn release_happens_on_early_return_paths() {
        fn may_fail(raw: &Arc<Counted>, fail: bool) -> Result<(), ()> {
            let _owned = Owned::adopt(Arc::clone(raw));
            if fail {
                return Err(());
            }
            Ok(())
        }

        let raw = Arc::new(Counted::new());
        raw.add_ref(); // second handout for the second call
        let _ = may_fail(&raw, true);
        let _ = may_fail(&raw, false);
        assert_eq!(raw.count.load(Ordering::SeqCst), 0);
    }
}
