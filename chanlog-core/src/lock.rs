use std::{
    sync::Arc,
    thread::{self, ThreadId},
};

use parking_lot::{Condvar, Mutex};

/// Mutual exclusion hook held around every emission.
///
/// `acquire` is always followed by exactly one `release` on the same thread.
pub trait LogLock: Send + Sync {
    fn acquire(&self);
    fn release(&self);
}

/// Closures receive `true` when acquiring and `false` when releasing.
impl<F> LogLock for F
where
    F: Fn(bool) + Send + Sync,
{
    fn acquire(&self) {
        self(true)
    }

    fn release(&self) {
        self(false)
    }
}

/// Ready-made hook excluding other threads until the holder releases it.
///
/// A `release` from a thread that does not hold the lock is ignored.
#[derive(Default)]
pub struct MutexLock {
    owner: Mutex<Option<ThreadId>>,
    released: Condvar,
}

impl MutexLock {
    pub const fn new() -> Self {
        Self {
            owner: Mutex::new(None),
            released: Condvar::new(),
        }
    }

    /// Returns true when the calling thread holds the lock.
    pub fn is_held(&self) -> bool {
        *self.owner.lock() == Some(thread::current().id())
    }
}

impl LogLock for MutexLock {
    fn acquire(&self) {
        let me = thread::current().id();
        let mut owner = self.owner.lock();
        while owner.is_some() {
            self.released.wait(&mut owner);
        }
        *owner = Some(me);
    }

    fn release(&self) {
        let mut owner = self.owner.lock();
        if *owner == Some(thread::current().id()) {
            *owner = None;
            drop(owner);
            self.released.notify_one();
        }
    }
}

/// Holds the hook for the lifetime of the guard.
pub struct LockGuard<'a> {
    lock: Option<&'a Arc<dyn LogLock>>,
}

impl<'a> LockGuard<'a> {
    pub fn new(lock: Option<&'a Arc<dyn LogLock>>) -> Self {
        if let Some(lock) = lock {
            lock.acquire();
        }
        Self { lock }
    }
}

impl Drop for LockGuard<'_> {
    fn drop(&mut self) {
        if let Some(lock) = self.lock {
            lock.release();
        }
    }
}
