use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

type LockMap = DashMap<Uuid, Arc<Mutex<()>>>;

/// Per-record async mutexes that scope one read-modify-write.
///
/// Only serializes writers inside this process; other processes sharing the
/// data directory still race.
#[derive(Clone, Default, Debug)]
pub struct KeyLocks {
    inner: Arc<LockMap>,
}

/// Exclusive access to one key. Dropping it releases the mutex and removes
/// the map entry once nobody else holds or waits on it.
pub struct KeyGuard {
    key: Uuid,
    map: Arc<LockMap>,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for KeyGuard {
    fn drop(&mut self) {
        // the guard owns one Arc; release it before counting
        self.guard.take();
        self.map.remove_if(&self.key, |_, m| Arc::strong_count(m) == 1);
    }
}

impl KeyLocks {
    pub fn new() -> Self { Self::default() }

    /// Wait for exclusive access to `key`.
    pub async fn lock(&self, key: Uuid) -> KeyGuard {
        let mutex = self
            .inner
            .entry(key)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let guard = mutex.lock_owned().await;
        KeyGuard { key, map: Arc::clone(&self.inner), guard: Some(guard) }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize { self.inner.len() }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool { self.inner.is_empty() }
}
