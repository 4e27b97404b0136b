//! Cache cell that remembers the last fetched value and pushes every new one
//! to its observers.
//!
//! Late subscribers receive the current value immediately (replay-last-value).
//! Callers racing on an empty cell share a single fetch, since the fetch runs
//! while the value lock is held.

use std::sync::{Mutex, MutexGuard};

use crate::errors::AppResult;

type Observer<T> = Box<dyn Fn(&T) + Send + Sync>;

pub struct ReplayCell<T> {
    value: Mutex<Option<T>>,
    observers: Mutex<Vec<Observer<T>>>,
}

impl<T> Default for ReplayCell<T> {
    fn default() -> Self {
        Self {
            value: Mutex::new(None),
            observers: Mutex::new(Vec::new()),
        }
    }
}

fn lock<V>(m: &Mutex<V>) -> MutexGuard<'_, V> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<T: Clone> ReplayCell<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(&self) -> Option<T> {
        lock(&self.value).clone()
    }

    pub fn has_observers(&self) -> bool {
        !lock(&self.observers).is_empty()
    }

    /// Register `observer`; it is called right away if a value is cached.
    ///
    /// The observer list stays locked while the current value is replayed,
    /// so a concurrent reload either lands before the replay or is delivered
    /// afterwards. Observers must not subscribe from inside their callback.
    pub fn subscribe<F>(&self, observer: F)
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let mut observers = lock(&self.observers);
        if let Some(current) = self.latest() {
            observer(&current);
        }
        observers.push(Box::new(observer));
    }

    /// Return the cached value, fetching it first if the cell is empty.
    pub fn get_or_fetch<F>(&self, fetch: F) -> AppResult<T>
    where
        F: FnOnce() -> AppResult<T>,
    {
        let mut slot = lock(&self.value);
        if let Some(v) = slot.as_ref() {
            return Ok(v.clone());
        }

        let fresh = fetch()?;
        *slot = Some(fresh.clone());
        drop(slot);

        self.notify(&fresh);
        Ok(fresh)
    }

    /// Fetch unconditionally and replace the cached value.
    ///
    /// On failure the previous value is kept and nobody is notified.
    pub fn reload<F>(&self, fetch: F) -> AppResult<T>
    where
        F: FnOnce() -> AppResult<T>,
    {
        let mut slot = lock(&self.value);
        let fresh = fetch()?;
        *slot = Some(fresh.clone());
        drop(slot);

        self.notify(&fresh);
        Ok(fresh)
    }

    /// Drop the cached value so the next read fetches again.
    pub fn invalidate(&self) {
        *lock(&self.value) = None;
    }

    fn notify(&self, value: &T) {
        for observer in lock(&self.observers).iter() {
            observer(value);
        }
    }
}
