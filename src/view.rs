//! Per-screen state that in-flight requests write into.
//!
//! Requests are never cancelled. Instead every [`Slot`] shares its
//! [`Screen`]'s liveness flag, and once the screen is dropped any late
//! result is discarded.

use std::sync::{Arc, Mutex, MutexGuard, RwLock};

/// Shared liveness. Writers hold the read side for the whole check-and-store,
/// so dismantling (the write side) cannot land between the two.
type Liveness = Arc<RwLock<bool>>;

/// State of a value a screen is waiting on
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Ready(T),
}

impl<T> Loadable<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Loadable::Ready(value) => Some(value),
            Loadable::Loading => None,
        }
    }
}

/// Owner of a displayed screen's liveness
#[derive(Debug)]
pub struct Screen {
    alive: Liveness,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(RwLock::new(true)),
        }
    }

    pub fn slot<T>(&self) -> Slot<T> {
        Slot {
            alive: Arc::clone(&self.alive),
            value: Arc::new(Mutex::new(Loadable::Loading)),
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let mut alive = self.alive.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *alive = false;
    }
}

/// A piece of screen state, shareable with the task that fills it
#[derive(Debug)]
pub struct Slot<T> {
    alive: Liveness,
    value: Arc<Mutex<Loadable<T>>>,
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Self {
            alive: Arc::clone(&self.alive),
            value: Arc::clone(&self.value),
        }
    }
}

impl<T> Slot<T> {
    fn lock(&self) -> MutexGuard<'_, Loadable<T>> {
        // A panicked writer leaves a fully written value behind
        self.value.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Store a fetched value. Returns `false` and drops it when the screen
    /// is gone.
    pub fn apply(&self, value: T) -> bool {
        let alive = self.alive.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        if !*alive {
            tracing::debug!("screen dismantled, discarding late result");
            return false;
        }
        *self.lock() = Loadable::Ready(value);
        true
    }

    pub fn is_loading(&self) -> bool {
        self.lock().is_loading()
    }
}

impl<T: Clone> Slot<T> {
    pub fn get(&self) -> Loadable<T> {
        self.lock().clone()
    }
}
