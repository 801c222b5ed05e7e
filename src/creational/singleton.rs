//! Singleton: one government per country, created on first request.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::Result;
use crate::transcript::Transcript;

/// Process-wide slot with guarded lazy construction.
///
/// Unlike `OnceLock`, the slot can be emptied again with [`reset`], which
/// lets tests start from a clean state.
///
/// [`reset`]: SingletonCell::reset
pub struct SingletonCell<T> {
    slot: Mutex<Option<Arc<T>>>,
    constructions: AtomicUsize,
}

impl<T> SingletonCell<T> {
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
            constructions: AtomicUsize::new(0),
        }
    }

    /// Returns the instance, running `init` only if the slot is empty.
    /// Concurrent first callers block on the lock, so `init` runs once.
    pub fn get_or_init(&self, init: impl FnOnce() -> T) -> Arc<T> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(instance) = slot.as_ref() {
            return Arc::clone(instance);
        }
        let instance = Arc::new(init());
        self.constructions.fetch_add(1, Ordering::SeqCst);
        *slot = Some(Arc::clone(&instance));
        instance
    }

    pub fn get(&self) -> Option<Arc<T>> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Empties the slot; the next `get_or_init` constructs a fresh instance.
    pub fn reset(&self) -> Option<Arc<T>> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    pub fn constructions(&self) -> usize {
        self.constructions.load(Ordering::SeqCst)
    }
}

impl<T> Default for SingletonCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct Government {
    country: String,
}

static GOVERNMENT: SingletonCell<Government> = SingletonCell::new();

impl Government {
    pub fn shared() -> Arc<Government> {
        GOVERNMENT.get_or_init(|| {
            tracing::debug!("forming the government");
            Government {
                country: "Country N".to_string(),
            }
        })
    }

    /// Dissolves the current government; the next `shared` forms a new one.
    pub fn reset() -> Option<Arc<Government>> {
        GOVERNMENT.reset()
    }

    pub fn constructions() -> usize {
        GOVERNMENT.constructions()
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

pub fn scenario(out: &mut Transcript) -> Result<()> {
    let first = Government::shared();
    let second = Government::shared();
    out.line(format!("Government of {}", first.country()));
    out.line(format!("Same instance: {}", Arc::ptr_eq(&first, &second)));
    Ok(())
}
