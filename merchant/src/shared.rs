use crate::response::{Answer, FactSheet};
use crate::{Engine, MerchantResult};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// An [`Engine`] that can be shared between threads.
///
/// One lock covers a whole `submit`, so a fact and a question on different
/// threads never observe each other half applied.
#[derive(Debug, Clone, Default)]
pub struct SharedEngine {
    inner: Arc<Mutex<Engine>>,
}

impl SharedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit(&self, line: &str) -> MerchantResult<String> {
        self.lock().submit(line)
    }

    pub fn answer(&self, line: &str) -> MerchantResult<Answer> {
        self.lock().answer(line)
    }

    pub fn facts(&self) -> FactSheet {
        self.lock().facts()
    }

    // No mutation path in `Engine` can panic partway through, so a poisoned
    // lock still guards consistent tables.
    fn lock(&self) -> MutexGuard<'_, Engine> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
