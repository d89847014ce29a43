//! Typed observer registry.
//!
//! Callbacks are registered per event type and detached when the returned
//! [`Subscription`] is dropped, so a subscriber that goes away without
//! unsubscribing never leaves a dangling callback behind.

use std::sync::{Arc, Mutex, PoisonError, Weak};

use crate::decode::parser::SkippedRow;
use crate::options::Options;

/// Events raised by parsers and writers.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Options were replaced.
    OptionsChanged { old: Options, new: Options },
    /// A `set_options` call was refused; the previous options stay active.
    OptionsChangeIgnored {
        attempted: Options,
        reason: IgnoreReason,
    },
    /// A data line did not have the header's field count and was dropped.
    RowSkipped(SkippedRow),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The instance is mid-operation and live changes are disabled.
    NotAllowedWhileWorking,
    /// The new options fail validation.
    Unusable,
}

impl core::fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            IgnoreReason::NotAllowedWhileWorking => {
                f.write_str("options cannot change while working")
            }
            IgnoreReason::Unusable => f.write_str("options are not usable"),
        }
    }
}

type Callback<E> = Arc<dyn Fn(&E) + Send + Sync>;

struct Registry<E> {
    next_id: u64,
    slots: Vec<(u64, Callback<E>)>,
}

trait Detach: Send + Sync {
    fn detach(&self, id: u64);
}

impl<E: 'static> Detach for Mutex<Registry<E>> {
    fn detach(&self, id: u64) {
        let mut reg = self.lock().unwrap_or_else(PoisonError::into_inner);
        reg.slots.retain(|(slot_id, _)| *slot_id != id);
    }
}

pub struct Observers<E> {
    inner: Arc<Mutex<Registry<E>>>,
}

impl<E: 'static> Observers<E> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Registry {
                next_id: 0,
                slots: Vec::new(),
            })),
        }
    }

    /// Registers `callback` until the returned handle is dropped.
    #[must_use = "dropping the subscription detaches the callback immediately"]
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let mut reg = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let id = reg.next_id;
        reg.next_id += 1;
        reg.slots.push((id, Arc::new(callback)));
        let registry: Weak<dyn Detach> = Arc::downgrade(&self.inner) as Weak<dyn Detach>;
        Subscription {
            id,
            registry: Some(registry),
        }
    }

    /// Calls every live subscriber in registration order. The registry lock
    /// is released before any callback runs, so callbacks may subscribe or
    /// drop handles.
    pub fn emit(&self, event: &E) {
        let snapshot: Vec<Callback<E>> = {
            let reg = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            reg.slots.iter().map(|(_, cb)| Arc::clone(cb)).collect()
        };
        for cb in snapshot {
            cb(event);
        }
    }

    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .slots
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: 'static> Default for Observers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> core::fmt::Debug for Observers<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Observers").finish_non_exhaustive()
    }
}

/// Handle tying a callback's registration to its own lifetime.
pub struct Subscription {
    id: u64,
    registry: Option<Weak<dyn Detach>>,
}

impl Subscription {
    /// Keeps the callback registered for as long as the registry lives.
    pub fn detach(mut self) {
        self.registry = None;
    }

    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(reg) = self.registry.take().and_then(|w| w.upgrade()) {
            reg.detach(self.id);
        }
    }
}

impl core::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("attached", &self.registry.is_some())
            .finish()
    }
}
