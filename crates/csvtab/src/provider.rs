//! Options ownership shared by [`Parser`](crate::Parser) and
//! [`Writer`](crate::Writer).

use std::cell::Cell;

use thiserror::Error;

use crate::events::{Event, IgnoreReason, Observers, Subscription};
use crate::options::Options;

/// Returned when [`OptionsHost::set_options`] refuses a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("options change ignored: {reason}")]
pub struct ChangeIgnored {
    pub reason: IgnoreReason,
}

/// Owns the active options, the working flag and the event registry.
///
/// `parse`/`write` take `&mut self` on their owners, so one instance cannot
/// run two operations at once, and event callbacks (`'static`) cannot reach
/// back into the host. Through the public API `set_options` is therefore
/// never called while the working flag is set: the
/// [`IgnoreReason::NotAllowedWhileWorking`] refusal and the
/// `allow_live_options_change` switch only take effect for an owner that
/// mutates options mid-operation.
#[derive(Debug, Default)]
pub struct OptionsHost {
    options: Options,
    allow_live_options_change: bool,
    working: Cell<bool>,
    observers: Observers<Event>,
}

impl OptionsHost {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replaces the options unless the host is working with live changes
    /// disabled, or the new options are unusable. Either outcome is also
    /// reported to subscribers.
    pub fn set_options(&mut self, options: Options) -> Result<(), ChangeIgnored> {
        let reason = if self.working.get() && !self.allow_live_options_change {
            Some(IgnoreReason::NotAllowedWhileWorking)
        } else if !options.is_usable() {
            Some(IgnoreReason::Unusable)
        } else {
            None
        };

        if let Some(reason) = reason {
            tracing::debug!(%reason, "options change ignored");
            self.observers.emit(&Event::OptionsChangeIgnored {
                attempted: options,
                reason,
            });
            return Err(ChangeIgnored { reason });
        }

        if options == self.options {
            return Ok(());
        }
        let old = core::mem::replace(&mut self.options, options);
        self.observers.emit(&Event::OptionsChanged {
            old,
            new: self.options.clone(),
        });
        Ok(())
    }

    pub fn allow_live_options_change(&self) -> bool {
        self.allow_live_options_change
    }

    pub fn set_allow_live_options_change(&mut self, allow: bool) {
        self.allow_live_options_change = allow;
    }

    pub fn is_working(&self) -> bool {
        self.working.get()
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.observers.subscribe(callback)
    }

    pub(crate) fn emit(&self, event: &Event) {
        self.observers.emit(event);
    }

    /// Marks the host as working until the guard drops, including on early
    /// error returns.
    pub(crate) fn begin_work(&self) -> WorkGuard<'_> {
        self.working.set(true);
        WorkGuard {
            flag: &self.working,
        }
    }
}

pub(crate) struct WorkGuard<'a> {
    flag: &'a Cell<bool>,
}

impl Drop for WorkGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

/// Shared surface of everything that owns an [`OptionsHost`].
pub trait Provider {
    fn host(&self) -> &OptionsHost;
    fn host_mut(&mut self) -> &mut OptionsHost;

    fn options(&self) -> &Options {
        self.host().options()
    }

    fn set_options(&mut self, options: Options) -> Result<(), ChangeIgnored> {
        self.host_mut().set_options(options)
    }

    fn is_working(&self) -> bool {
        self.host().is_working()
    }

    fn set_allow_live_options_change(&mut self, allow: bool) {
        self.host_mut().set_allow_live_options_change(allow);
    }

    fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Event) + Send + Sync + 'static,
        Self: Sized,
    {
        self.host().subscribe(callback)
    }
}
