//! The form-wide "validation invoked" signal.
//!
//! A trigger raises the signal and arms a deferred reset on the current
//! tokio runtime. A newer trigger aborts the pending reset and arms its
//! own, so the signal stays raised until one reset delay after the latest
//! trigger. Fields watch the signal through an [`InvocationWatcher`].

use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use log::{trace, warn};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Value carried by the invoked signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Invocation {
    /// Whether a trigger is in flight.
    pub active: bool,
    /// Number of triggers so far. Bumped by every trigger, so a watcher
    /// that missed the raised window still sees that one happened.
    pub generation: u64,
}

/// Sender side of the invoked signal, owned by a form.
#[derive(Debug)]
pub(crate) struct InvokedSignal {
    tx: watch::Sender<Invocation>,
    pending_reset: Mutex<Option<JoinHandle<()>>>,
    delay: Duration,
}

impl InvokedSignal {
    pub(crate) fn new(delay: Duration) -> Arc<Self> {
        let (tx, _) = watch::channel(Invocation::default());
        Arc::new(Self {
            tx,
            pending_reset: Mutex::new(None),
            delay,
        })
    }

    pub(crate) fn current(&self) -> Invocation {
        *self.tx.borrow()
    }

    pub(crate) fn subscribe(&self) -> InvocationWatcher {
        let rx = self.tx.subscribe();
        let seen = rx.borrow().generation;
        InvocationWatcher { rx, seen }
    }

    /// Raise the signal and re-arm the deferred reset.
    pub(crate) fn pulse(self: &Arc<Self>) -> u64 {
        let mut generation = 0;
        self.tx.send_modify(|inv| {
            inv.active = true;
            inv.generation += 1;
            generation = inv.generation;
        });
        trace!("Invoked signal raised (generation {})", generation);

        let Ok(mut pending) = self.pending_reset.lock() else {
            return generation;
        };
        if let Some(previous) = pending.take() {
            previous.abort();
        }

        match Handle::try_current() {
            Ok(handle) => {
                let signal = Arc::downgrade(self);
                let delay = self.delay;
                *pending = Some(handle.spawn(reset_after(signal, delay, generation)));
            }
            Err(_) => {
                warn!("No tokio runtime to schedule the invoked signal reset; resetting now");
                self.reset(generation);
            }
        }
        generation
    }

    /// Lower the signal unless a newer trigger has raised it since.
    fn reset(&self, generation: u64) {
        let lowered = self.tx.send_if_modified(|inv| {
            if inv.active && inv.generation == generation {
                inv.active = false;
                true
            } else {
                false
            }
        });
        if lowered {
            trace!("Invoked signal reset (generation {})", generation);
        }
    }
}

impl Drop for InvokedSignal {
    fn drop(&mut self) {
        if let Ok(mut pending) = self.pending_reset.lock()
            && let Some(task) = pending.take()
        {
            task.abort();
        }
    }
}

async fn reset_after(signal: Weak<InvokedSignal>, delay: Duration, generation: u64) {
    tokio::time::sleep(delay).await;
    if let Some(signal) = signal.upgrade() {
        signal.reset(generation);
    }
}

/// Receiver side of the invoked signal, held by a field.
///
/// Only triggers that happen after the watcher was created are reported.
#[derive(Debug, Clone)]
pub struct InvocationWatcher {
    rx: watch::Receiver<Invocation>,
    seen: u64,
}

impl InvocationWatcher {
    /// Current signal value.
    pub fn current(&self) -> Invocation {
        *self.rx.borrow()
    }

    /// Return the latest invocation if a trigger happened since the last
    /// call. Never blocks.
    pub fn poll(&mut self) -> Option<Invocation> {
        let inv = *self.rx.borrow_and_update();
        if inv.generation > self.seen {
            self.seen = inv.generation;
            Some(inv)
        } else {
            None
        }
    }

    /// Wait for the next trigger.
    ///
    /// Returns `None` once the form is gone.
    pub async fn next(&mut self) -> Option<Invocation> {
        loop {
            if let Some(inv) = self.poll() {
                return Some(inv);
            }
            if self.rx.changed().await.is_err() {
                return self.poll();
            }
        }
    }
}
