//! Field controllers.
//!
//! A [`Field`] is the headless half of a floating-label input: it binds
//! the host's text and error slots, owns the field's validators, runs
//! them on blur or when its form asks, and tracks the [`FieldState`] the
//! host renders from.

mod control;
mod state;

use std::sync::atomic::{AtomicUsize, Ordering};

pub use control::{Field, FieldKind};
pub use state::FieldState;

/// Unique identifier for a field instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId(usize);

impl FieldId {
    /// Allocate a fresh ID.
    pub fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for FieldId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__field_{}", self.0)
    }
}
