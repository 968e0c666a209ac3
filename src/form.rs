//! Numeric input holder for the salary threshold.

use std::cell::Cell;

use tracing::debug;

use crate::observable::{Subject, Subscription};

/// A bound numeric input: holds the current value and announces changes.
#[derive(Debug, Default)]
pub struct ThresholdField {
    value: Cell<f64>,
    changes: Subject<f64>,
}

impl ThresholdField {
    /// Creates a field holding `initial`.
    pub fn new(initial: f64) -> Self {
        Self {
            value: Cell::new(initial),
            changes: Subject::new(),
        }
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        self.value.get()
    }

    /// Stores `value` and notifies subscribers. Non-finite input is ignored.
    ///
    /// Returns `true` if the value was accepted.
    pub fn set(&self, value: f64) -> bool {
        if !value.is_finite() {
            debug!(value, "ignoring non-finite threshold");
            return false;
        }
        self.value.set(value);
        self.changes.emit(&value);
        true
    }

    /// Parses user text (surrounding whitespace allowed) and stores it.
    ///
    /// Returns `true` if the text was a finite number.
    pub fn set_text(&self, text: &str) -> bool {
        text.trim().parse::<f64>().is_ok_and(|v| self.set(v))
    }

    /// Registers `listener` for value changes.
    #[must_use = "dropping the subscription unregisters the listener immediately"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(&f64) + 'static,
    {
        self.changes.subscribe(listener)
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.changes.listener_count()
    }
}
