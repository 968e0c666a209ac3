//! Keeps a chart's colors in step with the ambient theme.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::chart::{ChartConfig, ChartStylePatch};
use crate::observable::Subscription;
use crate::theme::color::ColorError;
use crate::theme::{ThemeState, ThemeStore};

/// Owns the shared chart configuration and restyles it on theme changes.
///
/// Each update derives the full [`ChartStylePatch`] before touching the
/// configuration, so a reader never sees the color changed without the
/// stroke, and a malformed theme leaves the previous style in place.
///
/// The configuration is only reachable through [`snapshot`](Self::snapshot)
/// and [`with_config`](Self::with_config). A theme change that arrives while
/// a `with_config` reader is running is queued and applied when the reader
/// returns.
#[derive(Debug, Clone)]
pub struct ChartStyleBinder {
    config: Rc<RefCell<ChartConfig>>,
    pending: Rc<RefCell<Option<ChartStylePatch>>>,
}

impl ChartStyleBinder {
    /// Takes ownership of `config`.
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config: Rc::new(RefCell::new(config)),
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Restyles the chart for `theme`.
    ///
    /// If the configuration is being read, the patch replaces any queued one
    /// and lands once the read finishes.
    ///
    /// # Errors
    ///
    /// Returns a [`ColorError`] if `theme.primary` is not valid HSL; the chart
    /// is left unchanged in that case.
    pub fn on_theme_change(&self, theme: &ThemeState) -> Result<(), ColorError> {
        let patch = ChartStylePatch::from_theme(theme)?;
        match self.config.try_borrow_mut() {
            Ok(mut config) => {
                config.apply_style(&patch);
                debug!(color = %patch.color, tooltip = %patch.tooltip_theme, "chart restyled");
            }
            Err(_) => {
                debug!(color = %patch.color, "chart busy, restyle deferred");
                *self.pending.borrow_mut() = Some(patch);
            }
        }
        Ok(())
    }

    /// Subscribes to `store` so every theme change restyles the chart.
    ///
    /// Failed restyles are logged and skipped.
    #[must_use = "dropping the subscription stops theme tracking"]
    pub fn bind(&self, store: &ThemeStore) -> Subscription {
        let binder = self.clone();
        store.subscribe(move |theme| {
            if let Err(e) = binder.on_theme_change(theme) {
                warn!(error = %e, primary = %theme.primary, "theme restyle aborted");
            }
        })
    }

    /// Runs `f` against the current configuration.
    ///
    /// Theme changes raised from inside `f` are applied after it returns.
    pub fn with_config<R>(&self, f: impl FnOnce(&ChartConfig) -> R) -> R {
        let out = {
            let config = self.config.borrow();
            f(&config)
        };
        self.flush_pending();
        out
    }

    /// Clones the current configuration.
    pub fn snapshot(&self) -> ChartConfig {
        self.with_config(ChartConfig::clone)
    }

    fn flush_pending(&self) {
        let Some(patch) = self.pending.borrow_mut().take() else {
            return;
        };
        // Outer readers still hold the config; the last one to finish applies
        match self.config.try_borrow_mut() {
            Ok(mut config) => {
                config.apply_style(&patch);
                debug!(color = %patch.color, tooltip = %patch.tooltip_theme, "deferred restyle applied");
            }
            Err(_) => *self.pending.borrow_mut() = Some(patch),
        }
    }
}
