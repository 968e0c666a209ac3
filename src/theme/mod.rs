//! Ambient theme state shared by every card on a dashboard.

/// HSL string parsing and hex conversion.
pub mod color;

use std::cell::RefCell;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::observable::{Subject, Subscription};

/// Light or dark color scheme. Serialized as `"light"` / `"dark"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light background, dark text.
    #[default]
    Light,
    /// Dark background, light text.
    Dark,
}

impl ThemeMode {
    /// The lowercase mode name used by chart tooltips.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme mode \"{other}\", expected light or dark")),
        }
    }
}

/// Snapshot of the ambient theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeState {
    /// Color scheme.
    pub mode: ThemeMode,
    /// Primary color as an HSL string, e.g. `"210 40% 98%"`.
    pub primary: String,
}

impl ThemeState {
    /// Primary color of the built-in light theme.
    pub const LIGHT_PRIMARY: &'static str = "210 40% 98%";
    /// Primary color of the built-in dark theme.
    pub const DARK_PRIMARY: &'static str = "217 33% 17%";

    /// Creates a theme state from its parts.
    pub fn new(mode: ThemeMode, primary: impl Into<String>) -> Self {
        Self {
            mode,
            primary: primary.into(),
        }
    }

    /// Built-in light theme.
    pub fn light() -> Self {
        Self::new(ThemeMode::Light, Self::LIGHT_PRIMARY)
    }

    /// Built-in dark theme.
    pub fn dark() -> Self {
        Self::new(ThemeMode::Dark, Self::DARK_PRIMARY)
    }

    /// Built-in theme for `mode`.
    pub fn preset(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::light()
    }
}

/// Observable holder of the current [`ThemeState`].
///
/// Components receive a reference at construction and subscribe to it,
/// instead of reading a process-wide global.
#[derive(Debug, Default)]
pub struct ThemeStore {
    current: RefCell<ThemeState>,
    changes: Subject<ThemeState>,
}

impl ThemeStore {
    /// Creates a store holding `initial`.
    pub fn new(initial: ThemeState) -> Self {
        Self {
            current: RefCell::new(initial),
            changes: Subject::new(),
        }
    }

    /// Returns a copy of the current theme.
    pub fn get(&self) -> ThemeState {
        self.current.borrow().clone()
    }

    /// Replaces the theme and notifies subscribers synchronously.
    pub fn set(&self, theme: ThemeState) {
        debug!(mode = %theme.mode, primary = %theme.primary, "theme changed");
        *self.current.borrow_mut() = theme.clone();
        self.changes.emit(&theme);
    }

    /// Switches the mode, keeping the current primary color.
    pub fn set_mode(&self, mode: ThemeMode) {
        let primary = self.current.borrow().primary.clone();
        self.set(ThemeState::new(mode, primary));
    }

    /// Registers `listener` for future theme changes.
    ///
    /// The listener is not called with the current value; read it with
    /// [`ThemeStore::get`] if needed.
    #[must_use = "dropping the subscription unregisters the listener immediately"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(&ThemeState) + 'static,
    {
        self.changes.subscribe(listener)
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.changes.listener_count()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    #[test]
    fn mode_parses_and_displays() {
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(ThemeMode::Light.to_string(), "light");
        assert!("sepia".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn presets_use_known_primaries() {
        assert_eq!(ThemeState::light().primary, "210 40% 98%");
        assert_eq!(ThemeState::preset(ThemeMode::Dark), ThemeState::dark());
    }

    #[test]
    fn set_notifies_and_updates_current() {
        let store = ThemeStore::new(ThemeState::light());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        let _sub = store.subscribe(move |t| s.borrow_mut().push(t.mode));

        store.set(ThemeState::dark());
        assert_eq!(store.get(), ThemeState::dark());
        assert_eq!(*seen.borrow(), vec![ThemeMode::Dark]);
    }

    #[test]
    fn set_mode_keeps_primary() {
        let store = ThemeStore::new(ThemeState::new(ThemeMode::Light, "10 20% 30%"));
        store.set_mode(ThemeMode::Dark);
        assert_eq!(store.get(), ThemeState::new(ThemeMode::Dark, "10 20% 30%"));
    }

    #[test]
    fn listener_may_read_store_during_notification() {
        let store = Rc::new(ThemeStore::default());
        let observed = Rc::new(RefCell::new(None));
        let (st, obs) = (Rc::clone(&store), Rc::clone(&observed));
        let _sub = store.subscribe(move |_| *obs.borrow_mut() = Some(st.get()));

        store.set(ThemeState::dark());
        assert_eq!(*observed.borrow(), Some(ThemeState::dark()));
    }
}
