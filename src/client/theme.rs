use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::models::Theme;

pub const THEME_KEY: &str = "theme";

/// Key/value preference storage, the browser's local storage in the site.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }
}

/// Holds the active theme. The store is read once when the provider is
/// built; afterwards the provider is the source of truth and writes through.
pub struct ThemeProvider<S: PreferenceStore> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemeProvider<S> {
    pub fn load(store: S) -> Self {
        let current = Theme::resolve(store.get(THEME_KEY).as_deref());
        Self { store, current }
    }

    pub fn theme(&self) -> Theme {
        self.current
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.current = theme;
        self.store.set(THEME_KEY, theme.as_str());
    }
}
