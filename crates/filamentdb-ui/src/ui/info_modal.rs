//! Property info dialog state
//!
//! At most one dialog is open. Opening another replaces it, and an
//! identifier without an info entry never opens one.

use filamentdb_core::property_info::{self, PropertyInfo};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InfoModalState {
    active: Option<&'static PropertyInfo>,
}

impl InfoModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the dialog for `key`. Returns false, leaving the state as it was,
    /// when the key has no info entry.
    pub fn open(&mut self, key: &str) -> bool {
        match property_info::lookup(key) {
            Some(info) => {
                self.active = Some(info);
                tracing::debug!(key, "Info dialog opened");
                true
            }
            None => {
                tracing::warn!(key, "No property info; dialog not opened");
                false
            }
        }
    }

    /// Label click: closes the dialog if it already shows `key`, else opens it.
    /// A key without an entry leaves any open dialog as it is.
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.active_key() == Some(key) {
            self.close();
            false
        } else {
            self.open(key)
        }
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_key(&self) -> Option<&'static str> {
        self.active.map(|info| info.key)
    }

    pub fn content(&self) -> Option<&'static PropertyInfo> {
        self.active
    }
}
