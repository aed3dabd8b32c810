//! PreferenceStore - Local Preference Storage
//!
//! The site persists exactly one value: the visitor's language. Browsers
//! keep it in `localStorage` (see the `web` feature); tests use
//! [`MemoryStore`].

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::Result;

/// String key-value storage
pub trait PreferenceStore {
    /// Read a stored value; `Ok(None)` when the key was never written
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    /// Peek at a value without going through the trait
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for std::rc::Rc<T> {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }
}
