//! In-memory character state with dot-path access and change notification.
//!
//! The store is the only owner of the session's [`CharacterAttributes`].
//! Typed code writes through [`CharacterStore::update`]; generic picker
//! panels bind to dot-separated paths such as `"hair.color"` through
//! [`CharacterStore::get`] and [`CharacterStore::set`]. Path writes go through
//! a JSON round trip, so every write is checked against the attribute schema
//! before it lands.

use std::fmt;

use serde_json::Value;

use crate::attributes::CharacterAttributes;
use crate::error::StoreError;

/// Callback invoked after every successful write.
pub type Listener = Box<dyn FnMut(&CharacterAttributes)>;

pub struct CharacterStore {
    attributes: CharacterAttributes,
    version: u64,
    listeners: Vec<Listener>,
}

impl Default for CharacterStore {
    fn default() -> Self {
        Self::new(CharacterAttributes::default())
    }
}

impl fmt::Debug for CharacterStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharacterStore")
            .field("attributes", &self.attributes)
            .field("version", &self.version)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl CharacterStore {
    pub fn new(mut attributes: CharacterAttributes) -> Self {
        attributes.normalize();
        Self {
            attributes,
            version: 0,
            listeners: Vec::new(),
        }
    }

    /// Current attribute snapshot.
    pub fn attributes(&self) -> &CharacterAttributes {
        &self.attributes
    }

    /// Number of successful writes so far.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Registers a change hook. Hooks run synchronously, in registration order.
    pub fn subscribe(&mut self, listener: impl FnMut(&CharacterAttributes) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Reads the value at a dot-separated path. The empty path is the whole
    /// record.
    pub fn get(&self, path: &str) -> Result<Value, StoreError> {
        let tree =
            serde_json::to_value(&self.attributes).map_err(|source| StoreError::InvalidValue {
                path: path.to_string(),
                source,
            })?;
        tree.pointer(&pointer(path))
            .cloned()
            .ok_or_else(|| StoreError::UnknownPath(path.to_string()))
    }

    /// Writes `value` at a dot-separated path, then notifies listeners.
    ///
    /// Rejected writes leave the attributes and version untouched.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> Result<(), StoreError> {
        let value = value.into();
        let result = self.write(path, value);
        match &result {
            Ok(()) => log::debug!("store: set {path} (version {})", self.version),
            Err(err) => log::warn!("store: rejected write: {err}"),
        }
        result
    }

    fn write(&mut self, path: &str, value: Value) -> Result<(), StoreError> {
        let invalid = |source: serde_json::Error| StoreError::InvalidValue {
            path: path.to_string(),
            source,
        };

        let mut tree = serde_json::to_value(&self.attributes).map_err(invalid)?;
        let slot = tree
            .pointer_mut(&pointer(path))
            .ok_or_else(|| StoreError::UnknownPath(path.to_string()))?;
        *slot = value;

        let mut next: CharacterAttributes = serde_json::from_value(tree).map_err(invalid)?;
        next.normalize();
        self.commit(next);
        Ok(())
    }

    /// Typed write path with the same notification as [`set`](Self::set).
    pub fn update(&mut self, edit: impl FnOnce(&mut CharacterAttributes)) {
        let mut next = self.attributes.clone();
        edit(&mut next);
        next.normalize();
        self.commit(next);
    }

    /// Replaces the whole record from JSON, e.g. a saved look.
    pub fn load_json(&mut self, json: &str) -> Result<(), StoreError> {
        let next = CharacterAttributes::from_json(json).map_err(|source| StoreError::InvalidValue {
            path: String::new(),
            source,
        })?;
        self.commit(next);
        Ok(())
    }

    fn commit(&mut self, attributes: CharacterAttributes) {
        self.attributes = attributes;
        self.version += 1;
        for listener in &mut self.listeners {
            listener(&self.attributes);
        }
    }
}

/// `"hair.color"` -> `"/hair/color"`.
fn pointer(path: &str) -> String {
    let path = path.trim();
    if path.is_empty() {
        return String::new();
    }
    path.split('.')
        .map(|key| key.replace('~', "~0").replace('/', "~1"))
        .fold(String::new(), |mut acc, key| {
            acc.push('/');
            acc.push_str(&key);
            acc
        })
}
