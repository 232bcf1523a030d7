// SPDX-License-Identifier: Apache-2.0

use super::traits::PrefsInterface;
use crate::errors::PrefsError;
use crate::key::validate_key;
use std::collections::HashMap;

/// In-memory stand-in for `Prefs`, for hosts that want to exercise
/// their update logic without a prefs directory. Keys are validated
/// the same way, so a key accepted here is accepted on disk.
#[derive(Debug, Default, Clone)]
pub struct MemoryPrefs {
    storage: HashMap<String, Vec<u8>>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> Vec<String> {
        self.storage.keys().cloned().collect()
    }
}

impl PrefsInterface for MemoryPrefs {
    fn get(&self, key: &str) -> Result<Vec<u8>, PrefsError> {
        validate_key(key)?;
        match self.storage.get(key) {
            Some(data) => Ok(data.clone()),
            None => Err(PrefsError::NotFound(key.to_string())),
        }
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), PrefsError> {
        validate_key(key)?;
        self.storage.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, PrefsError> {
        validate_key(key)?;
        Ok(self.storage.contains_key(key))
    }

    fn delete(&mut self, key: &str) -> Result<(), PrefsError> {
        validate_key(key)?;
        self.storage.remove(key);
        Ok(())
    }
}
