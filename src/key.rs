// SPDX-License-Identifier: Apache-2.0

// Keys double as file names inside the prefs directory, so they
// are restricted to [A-Za-z0-9_-]+. That rules out path separators,
// "." and ".." and keeps every entry a direct child of the root.

use crate::errors::PrefsError;

pub fn is_key_correct(key: &str) -> bool {
    !key.is_empty()
        && key
            .bytes()
            .all(|c| c.is_ascii_alphanumeric() || c == b'_' || c == b'-')
}

pub fn validate_key(key: &str) -> Result<(), PrefsError> {
    if is_key_correct(key) {
        Ok(())
    } else {
        Err(PrefsError::InvalidKey(key.to_string()))
    }
}
