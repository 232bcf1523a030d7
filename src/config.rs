// SPDX-License-Identifier: Apache-2.0

use std::env;
use std::path::PathBuf;

pub const DIR_ENV: &str = "UPDATE_PREFS_DIR";
pub const ATOMIC_ENV: &str = "UPDATE_PREFS_ATOMIC";

const FALLBACK_DIR: &str = "/var/lib/update_engine/prefs";

/// How `set` replaces the content of a preference file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Truncate and write the file in place with a single write call.
    /// A crash mid-write can leave a truncated value behind.
    #[default]
    Direct,
    /// Write into a temporary file next to the target and rename it
    /// over the target, readers see either the old or the new value.
    Atomic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefsConfig {
    pub dir: PathBuf,
    pub write_mode: WriteMode,
}

impl PrefsConfig {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_mode: WriteMode::default(),
        }
    }

    /// Build config from `UPDATE_PREFS_DIR` and `UPDATE_PREFS_ATOMIC`,
    /// falling back to the platform data directory.
    pub fn from_env() -> Self {
        Self::from_vars(env::var(DIR_ENV).ok(), env::var(ATOMIC_ENV).ok())
    }

    fn from_vars(dir: Option<String>, atomic: Option<String>) -> Self {
        let dir = match dir {
            Some(val) if !val.is_empty() => PathBuf::from(val),
            _ => Self::default_dir(),
        };
        let write_mode = match atomic.as_deref() {
            Some("1") | Some("true") | Some("yes") => WriteMode::Atomic,
            _ => WriteMode::Direct,
        };
        Self { dir, write_mode }
    }

    pub fn default_dir() -> PathBuf {
        match dirs_next::data_local_dir() {
            Some(base) => base.join("update_engine").join("prefs"),
            None => PathBuf::from(FALLBACK_DIR),
        }
    }
}

impl Default for PrefsConfig {
    fn default() -> Self {
        Self::new(Self::default_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dir() {
        let cfg = PrefsConfig::from_vars(Some("/tmp/prefs".to_string()), None);
        assert_eq!(cfg.dir, PathBuf::from("/tmp/prefs"));
        assert_eq!(cfg.write_mode, WriteMode::Direct);
    }

    #[test]
    fn test_default_dir() {
        let cfg = PrefsConfig::from_vars(None, None);
        assert_eq!(cfg.dir, PrefsConfig::default_dir());
        assert!(cfg.dir.ends_with("update_engine/prefs"));

        let cfg = PrefsConfig::from_vars(Some(String::new()), None);
        assert_eq!(cfg.dir, PrefsConfig::default_dir());
    }

    #[test]
    fn test_atomic_flag() {
        for val in ["1", "true", "yes"] {
            let cfg = PrefsConfig::from_vars(None, Some(val.to_string()));
            assert_eq!(cfg.write_mode, WriteMode::Atomic);
        }
        for val in ["0", "false", ""] {
            let cfg = PrefsConfig::from_vars(None, Some(val.to_string()));
            assert_eq!(cfg.write_mode, WriteMode::Direct);
        }
    }
}
