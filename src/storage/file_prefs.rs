// SPDX-License-Identifier: Apache-2.0

// Prefs is the filesystem-backed preference store. Every key is
// a file directly inside the prefs directory and the file content
// is the value, so there is no cache and nothing to load on start.
// Operations are synchronous and touch exactly one path each.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::Builder;
use tracing::{debug, error, info};

use super::traits::PrefsInterface;
use crate::config::{PrefsConfig, WriteMode};
use crate::errors::PrefsError;
use crate::key::validate_key;

#[derive(Debug, Default, Clone)]
pub struct Prefs {
    dir: PathBuf,
    write_mode: WriteMode,
}

impl Prefs {
    /// Record `dir` as the prefs directory. Nothing is created on disk,
    /// the directory appears on the first `set`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_mode: WriteMode::default(),
        }
    }

    pub fn from_config(config: &PrefsConfig) -> Self {
        Self::new(config.dir.clone()).with_write_mode(config.write_mode)
    }

    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    pub fn init(&mut self, dir: impl Into<PathBuf>) {
        self.dir = dir.into();
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn write_mode(&self) -> WriteMode {
        self.write_mode
    }

    fn file_name_for_key(&self, key: &str) -> Result<PathBuf, PrefsError> {
        validate_key(key)?;
        if self.dir.as_os_str().is_empty() {
            return Err(PrefsError::NotInitialized);
        }
        Ok(self.dir.join(key))
    }

    fn write_value(&self, path: &Path, value: &[u8]) -> io::Result<()> {
        match self.write_mode {
            WriteMode::Direct => {
                let mut file = fs::File::create(path)?;
                file.write_all(value)?;
            }
            WriteMode::Atomic => {
                // tempfile defaults to 0600; match what File::create would leave
                let mut builder = Builder::new();
                #[cfg(unix)]
                {
                    use std::os::unix::fs::PermissionsExt;
                    builder.permissions(fs::Permissions::from_mode(0o666));
                }
                let mut tmp = builder.tempfile_in(&self.dir)?;
                if let Ok(existing) = fs::metadata(path) {
                    tmp.as_file().set_permissions(existing.permissions())?;
                }
                tmp.write_all(value)?;
                tmp.persist(path).map_err(|err| err.error)?;
            }
        }
        Ok(())
    }
}

impl PrefsInterface for Prefs {
    fn get(&self, key: &str) -> Result<Vec<u8>, PrefsError> {
        let path = self.file_name_for_key(key)?;
        match fs::read(&path) {
            Ok(value) => Ok(value),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!("{} not present in {}", key, self.dir.display());
                Err(PrefsError::NotFound(key.to_string()))
            }
            Err(err) => {
                info!("{} unreadable in {}: {}", key, self.dir.display(), err);
                Err(PrefsError::Read {
                    key: key.to_string(),
                    source: err,
                })
            }
        }
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), PrefsError> {
        let path = self.file_name_for_key(key)?;
        fs::create_dir_all(&self.dir).map_err(|err| {
            error!("failed to create {}: {}", self.dir.display(), err);
            PrefsError::Io {
                key: key.to_string(),
                source: err,
            }
        })?;
        self.write_value(&path, value).map_err(|err| {
            error!("failed to write {}: {}", path.display(), err);
            PrefsError::Io {
                key: key.to_string(),
                source: err,
            }
        })?;
        debug!("stored {} bytes for {}", value.len(), key);
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, PrefsError> {
        let path = self.file_name_for_key(key)?;
        Ok(fs::symlink_metadata(path).is_ok())
    }

    fn delete(&mut self, key: &str) -> Result<(), PrefsError> {
        let path = self.file_name_for_key(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("deleted {}", key);
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => {
                error!("failed to delete {}: {}", path.display(), err);
                Err(PrefsError::Io {
                    key: key.to_string(),
                    source: err,
                })
            }
        }
    }
}
