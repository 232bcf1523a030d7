// SPDX-License-Identifier: Apache-2.0

pub mod config;
pub mod errors;
pub mod key;
pub mod keys;
pub mod logging;
pub mod storage;

pub use config::{PrefsConfig, WriteMode};
pub use errors::PrefsError;
pub use storage::file_prefs::Prefs;
pub use storage::memory_prefs::MemoryPrefs;
pub use storage::traits::PrefsInterface;
