// SPDX-License-Identifier: Apache-2.0

pub mod file_prefs;
pub mod memory_prefs;
pub mod traits;
