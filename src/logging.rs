// SPDX-License-Identifier: Apache-2.0

// Log setup for processes embedding the prefs store. The store itself
// only emits tracing events, hosts decide where they go.

use std::path::Path;

use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_FILE_NAME: &str = "update-prefs.log";

/// Filter from `RUST_LOG`, or `default` when unset or unparsable.
pub fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install a global subscriber. With `log_dir` set, events go to
/// `log_dir/update-prefs.log` through a background writer and the
/// returned guard must be kept alive to flush it; otherwise they go
/// to stderr. A second call keeps the subscriber already installed.
pub fn init(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let registry = tracing_subscriber::registry().with(env_filter("info"));
    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            if let Err(err) = registry
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .try_init()
            {
                debug!("keeping existing subscriber: {}", err);
            }
            Some(guard)
        }
        None => {
            if let Err(err) = registry
                .with(fmt::layer().with_writer(std::io::stderr))
                .try_init()
            {
                debug!("keeping existing subscriber: {}", err);
            }
            None
        }
    }
}
