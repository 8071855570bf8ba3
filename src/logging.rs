use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::{AppError, AppResult};

/// Installs a file-backed subscriber when `[log].path` is set.
///
/// The terminal is owned by the UI, so nothing is ever written to stdout or
/// stderr. `RUST_LOG` overrides the configured level. Returns whether a
/// subscriber was installed by this call.
pub fn init_logging(config: &LogConfig) -> AppResult<bool> {
    let Some(path) = config.path.as_ref() else {
        return Ok(false);
    };

    let filter = build_filter(&config.level)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| {
            AppError::io_with_context(source, format!("opening log file {}", path.display()))
        })?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();
    Ok(installed)
}

fn build_filter(level: &str) -> AppResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level)
        .map_err(|err| AppError::invalid_argument(format!("invalid log level {level:?}: {err}")))
}

#[cfg(test)]
mod tests {
    use super::{build_filter, init_logging};
    use crate::config::LogConfig;

    #[test]
    fn logging_is_disabled_without_a_path() {
        let installed = init_logging(&LogConfig::default()).expect("no-op init");
        assert!(!installed);
    }

    #[test]
    fn build_filter_accepts_levels_and_directives() {
        assert!(build_filter("debug").is_ok());
        assert!(build_filter("folio=trace,warn").is_ok());
    }
}
