use std::path::{Path, PathBuf};
use std::sync::Once;
use std::{env, fs};

use dirs::home_dir;

use crate::errors::TallyError;

const DEFAULT_DIR_NAME: &str = ".tally_core";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
///
/// Logs go to stderr so machine-readable stdout (the `--json` mode) stays
/// clean.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("tally_core=info".parse().unwrap());

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}

/// Returns the application-specific data directory, defaulting to `~/.tally_core`.
///
/// `TALLY_CORE_HOME` overrides the location outright, which keeps tests and
/// sandboxed runs away from the real home directory.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("TALLY_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Creates `dir` and any missing parents.
pub fn ensure_dir(dir: &Path) -> Result<(), TallyError> {
    fs::create_dir_all(dir)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_dir_is_idempotent() {
        let base = tempfile::tempdir().expect("tempdir");
        let nested = base.path().join("a").join("b");
        ensure_dir(&nested).expect("first create");
        ensure_dir(&nested).expect("second create");
        assert!(nested.is_dir());
    }
}
