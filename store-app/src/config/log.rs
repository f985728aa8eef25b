use env_logger::{Builder, Env};
use log::SetLoggerError;

/// Used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "warn";

pub fn init() -> Result<(), SetLoggerError> {
    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER)).try_init()
}
