use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::error::{Error, Result};

/// Map the number of `-v` flags to a log level
pub fn level_from_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialize the logging system. Logs go to stderr so stdout only
/// carries rendered screens.
pub fn init_logging(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Config(format!("Setting default subscriber failed: {}", e)))
}
