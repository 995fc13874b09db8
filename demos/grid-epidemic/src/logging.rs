//! Console logging via `log4rs`.

use anyhow::{Context, Result, anyhow};
use log::LevelFilter;
use log4rs::Config;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;

// ISO 8601 local timestamp with its UTC offset, and colour-coded level tag.
pub(crate) const LOG_PATTERN: &str = "{d(%Y-%m-%dT%H:%M:%S%:z)} {h({l})} {t} - {m}{n}";

/// Install a stderr console logger at `level`.
///
/// Logs go to stderr so stdout stays free for piping.
pub fn init(level: LevelFilter) -> Result<()> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| anyhow!("building log configuration: {e}"))?;

    log4rs::init_config(config).context("installing logger")?;
    Ok(())
}
