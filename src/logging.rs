use std::io::Write;

use env_logger::{fmt::Formatter, Builder, Target};
use log::Level;

use crate::config::RunConfig;
use crate::{Error, Result};

pub fn init_logger(config: &RunConfig) -> Result<()> {
    let log_timestamp = config.log_timestamp;

    Builder::new()
        .filter_level(config.log_level)
        .write_style(env_logger::WriteStyle::Never)
        .target(Target::Stderr)
        .format(move |buf: &mut Formatter, record| {
            if log_timestamp {
                write!(buf, "{} ", buf.timestamp_millis())?;
            }
            writeln!(buf, "{} {}", level_tag(record.level()), record.args())
        })
        .try_init()
        .map_err(|e| Error::other(format!("logger init failed: {e}")))
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
