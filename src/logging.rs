use std::io::{self, Write};

use clap::ValueEnum;
use env_logger::{fmt::Formatter, Builder, Target};
use log::{Level, LevelFilter};

use crate::{Error, Result};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum LogLevel {
    Error,
    #[value(alias = "warning")]
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    pub fn to_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
            Self::Off => LevelFilter::Off,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
}

/// Installs the global logger writing to stderr.
///
/// Fails if a logger is already installed.
pub fn init_logger(level: LogLevel, format: LogFormat) -> Result<()> {
    let mut builder = Builder::new();
    builder
        .filter_level(level.to_filter())
        .write_style(env_logger::WriteStyle::Never)
        .target(Target::Stderr)
        .format(move |buf: &mut Formatter, record| match format {
            LogFormat::Compact => {
                writeln!(buf, "{} {}", level_tag(record.level()), record.args())
            }
            LogFormat::Pretty => {
                writeln!(
                    buf,
                    "{} {} [{}] {}",
                    buf.timestamp_millis(),
                    level_tag(record.level()),
                    record.target(),
                    record.args()
                )
            }
        });

    builder
        .try_init()
        .map_err(|e| Error::Io(io::Error::other(e)))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filters() {
        assert_eq!(LogLevel::Debug.to_filter(), LevelFilter::Debug);
        assert_eq!(LogLevel::Off.to_filter(), LevelFilter::Off);
        assert_eq!(LogLevel::default(), LogLevel::Warn);
    }

    #[test]
    fn test_level_parses_alias() {
        assert_eq!(LogLevel::from_str("warning", true), Ok(LogLevel::Warn));
        assert_eq!(LogLevel::from_str("TRACE", true), Ok(LogLevel::Trace));
    }

    #[test]
    fn test_second_init_fails() {
        let _ = init_logger(LogLevel::Off, LogFormat::Compact);
        assert!(init_logger(LogLevel::Off, LogFormat::Compact).is_err());
    }
}
