use clap::ValueEnum;
use tracing::level_filters::LevelFilter;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Resolved stderr logging settings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LogSettings {
    pub format: LogFormat,
    pub level: LogLevel,
}

impl LogSettings {
    /// `--quiet` overrides any explicit level.
    pub fn resolve(format: LogFormat, level: LogLevel, quiet: bool) -> Self {
        let level = if quiet { LogLevel::Error } else { level };
        Self { format, level }
    }

    /// Install the stderr subscriber. Stdout stays reserved for command output.
    pub fn init(self) {
        let builder = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(LevelFilter::from(self.level))
            .with_ansi(false)
            .with_target(false);

        match self.format {
            LogFormat::Text => {
                let _ = builder.try_init();
            }
            LogFormat::Json => {
                let _ = builder.json().flatten_event(true).try_init();
            }
        }
    }
}
