use std::sync::Once;

use log::LevelFilter;

use super::LogLevel;

static INIT_LOG: Once = Once::new();

/// Targets that log on every foreign call, held back unless tracing.
const CHATTY_TARGETS: [&str; 2] = ["uniffi", "app_core::ffi"];

fn chatty_level(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::Trace,
        level => LevelFilter::from(level).min(LevelFilter::Warn),
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

/// Installs the platform logger. Only the first call has any effect,
/// use [set_log_level] to change the level afterwards.
pub fn init_log(level: LogLevel) {
    INIT_LOG.call_once(|| {
        platform::init_log(level);
    });
}

pub fn set_log_level(level: LogLevel) {
    log::set_max_level(level.into())
}

#[cfg(all(target_os = "android", not(test)))]
mod platform {
    use std::fmt::Write;

    use super::*;

    pub fn init_log(level: LogLevel) {
        let mut filter = android_logger::FilterBuilder::new();
        filter.filter_level(level.into());
        for target in CHATTY_TARGETS {
            filter.filter_module(target, chatty_level(level));
        }

        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(level.into())
                .with_filter(filter.build())
                .with_tag("AppCore")
                .format(|f, record| {
                    if record.level() == log::Level::Error {
                        writeln!(
                            f,
                            "[{}] {} {}:{} - {}",
                            record.level(),
                            record.target(),
                            record.file().unwrap_or("unknown"),
                            record
                                .line()
                                .map(|line| line.to_string())
                                .as_deref()
                                .unwrap_or("unknown"),
                            record.args()
                        )
                    } else {
                        writeln!(
                            f,
                            "[{}] {} - {}",
                            record.level(),
                            record.target(),
                            record.args()
                        )
                    }
                }),
        );
    }
}

#[cfg(all(target_vendor = "apple", not(test)))]
mod platform {
    use super::*;

    pub fn init_log(level: LogLevel) {
        let logger = CHATTY_TARGETS
            .into_iter()
            .fold(
                oslog::OsLogger::new("com.app.core.lib").level_filter(level.into()),
                |logger, target| logger.category_level_filter(target, chatty_level(level)),
            );
        if let Err(e) = logger.init() {
            eprintln!("{e}");
        }
    }
}

#[cfg(any(test, not(any(target_os = "android", target_vendor = "apple"))))]
mod platform {
    use std::io::Write;

    use env_logger::{Builder, Env};

    use super::*;

    pub fn init_log(level: LogLevel) {
        let env = Env::default();
        let mut builder = Builder::from_env(env);
        for target in CHATTY_TARGETS {
            builder.filter(Some(target), chatty_level(level));
        }
        let _ = builder
            .is_test(cfg!(test))
            .format(|formatter, record| {
                if record.level() == log::Level::Error {
                    writeln!(
                        formatter,
                        "[{}] {} {}:{} - {}",
                        record.level(),
                        record.target(),
                        record.file().unwrap_or("unknown"),
                        record
                            .line()
                            .map(|line| line.to_string())
                            .as_deref()
                            .unwrap_or("unknown"),
                        record.args()
                    )
                } else {
                    writeln!(
                        formatter,
                        "[{}] {} - {}",
                        record.level(),
                        record.target(),
                        record.args()
                    )
                }
            })
            .filter(None, level.into())
            .try_init();
    }
}
