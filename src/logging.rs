use std::io::Write;

use colored::Colorize;
use env_logger::Builder;
use indicatif::MultiProgress;
use log::{Level, LevelFilter, Log, Metadata, Record};

pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error, // default: only errors
        1 => LevelFilter::Info,  // -v: info and up
        2 => LevelFilter::Debug, // -vv: debug and up
        _ => LevelFilter::Trace, // -vvv: trace and up
    }
}

fn level_label(level: Level) -> colored::ColoredString {
    match level {
        Level::Error => "ERROR".red().bold(),
        Level::Warn => "WARN ".yellow().bold(),
        Level::Info => "INFO ".white().bold(),
        Level::Debug => "DEBUG".bright_black(),
        Level::Trace => "TRACE".bright_black(),
    }
}

/// Hides any live progress bars while a record is written, so `-v` output
/// does not tear the request spinner.
struct SpinnerAwareLogger {
    inner: env_logger::Logger,
    progress: MultiProgress,
}

impl Log for SpinnerAwareLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.inner.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if self.inner.matches(record) {
            self.progress.suspend(|| self.inner.log(record));
        }
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

fn build_logger(verbosity: u8, progress: MultiProgress) -> SpinnerAwareLogger {
    let mut builder = Builder::new();
    builder.filter_level(level_for(verbosity));
    builder.target(env_logger::Target::Stderr);
    builder.format(|buf, record| writeln!(buf, "{} {}", level_label(record.level()), record.args()));

    SpinnerAwareLogger {
        inner: builder.build(),
        progress,
    }
}

/// Install the logger and return the progress container spinners must join.
pub fn init_logger(verbosity: u8) -> MultiProgress {
    let progress = MultiProgress::new();
    let logger = build_logger(verbosity, progress.clone());
    let max_level = logger.inner.filter();

    // Tests or embedding hosts may have installed a logger already.
    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(max_level);
    }

    progress
}
