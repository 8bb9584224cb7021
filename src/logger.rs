use std::io::{self, Write};

use log::{Level, LevelFilter, Log, Metadata, Record};

static LOGGER: Logger = Logger;

pub(crate) struct Logger;

pub(crate) fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

fn marker(level: Level) -> char {
    match level {
        Level::Info => '*',
        Level::Warn => 'W',
        Level::Error => 'E',
        Level::Debug => 'D',
        Level::Trace => 'T',
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // Raw mode leaves output processing on, so a bare newline is enough
            let _ = writeln!(
                io::stderr().lock(),
                "[{}] {}",
                marker(record.level()),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}
