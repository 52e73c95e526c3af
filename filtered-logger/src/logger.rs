//! An explicitly owned logger: a formatter, a sink and a level threshold.
//!
//! There is no process-wide registry. Build a [`RedactingLogger`] where the
//! sink is known and pass it to the code that logs.

use std::{
    borrow::Cow,
    io::Write,
    sync::{Mutex, PoisonError},
};

use crate::{
    error::Result,
    format::{Level, LogEvent, RedactingFormatter},
};

/// Name of the logger used for `users` rows.
pub const USER_DATA_LOGGER: &str = "user_data";

/// Writes redacted lines to a sink.
///
/// Lines are written whole and flushed under a lock, so a logger shared
/// between threads never interleaves partial lines.
#[derive(Debug)]
pub struct RedactingLogger<W> {
    name: Cow<'static, str>,
    threshold: Level,
    formatter: RedactingFormatter,
    sink: Mutex<W>,
}

impl<W: Write> RedactingLogger<W> {
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        threshold: Level,
        formatter: RedactingFormatter,
        sink: W,
    ) -> Self {
        Self {
            name: name.into(),
            threshold,
            formatter,
            sink: Mutex::new(sink),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn threshold(&self) -> Level {
        self.threshold
    }

    pub fn formatter(&self) -> &RedactingFormatter {
        &self.formatter
    }

    pub fn enabled(&self, level: Level) -> bool {
        level >= self.threshold
    }

    /// Formats `message` at `level` and writes it as one line.
    ///
    /// Messages below the threshold are dropped without being formatted.
    pub fn log(&self, level: Level, message: &str) -> Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }
        self.write_event(&LogEvent::new(self.name.as_ref(), level, message))
    }

    /// Writes a prepared event, ignoring the threshold.
    pub fn write_event(&self, event: &LogEvent<'_>) -> Result<()> {
        let line = self.formatter.format(event);
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        sink.write_all(line.as_bytes())?;
        sink.write_all(b"\n")?;
        sink.flush()?;
        Ok(())
    }

    pub fn debug(&self, message: &str) -> Result<()> {
        self.log(Level::Debug, message)
    }

    pub fn info(&self, message: &str) -> Result<()> {
        self.log(Level::Info, message)
    }

    pub fn warning(&self, message: &str) -> Result<()> {
        self.log(Level::Warning, message)
    }

    pub fn error(&self, message: &str) -> Result<()> {
        self.log(Level::Error, message)
    }

    pub fn critical(&self, message: &str) -> Result<()> {
        self.log(Level::Critical, message)
    }

    /// Consumes the logger and returns the sink.
    pub fn into_sink(self) -> W {
        self.sink.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

/// The `user_data` logger: `INFO` threshold over the PII fields.
pub fn user_data_logger<W: Write>(sink: W) -> Result<RedactingLogger<W>> {
    Ok(RedactingLogger::new(
        USER_DATA_LOGGER,
        Level::Info,
        RedactingFormatter::pii()?,
        sink,
    ))
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    fn lines(logger: RedactingLogger<Vec<u8>>) -> Vec<String> {
        String::from_utf8(logger.into_sink())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn user_data_logger_redacts_pii() {
        let logger = user_data_logger(Vec::new()).unwrap();
        logger.info("name=Bob; email=bob@dylan.com; ip=60ed:c396::1;").unwrap();

        let lines = lines(logger);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("[APP] user_data INFO "));
        assert!(lines[0].ends_with(": name=***; email=***; ip=60ed:c396::1;"));
    }

    #[test]
    fn drops_messages_below_threshold() {
        let logger = user_data_logger(Vec::new()).unwrap();
        logger.debug("ssn=1;").unwrap();
        logger.warning("ssn=2;").unwrap();

        let lines = lines(logger);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("WARNING"));
        assert!(lines[0].ends_with("ssn=***;"));
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn sink_errors_propagate() {
        let logger = user_data_logger(BrokenSink).unwrap();
        let err = logger.error("password=x;").unwrap_err();
        assert!(matches!(err, crate::Error::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn logger_can_be_shared_between_threads() {
        let logger = user_data_logger(Vec::new()).unwrap();
        std::thread::scope(|scope| {
            for i in 0..4 {
                let logger = &logger;
                scope.spawn(move || logger.critical(&format!("phone={i};")).unwrap());
            }
        });

        let lines = lines(logger);
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|line| line.ends_with(": phone=***;")));
    }
}
