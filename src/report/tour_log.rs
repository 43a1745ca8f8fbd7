//! Sinks that persist or echo every evaluated tour.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{error, warn};

use super::format::{console_line, tour_log_line};
use crate::search::{TourRecord, TourSink};
use crate::{Error, Result};

/// Appends one `caminhos.txt` line per tour.
///
/// Write failures are reported once, after which the log stops writing
/// and the search carries on. [`FileTourLog::finish`] returns the failure.
pub struct FileTourLog {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
    queued: usize,
    failure: Option<io::Error>,
}

impl FileTourLog {
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| Error::file(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: Some(BufWriter::new(file)),
            queued: 0,
            failure: None,
        })
    }

    /// Opens the log, or reports the failure and returns a log that
    /// drops every record.
    pub fn create_or_report(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::create(path).unwrap_or_else(|e| {
            error!("failed to create tour log: {e}");
            Self {
                path: path.to_path_buf(),
                writer: None,
                queued: 0,
                failure: None,
            }
        })
    }

    pub fn is_active(&self) -> bool {
        self.writer.is_some()
    }

    /// Lines accepted into the write buffer. Only a successful
    /// [`finish`](Self::finish) confirms they reached the file.
    pub fn queued(&self) -> usize {
        self.queued
    }

    /// Flushes buffered lines and returns how many were written, or the
    /// error that stopped the log earlier.
    pub fn finish(mut self) -> Result<usize> {
        if let Some(e) = self.failure.take() {
            return Err(Error::file(&self.path, e));
        }
        if let Some(writer) = self.writer.as_mut() {
            writer.flush().map_err(|e| Error::file(&self.path, e))?;
        }
        Ok(self.queued)
    }
}

impl TourSink for FileTourLog {
    fn on_tour_evaluated(&mut self, record: &TourRecord) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };
        match writeln!(writer, "{}", tour_log_line(record)) {
            Ok(()) => self.queued += 1,
            Err(e) => {
                error!(
                    "failed to write tour log {}: {e}; remaining tours are not logged",
                    self.path.display()
                );
                self.writer = None;
                self.failure = Some(e);
            }
        }
    }
}

/// Echoes every tour to a console writer.
pub struct ConsoleEcho<W: Write> {
    out: W,
    failed: bool,
}

impl<W: Write> ConsoleEcho<W> {
    pub fn new(out: W) -> Self {
        Self { out, failed: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TourSink for ConsoleEcho<W> {
    fn on_tour_evaluated(&mut self, record: &TourRecord) {
        if self.failed {
            return;
        }
        if let Err(e) = writeln!(self.out, "{}", console_line(record)) {
            warn!("console echo stopped: {e}");
            self.failed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io;
    use std::time::Duration;

    fn record(tour: Vec<usize>, distance: f64) -> TourRecord {
        TourRecord {
            tour,
            distance,
            elapsed: Duration::ZERO,
        }
    }

    #[test]
    fn test_file_log_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("caminhos.txt");

        let mut log = FileTourLog::create(&path).unwrap();
        log.on_tour_evaluated(&record(vec![0, 1, 2], 12.0));
        log.on_tour_evaluated(&record(vec![0, 2, 1], 12.346));
        assert_eq!(log.finish().unwrap(), 2);

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "1 -> 2 -> 3 -> 1, 12.00, 0.000000\n1 -> 3 -> 2 -> 1, 12.35, 0.000000\n"
        );
    }

    #[test]
    fn test_create_or_report_in_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("caminhos.txt");

        let mut log = FileTourLog::create_or_report(&path);
        assert!(!log.is_active());
        log.on_tour_evaluated(&record(vec![0], 0.0));
        assert_eq!(log.queued(), 0);
        assert_eq!(log.finish().unwrap(), 0);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_file_log_stops_on_write_failure() {
        let mut log = FileTourLog::create("/dev/full").unwrap();
        let tour: Vec<usize> = (0..8).collect();

        // Enough lines to overflow the write buffer several times.
        for _ in 0..5000 {
            log.on_tour_evaluated(&record(tour.clone(), 123.45));
        }
        assert!(!log.is_active());
        let queued = log.queued();
        assert!(queued < 5000);

        log.on_tour_evaluated(&record(tour, 1.0));
        assert_eq!(log.queued(), queued);

        assert!(matches!(log.finish(), Err(Error::File { .. })));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_console_echo() {
        let mut echo = ConsoleEcho::new(Vec::new());
        echo.on_tour_evaluated(&record(vec![1, 0], 10.0));
        let text = String::from_utf8(echo.into_inner()).unwrap();
        assert_eq!(
            text,
            "Tour tested: 2 -> 1 -> 2 | Distance: 10.00 Km | Time: 0.000000 s\n"
        );
    }

    #[test]
    fn test_console_echo_survives_write_failure() {
        let mut echo = ConsoleEcho::new(BrokenPipe);
        echo.on_tour_evaluated(&record(vec![0], 0.0));
        echo.on_tour_evaluated(&record(vec![0], 0.0));
        assert!(echo.failed);
    }
}
