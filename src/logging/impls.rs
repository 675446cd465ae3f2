// Standard library
use std::fs::{File, OpenOptions};
use std::io::{self, Stderr, Write};
use std::path::PathBuf;

// 3rd party crates
use tracing_subscriber::fmt::MakeWriter;

// Current module imports
use super::types::LogSettings;

/// Writer factory duplicating every emission to the console and, when file
/// logging is enabled, to the configured log file. The file is opened fresh
/// in append mode for each emission and never held across events.
pub struct DualWriter {
    file: Option<PathBuf>,
}

impl DualWriter {
    pub fn new(log: &LogSettings) -> Self {
        Self {
            file: log.enabled.then(|| log.file.clone()),
        }
    }
}

impl<'a> MakeWriter<'a> for DualWriter {
    type Writer = LogSink;

    fn make_writer(&'a self) -> Self::Writer {
        // A file that cannot be opened silences only the file copy of this
        // one emission; the console copy still goes out. The logger sits
        // inside the error path and must not escalate its own failures.
        let file: Option<File> = self.file.as_ref().and_then(|path| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .ok()
        });

        LogSink {
            stderr: io::stderr(),
            file,
        }
    }
}

/// Destination(s) of a single emission.
pub struct LogSink {
    stderr: Stderr,
    file: Option<File>,
}

impl Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Some(file) = self.file.as_mut() {
            let _ = file.write_all(buf);
        }
        self.stderr.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(file) = self.file.as_mut() {
            let _ = file.flush();
        }
        self.stderr.flush()
    }
}
