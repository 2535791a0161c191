//! Per-session guess log.
//!
//! Each session gets one file, `<yyyy-MM-dd_HH-mm-ss>_COUNTRY.txt`, inside the
//! logs directory. Every event is one line, `<HH:MM:SS> guess=<text> outcome=<label>`,
//! flushed as soon as it is written.

use chrono::{DateTime, Local};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const MODE_NAME: &str = "COUNTRY";
const FILE_STAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";
const LINE_TIME_FORMAT: &str = "%H:%M:%S";

#[derive(Debug)]
pub struct SessionLog {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl SessionLog {
    /// Create the directory if needed and open a fresh log file stamped with the current time.
    pub fn create<P: AsRef<Path>>(logs_dir: P) -> io::Result<Self> {
        Self::create_at(logs_dir, Local::now())
    }

    pub fn create_at<P: AsRef<Path>>(logs_dir: P, started: DateTime<Local>) -> io::Result<Self> {
        let logs_dir = logs_dir.as_ref();
        fs::create_dir_all(logs_dir)?;

        let stamp = started.format(FILE_STAMP_FORMAT).to_string();
        let (path, file) = create_unique(logs_dir, &stamp)?;
        crate::info_log!("Session log opened at {}", path.display());

        Ok(Self {
            path,
            writer: Some(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write one event line and flush it.
    pub fn append(&mut self, guess: &str, outcome: &str) -> io::Result<()> {
        let time = Local::now().format(LINE_TIME_FORMAT);
        let writer = self.writer.as_mut().ok_or_else(closed_error)?;
        writeln!(writer, "{time} guess={guess} outcome={outcome}")?;
        writer.flush()
    }

    /// Flush and release the file handle.
    pub fn close(mut self) -> io::Result<()> {
        self.release()
    }

    fn release(&mut self) -> io::Result<()> {
        match self.writer.take() {
            Some(writer) => writer.into_inner().map_err(io::IntoInnerError::into_error)?.sync_all(),
            None => Ok(()),
        }
    }
}

impl Drop for SessionLog {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            log::warn!("Failed to close session log {}: {e}", self.path.display());
        }
    }
}

fn closed_error() -> io::Error {
    io::Error::other("session log is closed")
}

fn log_file_name(stamp: &str, attempt: u32) -> String {
    if attempt == 0 {
        format!("{stamp}_{MODE_NAME}.txt")
    } else {
        format!("{stamp}_{MODE_NAME}-{attempt}.txt")
    }
}

/// Never reuse an existing file: two sessions in the same second get distinct names.
fn create_unique(dir: &Path, stamp: &str) -> io::Result<(PathBuf, File)> {
    let mut attempt = 0;
    loop {
        let path = dir.join(log_file_name(stamp, attempt));
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => attempt += 1,
            Err(e) => return Err(e),
        }
    }
}
