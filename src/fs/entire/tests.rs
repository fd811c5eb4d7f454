#![cfg(test)]

use std::fs as std_fs;
use std::sync::{Mutex, Once};

use log::{Level, LevelFilter, Log, Metadata, Record};
use tempfile::TempDir;

use super::entire::read_measured;
use super::*;
use crate::collections::contiguous::StringBuilder;
use crate::fs::file::{File, OpenError, SeekError, WriteError};
use crate::fs::{
    InvalidSeekError, IsDirectoryError, MissingComponentError, OtherOSError,
    StorageExhaustedError,
};

/// Keeps every record so tests can check what was reported. Tests run in parallel, so each one
/// only looks for records mentioning its own paths.
struct CaptureLogger(Mutex<Vec<(Level, String)>>);

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.0.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger(Mutex::new(Vec::new()));
static INIT: Once = Once::new();

fn capture_logs() {
    INIT.call_once(|| {
        // Fails only if another logger is installed, in which case there is nothing to check.
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
}

fn logged(level: Level, needle: &str) -> bool {
    LOGGER.0.lock().unwrap().iter().any(|(l, msg)| *l == level && msg.contains(needle))
}

#[test]
fn test_round_trip_is_exact() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("binary");

    let mut content = StringBuilder::new();
    content.append_buf(&[0, 159, 146, 150, 0, b'\n', b'\r', b'\n', 0]);
    content.append_str("trailing text");

    write_entire_file(&path, &content).unwrap();
    assert_eq!(std_fs::read(&path).unwrap(), content.as_bytes());

    let mut read = StringBuilder::new();
    read_entire_file(&path, &mut read).unwrap();
    assert_eq!(read, content, "Reading back should give exactly the bytes written.");
    assert_eq!(read.len(), 22, "No terminator should be added.");
}

#[test]
fn test_read_appends() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tail");
    std_fs::write(&path, "tail").unwrap();

    let mut content = StringBuilder::from("head, ");
    read_entire_file(&path, &mut content).unwrap();
    read_entire_file(&path, &mut content).unwrap();
    assert_eq!(
        content.as_str(),
        Ok("head, tailtail"),
        "Existing contents should be kept and new contents appended."
    );
}

#[test]
fn test_read_missing_leaves_content() {
    capture_logs();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist");

    let mut content = StringBuilder::from("unchanged");
    let cap = content.cap();

    assert_eq!(
        read_entire_file(&path, &mut content),
        Err(ReadFileError::Open(OpenError::from(MissingComponentError)))
    );
    assert_eq!(content.as_str(), Ok("unchanged"), "A failed read shouldn't append anything.");
    assert_eq!(content.cap(), cap, "A failed read shouldn't grow the builder.");
    assert!(
        logged(Level::Error, &path.display().to_string()),
        "The failure should be logged with the path."
    );
}

#[test]
fn test_read_directory_fails() {
    let dir = TempDir::new().unwrap();
    let mut content = StringBuilder::new();

    let result = read_entire_file(dir.path(), &mut content);
    assert_eq!(result, Err(ReadFileError::Open(OpenError::from(IsDirectoryError))));
    assert!(content.is_empty());
}

#[test]
fn test_empty_files() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty");

    write_entire_file(&path, &StringBuilder::new()).unwrap();
    assert_eq!(
        std_fs::metadata(&path).unwrap().len(),
        0,
        "Writing an empty builder should produce an empty file."
    );

    let mut content = StringBuilder::from("kept");
    read_entire_file(&path, &mut content).unwrap();
    assert_eq!(content.as_str(), Ok("kept"), "Reading an empty file should be a valid no-op.");
}

#[test]
fn test_write_replaces() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("replace");
    std_fs::write(&path, "a much longer original file").unwrap();

    write_entire_file(&path, &StringBuilder::from("short")).unwrap();
    assert_eq!(
        std_fs::read_to_string(&path).unwrap(),
        "short",
        "Writing should truncate the existing file."
    );
}

#[test]
fn test_write_missing_dir_fails() {
    capture_logs();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no-such-dir").join("file");

    let result = write_entire_file(&path, &StringBuilder::from("content"));
    assert!(result.as_ref().is_err_and(WriteFileError::is_open));
    assert!(!path.exists());
    assert!(
        logged(Level::Error, &path.display().to_string()),
        "The failure should be logged with the path."
    );
}

#[test]
fn test_large_file() {
    capture_logs();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("large");

    let data: Vec<u8> = (0..1_000_000_u32).map(|i| (i % 251) as u8).collect();
    std_fs::write(&path, &data).unwrap();

    let mut content = StringBuilder::new();
    read_entire_file(&path, &mut content).unwrap();
    assert_eq!(content.as_bytes(), data.as_slice());
    assert!(
        logged(Level::Debug, &path.display().to_string()),
        "A successful read should be logged at debug level."
    );
}

#[test]
fn test_read_unmeasurable_fails() {
    capture_logs();
    let path = "/proc/self/status";
    let mut content = StringBuilder::from("unchanged");

    assert_eq!(
        read_entire_file(path, &mut content),
        Err(ReadFileError::Seek(SeekError::from(InvalidSeekError))),
        "A file that can't seek to its end should fail to measure rather than panic."
    );
    assert_eq!(content.as_str(), Ok("unchanged"), "A failed read shouldn't append anything.");
    assert!(logged(Level::Error, path), "The failure should be logged with the path.");
}

#[test]
fn test_write_rejected_value_fails() {
    capture_logs();
    let path = "/proc/self/oom_score_adj";

    assert_eq!(
        write_entire_file(path, &StringBuilder::from("not a number")),
        Err(WriteFileError::Write(WriteError::from(OtherOSError(libc::EINVAL)))),
        "A value the kernel rejects should be reported, not panicked on."
    );
    assert!(logged(Level::Error, path), "The failure should be logged with the path.");
}

#[test]
fn test_write_full_device_fails() {
    capture_logs();
    let path = "/dev/full";

    assert_eq!(
        write_entire_file(path, &StringBuilder::from("content")),
        Err(WriteFileError::Write(WriteError::from(StorageExhaustedError))),
        "Running out of space part way should fail the write."
    );
    assert!(logged(Level::Error, path), "The failure should be logged with the path.");
}

#[test]
fn test_short_read_keeps_bytes() {
    capture_logs();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("truncated");
    std_fs::write(&path, "only part").unwrap();

    let file = File::open_read(&path).unwrap();
    let buf = read_measured(&file, &path, 64).unwrap();
    assert_eq!(&*buf, b"only part", "Bytes read before the end should be kept.");
    assert!(
        logged(Level::Warn, &path.display().to_string()),
        "Ending before the measured size should be logged as a warning."
    );
}
