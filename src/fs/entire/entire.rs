use std::path::Path;

use crate::collections::contiguous::{StringBuilder, Vector};
use crate::fs::file::{File, ReadError, SeekError};
use crate::fs::{OversizedFileError, ReadFileError, WriteFileError};

/// Reads the whole file at `file_path` and appends it to `content`.
///
/// Existing contents of `content` are kept. On failure nothing is appended, and the error is
/// logged with the path before being returned.
///
/// The file is measured up front and read until that many bytes have arrived. If it ends early
/// (because something truncated it in the meantime) whatever was read is still appended.
///
/// # Examples
/// ```
/// # use dawn::collections::contiguous::StringBuilder;
/// # use dawn::fs::{read_entire_file, write_entire_file};
/// # let dir = tempfile::TempDir::new().unwrap();
/// let path = dir.path().join("greeting.txt");
/// write_entire_file(&path, &StringBuilder::from("hello")).unwrap();
///
/// let mut content = StringBuilder::from("> ");
/// read_entire_file(&path, &mut content).unwrap();
/// assert_eq!(content.as_str(), Ok("> hello"));
/// ```
pub fn read_entire_file<P: AsRef<Path>>(
    file_path: P,
    content: &mut StringBuilder,
) -> Result<(), ReadFileError> {
    let file_path = file_path.as_ref();

    read_into(file_path, content)
        .inspect_err(|e| log::error!("couldn't read {}: {e}", file_path.display()))
}

fn read_into(file_path: &Path, content: &mut StringBuilder) -> Result<(), ReadFileError> {
    let file = File::open_read(file_path)?;
    let size = usize::try_from(file.size()?)
        .map_err(|_| SeekError::from(OversizedFileError))?;

    // Both the file and buf are released on every return from here on.
    let buf = read_measured(&file, file_path, size)?;
    content.append_buf(&buf);
    log::debug!("read {} bytes from {}", buf.len(), file_path.display());
    Ok(())
}

/// Reads from the current offset until `size` bytes have arrived or the file ends. Ending early
/// isn't an error, but it is logged since `size` was measured from the same file.
pub(super) fn read_measured(
    file: &File,
    file_path: &Path,
    size: usize,
) -> Result<Vector<u8>, ReadError> {
    let mut buf = Vector::<u8>::with_cap(size);
    while buf.len() < size {
        match file.read_uninit(buf.spare_capacity_mut()) {
            Ok(0) => break,
            // SAFETY: read_uninit initialized the next count bytes, which are within cap.
            Ok(count) => unsafe { buf.set_len(buf.len() + count) },
            Err(ReadError::Interrupt(_)) => continue,
            Err(e) => Err(e)?,
        }
    }

    if buf.len() < size {
        log::warn!(
            "{} ended after {} of {size} bytes",
            file_path.display(),
            buf.len(),
        );
    }
    Ok(buf)
}

/// Replaces the file at `file_path` with the contents of `content`, creating it if needed.
///
/// Succeeds only if every byte was written and the file closed cleanly. Errors are logged with the
/// path before being returned.
pub fn write_entire_file<P: AsRef<Path>>(
    file_path: P,
    content: &StringBuilder,
) -> Result<(), WriteFileError> {
    let file_path = file_path.as_ref();

    write_from(file_path, content)
        .inspect_err(|e| log::error!("couldn't write {}: {e}", file_path.display()))
}

fn write_from(file_path: &Path, content: &StringBuilder) -> Result<(), WriteFileError> {
    let file = File::create_or_empty(file_path)?;
    file.write_all(content)?;
    file.close()?;

    log::debug!("wrote {} bytes to {}", content.len(), file_path.display());
    Ok(())
}
