use derive_more::{Display, Error};
use libc::c_int;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("permission denied")]
pub struct AccessError;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("operation not permitted")]
pub struct PermissionError;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("interrupted by signal")]
pub struct InterruptError;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("error during I/O")]
pub struct IOError;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("available storage space exhausted")]
pub struct StorageExhaustedError;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("out of memory")]
pub struct OOMError;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("exceeded open file limit")]
pub struct FileCountError;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("path contains too many symlinks")]
pub struct ExcessiveLinksError;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("path is too long")]
pub struct PathLengthError;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("a component of the provided path does not exist")]
pub struct MissingComponentError;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("a component of the provided path is not a directory")]
pub struct NonDirComponentError;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("path refers to a directory")]
pub struct IsDirectoryError;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("path contains a nul byte or characters invalid for the filesystem")]
pub struct InvalidPathError;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("file size or offset is too large")]
pub struct OversizedFileError;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("filesystem is read only")]
pub struct ReadOnlyFSError;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("executable file is busy")]
pub struct BusyExecutableError;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("file type doesn't support this operation")]
pub struct UnsupportedFileError;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("file is a pipe, socket or FIFO and can't be seeked")]
pub struct UnseekableError;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("offset is negative or the file doesn't support this kind of seek")]
pub struct InvalidSeekError;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("operation would block on a non-blocking file")]
pub struct WouldBlockError;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("reading end of the pipe or socket is closed")]
pub struct BrokenPipeError;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("only wrote {written} of {expected} bytes")]
pub struct ShortWriteError {
    pub written: usize,
    pub expected: usize,
}

/// An errno with no dedicated error type. The OS rejected the operation for a reason particular
/// to the file, such as a `/proc` entry refusing the written value.
#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("OS error {_0}: {}", std::io::Error::from_raw_os_error(*_0))]
pub struct OtherOSError(#[error(not(source))] pub c_int);
