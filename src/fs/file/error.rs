use derive_more::{Display, Error, From, IsVariant};

use crate::fs::error::*;

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error, IsVariant)]
pub enum OpenError {
    Access(AccessError),
    BusyExecutable(BusyExecutableError),
    ExcessiveLinks(ExcessiveLinksError),
    FileCount(FileCountError),
    Interrupt(InterruptError),
    InvalidPath(InvalidPathError),
    IsDirectory(IsDirectoryError),
    MissingComponent(MissingComponentError),
    NonDirComponent(NonDirComponentError),
    OOM(OOMError),
    OtherOS(OtherOSError),
    OversizedFile(OversizedFileError),
    PathLength(PathLengthError),
    Permission(PermissionError),
    ReadOnlyFS(ReadOnlyFSError),
    StorageExhausted(StorageExhaustedError),
    UnsupportedFile(UnsupportedFileError),
}

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error, IsVariant)]
pub enum SeekError {
    InvalidSeek(InvalidSeekError),
    OtherOS(OtherOSError),
    OversizedFile(OversizedFileError),
    Unseekable(UnseekableError),
}

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error, IsVariant)]
pub enum ReadError {
    IO(IOError),
    Interrupt(InterruptError),
    IsDirectory(IsDirectoryError),
    OtherOS(OtherOSError),
    WouldBlock(WouldBlockError),
}

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error, IsVariant)]
pub enum WriteError {
    BrokenPipe(BrokenPipeError),
    IO(IOError),
    Interrupt(InterruptError),
    OtherOS(OtherOSError),
    OversizedFile(OversizedFileError),
    ShortWrite(ShortWriteError),
    StorageExhausted(StorageExhaustedError),
    WouldBlock(WouldBlockError),
}

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error, IsVariant)]
pub enum CloseError {
    IO(IOError),
    Interrupt(InterruptError),
    OtherOS(OtherOSError),
    StorageExhausted(StorageExhaustedError),
}
