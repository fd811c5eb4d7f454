use derive_more::{Display, Error, From, IsVariant};

use crate::fs::file::{CloseError, OpenError, ReadError, SeekError, WriteError};

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error, IsVariant)]
pub enum ReadFileError {
    #[display("failed to open file: {_0}")]
    Open(OpenError),
    #[display("failed to measure file: {_0}")]
    Seek(SeekError),
    #[display("failed to read file: {_0}")]
    Read(ReadError),
}

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error, IsVariant)]
pub enum WriteFileError {
    #[display("failed to open file: {_0}")]
    Open(OpenError),
    #[display("failed to write file: {_0}")]
    Write(WriteError),
    #[display("failed to close file: {_0}")]
    Close(CloseError),
}
