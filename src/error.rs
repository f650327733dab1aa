use std::io;
use std::num::ParseIntError;
use std::str::Utf8Error;

use thiserror::Error;

use crate::target::TargetError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("bad target: {0}")]
    Target(#[from] TargetError),

    #[error("failed to grow request buffer")]
    OutOfMemory,

    #[error("write request: {0}")]
    Write(#[source] io::Error),

    #[error("response has no end of headers")]
    MissingBoundary,

    #[error("invalid response line")]
    InvalidResponseLine,

    #[error("unsupported http version")]
    UnsupportedVersion,

    #[error("header line is not a name-value pair")]
    InvalidHeaderPair,

    #[error("status code is not a number")]
    StatusNotANumber(#[source] ParseIntError),

    #[error("response headers are not utf-8: {0}")]
    HeaderUtf8(#[from] Utf8Error),

    #[error("connect: {0}")]
    Connect(#[source] io::Error),

    #[error("read response: {0}")]
    Read(#[source] io::Error),
}

pub(crate) type Result<T> = std::result::Result<T, Error>;
