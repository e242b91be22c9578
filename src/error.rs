use crate::oid::ParseObjectIdentifierError;
use crate::timestr::{format_duration, ParseTimeError};
use rasn::error::DecodeError;
use std::net::AddrParseError;
use std::time::Duration;
use thiserror::Error;
use tokio::io;

#[derive(Debug, Error)]
pub enum Error {
    #[error("trap filter \"{0}\" not found")]
    FilterNotFound(String),

    #[error("no matching trap received in {}", format_duration(.0))]
    Timeout(Duration),

    #[error("blocking trap wait called from within an async runtime")]
    BlockingInRuntime,

    #[error("unsupported SNMP version {0}")]
    UnsupportedVersion(String),

    #[error("decoding error: {0}")]
    Decoding(DecodeError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid object identifier: {0}")]
    InvalidObjectIdentifier(#[from] ParseObjectIdentifierError),

    #[error("invalid host: {0}")]
    InvalidHost(#[from] AddrParseError),

    #[error("invalid time string: {0}")]
    InvalidTimeString(#[from] ParseTimeError),
}

impl From<DecodeError> for Error {
    fn from(value: DecodeError) -> Self {
        Error::Decoding(value)
    }
}
