// libcalypso/src/error.rs

use thiserror::Error;

use crate::poller::FailReason;
use crate::protocol::{StatusKind, StatusWord};
use crate::schema::{Field, SchemaKind};
use crate::types::RecordId;

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("operation timed out")]
    Timeout,

    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("card rejected command: status={status}")]
    StatusWord { status: StatusWord },

    #[error("bit range {start}..={end} out of bounds ({available} bits available)")]
    BitRange {
        start: usize,
        end: usize,
        available: usize,
    },

    #[error("date out of range: unix time {unix}")]
    DateOutOfRange { unix: i64 },

    #[error("malformed {record} record: {reason}")]
    MalformedRecord { record: RecordId, reason: String },

    #[error("field {} is not declared in schema {schema:?}", .field.name())]
    UnknownField { field: Field, schema: SchemaKind },

    #[error("unknown card network: country={country}, network={network}")]
    UnknownDialect { country: u16, network: u16 },

    #[error("session cancelled")]
    Cancelled,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("dump error: {0}")]
    Dump(String),
}

impl Error {
    /// Attach a record identity to a low-level decoding failure. Errors
    /// other than `BitRange` and `DateOutOfRange` are returned unchanged.
    pub fn in_record(self, record: RecordId) -> Self {
        match self {
            Error::BitRange { .. } | Error::DateOutOfRange { .. } => Error::MalformedRecord {
                record,
                reason: self.to_string(),
            },
            other => other,
        }
    }

    /// Map an error to the reason surfaced to the UI.
    pub fn fail_reason(&self) -> FailReason {
        match self {
            Error::StatusWord { status } => match status.kind() {
                StatusKind::FileNotFound => FailReason::FileNotFound,
                StatusKind::SecurityDenied => FailReason::Security,
                _ => FailReason::Generic,
            },
            Error::Cancelled => FailReason::Cancelled,
            _ => FailReason::Generic,
        }
    }

    /// True for errors that only invalidate one record, not the session.
    pub fn is_record_local(&self) -> bool {
        matches!(
            self,
            Error::MalformedRecord { .. } | Error::BitRange { .. } | Error::DateOutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
