//! Error types for reader session operations.

use std::io;

use thiserror::Error;

use crate::{codec::CodecError, validate::ValidationError};

/// A failure in a reader session operation.
///
/// Any transport-level failure drops the connection; every outstanding
/// `transact` call is woken with the error that killed it.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The TCP connection or the LLRP connection handshake failed.
    #[error("connection to the reader failed: {detail}")]
    ConnectFailed {
        /// What went wrong.
        detail: String,
    },

    /// No correlated reply arrived within the deadline.
    #[error("no reply within the deadline")]
    Timeout,

    /// The session was closed while the operation was outstanding.
    #[error("session closed")]
    Cancelled,

    /// The reader closed the connection.
    #[error("reader closed the connection")]
    PeerClosed,

    /// A transport I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The outgoing message failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Octets could not be packed or unpacked.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl SessionError {
    pub(crate) fn connect_failed(detail: impl Into<String>) -> Self {
        Self::ConnectFailed {
            detail: detail.into(),
        }
    }

    /// Clone-ish helper: errors delivered to many waiters are rebuilt, not
    /// cloned, because `io::Error` is not `Clone`.
    pub(crate) fn replicate(&self) -> Self {
        match self {
            Self::ConnectFailed { detail } => Self::ConnectFailed {
                detail: detail.clone(),
            },
            Self::Timeout => Self::Timeout,
            Self::Cancelled => Self::Cancelled,
            Self::PeerClosed => Self::PeerClosed,
            Self::Io(e) => Self::Io(io::Error::new(e.kind(), e.to_string())),
            Self::Validation(e) => Self::Validation(e.clone()),
            Self::Codec(e) => Self::Codec(e.clone()),
        }
    }
}

impl From<crate::error::LlrpError> for SessionError {
    fn from(err: crate::error::LlrpError) -> Self {
        use crate::error::LlrpError;
        match err {
            LlrpError::Validation(e) => Self::Validation(e),
            LlrpError::Codec(e) => Self::Codec(e),
            LlrpError::Session(e) => e,
            other => Self::Io(io::Error::new(io::ErrorKind::InvalidData, other.to_string())),
        }
    }
}
