//! Error types for the binary codec.

use std::io;

use thiserror::Error;

use crate::bitstream::BitstreamError;

/// A failure while packing or unpacking LLRP octets.
///
/// Decode errors carry the path (message, parameter) at which the octets
/// stopped making sense.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// Fewer octets remain than the structure requires.
    #[error("{path}: truncated ({detail})")]
    Truncated {
        /// Path to the instance being decoded.
        path: String,
        /// What ran out.
        detail: String,
    },

    /// A type number with no definition in the registry.
    #[error("{path}: unknown type number {type_num}")]
    UnknownType {
        /// Path to the enclosing instance.
        path: String,
        /// The unresolvable type number.
        type_num: u16,
    },

    /// A parameter decoded where the enclosing spec does not admit it.
    #[error("{path}: parameter {parameter} not admitted here")]
    UnexpectedParameter {
        /// Path to the enclosing instance.
        path: String,
        /// Name of the out-of-place parameter.
        parameter: &'static str,
    },

    /// The 10-octet message framing header is malformed.
    #[error("framing error: {detail}")]
    Framing {
        /// What was wrong with the header.
        detail: String,
    },

    /// The frame carries a protocol version other than 1.
    #[error("unsupported protocol version {version}")]
    UnsupportedVersion {
        /// Version bits from the header.
        version: u8,
    },
}

impl CodecError {
    pub(crate) fn truncated(path: &[&'static str], source: BitstreamError) -> Self {
        Self::Truncated {
            path: path.join("."),
            detail: source.to_string(),
        }
    }
}

impl From<CodecError> for io::Error {
    fn from(err: CodecError) -> Self {
        match &err {
            CodecError::Truncated { .. } => Self::new(io::ErrorKind::UnexpectedEof, err),
            _ => Self::new(io::ErrorKind::InvalidData, err),
        }
    }
}
