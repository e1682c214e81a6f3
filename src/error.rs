//! Canonical error and result types for the crate.

use thiserror::Error;

use crate::{
    codec::CodecError,
    session::SessionError,
    spec::SpecError,
    validate::ValidationError,
    xml::XmlError,
};

/// Top-level error type exposed by `llrp`.
///
/// Each layer keeps its own taxonomy; this umbrella exists so application
/// code can funnel every failure through one `?`-friendly type.
#[derive(Debug, Error)]
pub enum LlrpError {
    /// The specification artifact failed to load.
    #[error(transparent)]
    Spec(#[from] SpecError),

    /// A message tree violates the specification.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Octets could not be packed or unpacked.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The XML form could not be produced or parsed.
    #[error(transparent)]
    Xml(#[from] XmlError),

    /// A reader session operation failed.
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Canonical result alias used by `llrp` public APIs.
pub type Result<T> = std::result::Result<T, LlrpError>;
