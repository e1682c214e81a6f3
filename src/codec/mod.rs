//! Generic binary codec driven by the specification model.
//!
//! One encoder and one decoder cover every message and parameter: the
//! traversal is data-driven from [`crate::spec::LlrpRegistry`], including
//! vendor extensions dispatched by their `(vendor, subtype)` discriminant.
//! Validation brackets both directions, so malformed trees cannot be
//! emitted and malformed octets cannot produce a tree.

use bytes::Bytes;

use crate::{
    bitstream::{BitReader, BitWriter},
    error::LlrpError,
    message::{Message, Parameter},
    spec::LlrpRegistry,
    validate,
};

mod decode;
mod encode;
mod error;

pub use decode::HEADER_OCTETS;
pub use error::CodecError;

/// Validate and encode a message into a complete wire frame.
///
/// The returned buffer starts with the 10-octet framing header and its
/// length field equals the buffer's length.
///
/// # Errors
///
/// Returns [`LlrpError::Validation`] when the tree violates the
/// specification and [`LlrpError::Codec`] when it cannot be packed.
///
/// # Examples
///
/// ```
/// use llrp::{codec, message::{Message, Value}, spec::LlrpRegistry};
///
/// let registry = LlrpRegistry::load().expect("load");
/// let request = Message::with_id(
///     &registry,
///     "GET_READER_CAPABILITIES",
///     1,
///     &[("RequestedData", Value::uint(0u8))],
///     vec![],
/// )
/// .expect("valid request");
/// let frame = codec::encode_message(&registry, &request).expect("encodes");
/// assert_eq!(frame.len(), 11);
/// assert_eq!(&frame[..2], &[0x04, 0x01]);
/// ```
pub fn encode_message(registry: &LlrpRegistry, message: &Message) -> Result<Bytes, LlrpError> {
    encode::message(registry, message)
}

/// Decode and validate one complete wire frame.
///
/// # Errors
///
/// Returns [`LlrpError::Codec`] when the octets do not parse and
/// [`LlrpError::Validation`] when the decoded tree violates the
/// specification.
pub fn decode_message(registry: &LlrpRegistry, frame: &[u8]) -> Result<Message, LlrpError> {
    decode::message(registry, frame)
}

/// Validate and encode a single parameter subtree.
///
/// # Errors
///
/// As [`encode_message`], for the parameter's own constraints.
pub fn encode_parameter(
    registry: &LlrpRegistry,
    parameter: &Parameter,
) -> Result<Bytes, LlrpError> {
    validate::parameter(registry, parameter)?;
    let mut writer = BitWriter::new();
    encode::parameter(&mut writer, registry, parameter).map_err(LlrpError::Codec)?;
    Ok(writer.into_bytes())
}

/// Decode a single parameter from `octets`.
///
/// # Errors
///
/// As [`decode_message`], for the parameter's own constraints.
pub fn decode_parameter(registry: &LlrpRegistry, octets: &[u8]) -> Result<Parameter, LlrpError> {
    let mut reader = BitReader::new(octets);
    let mut path = Vec::new();
    let decoded = decode::parameter(registry, &mut reader, &mut path)?;
    validate::parameter(registry, &decoded)?;
    Ok(decoded)
}
