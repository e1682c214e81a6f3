//! Unpacking LLRP octets into message trees.
//!
//! Decoding is budget-driven: the message header's 32-bit length bounds the
//! top-level region, and each TLV header's 16-bit length bounds its nested
//! region. A nested decode can never consume the next parameter's octets
//! because every region is split off the parent cursor first. Trailing
//! sub-octet bits inside a region are padding and are ignored.

use bytes::Bytes;

use crate::{
    bitstream::BitReader,
    error::LlrpError,
    message::{BitArray, Message, Parameter, Value},
    spec::{Encoding, FieldSpec, FieldType, LlrpRegistry, MessageSpec, CUSTOM_TYPE},
    validate::{self, ValidationError},
};

use super::error::CodecError;
use super::encode::PROTOCOL_VERSION;

/// Octets of the fixed message framing header.
pub const HEADER_OCTETS: usize = 10;

/// Decode and validate one complete wire frame.
///
/// # Errors
///
/// Returns [`LlrpError::Codec`] when the octets do not parse and
/// [`LlrpError::Validation`] when they parse into a tree that violates the
/// specification.
#[allow(clippy::cast_possible_truncation)]
pub fn message(registry: &LlrpRegistry, frame: &[u8]) -> Result<Message, LlrpError> {
    if frame.len() < HEADER_OCTETS {
        return Err(CodecError::Framing {
            detail: format!("{} octets is shorter than the framing header", frame.len()),
        }
        .into());
    }
    let mut reader = BitReader::new(frame);
    let mut path: Vec<&'static str> = Vec::new();
    let _reserved = read(&mut reader, &path, 3)?;
    let version = read(&mut reader, &path, 3)? as u8;
    if version != PROTOCOL_VERSION {
        return Err(CodecError::UnsupportedVersion { version }.into());
    }
    let type_num = read(&mut reader, &path, 10)? as u16;
    let declared = read(&mut reader, &path, 32)? as usize;
    let id = read(&mut reader, &path, 32)? as u32;
    if declared != frame.len() {
        return Err(CodecError::Framing {
            detail: format!(
                "header length {declared} does not match the {} octet frame",
                frame.len()
            ),
        }
        .into());
    }

    let mut spec_idx = registry
        .message_by_type(type_num)
        .ok_or(CodecError::UnknownType {
            path: String::new(),
            type_num,
        })?;
    let mut spec = registry.message(spec_idx);
    let fields;
    if type_num == CUSTOM_TYPE {
        let vendor = read(&mut reader, &path, 32)? as u32;
        let subtype = read(&mut reader, &path, 8)? as u8;
        match registry.custom_message(vendor, subtype) {
            Some(custom_idx) => {
                spec_idx = custom_idx;
                spec = registry.message(spec_idx);
                path.push(spec.name);
                fields = read_fields(&mut reader, &path, &spec.fields)?;
            }
            None => {
                // Unregistered custom message: keep the payload opaque so it
                // re-emits byte-identically.
                path.push(spec.name);
                let rest = reader
                    .read_bytes(reader.remaining_bytes())
                    .map_err(|e| CodecError::truncated(&path, e))?;
                fields = vec![
                    Value::Uint(u64::from(vendor)),
                    Value::Uint(u64::from(subtype)),
                    Value::Opaque(Bytes::copy_from_slice(rest)),
                ];
            }
        }
    } else {
        path.push(spec.name);
        fields = read_fields(&mut reader, &path, &spec.fields)?;
    }

    let params = read_children(registry, &mut reader, &mut path, MessageOrParam::Message(spec))?;

    let decoded = Message::from_parts(spec_idx, id, fields, params);
    validate::message(registry, &decoded)?;
    Ok(decoded)
}

/// Decode a single parameter from the front of `reader`.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn parameter(
    registry: &LlrpRegistry,
    reader: &mut BitReader<'_>,
    path: &mut Vec<&'static str>,
) -> Result<Parameter, LlrpError> {
    let lead = reader.peek_u8().map_err(|e| CodecError::truncated(path, e))?;
    if lead & 0x80 != 0 {
        return tv_parameter(registry, reader, path, u16::from(lead & 0x7F));
    }
    tlv_parameter(registry, reader, path)
}

fn tv_parameter(
    registry: &LlrpRegistry,
    reader: &mut BitReader<'_>,
    path: &mut Vec<&'static str>,
    type_num: u16,
) -> Result<Parameter, LlrpError> {
    let spec_idx = registry
        .param_by_type(type_num)
        .filter(|&idx| registry.param(idx).encoding == Encoding::Tv)
        .ok_or_else(|| CodecError::UnknownType {
            path: path.join("."),
            type_num,
        })?;
    let spec = registry.param(spec_idx);
    read(reader, path, 8)?; // the 1|type(7) octet
    path.push(spec.name);
    let fields = read_fields(reader, path, &spec.fields)?;
    path.pop();
    Ok(Parameter::from_parts(spec_idx, fields, Vec::new()))
}

#[allow(clippy::cast_possible_truncation)]
fn tlv_parameter(
    registry: &LlrpRegistry,
    reader: &mut BitReader<'_>,
    path: &mut Vec<&'static str>,
) -> Result<Parameter, LlrpError> {
    let header = read(reader, path, 16)? as u16;
    let type_num = header & 0x03FF;
    let declared = read(reader, path, 16)? as usize;
    if declared < 4 {
        return Err(CodecError::Truncated {
            path: path.join("."),
            detail: format!("TLV length {declared} shorter than its own header"),
        }
        .into());
    }
    let body_len = declared - 4;
    if body_len > reader.remaining_bytes() {
        return Err(CodecError::Truncated {
            path: path.join("."),
            detail: format!(
                "TLV type {type_num} declares {body_len} body octets, {} remain",
                reader.remaining_bytes()
            ),
        }
        .into());
    }
    let mut body = reader
        .split_front(body_len)
        .map_err(|e| CodecError::truncated(path, e))?;

    if type_num == CUSTOM_TYPE {
        return custom_parameter(registry, &mut body, path);
    }

    let spec_idx = registry
        .param_by_type(type_num)
        .filter(|&idx| registry.param(idx).encoding == Encoding::Tlv)
        .ok_or_else(|| CodecError::UnknownType {
            path: path.join("."),
            type_num,
        })?;
    let spec = registry.param(spec_idx);
    path.push(spec.name);
    let fields = read_fields(&mut body, path, &spec.fields)?;
    let children = read_children(
        registry,
        &mut body,
        path,
        MessageOrParam::Param(registry.param(spec_idx)),
    )?;
    path.pop();
    Ok(Parameter::from_parts(spec_idx, fields, children))
}

#[allow(clippy::cast_possible_truncation)]
fn custom_parameter(
    registry: &LlrpRegistry,
    body: &mut BitReader<'_>,
    path: &mut Vec<&'static str>,
) -> Result<Parameter, LlrpError> {
    let vendor = read(body, path, 32)? as u32;
    let subtype = read(body, path, 32)? as u32;
    match registry.custom_param(vendor, subtype) {
        Some(spec_idx) => {
            let spec = registry.param(spec_idx);
            path.push(spec.name);
            let fields = read_fields(body, path, &spec.fields)?;
            let children =
                read_children(registry, body, path, MessageOrParam::Param(spec))?;
            path.pop();
            Ok(Parameter::from_parts(spec_idx, fields, children))
        }
        None => {
            // Unregistered extension: preserve the payload opaquely.
            let generic = registry
                .param_by_type(CUSTOM_TYPE)
                .expect("the generic Custom parameter is always defined");
            let rest = body
                .read_bytes(body.remaining_bytes())
                .map_err(|e| CodecError::truncated(path, e))?;
            Ok(Parameter::from_parts(
                generic,
                vec![
                    Value::Uint(u64::from(vendor)),
                    Value::Uint(u64::from(subtype)),
                    Value::Opaque(Bytes::copy_from_slice(rest)),
                ],
                Vec::new(),
            ))
        }
    }
}

enum MessageOrParam<'a> {
    Message(&'a MessageSpec),
    Param(&'a crate::spec::ParamSpec),
}

impl MessageOrParam<'_> {
    fn rules(&self) -> &[crate::spec::SubParamRule] {
        match self {
            Self::Message(spec) => &spec.children,
            Self::Param(spec) => &spec.children,
        }
    }
}

fn read_children(
    registry: &LlrpRegistry,
    reader: &mut BitReader<'_>,
    path: &mut Vec<&'static str>,
    context: MessageOrParam<'_>,
) -> Result<Vec<Parameter>, LlrpError> {
    let mut children = Vec::new();
    // Anything shorter than one octet is region padding.
    while reader.remaining_bits() >= 8 {
        let child = parameter(registry, reader, path)?;
        let admitted = context
            .rules()
            .iter()
            .any(|rule| validate::rule_matches(registry, rule, child.spec()));
        if !admitted {
            return Err(CodecError::UnexpectedParameter {
                path: path.join("."),
                parameter: registry.param(child.spec()).name,
            }
            .into());
        }
        children.push(child);
    }
    Ok(children)
}

fn read(
    reader: &mut BitReader<'_>,
    path: &[&'static str],
    bits: u32,
) -> Result<u64, CodecError> {
    reader
        .read_uint(bits)
        .map_err(|e| CodecError::truncated(path, e))
}

#[allow(clippy::cast_possible_truncation)]
fn read_fields(
    reader: &mut BitReader<'_>,
    path: &[&'static str],
    fields: &[FieldSpec],
) -> Result<Vec<Value>, LlrpError> {
    let mut values = Vec::with_capacity(fields.len());
    for field in fields {
        match field.ty {
            FieldType::Reserved(bits) => {
                read(reader, path, u32::from(bits))?;
            }
            FieldType::Bool => {
                values.push(Value::Bool(read(reader, path, 1)? == 1));
            }
            FieldType::Bits(bits) => {
                values.push(Value::Uint(read(reader, path, u32::from(bits))?));
            }
            FieldType::U8 => values.push(Value::Uint(read(reader, path, 8)?)),
            FieldType::U16 => values.push(Value::Uint(read(reader, path, 16)?)),
            FieldType::U32 => values.push(Value::Uint(read(reader, path, 32)?)),
            FieldType::U64 => values.push(Value::Uint(read(reader, path, 64)?)),
            FieldType::S8 => values.push(Value::Int(read_signed(reader, path, 8)?)),
            FieldType::S16 => values.push(Value::Int(read_signed(reader, path, 16)?)),
            FieldType::S32 => values.push(Value::Int(read_signed(reader, path, 32)?)),
            FieldType::S64 => values.push(Value::Int(read_signed(reader, path, 64)?)),
            FieldType::Epc96 => {
                let mut epc = [0u8; 12];
                for byte in &mut epc {
                    *byte = read(reader, path, 8)? as u8;
                }
                values.push(Value::Epc96(epc));
            }
            FieldType::Utf8 => {
                let len = read(reader, path, 16)? as usize;
                let raw = reader
                    .read_bytes(len)
                    .map_err(|e| CodecError::truncated(path, e))?;
                let text = std::str::from_utf8(raw).map_err(|_| {
                    ValidationError::TypeMismatch {
                        path: path.join("."),
                        field: field.name.to_owned(),
                        expected: "UTF-8 string",
                        actual: "invalid UTF-8 octets",
                    }
                })?;
                // Readers pad fixed string buffers with NULs.
                values.push(Value::Str(text.trim_end_matches('\0').to_owned()));
            }
            FieldType::BitArray => {
                let bit_len = read(reader, path, 16)? as u16;
                let octets = (bit_len as usize).div_ceil(8);
                let raw = reader
                    .read_bytes(octets)
                    .map_err(|e| CodecError::truncated(path, e))?;
                values.push(Value::Bits(BitArray::new(raw.to_vec(), bit_len)));
            }
            FieldType::UintArray(width) => {
                let count = read(reader, path, 16)? as usize;
                let mut elements = Vec::with_capacity(count);
                for _ in 0..count {
                    elements.push(read(reader, path, u32::from(width))?);
                }
                values.push(Value::UintArray(elements));
            }
            FieldType::BytesToEnd => {
                let rest = reader
                    .read_bytes(reader.remaining_bytes())
                    .map_err(|e| CodecError::truncated(path, e))?;
                values.push(Value::Opaque(Bytes::copy_from_slice(rest)));
            }
        }
    }
    Ok(values)
}

fn read_signed(
    reader: &mut BitReader<'_>,
    path: &[&'static str],
    bits: u32,
) -> Result<i64, CodecError> {
    reader
        .read_sint(bits)
        .map_err(|e| CodecError::truncated(path, e))
}
