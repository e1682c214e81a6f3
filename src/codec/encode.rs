//! Packing message trees into LLRP octets.
//!
//! Encoding is two-pass per region: the body is written with a zero length
//! placeholder, then the length field is back-patched once the region's
//! size is known. Sub-parameters are re-sorted into specification order
//! before emission regardless of their order in the tree.

use bytes::Bytes;

use crate::{
    bitstream::{BitstreamError, BitWriter},
    error::LlrpError,
    message::{Message, Parameter, Value},
    spec::{Encoding, FieldSpec, FieldType, LlrpRegistry},
    validate,
};

use super::error::CodecError;

/// LLRP protocol version emitted in every framing header.
pub(crate) const PROTOCOL_VERSION: u8 = 1;

impl From<BitstreamError> for CodecError {
    fn from(err: BitstreamError) -> Self {
        match err {
            BitstreamError::Truncated { .. } => Self::Truncated {
                path: String::new(),
                detail: err.to_string(),
            },
            _ => Self::Framing {
                detail: err.to_string(),
            },
        }
    }
}

/// Validate and encode a message into a complete wire frame.
///
/// # Errors
///
/// Returns [`LlrpError::Validation`] when the tree violates the
/// specification and [`LlrpError::Codec`] when a region cannot be packed.
pub fn message(registry: &LlrpRegistry, message: &Message) -> Result<Bytes, LlrpError> {
    validate::message(registry, message)?;
    let spec = registry.message(message.spec);
    let mut writer = BitWriter::new();
    pack(&mut writer, registry, message).map_err(LlrpError::Codec)?;
    let total = writer.byte_len();
    let total = u32::try_from(total).map_err(|_| {
        LlrpError::Codec(CodecError::Framing {
            detail: format!("{} exceeds the 32-bit frame length", spec.name),
        })
    })?;
    writer.patch_u32(2, total);
    Ok(writer.into_bytes())
}

fn pack(
    writer: &mut BitWriter,
    registry: &LlrpRegistry,
    message: &Message,
) -> Result<(), CodecError> {
    let spec = registry.message(message.spec);
    writer.write_uint(3, 0)?;
    writer.write_uint(3, u64::from(PROTOCOL_VERSION))?;
    writer.write_uint(10, u64::from(spec.type_num))?;
    writer.write_uint(32, 0)?; // length, patched afterwards
    writer.write_uint(32, u64::from(message.id))?;
    if let Some(key) = spec.custom {
        writer.write_uint(32, u64::from(key.vendor))?;
        writer.write_uint(8, u64::from(key.subtype))?;
    }
    write_fields(writer, &spec.fields, message.fields())?;
    for child in validate::spec_ordered(registry, &spec.children, message.parameters()) {
        parameter(writer, registry, child)?;
    }
    Ok(())
}

/// Encode a single parameter subtree, appending to `writer`.
pub(crate) fn parameter(
    writer: &mut BitWriter,
    registry: &LlrpRegistry,
    parameter: &Parameter,
) -> Result<(), CodecError> {
    let spec = registry.param(parameter.spec);
    match spec.encoding {
        Encoding::Tv => {
            writer.write_uint(8, u64::from(0x80 | spec.type_num))?;
            write_fields(writer, &spec.fields, parameter.fields())?;
        }
        Encoding::Tlv => {
            let start = writer.byte_len();
            writer.write_uint(16, u64::from(spec.type_num))?;
            writer.write_uint(16, 0)?; // length, patched afterwards
            if let Some(key) = spec.custom {
                writer.write_uint(32, u64::from(key.vendor))?;
                writer.write_uint(32, u64::from(key.subtype))?;
            }
            write_fields(writer, &spec.fields, parameter.fields())?;
            for child in
                validate::spec_ordered(registry, &spec.children, parameter.children())
            {
                self::parameter(writer, registry, child)?;
            }
            let region = writer.byte_len() - start;
            let region = u16::try_from(region).map_err(|_| CodecError::Framing {
                detail: format!("{} exceeds the 16-bit TLV length", spec.name),
            })?;
            writer.patch_u16(start + 2, region);
        }
    }
    Ok(())
}

fn write_fields(
    writer: &mut BitWriter,
    fields: &[FieldSpec],
    values: &[Value],
) -> Result<(), CodecError> {
    let mut slot = 0usize;
    for field in fields {
        if let FieldType::Reserved(bits) = field.ty {
            writer.write_uint(u32::from(bits), 0)?;
            continue;
        }
        write_value(writer, field.ty, &values[slot])?;
        slot += 1;
    }
    Ok(())
}

fn write_value(writer: &mut BitWriter, ty: FieldType, value: &Value) -> Result<(), CodecError> {
    match (ty, value) {
        (FieldType::Bool, Value::Bool(v)) => writer.write_bool(*v)?,
        (FieldType::Bits(bits), Value::Uint(v)) => writer.write_uint(u32::from(bits), *v)?,
        (FieldType::U8, Value::Uint(v)) => writer.write_uint(8, *v)?,
        (FieldType::U16, Value::Uint(v)) => writer.write_uint(16, *v)?,
        (FieldType::U32, Value::Uint(v)) => writer.write_uint(32, *v)?,
        (FieldType::U64, Value::Uint(v)) => writer.write_uint(64, *v)?,
        (FieldType::S8, Value::Int(v)) => writer.write_sint(8, *v)?,
        (FieldType::S16, Value::Int(v)) => writer.write_sint(16, *v)?,
        (FieldType::S32, Value::Int(v)) => writer.write_sint(32, *v)?,
        (FieldType::S64, Value::Int(v)) => writer.write_sint(64, *v)?,
        (FieldType::Epc96, Value::Epc96(epc)) => {
            for byte in epc {
                writer.write_uint(8, u64::from(*byte))?;
            }
        }
        (FieldType::Utf8, Value::Str(text)) => {
            writer.write_uint(16, text.len() as u64)?;
            writer.write_bytes(text.as_bytes())?;
        }
        (FieldType::BitArray, Value::Bits(bits)) => {
            writer.write_uint(16, u64::from(bits.bit_len()))?;
            writer.write_bytes(bits.as_bytes())?;
        }
        (FieldType::UintArray(width), Value::UintArray(elements)) => {
            writer.write_uint(16, elements.len() as u64)?;
            for &element in elements {
                writer.write_uint(u32::from(width), element)?;
            }
        }
        (FieldType::BytesToEnd, Value::Opaque(data)) => writer.write_bytes(data)?,
        // Validation runs before encoding, so a tag mismatch here is a bug.
        (ty, value) => {
            return Err(CodecError::Framing {
                detail: format!("{} value for {} field", value.describe(), ty.describe()),
            });
        }
    }
    Ok(())
}
