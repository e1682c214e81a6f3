//! Runtime message trees.
//!
//! A [`Message`] or [`Parameter`] is a tagged record: a reference into the
//! specification model, the field values in wire order, and the nested
//! sub-parameters. There is no generated type per message; the codec,
//! validator, and XML layers all traverse this one uniform shape.
//!
//! Trees validate on construction. Mutation is possible through
//! [`Parameter::field_mut`] and friends, and the codec re-validates before
//! emitting octets, so an invalid tree can never reach the wire.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use bytes::Bytes;

use crate::{
    spec::{FieldType, LlrpRegistry, MsgIdx, ParamIdx},
    validate::{self, ValidationError},
};

/// Process-wide allocator for message IDs assigned outside a session.
static NEXT_MESSAGE_ID: AtomicU32 = AtomicU32::new(1);

pub(crate) fn next_message_id() -> u32 { NEXT_MESSAGE_ID.fetch_add(1, Ordering::Relaxed) }

/// A bit array with an explicit length in bits.
///
/// LLRP masks and variable-length EPCs are not whole octets; the trailing
/// bits of the final octet are padding and must be zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BitArray {
    bytes: Vec<u8>,
    bit_len: u16,
}

impl BitArray {
    /// Build a bit array from packed octets and a length in bits.
    ///
    /// `bytes` must hold exactly `bit_len.div_ceil(8)` octets.
    #[must_use]
    pub fn new(bytes: Vec<u8>, bit_len: u16) -> Self { Self { bytes, bit_len } }

    /// Build a whole-octet bit array.
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let bit_len = u16::try_from(bytes.len() * 8).unwrap_or(u16::MAX);
        Self { bytes, bit_len }
    }

    /// Packed octets, most significant bit first.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] { &self.bytes }

    /// Length in bits.
    #[must_use]
    pub const fn bit_len(&self) -> u16 { self.bit_len }

    /// True when the octet count matches the declared bit length.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.bytes.len() == (self.bit_len as usize).div_ceil(8)
    }
}

/// A field value in its semantic type.
///
/// Booleans are a distinct tag from integers: the validator rejects an
/// integer where the specification declares a flag, and vice versa.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Single flag bit.
    Bool(bool),
    /// Unsigned integer of any declared width.
    Uint(u64),
    /// Signed integer of any declared width.
    Int(i64),
    /// UTF-8 string.
    Str(String),
    /// 96-bit EPC identifier.
    Epc96([u8; 12]),
    /// Bit array with explicit length.
    Bits(BitArray),
    /// Unsigned integer array.
    UintArray(Vec<u64>),
    /// Raw octets (custom payloads, `bytes_to_end` fields).
    Opaque(Bytes),
}

impl Value {
    /// Shorthand for [`Value::Uint`].
    #[must_use]
    pub fn uint(value: impl Into<u64>) -> Self { Self::Uint(value.into()) }

    /// Shorthand for [`Value::Int`].
    #[must_use]
    pub fn int(value: impl Into<i64>) -> Self { Self::Int(value.into()) }

    /// Shorthand for [`Value::Bool`].
    #[must_use]
    pub const fn boolean(value: bool) -> Self { Self::Bool(value) }

    /// Shorthand for [`Value::Str`].
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self { Self::Str(value.into()) }

    /// Shorthand for [`Value::Epc96`].
    #[must_use]
    pub const fn epc96(bytes: [u8; 12]) -> Self { Self::Epc96(bytes) }

    /// Shorthand for a [`Value::UintArray`] from any unsigned elements.
    #[must_use]
    pub fn uints<T: Into<u64> + Copy>(values: &[T]) -> Self {
        Self::UintArray(values.iter().map(|&v| v.into()).collect())
    }

    /// The contained unsigned integer, if this is one.
    #[must_use]
    pub const fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Uint(v) => Some(*v),
            _ => None,
        }
    }

    /// The contained signed integer, if this is one.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// The contained flag, if this is one.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// The contained string, if this is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(v) => Some(v),
            _ => None,
        }
    }

    /// The contained EPC, if this is one.
    #[must_use]
    pub const fn as_epc96(&self) -> Option<&[u8; 12]> {
        match self {
            Self::Epc96(v) => Some(v),
            _ => None,
        }
    }

    /// The contained bit array, if this is one.
    #[must_use]
    pub const fn as_bits(&self) -> Option<&BitArray> {
        match self {
            Self::Bits(v) => Some(v),
            _ => None,
        }
    }

    /// The contained array, if this is one.
    #[must_use]
    pub fn as_uints(&self) -> Option<&[u64]> {
        match self {
            Self::UintArray(v) => Some(v),
            _ => None,
        }
    }

    /// The contained raw octets, if this is one.
    #[must_use]
    pub fn as_opaque(&self) -> Option<&Bytes> {
        match self {
            Self::Opaque(v) => Some(v),
            _ => None,
        }
    }

    /// Short tag name used in error messages.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Uint(_) => "unsigned integer",
            Self::Int(_) => "signed integer",
            Self::Str(_) => "UTF-8 string",
            Self::Epc96(_) => "96-bit EPC",
            Self::Bits(_) => "bit array",
            Self::UintArray(_) => "unsigned integer array",
            Self::Opaque(_) => "raw octets",
        }
    }

    /// Natural default for a field of type `ty`, used when construction
    /// omits the field.
    pub(crate) fn default_for(ty: FieldType) -> Self {
        match ty {
            FieldType::Bool => Self::Bool(false),
            FieldType::Bits(_)
            | FieldType::U8
            | FieldType::U16
            | FieldType::U32
            | FieldType::U64 => Self::Uint(0),
            FieldType::S8 | FieldType::S16 | FieldType::S32 | FieldType::S64 => Self::Int(0),
            FieldType::Utf8 => Self::Str(String::new()),
            FieldType::Epc96 => Self::Epc96([0; 12]),
            FieldType::BitArray => Self::Bits(BitArray::default()),
            FieldType::UintArray(_) => Self::UintArray(Vec::new()),
            FieldType::BytesToEnd => Self::Opaque(Bytes::new()),
            FieldType::Reserved(_) => unreachable!("reserved fields carry no value"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self { Self::Bool(value) }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self { Self::Uint(value.into()) }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self { Self::Uint(value.into()) }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self { Self::Uint(value.into()) }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self { Self::Uint(value) }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self { Self::Int(value.into()) }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self { Self::Int(value.into()) }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self { Self::Int(value) }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self { Self::Str(value.to_owned()) }
}

impl From<String> for Value {
    fn from(value: String) -> Self { Self::Str(value) }
}

impl From<BitArray> for Value {
    fn from(value: BitArray) -> Self { Self::Bits(value) }
}

/// A nested LLRP parameter instance.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub(crate) spec: ParamIdx,
    /// Values aligned with the spec's data fields (reserved padding has no
    /// slot).
    pub(crate) fields: Vec<Value>,
    pub(crate) children: Vec<Parameter>,
}

impl Parameter {
    /// Construct and validate a parameter.
    ///
    /// Fields are supplied by name; omitted fields take their type's natural
    /// default. Children are nested parameters in any order (encoding
    /// re-sorts them to specification order).
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the offending field or
    /// sub-parameter when the instance violates the specification.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrp::{
    ///     message::{Parameter, Value},
    ///     spec::LlrpRegistry,
    /// };
    ///
    /// let registry = LlrpRegistry::load().expect("load");
    /// let receiver = Parameter::new(
    ///     &registry,
    ///     "RFReceiver",
    ///     &[("ReceiverSensitivity", Value::uint(12u16))],
    ///     vec![],
    /// )
    /// .expect("a valid RFReceiver");
    /// assert_eq!(
    ///     receiver.field(&registry, "ReceiverSensitivity"),
    ///     Some(&Value::Uint(12))
    /// );
    /// ```
    pub fn new(
        registry: &LlrpRegistry,
        name: &str,
        fields: &[(&str, Value)],
        children: Vec<Parameter>,
    ) -> Result<Self, ValidationError> {
        let spec = registry
            .param_by_name(name)
            .ok_or_else(|| ValidationError::unknown_spec(name))?;
        let field_values = resolve_named_fields(
            name,
            registry.param(spec).data_fields().map(|f| (f.name, f.ty)),
            fields,
        )?;
        let parameter = Self {
            spec,
            fields: field_values,
            children,
        };
        validate::parameter(registry, &parameter)?;
        Ok(parameter)
    }

    /// Construct a parameter with a single positional value.
    ///
    /// Only valid for specs with exactly one field and no sub-parameters;
    /// the value is expanded to the named field.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the spec is not single-field or
    /// the value violates its constraints.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrp::{message::Parameter, spec::LlrpRegistry};
    ///
    /// let registry = LlrpRegistry::load().expect("load");
    /// let rospec_id = Parameter::single(&registry, "ROSpecID", 123u32).expect("valid");
    /// assert_eq!(
    ///     rospec_id
    ///         .field(&registry, "ROSpecID")
    ///         .and_then(|v| v.as_u64()),
    ///     Some(123)
    /// );
    /// ```
    pub fn single(
        registry: &LlrpRegistry,
        name: &str,
        value: impl Into<Value>,
    ) -> Result<Self, ValidationError> {
        let spec = registry
            .param_by_name(name)
            .ok_or_else(|| ValidationError::unknown_spec(name))?;
        let param_spec = registry.param(spec);
        if param_spec.data_field_count() != 1 || !param_spec.children.is_empty() {
            return Err(ValidationError::TypeMismatch {
                path: name.to_owned(),
                field: name.to_owned(),
                expected: "a single-field parameter",
                actual: "a multi-field parameter",
            });
        }
        let field_name = param_spec
            .data_fields()
            .next()
            .expect("single-field spec has a field")
            .name;
        Self::new(registry, name, &[(field_name, value.into())], vec![])
    }

    /// Construct an opaque custom parameter for an unregistered vendor
    /// extension. Its payload is re-emitted byte-identically.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the values violate the generic
    /// `Custom` spec (they cannot, for any payload).
    pub fn custom_opaque(
        registry: &LlrpRegistry,
        vendor: u32,
        subtype: u32,
        data: Bytes,
    ) -> Result<Self, ValidationError> {
        Self::new(
            registry,
            "Custom",
            &[
                ("VendorIdentifier", Value::Uint(u64::from(vendor))),
                ("ParameterSubtype", Value::Uint(u64::from(subtype))),
                ("Data", Value::Opaque(data)),
            ],
            vec![],
        )
    }

    pub(crate) fn from_parts(spec: ParamIdx, fields: Vec<Value>, children: Vec<Parameter>) -> Self {
        Self {
            spec,
            fields,
            children,
        }
    }

    /// Specification index of this instance.
    #[must_use]
    pub const fn spec(&self) -> ParamIdx { self.spec }

    /// Specification name of this instance.
    #[must_use]
    pub fn name(&self, registry: &LlrpRegistry) -> &'static str { registry.param(self.spec).name }

    /// Value of the field called `name`, if the spec declares it.
    #[must_use]
    pub fn field(&self, registry: &LlrpRegistry, name: &str) -> Option<&Value> {
        let pos = registry.param(self.spec).data_field_position(name)?;
        self.fields.get(pos)
    }

    /// Mutable access to the field called `name`.
    ///
    /// The tree must be re-validated before encoding; the codec does this
    /// unconditionally.
    #[must_use]
    pub fn field_mut(&mut self, registry: &LlrpRegistry, name: &str) -> Option<&mut Value> {
        let pos = registry.param(self.spec).data_field_position(name)?;
        self.fields.get_mut(pos)
    }

    /// Field values in spec order.
    #[must_use]
    pub fn fields(&self) -> &[Value] { &self.fields }

    /// Nested sub-parameters in arrival order.
    #[must_use]
    pub fn children(&self) -> &[Parameter] { &self.children }

    /// Mutable access to the nested sub-parameters.
    pub fn children_mut(&mut self) -> &mut Vec<Parameter> { &mut self.children }

    /// Append a sub-parameter, returning `self` for chaining.
    ///
    /// The tree must be re-validated before encoding.
    #[must_use]
    pub fn with_child(mut self, child: Parameter) -> Self {
        self.children.push(child);
        self
    }

    /// First descendant (depth-first) whose spec is called `name`.
    #[must_use]
    pub fn find_first<'a>(&'a self, registry: &LlrpRegistry, name: &str) -> Option<&'a Parameter> {
        for child in &self.children {
            if child.name(registry) == name {
                return Some(child);
            }
            if let Some(found) = child.find_first(registry, name) {
                return Some(found);
            }
        }
        None
    }

    /// Every descendant (depth-first) whose spec is called `name`.
    #[must_use]
    pub fn find_all<'a>(&'a self, registry: &LlrpRegistry, name: &str) -> Vec<&'a Parameter> {
        let mut found = Vec::new();
        self.collect_named(registry, name, &mut found);
        found
    }

    fn collect_named<'a>(
        &'a self,
        registry: &LlrpRegistry,
        name: &str,
        found: &mut Vec<&'a Parameter>,
    ) {
        for child in &self.children {
            if child.name(registry) == name {
                found.push(child);
            }
            child.collect_named(registry, name, found);
        }
    }
}

/// A top-level LLRP message instance.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub(crate) spec: MsgIdx,
    pub(crate) id: u32,
    pub(crate) fields: Vec<Value>,
    pub(crate) params: Vec<Parameter>,
}

impl Message {
    /// Construct and validate a message, drawing a fresh message ID from the
    /// process-wide counter.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the offending field or
    /// sub-parameter when the instance violates the specification.
    pub fn new(
        registry: &LlrpRegistry,
        name: &str,
        fields: &[(&str, Value)],
        params: Vec<Parameter>,
    ) -> Result<Self, ValidationError> {
        Self::with_id(registry, name, next_message_id(), fields, params)
    }

    /// Construct and validate a message with an explicit message ID.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the offending field or
    /// sub-parameter when the instance violates the specification.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrp::{
    ///     message::{Message, Value},
    ///     spec::LlrpRegistry,
    /// };
    ///
    /// let registry = LlrpRegistry::load().expect("load");
    /// let request = Message::with_id(
    ///     &registry,
    ///     "GET_READER_CAPABILITIES",
    ///     1,
    ///     &[("RequestedData", Value::uint(0u8))],
    ///     vec![],
    /// )
    /// .expect("a valid request");
    /// assert_eq!(request.message_id(), 1);
    /// ```
    pub fn with_id(
        registry: &LlrpRegistry,
        name: &str,
        id: u32,
        fields: &[(&str, Value)],
        params: Vec<Parameter>,
    ) -> Result<Self, ValidationError> {
        let spec = registry
            .message_by_name(name)
            .ok_or_else(|| ValidationError::unknown_spec(name))?;
        let field_values = resolve_named_fields(
            name,
            registry.message(spec).data_fields().map(|f| (f.name, f.ty)),
            fields,
        )?;
        let message = Self {
            spec,
            id,
            fields: field_values,
            params,
        };
        validate::message(registry, &message)?;
        Ok(message)
    }

    pub(crate) fn from_parts(
        spec: MsgIdx,
        id: u32,
        fields: Vec<Value>,
        params: Vec<Parameter>,
    ) -> Self {
        Self {
            spec,
            id,
            fields,
            params,
        }
    }

    /// Specification index of this instance.
    #[must_use]
    pub const fn spec(&self) -> MsgIdx { self.spec }

    /// Specification name of this instance.
    #[must_use]
    pub fn name(&self, registry: &LlrpRegistry) -> &'static str {
        registry.message(self.spec).name
    }

    /// The 32-bit message ID carried in the framing header.
    #[must_use]
    pub const fn message_id(&self) -> u32 { self.id }

    /// Replace the message ID. Sessions stamp their own IDs on `transact`.
    pub fn set_message_id(&mut self, id: u32) { self.id = id; }

    /// Value of the field called `name`, if the spec declares it.
    #[must_use]
    pub fn field(&self, registry: &LlrpRegistry, name: &str) -> Option<&Value> {
        let pos = registry.message(self.spec).data_field_position(name)?;
        self.fields.get(pos)
    }

    /// Mutable access to the field called `name`.
    ///
    /// The tree must be re-validated before encoding; the codec does this
    /// unconditionally.
    #[must_use]
    pub fn field_mut(&mut self, registry: &LlrpRegistry, name: &str) -> Option<&mut Value> {
        let pos = registry.message(self.spec).data_field_position(name)?;
        self.fields.get_mut(pos)
    }

    /// Field values in spec order.
    #[must_use]
    pub fn fields(&self) -> &[Value] { &self.fields }

    /// Top-level parameters in arrival order.
    #[must_use]
    pub fn parameters(&self) -> &[Parameter] { &self.params }

    /// Mutable access to the top-level parameters.
    pub fn parameters_mut(&mut self) -> &mut Vec<Parameter> { &mut self.params }

    /// First parameter (depth-first) whose spec is called `name`.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrp::{
    ///     message::{Message, Parameter, Value},
    ///     spec::LlrpRegistry,
    /// };
    ///
    /// let registry = LlrpRegistry::load().expect("load");
    /// let status = Parameter::new(
    ///     &registry,
    ///     "LLRPStatus",
    ///     &[("StatusCode", Value::uint(0u16))],
    ///     vec![],
    /// )
    /// .expect("valid status");
    /// let reply = Message::with_id(&registry, "ADD_ROSPEC_RESPONSE", 9, &[], vec![status])
    ///     .expect("valid reply");
    /// assert!(reply.find_first(&registry, "LLRPStatus").is_some());
    /// ```
    #[must_use]
    pub fn find_first<'a>(&'a self, registry: &LlrpRegistry, name: &str) -> Option<&'a Parameter> {
        for param in &self.params {
            if param.name(registry) == name {
                return Some(param);
            }
            if let Some(found) = param.find_first(registry, name) {
                return Some(found);
            }
        }
        None
    }

    /// Every parameter (depth-first) whose spec is called `name`.
    #[must_use]
    pub fn find_all<'a>(&'a self, registry: &LlrpRegistry, name: &str) -> Vec<&'a Parameter> {
        let mut found = Vec::new();
        for param in &self.params {
            if param.name(registry) == name {
                found.push(param);
            }
            param.collect_named(registry, name, &mut found);
        }
        found
    }

    /// For responses: whether the carried `LLRPStatus` reports `M_Success`.
    ///
    /// Returns `false` when no `LLRPStatus` parameter is present.
    #[must_use]
    pub fn is_success(&self, registry: &LlrpRegistry) -> bool {
        self.find_first(registry, "LLRPStatus")
            .and_then(|status| status.field(registry, "StatusCode"))
            .and_then(Value::as_u64)
            == Some(0)
    }

    /// Extract per-tag data from an `RO_ACCESS_REPORT`.
    ///
    /// Returns one entry per `TagReportData`, with the commonly enabled
    /// report parameters flattened out.
    #[must_use]
    pub fn tag_reports(&self, registry: &LlrpRegistry) -> Vec<TagReport> {
        self.find_all(registry, "TagReportData")
            .into_iter()
            .map(|tag| TagReport::from_parameter(registry, tag))
            .collect()
    }

    /// Wrap the message for pretty printing.
    #[must_use]
    pub fn display<'a>(&'a self, registry: &'a LlrpRegistry) -> MessageDisplay<'a> {
        MessageDisplay {
            message: self,
            registry,
        }
    }
}

/// Flattened per-tag data from one `TagReportData` parameter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagReport {
    /// EPC identifier octets (12 for `EPC_96`, variable for `EPCData`).
    pub epc: Vec<u8>,
    /// Antenna the tag was seen on, when reported.
    pub antenna_id: Option<u16>,
    /// Peak received signal strength in dBm, when reported.
    pub peak_rssi: Option<i8>,
    /// Channel index the tag was seen on, when reported.
    pub channel_index: Option<u16>,
    /// First-seen UTC timestamp in microseconds, when reported.
    pub first_seen_utc: Option<u64>,
    /// Last-seen UTC timestamp in microseconds, when reported.
    pub last_seen_utc: Option<u64>,
    /// Observation count, when reported.
    pub seen_count: Option<u16>,
}

impl TagReport {
    #[allow(clippy::cast_possible_truncation)]
    fn from_parameter(registry: &LlrpRegistry, tag: &Parameter) -> Self {
        let mut report = Self::default();
        for child in tag.children() {
            let first = child.fields().first();
            match child.name(registry) {
                "EPC_96" => {
                    if let Some(Value::Epc96(epc)) = first {
                        report.epc = epc.to_vec();
                    }
                }
                "EPCData" => {
                    if let Some(Value::Bits(bits)) = first {
                        report.epc = bits.as_bytes().to_vec();
                    }
                }
                "AntennaID" => {
                    report.antenna_id = first.and_then(Value::as_u64).map(|v| v as u16);
                }
                "PeakRSSI" => {
                    report.peak_rssi = first.and_then(Value::as_i64).map(|v| v as i8);
                }
                "ChannelIndex" => {
                    report.channel_index = first.and_then(Value::as_u64).map(|v| v as u16);
                }
                "FirstSeenTimestampUTC" => {
                    report.first_seen_utc = first.and_then(Value::as_u64);
                }
                "LastSeenTimestampUTC" => {
                    report.last_seen_utc = first.and_then(Value::as_u64);
                }
                "TagSeenCount" => {
                    report.seen_count = first.and_then(Value::as_u64).map(|v| v as u16);
                }
                _ => {}
            }
        }
        report
    }
}

/// Pretty-printing adaptor tying a message to its registry.
pub struct MessageDisplay<'a> {
    message: &'a Message,
    registry: &'a LlrpRegistry,
}

impl fmt::Display for MessageDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spec = self.registry.message(self.message.spec);
        writeln!(f, "{} {{", spec.name)?;
        writeln!(f, "    MessageID: {}", self.message.id)?;
        for (field, value) in spec.data_fields().zip(&self.message.fields) {
            write_field(f, self.registry, 1, field, value)?;
        }
        for param in &self.message.params {
            write_parameter(f, self.registry, 1, param)?;
        }
        write!(f, "}}")
    }
}

fn write_parameter(
    f: &mut fmt::Formatter<'_>,
    registry: &LlrpRegistry,
    depth: usize,
    parameter: &Parameter,
) -> fmt::Result {
    let spec = registry.param(parameter.spec);
    let pad = "    ".repeat(depth);
    if parameter.fields.is_empty() && parameter.children.is_empty() {
        return writeln!(f, "{pad}{} {{}}", spec.name);
    }
    writeln!(f, "{pad}{} {{", spec.name)?;
    for (field, value) in spec.data_fields().zip(&parameter.fields) {
        write_field(f, registry, depth + 1, field, value)?;
    }
    for child in &parameter.children {
        write_parameter(f, registry, depth + 1, child)?;
    }
    writeln!(f, "{pad}}}")
}

fn write_field(
    f: &mut fmt::Formatter<'_>,
    registry: &LlrpRegistry,
    depth: usize,
    field: &crate::spec::FieldSpec,
    value: &Value,
) -> fmt::Result {
    let pad = "    ".repeat(depth);
    // Enumerated values print symbolically when the value is a member.
    if let (Some(enum_idx), Some(raw)) = (field.enum_ref, value.as_u64()) {
        if let Some(member) = registry.enumeration(enum_idx).name_of(raw) {
            return writeln!(f, "{pad}{}: {member}", field.name);
        }
    }
    match value {
        Value::Bool(v) => writeln!(f, "{pad}{}: {v}", field.name),
        Value::Uint(v) => writeln!(f, "{pad}{}: {v}", field.name),
        Value::Int(v) => writeln!(f, "{pad}{}: {v}", field.name),
        Value::Str(v) => writeln!(f, "{pad}{}: {v:?}", field.name),
        Value::Epc96(v) => writeln!(f, "{pad}{}: {}", field.name, hex(v)),
        Value::Bits(v) => writeln!(
            f,
            "{pad}{}: {} ({} bits)",
            field.name,
            hex(v.as_bytes()),
            v.bit_len()
        ),
        Value::UintArray(v) => writeln!(f, "{pad}{}: {v:?}", field.name),
        Value::Opaque(v) => writeln!(f, "{pad}{}: {} octets", field.name, v.len()),
    }
}

fn hex(bytes: &[u8]) -> String { bytes.iter().map(|b| format!("{b:02X}")).collect() }

/// Resolve named field inputs against a spec's data fields, filling defaults
/// for omissions and rejecting unknown names.
fn resolve_named_fields(
    owner: &str,
    spec_fields: impl Iterator<Item = (&'static str, FieldType)>,
    named: &[(&str, Value)],
) -> Result<Vec<Value>, ValidationError> {
    let spec_fields: Vec<(&'static str, FieldType)> = spec_fields.collect();
    for (name, _) in named {
        if !spec_fields.iter().any(|(fname, _)| fname == name) {
            return Err(ValidationError::UnknownField {
                path: owner.to_owned(),
                field: (*name).to_owned(),
            });
        }
    }
    Ok(spec_fields
        .iter()
        .map(|(fname, ty)| {
            named
                .iter()
                .find(|(name, _)| name == fname)
                .map_or_else(|| Value::default_for(*ty), |(_, value)| value.clone())
        })
        .collect())
}
