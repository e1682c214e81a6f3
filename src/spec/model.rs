//! Resolved specification entities.
//!
//! These types are what the rest of the crate consumes: the loader in
//! [`super::registry`] materialises them from the raw definition tables and
//! resolves every cross-reference (enumeration names, sub-parameter names)
//! into direct indices.

use std::collections::HashMap;

/// Type number shared by the generic `Custom` parameter and `CUSTOM_MESSAGE`.
pub const CUSTOM_TYPE: u16 = 1023;

/// Impinj's IANA private enterprise number, used by its vendor extensions.
pub const VENDOR_IMPINJ: u32 = 25882;

/// Wire type of a single field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldType {
    /// Single flag bit.
    Bool,
    /// Sub-byte unsigned integer of 1..=7 bits.
    Bits(u8),
    /// Unsigned 8-bit integer.
    U8,
    /// Signed 8-bit integer.
    S8,
    /// Unsigned 16-bit integer.
    U16,
    /// Signed 16-bit integer.
    S16,
    /// Unsigned 32-bit integer.
    U32,
    /// Signed 32-bit integer.
    S32,
    /// Unsigned 64-bit integer.
    U64,
    /// Signed 64-bit integer.
    S64,
    /// 96-bit EPC identifier (exactly 12 octets).
    Epc96,
    /// UTF-8 string with a `u16` byte-length prefix.
    Utf8,
    /// Bit array with a `u16` bit-count prefix.
    BitArray,
    /// Unsigned integer array with a `u16` element-count prefix; the payload
    /// carries the element width in bits (8, 16, or 32).
    UintArray(u8),
    /// Raw octets running to the end of the enclosing region.
    BytesToEnd,
    /// Reserved padding of the given bit width; always written as zero and
    /// discarded on read.
    Reserved(u8),
}

impl FieldType {
    /// True for padding fields that carry no value.
    #[must_use]
    pub const fn is_reserved(self) -> bool { matches!(self, Self::Reserved(_)) }

    /// Bit width of fixed-width types; `None` for variable-length ones.
    #[must_use]
    pub const fn bit_width(self) -> Option<u32> {
        match self {
            Self::Bool => Some(1),
            Self::Bits(n) | Self::Reserved(n) => Some(n as u32),
            Self::U8 | Self::S8 => Some(8),
            Self::U16 | Self::S16 => Some(16),
            Self::U32 | Self::S32 => Some(32),
            Self::U64 | Self::S64 => Some(64),
            Self::Epc96 => Some(96),
            Self::Utf8 | Self::BitArray | Self::UintArray(_) | Self::BytesToEnd => None,
        }
    }

    /// Short human-readable name used in error messages.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Bits(_) => "unsigned integer",
            Self::U8 | Self::U16 | Self::U32 | Self::U64 => "unsigned integer",
            Self::S8 | Self::S16 | Self::S32 | Self::S64 => "signed integer",
            Self::Epc96 => "96-bit EPC",
            Self::Utf8 => "UTF-8 string",
            Self::BitArray => "bit array",
            Self::UintArray(_) => "unsigned integer array",
            Self::BytesToEnd => "raw octets",
            Self::Reserved(_) => "reserved",
        }
    }
}

/// Index of an [`EnumSpec`] in the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EnumIdx(pub(crate) u16);

/// Index of a [`ParamSpec`] in the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ParamIdx(pub(crate) u16);

/// Index of a [`MessageSpec`] in the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MsgIdx(pub(crate) u16);

/// A resolved field definition.
#[derive(Clone, Debug)]
pub struct FieldSpec {
    /// Field name as it appears in the LLRP definitions.
    pub name: &'static str,
    /// Wire type.
    pub ty: FieldType,
    /// Enumeration constraining this field's values, if any.
    pub enum_ref: Option<EnumIdx>,
}

/// A resolved enumeration: a bijective symbolic-name <-> value mapping.
#[derive(Clone, Debug)]
pub struct EnumSpec {
    /// Enumeration name.
    pub name: &'static str,
    /// Width in bits of the underlying integer.
    pub bits: u8,
    /// Members in definition order.
    pub members: &'static [(u64, &'static str)],
    by_value: HashMap<u64, &'static str>,
    by_name: HashMap<&'static str, u64>,
}

impl EnumSpec {
    pub(crate) fn new(
        name: &'static str,
        bits: u8,
        members: &'static [(u64, &'static str)],
    ) -> Self {
        let by_value = members.iter().map(|&(v, n)| (v, n)).collect();
        let by_name = members.iter().map(|&(v, n)| (n, v)).collect();
        Self {
            name,
            bits,
            members,
            by_value,
            by_name,
        }
    }

    /// Symbolic name of `value`, if defined.
    #[must_use]
    pub fn name_of(&self, value: u64) -> Option<&'static str> {
        self.by_value.get(&value).copied()
    }

    /// Integer value of the member called `name`, if defined.
    #[must_use]
    pub fn value_of(&self, name: &str) -> Option<u64> { self.by_name.get(name).copied() }

    /// True when `value` is a defined member.
    #[must_use]
    pub fn contains(&self, value: u64) -> bool { self.by_value.contains_key(&value) }
}

/// How many instances of a sub-parameter a context admits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cardinality {
    /// Exactly one.
    One,
    /// At most one.
    ZeroOrOne,
    /// Any number, including none.
    ZeroOrMore,
    /// At least one.
    OneOrMore,
}

impl Cardinality {
    /// Minimum admitted count.
    #[must_use]
    pub const fn min(self) -> usize {
        match self {
            Self::One | Self::OneOrMore => 1,
            Self::ZeroOrOne | Self::ZeroOrMore => 0,
        }
    }

    /// Maximum admitted count, `None` for unbounded.
    #[must_use]
    pub const fn max(self) -> Option<usize> {
        match self {
            Self::One | Self::ZeroOrOne => Some(1),
            Self::OneOrMore | Self::ZeroOrMore => None,
        }
    }
}

/// A resolved sub-parameter rule.
///
/// `targets` holds a single parameter for plain rules and every branch of a
/// choice group for choice rules. A rule targeting the generic `Custom`
/// parameter admits any registered or opaque custom extension.
#[derive(Clone, Debug)]
pub struct SubParamRule {
    /// Display name: the parameter name, or the branches joined for choices.
    pub name: String,
    /// Admitted parameter specs.
    pub targets: Vec<ParamIdx>,
    /// Admitted occurrence count across all targets.
    pub cardinality: Cardinality,
}

impl SubParamRule {
    /// True for choice-group rules ("exactly one of" when cardinality is
    /// [`Cardinality::One`]).
    #[must_use]
    pub fn is_choice(&self) -> bool { self.targets.len() > 1 }
}

/// TV or TLV parameter encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    /// Type-value: one-octet `1|type(7)` header, fixed field layout.
    Tv,
    /// Type-length-value: `Rsvd(6)|Type(10)|Length(16)` header, nesting.
    Tlv,
}

/// Discriminant of a custom (vendor extension) parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CustomParamKey {
    /// IANA private enterprise number.
    pub vendor: u32,
    /// Vendor-scoped parameter subtype.
    pub subtype: u32,
}

/// Discriminant of a custom (vendor extension) message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CustomMessageKey {
    /// IANA private enterprise number.
    pub vendor: u32,
    /// Vendor-scoped message subtype.
    pub subtype: u8,
}

/// A resolved parameter definition.
#[derive(Clone, Debug)]
pub struct ParamSpec {
    /// Parameter name.
    pub name: &'static str,
    /// LLRP type number (1..=127 TV, 128..=1023 TLV).
    pub type_num: u16,
    /// Wire encoding, derived from the type number.
    pub encoding: Encoding,
    /// Vendor discriminant for custom extensions; their `type_num` is 1023
    /// and the codec emits the discriminant ahead of `fields`.
    pub custom: Option<CustomParamKey>,
    /// Fields in wire order, including reserved padding.
    pub fields: Vec<FieldSpec>,
    /// Sub-parameter rules in specification order.
    pub children: Vec<SubParamRule>,
    /// For TV parameters: total encoded size in octets including the type
    /// octet. Zero for TLV parameters.
    pub tv_octets: usize,
}

impl ParamSpec {
    /// Fields that carry values (reserved padding excluded).
    pub fn data_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| !f.ty.is_reserved())
    }

    /// Number of value-carrying fields.
    #[must_use]
    pub fn data_field_count(&self) -> usize { self.data_fields().count() }

    /// Position among data fields of the field called `name`.
    #[must_use]
    pub fn data_field_position(&self, name: &str) -> Option<usize> {
        self.data_fields().position(|f| f.name == name)
    }

    /// True for the generic opaque `Custom` parameter and every registered
    /// vendor extension.
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        self.custom.is_some() || self.type_num == CUSTOM_TYPE
    }
}

/// A resolved message definition.
#[derive(Clone, Debug)]
pub struct MessageSpec {
    /// Message name.
    pub name: &'static str,
    /// LLRP message type number (0..=1023).
    pub type_num: u16,
    /// Vendor discriminant for custom messages; their `type_num` is 1023.
    pub custom: Option<CustomMessageKey>,
    /// Fields in wire order, including reserved padding.
    pub fields: Vec<FieldSpec>,
    /// Sub-parameter rules in specification order.
    pub children: Vec<SubParamRule>,
    /// The request this message answers, for reply correlation.
    pub response_for: Option<MsgIdx>,
}

impl MessageSpec {
    /// Fields that carry values (reserved padding excluded).
    pub fn data_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| !f.ty.is_reserved())
    }

    /// Number of value-carrying fields.
    #[must_use]
    pub fn data_field_count(&self) -> usize { self.data_fields().count() }

    /// Position among data fields of the field called `name`.
    #[must_use]
    pub fn data_field_position(&self, name: &str) -> Option<usize> {
        self.data_fields().position(|f| f.name == name)
    }
}
