//! Errors raised while loading the specification model.

use thiserror::Error;

/// A defect in the pre-compiled definition tables.
///
/// These indicate a broken build artifact, not a runtime condition: the
/// loader refuses to produce a registry from inconsistent tables.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SpecError {
    /// Two definitions claim the same type number in one namespace.
    #[error("duplicate {namespace} type number {type_num} ({first} and {second})")]
    DuplicateTypeNumber {
        /// Namespace the collision occurred in ("message", "parameter").
        namespace: &'static str,
        /// The colliding type number.
        type_num: u16,
        /// Name of the definition registered first.
        first: &'static str,
        /// Name of the definition registered second.
        second: &'static str,
    },

    /// Two definitions claim the same name.
    #[error("duplicate definition name {name}")]
    DuplicateName {
        /// The colliding name.
        name: &'static str,
    },

    /// Two custom extensions claim the same (vendor, subtype) discriminant.
    #[error("duplicate custom discriminant vendor={vendor} subtype={subtype}")]
    DuplicateCustomKey {
        /// IANA private enterprise number.
        vendor: u32,
        /// Vendor-scoped subtype.
        subtype: u32,
    },

    /// A field references an enumeration that is not defined.
    #[error("{owner}.{field} references unknown enumeration {enumeration}")]
    UnresolvedEnum {
        /// Message or parameter owning the field.
        owner: &'static str,
        /// Field carrying the reference.
        field: &'static str,
        /// The dangling enumeration name.
        enumeration: &'static str,
    },

    /// A sub-parameter rule references a parameter that is not defined.
    #[error("{owner} references unknown parameter {parameter}")]
    UnresolvedParameter {
        /// Message or parameter owning the rule.
        owner: &'static str,
        /// The dangling parameter name.
        parameter: &'static str,
    },

    /// A `response_for` link references a message that is not defined.
    #[error("{owner} is marked as the response to unknown message {request}")]
    UnresolvedResponse {
        /// The response message.
        owner: &'static str,
        /// The dangling request name.
        request: &'static str,
    },

    /// A parameter appears in two choice rules of the same context.
    #[error("{owner}: parameter {parameter} appears in overlapping rules")]
    OverlappingChoice {
        /// Message or parameter owning the rules.
        owner: &'static str,
        /// The doubly-claimed parameter.
        parameter: &'static str,
    },

    /// An enumeration maps two names to one value or two values to one name.
    #[error("enumeration {name} is not bijective")]
    EnumNotBijective {
        /// The malformed enumeration.
        name: &'static str,
    },

    /// A TV parameter uses a variable-length or misaligned field layout.
    #[error("TV parameter {name} does not have a fixed octet-aligned layout")]
    BadTvLayout {
        /// The malformed parameter.
        name: &'static str,
    },

    /// A type number is outside its encoding's admitted range.
    #[error("{name}: type number {type_num} outside the admitted range")]
    TypeNumberOutOfRange {
        /// The malformed definition.
        name: &'static str,
        /// The offending type number.
        type_num: u16,
    },
}
