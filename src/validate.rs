//! Constraint checking for message trees.
//!
//! Validation runs on construction, after decode, and again before encode,
//! so octets are only ever produced from trees that satisfy the
//! specification. Every error names the full path (message, parameter,
//! field) at which it occurred.
//!
//! Sub-parameter order is deliberately not checked: readers are observed to
//! emit parameters out of specification order, so decode preserves arrival
//! order and [`spec_ordered`] re-sorts children when encoding.

use thiserror::Error;

use crate::{
    message::{Message, Parameter, Value},
    spec::{
        Cardinality,
        FieldSpec,
        FieldType,
        LlrpRegistry,
        ParamIdx,
        SubParamRule,
        CUSTOM_TYPE,
    },
};

/// A constraint violation in a message tree.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// No message or parameter spec with the given name exists.
    #[error("unknown message or parameter {name}")]
    UnknownDefinition {
        /// The unresolvable name.
        name: String,
    },

    /// A supplied field name is not declared by the spec.
    #[error("{path}: unknown field {field}")]
    UnknownField {
        /// Path to the owning instance.
        path: String,
        /// The undeclared field name.
        field: String,
    },

    /// A required field or sub-parameter is absent.
    #[error("{path}: missing {field}")]
    MissingField {
        /// Path to the owning instance.
        path: String,
        /// The absent field or sub-parameter name.
        field: String,
    },

    /// A value's tag does not match the field's declared type.
    #[error("{path}: field {field} must be {expected}, not {actual}")]
    TypeMismatch {
        /// Path to the owning instance.
        path: String,
        /// The offending field.
        field: String,
        /// Type the spec declares.
        expected: &'static str,
        /// Tag of the supplied value.
        actual: &'static str,
    },

    /// A value lies outside the representable range of its field.
    #[error("{path}: field {field}={value} outside [{min}, {max}]")]
    OutOfRange {
        /// Path to the owning instance.
        path: String,
        /// The offending field.
        field: String,
        /// The supplied value.
        value: i128,
        /// Minimum admitted value.
        min: i128,
        /// Maximum admitted value.
        max: i128,
    },

    /// An enumerated field holds a value with no defined member.
    #[error("{path}: field {field}={value} is not a member of {enumeration}")]
    UnknownEnumMember {
        /// Path to the owning instance.
        path: String,
        /// The offending field.
        field: String,
        /// The undefined value.
        value: u64,
        /// The constraining enumeration.
        enumeration: &'static str,
    },

    /// A sub-parameter occurs more or less often than its rule admits.
    #[error("{path}: {parameter} occurs {actual} times, outside the admitted range")]
    CardinalityViolation {
        /// Path to the owning instance.
        path: String,
        /// The rule's display name.
        parameter: String,
        /// Minimum admitted occurrences.
        min: usize,
        /// Maximum admitted occurrences, `None` for unbounded.
        max: Option<usize>,
        /// Observed occurrences.
        actual: usize,
    },

    /// A choice group has zero or multiple branches populated.
    #[error("{path}: exactly one of {choice} required, found {actual}")]
    ChoiceViolation {
        /// Path to the owning instance.
        path: String,
        /// The choice group's display name.
        choice: String,
        /// Observed branch count.
        actual: usize,
    },
}

impl ValidationError {
    pub(crate) fn unknown_spec(name: &str) -> Self {
        Self::UnknownDefinition {
            name: name.to_owned(),
        }
    }
}

/// Validate a message tree against the specification.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered, with the path of the
/// offending instance.
pub fn message(registry: &LlrpRegistry, message: &Message) -> Result<(), ValidationError> {
    let spec = registry.message(message.spec);
    let mut path = vec![spec.name];
    check_fields(
        registry,
        &path,
        spec.data_fields(),
        spec.data_field_count(),
        message.fields(),
    )?;
    check_children(registry, &mut path, &spec.children, message.parameters())
}

/// Validate a parameter subtree against the specification.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered, with the path of the
/// offending instance.
pub fn parameter(registry: &LlrpRegistry, parameter: &Parameter) -> Result<(), ValidationError> {
    let mut path = Vec::new();
    parameter_at(registry, &mut path, parameter)
}

fn parameter_at(
    registry: &LlrpRegistry,
    path: &mut Vec<&'static str>,
    parameter: &Parameter,
) -> Result<(), ValidationError> {
    let spec = registry.param(parameter.spec);
    path.push(spec.name);
    check_fields(
        registry,
        path,
        spec.data_fields(),
        spec.data_field_count(),
        parameter.fields(),
    )?;
    check_children(registry, path, &spec.children, parameter.children())?;
    path.pop();
    Ok(())
}

fn join(path: &[&'static str]) -> String { path.join(".") }

fn check_fields<'s>(
    registry: &LlrpRegistry,
    path: &[&'static str],
    specs: impl Iterator<Item = &'s FieldSpec>,
    spec_count: usize,
    values: &[Value],
) -> Result<(), ValidationError> {
    if values.len() != spec_count {
        return Err(ValidationError::MissingField {
            path: join(path),
            field: format!("field slot {}", values.len().min(spec_count)),
        });
    }
    for (field, value) in specs.zip(values) {
        check_field(registry, path, field, value)?;
    }
    Ok(())
}

fn check_field(
    registry: &LlrpRegistry,
    path: &[&'static str],
    field: &FieldSpec,
    value: &Value,
) -> Result<(), ValidationError> {
    let mismatch = |expected: &'static str| ValidationError::TypeMismatch {
        path: join(path),
        field: field.name.to_owned(),
        expected,
        actual: value.describe(),
    };
    match field.ty {
        FieldType::Bool => {
            value.as_bool().ok_or_else(|| mismatch("bool"))?;
        }
        FieldType::Bits(bits) => {
            let v = value.as_u64().ok_or_else(|| mismatch("unsigned integer"))?;
            check_unsigned_range(path, field.name, v, u32::from(bits))?;
        }
        FieldType::U8 => check_uint(path, field, value, 8)?,
        FieldType::U16 => check_uint(path, field, value, 16)?,
        FieldType::U32 => check_uint(path, field, value, 32)?,
        FieldType::U64 => check_uint(path, field, value, 64)?,
        FieldType::S8 => check_sint(path, field, value, 8)?,
        FieldType::S16 => check_sint(path, field, value, 16)?,
        FieldType::S32 => check_sint(path, field, value, 32)?,
        FieldType::S64 => check_sint(path, field, value, 64)?,
        FieldType::Utf8 => {
            let s = value.as_str().ok_or_else(|| mismatch("UTF-8 string"))?;
            if s.len() > usize::from(u16::MAX) {
                return Err(ValidationError::OutOfRange {
                    path: join(path),
                    field: field.name.to_owned(),
                    value: i128::try_from(s.len()).unwrap_or(i128::MAX),
                    min: 0,
                    max: i128::from(u16::MAX),
                });
            }
        }
        FieldType::Epc96 => {
            value.as_epc96().ok_or_else(|| mismatch("96-bit EPC"))?;
        }
        FieldType::BitArray => {
            let bits = value.as_bits().ok_or_else(|| mismatch("bit array"))?;
            if !bits.is_consistent() {
                return Err(mismatch("a consistently sized bit array"));
            }
        }
        FieldType::UintArray(width) => {
            let elements = value
                .as_uints()
                .ok_or_else(|| mismatch("unsigned integer array"))?;
            if elements.len() > usize::from(u16::MAX) {
                return Err(ValidationError::OutOfRange {
                    path: join(path),
                    field: field.name.to_owned(),
                    value: i128::try_from(elements.len()).unwrap_or(i128::MAX),
                    min: 0,
                    max: i128::from(u16::MAX),
                });
            }
            for &element in elements {
                check_unsigned_range(path, field.name, element, u32::from(width))?;
            }
        }
        FieldType::BytesToEnd => {
            value.as_opaque().ok_or_else(|| mismatch("raw octets"))?;
        }
        FieldType::Reserved(_) => unreachable!("reserved fields have no value slot"),
    }
    if let Some(enum_idx) = field.enum_ref {
        let enumeration = registry.enumeration(enum_idx);
        let check_member = |v: u64| -> Result<(), ValidationError> {
            if enumeration.contains(v) {
                Ok(())
            } else {
                Err(ValidationError::UnknownEnumMember {
                    path: join(path),
                    field: field.name.to_owned(),
                    value: v,
                    enumeration: enumeration.name,
                })
            }
        };
        match value {
            Value::Uint(v) => check_member(*v)?,
            Value::UintArray(vs) => {
                for &v in vs {
                    check_member(v)?;
                }
            }
            _ => {}
        }
    }
    Ok(())
}

fn check_uint(
    path: &[&'static str],
    field: &FieldSpec,
    value: &Value,
    bits: u32,
) -> Result<(), ValidationError> {
    let v = value.as_u64().ok_or_else(|| ValidationError::TypeMismatch {
        path: join(path),
        field: field.name.to_owned(),
        expected: "unsigned integer",
        actual: value.describe(),
    })?;
    check_unsigned_range(path, field.name, v, bits)
}

fn check_unsigned_range(
    path: &[&'static str],
    name: &str,
    value: u64,
    bits: u32,
) -> Result<(), ValidationError> {
    // ChannelIndex is 1-based on the wire; zero is never a legal channel.
    let min: u64 = u64::from(name == "ChannelIndex");
    let max = if bits == 64 {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    };
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            path: join(path),
            field: name.to_owned(),
            value: i128::from(value),
            min: i128::from(min),
            max: i128::from(max),
        });
    }
    Ok(())
}

fn check_sint(
    path: &[&'static str],
    field: &FieldSpec,
    value: &Value,
    bits: u32,
) -> Result<(), ValidationError> {
    let v = value.as_i64().ok_or_else(|| ValidationError::TypeMismatch {
        path: join(path),
        field: field.name.to_owned(),
        expected: "signed integer",
        actual: value.describe(),
    })?;
    let min = if bits == 64 {
        i64::MIN
    } else {
        -(1i64 << (bits - 1))
    };
    let max = if bits == 64 {
        i64::MAX
    } else {
        (1i64 << (bits - 1)) - 1
    };
    if v < min || v > max {
        return Err(ValidationError::OutOfRange {
            path: join(path),
            field: field.name.to_owned(),
            value: i128::from(v),
            min: i128::from(min),
            max: i128::from(max),
        });
    }
    Ok(())
}

/// True when `candidate` is admitted by `rule`: a direct target, or any
/// custom extension where the rule admits the generic `Custom` parameter.
pub(crate) fn rule_matches(
    registry: &LlrpRegistry,
    rule: &SubParamRule,
    candidate: ParamIdx,
) -> bool {
    if rule.targets.contains(&candidate) {
        return true;
    }
    registry.param(candidate).is_custom()
        && rule.targets.iter().any(|&target| {
            let target = registry.param(target);
            target.type_num == CUSTOM_TYPE && target.custom.is_none()
        })
}

fn check_children(
    registry: &LlrpRegistry,
    path: &mut Vec<&'static str>,
    rules: &[SubParamRule],
    children: &[Parameter],
) -> Result<(), ValidationError> {
    // Every child must be admitted somewhere in this context.
    for child in children {
        if !rules.iter().any(|rule| rule_matches(registry, rule, child.spec)) {
            return Err(ValidationError::CardinalityViolation {
                path: join(path),
                parameter: registry.param(child.spec).name.to_owned(),
                min: 0,
                max: Some(0),
                actual: 1,
            });
        }
    }
    for rule in rules {
        let count = children
            .iter()
            .filter(|child| rule_matches(registry, rule, child.spec))
            .count();
        if rule.is_choice() && rule.cardinality == Cardinality::One {
            if count != 1 {
                return Err(ValidationError::ChoiceViolation {
                    path: join(path),
                    choice: rule.name.clone(),
                    actual: count,
                });
            }
            continue;
        }
        if count < rule.cardinality.min() {
            return Err(ValidationError::MissingField {
                path: join(path),
                field: rule.name.clone(),
            });
        }
        if let Some(max) = rule.cardinality.max() {
            if count > max {
                return Err(ValidationError::CardinalityViolation {
                    path: join(path),
                    parameter: rule.name.clone(),
                    min: rule.cardinality.min(),
                    max: Some(max),
                    actual: count,
                });
            }
        }
    }
    for child in children {
        parameter_at(registry, path, child)?;
    }
    Ok(())
}

/// Children re-ordered to specification order for emission: each rule's
/// matches in arrival order, rules in spec order.
pub(crate) fn spec_ordered<'a>(
    registry: &LlrpRegistry,
    rules: &[SubParamRule],
    children: &'a [Parameter],
) -> Vec<&'a Parameter> {
    let mut ordered = Vec::with_capacity(children.len());
    let mut placed = vec![false; children.len()];
    for rule in rules {
        for (slot, child) in children.iter().enumerate() {
            if !placed[slot] && rule_matches(registry, rule, child.spec) {
                placed[slot] = true;
                ordered.push(child);
            }
        }
    }
    // Validation guarantees every child matched a rule; keep stragglers
    // anyway so emission never silently drops data.
    for (slot, child) in children.iter().enumerate() {
        if !placed[slot] {
            ordered.push(child);
        }
    }
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{message::Value, spec::LlrpRegistry};

    fn registry() -> LlrpRegistry { LlrpRegistry::load().expect("load built-in tables") }

    #[test]
    fn u16_range_boundary() {
        let registry = registry();
        Parameter::new(
            &registry,
            "RFReceiver",
            &[("ReceiverSensitivity", Value::Uint(65_535))],
            vec![],
        )
        .expect("65535 fits in a u16 field");

        let err = Parameter::new(
            &registry,
            "RFReceiver",
            &[("ReceiverSensitivity", Value::Uint(65_536))],
            vec![],
        )
        .expect_err("65536 does not fit in a u16 field");
        assert!(matches!(
            err,
            ValidationError::OutOfRange { field, value: 65_536, .. } if field == "ReceiverSensitivity"
        ));
    }

    #[test]
    fn booleans_are_not_integers() {
        let registry = registry();
        let err = Parameter::new(
            &registry,
            "EventsAndReports",
            &[("HoldEventsAndReportsUponReconnect", Value::Uint(1))],
            vec![],
        )
        .expect_err("an integer is not a flag");
        assert!(matches!(err, ValidationError::TypeMismatch { expected: "bool", .. }));
    }

    #[test]
    fn enum_membership_is_enforced() {
        let registry = registry();
        let err = Parameter::new(
            &registry,
            "ROSpecStartTrigger",
            &[("ROSpecStartTriggerType", Value::Uint(9))],
            vec![],
        )
        .expect_err("9 is not a ROSpecStartTriggerType member");
        assert!(matches!(
            err,
            ValidationError::UnknownEnumMember {
                value: 9,
                enumeration: "ROSpecStartTriggerType",
                ..
            }
        ));
    }

    #[test]
    fn channel_index_is_one_based() {
        let registry = registry();
        let err = Parameter::new(
            &registry,
            "RFTransmitter",
            &[
                ("HopTableID", Value::Uint(1)),
                ("ChannelIndex", Value::Uint(0)),
                ("TransmitPower", Value::Uint(8192)),
            ],
            vec![],
        )
        .expect_err("channel index zero is not a legal channel");
        assert!(matches!(
            err,
            ValidationError::OutOfRange { field, min: 1, .. } if field == "ChannelIndex"
        ));
    }

    #[test]
    fn missing_required_sub_parameter_names_the_rule() {
        let registry = registry();
        let inventory = Parameter::new(
            &registry,
            "InventoryParameterSpec",
            &[
                ("InventoryParameterSpecID", Value::Uint(1234)),
                ("ProtocolID", Value::Uint(1)),
            ],
            vec![],
        )
        .expect("valid inventory spec");
        let err = Parameter::new(
            &registry,
            "AISpec",
            &[("AntennaIDs", Value::uints(&[0u16, 1, 2]))],
            vec![inventory],
        )
        .expect_err("AISpecStopTrigger is required");
        assert!(matches!(
            err,
            ValidationError::MissingField { field, .. } if field == "AISpecStopTrigger"
        ));
    }

    #[test]
    fn unexpected_sub_parameter_is_rejected() {
        let registry = registry();
        let receiver = Parameter::new(
            &registry,
            "RFReceiver",
            &[("ReceiverSensitivity", Value::Uint(1))],
            vec![],
        )
        .expect("valid receiver");
        let err = Parameter::new(&registry, "ROBoundarySpec", &[], vec![receiver])
            .expect_err("RFReceiver is not admitted inside ROBoundarySpec");
        assert!(matches!(
            err,
            ValidationError::CardinalityViolation { parameter, max: Some(0), .. }
                if parameter == "RFReceiver"
        ));
    }

    #[test]
    fn choice_groups_admit_exactly_one_branch() {
        let registry = registry();
        let err = Parameter::new(&registry, "TagReportData", &[], vec![])
            .expect_err("an EPC branch is required");
        assert!(matches!(
            err,
            ValidationError::ChoiceViolation { choice, actual: 0, .. }
                if choice == "EPCData or EPC_96"
        ));
    }

    #[test]
    fn decode_order_is_not_enforced() {
        let registry = registry();
        let stop = Parameter::new(
            &registry,
            "ROSpecStopTrigger",
            &[
                ("ROSpecStopTriggerType", Value::Uint(0)),
                ("DurationTriggerValue", Value::Uint(0)),
            ],
            vec![],
        )
        .expect("valid stop trigger");
        let start = Parameter::new(
            &registry,
            "ROSpecStartTrigger",
            &[("ROSpecStartTriggerType", Value::Uint(1))],
            vec![],
        )
        .expect("valid start trigger");
        // Stop before start is out of spec order yet accepted.
        Parameter::new(&registry, "ROBoundarySpec", &[], vec![stop, start])
            .expect("order is preserved, not rejected");
    }

    #[test]
    fn spec_ordered_sorts_children_for_emission() {
        let registry = registry();
        let stop = Parameter::new(
            &registry,
            "ROSpecStopTrigger",
            &[
                ("ROSpecStopTriggerType", Value::Uint(0)),
                ("DurationTriggerValue", Value::Uint(0)),
            ],
            vec![],
        )
        .expect("valid stop trigger");
        let start = Parameter::new(
            &registry,
            "ROSpecStartTrigger",
            &[("ROSpecStartTriggerType", Value::Uint(1))],
            vec![],
        )
        .expect("valid start trigger");
        let boundary = Parameter::new(&registry, "ROBoundarySpec", &[], vec![stop, start])
            .expect("valid boundary spec");

        let spec = registry.param(boundary.spec());
        let ordered = spec_ordered(&registry, &spec.children, boundary.children());
        let names: Vec<_> = ordered.iter().map(|p| p.name(&registry)).collect();
        assert_eq!(names, ["ROSpecStartTrigger", "ROSpecStopTrigger"]);
    }
}
