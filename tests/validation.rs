//! Validator soundness and completeness over constructed trees.

mod common;

use llrp::{
    message::{Message, Parameter, Value},
    ValidationError,
};
use rstest::rstest;

use common::{basic_rospec, registry};

#[test]
fn aispec_without_stop_trigger_is_missing_a_field() {
    let registry = registry();
    let inventory = Parameter::new(
        &registry,
        "InventoryParameterSpec",
        &[
            ("InventoryParameterSpecID", Value::uint(1234u16)),
            ("ProtocolID", Value::uint(1u8)),
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
    .expect_err("AISpecStopTrigger is mandatory");
    assert!(matches!(
        err,
        ValidationError::MissingField { field, .. } if field == "AISpecStopTrigger"
    ));
}

#[rstest]
#[case(65_535, true)]
#[case(65_536, false)]
fn u16_fields_honour_their_width(#[case] value: u64, #[case] ok: bool) {
    let registry = registry();
    let result = Parameter::new(
        &registry,
        "RFReceiver",
        &[("ReceiverSensitivity", Value::Uint(value))],
        vec![],
    );
    assert_eq!(result.is_ok(), ok);
    if !ok {
        assert!(matches!(
            result.expect_err("out of range"),
            ValidationError::OutOfRange { field, .. } if field == "ReceiverSensitivity"
        ));
    }
}

#[test]
fn wrong_value_tag_is_a_type_mismatch() {
    let registry = registry();
    let err = Parameter::new(
        &registry,
        "ROSpecStartTrigger",
        &[("ROSpecStartTriggerType", Value::Bool(true))],
        vec![],
    )
    .expect_err("a flag is not an integer");
    assert!(matches!(
        err,
        ValidationError::TypeMismatch { field, .. } if field == "ROSpecStartTriggerType"
    ));
}

#[test]
fn undefined_enum_member_names_the_enumeration() {
    let registry = registry();
    let err = Parameter::new(
        &registry,
        "AISpecStopTrigger",
        &[
            ("AISpecStopTriggerType", Value::uint(200u8)),
            ("DurationTrigger", Value::uint(0u32)),
        ],
        vec![],
    )
    .expect_err("200 is not an AISpecStopTriggerType member");
    assert!(matches!(
        err,
        ValidationError::UnknownEnumMember {
            value: 200,
            enumeration: "AISpecStopTriggerType",
            ..
        }
    ));
}

#[test]
fn cardinality_overflow_is_reported() {
    let registry = registry();
    let trigger = |ty: u8| {
        Parameter::new(
            &registry,
            "ROSpecStartTrigger",
            &[("ROSpecStartTriggerType", Value::Uint(u64::from(ty)))],
            vec![],
        )
        .expect("valid start trigger")
    };
    let stop = Parameter::new(
        &registry,
        "ROSpecStopTrigger",
        &[
            ("ROSpecStopTriggerType", Value::uint(0u8)),
            ("DurationTriggerValue", Value::uint(0u32)),
        ],
        vec![],
    )
    .expect("valid stop trigger");

    let err = Parameter::new(
        &registry,
        "ROBoundarySpec",
        &[],
        vec![trigger(0), trigger(1), stop],
    )
    .expect_err("two start triggers exceed the admitted single occurrence");
    assert!(matches!(
        err,
        ValidationError::CardinalityViolation { actual: 2, .. }
    ));
}

#[test]
fn validation_errors_carry_the_full_path() {
    let registry = registry();
    let rospec = basic_rospec(&registry, 1, 1);
    let mut message =
        Message::with_id(&registry, "ADD_ROSPEC", 1, &[], vec![rospec]).expect("valid");

    // Corrupt a deeply nested field and check the reported path.
    let rospec = &mut message.parameters_mut()[0];
    let aispec_idx = rospec
        .children()
        .iter()
        .position(|c| c.name(&registry) == "AISpec")
        .expect("AISpec present");
    let aispec = &mut rospec.children_mut()[aispec_idx];
    let stop = &mut aispec.children_mut()[0];
    let trigger = &mut stop.children_mut()[0];
    *trigger
        .field_mut(&registry, "NumberOfTags")
        .expect("field exists") = Value::Uint(1 << 20);

    let err = llrp::validate::message(&registry, &message).expect_err("tampered value");
    match err {
        ValidationError::OutOfRange { path, field, .. } => {
            assert_eq!(
                path,
                "ADD_ROSPEC.ROSpec.AISpec.AISpecStopTrigger.TagObservationTrigger"
            );
            assert_eq!(field, "NumberOfTags");
        }
        other => panic!("expected OutOfRange, got {other:?}"),
    }
}

#[test]
fn epc_data_with_inconsistent_bit_count_is_rejected() {
    let registry = registry();
    let err = Parameter::new(
        &registry,
        "EPCData",
        &[(
            "EPC",
            Value::Bits(llrp::BitArray::new(vec![0xAB], 96)),
        )],
        vec![],
    )
    .expect_err("one octet cannot hold 96 bits");
    assert!(matches!(err, ValidationError::TypeMismatch { .. }));
}

#[test]
fn signed_fields_reject_out_of_range_magnitudes() {
    let registry = registry();
    Parameter::new(
        &registry,
        "ImpinjReaderTemperature",
        &[("Temperature", Value::int(-40i16))],
        vec![],
    )
    .expect("-40 fits in a s16");
    let err = Parameter::new(
        &registry,
        "ImpinjReaderTemperature",
        &[("Temperature", Value::Int(40_000))],
        vec![],
    )
    .expect_err("40000 exceeds a s16");
    assert!(matches!(err, ValidationError::OutOfRange { .. }));
}

#[test]
fn unsigned_fields_reject_signed_values() {
    let registry = registry();
    let err = Parameter::single(&registry, "ROSpecID", Value::Int(-1))
        .expect_err("a signed value is not an unsigned field");
    assert!(matches!(err, ValidationError::TypeMismatch { .. }));
}
