//! Binary round-trip coverage over realistic message trees.

mod common;

use bytes::Bytes;
use llrp::{
    codec,
    message::{Message, Parameter, Value},
    CodecError, LlrpError,
};

use common::{basic_rospec, registry, status_success, tag_report};

#[test]
fn get_reader_capabilities_round_trips_with_pinned_octets() {
    let registry = registry();
    let request = Message::with_id(
        &registry,
        "GET_READER_CAPABILITIES",
        1,
        &[("RequestedData", Value::uint(0u8))],
        vec![],
    )
    .expect("valid request");

    let frame = codec::encode_message(&registry, &request).expect("encodes");
    assert_eq!(frame.len(), 11);
    assert_eq!(&frame[..2], &[0x04, 0x01], "version 1, type 1");
    assert_eq!(&frame[2..6], &[0, 0, 0, 11], "length covers the whole frame");
    assert_eq!(&frame[6..10], &[0, 0, 0, 1], "message ID 1");
    assert_eq!(frame[10], 0x00, "RequestedData=All");

    let decoded = codec::decode_message(&registry, &frame).expect("decodes");
    assert_eq!(decoded, request);
}

#[test]
fn add_rospec_round_trips_structurally() {
    let registry = registry();
    let message = Message::with_id(
        &registry,
        "ADD_ROSPEC",
        2,
        &[],
        vec![basic_rospec(&registry, 123, 1234)],
    )
    .expect("valid ADD_ROSPEC");

    let frame = codec::encode_message(&registry, &message).expect("encodes");
    let decoded = codec::decode_message(&registry, &frame).expect("decodes");
    assert_eq!(decoded, message);

    let declared = u32::from_be_bytes([frame[2], frame[3], frame[4], frame[5]]);
    assert_eq!(declared as usize, frame.len());
}

#[test]
fn set_reader_config_carries_nested_antenna_configuration() {
    let registry = registry();
    let receiver = Parameter::single(&registry, "RFReceiver", 12u16).expect("valid receiver");
    let transmitter = Parameter::new(
        &registry,
        "RFTransmitter",
        &[
            ("HopTableID", Value::uint(1u16)),
            ("ChannelIndex", Value::uint(1u16)),
            ("TransmitPower", Value::uint(8192u16)),
        ],
        vec![],
    )
    .expect("valid transmitter");
    let antenna = Parameter::new(
        &registry,
        "AntennaConfiguration",
        &[("AntennaID", Value::uint(0u16))],
        vec![receiver, transmitter],
    )
    .expect("valid antenna configuration");
    let message = Message::with_id(&registry, "SET_READER_CONFIG", 3, &[], vec![antenna])
        .expect("valid SET_READER_CONFIG");

    let frame = codec::encode_message(&registry, &message).expect("encodes");
    let decoded = codec::decode_message(&registry, &frame).expect("decodes");
    assert_eq!(decoded, message);

    let antennas = decoded.find_all(&registry, "AntennaConfiguration");
    assert_eq!(antennas.len(), 1);
    assert!(antennas[0].find_first(&registry, "RFReceiver").is_some());
    assert!(antennas[0].find_first(&registry, "RFTransmitter").is_some());
}

#[test]
fn ro_access_report_exposes_three_tags() {
    let registry = registry();
    let epcs: [[u8; 12]; 3] = [
        [0x30, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x01],
        [0x30, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x02],
        [0x30, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x03],
    ];
    let tags = epcs
        .iter()
        .enumerate()
        .map(|(antenna, epc)| tag_report(&registry, *epc, antenna as u16 + 1))
        .collect();
    let report =
        Message::with_id(&registry, "RO_ACCESS_REPORT", 4, &[], tags).expect("valid report");

    let frame = codec::encode_message(&registry, &report).expect("encodes");
    let decoded = codec::decode_message(&registry, &frame).expect("decodes");

    let extracted = decoded.tag_reports(&registry);
    assert_eq!(extracted.len(), 3);
    for (i, tag) in extracted.iter().enumerate() {
        assert_eq!(tag.epc, epcs[i].to_vec());
        assert_eq!(tag.antenna_id, Some(i as u16 + 1));
    }
}

#[test]
fn epc_96_requires_exactly_twelve_octets() {
    let registry = registry();
    // A TagReportData whose EPC_96 TV parameter is cut short: the enclosing
    // TLV region ends before the EPC's twelve octets arrive.
    let epc = Parameter::single(
        &registry,
        "EPC_96",
        Value::epc96([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]),
    )
    .expect("valid EPC");
    let tag = Parameter::new(&registry, "TagReportData", &[], vec![epc]).expect("valid tag");
    let report = Message::with_id(&registry, "RO_ACCESS_REPORT", 5, &[], vec![tag])
        .expect("valid report");
    let frame = codec::encode_message(&registry, &report).expect("encodes");

    // Drop the final octet of the EPC and fix up the lengths.
    let mut truncated = frame.to_vec();
    truncated.pop();
    let total = truncated.len() as u32;
    truncated[2..6].copy_from_slice(&total.to_be_bytes());
    // Leave the inner TLV length untouched: it now overruns its region.
    let err = codec::decode_message(&registry, &truncated)
        .expect_err("an eleven-octet EPC cannot decode");
    assert!(matches!(err, LlrpError::Codec(CodecError::Truncated { .. })));
}

#[test]
fn tlv_length_overrunning_the_message_fails_truncated() {
    let registry = registry();
    let reply = Message::with_id(
        &registry,
        "ADD_ROSPEC_RESPONSE",
        6,
        &[],
        vec![status_success(&registry)],
    )
    .expect("valid reply");
    let frame = codec::encode_message(&registry, &reply).expect("encodes");

    // Inflate the LLRPStatus TLV length beyond the frame.
    let mut tampered = frame.to_vec();
    let status_len_offset = 12; // header(10) + TLV type(2)
    tampered[status_len_offset] = 0x40;
    let err = codec::decode_message(&registry, &tampered)
        .expect_err("the status region overruns the frame");
    assert!(matches!(err, LlrpError::Codec(CodecError::Truncated { .. })));
}

#[test]
fn unknown_custom_extension_survives_binary_round_trip() {
    let registry = registry();
    let payload = Bytes::from_static(&[0x01, 0x02, 0x03, 0x04, 0x05]);
    let opaque = Parameter::custom_opaque(&registry, 31_337, 7, payload.clone())
        .expect("opaque custom constructs");
    // Custom parameters ride in any Custom slot; reader configuration has one.
    let message = Message::with_id(&registry, "GET_READER_CONFIG", 7, &[], vec![opaque])
        .expect("valid request with custom payload");

    let frame = codec::encode_message(&registry, &message).expect("encodes");
    let decoded = codec::decode_message(&registry, &frame).expect("decodes");
    assert_eq!(decoded, message);

    let custom = decoded
        .find_first(&registry, "Custom")
        .expect("the opaque custom survives");
    assert_eq!(
        custom.field(&registry, "VendorIdentifier").and_then(Value::as_u64),
        Some(31_337)
    );
    assert_eq!(
        custom.field(&registry, "Data").and_then(Value::as_opaque),
        Some(&payload)
    );

    let re_encoded = codec::encode_message(&registry, &decoded).expect("re-encodes");
    assert_eq!(re_encoded, frame, "opaque payloads re-emit byte-identically");
}

#[test]
fn impinj_search_mode_round_trips_in_binary() {
    let registry = registry();
    let search = Parameter::new(
        &registry,
        "ImpinjInventorySearchMode",
        &[("InventorySearchMode", Value::uint(1u16))],
        vec![],
    )
    .expect("valid search mode");
    let inventory = Parameter::new(
        &registry,
        "InventoryParameterSpec",
        &[
            ("InventoryParameterSpecID", Value::uint(1u16)),
            ("ProtocolID", Value::uint(1u8)),
        ],
        vec![Parameter::new(
            &registry,
            "AntennaConfiguration",
            &[("AntennaID", Value::uint(0u16))],
            vec![Parameter::new(
                &registry,
                "C1G2InventoryCommand",
                &[("TagInventoryStateAware", Value::Bool(false))],
                vec![search],
            )
            .expect("valid inventory command")],
        )
        .expect("valid antenna configuration")],
    )
    .expect("valid inventory spec");

    let octets = codec::encode_parameter(&registry, &inventory).expect("encodes");
    let parsed = codec::decode_parameter(&registry, &octets).expect("decodes");
    assert_eq!(parsed, inventory);
    assert!(parsed
        .find_first(&registry, "ImpinjInventorySearchMode")
        .is_some());
}

#[test]
fn reader_event_notification_round_trips() {
    let registry = registry();
    let event = common::connection_event(&registry, 0);
    let frame = codec::encode_message(&registry, &event).expect("encodes");
    let decoded = codec::decode_message(&registry, &frame).expect("decodes");
    assert_eq!(decoded, event);
    let attempt = decoded
        .find_first(&registry, "ConnectionAttemptEvent")
        .expect("attempt event present");
    assert_eq!(
        attempt.field(&registry, "Status").and_then(Value::as_u64),
        Some(0)
    );
}
