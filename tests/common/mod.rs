//! Shared fixtures for the integration suites.

#![allow(dead_code)]

use std::sync::Arc;

use bytes::Bytes;
use llrp::{
    codec,
    message::{Message, Parameter, Value},
    spec::LlrpRegistry,
};

pub fn registry() -> Arc<LlrpRegistry> {
    Arc::new(LlrpRegistry::load().expect("built-in definition tables load"))
}

/// A successful `LLRPStatus` parameter.
pub fn status_success(registry: &LlrpRegistry) -> Parameter {
    Parameter::new(
        registry,
        "LLRPStatus",
        &[
            ("StatusCode", Value::uint(0u16)),
            ("ErrorDescription", Value::string("")),
        ],
        vec![],
    )
    .expect("a successful status is valid")
}

/// The unsolicited `READER_EVENT_NOTIFICATION` a reader sends on connect.
pub fn connection_event(registry: &LlrpRegistry, status: u64) -> Message {
    let attempt = Parameter::new(
        registry,
        "ConnectionAttemptEvent",
        &[("Status", Value::Uint(status))],
        vec![],
    )
    .expect("valid attempt event");
    let timestamp =
        Parameter::single(registry, "UTCTimestamp", 1_000_000u64).expect("valid timestamp");
    let data = Parameter::new(
        registry,
        "ReaderEventNotificationData",
        &[],
        vec![timestamp, attempt],
    )
    .expect("valid notification data");
    Message::with_id(registry, "READER_EVENT_NOTIFICATION", 0, &[], vec![data])
        .expect("valid notification")
}

/// Encoded frame of [`connection_event`] with a successful status.
pub fn handshake_frame(registry: &LlrpRegistry) -> Bytes {
    codec::encode_message(registry, &connection_event(registry, 0)).expect("the handshake encodes")
}

/// The `ROSpec` tree every reader walkthrough begins with: immediate start,
/// no stop trigger, tag-observation antenna inventory, per-tag reporting.
pub fn basic_rospec(registry: &LlrpRegistry, rospec_id: u32, inventory_id: u16) -> Parameter {
    let start = Parameter::new(
        registry,
        "ROSpecStartTrigger",
        &[("ROSpecStartTriggerType", Value::uint(1u8))],
        vec![],
    )
    .expect("immediate start trigger");
    let stop = Parameter::new(
        registry,
        "ROSpecStopTrigger",
        &[
            ("ROSpecStopTriggerType", Value::uint(0u8)),
            ("DurationTriggerValue", Value::uint(0u32)),
        ],
        vec![],
    )
    .expect("null stop trigger");
    let boundary = Parameter::new(registry, "ROBoundarySpec", &[], vec![start, stop])
        .expect("valid boundary spec");

    let observation = Parameter::new(
        registry,
        "TagObservationTrigger",
        &[
            ("TriggerType", Value::uint(0u8)),
            ("NumberOfTags", Value::uint(500u16)),
            ("NumberOfAttempts", Value::uint(1u16)),
            ("T", Value::uint(0u16)),
            ("Timeout", Value::uint(500u32)),
        ],
        vec![],
    )
    .expect("valid tag observation trigger");
    let ai_stop = Parameter::new(
        registry,
        "AISpecStopTrigger",
        &[
            ("AISpecStopTriggerType", Value::uint(3u8)),
            ("DurationTrigger", Value::uint(0u32)),
        ],
        vec![observation],
    )
    .expect("valid AI stop trigger");
    let inventory = Parameter::new(
        registry,
        "InventoryParameterSpec",
        &[
            (
                "InventoryParameterSpecID",
                Value::Uint(u64::from(inventory_id)),
            ),
            ("ProtocolID", Value::uint(1u8)),
        ],
        vec![],
    )
    .expect("valid inventory parameter spec");
    let aispec = Parameter::new(
        registry,
        "AISpec",
        &[("AntennaIDs", Value::uints(&[0u16]))],
        vec![ai_stop, inventory],
    )
    .expect("valid AISpec");

    let selector = Parameter::new(
        registry,
        "TagReportContentSelector",
        &[
            ("EnableAntennaID", Value::Bool(true)),
            ("EnableFirstSeenTimestamp", Value::Bool(true)),
        ],
        vec![],
    )
    .expect("valid content selector");
    let report = Parameter::new(
        registry,
        "ROReportSpec",
        &[
            ("ROReportTrigger", Value::uint(2u8)),
            ("N", Value::uint(0u16)),
        ],
        vec![selector],
    )
    .expect("valid report spec");

    Parameter::new(
        registry,
        "ROSpec",
        &[
            ("ROSpecID", Value::Uint(u64::from(rospec_id))),
            ("Priority", Value::uint(0u8)),
            ("CurrentState", Value::uint(0u8)),
        ],
        vec![boundary, aispec, report],
    )
    .expect("valid ROSpec")
}

/// A `TagReportData` carrying one `EPC_96` and an antenna ID.
pub fn tag_report(registry: &LlrpRegistry, epc: [u8; 12], antenna: u16) -> Parameter {
    let epc = Parameter::single(registry, "EPC_96", Value::epc96(epc)).expect("valid EPC");
    let antenna = Parameter::single(registry, "AntennaID", antenna).expect("valid antenna");
    Parameter::new(registry, "TagReportData", &[], vec![epc, antenna])
        .expect("valid tag report data")
}
