//! Pre-compiled LLRP 1.0.1 definition tables.
//!
//! Generated offline from the LLRP 1.0.1 XML protocol definitions together
//! with the Impinj (vendor 25882) extension definitions. The tables are raw
//! keyed records; [`super::registry::LlrpRegistry::load`] resolves the
//! by-name cross-references and verifies the invariants. Do not edit by
//! hand: regenerate from the XML instead.

use super::model::{
    Cardinality,
    FieldType::{self, *},
};

/// Raw field record: name, wire type, optional enumeration reference.
pub(crate) struct RawField {
    pub name: &'static str,
    pub ty: FieldType,
    pub enum_ref: Option<&'static str>,
}

/// Raw sub-parameter rule: admitted parameter names (more than one for a
/// choice group) and the occurrence bound.
pub(crate) struct RawChild {
    pub names: &'static [&'static str],
    pub card: Cardinality,
}

/// Raw enumeration record.
pub(crate) struct RawEnum {
    pub name: &'static str,
    pub bits: u8,
    pub members: &'static [(u64, &'static str)],
}

/// Raw parameter record.
pub(crate) struct RawParam {
    pub name: &'static str,
    pub type_num: u16,
    pub custom: Option<(u32, u32)>,
    pub fields: &'static [RawField],
    pub children: &'static [RawChild],
}

/// Raw message record.
pub(crate) struct RawMessage {
    pub name: &'static str,
    pub type_num: u16,
    pub custom: Option<(u32, u8)>,
    pub fields: &'static [RawField],
    pub children: &'static [RawChild],
    pub response_for: Option<&'static str>,
}

const fn f(name: &'static str, ty: FieldType) -> RawField {
    RawField {
        name,
        ty,
        enum_ref: None,
    }
}

const fn fe(name: &'static str, ty: FieldType, enum_ref: &'static str) -> RawField {
    RawField {
        name,
        ty,
        enum_ref: Some(enum_ref),
    }
}

const fn res(bits: u8) -> RawField {
    RawField {
        name: "Reserved",
        ty: Reserved(bits),
        enum_ref: None,
    }
}

const fn req(names: &'static [&'static str]) -> RawChild {
    RawChild {
        names,
        card: Cardinality::One,
    }
}

const fn opt(names: &'static [&'static str]) -> RawChild {
    RawChild {
        names,
        card: Cardinality::ZeroOrOne,
    }
}

const fn many(names: &'static [&'static str]) -> RawChild {
    RawChild {
        names,
        card: Cardinality::ZeroOrMore,
    }
}

const fn some(names: &'static [&'static str]) -> RawChild {
    RawChild {
        names,
        card: Cardinality::OneOrMore,
    }
}

const IMPINJ: u32 = 25882;

pub(crate) static ENUMS: &[RawEnum] = &[
    RawEnum {
        name: "AirProtocols",
        bits: 8,
        members: &[(0, "Unspecified"), (1, "EPCGlobalClass1Gen2")],
    },
    RawEnum {
        name: "GetReaderCapabilitiesRequestedData",
        bits: 8,
        members: &[
            (0, "All"),
            (1, "General_Device_Capabilities"),
            (2, "LLRP_Capabilities"),
            (3, "Regulatory_Capabilities"),
            (4, "LLRP_Air_Protocol_Capabilities"),
        ],
    },
    RawEnum {
        name: "GetReaderConfigRequestedData",
        bits: 8,
        members: &[
            (0, "All"),
            (1, "Identification"),
            (2, "AntennaProperties"),
            (3, "AntennaConfiguration"),
            (4, "ROReportSpec"),
            (5, "ReaderEventNotificationSpec"),
            (6, "AccessReportSpec"),
            (7, "LLRPConfigurationStateValue"),
            (8, "KeepaliveSpec"),
            (9, "GPIPortCurrentState"),
            (10, "GPOWriteData"),
            (11, "EventsAndReports"),
        ],
    },
    RawEnum {
        name: "CommunicationsStandard",
        bits: 16,
        members: &[
            (0, "Unspecified"),
            (1, "US_FCC_Part_15"),
            (2, "ETSI_302_208"),
            (3, "ETSI_300_220"),
            (4, "Australia_LIPD_1W"),
            (5, "Australia_LIPD_4W"),
            (6, "Japan_ARIB_STD_T89"),
            (7, "Hong_Kong_OFTA_1049"),
            (8, "Taiwan_DGT_LP0002"),
            (9, "Korea_MIC_Article_5_2"),
        ],
    },
    RawEnum {
        name: "ROSpecState",
        bits: 8,
        members: &[(0, "Disabled"), (1, "Inactive"), (2, "Active")],
    },
    RawEnum {
        name: "ROSpecStartTriggerType",
        bits: 8,
        members: &[(0, "Null"), (1, "Immediate"), (2, "Periodic"), (3, "GPI")],
    },
    RawEnum {
        name: "ROSpecStopTriggerType",
        bits: 8,
        members: &[(0, "Null"), (1, "Duration"), (2, "GPI_With_Timeout")],
    },
    RawEnum {
        name: "AISpecStopTriggerType",
        bits: 8,
        members: &[
            (0, "Null"),
            (1, "Duration"),
            (2, "GPI_With_Timeout"),
            (3, "Tag_Observation"),
        ],
    },
    RawEnum {
        name: "TagObservationTriggerType",
        bits: 8,
        members: &[
            (0, "Upon_Seeing_N_Tags_Or_Timeout"),
            (1, "Upon_Seeing_No_More_New_Tags_For_Tms_Or_Timeout"),
            (2, "N_Attempts_To_See_All_Tags_In_FOV_Or_Timeout"),
        ],
    },
    RawEnum {
        name: "RFSurveySpecStopTriggerType",
        bits: 8,
        members: &[
            (0, "Null"),
            (1, "Duration"),
            (2, "N_Iterations_Through_Frequency_Range"),
        ],
    },
    RawEnum {
        name: "AccessSpecState",
        bits: 8,
        members: &[(0, "Disabled"), (1, "Active")],
    },
    RawEnum {
        name: "AccessSpecStopTriggerType",
        bits: 8,
        members: &[(0, "Null"), (1, "Operation_Count")],
    },
    RawEnum {
        name: "ROReportTriggerType",
        bits: 8,
        members: &[
            (0, "None"),
            (1, "Upon_N_Tags_Or_End_Of_AISpec"),
            (2, "Upon_N_Tags_Or_End_Of_ROSpec"),
        ],
    },
    RawEnum {
        name: "AccessReportTriggerType",
        bits: 8,
        members: &[
            (0, "Whenever_ROReport_Is_Generated"),
            (1, "End_Of_AccessSpec"),
        ],
    },
    RawEnum {
        name: "NotificationEventType",
        bits: 16,
        members: &[
            (0, "Upon_Hopping_To_Next_Channel"),
            (1, "GPI_Event"),
            (2, "ROSpec_Event"),
            (3, "Report_Buffer_Fill_Warning"),
            (4, "Reader_Exception_Event"),
            (5, "RFSurvey_Event"),
            (6, "AISpec_Event"),
            (7, "AISpec_Event_With_Details"),
            (8, "Antenna_Event"),
        ],
    },
    RawEnum {
        name: "ROSpecEventType",
        bits: 8,
        members: &[
            (0, "Start_Of_ROSpec"),
            (1, "End_Of_ROSpec"),
            (2, "Preemption_Of_ROSpec"),
        ],
    },
    RawEnum {
        name: "RFSurveyEventType",
        bits: 8,
        members: &[(0, "Start_Of_RFSurvey"), (1, "End_Of_RFSurvey")],
    },
    RawEnum {
        name: "AISpecEventType",
        bits: 8,
        members: &[(0, "End_Of_AISpec")],
    },
    RawEnum {
        name: "AntennaEventType",
        bits: 8,
        members: &[(0, "Antenna_Disconnected"), (1, "Antenna_Connected")],
    },
    RawEnum {
        name: "ConnectionAttemptStatusType",
        bits: 16,
        members: &[
            (0, "Success"),
            (1, "Failed_A_Reader_Initiated_Connection_Already_Exists"),
            (2, "Failed_A_Client_Initiated_Connection_Already_Exists"),
            (3, "Failed_Any_Other_Reason"),
            (4, "Another_Connection_Attempted"),
        ],
    },
    RawEnum {
        name: "StatusCode",
        bits: 16,
        members: &[
            (0, "M_Success"),
            (100, "M_ParameterError"),
            (101, "M_FieldError"),
            (102, "M_UnexpectedParameter"),
            (103, "M_MissingParameter"),
            (104, "M_DuplicateParameter"),
            (105, "M_OverflowParameter"),
            (106, "M_OverflowField"),
            (107, "M_UnknownParameter"),
            (108, "M_UnknownField"),
            (109, "M_UnsupportedMessage"),
            (110, "M_UnsupportedVersion"),
            (111, "M_UnsupportedParameter"),
            (200, "P_ParameterError"),
            (201, "P_FieldError"),
            (202, "P_UnexpectedParameter"),
            (203, "P_MissingParameter"),
            (204, "P_DuplicateParameter"),
            (205, "P_OverflowParameter"),
            (206, "P_OverflowField"),
            (207, "P_UnknownParameter"),
            (208, "P_UnknownField"),
            (209, "P_UnsupportedParameter"),
            (300, "A_Invalid"),
            (301, "A_OutOfRange"),
            (401, "R_DeviceError"),
        ],
    },
    RawEnum {
        name: "KeepaliveTriggerType",
        bits: 8,
        members: &[(0, "Null"), (1, "Periodic")],
    },
    RawEnum {
        name: "IdentificationType",
        bits: 8,
        members: &[(0, "MAC_Address"), (1, "EPC")],
    },
    RawEnum {
        name: "GPIPortState",
        bits: 8,
        members: &[(0, "Low"), (1, "High"), (2, "Unknown")],
    },
    RawEnum {
        name: "C1G2DRValue",
        bits: 1,
        members: &[(0, "DRV_8"), (1, "DRV_64_3")],
    },
    RawEnum {
        name: "C1G2MValue",
        bits: 8,
        members: &[(0, "MV_FM0"), (1, "MV_2"), (2, "MV_4"), (3, "MV_8")],
    },
    RawEnum {
        name: "C1G2ForwardLinkModulation",
        bits: 8,
        members: &[(0, "PR_ASK"), (1, "SSB_ASK"), (2, "DSB_ASK")],
    },
    RawEnum {
        name: "C1G2SpectralMaskIndicator",
        bits: 8,
        members: &[(0, "Unknown"), (1, "SI"), (2, "MI"), (3, "DI")],
    },
    RawEnum {
        name: "C1G2TruncateAction",
        bits: 2,
        members: &[(0, "Unspecified"), (1, "Do_Not_Truncate"), (2, "Truncate")],
    },
    RawEnum {
        name: "C1G2StateAwareTarget",
        bits: 8,
        members: &[
            (0, "SL"),
            (1, "Inventoried_State_For_Session_S0"),
            (2, "Inventoried_State_For_Session_S1"),
            (3, "Inventoried_State_For_Session_S2"),
            (4, "Inventoried_State_For_Session_S3"),
        ],
    },
    RawEnum {
        name: "C1G2StateAwareAction",
        bits: 8,
        members: &[
            (0, "AssertSLOrA_DeassertSLOrB"),
            (1, "AssertSLOrA_Noop"),
            (2, "Noop_DeassertSLOrB"),
            (3, "NegateSLOrABBA_Noop"),
            (4, "DeassertSLOrB_AssertSLOrA"),
            (5, "DeassertSLOrB_Noop"),
            (6, "Noop_AssertSLOrA"),
            (7, "Noop_NegateSLOrABBA"),
        ],
    },
    RawEnum {
        name: "C1G2StateUnawareAction",
        bits: 8,
        members: &[
            (0, "Select_Unselect"),
            (1, "Select_DoNothing"),
            (2, "DoNothing_Unselect"),
            (3, "Unselect_DoNothing"),
            (4, "Unselect_Select"),
            (5, "DoNothing_Select"),
        ],
    },
    RawEnum {
        name: "C1G2LockPrivilege",
        bits: 8,
        members: &[
            (0, "Read_Write"),
            (1, "Perma_Lock"),
            (2, "Perma_Unlock"),
            (3, "Unlock"),
        ],
    },
    RawEnum {
        name: "C1G2LockDataField",
        bits: 8,
        members: &[
            (0, "Kill_Password"),
            (1, "Access_Password"),
            (2, "EPC_Memory"),
            (3, "TID_Memory"),
            (4, "User_Memory"),
        ],
    },
    RawEnum {
        name: "C1G2ReadResultType",
        bits: 8,
        members: &[
            (0, "Success"),
            (1, "Nonspecific_Tag_Error"),
            (2, "No_Response_From_Tag"),
            (3, "Nonspecific_Reader_Error"),
        ],
    },
    RawEnum {
        name: "C1G2WriteResultType",
        bits: 8,
        members: &[
            (0, "Success"),
            (1, "Tag_Memory_Overrun_Error"),
            (2, "Tag_Memory_Locked_Error"),
            (3, "Insufficient_Power"),
            (4, "Nonspecific_Tag_Error"),
            (5, "No_Response_From_Tag"),
            (6, "Nonspecific_Reader_Error"),
        ],
    },
    RawEnum {
        name: "C1G2KillResultType",
        bits: 8,
        members: &[
            (0, "Success"),
            (1, "Zero_Kill_Password_Error"),
            (2, "Insufficient_Power"),
            (3, "Nonspecific_Tag_Error"),
            (4, "No_Response_From_Tag"),
            (5, "Nonspecific_Reader_Error"),
        ],
    },
    RawEnum {
        name: "C1G2LockResultType",
        bits: 8,
        members: &[
            (0, "Success"),
            (1, "Insufficient_Power"),
            (2, "Nonspecific_Tag_Error"),
            (3, "No_Response_From_Tag"),
            (4, "Nonspecific_Reader_Error"),
        ],
    },
    RawEnum {
        name: "C1G2BlockEraseResultType",
        bits: 8,
        members: &[
            (0, "Success"),
            (1, "Tag_Memory_Overrun_Error"),
            (2, "Tag_Memory_Locked_Error"),
            (3, "Insufficient_Power"),
            (4, "Nonspecific_Tag_Error"),
            (5, "No_Response_From_Tag"),
            (6, "Nonspecific_Reader_Error"),
        ],
    },
    RawEnum {
        name: "C1G2BlockWriteResultType",
        bits: 8,
        members: &[
            (0, "Success"),
            (1, "Tag_Memory_Overrun_Error"),
            (2, "Tag_Memory_Locked_Error"),
            (3, "Insufficient_Power"),
            (4, "Nonspecific_Tag_Error"),
            (5, "No_Response_From_Tag"),
            (6, "Nonspecific_Reader_Error"),
        ],
    },
    RawEnum {
        name: "ImpinjInventorySearchType",
        bits: 16,
        members: &[
            (0, "Reader_Selected"),
            (1, "Single_Target"),
            (2, "Dual_Target"),
            (3, "Single_Target_With_Suppression"),
        ],
    },
    RawEnum {
        name: "ImpinjLowDutyCycleMode",
        bits: 16,
        members: &[(0, "Disabled"), (1, "Enabled")],
    },
    RawEnum {
        name: "ImpinjSerializedTIDMode",
        bits: 16,
        members: &[(0, "Disabled"), (1, "Enabled")],
    },
    RawEnum {
        name: "ImpinjRFPhaseAngleMode",
        bits: 16,
        members: &[(0, "Disabled"), (1, "Enabled")],
    },
    RawEnum {
        name: "ImpinjPeakRSSIMode",
        bits: 16,
        members: &[(0, "Disabled"), (1, "Enabled")],
    },
    RawEnum {
        name: "ImpinjGPSCoordinatesMode",
        bits: 16,
        members: &[(0, "Disabled"), (1, "Enabled")],
    },
];

pub(crate) static PARAMETERS: &[RawParam] = &[
    // TV-encoded report parameters (type numbers 1..=127).
    RawParam {
        name: "AntennaID",
        type_num: 1,
        custom: None,
        fields: &[f("AntennaID", U16)],
        children: &[],
    },
    RawParam {
        name: "FirstSeenTimestampUTC",
        type_num: 2,
        custom: None,
        fields: &[f("Microseconds", U64)],
        children: &[],
    },
    RawParam {
        name: "FirstSeenTimestampUptime",
        type_num: 3,
        custom: None,
        fields: &[f("Microseconds", U64)],
        children: &[],
    },
    RawParam {
        name: "LastSeenTimestampUTC",
        type_num: 4,
        custom: None,
        fields: &[f("Microseconds", U64)],
        children: &[],
    },
    RawParam {
        name: "LastSeenTimestampUptime",
        type_num: 5,
        custom: None,
        fields: &[f("Microseconds", U64)],
        children: &[],
    },
    RawParam {
        name: "PeakRSSI",
        type_num: 6,
        custom: None,
        fields: &[f("PeakRSSI", S8)],
        children: &[],
    },
    RawParam {
        name: "ChannelIndex",
        type_num: 7,
        custom: None,
        fields: &[f("ChannelIndex", U16)],
        children: &[],
    },
    RawParam {
        name: "TagSeenCount",
        type_num: 8,
        custom: None,
        fields: &[f("TagCount", U16)],
        children: &[],
    },
    RawParam {
        name: "ROSpecID",
        type_num: 9,
        custom: None,
        fields: &[f("ROSpecID", U32)],
        children: &[],
    },
    RawParam {
        name: "InventoryParameterSpecID",
        type_num: 10,
        custom: None,
        fields: &[f("InventoryParameterSpecID", U16)],
        children: &[],
    },
    RawParam {
        name: "C1G2CRC",
        type_num: 11,
        custom: None,
        fields: &[f("CRC", U16)],
        children: &[],
    },
    RawParam {
        name: "C1G2PC",
        type_num: 12,
        custom: None,
        fields: &[f("PC_Bits", U16)],
        children: &[],
    },
    RawParam {
        name: "EPC_96",
        type_num: 13,
        custom: None,
        fields: &[f("EPC", Epc96)],
        children: &[],
    },
    RawParam {
        name: "SpecIndex",
        type_num: 14,
        custom: None,
        fields: &[f("SpecIndex", U16)],
        children: &[],
    },
    RawParam {
        name: "ClientRequestOpSpecResult",
        type_num: 15,
        custom: None,
        fields: &[f("OpSpecID", U16)],
        children: &[],
    },
    RawParam {
        name: "AccessSpecID",
        type_num: 16,
        custom: None,
        fields: &[f("AccessSpecID", U32)],
        children: &[],
    },
    RawParam {
        name: "OpSpecID",
        type_num: 17,
        custom: None,
        fields: &[f("OpSpecID", U16)],
        children: &[],
    },
    RawParam {
        name: "C1G2SingulationDetails",
        type_num: 18,
        custom: None,
        fields: &[f("NumCollisionSlots", U16), f("NumEmptySlots", U16)],
        children: &[],
    },
    // Timestamps.
    RawParam {
        name: "UTCTimestamp",
        type_num: 128,
        custom: None,
        fields: &[f("Microseconds", U64)],
        children: &[],
    },
    RawParam {
        name: "Uptime",
        type_num: 129,
        custom: None,
        fields: &[f("Microseconds", U64)],
        children: &[],
    },
    // Capabilities.
    RawParam {
        name: "GeneralDeviceCapabilities",
        type_num: 137,
        custom: None,
        fields: &[
            f("MaxNumberOfAntennaSupported", U16),
            f("CanSetAntennaProperties", Bool),
            f("HasUTCClockCapability", Bool),
            res(14),
            f("DeviceManufacturerName", U32),
            f("ModelName", U32),
            f("ReaderFirmwareVersion", Utf8),
        ],
        children: &[
            some(&["ReceiveSensitivityTableEntry"]),
            many(&["PerAntennaReceiveSensitivityRange"]),
            req(&["GPIOCapabilities"]),
            some(&["PerAntennaAirProtocol"]),
        ],
    },
    RawParam {
        name: "ReceiveSensitivityTableEntry",
        type_num: 139,
        custom: None,
        fields: &[f("Index", U16), f("ReceiveSensitivityValue", S16)],
        children: &[],
    },
    RawParam {
        name: "PerAntennaAirProtocol",
        type_num: 140,
        custom: None,
        fields: &[
            f("AntennaID", U16),
            fe("ProtocolIDs", UintArray(8), "AirProtocols"),
        ],
        children: &[],
    },
    RawParam {
        name: "GPIOCapabilities",
        type_num: 141,
        custom: None,
        fields: &[f("NumGPIs", U16), f("NumGPOs", U16)],
        children: &[],
    },
    RawParam {
        name: "LLRPCapabilities",
        type_num: 142,
        custom: None,
        fields: &[
            f("CanDoRFSurvey", Bool),
            f("CanReportBufferFillWarning", Bool),
            f("SupportsClientRequestOpSpec", Bool),
            f("CanDoTagInventoryStateAwareSingulation", Bool),
            f("SupportsEventAndReportHolding", Bool),
            res(3),
            f("MaxPriorityLevelSupported", U8),
            f("ClientRequestOpSpecTimeout", U16),
            f("MaxNumROSpecs", U32),
            f("MaxNumSpecsPerROSpec", U32),
            f("MaxNumInventoryParameterSpecsPerAISpec", U32),
            f("MaxNumAccessSpecs", U32),
            f("MaxNumOpSpecsPerAccessSpec", U32),
        ],
        children: &[],
    },
    RawParam {
        name: "RegulatoryCapabilities",
        type_num: 143,
        custom: None,
        fields: &[
            f("CountryCode", U16),
            fe("CommunicationsStandard", U16, "CommunicationsStandard"),
        ],
        children: &[opt(&["UHFBandCapabilities"]), many(&["Custom"])],
    },
    RawParam {
        name: "UHFBandCapabilities",
        type_num: 144,
        custom: None,
        fields: &[],
        children: &[
            some(&["TransmitPowerLevelTableEntry"]),
            req(&["FrequencyInformation"]),
            some(&["C1G2UHFRFModeTable"]),
        ],
    },
    RawParam {
        name: "TransmitPowerLevelTableEntry",
        type_num: 145,
        custom: None,
        fields: &[f("Index", U16), f("TransmitPowerValue", S16)],
        children: &[],
    },
    RawParam {
        name: "FrequencyInformation",
        type_num: 146,
        custom: None,
        fields: &[f("Hopping", Bool), res(7)],
        children: &[many(&["FrequencyHopTable"]), opt(&["FixedFrequencyTable"])],
    },
    RawParam {
        name: "FrequencyHopTable",
        type_num: 147,
        custom: None,
        fields: &[f("HopTableID", U8), res(8), f("Frequency", UintArray(32))],
        children: &[],
    },
    RawParam {
        name: "FixedFrequencyTable",
        type_num: 148,
        custom: None,
        fields: &[f("Frequency", UintArray(32))],
        children: &[],
    },
    RawParam {
        name: "PerAntennaReceiveSensitivityRange",
        type_num: 149,
        custom: None,
        fields: &[
            f("AntennaID", U16),
            f("ReceiveSensitivityIndexMin", U16),
            f("ReceiveSensitivityIndexMax", U16),
        ],
        children: &[],
    },
    // Reader operation specs.
    RawParam {
        name: "ROSpec",
        type_num: 177,
        custom: None,
        fields: &[
            f("ROSpecID", U32),
            f("Priority", U8),
            fe("CurrentState", U8, "ROSpecState"),
        ],
        children: &[
            req(&["ROBoundarySpec"]),
            some(&["AISpec", "RFSurveySpec"]),
            opt(&["ROReportSpec"]),
        ],
    },
    RawParam {
        name: "ROBoundarySpec",
        type_num: 178,
        custom: None,
        fields: &[],
        children: &[req(&["ROSpecStartTrigger"]), req(&["ROSpecStopTrigger"])],
    },
    RawParam {
        name: "ROSpecStartTrigger",
        type_num: 179,
        custom: None,
        fields: &[fe("ROSpecStartTriggerType", U8, "ROSpecStartTriggerType")],
        children: &[opt(&["PeriodicTriggerValue"]), opt(&["GPITriggerValue"])],
    },
    RawParam {
        name: "PeriodicTriggerValue",
        type_num: 180,
        custom: None,
        fields: &[f("Offset", U32), f("Period", U32)],
        children: &[opt(&["UTCTimestamp"])],
    },
    RawParam {
        name: "GPITriggerValue",
        type_num: 181,
        custom: None,
        fields: &[
            f("GPIPortNum", U16),
            f("GPIEvent", Bool),
            res(7),
            f("Timeout", U32),
        ],
        children: &[],
    },
    RawParam {
        name: "ROSpecStopTrigger",
        type_num: 182,
        custom: None,
        fields: &[
            fe("ROSpecStopTriggerType", U8, "ROSpecStopTriggerType"),
            f("DurationTriggerValue", U32),
        ],
        children: &[opt(&["GPITriggerValue"])],
    },
    RawParam {
        name: "AISpec",
        type_num: 183,
        custom: None,
        fields: &[f("AntennaIDs", UintArray(16))],
        children: &[
            req(&["AISpecStopTrigger"]),
            some(&["InventoryParameterSpec"]),
            many(&["Custom"]),
        ],
    },
    RawParam {
        name: "AISpecStopTrigger",
        type_num: 184,
        custom: None,
        fields: &[
            fe("AISpecStopTriggerType", U8, "AISpecStopTriggerType"),
            f("DurationTrigger", U32),
        ],
        children: &[opt(&["GPITriggerValue"]), opt(&["TagObservationTrigger"])],
    },
    RawParam {
        name: "TagObservationTrigger",
        type_num: 185,
        custom: None,
        fields: &[
            fe("TriggerType", U8, "TagObservationTriggerType"),
            res(8),
            f("NumberOfTags", U16),
            f("NumberOfAttempts", U16),
            f("T", U16),
            f("Timeout", U32),
        ],
        children: &[],
    },
    RawParam {
        name: "InventoryParameterSpec",
        type_num: 186,
        custom: None,
        fields: &[
            f("InventoryParameterSpecID", U16),
            fe("ProtocolID", U8, "AirProtocols"),
        ],
        children: &[many(&["AntennaConfiguration"]), many(&["Custom"])],
    },
    RawParam {
        name: "RFSurveySpec",
        type_num: 187,
        custom: None,
        fields: &[
            f("AntennaID", U16),
            f("StartFrequency", U32),
            f("EndFrequency", U32),
        ],
        children: &[req(&["RFSurveySpecStopTrigger"]), many(&["Custom"])],
    },
    RawParam {
        name: "RFSurveySpecStopTrigger",
        type_num: 188,
        custom: None,
        fields: &[
            fe("StopTriggerType", U8, "RFSurveySpecStopTriggerType"),
            f("DurationPeriod", U32),
            f("N", U32),
        ],
        children: &[],
    },
    // Access operation specs.
    RawParam {
        name: "AccessSpec",
        type_num: 207,
        custom: None,
        fields: &[
            f("AccessSpecID", U32),
            f("AntennaID", U16),
            fe("ProtocolID", U8, "AirProtocols"),
            f("CurrentState", Bool),
            res(7),
            f("ROSpecID", U32),
        ],
        children: &[
            req(&["AccessSpecStopTrigger"]),
            req(&["AccessCommand"]),
            opt(&["AccessReportSpec"]),
            many(&["Custom"]),
        ],
    },
    RawParam {
        name: "AccessSpecStopTrigger",
        type_num: 208,
        custom: None,
        fields: &[
            fe("AccessSpecStopTrigger", U8, "AccessSpecStopTriggerType"),
            f("OperationCountValue", U16),
        ],
        children: &[],
    },
    RawParam {
        name: "AccessCommand",
        type_num: 209,
        custom: None,
        fields: &[],
        children: &[
            req(&["C1G2TagSpec"]),
            some(&[
                "C1G2Read",
                "C1G2Write",
                "C1G2Kill",
                "C1G2Lock",
                "C1G2BlockErase",
                "C1G2BlockWrite",
                "ClientRequestOpSpec",
            ]),
            many(&["Custom"]),
        ],
    },
    RawParam {
        name: "ClientRequestOpSpec",
        type_num: 210,
        custom: None,
        fields: &[f("OpSpecID", U16)],
        children: &[],
    },
    RawParam {
        name: "ClientRequestResponse",
        type_num: 211,
        custom: None,
        fields: &[f("AccessSpecID", U32)],
        children: &[
            req(&["EPCData", "EPC_96"]),
            many(&[
                "C1G2Read",
                "C1G2Write",
                "C1G2Kill",
                "C1G2Lock",
                "C1G2BlockErase",
                "C1G2BlockWrite",
            ]),
        ],
    },
    // Reader configuration.
    RawParam {
        name: "LLRPConfigurationStateValue",
        type_num: 217,
        custom: None,
        fields: &[f("LLRPConfigurationStateValue", U32)],
        children: &[],
    },
    RawParam {
        name: "Identification",
        type_num: 218,
        custom: None,
        fields: &[
            fe("IDType", U8, "IdentificationType"),
            f("ReaderID", UintArray(8)),
        ],
        children: &[],
    },
    RawParam {
        name: "GPOWriteData",
        type_num: 219,
        custom: None,
        fields: &[f("GPOPortNumber", U16), f("GPOData", Bool), res(7)],
        children: &[],
    },
    RawParam {
        name: "KeepaliveSpec",
        type_num: 220,
        custom: None,
        fields: &[
            fe("KeepaliveTriggerType", U8, "KeepaliveTriggerType"),
            f("PeriodicTriggerValue", U32),
        ],
        children: &[],
    },
    RawParam {
        name: "AntennaProperties",
        type_num: 221,
        custom: None,
        fields: &[
            f("AntennaConnected", Bool),
            res(7),
            f("AntennaID", U16),
            f("AntennaGain", S16),
        ],
        children: &[],
    },
    RawParam {
        name: "AntennaConfiguration",
        type_num: 222,
        custom: None,
        fields: &[f("AntennaID", U16)],
        children: &[
            opt(&["RFReceiver"]),
            opt(&["RFTransmitter"]),
            many(&["C1G2InventoryCommand"]),
            many(&["Custom"]),
        ],
    },
    RawParam {
        name: "RFReceiver",
        type_num: 223,
        custom: None,
        fields: &[f("ReceiverSensitivity", U16)],
        children: &[],
    },
    RawParam {
        name: "RFTransmitter",
        type_num: 224,
        custom: None,
        fields: &[
            f("HopTableID", U16),
            f("ChannelIndex", U16),
            f("TransmitPower", U16),
        ],
        children: &[],
    },
    RawParam {
        name: "GPIPortCurrentState",
        type_num: 225,
        custom: None,
        fields: &[
            f("GPIPortNum", U16),
            f("Config", Bool),
            res(7),
            fe("State", U8, "GPIPortState"),
        ],
        children: &[],
    },
    RawParam {
        name: "EventsAndReports",
        type_num: 226,
        custom: None,
        fields: &[f("HoldEventsAndReportsUponReconnect", Bool), res(7)],
        children: &[],
    },
    // Reporting.
    RawParam {
        name: "ROReportSpec",
        type_num: 237,
        custom: None,
        fields: &[fe("ROReportTrigger", U8, "ROReportTriggerType"), f("N", U16)],
        children: &[req(&["TagReportContentSelector"]), many(&["Custom"])],
    },
    RawParam {
        name: "TagReportContentSelector",
        type_num: 238,
        custom: None,
        fields: &[
            f("EnableROSpecID", Bool),
            f("EnableSpecIndex", Bool),
            f("EnableInventoryParameterSpecID", Bool),
            f("EnableAntennaID", Bool),
            f("EnableChannelIndex", Bool),
            f("EnablePeakRSSI", Bool),
            f("EnableFirstSeenTimestamp", Bool),
            f("EnableLastSeenTimestamp", Bool),
            f("EnableTagSeenCount", Bool),
            f("EnableAccessSpecID", Bool),
            res(6),
        ],
        children: &[many(&["C1G2EPCMemorySelector"])],
    },
    RawParam {
        name: "AccessReportSpec",
        type_num: 239,
        custom: None,
        fields: &[fe("AccessReportTrigger", U8, "AccessReportTriggerType")],
        children: &[],
    },
    RawParam {
        name: "TagReportData",
        type_num: 240,
        custom: None,
        fields: &[],
        children: &[
            req(&["EPCData", "EPC_96"]),
            opt(&["ROSpecID"]),
            opt(&["SpecIndex"]),
            opt(&["InventoryParameterSpecID"]),
            opt(&["AntennaID"]),
            opt(&["PeakRSSI"]),
            opt(&["ChannelIndex"]),
            opt(&["FirstSeenTimestampUTC"]),
            opt(&["FirstSeenTimestampUptime"]),
            opt(&["LastSeenTimestampUTC"]),
            opt(&["LastSeenTimestampUptime"]),
            opt(&["TagSeenCount"]),
            many(&["C1G2PC", "C1G2CRC"]),
            opt(&["AccessSpecID"]),
            many(&[
                "C1G2ReadOpSpecResult",
                "C1G2WriteOpSpecResult",
                "C1G2KillOpSpecResult",
                "C1G2LockOpSpecResult",
                "C1G2BlockEraseOpSpecResult",
                "C1G2BlockWriteOpSpecResult",
                "ClientRequestOpSpecResult",
            ]),
            many(&["Custom"]),
        ],
    },
    RawParam {
        name: "EPCData",
        type_num: 241,
        custom: None,
        fields: &[f("EPC", BitArray)],
        children: &[],
    },
    RawParam {
        name: "RFSurveyReportData",
        type_num: 242,
        custom: None,
        fields: &[],
        children: &[
            opt(&["ROSpecID"]),
            opt(&["SpecIndex"]),
            some(&["FrequencyRSSILevelEntry"]),
            many(&["Custom"]),
        ],
    },
    RawParam {
        name: "FrequencyRSSILevelEntry",
        type_num: 243,
        custom: None,
        fields: &[
            f("Frequency", U32),
            f("Bandwidth", U32),
            f("AverageRSSI", S8),
            f("PeakRSSI", S8),
        ],
        children: &[req(&["UTCTimestamp", "Uptime"])],
    },
    // Reader event notification.
    RawParam {
        name: "ReaderEventNotificationSpec",
        type_num: 244,
        custom: None,
        fields: &[],
        children: &[some(&["EventNotificationState"])],
    },
    RawParam {
        name: "EventNotificationState",
        type_num: 245,
        custom: None,
        fields: &[
            fe("EventType", U16, "NotificationEventType"),
            f("NotificationState", Bool),
            res(7),
        ],
        children: &[],
    },
    RawParam {
        name: "ReaderEventNotificationData",
        type_num: 246,
        custom: None,
        fields: &[],
        children: &[
            req(&["UTCTimestamp", "Uptime"]),
            opt(&["HoppingEvent"]),
            opt(&["GPIEvent"]),
            opt(&["ROSpecEvent"]),
            opt(&["ReportBufferLevelWarningEvent"]),
            opt(&["ReportBufferOverflowErrorEvent"]),
            opt(&["ReaderExceptionEvent"]),
            opt(&["RFSurveyEvent"]),
            opt(&["AISpecEvent"]),
            opt(&["AntennaEvent"]),
            opt(&["ConnectionAttemptEvent"]),
            opt(&["ConnectionCloseEvent"]),
            many(&["Custom"]),
        ],
    },
    RawParam {
        name: "HoppingEvent",
        type_num: 247,
        custom: None,
        fields: &[f("HopTableID", U16), f("NextChannelIndex", U16)],
        children: &[],
    },
    RawParam {
        name: "GPIEvent",
        type_num: 248,
        custom: None,
        fields: &[f("GPIPortNumber", U16), f("GPIEvent", Bool), res(7)],
        children: &[],
    },
    RawParam {
        name: "ROSpecEvent",
        type_num: 249,
        custom: None,
        fields: &[
            fe("EventType", U8, "ROSpecEventType"),
            f("ROSpecID", U32),
            f("PreemptingROSpecID", U32),
        ],
        children: &[],
    },
    RawParam {
        name: "ReportBufferLevelWarningEvent",
        type_num: 250,
        custom: None,
        fields: &[f("ReportBufferPercentageFull", U8)],
        children: &[],
    },
    RawParam {
        name: "ReportBufferOverflowErrorEvent",
        type_num: 251,
        custom: None,
        fields: &[],
        children: &[],
    },
    RawParam {
        name: "ReaderExceptionEvent",
        type_num: 252,
        custom: None,
        fields: &[f("Message", Utf8)],
        children: &[
            opt(&["ROSpecID"]),
            opt(&["SpecIndex"]),
            opt(&["InventoryParameterSpecID"]),
            opt(&["AntennaID"]),
            opt(&["AccessSpecID"]),
            opt(&["OpSpecID"]),
            many(&["Custom"]),
        ],
    },
    RawParam {
        name: "RFSurveyEvent",
        type_num: 253,
        custom: None,
        fields: &[
            fe("EventType", U8, "RFSurveyEventType"),
            f("ROSpecID", U32),
            f("SpecIndex", U16),
        ],
        children: &[],
    },
    RawParam {
        name: "AISpecEvent",
        type_num: 254,
        custom: None,
        fields: &[
            fe("EventType", U8, "AISpecEventType"),
            f("ROSpecID", U32),
            f("SpecIndex", U16),
        ],
        children: &[opt(&["C1G2SingulationDetails"])],
    },
    RawParam {
        name: "AntennaEvent",
        type_num: 255,
        custom: None,
        fields: &[fe("EventType", U8, "AntennaEventType"), f("AntennaID", U16)],
        children: &[],
    },
    RawParam {
        name: "ConnectionAttemptEvent",
        type_num: 256,
        custom: None,
        fields: &[fe("Status", U16, "ConnectionAttemptStatusType")],
        children: &[],
    },
    RawParam {
        name: "ConnectionCloseEvent",
        type_num: 257,
        custom: None,
        fields: &[],
        children: &[],
    },
    // Status reporting.
    RawParam {
        name: "LLRPStatus",
        type_num: 287,
        custom: None,
        fields: &[fe("StatusCode", U16, "StatusCode"), f("ErrorDescription", Utf8)],
        children: &[opt(&["FieldError"]), opt(&["ParameterError"])],
    },
    RawParam {
        name: "FieldError",
        type_num: 288,
        custom: None,
        fields: &[f("FieldNum", U16), fe("ErrorCode", U16, "StatusCode")],
        children: &[],
    },
    RawParam {
        name: "ParameterError",
        type_num: 289,
        custom: None,
        fields: &[f("ParameterType", U16), fe("ErrorCode", U16, "StatusCode")],
        children: &[opt(&["FieldError"]), opt(&["ParameterError"])],
    },
    // Class-1 Generation-2 air protocol.
    RawParam {
        name: "C1G2LLRPCapabilities",
        type_num: 327,
        custom: None,
        fields: &[
            f("CanSupportBlockErase", Bool),
            f("CanSupportBlockWrite", Bool),
            res(6),
            f("MaxNumSelectFiltersPerQuery", U16),
        ],
        children: &[],
    },
    RawParam {
        name: "C1G2UHFRFModeTable",
        type_num: 328,
        custom: None,
        fields: &[],
        children: &[some(&["C1G2UHFRFModeTableEntry"])],
    },
    RawParam {
        name: "C1G2UHFRFModeTableEntry",
        type_num: 329,
        custom: None,
        fields: &[
            f("ModeIdentifier", U32),
            fe("DRValue", Bits(1), "C1G2DRValue"),
            f("EPCHAGTCConformance", Bool),
            res(6),
            fe("MValue", U8, "C1G2MValue"),
            fe("ForwardLinkModulation", U8, "C1G2ForwardLinkModulation"),
            fe("SpectralMaskIndicator", U8, "C1G2SpectralMaskIndicator"),
            f("BDRValue", U32),
            f("PIEValue", U32),
            f("MinTariValue", U32),
            f("MaxTariValue", U32),
            f("StepTariValue", U32),
        ],
        children: &[],
    },
    RawParam {
        name: "C1G2InventoryCommand",
        type_num: 330,
        custom: None,
        fields: &[f("TagInventoryStateAware", Bool), res(7)],
        children: &[
            many(&["C1G2Filter"]),
            opt(&["C1G2RFControl"]),
            opt(&["C1G2SingulationControl"]),
            many(&["Custom"]),
        ],
    },
    RawParam {
        name: "C1G2Filter",
        type_num: 331,
        custom: None,
        fields: &[fe("T", Bits(2), "C1G2TruncateAction"), res(6)],
        children: &[
            req(&["C1G2TagInventoryMask"]),
            opt(&["C1G2TagInventoryStateAwareFilterAction"]),
            opt(&["C1G2TagInventoryStateUnawareFilterAction"]),
        ],
    },
    RawParam {
        name: "C1G2TagInventoryMask",
        type_num: 332,
        custom: None,
        fields: &[
            f("MB", Bits(2)),
            res(6),
            f("Pointer", U16),
            f("TagMask", BitArray),
        ],
        children: &[],
    },
    RawParam {
        name: "C1G2TagInventoryStateAwareFilterAction",
        type_num: 333,
        custom: None,
        fields: &[
            fe("Target", U8, "C1G2StateAwareTarget"),
            fe("Action", U8, "C1G2StateAwareAction"),
        ],
        children: &[],
    },
    RawParam {
        name: "C1G2TagInventoryStateUnawareFilterAction",
        type_num: 334,
        custom: None,
        fields: &[fe("Action", U8, "C1G2StateUnawareAction")],
        children: &[],
    },
    RawParam {
        name: "C1G2RFControl",
        type_num: 335,
        custom: None,
        fields: &[f("ModeIndex", U16), f("Tari", U16)],
        children: &[],
    },
    RawParam {
        name: "C1G2SingulationControl",
        type_num: 336,
        custom: None,
        fields: &[
            f("Session", Bits(2)),
            res(6),
            f("TagPopulation", U16),
            f("TagTransitTime", U32),
        ],
        children: &[opt(&["C1G2TagInventoryStateAwareSingulationAction"])],
    },
    RawParam {
        name: "C1G2TagInventoryStateAwareSingulationAction",
        type_num: 337,
        custom: None,
        fields: &[f("I", Bool), f("S", Bool), res(6)],
        children: &[],
    },
    RawParam {
        name: "C1G2TagSpec",
        type_num: 338,
        custom: None,
        fields: &[],
        children: &[some(&["C1G2TargetTag"])],
    },
    RawParam {
        name: "C1G2TargetTag",
        type_num: 339,
        custom: None,
        fields: &[
            f("MB", Bits(2)),
            f("Match", Bool),
            res(5),
            f("Pointer", U16),
            f("TagMask", BitArray),
            f("TagData", BitArray),
        ],
        children: &[],
    },
    RawParam {
        name: "C1G2Read",
        type_num: 341,
        custom: None,
        fields: &[
            f("OpSpecID", U16),
            f("AccessPassword", U32),
            f("MB", Bits(2)),
            res(6),
            f("WordPointer", U16),
            f("WordCount", U16),
        ],
        children: &[],
    },
    RawParam {
        name: "C1G2Write",
        type_num: 342,
        custom: None,
        fields: &[
            f("OpSpecID", U16),
            f("AccessPassword", U32),
            f("MB", Bits(2)),
            res(6),
            f("WordPointer", U16),
            f("WriteData", UintArray(16)),
        ],
        children: &[],
    },
    RawParam {
        name: "C1G2Kill",
        type_num: 343,
        custom: None,
        fields: &[f("OpSpecID", U16), f("KillPassword", U32)],
        children: &[],
    },
    RawParam {
        name: "C1G2Lock",
        type_num: 344,
        custom: None,
        fields: &[f("OpSpecID", U16), f("AccessPassword", U32)],
        children: &[some(&["C1G2LockPayload"])],
    },
    RawParam {
        name: "C1G2LockPayload",
        type_num: 345,
        custom: None,
        fields: &[
            fe("Privilege", U8, "C1G2LockPrivilege"),
            fe("DataField", U8, "C1G2LockDataField"),
        ],
        children: &[],
    },
    RawParam {
        name: "C1G2BlockErase",
        type_num: 346,
        custom: None,
        fields: &[
            f("OpSpecID", U16),
            f("AccessPassword", U32),
            f("MB", Bits(2)),
            res(6),
            f("WordPointer", U16),
            f("WordCount", U16),
        ],
        children: &[],
    },
    RawParam {
        name: "C1G2BlockWrite",
        type_num: 347,
        custom: None,
        fields: &[
            f("OpSpecID", U16),
            f("AccessPassword", U32),
            f("MB", Bits(2)),
            res(6),
            f("WordPointer", U16),
            f("WriteData", UintArray(16)),
        ],
        children: &[],
    },
    RawParam {
        name: "C1G2EPCMemorySelector",
        type_num: 348,
        custom: None,
        fields: &[f("EnableCRC", Bool), f("EnablePCBits", Bool), res(6)],
        children: &[],
    },
    RawParam {
        name: "C1G2ReadOpSpecResult",
        type_num: 349,
        custom: None,
        fields: &[
            fe("Result", U8, "C1G2ReadResultType"),
            f("OpSpecID", U16),
            f("ReadData", UintArray(16)),
        ],
        children: &[],
    },
    RawParam {
        name: "C1G2WriteOpSpecResult",
        type_num: 350,
        custom: None,
        fields: &[
            fe("Result", U8, "C1G2WriteResultType"),
            f("OpSpecID", U16),
            f("NumWordsWritten", U16),
        ],
        children: &[],
    },
    RawParam {
        name: "C1G2KillOpSpecResult",
        type_num: 351,
        custom: None,
        fields: &[fe("Result", U8, "C1G2KillResultType"), f("OpSpecID", U16)],
        children: &[],
    },
    RawParam {
        name: "C1G2LockOpSpecResult",
        type_num: 352,
        custom: None,
        fields: &[fe("Result", U8, "C1G2LockResultType"), f("OpSpecID", U16)],
        children: &[],
    },
    RawParam {
        name: "C1G2BlockEraseOpSpecResult",
        type_num: 353,
        custom: None,
        fields: &[
            fe("Result", U8, "C1G2BlockEraseResultType"),
            f("OpSpecID", U16),
        ],
        children: &[],
    },
    RawParam {
        name: "C1G2BlockWriteOpSpecResult",
        type_num: 354,
        custom: None,
        fields: &[
            fe("Result", U8, "C1G2BlockWriteResultType"),
            f("OpSpecID", U16),
            f("NumWordsWritten", U16),
        ],
        children: &[],
    },
    // The generic custom parameter. Unregistered vendor extensions decode
    // into this spec with their payload kept opaque in `Data`.
    RawParam {
        name: "Custom",
        type_num: 1023,
        custom: None,
        fields: &[
            f("VendorIdentifier", U32),
            f("ParameterSubtype", U32),
            f("Data", BytesToEnd),
        ],
        children: &[],
    },
    // Impinj vendor extension parameters.
    RawParam {
        name: "ImpinjInventorySearchMode",
        type_num: 1023,
        custom: Some((IMPINJ, 23)),
        fields: &[fe(
            "InventorySearchMode",
            U16,
            "ImpinjInventorySearchType",
        )],
        children: &[],
    },
    RawParam {
        name: "ImpinjLowDutyCycle",
        type_num: 1023,
        custom: Some((IMPINJ, 28)),
        fields: &[
            fe("LowDutyCycleMode", U16, "ImpinjLowDutyCycleMode"),
            f("EmptyFieldTimeout", U16),
            f("FieldPingInterval", U16),
        ],
        children: &[],
    },
    RawParam {
        name: "ImpinjReaderTemperature",
        type_num: 1023,
        custom: Some((IMPINJ, 37)),
        fields: &[f("Temperature", S16)],
        children: &[],
    },
    RawParam {
        name: "ImpinjTagReportContentSelector",
        type_num: 1023,
        custom: Some((IMPINJ, 50)),
        fields: &[],
        children: &[
            opt(&["ImpinjEnableSerializedTID"]),
            opt(&["ImpinjEnableRFPhaseAngle"]),
            opt(&["ImpinjEnablePeakRSSI"]),
            opt(&["ImpinjEnableGPSCoordinates"]),
        ],
    },
    RawParam {
        name: "ImpinjEnableSerializedTID",
        type_num: 1023,
        custom: Some((IMPINJ, 51)),
        fields: &[fe("SerializedTIDMode", U16, "ImpinjSerializedTIDMode")],
        children: &[],
    },
    RawParam {
        name: "ImpinjEnableRFPhaseAngle",
        type_num: 1023,
        custom: Some((IMPINJ, 52)),
        fields: &[fe("RFPhaseAngleMode", U16, "ImpinjRFPhaseAngleMode")],
        children: &[],
    },
    RawParam {
        name: "ImpinjEnablePeakRSSI",
        type_num: 1023,
        custom: Some((IMPINJ, 53)),
        fields: &[fe("PeakRSSIMode", U16, "ImpinjPeakRSSIMode")],
        children: &[],
    },
    RawParam {
        name: "ImpinjEnableGPSCoordinates",
        type_num: 1023,
        custom: Some((IMPINJ, 54)),
        fields: &[fe("GPSCoordinatesMode", U16, "ImpinjGPSCoordinatesMode")],
        children: &[],
    },
    RawParam {
        name: "ImpinjSerializedTID",
        type_num: 1023,
        custom: Some((IMPINJ, 55)),
        fields: &[f("TID", UintArray(16))],
        children: &[],
    },
    RawParam {
        name: "ImpinjRFPhaseAngle",
        type_num: 1023,
        custom: Some((IMPINJ, 56)),
        fields: &[f("PhaseAngle", U16)],
        children: &[],
    },
    RawParam {
        name: "ImpinjPeakRSSI",
        type_num: 1023,
        custom: Some((IMPINJ, 57)),
        fields: &[f("RSSI", S16)],
        children: &[],
    },
];

pub(crate) static MESSAGES: &[RawMessage] = &[
    RawMessage {
        name: "GET_READER_CAPABILITIES",
        type_num: 1,
        custom: None,
        fields: &[fe("RequestedData", U8, "GetReaderCapabilitiesRequestedData")],
        children: &[many(&["Custom"])],
        response_for: None,
    },
    RawMessage {
        name: "GET_READER_CAPABILITIES_RESPONSE",
        type_num: 11,
        custom: None,
        fields: &[],
        children: &[
            req(&["LLRPStatus"]),
            opt(&["GeneralDeviceCapabilities"]),
            opt(&["LLRPCapabilities"]),
            opt(&["RegulatoryCapabilities"]),
            opt(&["C1G2LLRPCapabilities"]),
            many(&["Custom"]),
        ],
        response_for: Some("GET_READER_CAPABILITIES"),
    },
    RawMessage {
        name: "GET_READER_CONFIG",
        type_num: 2,
        custom: None,
        fields: &[
            f("AntennaID", U16),
            fe("RequestedData", U8, "GetReaderConfigRequestedData"),
            f("GPIPortNum", U16),
            f("GPOPortNum", U16),
        ],
        children: &[many(&["Custom"])],
        response_for: None,
    },
    RawMessage {
        name: "GET_READER_CONFIG_RESPONSE",
        type_num: 12,
        custom: None,
        fields: &[],
        children: &[
            req(&["LLRPStatus"]),
            opt(&["Identification"]),
            many(&["AntennaProperties"]),
            many(&["AntennaConfiguration"]),
            opt(&["ReaderEventNotificationSpec"]),
            opt(&["ROReportSpec"]),
            opt(&["AccessReportSpec"]),
            opt(&["LLRPConfigurationStateValue"]),
            opt(&["KeepaliveSpec"]),
            many(&["GPIPortCurrentState"]),
            many(&["GPOWriteData"]),
            opt(&["EventsAndReports"]),
            many(&["Custom"]),
        ],
        response_for: Some("GET_READER_CONFIG"),
    },
    RawMessage {
        name: "SET_READER_CONFIG",
        type_num: 3,
        custom: None,
        fields: &[f("ResetToFactoryDefault", Bool), res(7)],
        children: &[
            opt(&["ReaderEventNotificationSpec"]),
            many(&["AntennaProperties"]),
            many(&["AntennaConfiguration"]),
            opt(&["ROReportSpec"]),
            opt(&["AccessReportSpec"]),
            opt(&["KeepaliveSpec"]),
            many(&["GPOWriteData"]),
            many(&["GPIPortCurrentState"]),
            opt(&["EventsAndReports"]),
            many(&["Custom"]),
        ],
        response_for: None,
    },
    RawMessage {
        name: "SET_READER_CONFIG_RESPONSE",
        type_num: 13,
        custom: None,
        fields: &[],
        children: &[req(&["LLRPStatus"])],
        response_for: Some("SET_READER_CONFIG"),
    },
    RawMessage {
        name: "CLOSE_CONNECTION",
        type_num: 14,
        custom: None,
        fields: &[],
        children: &[],
        response_for: None,
    },
    RawMessage {
        name: "CLOSE_CONNECTION_RESPONSE",
        type_num: 4,
        custom: None,
        fields: &[],
        children: &[req(&["LLRPStatus"])],
        response_for: Some("CLOSE_CONNECTION"),
    },
    RawMessage {
        name: "ADD_ROSPEC",
        type_num: 20,
        custom: None,
        fields: &[],
        children: &[req(&["ROSpec"])],
        response_for: None,
    },
    RawMessage {
        name: "ADD_ROSPEC_RESPONSE",
        type_num: 30,
        custom: None,
        fields: &[],
        children: &[req(&["LLRPStatus"])],
        response_for: Some("ADD_ROSPEC"),
    },
    RawMessage {
        name: "DELETE_ROSPEC",
        type_num: 21,
        custom: None,
        fields: &[f("ROSpecID", U32)],
        children: &[],
        response_for: None,
    },
    RawMessage {
        name: "DELETE_ROSPEC_RESPONSE",
        type_num: 31,
        custom: None,
        fields: &[],
        children: &[req(&["LLRPStatus"])],
        response_for: Some("DELETE_ROSPEC"),
    },
    RawMessage {
        name: "START_ROSPEC",
        type_num: 22,
        custom: None,
        fields: &[f("ROSpecID", U32)],
        children: &[],
        response_for: None,
    },
    RawMessage {
        name: "START_ROSPEC_RESPONSE",
        type_num: 32,
        custom: None,
        fields: &[],
        children: &[req(&["LLRPStatus"])],
        response_for: Some("START_ROSPEC"),
    },
    RawMessage {
        name: "STOP_ROSPEC",
        type_num: 23,
        custom: None,
        fields: &[f("ROSpecID", U32)],
        children: &[],
        response_for: None,
    },
    RawMessage {
        name: "STOP_ROSPEC_RESPONSE",
        type_num: 33,
        custom: None,
        fields: &[],
        children: &[req(&["LLRPStatus"])],
        response_for: Some("STOP_ROSPEC"),
    },
    RawMessage {
        name: "ENABLE_ROSPEC",
        type_num: 24,
        custom: None,
        fields: &[f("ROSpecID", U32)],
        children: &[],
        response_for: None,
    },
    RawMessage {
        name: "ENABLE_ROSPEC_RESPONSE",
        type_num: 34,
        custom: None,
        fields: &[],
        children: &[req(&["LLRPStatus"])],
        response_for: Some("ENABLE_ROSPEC"),
    },
    RawMessage {
        name: "DISABLE_ROSPEC",
        type_num: 25,
        custom: None,
        fields: &[f("ROSpecID", U32)],
        children: &[],
        response_for: None,
    },
    RawMessage {
        name: "DISABLE_ROSPEC_RESPONSE",
        type_num: 35,
        custom: None,
        fields: &[],
        children: &[req(&["LLRPStatus"])],
        response_for: Some("DISABLE_ROSPEC"),
    },
    RawMessage {
        name: "GET_ROSPECS",
        type_num: 26,
        custom: None,
        fields: &[],
        children: &[],
        response_for: None,
    },
    RawMessage {
        name: "GET_ROSPECS_RESPONSE",
        type_num: 36,
        custom: None,
        fields: &[],
        children: &[req(&["LLRPStatus"]), many(&["ROSpec"])],
        response_for: Some("GET_ROSPECS"),
    },
    RawMessage {
        name: "ADD_ACCESSSPEC",
        type_num: 40,
        custom: None,
        fields: &[],
        children: &[req(&["AccessSpec"])],
        response_for: None,
    },
    RawMessage {
        name: "ADD_ACCESSSPEC_RESPONSE",
        type_num: 50,
        custom: None,
        fields: &[],
        children: &[req(&["LLRPStatus"])],
        response_for: Some("ADD_ACCESSSPEC"),
    },
    RawMessage {
        name: "DELETE_ACCESSSPEC",
        type_num: 41,
        custom: None,
        fields: &[f("AccessSpecID", U32)],
        children: &[],
        response_for: None,
    },
    RawMessage {
        name: "DELETE_ACCESSSPEC_RESPONSE",
        type_num: 51,
        custom: None,
        fields: &[],
        children: &[req(&["LLRPStatus"])],
        response_for: Some("DELETE_ACCESSSPEC"),
    },
    RawMessage {
        name: "ENABLE_ACCESSSPEC",
        type_num: 42,
        custom: None,
        fields: &[f("AccessSpecID", U32)],
        children: &[],
        response_for: None,
    },
    RawMessage {
        name: "ENABLE_ACCESSSPEC_RESPONSE",
        type_num: 52,
        custom: None,
        fields: &[],
        children: &[req(&["LLRPStatus"])],
        response_for: Some("ENABLE_ACCESSSPEC"),
    },
    RawMessage {
        name: "DISABLE_ACCESSSPEC",
        type_num: 43,
        custom: None,
        fields: &[f("AccessSpecID", U32)],
        children: &[],
        response_for: None,
    },
    RawMessage {
        name: "DISABLE_ACCESSSPEC_RESPONSE",
        type_num: 53,
        custom: None,
        fields: &[],
        children: &[req(&["LLRPStatus"])],
        response_for: Some("DISABLE_ACCESSSPEC"),
    },
    RawMessage {
        name: "GET_ACCESSSPECS",
        type_num: 44,
        custom: None,
        fields: &[],
        children: &[],
        response_for: None,
    },
    RawMessage {
        name: "GET_ACCESSSPECS_RESPONSE",
        type_num: 54,
        custom: None,
        fields: &[],
        children: &[req(&["LLRPStatus"]), many(&["AccessSpec"])],
        response_for: Some("GET_ACCESSSPECS"),
    },
    RawMessage {
        name: "CLIENT_REQUEST_OP",
        type_num: 45,
        custom: None,
        fields: &[],
        children: &[req(&["TagReportData"])],
        response_for: None,
    },
    RawMessage {
        name: "CLIENT_REQUEST_OP_RESPONSE",
        type_num: 55,
        custom: None,
        fields: &[],
        children: &[req(&["ClientRequestResponse"])],
        response_for: Some("CLIENT_REQUEST_OP"),
    },
    RawMessage {
        name: "GET_REPORT",
        type_num: 60,
        custom: None,
        fields: &[],
        children: &[],
        response_for: None,
    },
    RawMessage {
        name: "RO_ACCESS_REPORT",
        type_num: 61,
        custom: None,
        fields: &[],
        children: &[
            many(&["TagReportData"]),
            many(&["RFSurveyReportData"]),
            many(&["Custom"]),
        ],
        response_for: None,
    },
    RawMessage {
        name: "KEEPALIVE",
        type_num: 62,
        custom: None,
        fields: &[],
        children: &[],
        response_for: None,
    },
    RawMessage {
        name: "KEEPALIVE_ACK",
        type_num: 72,
        custom: None,
        fields: &[],
        children: &[],
        response_for: None,
    },
    RawMessage {
        name: "READER_EVENT_NOTIFICATION",
        type_num: 63,
        custom: None,
        fields: &[],
        children: &[req(&["ReaderEventNotificationData"])],
        response_for: None,
    },
    RawMessage {
        name: "ENABLE_EVENTS_AND_REPORTS",
        type_num: 64,
        custom: None,
        fields: &[],
        children: &[],
        response_for: None,
    },
    RawMessage {
        name: "ERROR_MESSAGE",
        type_num: 100,
        custom: None,
        fields: &[],
        children: &[req(&["LLRPStatus"])],
        response_for: None,
    },
    // The generic custom message. Unregistered vendor extensions decode into
    // this spec with their payload kept opaque in `Data`.
    RawMessage {
        name: "CUSTOM_MESSAGE",
        type_num: 1023,
        custom: None,
        fields: &[
            f("VendorIdentifier", U32),
            f("MessageSubtype", U8),
            f("Data", BytesToEnd),
        ],
        children: &[],
        response_for: None,
    },
    // Impinj vendor extension messages.
    RawMessage {
        name: "IMPINJ_ENABLE_EXTENSIONS",
        type_num: 1023,
        custom: Some((IMPINJ, 21)),
        fields: &[res(32)],
        children: &[],
        response_for: None,
    },
    RawMessage {
        name: "IMPINJ_ENABLE_EXTENSIONS_RESPONSE",
        type_num: 1023,
        custom: Some((IMPINJ, 22)),
        fields: &[],
        children: &[req(&["LLRPStatus"])],
        response_for: Some("IMPINJ_ENABLE_EXTENSIONS"),
    },
];
