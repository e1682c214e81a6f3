//! Specification-driven LLRP 1.0.1 support for RFID readers.
//!
//! LLRP (Low Level Reader Protocol) is the standard binary protocol by
//! which host software controls RFID readers: issuing `ROSpec`s and
//! `AccessSpec`s, configuring antennas and air protocols, and receiving
//! asynchronous tag reports. This crate provides:
//!
//! - a [`spec`] model describing every message, parameter, field,
//!   enumeration, and Impinj vendor extension, loaded from pre-compiled
//!   definition tables;
//! - a generic binary [`codec`] packing and unpacking arbitrarily nested
//!   message trees with strict [`validate`] checks on types, ranges,
//!   enumerations, cardinalities, and ordering;
//! - a symmetric [`xml`] representation that round-trips with the binary
//!   form;
//! - an asynchronous reader [`session`] that frames messages over TCP,
//!   correlates request/response pairs by message ID, and delivers
//!   unsolicited notifications to a handler.
//!
//! There is no generated type per message. A message is a tagged record
//! over the specification model, constructed by name:
//!
//! ```
//! use llrp::{
//!     codec,
//!     message::{Message, Value},
//!     spec::LlrpRegistry,
//! };
//!
//! let registry = LlrpRegistry::load().expect("definition tables are consistent");
//! let request = Message::with_id(
//!     &registry,
//!     "GET_READER_CAPABILITIES",
//!     1,
//!     &[("RequestedData", Value::uint(0u8))],
//!     vec![],
//! )
//! .expect("a valid request");
//!
//! let frame = codec::encode_message(&registry, &request).expect("encodes");
//! let decoded = codec::decode_message(&registry, &frame).expect("decodes");
//! assert_eq!(decoded, request);
//! ```

pub mod bitstream;
pub mod codec;
mod error;
pub mod message;
pub mod session;
pub mod spec;
pub mod validate;
pub mod xml;

pub use codec::{decode_message, encode_message, CodecError};
pub use error::{LlrpError, Result};
pub use message::{BitArray, Message, Parameter, TagReport, Value};
pub use session::{
    ReaderHandler, ReaderSession, SessionConfig, SessionError, SessionState, LLRP_PORT,
};
pub use spec::{LlrpRegistry, SpecError};
pub use validate::ValidationError;
pub use xml::{from_xml, to_xml, XmlError};
