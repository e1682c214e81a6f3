//! LLRP wire framing as a Tokio codec.
//!
//! Frames are delimited by the fixed 10-octet header: the 32-bit length
//! field at offset 2 covers the whole frame. The decoder yields complete
//! frames (header included) as [`Bytes`]; interpretation is left to the
//! message codec so the read loop can correlate before fully trusting the
//! payload.

use std::io;

use bytes::{Buf, Bytes, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

use crate::codec::{CodecError, HEADER_OCTETS};

/// Framing codec for one LLRP connection.
#[derive(Clone, Debug)]
pub struct LlrpFrameCodec {
    max_frame_length: usize,
}

impl LlrpFrameCodec {
    /// Create a codec accepting frames up to `max_frame_length` octets.
    #[must_use]
    pub const fn new(max_frame_length: usize) -> Self { Self { max_frame_length } }

    /// Largest frame this codec will accept.
    #[must_use]
    pub const fn max_frame_length(&self) -> usize { self.max_frame_length }
}

/// Message type number from a complete frame's header.
#[cfg(test)]
fn frame_type(frame: &[u8]) -> u16 { u16::from_be_bytes([frame[0], frame[1]]) & 0x03FF }

/// Message ID from a complete frame's header.
#[cfg(test)]
fn frame_message_id(frame: &[u8]) -> u32 {
    u32::from_be_bytes([frame[6], frame[7], frame[8], frame[9]])
}

impl Decoder for LlrpFrameCodec {
    type Item = Bytes;
    type Error = io::Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.len() < HEADER_OCTETS {
            return Ok(None);
        }
        let declared = u32::from_be_bytes([src[2], src[3], src[4], src[5]]) as usize;
        if declared < HEADER_OCTETS {
            return Err(CodecError::Framing {
                detail: format!("header length {declared} shorter than the header itself"),
            }
            .into());
        }
        if declared > self.max_frame_length {
            return Err(CodecError::Framing {
                detail: format!(
                    "header length {declared} exceeds the {} octet limit",
                    self.max_frame_length
                ),
            }
            .into());
        }
        if src.len() < declared {
            src.reserve(declared - src.len());
            return Ok(None);
        }
        Ok(Some(src.split_to(declared).freeze()))
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        match self.decode(src)? {
            Some(frame) => Ok(Some(frame)),
            None if src.is_empty() => Ok(None),
            None => Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("connection closed mid-frame with {} octets pending", src.len()),
            )),
        }
    }
}

impl Encoder<Bytes> for LlrpFrameCodec {
    type Error = io::Error;

    fn encode(&mut self, frame: Bytes, dst: &mut BytesMut) -> Result<(), Self::Error> {
        if frame.len() > self.max_frame_length {
            return Err(CodecError::Framing {
                detail: format!(
                    "outgoing frame of {} octets exceeds the {} octet limit",
                    frame.len(),
                    self.max_frame_length
                ),
            }
            .into());
        }
        dst.reserve(frame.len());
        dst.extend_from_slice(frame.chunk());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keepalive_frame(id: u32) -> Vec<u8> {
        let mut frame = vec![0x04, 0x3E, 0x00, 0x00, 0x00, 0x0A];
        frame.extend_from_slice(&id.to_be_bytes());
        frame
    }

    #[test]
    fn partial_header_yields_no_frame() {
        let mut codec = LlrpFrameCodec::new(1024);
        let mut buf = BytesMut::from(&[0x04u8, 0x3E, 0x00][..]);
        assert!(codec.decode(&mut buf).expect("incomplete is fine").is_none());
    }

    #[test]
    fn split_delivery_reassembles_one_frame() {
        let mut codec = LlrpFrameCodec::new(1024);
        let frame = keepalive_frame(9);
        let mut buf = BytesMut::from(&frame[..6]);
        assert!(codec.decode(&mut buf).expect("incomplete").is_none());
        buf.extend_from_slice(&frame[6..]);
        let decoded = codec.decode(&mut buf).expect("complete").expect("one frame");
        assert_eq!(decoded.as_ref(), frame.as_slice());
        assert_eq!(frame_type(&decoded), 62);
        assert_eq!(frame_message_id(&decoded), 9);
    }

    #[test]
    fn back_to_back_frames_split_cleanly() {
        let mut codec = LlrpFrameCodec::new(1024);
        let mut buf = BytesMut::new();
        buf.extend_from_slice(&keepalive_frame(1));
        buf.extend_from_slice(&keepalive_frame(2));
        let first = codec.decode(&mut buf).expect("ok").expect("first frame");
        let second = codec.decode(&mut buf).expect("ok").expect("second frame");
        assert_eq!(frame_message_id(&first), 1);
        assert_eq!(frame_message_id(&second), 2);
        assert!(buf.is_empty());
    }

    #[test]
    fn undersized_length_field_is_a_framing_error() {
        let mut codec = LlrpFrameCodec::new(1024);
        let mut buf = BytesMut::from(&[0x04u8, 0x3E, 0x00, 0x00, 0x00, 0x05, 0, 0, 0, 1][..]);
        let err = codec.decode(&mut buf).expect_err("length below header size");
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn oversized_length_field_is_a_framing_error() {
        let mut codec = LlrpFrameCodec::new(64);
        let mut buf = BytesMut::from(&[0x04u8, 0x3E, 0x00, 0x00, 0x01, 0x00, 0, 0, 0, 1][..]);
        let err = codec.decode(&mut buf).expect_err("length above the limit");
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn eof_mid_frame_is_distinguished_from_clean_close() {
        let mut codec = LlrpFrameCodec::new(1024);
        let mut empty = BytesMut::new();
        assert!(codec.decode_eof(&mut empty).expect("clean close").is_none());

        let mut partial = BytesMut::from(&keepalive_frame(3)[..7]);
        let err = codec.decode_eof(&mut partial).expect_err("mid-frame close");
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
