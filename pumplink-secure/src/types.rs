use alloc::vec::Vec;

use crate::consts::{
    ENCRYPTED_LEN_OFFSET, MARKER_OFFSET, PUMP_MAC_SIZE, SEND_HEADER_SIZE, SEND_MESSAGE_MARKER,
    SEQUENCE_COUNTER_OFFSET,
};
use crate::error::CryptoError;

/// Cleartext outer header of a send-message envelope (first 11 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendEnvelopeHeader {
    /// Pump MAC (little-endian u64 on the wire).
    pub pump_mac: u64,
    /// Session sequence counter at the time the envelope was built.
    pub sequence_counter: u8,
    /// Length of the encrypted sub-message that follows.
    pub encrypted_len: u8,
}

impl SendEnvelopeHeader {
    /// Serialize the header, marker byte included.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; SEND_HEADER_SIZE] {
        let mut out = [0u8; SEND_HEADER_SIZE];
        out[..PUMP_MAC_SIZE].copy_from_slice(&self.pump_mac.to_le_bytes());
        out[SEQUENCE_COUNTER_OFFSET] = self.sequence_counter;
        out[MARKER_OFFSET] = SEND_MESSAGE_MARKER;
        out[ENCRYPTED_LEN_OFFSET] = self.encrypted_len;
        out
    }

    /// Parse a header from raw bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self, CryptoError> {
        if data.len() < SEND_HEADER_SIZE {
            return Err(CryptoError::envelope_too_short());
        }
        if data[MARKER_OFFSET] != SEND_MESSAGE_MARKER {
            return Err(CryptoError::invalid_marker());
        }
        let mut mac = [0u8; PUMP_MAC_SIZE];
        mac.copy_from_slice(&data[..PUMP_MAC_SIZE]);
        Ok(Self {
            pump_mac: u64::from_le_bytes(mac),
            sequence_counter: data[SEQUENCE_COUNTER_OFFSET],
            encrypted_len: data[ENCRYPTED_LEN_OFFSET],
        })
    }
}

/// Decrypted and checksum-verified sub-message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendInner {
    pub message_tag: u8,
    pub opcode: u16,
    pub payload: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CryptoErrorKind;

    #[test]
    fn test_header_layout() {
        let header = SendEnvelopeHeader {
            pump_mac: 0x0123_4567_89ab_cdef,
            sequence_counter: 7,
            encrypted_len: 5,
        };
        assert_eq!(
            header.to_bytes(),
            [0xef, 0xcd, 0xab, 0x89, 0x67, 0x45, 0x23, 0x01, 0x07, 0x10, 0x05]
        );
        assert_eq!(SendEnvelopeHeader::from_bytes(&header.to_bytes()).unwrap(), header);
    }

    #[test]
    fn test_header_too_short() {
        let err = SendEnvelopeHeader::from_bytes(&[0x10; 10]).unwrap_err();
        assert_eq!(err.kind, CryptoErrorKind::EnvelopeTooShort);
    }

    #[test]
    fn test_header_wrong_marker() {
        let mut bytes = [0u8; SEND_HEADER_SIZE];
        bytes[MARKER_OFFSET] = 0x11;
        let err = SendEnvelopeHeader::from_bytes(&bytes).unwrap_err();
        assert_eq!(err.kind, CryptoErrorKind::InvalidMarker);
    }
}
