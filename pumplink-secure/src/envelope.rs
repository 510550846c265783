use alloc::vec;
use alloc::vec::Vec;

use pumplink_codec::consts::{
    CRC_INITIAL, CRC_POLYNOMIAL, CRC_SIZE, MAX_SEND_PAYLOAD, SEND_INNER_HEADER_SIZE,
};
use pumplink_codec::{
    BuildError, CommandAction, PumpAction, SendMessageType, build_command_envelope, build_send_inner,
    command_envelope_len, crc16_ccitt, send_inner_len,
};

use crate::cipher::{decrypt, encrypt};
use crate::consts::SEND_HEADER_SIZE;
use crate::error::CryptoError;
use crate::session::Session;
use crate::types::{SendEnvelopeHeader, SendInner};

/// Build a plain command envelope into a freshly allocated buffer.
pub fn command_envelope<A: CommandAction>(
    action: &A,
    payload: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    let mut buf = vec![0u8; command_envelope_len::<A>(payload.len())];
    let n = build_command_envelope(action, payload, &mut buf)?;
    buf.truncate(n);
    Ok(buf)
}

/// Build an encrypted send-message envelope.
///
/// ```text
/// [LE u64 pump MAC][u8 sequence counter][0x10][u8 encrypted length][encrypted sub-message]
/// ```
///
/// The counter is read, not advanced: it only moves once the envelope has
/// actually been handed to the transport (see [`crate::transmit`]).
pub fn seal_send_message<S: Session + ?Sized>(
    message_type: SendMessageType,
    session: &S,
    payload: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    if payload.len() > MAX_SEND_PAYLOAD {
        return Err(BuildError::payload_too_large().into());
    }

    let mut inner = vec![0u8; send_inner_len(payload.len())];
    let n = build_send_inner(message_type, payload, &mut inner)?;
    inner.truncate(n);

    let encrypted = encrypt(session.key(), session.iv(), &inner)?;

    let header = SendEnvelopeHeader {
        pump_mac: session.pump_mac(),
        sequence_counter: session.sequence_counter(),
        encrypted_len: encrypted.len() as u8,
    };

    let mut envelope = Vec::with_capacity(SEND_HEADER_SIZE + encrypted.len());
    envelope.extend_from_slice(&header.to_bytes());
    envelope.extend_from_slice(&encrypted);

    tracing::trace!(
        opcode = message_type.opcode(),
        message_tag = message_type.message_tag(),
        sequence_counter = header.sequence_counter,
        len = envelope.len(),
        "sealed send-message envelope"
    );

    Ok(envelope)
}

/// Seal a send-message envelope and carry it in a `PumpRequest` command envelope.
pub fn build_pump_request<S: Session + ?Sized>(
    message_type: SendMessageType,
    session: &S,
    payload: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    let sealed = seal_send_message(message_type, session, payload)?;
    command_envelope(&PumpAction::PumpRequest, &sealed)
}

/// Decrypt a send-message envelope and verify its sub-message checksum.
///
/// Meant for auditing envelopes this crate produced; device replies use a
/// different layout.
pub fn open_send_message(
    envelope: &[u8],
    key: &[u8],
    iv: &[u8],
) -> Result<(SendEnvelopeHeader, SendInner), CryptoError> {
    let header = SendEnvelopeHeader::from_bytes(envelope)?;
    let encrypted = &envelope[SEND_HEADER_SIZE..];
    if encrypted.len() != usize::from(header.encrypted_len) {
        return Err(CryptoError::length_mismatch());
    }

    let inner = decrypt(key, iv, encrypted)?;
    if inner.len() < SEND_INNER_HEADER_SIZE + CRC_SIZE {
        return Err(CryptoError::envelope_too_short());
    }

    let (body, crc) = inner.split_at(inner.len() - CRC_SIZE);
    let expected = crc16_ccitt(body, CRC_INITIAL, CRC_POLYNOMIAL);
    if crc != expected.to_be_bytes() {
        return Err(CryptoError::checksum_mismatch());
    }

    let opened = SendInner {
        message_tag: body[0],
        opcode: u16::from_be_bytes([body[1], body[2]]),
        payload: body[SEND_INNER_HEADER_SIZE..].to_vec(),
    };
    Ok((header, opened))
}
