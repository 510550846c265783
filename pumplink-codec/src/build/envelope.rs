use crate::checksum::checksum16;
use crate::consts::{
    CRC_INITIAL, CRC_POLYNOMIAL, CRC_SIZE, LENGTH_FIELD_SIZE, MAX_LENGTH_FIELD, MAX_SEND_PAYLOAD,
    SEND_INNER_HEADER_SIZE,
};
use crate::error::BuildError;
use crate::types::{CommandAction, SendMessageType};

/// A cursor-based writer into a caller-provided byte buffer.
pub struct EnvelopeWriter<'buf> {
    buf: &'buf mut [u8],
    pos: usize,
}

impl<'buf> EnvelopeWriter<'buf> {
    /// Create a new writer over the given buffer.
    pub fn new(buf: &'buf mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub fn written(&self) -> usize {
        self.pos
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<(), BuildError> {
        if self.pos + data.len() > self.buf.len() {
            return Err(BuildError::buffer_too_small());
        }
        self.buf[self.pos..self.pos + data.len()].copy_from_slice(data);
        self.pos += data.len();
        Ok(())
    }

    fn write_byte(&mut self, b: u8) -> Result<(), BuildError> {
        if self.pos >= self.buf.len() {
            return Err(BuildError::buffer_too_small());
        }
        self.buf[self.pos] = b;
        self.pos += 1;
        Ok(())
    }

    fn write_u16_be(&mut self, value: u16) -> Result<(), BuildError> {
        self.write_bytes(&value.to_be_bytes())
    }

    /// Let the action serialize itself into the next `A::HEADER_SIZE` bytes.
    fn write_action<A: CommandAction>(&mut self, action: &A) -> Result<(), BuildError> {
        let end = self.pos + A::HEADER_SIZE;
        if end > self.buf.len() {
            return Err(BuildError::buffer_too_small());
        }
        action.write_header(&mut self.buf[self.pos..end]);
        self.pos = end;
        Ok(())
    }

    /// Checksum everything written so far into the two reserved bytes.
    fn append_checksum(&mut self, big_endian: bool) -> Result<(), BuildError> {
        let crc = checksum16(self.buf, CRC_INITIAL, CRC_POLYNOMIAL, self.pos)?;
        if big_endian {
            self.write_bytes(&crc.to_be_bytes())
        } else {
            self.write_bytes(&crc.to_le_bytes())
        }
    }
}

/// Total size of a command envelope carrying `payload_len` bytes.
#[must_use]
pub fn command_envelope_len<A: CommandAction>(payload_len: usize) -> usize {
    A::HEADER_SIZE + LENGTH_FIELD_SIZE + payload_len + CRC_SIZE
}

/// Total size of a cleartext sub-message carrying `payload_len` bytes.
#[must_use]
pub fn send_inner_len(payload_len: usize) -> usize {
    SEND_INNER_HEADER_SIZE + payload_len + CRC_SIZE
}

/// Build a plain command envelope into `buf`.
///
/// ```text
/// [action header][u8 header+payload length][payload][LE u16 checksum]
/// ```
///
/// The length byte counts the action header and itself along with the
/// payload, but not the checksum. Returns the number of bytes written.
pub fn build_command_envelope<A: CommandAction>(
    action: &A,
    payload: &[u8],
    buf: &mut [u8],
) -> Result<usize, BuildError> {
    let declared = A::HEADER_SIZE + LENGTH_FIELD_SIZE + payload.len();
    if declared > MAX_LENGTH_FIELD {
        return Err(BuildError::payload_too_large());
    }
    if buf.len() < declared + CRC_SIZE {
        return Err(BuildError::buffer_too_small());
    }

    let mut w = EnvelopeWriter::new(buf);
    w.write_action(action)?;
    w.write_byte(declared as u8)?;
    w.write_bytes(payload)?;
    w.append_checksum(false)?;
    Ok(w.written())
}

/// Build the cleartext sub-message of a send-message envelope into `buf`.
///
/// ```text
/// [u8 message tag][BE u16 opcode][payload][BE u16 checksum]
/// ```
pub fn build_send_inner(
    message_type: SendMessageType,
    payload: &[u8],
    buf: &mut [u8],
) -> Result<usize, BuildError> {
    if payload.len() > MAX_SEND_PAYLOAD {
        return Err(BuildError::payload_too_large());
    }
    if buf.len() < send_inner_len(payload.len()) {
        return Err(BuildError::buffer_too_small());
    }

    let mut w = EnvelopeWriter::new(buf);
    w.write_byte(message_type.message_tag())?;
    w.write_u16_be(message_type.opcode())?;
    w.write_bytes(payload)?;
    w.append_checksum(true)?;
    Ok(w.written())
}
