/// Fixed-size header that opens a command envelope.
///
/// The codec does not interpret the header; it only needs its size up front
/// (the envelope length byte counts it) and its serialized bytes.
pub trait CommandAction {
    /// Serialized size of the action header in bytes.
    const HEADER_SIZE: usize;

    /// Write the header into `out`, which is exactly `HEADER_SIZE` bytes long.
    fn write_header(&self, out: &mut [u8]);
}

/// Command actions understood by the bridge, serialized as a single byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpAction {
    NoType = 0x00,
    ChannelNegotiate = 0x03,
    /// Carries an encrypted send-message envelope to the pump.
    PumpRequest = 0x05,
    PumpResponse = 0x55,
}

impl PumpAction {
    /// Action code (the serialized header byte).
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl CommandAction for PumpAction {
    const HEADER_SIZE: usize = 1;

    fn write_header(&self, out: &mut [u8]) {
        out[0] = self.code();
    }
}

/// Caller-defined action header of `N` opaque bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawAction<const N: usize>(pub [u8; N]);

impl<const N: usize> CommandAction for RawAction<N> {
    const HEADER_SIZE: usize = N;

    fn write_header(&self, out: &mut [u8]) {
        out.copy_from_slice(&self.0);
    }
}

/// Message type of an encrypted send-message sub-message.
///
/// Opcodes are not unique: `BeginEhsmSession`/`EndEhsmSession` and
/// `ReadPumpStatusRequest`/`ReadBasalPatternRequest` share values on the wire.
/// Only the tag byte tells some of them apart, so the caller has to track
/// which phase of the session it is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendMessageType {
    NoType,
    BeginEhsmSession,
    TimeRequest,
    ReadPumpStatusRequest,
    ReadBasalPatternRequest,
    EndEhsmSession,
}

impl SendMessageType {
    /// 16-bit opcode, written big-endian inside the sub-message.
    #[must_use]
    pub fn opcode(self) -> u16 {
        match self {
            Self::NoType => 0x0000,
            Self::BeginEhsmSession | Self::EndEhsmSession => 0x0412,
            Self::TimeRequest => 0x0403,
            Self::ReadPumpStatusRequest | Self::ReadBasalPatternRequest => 0x0112,
        }
    }

    /// Per-type tag byte that opens the sub-message.
    ///
    /// This is a protocol constant, unrelated to the session's sequence counter.
    #[must_use]
    pub fn message_tag(self) -> u8 {
        match self {
            Self::BeginEhsmSession => 0x80,
            Self::TimeRequest => 0x02,
            Self::ReadPumpStatusRequest => 0x03,
            _ => 0x00,
        }
    }

    /// Whether `opcode` is this type's opcode.
    #[must_use]
    pub fn matches_opcode(self, opcode: u16) -> bool {
        self.opcode() == opcode
    }
}
