/// Size of the pump MAC field of the send-message header.
pub const PUMP_MAC_SIZE: usize = 8;

/// Size of the outer send-message header (MAC + counter + marker + length).
pub const SEND_HEADER_SIZE: usize = 11;

/// Offset of the session sequence counter inside the outer header.
pub const SEQUENCE_COUNTER_OFFSET: usize = 8;

/// Offset of the marker byte inside the outer header.
pub const MARKER_OFFSET: usize = 9;

/// Offset of the encrypted-block length inside the outer header.
pub const ENCRYPTED_LEN_OFFSET: usize = 10;

/// Marker byte that identifies an encrypted send-message envelope.
pub const SEND_MESSAGE_MARKER: u8 = 0x10;

/// AES-128 key size.
pub const AES_128_KEY_SIZE: usize = 16;

/// CFB initialization vector size (one AES block).
pub const AES_128_IV_SIZE: usize = 16;

/// Sequence counter value of a freshly opened session.
pub const INITIAL_SEQUENCE_COUNTER: u8 = 1;
