/// Initial register value of the CCITT checksum used throughout the protocol.
pub const CRC_INITIAL: u16 = 0xFFFF;

/// Generator polynomial of the CCITT checksum.
pub const CRC_POLYNOMIAL: u16 = 0x1021;

/// Size of the trailing checksum field of every envelope.
pub const CRC_SIZE: usize = 2;

/// Size of the one-byte length field that follows the command action header.
pub const LENGTH_FIELD_SIZE: usize = 1;

/// Largest value the one-byte length fields can carry.
pub const MAX_LENGTH_FIELD: usize = u8::MAX as usize;

/// Size of the cleartext sub-message header (tag byte + BE opcode).
pub const SEND_INNER_HEADER_SIZE: usize = 3;

/// Size of the opcode field inside the sub-message.
pub const OPCODE_SIZE: usize = 2;

/// Largest payload a sub-message can carry while its total size still fits
/// the one-byte encrypted length field of the outer header.
pub const MAX_SEND_PAYLOAD: usize = MAX_LENGTH_FIELD - SEND_INNER_HEADER_SIZE - CRC_SIZE;
