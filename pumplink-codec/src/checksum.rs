//! CCITT 16-bit checksum (MSB-first, no reflection, no final XOR).

use crate::consts::CRC_SIZE;
use crate::error::BuildError;

/// Compute the checksum of `data` from the given register seed and generator.
///
/// With `initial = 0xFFFF` and `polynomial = 0x1021` this is the variant the
/// pump bridge expects (`"123456789"` checks to `0x29B1`).
#[must_use]
pub fn crc16_ccitt(data: &[u8], initial: u16, polynomial: u16) -> u16 {
    let mut crc = initial;
    for &byte in data {
        crc ^= u16::from(byte) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ polynomial;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

/// Checksum the first `length` bytes of an envelope buffer.
///
/// The buffer must still hold the two bytes reserved for the result after
/// the covered range; a range that runs into them is rejected.
pub fn checksum16(
    buffer: &[u8],
    initial: u16,
    polynomial: u16,
    length: usize,
) -> Result<u16, BuildError> {
    if length + CRC_SIZE > buffer.len() {
        return Err(BuildError::checksum());
    }
    Ok(crc16_ccitt(&buffer[..length], initial, polynomial))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{CRC_INITIAL, CRC_POLYNOMIAL};

    #[test]
    fn test_check_value() {
        assert_eq!(crc16_ccitt(b"123456789", CRC_INITIAL, CRC_POLYNOMIAL), 0x29B1);
    }

    #[test]
    fn test_empty_input_is_seed() {
        assert_eq!(crc16_ccitt(&[], CRC_INITIAL, CRC_POLYNOMIAL), 0xFFFF);
        assert_eq!(crc16_ccitt(&[], 0x1D0F, CRC_POLYNOMIAL), 0x1D0F);
    }

    #[test]
    fn test_single_bytes() {
        assert_eq!(crc16_ccitt(&[0x00], CRC_INITIAL, CRC_POLYNOMIAL), 0xE1F0);
        assert_eq!(crc16_ccitt(&[0x01], CRC_INITIAL, CRC_POLYNOMIAL), 0xF1D1);
    }

    #[test]
    fn test_checksum16_ignores_reserved_tail() {
        let buf = [0x02, 0x04, 0x03, 0xAA, 0xBB];
        let crc = checksum16(&buf, CRC_INITIAL, CRC_POLYNOMIAL, 3).unwrap();
        assert_eq!(crc, 0x5E5B);
    }

    #[test]
    fn test_checksum16_rejects_range_into_tail() {
        let buf = [0u8; 5];
        assert!(checksum16(&buf, CRC_INITIAL, CRC_POLYNOMIAL, 4).is_err());
        assert!(checksum16(&buf, CRC_INITIAL, CRC_POLYNOMIAL, 5).is_err());
        assert!(checksum16(&[], CRC_INITIAL, CRC_POLYNOMIAL, 0).is_err());
    }
}
