use alloc::vec::Vec;

use crate::consts::{AES_128_IV_SIZE, AES_128_KEY_SIZE};
use crate::error::CryptoError;

/// Encrypt `plaintext` with AES-128 in CFB mode without padding.
///
/// The output is exactly as long as the input.
pub fn encrypt(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
  check_sizes(key, iv)?;
  encrypt_aes128_cfb(key, iv, plaintext)
}

/// Decrypt AES-128-CFB ciphertext produced by [`encrypt`].
pub fn decrypt(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
  check_sizes(key, iv)?;
  decrypt_aes128_cfb(key, iv, ciphertext)
}

fn check_sizes(key: &[u8], iv: &[u8]) -> Result<(), CryptoError> {
  if key.len() != AES_128_KEY_SIZE {
    return Err(CryptoError::invalid_key_size());
  }
  if iv.len() != AES_128_IV_SIZE {
    return Err(CryptoError::invalid_iv_size());
  }
  Ok(())
}

// ---------------------------------------------------------------------------
// AES-128-CFB
// ---------------------------------------------------------------------------

#[cfg(feature = "aes-128-cfb")]
fn encrypt_aes128_cfb(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
  use aes::Aes128;
  use cfb_mode::cipher::{AsyncStreamCipher, KeyIvInit};

  type Aes128CfbEnc = cfb_mode::Encryptor<Aes128>;

  let cipher =
    Aes128CfbEnc::new_from_slices(key, iv).map_err(|_| CryptoError::invalid_key_size())?;
  let mut buf = plaintext.to_vec();
  cipher.encrypt(&mut buf);
  Ok(buf)
}

#[cfg(not(feature = "aes-128-cfb"))]
fn encrypt_aes128_cfb(_key: &[u8], _iv: &[u8], _plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
  Err(CryptoError::cipher_not_enabled())
}

#[cfg(feature = "aes-128-cfb")]
fn decrypt_aes128_cfb(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
  use aes::Aes128;
  use cfb_mode::cipher::{AsyncStreamCipher, KeyIvInit};

  type Aes128CfbDec = cfb_mode::Decryptor<Aes128>;

  let cipher =
    Aes128CfbDec::new_from_slices(key, iv).map_err(|_| CryptoError::invalid_key_size())?;
  let mut buf = ciphertext.to_vec();
  cipher.decrypt(&mut buf);
  Ok(buf)
}

#[cfg(not(feature = "aes-128-cfb"))]
fn decrypt_aes128_cfb(_key: &[u8], _iv: &[u8], _ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
  Err(CryptoError::cipher_not_enabled())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::CryptoErrorKind;

  #[test]
  #[cfg(feature = "aes-128-cfb")]
  fn test_zero_key_keystream() {
    // First block of AES-128(0^128) with a zero IV is the CFB keystream.
    let out = encrypt(&[0u8; 16], &[0u8; 16], &[0u8; 16]).unwrap();
    assert_eq!(
      out.as_slice(),
      &[
        0x66, 0xe9, 0x4b, 0xd4, 0xef, 0x8a, 0x2c, 0x3b, 0x88, 0x4c, 0xfa, 0x59, 0xca, 0x34, 0x2b,
        0x2e
      ]
    );
  }

  #[test]
  #[cfg(feature = "aes-128-cfb")]
  fn test_no_padding_for_partial_blocks() {
    for len in [0usize, 1, 5, 15, 17, 40] {
      let plaintext = alloc::vec![0x5a; len];
      let out = encrypt(&[7u8; 16], &[9u8; 16], &plaintext).unwrap();
      assert_eq!(out.len(), len);
    }
  }

  #[test]
  #[cfg(feature = "aes-128-cfb")]
  fn test_multi_block_vector() {
    let plaintext: Vec<u8> = (0u8..40).collect();
    let out = encrypt(&[0u8; 16], &[0u8; 16], &plaintext).unwrap();
    #[rustfmt::skip]
    let expected: [u8; 40] = [
      0x66, 0xe8, 0x49, 0xd7, 0xeb, 0x8f, 0x2a, 0x3c, 0x80, 0x45, 0xf0, 0x52, 0xc6, 0x39, 0x25, 0x21,
      0x4a, 0xcc, 0xf1, 0xbe, 0x6a, 0xe8, 0x2b, 0x29, 0x4d, 0x4d, 0x3c, 0x0a, 0x85, 0xac, 0xe0, 0x12,
      0x32, 0x95, 0x16, 0xd3, 0x68, 0x37, 0xa5, 0xba,
    ];
    assert_eq!(out.as_slice(), &expected);
  }

  #[test]
  #[cfg(feature = "aes-128-cfb")]
  fn test_decrypt_inverts_encrypt() {
    let key = [0x2bu8; 16];
    let iv = [0x11u8; 16];
    let plaintext = b"\x03\x01\x12\xaa\xbb\x40\x6c";
    let ciphertext = encrypt(&key, &iv, plaintext).unwrap();
    assert_ne!(ciphertext.as_slice(), plaintext);
    assert_eq!(decrypt(&key, &iv, &ciphertext).unwrap().as_slice(), plaintext);
  }

  #[test]
  fn test_rejects_bad_key_size() {
    let err = encrypt(&[0u8; 15], &[0u8; 16], b"abc").unwrap_err();
    assert_eq!(err.kind, CryptoErrorKind::InvalidKeySize);
    let err = encrypt(&[0u8; 32], &[0u8; 16], b"abc").unwrap_err();
    assert_eq!(err.kind, CryptoErrorKind::InvalidKeySize);
    assert!(err.is_encryption_failure());
  }

  #[test]
  fn test_rejects_bad_iv_size() {
    let err = encrypt(&[0u8; 16], &[0u8; 12], b"abc").unwrap_err();
    assert_eq!(err.kind, CryptoErrorKind::InvalidIvSize);
    let err = decrypt(&[0u8; 16], &[], b"abc").unwrap_err();
    assert_eq!(err.kind, CryptoErrorKind::InvalidIvSize);
  }
}
