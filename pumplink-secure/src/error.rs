use core::fmt;

use pumplink_codec::{BuildError, BuildErrorKind};

/// Specific kind of crypto error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CryptoErrorKind {
    /// Key size does not match AES-128.
    InvalidKeySize,
    /// IV size does not match the cipher block size.
    InvalidIvSize,
    /// The cipher backend feature is not enabled at compile time.
    CipherNotEnabled,
    /// Checksum range overlaps the checksum field.
    Checksum,
    /// Payload does not fit a one-byte length field.
    PayloadTooLarge,
    /// Output buffer is too small.
    BufferTooSmall,
    /// Envelope is too short to contain a valid header or sub-message.
    EnvelopeTooShort,
    /// Marker byte is not the send-message marker.
    InvalidMarker,
    /// Encrypted-block length field disagrees with the bytes present.
    LengthMismatch,
    /// Sub-message checksum does not match its contents.
    ChecksumMismatch,
}

/// Error returned by envelope and cipher operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CryptoError {
    pub kind: CryptoErrorKind,
}

impl CryptoError {
    #[must_use]
    pub fn new(kind: CryptoErrorKind) -> Self {
        Self { kind }
    }

    #[must_use]
    pub fn invalid_key_size() -> Self {
        Self::new(CryptoErrorKind::InvalidKeySize)
    }

    #[must_use]
    pub fn invalid_iv_size() -> Self {
        Self::new(CryptoErrorKind::InvalidIvSize)
    }

    #[must_use]
    pub fn cipher_not_enabled() -> Self {
        Self::new(CryptoErrorKind::CipherNotEnabled)
    }

    #[must_use]
    pub fn envelope_too_short() -> Self {
        Self::new(CryptoErrorKind::EnvelopeTooShort)
    }

    #[must_use]
    pub fn invalid_marker() -> Self {
        Self::new(CryptoErrorKind::InvalidMarker)
    }

    #[must_use]
    pub fn length_mismatch() -> Self {
        Self::new(CryptoErrorKind::LengthMismatch)
    }

    #[must_use]
    pub fn checksum_mismatch() -> Self {
        Self::new(CryptoErrorKind::ChecksumMismatch)
    }

    /// Whether the cipher could not be set up or run.
    ///
    /// Retrying with the same session material will fail the same way; the
    /// session keys should be treated as unusable.
    #[must_use]
    pub fn is_encryption_failure(&self) -> bool {
        matches!(
            self.kind,
            CryptoErrorKind::InvalidKeySize
                | CryptoErrorKind::InvalidIvSize
                | CryptoErrorKind::CipherNotEnabled
        )
    }
}

impl From<BuildError> for CryptoError {
    fn from(err: BuildError) -> Self {
        match err.kind {
            BuildErrorKind::BufferTooSmall => Self::new(CryptoErrorKind::BufferTooSmall),
            BuildErrorKind::PayloadTooLarge => Self::new(CryptoErrorKind::PayloadTooLarge),
            BuildErrorKind::Checksum => Self::new(CryptoErrorKind::Checksum),
        }
    }
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let desc = match self.kind {
            CryptoErrorKind::InvalidKeySize => "invalid encryption key size",
            CryptoErrorKind::InvalidIvSize => "invalid IV size",
            CryptoErrorKind::CipherNotEnabled => "cipher not enabled (missing feature flag)",
            CryptoErrorKind::Checksum => "checksum range overlaps the checksum field",
            CryptoErrorKind::PayloadTooLarge => "payload exceeds the length field",
            CryptoErrorKind::BufferTooSmall => "output buffer too small",
            CryptoErrorKind::EnvelopeTooShort => "envelope too short",
            CryptoErrorKind::InvalidMarker => "not a send-message envelope",
            CryptoErrorKind::LengthMismatch => "encrypted length does not match envelope",
            CryptoErrorKind::ChecksumMismatch => "sub-message checksum mismatch",
        };
        f.write_str(desc)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CryptoError {}
