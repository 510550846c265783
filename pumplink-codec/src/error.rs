use core::fmt;

/// Specific kind of build error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildErrorKind {
    /// Output buffer is too small.
    BufferTooSmall,
    /// Payload does not fit the one-byte length field.
    PayloadTooLarge,
    /// Checksum range does not leave room for the two trailing checksum bytes.
    Checksum,
}

/// Error returned by builder functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildError {
    pub kind: BuildErrorKind,
}

impl BuildError {
    #[must_use]
    pub fn new(kind: BuildErrorKind) -> Self {
        Self { kind }
    }

    #[must_use]
    pub fn buffer_too_small() -> Self {
        Self::new(BuildErrorKind::BufferTooSmall)
    }

    #[must_use]
    pub fn payload_too_large() -> Self {
        Self::new(BuildErrorKind::PayloadTooLarge)
    }

    #[must_use]
    pub fn checksum() -> Self {
        Self::new(BuildErrorKind::Checksum)
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            BuildErrorKind::BufferTooSmall => write!(f, "output buffer too small"),
            BuildErrorKind::PayloadTooLarge => write!(f, "payload exceeds the length field"),
            BuildErrorKind::Checksum => write!(f, "checksum range overlaps the checksum field"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BuildError {}
