use core::fmt;

use crate::consts::{AES_128_IV_SIZE, AES_128_KEY_SIZE, INITIAL_SEQUENCE_COUNTER};

/// Per-connection state the envelope builders read from.
///
/// Builders only take `&self`. The sole mutation is
/// [`advance_sequence_counter`](Session::advance_sequence_counter), which the
/// transmission hook calls after the transport accepted an envelope; taking
/// `&mut self` there is what keeps build-and-send serialized per session.
pub trait Session {
    /// Device identity written little-endian into every send-message header.
    fn pump_mac(&self) -> u64;

    /// AES key material.
    fn key(&self) -> &[u8];

    /// CFB initialization vector.
    fn iv(&self) -> &[u8];

    /// Counter value the next send-message envelope will carry.
    fn sequence_counter(&self) -> u8;

    /// Move the counter on by one, wrapping at 255.
    fn advance_sequence_counter(&mut self);
}

/// Session state for one connected pump.
#[derive(Clone, PartialEq, Eq)]
pub struct PumpSession {
    pump_mac: u64,
    key: [u8; AES_128_KEY_SIZE],
    iv: [u8; AES_128_IV_SIZE],
    sequence_counter: u8,
}

impl PumpSession {
    /// Open a session whose counter starts at [`INITIAL_SEQUENCE_COUNTER`].
    #[must_use]
    pub fn new(pump_mac: u64, key: [u8; AES_128_KEY_SIZE], iv: [u8; AES_128_IV_SIZE]) -> Self {
        Self {
            pump_mac,
            key,
            iv,
            sequence_counter: INITIAL_SEQUENCE_COUNTER,
        }
    }

    /// Start the counter at `counter` instead.
    #[must_use]
    pub fn with_sequence_counter(mut self, counter: u8) -> Self {
        self.sequence_counter = counter;
        self
    }
}

impl Session for PumpSession {
    fn pump_mac(&self) -> u64 {
        self.pump_mac
    }

    fn key(&self) -> &[u8] {
        &self.key
    }

    fn iv(&self) -> &[u8] {
        &self.iv
    }

    fn sequence_counter(&self) -> u8 {
        self.sequence_counter
    }

    fn advance_sequence_counter(&mut self) {
        self.sequence_counter = self.sequence_counter.wrapping_add(1);
    }
}

impl fmt::Debug for PumpSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PumpSession")
            .field("pump_mac", &format_args!("{:#018x}", self.pump_mac))
            .field("key", &"<redacted>")
            .field("iv", &"<redacted>")
            .field("sequence_counter", &self.sequence_counter)
            .finish()
    }
}
