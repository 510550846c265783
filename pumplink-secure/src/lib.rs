#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod cipher;
pub mod consts;
pub mod envelope;
pub mod error;
pub mod session;
pub mod transmit;
pub mod types;

pub use error::{CryptoError, CryptoErrorKind};
pub use session::{PumpSession, Session};
pub use types::{SendEnvelopeHeader, SendInner};

pub use cipher::{decrypt, encrypt};
pub use envelope::{build_pump_request, command_envelope, open_send_message, seal_send_message};
#[cfg(feature = "std")]
pub use transmit::WriteTransport;
pub use transmit::{SendError, Transport, send_message, transmit};
