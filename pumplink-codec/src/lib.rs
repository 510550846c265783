#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

pub mod checksum;
pub mod consts;
pub mod error;
pub mod types;

pub mod build;

pub use checksum::{checksum16, crc16_ccitt};
pub use error::{BuildError, BuildErrorKind};
pub use types::{CommandAction, PumpAction, RawAction, SendMessageType};

pub use build::{build_command_envelope, build_send_inner, command_envelope_len, send_inner_len};
