pub mod envelope;

pub use envelope::{
    EnvelopeWriter, build_command_envelope, build_send_inner, command_envelope_len,
    send_inner_len,
};
