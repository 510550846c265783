use core::fmt;

use pumplink_codec::SendMessageType;

use crate::envelope::build_pump_request;
use crate::error::CryptoError;
use crate::session::Session;

/// Byte sink that delivers a finished envelope to the bridge device.
///
/// The transport sends exactly the bytes given; chunking, retries and
/// cancellation are its own business.
pub trait Transport {
    type Error;

    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    type Error = T::Error;

    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        (**self).send(bytes)
    }
}

/// Hand a send-message envelope to the transport, then advance the session counter.
///
/// The counter only moves when the transport reports success. On failure the
/// transport error is returned untouched and the counter keeps its value, so
/// a rebuilt envelope carries the same counter as the failed attempt.
pub fn transmit<T, S>(envelope: &[u8], transport: &mut T, session: &mut S) -> Result<(), T::Error>
where
    T: Transport + ?Sized,
    S: Session + ?Sized,
{
    let counter = session.sequence_counter();
    if let Err(err) = transport.send(envelope) {
        tracing::warn!(
            sequence_counter = counter,
            len = envelope.len(),
            "transport rejected envelope, sequence counter unchanged"
        );
        return Err(err);
    }
    session.advance_sequence_counter();
    tracing::debug!(
        sequence_counter = counter,
        next_sequence_counter = session.sequence_counter(),
        len = envelope.len(),
        "envelope transmitted"
    );
    Ok(())
}

/// Failure of [`send_message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendError<E> {
    /// The envelope could not be built; nothing was sent.
    Build(CryptoError),
    /// The transport failed; the counter was not advanced.
    Transport(E),
}

impl<E> From<CryptoError> for SendError<E> {
    fn from(err: CryptoError) -> Self {
        Self::Build(err)
    }
}

impl<E: fmt::Display> fmt::Display for SendError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Build(err) => write!(f, "failed to build envelope: {err}"),
            Self::Transport(err) => write!(f, "transport error: {err}"),
        }
    }
}

#[cfg(feature = "std")]
impl<E: std::error::Error + 'static> std::error::Error for SendError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Build(err) => Some(err),
            Self::Transport(err) => Some(err),
        }
    }
}

/// Build a pump request for `message_type` and transmit it.
pub fn send_message<T, S>(
    message_type: SendMessageType,
    session: &mut S,
    payload: &[u8],
    transport: &mut T,
) -> Result<(), SendError<T::Error>>
where
    T: Transport + ?Sized,
    S: Session + ?Sized,
{
    let request = build_pump_request(message_type, &*session, payload)?;
    transmit(&request, transport, session).map_err(SendError::Transport)
}

/// [`Transport`] over any [`std::io::Write`] handle (an opened HID device node, a pipe).
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct WriteTransport<W> {
    inner: W,
}

#[cfg(feature = "std")]
impl<W: std::io::Write> WriteTransport<W> {
    #[must_use]
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> Transport for WriteTransport<W> {
    type Error = std::io::Error;

    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.inner.write_all(bytes)?;
        self.inner.flush()
    }
}
