// libcalypso/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts the contactless link away from the session
/// logic. One call is one command/response round trip.
pub trait Transport {
    /// Send one command APDU and return the raw response, trailing status
    /// word included.
    fn send_and_receive(&mut self, command: &[u8]) -> Result<Vec<u8>>;

    /// Drop any link state before a new card session. Default is a no-op.
    fn reset(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn send_and_receive(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        (**self).send_and_receive(command)
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send_and_receive(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        (**self).send_and_receive(command)
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }
}
