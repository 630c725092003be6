use super::cipher_descriptor::CipherDescriptorRef;
use crate::error::Result;

/// Whether a cipher operation encrypts or decrypts its input
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// A cipher context of the crypto backend, set up for exactly one unpadded operation.
///
/// The context is released when dropped, which also covers failed operations.
pub trait CipherContext: Sized {
    /// Configures the context with the actual key length, an empty `iv` leaves the IV zeroed.
    fn init(
        descriptor: CipherDescriptorRef,
        direction: Direction,
        key: &[u8],
        iv: &[u8],
    ) -> Result<Self>;

    /// Transforms `input`, returning all bytes the primitive released so far
    fn update(&mut self, input: &[u8]) -> Result<Vec<u8>>;

    /// Finishes the operation, returning any bytes the primitive still held back
    fn finalize(self) -> Result<Vec<u8>>;
}
