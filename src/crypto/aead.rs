use super::aead_descriptor::AeadDescriptorRef;
use crate::error::Result;

/// An AEAD context of the crypto backend, keyed for a fixed tag length.
pub trait AeadContext: Sized {
    fn init(descriptor: AeadDescriptorRef, key: &[u8], tag_len: usize) -> Result<Self>;
}

pub trait AeadSeal {
    /// Seals `plaintext` under a nonce the primitive generates itself.
    ///
    /// The output is framed as `nonce || ciphertext || tag`.
    fn seal(&self, plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>>;
}

pub trait AeadOpen {
    /// Opens an input framed as `nonce || ciphertext || tag`, returning the plaintext
    fn open(&self, input: &[u8], aad: &[u8]) -> Result<Vec<u8>>;
}
