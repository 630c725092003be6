//! RustCrypto-based cryptographic operations.
//!
//! This module uses pure Rust implementations from the RustCrypto project.

mod aead;
mod cipher;

use crate::{crypto::aead_descriptor::AeadDescriptorRef, error::OracleError};
use aes_gcm::{Aes128Gcm, Aes256Gcm};

/// A single pass of a block mode or stream cipher.
trait Transform: Send {
    fn transform(&mut self, input: &[u8]) -> Result<Vec<u8>, OracleError>;
}

/// Cipher context using RustCrypto libraries.
///
/// Supports DES, triple DES, RC4 and AES in ECB, CBC, CTR, OFB and GCM (keystream only) mode.
pub struct Cipher {
    transform: Box<dyn Transform>,
    /// GCM decryption cannot finish without a tag to verify
    awaits_tag: bool,
}

enum GcmCipher {
    Aes128(Aes128Gcm),
    Aes256(Aes256Gcm),
}

/// AEAD context using RustCrypto libraries.
///
/// Supports AES-GCM with internally generated nonces and tags of 1 to 16 bytes.
pub struct Aead {
    descriptor: AeadDescriptorRef,
    cipher: GcmCipher,
    tag_len: usize,
}

impl From<::cipher::InvalidLength> for OracleError {
    fn from(err: ::cipher::InvalidLength) -> Self {
        log::debug!("Primitive rejected key or IV: {err}");
        OracleError::SetupFailure
    }
}
