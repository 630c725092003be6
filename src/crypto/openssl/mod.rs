//! OpenSSL-based cryptographic operations.
//!
//! Cipher operations go through the EVP cipher context, so their behaviour matches OpenSSL
//! down to key length handling and buffering of partial blocks.
//! OpenSSL 3 keeps single DES and RC4 in its legacy provider; unless that provider is loaded,
//! setting up those ciphers fails.

mod aead;
mod cipher;

use crate::{
    crypto::{aead_descriptor::AeadDescriptorRef, cipher::Direction},
    error::OracleError,
};
use openssl::symm::{Crypter, Mode};

/// Cipher context using an OpenSSL `EVP_CIPHER_CTX` with padding disabled.
pub struct Cipher {
    crypter: Crypter,
    block_size: usize,
}

/// AEAD context using OpenSSL AES-GCM, the nonce is drawn from the OpenSSL CSPRNG.
pub struct Aead {
    descriptor: AeadDescriptorRef,
    cipher: openssl::symm::Cipher,
    key: Vec<u8>,
    tag_len: usize,
}

impl From<Direction> for Mode {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Encrypt => Mode::Encrypt,
            Direction::Decrypt => Mode::Decrypt,
        }
    }
}

fn setup_failure(err: openssl::error::ErrorStack) -> OracleError {
    log::debug!("Setup failed, OpenSSL error stack: {err}");
    OracleError::SetupFailure
}
