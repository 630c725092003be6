//! # Cipher and AEAD oracle for algorithm validation
//! This library drives raw symmetric primitives the way algorithm validation test harnesses
//! (e.g. NIST CAVP) expect: ciphers are looked up by their textual identifier, operations run
//! unpadded on caller supplied key, IV and input, and results are compared as lowercase hex.
//!
//! - [`apply_cipher`] encrypts or decrypts with one of the block mode or stream ciphers of
//!   [`supported_ciphers`]
//! - [`seal_aead`] and [`open_aead`] drive the AES-GCM constructions of [`supported_aeads`],
//!   sealing always uses a nonce generated by the primitive itself
//! - [`encode_hex`] renders results for comparison against expected values
//!
//! # Optional features
//!
//! The crypto backend is chosen with cargo features. Exactly one has to be enabled,
//! configuring both makes `cavp-oracle` fail to compile.
//!
//! - **`rust-crypto`** *(enabled by default)*: Uses the pure Rust implementations of the [RustCrypto](https://github.com/RustCrypto) project.
//! RC4 keys are limited to at most 32 bytes.
//! - **`openssl`**: Uses the [rust-openssl](https://crates.io/crates/openssl) crate, which provides bindings to OpenSSL.
//! Per default the OpenSSL library is locally compiled and then statically linked. The build process requires a C compiler,
//! `perl` (and `perl-core`), and `make`. For further options see the [openssl crate documentation](https://docs.rs/openssl/0.10.55/openssl/).
//! OpenSSL 3 only provides single DES and RC4 if its legacy provider is loaded.

#![deny(clippy::missing_panics_doc)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
#![warn(
    // missing_docs,
    clippy::doc_markdown,
    clippy::semicolon_if_nothing_returned,
    clippy::single_match_else,
    clippy::inconsistent_struct_constructor,
    clippy::map_unwrap_or,
    clippy::match_same_arms
)]

mod crypto;
mod util;

/// sealing and opening with AEAD constructions, see [`seal_aead`] and [`open_aead`]
pub mod aead_oracle;
/// unpadded block mode and stream cipher operations, see [`apply_cipher`]
pub mod cipher_oracle;
/// error definitions
pub mod error;

pub use aead_oracle::{open_aead, seal_aead, OpenRequest, OpenResult, SealRequest, SealResult};
pub use cipher_oracle::{apply_cipher, CipherRequest};
pub use crypto::{
    aead_descriptor::{resolve_aead, supported_aeads, AeadDescriptor, AeadDescriptorRef},
    cipher::Direction,
    cipher_descriptor::{
        resolve_cipher, supported_ciphers, CipherDescriptor, CipherDescriptorRef, CipherFamily,
        CipherMode,
    },
};
pub use util::{encode_hex, HexDisplay};

#[cfg(test)]
mod test_vectors;
