//! AEAD implementation for RustCrypto backend.

use super::{Aead, GcmCipher};
use crate::{
    crypto::{
        aead::{AeadContext, AeadOpen, AeadSeal},
        aead_descriptor::AeadDescriptorRef,
    },
    error::{OracleError, Result},
};
use aes_gcm::{
    aead::{generic_array::GenericArray, OsRng},
    AeadCore, AeadInPlace, Aes128Gcm, Aes256Gcm, KeyInit,
};
use cipher::typenum::Unsigned;
use subtle::ConstantTimeEq;

impl AeadContext for Aead {
    fn init(descriptor: AeadDescriptorRef, key: &[u8], tag_len: usize) -> Result<Self> {
        if tag_len == 0 || tag_len > descriptor.max_tag_len {
            log::debug!(
                "Tag length of {tag_len} bytes is not supported by {}",
                descriptor.identifier
            );
            return Err(OracleError::SetupFailure);
        }

        let cipher = match descriptor.key_len_bits {
            128 => GcmCipher::Aes128(Aes128Gcm::new_from_slice(key)?),
            256 => GcmCipher::Aes256(Aes256Gcm::new_from_slice(key)?),
            key_len_bits => {
                log::debug!("AES-GCM with a {key_len_bits} bit key is not supported");
                return Err(OracleError::SetupFailure);
            }
        };

        Ok(Self {
            descriptor,
            cipher,
            tag_len,
        })
    }
}

impl AeadSeal for Aead {
    fn seal(&self, plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        match &self.cipher {
            GcmCipher::Aes128(cipher) => seal_framed(cipher, self.tag_len, plaintext, aad),
            GcmCipher::Aes256(cipher) => seal_framed(cipher, self.tag_len, plaintext, aad),
        }
    }
}

impl AeadOpen for Aead {
    fn open(&self, input: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        log::trace!("Opening {} input", self.descriptor.identifier);
        match &self.cipher {
            GcmCipher::Aes128(cipher) => open_framed(cipher, self.tag_len, input, aad),
            GcmCipher::Aes256(cipher) => open_framed(cipher, self.tag_len, input, aad),
        }
    }
}

fn seal_framed<A>(cipher: &A, tag_len: usize, plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>>
where
    A: AeadInPlace + AeadCore,
{
    let nonce = A::generate_nonce(&mut OsRng);

    let mut framed = Vec::with_capacity(nonce.len() + plaintext.len() + tag_len);
    framed.extend_from_slice(&nonce);
    framed.extend_from_slice(plaintext);

    let tag = cipher
        .encrypt_in_place_detached(&nonce, aad, &mut framed[nonce.len()..])
        .map_err(|err| {
            log::debug!("Sealing failed: {err}");
            OracleError::SealFailure
        })?;
    // GCM tags are truncated by keeping their leading bytes
    framed.extend_from_slice(&tag[..tag_len]);

    Ok(framed)
}

fn open_framed<A>(cipher: &A, tag_len: usize, input: &[u8], aad: &[u8]) -> Result<Vec<u8>>
where
    A: AeadInPlace + AeadCore,
{
    let nonce_len = <A::NonceSize as Unsigned>::USIZE;
    if input.len() < nonce_len + tag_len {
        log::debug!(
            "Input of {} bytes cannot hold a {nonce_len} byte nonce and a {tag_len} byte tag",
            input.len()
        );
        return Err(OracleError::AuthenticationFailure);
    }

    let (nonce, remain) = input.split_at(nonce_len);
    let (cipher_text, tag) = remain.split_at(remain.len() - tag_len);
    let nonce = GenericArray::from_slice(nonce);
    let mut plain_text = cipher_text.to_vec();

    if tag_len == <A::TagSize as Unsigned>::USIZE {
        cipher
            .decrypt_in_place_detached(nonce, aad, &mut plain_text, GenericArray::from_slice(tag))
            .map_err(|err| {
                log::debug!("Opening failed: {err}");
                OracleError::AuthenticationFailure
            })?;

        return Ok(plain_text);
    }

    // GCTR is its own inverse: the first pass recovers the plaintext,
    // sealing that plaintext again yields the full tag over `cipher_text`.
    let open_failure = |err: aes_gcm::Error| {
        log::debug!("Opening failed: {err}");
        OracleError::AuthenticationFailure
    };
    cipher
        .encrypt_in_place_detached(nonce, aad, &mut plain_text)
        .map_err(open_failure)?;
    let mut resealed = plain_text.clone();
    let full_tag = cipher
        .encrypt_in_place_detached(nonce, aad, &mut resealed)
        .map_err(open_failure)?;

    if bool::from(full_tag[..tag_len].ct_eq(tag)) {
        Ok(plain_text)
    } else {
        log::debug!("Truncated tag of {tag_len} bytes does not match");
        Err(OracleError::AuthenticationFailure)
    }
}
