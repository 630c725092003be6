use super::Aead;
use crate::{
    crypto::{
        aead::{AeadContext, AeadOpen, AeadSeal},
        aead_descriptor::AeadDescriptorRef,
    },
    error::{OracleError, Result},
};
use openssl::symm::{decrypt_aead, encrypt_aead, Cipher};

impl AeadContext for Aead {
    fn init(descriptor: AeadDescriptorRef, key: &[u8], tag_len: usize) -> Result<Self> {
        let cipher = match descriptor.key_len_bits {
            128 => Cipher::aes_128_gcm(),
            256 => Cipher::aes_256_gcm(),
            key_len_bits => {
                log::debug!("AES-GCM with a {key_len_bits} bit key is not supported");
                return Err(OracleError::SetupFailure);
            }
        };

        if key.len() != cipher.key_len() {
            log::debug!(
                "Key of {} bytes given, {} requires {} bytes",
                key.len(),
                descriptor.identifier,
                cipher.key_len()
            );
            return Err(OracleError::SetupFailure);
        }

        if tag_len == 0 || tag_len > descriptor.max_tag_len {
            log::debug!(
                "Tag length of {tag_len} bytes is not supported by {}",
                descriptor.identifier
            );
            return Err(OracleError::SetupFailure);
        }

        Ok(Self {
            descriptor,
            cipher,
            key: key.to_vec(),
            tag_len,
        })
    }
}

impl AeadSeal for Aead {
    fn seal(&self, plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        let mut nonce = vec![0u8; self.descriptor.nonce_len];
        openssl::rand::rand_bytes(&mut nonce).map_err(|err| {
            log::debug!("Nonce generation failed, OpenSSL error stack: {err}");
            OracleError::SealFailure
        })?;

        let mut tag = vec![0u8; self.tag_len];
        let cipher_text = encrypt_aead(
            self.cipher,
            &self.key,
            Some(&nonce),
            aad,
            plaintext,
            &mut tag,
        )
        .map_err(|err| {
            log::debug!("Sealing failed, OpenSSL error stack: {err}");
            OracleError::SealFailure
        })?;

        Ok([nonce, cipher_text, tag].concat())
    }
}

impl AeadOpen for Aead {
    fn open(&self, input: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        let nonce_len = self.descriptor.nonce_len;
        if input.len() < nonce_len + self.tag_len {
            log::debug!(
                "Input of {} bytes cannot hold a {nonce_len} byte nonce and a {} byte tag",
                input.len(),
                self.tag_len
            );
            return Err(OracleError::AuthenticationFailure);
        }

        let (nonce, remain) = input.split_at(nonce_len);
        let (cipher_text, tag) = remain.split_at(remain.len() - self.tag_len);

        decrypt_aead(self.cipher, &self.key, Some(nonce), aad, cipher_text, tag).map_err(|err| {
            log::debug!("Opening failed, OpenSSL error stack: {err}");
            OracleError::AuthenticationFailure
        })
    }
}
