use super::{setup_failure, Cipher};
use crate::{
    crypto::{
        cipher::{CipherContext, Direction},
        cipher_descriptor::{CipherDescriptor, CipherDescriptorRef, CipherFamily, CipherMode},
    },
    error::{OracleError, Result},
};
use openssl::{nid::Nid, symm::Crypter};

impl CipherContext for Cipher {
    fn init(
        descriptor: CipherDescriptorRef,
        direction: Direction,
        key: &[u8],
        iv: &[u8],
    ) -> Result<Self> {
        let cipher = evp_cipher(descriptor).ok_or_else(|| {
            log::debug!("OpenSSL provides no cipher for {}", descriptor.identifier);
            OracleError::SetupFailure
        })?;

        let zero_iv = vec![0u8; descriptor.iv_len];
        let iv = match (iv.is_empty(), descriptor.iv_len) {
            (_, 0) => None,
            (true, _) => Some(zero_iv.as_slice()),
            (false, _) => Some(iv),
        };
        let mut crypter =
            Crypter::new(cipher, direction.into(), key, iv).map_err(setup_failure)?;
        crypter.pad(false);

        Ok(Self {
            crypter,
            block_size: cipher.block_size(),
        })
    }

    fn update(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = vec![0u8; input.len() + self.block_size];
        let len = self.crypter.update(input, &mut output).map_err(|err| {
            log::debug!("Update failed, OpenSSL error stack: {err}");
            OracleError::UpdateFailure
        })?;
        output.truncate(len);

        Ok(output)
    }

    fn finalize(mut self) -> Result<Vec<u8>> {
        let mut output = vec![0u8; self.block_size];
        let len = self.crypter.finalize(&mut output).map_err(|err| {
            log::debug!("Finalize failed, OpenSSL error stack: {err}");
            OracleError::FinalizeFailure
        })?;
        output.truncate(len);

        Ok(output)
    }
}

fn evp_cipher(descriptor: &CipherDescriptor) -> Option<openssl::symm::Cipher> {
    use openssl::symm::Cipher as Evp;

    let cipher = match (descriptor.family, descriptor.mode, descriptor.key_len_bits) {
        (CipherFamily::Des, CipherMode::Ecb, _) => Evp::des_ecb(),
        (CipherFamily::Des, CipherMode::Cbc, _) => Evp::des_cbc(),
        (CipherFamily::DesEde, CipherMode::Ecb, _) => return Evp::from_nid(Nid::DES_EDE_ECB),
        (CipherFamily::DesEde, CipherMode::Cbc, _) => return Evp::from_nid(Nid::DES_EDE_CBC),
        (CipherFamily::DesEde3, CipherMode::Ecb, _) => Evp::des_ede3(),
        (CipherFamily::DesEde3, CipherMode::Cbc, _) => Evp::des_ede3_cbc(),
        (CipherFamily::Rc4, CipherMode::Stream, _) => Evp::rc4(),
        (CipherFamily::Aes, CipherMode::Ecb, 128) => Evp::aes_128_ecb(),
        (CipherFamily::Aes, CipherMode::Ecb, 192) => Evp::aes_192_ecb(),
        (CipherFamily::Aes, CipherMode::Ecb, 256) => Evp::aes_256_ecb(),
        (CipherFamily::Aes, CipherMode::Cbc, 128) => Evp::aes_128_cbc(),
        (CipherFamily::Aes, CipherMode::Cbc, 192) => Evp::aes_192_cbc(),
        (CipherFamily::Aes, CipherMode::Cbc, 256) => Evp::aes_256_cbc(),
        (CipherFamily::Aes, CipherMode::Ctr, 128) => Evp::aes_128_ctr(),
        (CipherFamily::Aes, CipherMode::Ctr, 192) => Evp::aes_192_ctr(),
        (CipherFamily::Aes, CipherMode::Ctr, 256) => Evp::aes_256_ctr(),
        (CipherFamily::Aes, CipherMode::Ofb, 128) => Evp::aes_128_ofb(),
        (CipherFamily::Aes, CipherMode::Ofb, 256) => Evp::aes_256_ofb(),
        (CipherFamily::Aes, CipherMode::Gcm, 128) => Evp::aes_128_gcm(),
        (CipherFamily::Aes, CipherMode::Gcm, 256) => Evp::aes_256_gcm(),
        _ => return None,
    };

    Some(cipher)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::crypto::cipher_descriptor::supported_ciphers;

    #[test]
    fn every_registered_cipher_maps_to_evp() {
        for descriptor in supported_ciphers() {
            let cipher = evp_cipher(descriptor);
            assert!(cipher.is_some(), "{}", descriptor.identifier);
        }
    }
}
