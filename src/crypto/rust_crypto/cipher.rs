//! Unpadded block mode and stream cipher operations for the RustCrypto backend.

use super::{Cipher, Transform};
use crate::{
    crypto::{
        cipher::{CipherContext, Direction},
        cipher_descriptor::{CipherDescriptorRef, CipherFamily, CipherMode},
    },
    error::{OracleError, Result},
};
use aes::{Aes128, Aes192, Aes256};
use cipher::{
    consts::{
        U1, U10, U11, U12, U13, U14, U15, U16, U17, U18, U19, U2, U20, U21, U22, U23, U24, U25,
        U26, U27, U28, U29, U3, U30, U31, U32, U4, U5, U6, U7, U8, U9,
    },
    generic_array::GenericArray,
    BlockCipher, BlockDecryptMut, BlockEncryptMut, BlockSizeUser, KeyInit, KeyIvInit,
    StreamCipher,
};
use ctr::{Ctr128BE, Ctr32BE};
use des::{Des, TdesEde2, TdesEde3};
use ofb::Ofb;
use rc4::Rc4;

/// GCM encrypts starting at the counter block after `J0 = nonce || 0x00000001`
const GCM_FIRST_COUNTER: u32 = 2;

type BoxedTransform = Box<dyn Transform>;

macro_rules! aes_mode {
    ($aes:ty, $descriptor:expr, $direction:expr, $key:expr, $iv:expr) => {
        match $descriptor.mode {
            CipherMode::Ecb => ecb_mode::<$aes>($direction, $key),
            CipherMode::Cbc => cbc_mode::<$aes>($direction, $key, $iv),
            CipherMode::Ctr => keystream::<Ctr128BE<$aes>>($key, $iv),
            CipherMode::Ofb => keystream::<Ofb<$aes>>($key, $iv),
            CipherMode::Gcm => keystream::<Ctr32BE<$aes>>($key, &gcm_counter_block($iv)),
            CipherMode::Stream => unsupported($descriptor),
        }
    };
}

macro_rules! rc4_key_sizes {
    ($key:expr, $($len:literal => $size:ty),+ $(,)?) => {
        match $key.len() {
            $($len => keyed_stream::<Rc4<$size>>($key),)+
            len => {
                log::debug!("RC4 key of {len} bytes is not supported");
                Err(OracleError::SetupFailure)
            }
        }
    };
}

impl CipherContext for Cipher {
    fn init(
        descriptor: CipherDescriptorRef,
        direction: Direction,
        key: &[u8],
        iv: &[u8],
    ) -> Result<Self> {
        let iv = if iv.is_empty() {
            vec![0u8; descriptor.iv_len]
        } else {
            iv.to_vec()
        };

        let transform = match descriptor.family {
            CipherFamily::Des => des_mode::<Des>(descriptor, direction, key, &iv),
            CipherFamily::DesEde => des_mode::<TdesEde2>(descriptor, direction, key, &iv),
            CipherFamily::DesEde3 => des_mode::<TdesEde3>(descriptor, direction, key, &iv),
            CipherFamily::Rc4 => rc4(key),
            CipherFamily::Aes => match descriptor.key_len_bits {
                128 => aes_mode!(Aes128, descriptor, direction, key, &iv),
                192 => aes_mode!(Aes192, descriptor, direction, key, &iv),
                256 => aes_mode!(Aes256, descriptor, direction, key, &iv),
                _ => unsupported(descriptor),
            },
        }?;

        Ok(Self {
            transform,
            awaits_tag: descriptor.mode == CipherMode::Gcm && direction == Direction::Decrypt,
        })
    }

    fn update(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        self.transform.transform(input)
    }

    fn finalize(self) -> Result<Vec<u8>> {
        if self.awaits_tag {
            log::debug!("GCM decryption cannot be finalized without an authentication tag");
            return Err(OracleError::FinalizeFailure);
        }

        // neither padding nor buffering, every byte was released by update
        Ok(Vec::new())
    }
}

fn des_mode<C>(
    descriptor: CipherDescriptorRef,
    direction: Direction,
    key: &[u8],
    iv: &[u8],
) -> Result<BoxedTransform>
where
    C: BlockCipher + BlockEncryptMut + BlockDecryptMut + KeyInit + Send + 'static,
{
    match descriptor.mode {
        CipherMode::Ecb => ecb_mode::<C>(direction, key),
        CipherMode::Cbc => cbc_mode::<C>(direction, key, iv),
        _ => unsupported(descriptor),
    }
}

fn rc4(key: &[u8]) -> Result<BoxedTransform> {
    rc4_key_sizes!(key,
        1 => U1, 2 => U2, 3 => U3, 4 => U4, 5 => U5, 6 => U6, 7 => U7, 8 => U8,
        9 => U9, 10 => U10, 11 => U11, 12 => U12, 13 => U13, 14 => U14, 15 => U15, 16 => U16,
        17 => U17, 18 => U18, 19 => U19, 20 => U20, 21 => U21, 22 => U22, 23 => U23, 24 => U24,
        25 => U25, 26 => U26, 27 => U27, 28 => U28, 29 => U29, 30 => U30, 31 => U31, 32 => U32,
    )
}

fn unsupported(descriptor: CipherDescriptorRef) -> Result<BoxedTransform> {
    log::debug!(
        "{:?} in {:?} mode is not supported",
        descriptor.family,
        descriptor.mode
    );
    Err(OracleError::SetupFailure)
}

fn gcm_counter_block(nonce: &[u8]) -> Vec<u8> {
    [nonce, &GCM_FIRST_COUNTER.to_be_bytes()].concat()
}

fn ecb_mode<C>(direction: Direction, key: &[u8]) -> Result<BoxedTransform>
where
    C: BlockCipher + BlockEncryptMut + BlockDecryptMut + KeyInit + Send + 'static,
{
    let transform: BoxedTransform = match direction {
        Direction::Encrypt => Box::new(Encrypting(ecb::Encryptor::<C>::new_from_slice(key)?)),
        Direction::Decrypt => Box::new(Decrypting(ecb::Decryptor::<C>::new_from_slice(key)?)),
    };

    Ok(transform)
}

fn cbc_mode<C>(direction: Direction, key: &[u8], iv: &[u8]) -> Result<BoxedTransform>
where
    C: BlockCipher + BlockEncryptMut + BlockDecryptMut + KeyInit + Send + 'static,
{
    let transform: BoxedTransform = match direction {
        Direction::Encrypt => Box::new(Encrypting(cbc::Encryptor::<C>::new_from_slices(key, iv)?)),
        Direction::Decrypt => Box::new(Decrypting(cbc::Decryptor::<C>::new_from_slices(key, iv)?)),
    };

    Ok(transform)
}

fn keystream<S>(key: &[u8], iv: &[u8]) -> Result<BoxedTransform>
where
    S: KeyIvInit + StreamCipher + Send + 'static,
{
    Ok(Box::new(Streaming(S::new_from_slices(key, iv)?)))
}

fn keyed_stream<S>(key: &[u8]) -> Result<BoxedTransform>
where
    S: KeyInit + StreamCipher + Send + 'static,
{
    Ok(Box::new(Streaming(S::new_from_slice(key)?)))
}

struct Encrypting<M>(M);
struct Decrypting<M>(M);
struct Streaming<S>(S);

impl<M> Transform for Encrypting<M>
where
    M: BlockEncryptMut + Send,
{
    fn transform(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = aligned_copy::<M>(input)?;
        for block in output.chunks_exact_mut(M::block_size()) {
            self.0.encrypt_block_mut(GenericArray::from_mut_slice(block));
        }

        Ok(output)
    }
}

impl<M> Transform for Decrypting<M>
where
    M: BlockDecryptMut + Send,
{
    fn transform(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = aligned_copy::<M>(input)?;
        for block in output.chunks_exact_mut(M::block_size()) {
            self.0.decrypt_block_mut(GenericArray::from_mut_slice(block));
        }

        Ok(output)
    }
}

impl<S> Transform for Streaming<S>
where
    S: StreamCipher + Send,
{
    fn transform(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = input.to_vec();
        self.0.try_apply_keystream(&mut output).map_err(|err| {
            log::debug!("Keystream exhausted: {err}");
            OracleError::UpdateFailure
        })?;

        Ok(output)
    }
}

fn aligned_copy<M: BlockSizeUser>(input: &[u8]) -> Result<Vec<u8>> {
    let block_size = M::block_size();
    if input.len() % block_size != 0 {
        log::debug!(
            "Input of {} bytes is not a multiple of the {block_size} byte block size",
            input.len()
        );
        return Err(OracleError::UpdateFailure);
    }

    Ok(input.to_vec())
}
