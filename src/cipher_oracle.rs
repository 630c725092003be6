use crate::{
    crypto::{
        cipher::{CipherContext, Direction},
        cipher_descriptor::{CipherDescriptorRef, CipherMode},
        Cipher,
    },
    error::{OracleError, Result},
    util::HexDisplay,
};

/// One unpadded encryption or decryption of `input` under a registered cipher.
///
/// An empty `iv` leaves the IV zeroed, except for GCM which needs its nonce set explicitly.
/// A non-empty one has to match [`CipherDescriptor::iv_len`](crate::CipherDescriptor::iv_len) exactly.
#[derive(Debug, Clone, Copy)]
pub struct CipherRequest<'a> {
    pub descriptor: CipherDescriptorRef,
    pub direction: Direction,
    pub key: &'a [u8],
    pub iv: &'a [u8],
    pub input: &'a [u8],
}

impl CipherRequest<'_> {
    /// Runs the request in a fresh cipher context and returns exactly `input.len()` bytes.
    ///
    /// # Errors
    /// - [`OracleError::IvLengthMismatch`] if a non-empty IV has the wrong length
    /// - [`OracleError::SetupFailure`] if the primitive rejects the key
    /// - [`OracleError::UpdateFailure`] or [`OracleError::FinalizeFailure`] if the input
    ///   cannot be processed, e.g. because block modes need block aligned input
    ///   or GCM was given no nonce
    pub fn apply(&self) -> Result<Vec<u8>> {
        let descriptor = self.descriptor;
        if !self.iv.is_empty() && self.iv.len() != descriptor.iv_len {
            log::debug!(
                "{} requires an IV of {} bytes, got {}",
                descriptor.identifier,
                descriptor.iv_len,
                self.iv.len()
            );
            return Err(OracleError::IvLengthMismatch {
                expected: descriptor.iv_len,
                actual: self.iv.len(),
            });
        }

        if self.iv.is_empty() && descriptor.mode == CipherMode::Gcm {
            log::debug!("{} cannot process input without a nonce", descriptor.identifier);
            return Err(OracleError::UpdateFailure);
        }

        log::trace!(
            "{:?} {} bytes with {} key {} iv {}",
            self.direction,
            self.input.len(),
            descriptor.identifier,
            HexDisplay(self.key),
            HexDisplay(self.iv)
        );

        let mut cipher = Cipher::init(descriptor, self.direction, self.key, self.iv)?;
        let mut output = cipher.update(self.input)?;
        output.extend(cipher.finalize()?);

        if output.len() != self.input.len() {
            log::debug!(
                "{} produced {} bytes for an input of {} bytes",
                descriptor.identifier,
                output.len(),
                self.input.len()
            );
            return Err(OracleError::FinalizeFailure);
        }

        log::trace!("Output {}", HexDisplay(&output));
        Ok(output)
    }
}

/// Shorthand for building a [`CipherRequest`] and applying it.
///
/// ```
/// use cavp_oracle::{apply_cipher, encode_hex, resolve_cipher, Direction};
///
/// let aes = resolve_cipher("aes-128-ecb")?;
/// let cipher_text = apply_cipher(aes, Direction::Encrypt, &[0u8; 16], &[], &[0u8; 16])?;
/// assert_eq!(encode_hex(cipher_text), "66e94bd4ef8a2c3b884cfa59ca342b2e");
/// # Ok::<(), cavp_oracle::error::OracleError>(())
/// ```
///
/// # Errors
/// see [`CipherRequest::apply`]
pub fn apply_cipher(
    descriptor: CipherDescriptorRef,
    direction: Direction,
    key: &[u8],
    iv: &[u8],
    input: &[u8],
) -> Result<Vec<u8>> {
    CipherRequest {
        descriptor,
        direction,
        key,
        iv,
        input,
    }
    .apply()
}
