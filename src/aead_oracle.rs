use crate::{
    crypto::{
        aead::{AeadContext, AeadOpen, AeadSeal},
        aead_descriptor::AeadDescriptorRef,
        Aead,
    },
    error::{OracleError, Result},
    util::HexDisplay,
};

/// Seals a plaintext under a nonce the primitive generates itself.
#[derive(Debug, Clone, Copy)]
pub struct SealRequest<'a> {
    pub descriptor: AeadDescriptorRef,
    pub key: &'a [u8],
    pub plaintext: &'a [u8],
    pub aad: &'a [u8],
    /// requested tag length in bytes, 0 selects the longest tag of the construction.
    /// Tags as short as 1 byte are accepted,
    /// the 4 byte minimum of NIST SP 800-38D is not enforced.
    pub tag_len: usize,
}

/// The parts of a sealed message, `nonce || ciphertext || tag` as produced by the primitive
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SealResult {
    pub nonce: Vec<u8>,
    pub ciphertext: Vec<u8>,
    pub tag: Vec<u8>,
}

impl SealResult {
    fn split(mut combined: Vec<u8>, nonce_len: usize, tag_len: usize) -> Self {
        let tag = combined.split_off(combined.len() - tag_len);
        let ciphertext = combined.split_off(nonce_len);

        Self {
            nonce: combined,
            ciphertext,
            tag,
        }
    }
}

impl SealRequest<'_> {
    /// # Errors
    /// - [`OracleError::SetupFailure`] if the key or tag length is rejected
    /// - [`OracleError::SealFailure`] if sealing fails or the output does not frame as
    ///   `nonce || ciphertext || tag`
    pub fn seal(&self) -> Result<SealResult> {
        let descriptor = self.descriptor;
        let tag_len = match self.tag_len {
            0 => descriptor.max_tag_len,
            tag_len => tag_len,
        };

        log::trace!(
            "Sealing {} bytes with {} key {} aad {} tag length {tag_len}",
            self.plaintext.len(),
            descriptor.identifier,
            HexDisplay(self.key),
            HexDisplay(self.aad)
        );

        let aead = Aead::init(descriptor, self.key, tag_len)?;
        let combined = aead.seal(self.plaintext, self.aad)?;

        let capacity = self.plaintext.len() + descriptor.max_overhead;
        if combined.len() > capacity || combined.len() < descriptor.nonce_len + tag_len {
            log::debug!(
                "Sealed output of {} bytes does not fit a {} byte nonce and a {tag_len} byte tag",
                combined.len(),
                descriptor.nonce_len
            );
            return Err(OracleError::SealFailure);
        }

        let sealed = SealResult::split(combined, descriptor.nonce_len, tag_len);
        log::trace!(
            "Sealed nonce {} ciphertext {} tag {}",
            HexDisplay(&sealed.nonce),
            HexDisplay(&sealed.ciphertext),
            HexDisplay(&sealed.tag)
        );

        Ok(sealed)
    }
}

/// Opens a message given as separate nonce, ciphertext and tag.
///
/// The tag length the context is keyed for is taken from `tag`.
#[derive(Debug, Clone, Copy)]
pub struct OpenRequest<'a> {
    pub descriptor: AeadDescriptorRef,
    pub key: &'a [u8],
    pub nonce: &'a [u8],
    pub ciphertext: &'a [u8],
    pub tag: &'a [u8],
    pub aad: &'a [u8],
    /// the plaintext has to be exactly this long for the open to succeed
    pub expected_plaintext_len: usize,
    /// informational, the AAD is used as given
    pub expected_aad_len: usize,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct OpenResult {
    pub plaintext: Vec<u8>,
}

impl OpenRequest<'_> {
    /// # Errors
    /// - [`OracleError::SetupFailure`] if the key or tag length is rejected, an empty tag included
    /// - [`OracleError::AuthenticationFailure`] if the tag does not verify or the plaintext
    ///   length differs from `expected_plaintext_len`
    pub fn open(&self) -> Result<OpenResult> {
        let descriptor = self.descriptor;
        if self.aad.len() != self.expected_aad_len {
            log::trace!(
                "AAD of {} bytes given, {} bytes announced",
                self.aad.len(),
                self.expected_aad_len
            );
        }

        log::trace!(
            "Opening {} with key {} nonce {} ciphertext {} tag {} aad {}",
            descriptor.identifier,
            HexDisplay(self.key),
            HexDisplay(self.nonce),
            HexDisplay(self.ciphertext),
            HexDisplay(self.tag),
            HexDisplay(self.aad)
        );

        let aead = Aead::init(descriptor, self.key, self.tag.len())?;
        let input = [self.nonce, self.ciphertext, self.tag].concat();
        let plaintext = aead.open(&input, self.aad)?;

        if plaintext.len() != self.expected_plaintext_len {
            log::debug!(
                "Opened {} bytes of plaintext, expected {}",
                plaintext.len(),
                self.expected_plaintext_len
            );
            return Err(OracleError::AuthenticationFailure);
        }

        Ok(OpenResult { plaintext })
    }
}

/// Shorthand for building a [`SealRequest`] and sealing it.
///
/// ```
/// use cavp_oracle::{resolve_aead, seal_aead};
///
/// let gcm = resolve_aead("aes-128-gcm")?;
/// let sealed = seal_aead(gcm, &[0u8; 16], b"plain text", b"", 0)?;
/// assert_eq!(sealed.nonce.len(), 12);
/// assert_eq!(sealed.ciphertext.len(), 10);
/// assert_eq!(sealed.tag.len(), 16);
/// # Ok::<(), cavp_oracle::error::OracleError>(())
/// ```
///
/// # Errors
/// see [`SealRequest::seal`]
pub fn seal_aead(
    descriptor: AeadDescriptorRef,
    key: &[u8],
    plaintext: &[u8],
    aad: &[u8],
    tag_len: usize,
) -> Result<SealResult> {
    SealRequest {
        descriptor,
        key,
        plaintext,
        aad,
        tag_len,
    }
    .seal()
}

/// Shorthand for building an [`OpenRequest`] and opening it, returning the plaintext.
///
/// # Errors
/// see [`OpenRequest::open`]
#[allow(clippy::too_many_arguments)]
pub fn open_aead(
    descriptor: AeadDescriptorRef,
    key: &[u8],
    nonce: &[u8],
    ciphertext: &[u8],
    tag: &[u8],
    aad: &[u8],
    expected_plaintext_len: usize,
    expected_aad_len: usize,
) -> Result<Vec<u8>> {
    OpenRequest {
        descriptor,
        key,
        nonce,
        ciphertext,
        tag,
        aad,
        expected_plaintext_len,
        expected_aad_len,
    }
    .open()
    .map(|opened| opened.plaintext)
}
