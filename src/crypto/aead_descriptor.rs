use crate::error::{OracleError, Result};

/// Depicts an AEAD construction which generates its nonce internally
/// and frames its output as `nonce || ciphertext || tag`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct AeadDescriptor {
    pub identifier: &'static str,
    pub key_len_bits: usize,
    pub nonce_len: usize,
    /// longest supported authentication tag, also used when no tag length is requested
    pub max_tag_len: usize,
    /// upper bound of output bytes on top of the plaintext
    pub max_overhead: usize,
}

pub type AeadDescriptorRef = &'static AeadDescriptor;

const GCM_NONCE_LEN: usize = 12;
const GCM_TAG_LEN: usize = 16;

impl AeadDescriptor {
    const fn aes_gcm(identifier: &'static str, key_len_bits: usize) -> Self {
        Self {
            identifier,
            key_len_bits,
            nonce_len: GCM_NONCE_LEN,
            max_tag_len: GCM_TAG_LEN,
            max_overhead: GCM_NONCE_LEN + GCM_TAG_LEN,
        }
    }

    pub const fn key_len(&self) -> usize {
        self.key_len_bits / 8
    }
}

static AEADS: phf::Map<&'static str, AeadDescriptor> = phf::phf_map! {
    "aes-128-gcm" => AeadDescriptor::aes_gcm("aes-128-gcm", 128),
    "aes-256-gcm" => AeadDescriptor::aes_gcm("aes-256-gcm", 256),
};

/// Looks up the AEAD construction registered under `identifier`, exact and case sensitive.
pub fn resolve_aead(identifier: &str) -> Result<AeadDescriptorRef> {
    AEADS.get(identifier).ok_or_else(|| {
        log::debug!("No AEAD registered as {identifier:?}");
        OracleError::NotFound(identifier.to_owned())
    })
}

/// All constructions which can be resolved by [`resolve_aead`]
pub fn supported_aeads() -> impl Iterator<Item = AeadDescriptorRef> {
    AEADS.values()
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("aes-128-gcm", 128)]
    #[test_case("aes-256-gcm", 256)]
    fn resolves_aes_gcm(identifier: &str, key_len_bits: usize) {
        let descriptor = resolve_aead(identifier).unwrap();

        assert_eq!(descriptor.identifier, identifier);
        assert_eq!(descriptor.key_len_bits, key_len_bits);
        assert_eq!(descriptor.nonce_len, 12);
        assert_eq!(descriptor.max_overhead, 28);
    }

    #[test]
    fn rejects_unknown_identifier() {
        assert_eq!(
            resolve_aead("chacha20-poly1305"),
            Err(OracleError::NotFound("chacha20-poly1305".into()))
        );
        assert_eq!(supported_aeads().count(), 2);
    }
}
