use crate::error::{OracleError, Result};

/// The block or stream cipher algorithm behind a [`CipherDescriptor`]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CipherFamily {
    /// single DES, 64 bit key (56 effective bits)
    Des,
    /// two key triple DES (K1, K2, K1)
    DesEde,
    /// three key triple DES
    DesEde3,
    /// RC4 stream cipher, variable key length
    Rc4,
    /// AES with 128, 192 or 256 bit keys
    Aes,
}

/// The mode of operation a [`CipherDescriptor`] runs its family in
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CipherMode {
    Ecb,
    Cbc,
    /// full block big endian counter
    Ctr,
    Ofb,
    /// GCM without tag handling, i.e. only its counter mode part
    Gcm,
    /// the family is a stream cipher on its own
    Stream,
}

/// Depicts the operational parameters of a cipher as selected by its identifier,
/// e.g. `"aes-128-cbc"` or `"des-ede3"`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct CipherDescriptor {
    pub identifier: &'static str,
    pub family: CipherFamily,
    pub mode: CipherMode,
    /// nominal key length, variable length families accept other lengths as well
    pub key_len_bits: usize,
    /// IV length in bytes, 0 for modes without an IV
    pub iv_len: usize,
}

pub type CipherDescriptorRef = &'static CipherDescriptor;

const GCM_NONCE_LEN: usize = 12;

impl CipherFamily {
    pub const fn block_size(self) -> usize {
        match self {
            CipherFamily::Des | CipherFamily::DesEde | CipherFamily::DesEde3 => 8,
            CipherFamily::Aes => 16,
            CipherFamily::Rc4 => 1,
        }
    }
}

impl CipherDescriptor {
    const fn new(
        identifier: &'static str,
        family: CipherFamily,
        mode: CipherMode,
        key_len_bits: usize,
    ) -> Self {
        let iv_len = match mode {
            CipherMode::Ecb | CipherMode::Stream => 0,
            CipherMode::Cbc | CipherMode::Ctr | CipherMode::Ofb => family.block_size(),
            CipherMode::Gcm => GCM_NONCE_LEN,
        };

        Self {
            identifier,
            family,
            mode,
            key_len_bits,
            iv_len,
        }
    }

    /// nominal key length in bytes
    pub const fn key_len(&self) -> usize {
        self.key_len_bits / 8
    }

    pub const fn block_size(&self) -> usize {
        self.family.block_size()
    }

    /// stream ciphers and counter based modes accept input of any length,
    /// all other modes need block aligned input
    pub const fn is_stream(&self) -> bool {
        matches!(
            self.mode,
            CipherMode::Stream | CipherMode::Ctr | CipherMode::Ofb | CipherMode::Gcm
        )
    }
}

static CIPHERS: phf::Map<&'static str, CipherDescriptor> = phf::phf_map! {
    "des-ecb" => CipherDescriptor::new("des-ecb", CipherFamily::Des, CipherMode::Ecb, 64),
    "des-cbc" => CipherDescriptor::new("des-cbc", CipherFamily::Des, CipherMode::Cbc, 64),
    "des-ede" => CipherDescriptor::new("des-ede", CipherFamily::DesEde, CipherMode::Ecb, 128),
    "des-ede-cbc" => CipherDescriptor::new("des-ede-cbc", CipherFamily::DesEde, CipherMode::Cbc, 128),
    "des-ede3" => CipherDescriptor::new("des-ede3", CipherFamily::DesEde3, CipherMode::Ecb, 192),
    "des-ede3-cbc" => CipherDescriptor::new("des-ede3-cbc", CipherFamily::DesEde3, CipherMode::Cbc, 192),
    "rc4" => CipherDescriptor::new("rc4", CipherFamily::Rc4, CipherMode::Stream, 128),
    "aes-128-ecb" => CipherDescriptor::new("aes-128-ecb", CipherFamily::Aes, CipherMode::Ecb, 128),
    "aes-192-ecb" => CipherDescriptor::new("aes-192-ecb", CipherFamily::Aes, CipherMode::Ecb, 192),
    "aes-256-ecb" => CipherDescriptor::new("aes-256-ecb", CipherFamily::Aes, CipherMode::Ecb, 256),
    "aes-128-cbc" => CipherDescriptor::new("aes-128-cbc", CipherFamily::Aes, CipherMode::Cbc, 128),
    "aes-192-cbc" => CipherDescriptor::new("aes-192-cbc", CipherFamily::Aes, CipherMode::Cbc, 192),
    "aes-256-cbc" => CipherDescriptor::new("aes-256-cbc", CipherFamily::Aes, CipherMode::Cbc, 256),
    "aes-128-ctr" => CipherDescriptor::new("aes-128-ctr", CipherFamily::Aes, CipherMode::Ctr, 128),
    "aes-192-ctr" => CipherDescriptor::new("aes-192-ctr", CipherFamily::Aes, CipherMode::Ctr, 192),
    "aes-256-ctr" => CipherDescriptor::new("aes-256-ctr", CipherFamily::Aes, CipherMode::Ctr, 256),
    "aes-128-ofb" => CipherDescriptor::new("aes-128-ofb", CipherFamily::Aes, CipherMode::Ofb, 128),
    "aes-256-ofb" => CipherDescriptor::new("aes-256-ofb", CipherFamily::Aes, CipherMode::Ofb, 256),
    "aes-128-gcm" => CipherDescriptor::new("aes-128-gcm", CipherFamily::Aes, CipherMode::Gcm, 128),
    "aes-256-gcm" => CipherDescriptor::new("aes-256-gcm", CipherFamily::Aes, CipherMode::Gcm, 256),
};

/// Looks up the cipher registered under `identifier`.
///
/// Matching is exact and case sensitive, unknown identifiers yield [`OracleError::NotFound`].
pub fn resolve_cipher(identifier: &str) -> Result<CipherDescriptorRef> {
    CIPHERS.get(identifier).ok_or_else(|| {
        log::debug!("No cipher registered as {identifier:?}");
        OracleError::NotFound(identifier.to_owned())
    })
}

/// All ciphers which can be resolved by [`resolve_cipher`]
pub fn supported_ciphers() -> impl Iterator<Item = CipherDescriptorRef> {
    CIPHERS.values()
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("des-ecb", CipherFamily::Des, CipherMode::Ecb, 64, 0)]
    #[test_case("des-cbc", CipherFamily::Des, CipherMode::Cbc, 64, 8)]
    #[test_case("des-ede", CipherFamily::DesEde, CipherMode::Ecb, 128, 0)]
    #[test_case("des-ede-cbc", CipherFamily::DesEde, CipherMode::Cbc, 128, 8)]
    #[test_case("des-ede3", CipherFamily::DesEde3, CipherMode::Ecb, 192, 0)]
    #[test_case("des-ede3-cbc", CipherFamily::DesEde3, CipherMode::Cbc, 192, 8)]
    #[test_case("rc4", CipherFamily::Rc4, CipherMode::Stream, 128, 0)]
    #[test_case("aes-192-ecb", CipherFamily::Aes, CipherMode::Ecb, 192, 0)]
    #[test_case("aes-256-cbc", CipherFamily::Aes, CipherMode::Cbc, 256, 16)]
    #[test_case("aes-192-ctr", CipherFamily::Aes, CipherMode::Ctr, 192, 16)]
    #[test_case("aes-128-ofb", CipherFamily::Aes, CipherMode::Ofb, 128, 16)]
    #[test_case("aes-128-gcm", CipherFamily::Aes, CipherMode::Gcm, 128, 12)]
    fn resolves_registered_cipher(
        identifier: &str,
        family: CipherFamily,
        mode: CipherMode,
        key_len_bits: usize,
        iv_len: usize,
    ) {
        let descriptor = resolve_cipher(identifier).unwrap();

        assert_eq!(descriptor.identifier, identifier);
        assert_eq!(descriptor.family, family);
        assert_eq!(descriptor.mode, mode);
        assert_eq!(descriptor.key_len_bits, key_len_bits);
        assert_eq!(descriptor.iv_len, iv_len);
    }

    #[test_case("not-an-algorithm"; "unknown")]
    #[test_case("AES-128-ECB"; "case sensitive")]
    #[test_case("aes-128-ecb "; "trailing whitespace")]
    #[test_case(""; "empty")]
    fn rejects_unknown_identifier(identifier: &str) {
        assert_eq!(
            resolve_cipher(identifier),
            Err(OracleError::NotFound(identifier.to_owned()))
        );
    }

    #[test]
    fn iv_is_absent_exactly_for_ecb_and_stream_modes() {
        assert_eq!(supported_ciphers().count(), 20);
        for descriptor in supported_ciphers() {
            let without_iv = matches!(descriptor.mode, CipherMode::Ecb | CipherMode::Stream);
            assert_eq!(descriptor.iv_len == 0, without_iv, "{}", descriptor.identifier);
        }
    }

    #[test]
    fn table_keys_match_identifiers() {
        for (key, descriptor) in CIPHERS.entries() {
            assert_eq!(*key, descriptor.identifier);
        }
    }
}
