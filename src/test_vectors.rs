use lazy_static::lazy_static;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize, Debug)]
pub struct CipherTest {
    pub name: String,
    pub cipher: String,
    #[serde(deserialize_with = "from_hex")]
    pub key: Vec<u8>,
    #[serde(default, deserialize_with = "from_hex")]
    pub iv: Vec<u8>,
    #[serde(deserialize_with = "from_hex")]
    pub plain_text: Vec<u8>,
    #[serde(deserialize_with = "from_hex")]
    pub cipher_text: Vec<u8>,
}

#[derive(Deserialize, Debug)]
pub struct AeadTest {
    pub name: String,
    pub aead: String,
    #[serde(deserialize_with = "from_hex")]
    pub key: Vec<u8>,
    #[serde(deserialize_with = "from_hex")]
    pub nonce: Vec<u8>,
    #[serde(default, deserialize_with = "from_hex")]
    pub aad: Vec<u8>,
    #[serde(deserialize_with = "from_hex")]
    pub plain_text: Vec<u8>,
    #[serde(deserialize_with = "from_hex")]
    pub cipher_text: Vec<u8>,
    #[serde(deserialize_with = "from_hex")]
    pub tag: Vec<u8>,
}

fn from_hex<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: &str = Deserialize::deserialize(deserializer)?;
    hex::decode(s).map_err(serde::de::Error::custom)
}

lazy_static! {
    static ref CIPHER_TESTS: Vec<CipherTest> =
        serde_json::from_str(include_str!("../test-vectors/cipher.json")).unwrap();
    static ref AEAD_TESTS: Vec<AeadTest> =
        serde_json::from_str(include_str!("../test-vectors/aead.json")).unwrap();
}

pub fn get_cipher_test_vector(name: &str) -> &'static CipherTest {
    CIPHER_TESTS
        .iter()
        .find(|test| test.name == name)
        .unwrap_or_else(|| panic!("no cipher test vector named {name:?}"))
}

pub fn get_aead_test_vector(name: &str) -> &'static AeadTest {
    AEAD_TESTS
        .iter()
        .find(|test| test.name == name)
        .unwrap_or_else(|| panic!("no AEAD test vector named {name:?}"))
}

pub fn cipher_test_vectors() -> &'static [CipherTest] {
    &CIPHER_TESTS
}
