pub mod aead;
pub mod aead_descriptor;
pub mod cipher;
pub mod cipher_descriptor;

cfg_if::cfg_if! {
if #[cfg(all(feature = "rust-crypto", not(feature = "openssl")))] {
    mod rust_crypto;
    pub use rust_crypto::{Aead, Cipher};
}
else if #[cfg(all(feature = "openssl", not(feature = "rust-crypto")))] {
    mod openssl;
    pub use self::openssl::{Aead, Cipher};
} else {
    compile_error!("Configure exactly one crypto backend, either `rust-crypto` or `openssl`.");
    mod rust_crypto;
    pub use rust_crypto::{Aead, Cipher};
}
}
