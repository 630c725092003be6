use pretty_assertions::assert_eq;
use rand::{rng, Rng};

use cavp_oracle::{
    apply_cipher, encode_hex, error::OracleError, open_aead, resolve_aead, resolve_cipher,
    seal_aead, supported_aeads, supported_ciphers, CipherDescriptorRef, CipherFamily, CipherMode,
    Direction,
};

fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    rng().fill(bytes.as_mut_slice());
    bytes
}

fn is_round_trippable(descriptor: CipherDescriptorRef) -> bool {
    // GCM decryption needs a tag, single DES and RC4 need the OpenSSL 3 legacy provider
    let legacy = matches!(descriptor.family, CipherFamily::Des | CipherFamily::Rc4);
    descriptor.mode != CipherMode::Gcm && !(cfg!(feature = "openssl") && legacy)
}

fn encrypt_decrypt_random_input(descriptor: CipherDescriptorRef) {
    let key = random_bytes(descriptor.key_len());
    let iv = random_bytes(descriptor.iv_len);
    let input = random_bytes(4 * descriptor.block_size() * 16);

    let cipher_text = apply_cipher(descriptor, Direction::Encrypt, &key, &iv, &input).unwrap();
    assert_eq!(cipher_text.len(), input.len());

    let plain_text =
        apply_cipher(descriptor, Direction::Decrypt, &key, &iv, &cipher_text).unwrap();
    assert_eq!(
        encode_hex(plain_text),
        encode_hex(&input),
        "{}",
        descriptor.identifier
    );
}

#[test]
fn decrypt_encrypted_random_input_with_every_cipher() {
    supported_ciphers()
        .filter(|descriptor| is_round_trippable(*descriptor))
        .for_each(|descriptor| (0..100).for_each(|_| encrypt_decrypt_random_input(descriptor)));
}

#[test]
fn open_sealed_random_input_with_every_aead() {
    for descriptor in supported_aeads() {
        let key = random_bytes(descriptor.key_len());
        for tag_len in [0, 4, 8, 12, 13, 16] {
            let plaintext = random_bytes(rng().random_range(0..256));
            let aad = random_bytes(rng().random_range(0..64));

            let sealed = seal_aead(descriptor, &key, &plaintext, &aad, tag_len).unwrap();
            let opened = open_aead(
                descriptor,
                &key,
                &sealed.nonce,
                &sealed.ciphertext,
                &sealed.tag,
                &aad,
                plaintext.len(),
                aad.len(),
            )
            .unwrap();

            assert_eq!(opened, plaintext);
        }
    }
}

#[test]
fn operations_run_concurrently() {
    let handles = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let cipher = resolve_cipher("aes-256-cbc").unwrap();
                let aead = resolve_aead("aes-128-gcm").unwrap();
                let key = [i as u8; 32];

                for _ in 0..50 {
                    encrypt_decrypt_random_input(cipher);

                    let sealed = seal_aead(aead, &key[..16], b"payload", b"", 0).unwrap();
                    let opened = open_aead(
                        aead,
                        &key[..16],
                        &sealed.nonce,
                        &sealed.ciphertext,
                        &sealed.tag,
                        b"",
                        7,
                        0,
                    )
                    .unwrap();
                    assert_eq!(opened, b"payload");
                }
            })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn failures_do_not_affect_subsequent_operations() {
    let descriptor = resolve_cipher("aes-128-ecb").unwrap();
    let key = [0u8; 16];

    assert!(apply_cipher(descriptor, Direction::Encrypt, &key, &[], &[0u8; 15]).is_err());
    assert!(apply_cipher(descriptor, Direction::Encrypt, &key[..8], &[], &[0u8; 16]).is_err());

    let cipher_text =
        apply_cipher(descriptor, Direction::Encrypt, &key, &[], &[0u8; 16]).unwrap();
    assert_eq!(encode_hex(cipher_text), "66e94bd4ef8a2c3b884cfa59ca342b2e");
}

#[test]
fn unknown_identifiers_are_not_found() {
    assert_eq!(
        resolve_cipher("aes-128-xts"),
        Err(OracleError::NotFound("aes-128-xts".into()))
    );
    assert_eq!(
        resolve_aead("aes-128-ccm"),
        Err(OracleError::NotFound("aes-128-ccm".into()))
    );
}
