use std::str::FromStr;

use cavp_oracle::{
    apply_cipher, encode_hex, open_aead, resolve_aead, resolve_cipher, seal_aead,
    supported_aeads, supported_ciphers, Direction,
};
use clap::{Parser, Subcommand};

fn main() {
    let Args { log_level, command } = Args::parse();

    if let Some(log_level) = log_level {
        println!("- Using log level {}", log_level);
        simple_logger::init_with_level(log_level).unwrap();
    }

    match command {
        Command::List => {
            supported_ciphers().for_each(|c| {
                println!(
                    "- cipher {:<14} key {:>3} bits, iv {:>2} bytes",
                    c.identifier, c.key_len_bits, c.iv_len
                );
            });
            supported_aeads().for_each(|a| {
                println!(
                    "- aead   {:<14} key {:>3} bits, nonce {:>2} bytes",
                    a.identifier, a.key_len_bits, a.nonce_len
                );
            });
        }
        Command::Cipher {
            cipher,
            decrypt,
            key: Hex(key),
            iv: Hex(iv),
            input: Hex(input),
        } => {
            let descriptor = resolve_cipher(&cipher).unwrap();
            let direction = if decrypt {
                Direction::Decrypt
            } else {
                Direction::Encrypt
            };

            match apply_cipher(descriptor, direction, &key, &iv, &input) {
                Ok(output) => println!("- {direction:?}ed: {}", encode_hex(output)),
                Err(err) => println!("- {direction:?} failed: {err}"),
            }
        }
        Command::Seal {
            aead,
            key: Hex(key),
            aad: Hex(aad),
            tag_len,
            plaintext: Hex(plaintext),
        } => {
            let descriptor = resolve_aead(&aead).unwrap();
            match seal_aead(descriptor, &key, &plaintext, &aad, tag_len) {
                Ok(sealed) => {
                    println!("- Nonce:      {}", encode_hex(&sealed.nonce));
                    println!("- Ciphertext: {}", encode_hex(&sealed.ciphertext));
                    println!("- Tag:        {}", encode_hex(&sealed.tag));

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
                    println!("- Opened:     {}", encode_hex(opened));
                }
                Err(err) => println!("- Seal failed: {err}"),
            }
        }
    }
}

/// Hex encoded bytes on the command line
#[derive(Clone, Debug)]
struct Hex(Vec<u8>);

impl FromStr for Hex {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex::decode(s).map(Hex)
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long)]
    log_level: Option<log::Level>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// lists all registered ciphers and AEADs
    List,
    /// applies an unpadded cipher to hex encoded input
    Cipher {
        #[arg(short, long, default_value = "aes-128-cbc")]
        cipher: String,
        #[arg(short, long)]
        decrypt: bool,
        #[arg(short, long)]
        key: Hex,
        #[arg(short, long, default_value = "")]
        iv: Hex,
        input: Hex,
    },
    /// seals hex encoded plaintext and opens it again
    Seal {
        #[arg(short, long, default_value = "aes-128-gcm")]
        aead: String,
        #[arg(short, long)]
        key: Hex,
        #[arg(long, default_value = "")]
        aad: Hex,
        #[arg(short, long, default_value_t = 0)]
        tag_len: usize,
        plaintext: Hex,
    },
}
