use std::fmt;

/// Encodes `bytes` as a lowercase hex string, most significant nibble first.
///
/// ```
/// assert_eq!(cavp_oracle::encode_hex([0x00, 0xff, 0x10]), "00ff10");
/// ```
pub fn encode_hex<B: AsRef<[u8]>>(bytes: B) -> String {
    hex::encode(bytes)
}

/// Renders a byte buffer as lowercase hex when formatted, without allocating upfront.
///
/// Meant for log statements, so that buffers are only encoded if the log level is enabled:
/// ```
/// use cavp_oracle::HexDisplay;
/// let tag = [0xab, 0x6e];
/// assert_eq!(format!("{}", HexDisplay(&tag)), "ab6e");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HexDisplay<'a>(pub &'a [u8]);

impl fmt::Display for HexDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|byte| write!(f, "{byte:02x}"))
    }
}

#[cfg(test)]
pub mod test {
    use super::{encode_hex, HexDisplay};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[allow(clippy::missing_panics_doc)]
    pub fn assert_bytes_eq(l: &[u8], r: &[u8]) {
        assert_eq!(encode_hex(l), encode_hex(r));
    }

    #[test_case(&[], ""; "empty")]
    #[test_case(&[0x00, 0xff, 0x10], "00ff10"; "mixed nibbles")]
    #[test_case(&[0x0a, 0xb0], "0ab0"; "leading zero nibble")]
    #[test_case(&[0xde, 0xad, 0xbe, 0xef], "deadbeef"; "lowercase")]
    fn encodes_known_bytes(bytes: &[u8], expected: &str) {
        assert_eq!(encode_hex(bytes), expected);
        assert_eq!(HexDisplay(bytes).to_string(), expected);
    }

    #[test]
    fn encoding_doubles_length_and_decodes_back() {
        let bytes: Vec<u8> = (0..=u8::MAX).collect();
        let encoded = encode_hex(&bytes);

        assert_eq!(encoded.len(), 2 * bytes.len());
        assert_eq!(hex::decode(&encoded).unwrap(), bytes);
    }
}
