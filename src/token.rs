//! Random text tokens
//!
//! Tokens are freshly drawn random bytes rendered as text, suitable for
//! session identifiers, password-reset links, CSRF values and similar
//! secrets. Two encodings are provided:
//!
//! - [`token_hex`]: two lowercase hexadecimal digits per byte, so the
//!   output is always `2 * num_bytes` characters long.
//! - [`token_urlsafe`]: base64 with the URL-safe alphabet (`-` and `_`)
//!   and no padding, `ceil(num_bytes * 4 / 3)` characters long.
//!
//! The `*_default` variants use [`DEFAULT_ENTROPY`] bytes.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::config::DEFAULT_ENTROPY;
use crate::error::Result;
use crate::rng::{ByteSource, OsRng, fresh_bytes};

pub(crate) fn hex_from<S: ByteSource + ?Sized>(source: &mut S, num_bytes: usize) -> Result<String> {
    let bytes = fresh_bytes(source, num_bytes)?;

    Ok(hex::encode(bytes))
}

pub(crate) fn urlsafe_from<S: ByteSource + ?Sized>(
    source: &mut S,
    num_bytes: usize,
) -> Result<String> {
    let bytes = fresh_bytes(source, num_bytes)?;

    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

/// Returns `num_bytes` random bytes as a lowercase hexadecimal string.
pub fn token_hex(num_bytes: usize) -> Result<String> {
    hex_from(&mut OsRng, num_bytes)
}

/// Returns a hexadecimal token carrying [`DEFAULT_ENTROPY`] random bytes.
pub fn token_hex_default() -> Result<String> {
    token_hex(DEFAULT_ENTROPY)
}

/// Returns `num_bytes` random bytes as unpadded URL-safe base64.
pub fn token_urlsafe(num_bytes: usize) -> Result<String> {
    urlsafe_from(&mut OsRng, num_bytes)
}

/// Returns a URL-safe token carrying [`DEFAULT_ENTROPY`] random bytes.
pub fn token_urlsafe_default() -> Result<String> {
    token_urlsafe(DEFAULT_ENTROPY)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<u8>);

    impl ByteSource for Fixed {
        fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
            buf.copy_from_slice(&self.0[..buf.len()]);
            Ok(())
        }
    }

    #[test]
    fn hex_is_lowercase_and_zero_padded() {
        let mut source = Fixed(vec![0x00, 0x0f, 0xab, 0xff]);

        assert_eq!(hex_from(&mut source, 4).unwrap(), "000fabff");
    }

    #[test]
    fn urlsafe_substitutes_alphabet() {
        // standard base64 of these bytes is "+/+/"
        let mut source = Fixed(vec![0xfb, 0xff, 0xbf]);

        assert_eq!(urlsafe_from(&mut source, 3).unwrap(), "-_-_");
    }

    #[test]
    fn urlsafe_drops_padding() {
        let mut source = Fixed(vec![0xff]);

        assert_eq!(urlsafe_from(&mut source, 1).unwrap(), "_w");
    }
}
