//! 128-bit identifier value type.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::error::RandomError;

const VERSION_7: u8 = 0x70;
const VARIANT_RFC: u8 = 0x80;

/// Fixed-size 128-bit identifier.
///
/// The value is stored as 16 bytes in **big-endian** order, so ordering
/// by [`Ord`] matches ordering of the canonical text form and, for
/// version 7 identifiers, ordering by creation time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// The all-zero identifier.
    pub const NIL: Self = Self([0u8; 16]);

    /// Wraps 16 big-endian bytes.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Builds a version 7 identifier from a 48-bit millisecond timestamp
    /// and 10 random bytes.
    ///
    /// The high nibble of `rand[0]` is replaced by the version and the two
    /// high bits of `rand[2]` by the variant, leaving 74 random bits.
    /// Timestamp bits above the 48th are ignored.
    pub(crate) fn from_v7_parts(unix_ts_ms: u64, rand: [u8; 10]) -> Self {
        let mut bytes = [0u8; 16];

        bytes[..6].copy_from_slice(&unix_ts_ms.to_be_bytes()[2..]);
        bytes[6..].copy_from_slice(&rand);
        bytes[6] = (bytes[6] & 0x0f) | VERSION_7;
        bytes[8] = (bytes[8] & 0x3f) | VARIANT_RFC;

        Self(bytes)
    }

    /// The identifier as 16 big-endian bytes.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// The leading 48 bits interpreted as milliseconds since the Unix
    /// epoch.
    pub fn timestamp_ms(&self) -> u64 {
        self.0[..6]
            .iter()
            .fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
    }

    /// The 4-bit version field.
    pub fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// The 2-bit variant field.
    pub fn variant(&self) -> u8 {
        self.0[8] >> 6
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(value: Uuid) -> Self {
        value.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

impl Display for Uuid {
    /// Formats the value in the canonical 8-4-4-4-12 form using lowercase
    /// hexadecimal digits.
    ///
    /// Example:
    /// `01809424-3e59-7c05-9219-566f82fff672`
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (i, byte) in self.0.iter().enumerate() {
            if matches!(i, 4 | 6 | 8 | 10) {
                f.write_str("-")?;
            }

            write!(f, "{byte:02x}")?;
        }

        Ok(())
    }
}

impl FromStr for Uuid {
    type Err = RandomError;

    /// Parses the canonical 36-character hyphenated form. Upper and
    /// lowercase digits are both accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.as_bytes();

        if text.len() != 36 || [8, 13, 18, 23].iter().any(|&i| text[i] != b'-') {
            return Err(RandomError::invalid(format!(
                "\"{s}\" is not a hyphenated 36-character identifier"
            )));
        }

        let digits: Vec<u8> = text.iter().copied().filter(|&c| c != b'-').collect();
        let mut bytes = [0u8; 16];

        hex::decode_to_slice(&digits, &mut bytes).map_err(|err| {
            RandomError::invalid(format!("\"{s}\" is not a valid identifier: {err}"))
        })?;

        Ok(Self(bytes))
    }
}
