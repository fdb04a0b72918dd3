// pn532-nfc-rs/pn532-nfc/src/types.rs

//! Card identifiers

use std::fmt;

use derive_more::{From, Into};

use crate::Error;
use crate::constants::NO_CARD_UID;

/// UID - Newtype Pattern (4 バイト, ISO14443-A single size)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Into)]
pub struct Uid([u8; 4]);

impl Uid {
    /// Reserved value the reader reports when no tag is present.
    pub const NO_CARD: Self = Self(NO_CARD_UID);

    /// Wrap raw UID bytes.
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Raw UID bytes.
    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// True for the all-0xFF sentinel, which never names a real tag.
    pub fn is_no_card(&self) -> bool {
        self.0 == NO_CARD_UID
    }

    /// Lowercase spaced hex, e.g. `04 1f a2 3b`.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }
}

/// Space separated decimal bytes, e.g. `4 31 162 59`.
impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::utils::bytes_to_decimal_spaced(self.as_bytes()))
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 4 {
            return Err(Error::InvalidLength {
                expected: 4,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 4];
        arr.copy_from_slice(&bytes[..4]);
        Ok(Self(arr))
    }
}
