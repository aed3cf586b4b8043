// nfca/src/types.rs

use std::convert::TryFrom;
use std::str::FromStr;

use derive_more::Display;

use crate::constants::{SAK_CASCADE_BIT, SAK_MAX};
use crate::protocol::ExchangeResult;
use crate::Error;

/// Card family selected for a scan.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Technology {
    /// Every family; scans run Type-A discovery.
    #[default]
    #[display(fmt = "ALL")]
    All,
    /// ISO/IEC 14443 Type-A.
    #[display(fmt = "A")]
    A,
    /// ISO/IEC 14443 Type-B.
    #[display(fmt = "B")]
    B,
    /// ST25TB.
    #[display(fmt = "ST25TB")]
    St25tb,
    /// ISO/IEC 15693 vicinity.
    #[display(fmt = "V")]
    V,
    /// FeliCa.
    #[display(fmt = "F")]
    F,
}

impl Technology {
    /// Whether the Type-A discovery engine serves this selection.
    pub fn uses_type_a(&self) -> bool {
        matches!(self, Self::All | Self::A)
    }
}

impl FromStr for Technology {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let name = name
            .strip_prefix("nfc-")
            .or_else(|| name.strip_prefix("NFC-"))
            .unwrap_or(name);
        match name.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "a" => Ok(Self::A),
            "b" => Ok(Self::B),
            "st25tb" => Ok(Self::St25tb),
            "v" => Ok(Self::V),
            "f" => Ok(Self::F),
            other => Err(Error::InvalidArgument(format!(
                "unknown technology '{}'",
                other
            ))),
        }
    }
}

/// ATQA - Newtype Pattern (2 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Atqa([u8; 2]);

impl Atqa {
    /// Wrap two ATQA bytes.
    pub fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    /// ATQA bytes as received.
    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    /// Build from a request response; missing bytes stay zero.
    pub fn from_exchange<const N: usize>(rx: &ExchangeResult<N>) -> Self {
        let mut arr = [0u8; 2];
        for (dst, src) in arr.iter_mut().zip(rx.as_bytes()) {
            *dst = *src;
        }
        Self(arr)
    }
}

/// Select-acknowledge as received, trailing CRC already trimmed from the
/// reported length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sak(ExchangeResult<SAK_MAX>);

impl Sak {
    /// Wrap a select response.
    pub fn new(rx: ExchangeResult<SAK_MAX>) -> Self {
        Self(rx)
    }

    /// True when the select went unanswered.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First acknowledge byte, if any was received.
    pub fn value(&self) -> Option<u8> {
        self.0.as_bytes().first().copied()
    }

    /// Received bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Raw buffer byte at `idx`, including bytes beyond the reported length.
    /// Never-written positions read as zero.
    pub fn byte(&self, idx: usize) -> u8 {
        self.0.raw().get(idx).copied().unwrap_or(0)
    }

    /// Extended-UID bit: the UID continues on the next cascade level.
    pub fn has_cascade_bit(&self) -> bool {
        self.value()
            .map(|v| v & SAK_CASCADE_BIT != 0)
            .unwrap_or(false)
    }
}

/// UID of a Type-A tag: 4 bytes (single cascade) or 7 bytes (double).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Uid {
    /// Single-cascade UID.
    Single([u8; 4]),
    /// Double-cascade UID.
    Double([u8; 7]),
}

impl Uid {
    /// UID bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Single(b) => b,
            Self::Double(b) => b,
        }
    }

    /// 4 or 7.
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// True for a 7-byte UID.
    pub fn is_double(&self) -> bool {
        matches!(self, Self::Double(_))
    }

    /// Lower-case hex without separators.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        match bytes.len() {
            4 => {
                let mut arr = [0u8; 4];
                arr.copy_from_slice(bytes);
                Ok(Self::Single(arr))
            }
            7 => {
                let mut arr = [0u8; 7];
                arr.copy_from_slice(bytes);
                Ok(Self::Double(arr))
            }
            n => Err(Error::InvalidLength {
                expected: if n < 4 { 4 } else { 7 },
                actual: n,
            }),
        }
    }
}

/// Link bit rate. Discovery runs at the 106 kbps base rate only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitRate {
    /// 106 kbit/s
    #[default]
    Kbps106,
}

/// Receive-side framing parameters of the link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Framing {
    /// Check and strip CRC_A on receive.
    pub rx_crc: bool,
    /// Link bit rate.
    pub bit_rate: BitRate,
}

impl Framing {
    /// Framing used for REQA and anti-collision: no inbound CRC, 106 kbps.
    pub const ANTICOLLISION: Self = Self {
        rx_crc: false,
        bit_rate: BitRate::Kbps106,
    };

    /// Framing used once the final select of a cascade is issued.
    pub const CRC_ON_RECEIVE: Self = Self {
        rx_crc: true,
        bit_rate: BitRate::Kbps106,
    };
}
