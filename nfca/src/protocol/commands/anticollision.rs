// nfca/src/protocol/commands/anticollision.rs

use super::CascadeLevel;
use crate::constants::{NVB_ANTICOLL, NVB_SELECT};

/// Encode an ANTICOLLISION request: SEL + NVB(0x20)
pub fn encode_anticollision(level: CascadeLevel) -> [u8; 2] {
    [level.select_code(), NVB_ANTICOLL]
}

/// Encode a SELECT: SEL + NVB(0x70) + the cascade bytes returned by the
/// anti-collision of the same level (UID part and BCC).
pub fn encode_select(level: CascadeLevel, cascade: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(2 + cascade.len());
    out.push(level.select_code());
    out.push(NVB_SELECT);
    out.extend_from_slice(cascade);
    out
}
