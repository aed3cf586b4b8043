// nfca/src/frontend/registers.rs

use std::fmt;

/// Snapshot of the front-end's two register address spaces.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegisterDump {
    /// Space A values, indexed by address.
    pub space_a: Vec<u8>,
    /// Space B values, indexed by address.
    pub space_b: Vec<u8>,
}

impl RegisterDump {
    /// Dump from the two spaces.
    pub fn new(space_a: Vec<u8>, space_b: Vec<u8>) -> Self {
        Self { space_a, space_b }
    }

    /// `(address, value)` pairs of space A in address order.
    pub fn space_a_entries(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.space_a.iter().copied().enumerate()
    }

    /// `(address, value)` pairs of space B in address order.
    pub fn space_b_entries(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.space_b.iter().copied().enumerate()
    }
}

impl fmt::Display for RegisterDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Registers space A:")?;
        for (addr, value) in self.space_a_entries() {
            writeln!(f, "0x{:02x}\t: 0x{:02x}", addr, value)?;
        }
        writeln!(f)?;
        writeln!(f, "Registers space B:")?;
        for (addr, value) in self.space_b_entries() {
            writeln!(f, "0x{:02x}\t: 0x{:02x}", addr, value)?;
        }
        Ok(())
    }
}
