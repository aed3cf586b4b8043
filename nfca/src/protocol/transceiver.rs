// nfca/src/protocol/transceiver.rs

use std::ops::{Deref, DerefMut};

use log::{debug, trace, warn};

use crate::constants::CRC_LEN;
use crate::frontend::FrontEnd;
use crate::protocol::commands::Command;
use crate::protocol::exchange::ExchangeResult;
use crate::types::Framing;
use crate::{Error, Result};

/// Transceiver adapter over the front-end's send/receive primitive.
///
/// It owns the current receive framing so the discovery engine can switch it
/// mid-sequence, and it turns timeouts into zero-length results.
pub struct Transceiver<'f> {
    frontend: &'f mut dyn FrontEnd,
    framing: Framing,
}

impl<'f> Transceiver<'f> {
    /// Wrap a front-end. Framing is assumed to be `Framing::ANTICOLLISION`
    /// until `reset_framing` or `set_framing` pushes it to the chip.
    pub fn new(frontend: &'f mut dyn FrontEnd) -> Self {
        Self {
            frontend,
            framing: Framing::ANTICOLLISION,
        }
    }

    /// Framing last pushed to the front-end.
    pub fn framing(&self) -> Framing {
        self.framing
    }

    /// Push new receive framing to the front-end.
    pub fn set_framing(&mut self, framing: Framing) -> Result<()> {
        debug!(
            "framing: rx_crc {} -> {}, {:?}",
            self.framing.rx_crc, framing.rx_crc, framing.bit_rate
        );
        self.frontend.configure(framing)?;
        self.framing = framing;
        Ok(())
    }

    /// Back to anti-collision framing (no inbound CRC, 106 kbps).
    pub fn reset_framing(&mut self) -> Result<()> {
        self.set_framing(Framing::ANTICOLLISION)
    }

    /// Energize the field for the lifetime of the returned guard.
    pub fn field_on(&mut self) -> Result<FieldGuard<'_, 'f>> {
        self.frontend.field_on()?;
        trace!("field on");
        Ok(FieldGuard { xcvr: self })
    }

    /// Send the low `bit_count` bits of `byte` (short frame).
    pub fn transceive_bits<const N: usize>(
        &mut self,
        byte: u8,
        bit_count: u8,
        timeout_ms: u64,
        crc_enabled: bool,
    ) -> Result<ExchangeResult<N>> {
        self.exchange(&[byte], bit_count as usize, timeout_ms, crc_enabled)
    }

    /// Send whole bytes. With `crc_enabled` the front-end appends CRC_A and
    /// the two trailing CRC bytes are dropped from the reported length once at
    /// least three bytes came back.
    pub fn transceive_bytes<const N: usize>(
        &mut self,
        tx: &[u8],
        timeout_ms: u64,
        crc_enabled: bool,
    ) -> Result<ExchangeResult<N>> {
        let mut rx = self.exchange::<N>(tx, tx.len() * 8, timeout_ms, crc_enabled)?;
        if crc_enabled && rx.len() >= CRC_LEN + 1 {
            rx.truncate(rx.len() - CRC_LEN);
        }
        Ok(rx)
    }

    /// Encode and send a protocol command.
    pub fn transceive<const N: usize>(
        &mut self,
        cmd: &Command,
        timeout_ms: u64,
    ) -> Result<ExchangeResult<N>> {
        match cmd.short_frame_bits() {
            Some(bits) => {
                self.transceive_bits(cmd.command_code(), bits, timeout_ms, cmd.uses_crc())
            }
            None => self.transceive_bytes(&cmd.encode(), timeout_ms, cmd.uses_crc()),
        }
    }

    fn exchange<const N: usize>(
        &mut self,
        tx: &[u8],
        tx_bits: usize,
        timeout_ms: u64,
        crc_on_tx: bool,
    ) -> Result<ExchangeResult<N>> {
        let mut buf = [0u8; N];
        let crc_on_rx = self.framing.rx_crc;
        let res = self
            .frontend
            .send_receive(tx, tx_bits, timeout_ms, crc_on_tx, crc_on_rx, &mut buf);
        let rx = match res {
            Ok(n) => ExchangeResult::from_raw(buf, n),
            Err(Error::Timeout) => ExchangeResult::empty(),
            Err(e) => return Err(e),
        };
        trace!(
            "tx {} ({} bits, {}ms, crc tx={} rx={}) -> {} byte(s) {}",
            crate::utils::bytes_to_hex_spaced(tx),
            tx_bits,
            timeout_ms,
            crc_on_tx,
            crc_on_rx,
            rx.len(),
            crate::utils::bytes_to_hex_spaced(rx.as_bytes())
        );
        Ok(rx)
    }
}

/// Keeps the RF field energized; turns it off when dropped.
pub struct FieldGuard<'a, 'f> {
    xcvr: &'a mut Transceiver<'f>,
}

impl<'f> Deref for FieldGuard<'_, 'f> {
    type Target = Transceiver<'f>;

    fn deref(&self) -> &Self::Target {
        self.xcvr
    }
}

impl DerefMut for FieldGuard<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.xcvr
    }
}

impl Drop for FieldGuard<'_, '_> {
    fn drop(&mut self) {
        match self.xcvr.frontend.field_off() {
            Ok(()) => trace!("field off"),
            Err(e) => warn!("field off failed: {}", e),
        }
    }
}
