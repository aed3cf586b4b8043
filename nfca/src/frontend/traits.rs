// nfca/src/frontend/traits.rs

use crate::frontend::RegisterDump;
use crate::session::EventHandle;
use crate::types::Framing;
use crate::{Error, Result};

/// FrontEnd trait abstracts the radio transceiver chip away from the
/// discovery logic.
///
/// Implementations wrap a concrete chip driver. Every exchange is a blocking
/// call bounded by `timeout_ms`.
pub trait FrontEnd: Send {
    /// Bring the chip up. Errors here are fatal to the session.
    fn initialize(&mut self) -> Result<()>;

    /// Release whatever `initialize` acquired. Must be safe to call after a
    /// partial or failed initialization.
    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }

    /// Energize the antenna.
    fn field_on(&mut self) -> Result<()>;

    /// De-energize the antenna.
    fn field_off(&mut self) -> Result<()>;

    /// Apply receive-side framing (inbound CRC check, bit rate).
    fn configure(&mut self, _framing: Framing) -> Result<()> {
        Ok(())
    }

    /// Send `tx_bits` bits taken from `tx` and wait up to `timeout_ms` for a
    /// reply, copying it into `rx`. Returns the number of bytes written.
    ///
    /// A silent tag may be reported either as `Ok(0)` or `Err(Error::Timeout)`.
    fn send_receive(
        &mut self,
        tx: &[u8],
        tx_bits: usize,
        timeout_ms: u64,
        crc_on_tx: bool,
        crc_on_rx: bool,
        rx: &mut [u8],
    ) -> Result<usize>;

    /// Dump both register spaces for diagnostics.
    fn register_dump(&mut self) -> Result<RegisterDump> {
        Err(Error::UnsupportedOperation(
            "register dump not available on this front-end".into(),
        ))
    }

    /// Give the driver a handle to signal its interrupt line. `None` detaches.
    fn attach_events(&mut self, _events: Option<EventHandle>) {}
}
