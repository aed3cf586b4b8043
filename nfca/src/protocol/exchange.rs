// nfca/src/protocol/exchange.rs

/// Bytes received by one exchange, held in a fixed-capacity buffer.
///
/// `len() == 0` means the tag did not answer within the timeout. The buffer
/// never grows: anything beyond `N` bytes is dropped by the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeResult<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> ExchangeResult<N> {
    /// Buffer capacity.
    pub const CAPACITY: usize = N;

    /// A zero-length result ("no response").
    pub const fn empty() -> Self {
        Self {
            buf: [0u8; N],
            len: 0,
        }
    }

    /// Copy at most `N` bytes from `bytes`.
    pub fn from_slice(bytes: &[u8]) -> Self {
        let mut out = Self::empty();
        let n = bytes.len().min(N);
        out.buf[..n].copy_from_slice(&bytes[..n]);
        out.len = n;
        out
    }

    pub(crate) fn from_raw(buf: [u8; N], len: usize) -> Self {
        Self {
            buf,
            len: len.min(N),
        }
    }

    /// Reported length.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True for "no response".
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Received bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// The whole backing buffer, including bytes past the reported length.
    pub fn raw(&self) -> &[u8; N] {
        &self.buf
    }

    /// Shorten the reported length. Bytes past it stay in the buffer.
    pub fn truncate(&mut self, len: usize) {
        self.len = self.len.min(len);
    }

    /// Append as many bytes as fit; returns how many were taken.
    pub fn extend_from_slice(&mut self, bytes: &[u8]) -> usize {
        let n = bytes.len().min(N - self.len);
        self.buf[self.len..self.len + n].copy_from_slice(&bytes[..n]);
        self.len += n;
        n
    }
}

impl<const N: usize> Default for ExchangeResult<N> {
    fn default() -> Self {
        Self::empty()
    }
}
