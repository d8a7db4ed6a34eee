//! Block-wise reading of a seekable byte source.
//!
//! [`BlockReader`] is the only component that touches the underlying source.
//! It owns one reusable buffer and lends out `&[u8]` views of up to
//! `block_size` bytes; callers never see the source or the buffer directly.

use std::io::{Read, Seek, SeekFrom};

use crate::config::ScanConfig;

/// Reads a seekable source as a lazy, finite, forward-only sequence of
/// blocks.
///
/// Each call to [`BlockReader::next_block`] fills the internal buffer from
/// the source and lends it out as a read-only view. Every block except
/// possibly the last is full; the last holds whatever remains. Short reads
/// and `Interrupted` are absorbed by the fill loop, so block boundaries
/// depend only on the configured size, not on how the operating system
/// happens to split reads.
///
/// [`BlockReader::rewind`] repositions to the start of the source and
/// records its total length, allowing independent full passes over the same
/// open handle (one per scan mode).
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use bytescan::{BlockReader, ScanConfig};
///
/// let config = ScanConfig::new(4)?;
/// let mut reader = BlockReader::new(Cursor::new(&b"abcdefgh!"[..]), config);
/// reader.rewind()?;
///
/// let mut sizes = Vec::new();
/// while let Some(block) = reader.next_block()? {
///     sizes.push(block.len());
/// }
/// assert_eq!(sizes, vec![4, 4, 1]);
/// # Ok::<(), bytescan::ScanError>(())
/// ```
#[derive(Debug)]
pub struct BlockReader<R> {
    source: R,
    buf: Vec<u8>,
    position: u64,
    total: u64,
}

impl<R: Read + Seek> BlockReader<R> {
    /// Creates a new block reader over `source`.
    ///
    /// No I/O is performed here; the source is first touched by
    /// [`BlockReader::rewind`].
    pub fn new(source: R, config: ScanConfig) -> Self {
        Self {
            source,
            buf: vec![0; config.block_size()],
            position: 0,
            total: 0,
        }
    }

    /// Repositions to the start of the source and records its total length.
    ///
    /// Must be called before a pass; each scan mode calls it so that
    /// checksum and search each see the whole stream regardless of what a
    /// previous pass consumed.
    ///
    /// # Errors
    ///
    /// Fails if the source cannot be repositioned (for example, it is not
    /// actually seekable). The caller decides how to react; the reader
    /// itself does not retry.
    pub fn rewind(&mut self) -> std::io::Result<()> {
        self.total = self.source.seek(SeekFrom::End(0))?;
        self.source.seek(SeekFrom::Start(0))?;
        self.position = 0;
        Ok(())
    }

    /// Reads the next block, returning `None` when the source is exhausted.
    ///
    /// The returned slice borrows the reader's internal buffer and is valid
    /// until the next call.
    pub fn next_block(&mut self) -> std::io::Result<Option<&[u8]>> {
        let mut filled = 0;
        while filled < self.buf.len() {
            match self.source.read(&mut self.buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        if filled == 0 {
            return Ok(None);
        }

        self.position += filled as u64;
        Ok(Some(&self.buf[..filled]))
    }

    /// Returns the number of bytes delivered since the last rewind.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Returns the total length recorded by the last rewind.
    pub fn total_len(&self) -> u64 {
        self.total
    }

    /// Returns the completed percentage of the current pass (0–100).
    ///
    /// Derived from position over total length, so it is monotonically
    /// non-decreasing within a pass.
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        ((u128::from(self.position.min(self.total)) * 100) / u128::from(self.total)) as u8
    }
}
