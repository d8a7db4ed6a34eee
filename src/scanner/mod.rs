//! The scan driver - one open source, one pass per mode.
//!
//! [`Scanner`] owns a [`BlockReader`] and drives a full pass over it for
//! each scan mode, feeding every block to exactly one folding component and
//! firing the progress sink once per block. All cross-block state lives in
//! the folding component; the driver only moves blocks.
//!
//! # Example
//!
//! ```no_run
//! use bytescan::{Pattern, ScanConfig, ScanError, Scanner};
//!
//! fn main() -> Result<(), ScanError> {
//!     let mut scanner = Scanner::open("data.bin", ScanConfig::default())?;
//!
//!     // Each mode performs its own independent pass.
//!     let total = scanner.checksum()?;
//!     let offsets = scanner.find(&Pattern::new("needle")?)?;
//!
//!     println!("Checksum = {}", total);
//!     println!("{} occurrences", offsets.len());
//!     Ok(())
//! }
//! ```

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use crate::checksum::{ChecksumAccumulator, ChecksumTotal};
use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::progress::{NullProgress, ProgressSink};
use crate::reader::BlockReader;
use crate::search::{Pattern, SubstringScanner};

/// Scans a seekable byte source in fixed-size blocks.
///
/// A scanner is created once per source and may run any number of scans;
/// each scan rewinds to the start and reads the whole stream. Exactly one
/// scan runs at a time (methods take `&mut self`), and the source plus the
/// block buffer are released when the scanner is dropped, on every exit
/// path.
///
/// Results are invariant to the configured block size: for fixed content,
/// [`Scanner::checksum`] and [`Scanner::find`] return the same values for
/// every valid [`ScanConfig`].
#[derive(Debug)]
pub struct Scanner<R> {
    reader: BlockReader<R>,
}

impl Scanner<File> {
    /// Opens the file at `path` for scanning.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::NotFound`] if the path does not exist or cannot
    /// be opened, before any scanning begins.
    pub fn open(path: impl AsRef<Path>, config: ScanConfig) -> Result<Self, ScanError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ScanError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ScanError::Io(e),
        })?;
        Ok(Self::new(file, config))
    }
}

impl<R: Read + Seek> Scanner<R> {
    /// Creates a scanner over any seekable source.
    ///
    /// # Example
    ///
    /// ```
    /// use std::io::Cursor;
    /// use bytescan::{ScanConfig, Scanner};
    ///
    /// let mut scanner = Scanner::new(Cursor::new(&[1u8, 0, 0, 0][..]), ScanConfig::default());
    /// assert_eq!(scanner.checksum().unwrap(), 1);
    /// ```
    pub fn new(source: R, config: ScanConfig) -> Self {
        Self {
            reader: BlockReader::new(source, config),
        }
    }

    /// Computes the word checksum of the whole stream.
    ///
    /// Equivalent to [`Scanner::checksum_with_progress`] with a discarding
    /// sink.
    pub fn checksum(&mut self) -> Result<ChecksumTotal, ScanError> {
        self.checksum_with_progress(&mut NullProgress)
    }

    /// Computes the word checksum, reporting progress after each block.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Io`] if a read fails mid-scan; no partial total
    /// is returned. A source that cannot be rewound yields 0 rather than an
    /// error.
    pub fn checksum_with_progress<P: ProgressSink>(
        &mut self,
        progress: &mut P,
    ) -> Result<ChecksumTotal, ScanError> {
        if self.reader.rewind().is_err() {
            tracing::warn!("source cannot be rewound; reporting empty checksum");
            return Ok(0);
        }
        tracing::debug!(total_len = self.reader.total_len(), "starting checksum scan");

        let mut accumulator = ChecksumAccumulator::new();
        while let Some(block) = self.reader.next_block()? {
            accumulator.accumulate(block);
            progress.on_progress(self.reader.percent());
        }

        let total = accumulator.finish();
        tracing::debug!(%total, "checksum scan complete");
        Ok(total)
    }

    /// Finds every occurrence of `pattern`, as ascending byte offsets.
    ///
    /// Equivalent to [`Scanner::find_with_progress`] with a discarding sink.
    pub fn find(&mut self, pattern: &Pattern) -> Result<Vec<u64>, ScanError> {
        self.find_with_progress(pattern, &mut NullProgress)
    }

    /// Finds every occurrence of `pattern`, reporting progress per block.
    ///
    /// Overlapping matches are all reported. Offsets are byte positions in
    /// the stream, in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Io`] if a read fails mid-scan; no partial
    /// occurrence list is returned. A source that cannot be rewound yields
    /// an empty list.
    pub fn find_with_progress<P: ProgressSink>(
        &mut self,
        pattern: &Pattern,
        progress: &mut P,
    ) -> Result<Vec<u64>, ScanError> {
        if self.reader.rewind().is_err() {
            tracing::warn!("source cannot be rewound; reporting no occurrences");
            return Ok(Vec::new());
        }
        tracing::debug!(
            pattern = %pattern,
            total_len = self.reader.total_len(),
            "starting search scan"
        );

        let mut search = SubstringScanner::new(pattern.clone());
        while let Some(block) = self.reader.next_block()? {
            search.feed(block);
            progress.on_progress(self.reader.percent());
        }

        let occurrences = search.finish();
        tracing::debug!(count = occurrences.len(), "search scan complete");
        Ok(occurrences)
    }
}
