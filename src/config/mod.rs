//! Configuration for scanning behavior.
//!
//! # Example
//!
//! ```
//! use bytescan::ScanConfig;
//!
//! // Custom block size
//! let config = ScanConfig::new(8 * 1024)?;
//!
//! # Ok::<(), bytescan::ScanError>(())
//! ```

use crate::error::ScanError;

/// Default block size (64 KiB), balancing memory use against I/O calls.
pub const DEFAULT_BLOCK_SIZE: usize = 64 * 1024;

/// Minimum block size: one checksum word.
pub const MIN_BLOCK_SIZE: usize = 4;

/// Configuration for streaming scans.
///
/// `ScanConfig` controls the block size used when reading the source. The
/// block size bounds memory use and the granularity of progress reports; it
/// never affects scan results — checksums and occurrence lists are identical
/// for every valid block size.
///
/// # Constraints
///
/// The block size must be at least [`MIN_BLOCK_SIZE`] (4 bytes, one word).
/// It does not have to divide the word size or the file size.
///
/// # Example
///
/// ```
/// use bytescan::ScanConfig;
///
/// // Use default configuration
/// let config = ScanConfig::default();
///
/// // Custom configuration
/// let config = ScanConfig::new(4096)?;
///
/// // Builder pattern
/// let config = ScanConfig::default().with_block_size(8192);
/// # Ok::<(), bytescan::ScanError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScanConfig {
    /// Block size in bytes.
    block_size: usize,
}

impl ScanConfig {
    /// Creates a new configuration with the specified block size.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidConfig`] if `block_size` is below
    /// [`MIN_BLOCK_SIZE`].
    ///
    /// # Example
    ///
    /// ```
    /// use bytescan::ScanConfig;
    ///
    /// let config = ScanConfig::new(4096)?;
    /// assert_eq!(config.block_size(), 4096);
    /// # Ok::<(), bytescan::ScanError>(())
    /// ```
    pub fn new(block_size: usize) -> Result<Self, ScanError> {
        if block_size < MIN_BLOCK_SIZE {
            return Err(ScanError::InvalidConfig {
                message: "block size must be at least 4 bytes",
            });
        }

        Ok(Self { block_size })
    }

    /// Sets the block size.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`ScanConfig::validate`] to check if the configuration is valid.
    ///
    /// # Example
    ///
    /// ```
    /// use bytescan::ScanConfig;
    ///
    /// let config = ScanConfig::default().with_block_size(8192);
    /// assert_eq!(config.block_size(), 8192);
    /// ```
    pub fn with_block_size(mut self, size: usize) -> Self {
        self.block_size = size;
        self
    }

    /// Returns the block size.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Validates the current configuration.
    ///
    /// Returns an error if the configuration is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use bytescan::ScanConfig;
    ///
    /// let config = ScanConfig::default().with_block_size(2);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ScanError> {
        Self::new(self.block_size).map(|_| ())
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}
