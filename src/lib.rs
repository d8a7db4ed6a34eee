//! bytescan
//!
//! Streaming file scanning for Rust.
//!
//! `bytescan` reads a seekable byte source in fixed-size blocks and folds it
//! through one of two scan modes:
//!
//! - a checksum over the bytes interpreted as little-endian 32-bit words
//! - a search for every occurrence of a literal substring
//!
//! The central guarantee is **block-size invariance**: for fixed content the
//! result is identical to a conceptual single-pass, whole-file scan no matter
//! how the stream is cut into blocks. Partial words and partial pattern
//! matches carry across block boundaries; the block size is an implementation
//! parameter, never a semantic one.
//!
//! The crate intentionally:
//! - does NOT load the file into memory
//! - does NOT manage concurrency (scans are strictly sequential)
//! - does NOT retry I/O
//!
//! It only does one thing: **read blocks → fold → one result**
//!
//! # Checksum
//!
//! ```no_run
//! use bytescan::{ScanConfig, ScanError, Scanner};
//!
//! fn main() -> Result<(), ScanError> {
//!     let mut scanner = Scanner::open("data.bin", ScanConfig::default())?;
//!     println!("Checksum = {}", scanner.checksum()?);
//!     Ok(())
//! }
//! ```
//!
//! # Search
//!
//! ```
//! use std::io::Cursor;
//! use bytescan::{Pattern, ScanConfig, ScanError, Scanner};
//!
//! fn main() -> Result<(), ScanError> {
//!     let pattern = Pattern::new("aa")?;
//!     let mut scanner = Scanner::new(Cursor::new(&b"aaa"[..]), ScanConfig::default());
//!     assert_eq!(scanner.find(&pattern)?, vec![0, 1]);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod checksum;
mod config;
mod error;
mod progress;
mod reader;
mod scanner;
mod search;

//
// Public surface (intentionally tiny)
//

pub use checksum::{ChecksumAccumulator, ChecksumTotal, WORD_SIZE};
pub use config::ScanConfig;
pub use error::ScanError;
pub use progress::{NullProgress, ProgressSink};
pub use reader::BlockReader;
pub use scanner::Scanner;
pub use search::{Pattern, SubstringScanner};
