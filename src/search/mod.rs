//! Literal substring search over a byte stream.
//!
//! The scanner tracks every potential match as a candidate anchored at its
//! start offset and advances all candidates one input byte at a time, so
//! matches that straddle block boundaries complete exactly as they would in
//! a whole-stream scan, and overlapping matches are all found.
//!
//! This is the naive multi-candidate discipline, not a linear-time
//! algorithm: against highly repetitive input (pattern `aaaa` over a stream
//! of `a`) the live-candidate count grows with the input, for O(n·m) total
//! work on an n-byte stream and m-byte pattern. The trade is accepted for
//! simplicity; correctness across block boundaries is the contract here.

use std::fmt;

use crate::error::ScanError;

/// A validated, non-empty search pattern.
///
/// Matching operates on bytes. For UTF-8 input a byte-level match coincides
/// with a character-level match, and reported offsets are byte offsets from
/// the start of the stream.
///
/// # Example
///
/// ```
/// use bytescan::Pattern;
///
/// let pattern = Pattern::new("hello")?;
/// assert_eq!(pattern.len(), 5);
///
/// // Empty patterns are rejected up front, before any I/O.
/// assert!(Pattern::new("").is_err());
/// # Ok::<(), bytescan::ScanError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    text: String,
}

impl Pattern {
    /// Creates a pattern from the given text.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidPattern`] if the text is empty. Searching
    /// for an empty string has no defined answer here, so it is rejected at
    /// construction rather than attempted.
    pub fn new(text: impl Into<String>) -> Result<Self, ScanError> {
        let text = text.into();
        if text.is_empty() {
            return Err(ScanError::InvalidPattern {
                message: "search pattern must not be empty",
            });
        }
        Ok(Self { text })
    }

    /// Returns the pattern text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the pattern as bytes, the unit the scanner matches on.
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Returns the pattern length in bytes (always at least 1).
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; construction rejects empty patterns.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A partial match anchored at a specific start offset.
///
/// Invariant: `matched < pattern.len()` while the candidate is live; it is
/// promoted to an occurrence and removed the instant they become equal.
#[derive(Debug)]
struct Candidate {
    start: u64,
    matched: usize,
}

/// Finds every occurrence of a pattern across a sequence of blocks.
///
/// Feed each block in stream order with [`SubstringScanner::feed`], then
/// take the occurrence list with [`SubstringScanner::finish`]. State carried
/// between blocks is the ordered live-candidate list and the running byte
/// cursor; the occurrence list is identical for every way of splitting the
/// stream into blocks.
///
/// For each input byte, live candidates are advanced *before* a new
/// candidate may start on that same byte, so overlapping matches are found:
///
/// ```
/// use bytescan::{Pattern, SubstringScanner};
///
/// let mut scanner = SubstringScanner::new(Pattern::new("aa")?);
/// scanner.feed(b"aaa");
/// assert_eq!(scanner.finish(), vec![0, 1]);
/// # Ok::<(), bytescan::ScanError>(())
/// ```
#[derive(Debug)]
pub struct SubstringScanner {
    pattern: Pattern,
    candidates: Vec<Candidate>,
    occurrences: Vec<u64>,
    cursor: u64,
}

impl SubstringScanner {
    /// Creates a scanner for the given pattern, positioned at offset 0.
    pub fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            candidates: Vec::new(),
            occurrences: Vec::new(),
            cursor: 0,
        }
    }

    /// Folds one block into the scan, in stream order.
    pub fn feed(&mut self, block: &[u8]) {
        for &byte in block {
            let pos = self.cursor;
            self.step(byte, pos);
            self.cursor += 1;
        }
    }

    /// Advances the scan by one byte at stream offset `pos`.
    fn step(&mut self, byte: u8, pos: u64) {
        let pat = self.pattern.text.as_bytes();

        // Advance existing candidates first. retain_mut compacts in place
        // and preserves insertion order, which is ascending start order.
        self.candidates.retain_mut(|candidate| {
            if pat[candidate.matched] != byte {
                return false;
            }
            candidate.matched += 1;
            if candidate.matched == pat.len() {
                self.occurrences.push(candidate.start);
                return false;
            }
            true
        });

        // Only then may this byte open a new candidate.
        if byte == pat[0] {
            if pat.len() == 1 {
                self.occurrences.push(pos);
            } else {
                self.candidates.push(Candidate {
                    start: pos,
                    matched: 1,
                });
            }
        }
    }

    /// Returns the stream offset of the next byte to be consumed.
    pub fn position(&self) -> u64 {
        self.cursor
    }

    /// Returns the number of live candidates awaiting more input.
    pub fn pending_candidates(&self) -> usize {
        self.candidates.len()
    }

    /// Finishes the stream and returns all occurrences, ascending.
    ///
    /// Candidates still live at end of stream are partial matches that can
    /// never complete; they are discarded.
    pub fn finish(self) -> Vec<u64> {
        self.occurrences
    }
}
