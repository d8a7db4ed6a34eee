// Integration tests for the streaming scanner
// Tests cover: block-size invariance, checksum semantics, search semantics,
// progress reporting, error cases, on-disk scanning

use std::io::{Cursor, Write};

use bytescan::{Pattern, ScanConfig, ScanError, Scanner};

fn scanner_of(data: &[u8], block_size: usize) -> Scanner<Cursor<&[u8]>> {
    Scanner::new(Cursor::new(data), ScanConfig::new(block_size).unwrap())
}

fn words(values: &[u32]) -> Vec<u8> {
    let mut data = Vec::with_capacity(values.len() * 4);
    for value in values {
        data.extend_from_slice(&value.to_le_bytes());
    }
    data
}

// ============================================================================
// Checksum Semantics
// ============================================================================

#[test]
fn test_checksum_of_empty_file_is_zero() {
    let mut scanner = scanner_of(b"", 4);
    assert_eq!(scanner.checksum().unwrap(), 0);
}

#[test]
fn test_checksum_of_full_words_is_their_sum() {
    // 7 + 300 + 65536
    let data = words(&[7, 300, 65536]);
    let mut scanner = scanner_of(&data, 4096);
    assert_eq!(scanner.checksum().unwrap(), 65843);
}

#[test]
fn test_checksum_zero_extends_trailing_bytes() {
    // 10 full words plus two trailing bytes encoding 0x0102
    let values: Vec<u32> = (1..=10).map(|i| i * 1000).collect();
    let mut data = words(&values);
    data.extend_from_slice(&[0x02, 0x01]);

    let expected: u128 = values.iter().map(|&v| u128::from(v)).sum::<u128>() + 0x0102;
    let mut scanner = scanner_of(&data, 4096);
    assert_eq!(scanner.checksum().unwrap(), expected);
}

#[test]
fn test_checksum_sums_exactly_without_truncation() {
    // Large words must not wrap a narrower intermediate.
    let data = words(&[u32::MAX; 9]);
    let mut scanner = scanner_of(&data, 8);
    assert_eq!(scanner.checksum().unwrap(), u128::from(u32::MAX) * 9);
}

// ============================================================================
// Block-Size Invariance
// ============================================================================

#[test]
fn test_checksum_is_block_size_invariant() {
    // Length 103: not a multiple of the word size or of most block sizes.
    let data: Vec<u8> = (0..103).map(|i| (i * 7 + 13) as u8).collect();

    let mut reference = scanner_of(&data, data.len());
    let expected = reference.checksum().unwrap();

    for block_size in [4, 5, 6, 7, 8, 13, 64, 100, 103, 256, 4096] {
        let mut scanner = scanner_of(&data, block_size);
        assert_eq!(
            scanner.checksum().unwrap(),
            expected,
            "checksum changed at block size {}",
            block_size
        );
    }
}

#[test]
fn test_find_is_block_size_invariant() {
    // Matches placed so that some straddle every small block boundary.
    let mut data = vec![b'.'; 200];
    for &offset in &[0, 3, 61, 126, 195] {
        data[offset..offset + 5].copy_from_slice(b"hello");
    }
    let pattern = Pattern::new("hello").unwrap();

    let mut reference = scanner_of(&data, data.len());
    let expected = reference.find(&pattern).unwrap();
    assert_eq!(expected, vec![0, 3, 61, 126, 195]);

    for block_size in [4, 5, 6, 7, 8, 13, 64, 100, 200, 4096] {
        let mut scanner = scanner_of(&data, block_size);
        assert_eq!(
            scanner.find(&pattern).unwrap(),
            expected,
            "occurrences changed at block size {}",
            block_size
        );
    }
}

#[test]
fn test_overlapping_matches_survive_block_boundaries() {
    let data = vec![b'a'; 50];
    let pattern = Pattern::new("aaaa").unwrap();
    let expected: Vec<u64> = (0..=46).collect();

    for block_size in [4, 5, 7, 50] {
        let mut scanner = scanner_of(&data, block_size);
        assert_eq!(scanner.find(&pattern).unwrap(), expected);
    }
}

// ============================================================================
// Search Semantics
// ============================================================================

#[test]
fn test_find_on_empty_file_is_empty() {
    let pattern = Pattern::new("anything").unwrap();
    let mut scanner = scanner_of(b"", 4);
    assert!(scanner.find(&pattern).unwrap().is_empty());
}

#[test]
fn test_find_reports_overlaps() {
    let pattern = Pattern::new("aa").unwrap();
    let mut scanner = scanner_of(b"aaa", 4096);
    assert_eq!(scanner.find(&pattern).unwrap(), vec![0, 1]);
}

#[test]
fn test_find_in_repetitive_text_with_known_insertions() {
    // 10,000 'a's with "hello" written at 12 known offsets.
    let offsets: [u64; 12] = [
        0, 811, 1609, 2417, 3001, 4096, 5210, 6007, 7333, 8092, 9416, 9995,
    ];
    let mut data = vec![b'a'; 10_000];
    for &offset in &offsets {
        let start = offset as usize;
        data[start..start + 5].copy_from_slice(b"hello");
    }

    let pattern = Pattern::new("hello").unwrap();
    let mut scanner = scanner_of(&data, 512);
    assert_eq!(scanner.find(&pattern).unwrap(), offsets.to_vec());
}

#[test]
fn test_find_matches_naive_reference() {
    let data: Vec<u8> = (0..500).map(|i| b"abcab"[i % 5]).collect();

    for pattern_text in ["a", "ab", "abc", "cab", "abcab", "zz"] {
        let pattern = Pattern::new(pattern_text).unwrap();
        let needle = pattern_text.as_bytes();

        let expected: Vec<u64> = data
            .windows(needle.len())
            .enumerate()
            .filter(|(_, window)| *window == needle)
            .map(|(i, _)| i as u64)
            .collect();

        let mut scanner = scanner_of(&data, 7);
        assert_eq!(
            scanner.find(&pattern).unwrap(),
            expected,
            "pattern {:?}",
            pattern_text
        );
    }
}

#[test]
fn test_match_at_very_end_completes() {
    let pattern = Pattern::new("end").unwrap();
    let mut scanner = scanner_of(b"the very end", 5);
    assert_eq!(scanner.find(&pattern).unwrap(), vec![9]);
}

#[test]
fn test_partial_match_at_end_produces_nothing() {
    let pattern = Pattern::new("ending").unwrap();
    let mut scanner = scanner_of(b"the very end", 5);
    assert!(scanner.find(&pattern).unwrap().is_empty());
}

#[test]
fn test_pattern_longer_than_file() {
    let pattern = Pattern::new("longer than the file").unwrap();
    let mut scanner = scanner_of(b"short", 4);
    assert!(scanner.find(&pattern).unwrap().is_empty());
}

// ============================================================================
// Independent Passes
// ============================================================================

#[test]
fn test_both_modes_on_one_scanner() {
    let data = words(&[1, 2, 3]);
    let mut scanner = scanner_of(&data, 5);
    let pattern = Pattern::new("\x01").unwrap();

    // Search, checksum, search again: every pass rewinds and sees the
    // whole stream.
    let first = scanner.find(&pattern).unwrap();
    assert_eq!(scanner.checksum().unwrap(), 6);
    assert_eq!(scanner.find(&pattern).unwrap(), first);
    assert_eq!(first, vec![0]);
}

// ============================================================================
// Progress Reporting
// ============================================================================

#[test]
fn test_progress_is_monotone_and_reaches_100() {
    let data = vec![0u8; 1000];
    let mut scanner = scanner_of(&data, 64);

    let mut reports = Vec::new();
    let mut sink = |percent: u8| reports.push(percent);
    scanner.checksum_with_progress(&mut sink).unwrap();

    assert!(!reports.is_empty());
    assert!(reports.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(*reports.last().unwrap(), 100);
    // At most one report per block
    assert!(reports.len() <= data.len().div_ceil(64));
}

#[test]
fn test_progress_never_fires_for_empty_input() {
    let mut scanner = scanner_of(b"", 4);
    let mut reports = Vec::new();
    let mut sink = |percent: u8| reports.push(percent);
    scanner.checksum_with_progress(&mut sink).unwrap();
    assert!(reports.is_empty());
}

// ============================================================================
// Error Cases
// ============================================================================

#[test]
fn test_missing_file_reports_not_found() {
    let result = Scanner::open("/no/such/path/at-all.bin", ScanConfig::default());
    assert!(matches!(result, Err(ScanError::NotFound { .. })));
}

#[test]
fn test_empty_pattern_is_rejected_before_io() {
    assert!(matches!(
        Pattern::new(""),
        Err(ScanError::InvalidPattern { .. })
    ));
}

#[test]
fn test_undersized_block_is_rejected() {
    assert!(matches!(
        ScanConfig::new(3),
        Err(ScanError::InvalidConfig { .. })
    ));
}

// ============================================================================
// On-Disk Scanning
// ============================================================================

#[test]
fn test_scan_a_real_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let mut data = words(&[7, 300, 65536]);
    data.extend_from_slice(b"needle");
    file.write_all(&data).unwrap();
    file.flush().unwrap();

    let config = ScanConfig::new(4).unwrap();
    let mut scanner = Scanner::open(file.path(), config).unwrap();

    let pattern = Pattern::new("needle").unwrap();
    assert_eq!(scanner.find(&pattern).unwrap(), vec![12]);

    // "need" + "le\0\0" zero-extended on top of the three words
    let tail = u128::from(u32::from_le_bytes(*b"need"))
        + u128::from(u32::from_le_bytes([b'l', b'e', 0, 0]));
    assert_eq!(scanner.checksum().unwrap(), 65843 + tail);
}

#[test]
fn test_large_file_across_many_blocks() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let data: Vec<u8> = (0..100_003).map(|i| (i % 251) as u8).collect();
    file.write_all(&data).unwrap();
    file.flush().unwrap();

    let mut reference = Scanner::new(Cursor::new(&data[..]), ScanConfig::new(data.len()).unwrap());
    let expected = reference.checksum().unwrap();

    let mut scanner = Scanner::open(file.path(), ScanConfig::default()).unwrap();
    assert_eq!(scanner.checksum().unwrap(), expected);
}
