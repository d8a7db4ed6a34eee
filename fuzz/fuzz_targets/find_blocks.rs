#![no_main]

use libfuzzer_sys::fuzz_target;

use bytescan::{Pattern, SubstringScanner};

fuzz_target!(|input: (String, Vec<u8>)| {
    let (pattern_text, text) = input;

    let pattern = match Pattern::new(pattern_text) {
        Ok(pattern) => pattern,
        // Empty patterns are rejected by construction
        Err(_) => return,
    };

    // Naive whole-input search is the oracle
    let needle = pattern.as_bytes();
    let expected: Vec<u64> = if text.len() >= needle.len() {
        text.windows(needle.len())
            .enumerate()
            .filter(|(_, window)| *window == needle)
            .map(|(i, _)| i as u64)
            .collect()
    } else {
        Vec::new()
    };

    // Re-scan under varied block sizes; the occurrence list must not move
    for block_size in [1usize, 2, 3, 5, 7, 13, 64, 4096] {
        let mut scanner = SubstringScanner::new(pattern.clone());
        for block in text.chunks(block_size) {
            scanner.feed(block);
        }
        let occurrences = scanner.finish();
        assert_eq!(
            occurrences, expected,
            "occurrences changed at block size {}",
            block_size
        );

        // Verify: ascending order
        assert!(occurrences.windows(2).all(|w| w[0] < w[1]));
    }
});
