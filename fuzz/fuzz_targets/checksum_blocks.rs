#![no_main]

use libfuzzer_sys::fuzz_target;

use bytescan::ChecksumAccumulator;

fuzz_target!(|data: Vec<u8>| {
    // Whole-input result is the oracle
    let mut whole = ChecksumAccumulator::new();
    whole.accumulate(&data);
    let expected = whole.finish();

    // Re-fold under block sizes that divide neither the word size nor,
    // usually, the input length
    for block_size in [1usize, 2, 3, 4, 5, 7, 13, 64, 4096] {
        let mut acc = ChecksumAccumulator::new();
        for block in data.chunks(block_size) {
            acc.accumulate(block);
        }
        assert_eq!(
            acc.finish(),
            expected,
            "checksum changed at block size {}",
            block_size
        );
    }

    // Verify: empty input sums to zero
    if data.is_empty() {
        assert_eq!(expected, 0);
    }

    // Verify: a whole number of words sums without a padding contribution
    if data.len() % 4 == 0 {
        let direct: u128 = data
            .chunks_exact(4)
            .map(|w| u128::from(u32::from_le_bytes([w[0], w[1], w[2], w[3]])))
            .sum();
        assert_eq!(expected, direct);
    }
});
