#![no_main]

use libfuzzer_sys::fuzz_target;
use rand::rngs::StdRng;
use rand::SeedableRng;

use phonegen_core::{generate, partition, AreaCode, PrefixSet};

fuzz_target!(|data: &[u8]| {
    if data.len() < 10 {
        return;
    }
    // Quantity capped at 5000, batch size at 600
    let quantity = u32::from_le_bytes([data[0], data[1], data[2], data[3]]) as usize % 5_000;
    let batch_size = u16::from_le_bytes([data[4], data[5]]) as usize % 600;
    let seed = u32::from_le_bytes([data[6], data[7], data[8], data[9]]);

    let mut rng = StdRng::seed_from_u64(u64::from(seed));
    let numbers = match generate(
        &AreaCode::default(),
        &PrefixSet::default(),
        quantity,
        &mut rng,
    ) {
        Ok(numbers) => numbers,
        Err(_) => return,
    };

    let Ok(batches) = partition(&numbers, batch_size) else {
        assert_eq!(batch_size, 0);
        return;
    };
    let rejoined: Vec<_> = batches.flat_map(|b| b.numbers.iter().cloned()).collect();
    assert_eq!(rejoined, numbers);
});
