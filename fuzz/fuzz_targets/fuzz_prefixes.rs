#![no_main]

use libfuzzer_sys::fuzz_target;

use phonegen_core::PrefixSet;

fuzz_target!(|data: &[u8]| {
    let Ok(list) = std::str::from_utf8(data) else {
        return;
    };
    // Should not panic; accepted sets hold only three-digit prefixes
    if let Ok(set) = list.parse::<PrefixSet>() {
        assert!(!set.is_empty());
        assert!(set.iter().all(|p| p.as_str().len() == 3));
    }
});
