#![no_main]

use bitflags::bitflags;
use libfuzzer_sys::fuzz_target;
use primext::{FlagsExt, ToFlags};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Raw64: u64 {
        const ALL = !0;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Raw8: u8 {
        const ALL = !0;
    }
}

fuzz_target!(|data: (u64, Vec<u64>)| {
    let (value, candidates) = data;
    let value = Raw64::from_bits_retain(value);
    let candidates: Vec<Raw64> = candidates
        .into_iter()
        .map(Raw64::from_bits_retain)
        .collect();

    let single = value.to_single_flags();
    assert!(!single.is_empty());
    assert!(single.iter().all(|flag| flag.is_single_flag()));
    assert_eq!(single.into_iter().to_flags(), value);

    let any = value.has_any_flag_of(&candidates);
    assert_eq!(any, candidates.iter().any(|&c| value & c == c));
    assert_eq!(
        value.equals_any(candidates.iter().copied()),
        candidates.contains(&value)
    );

    let narrow = Raw8::from_bits_retain(value.bits() as u8);
    assert_eq!(narrow.enumerate_flags().len(), narrow.bits().count_ones().max(1) as usize);
});
