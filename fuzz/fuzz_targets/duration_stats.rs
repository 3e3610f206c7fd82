#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|values: Vec<u64>| {
    if let Some(((min, max), _median)) = reqprobe::fuzzing::duration_stats_input(&values) {
        debug_assert!(min <= max);
        debug_assert!(values.iter().all(|value| *value >= min && *value <= max));
    }
});
