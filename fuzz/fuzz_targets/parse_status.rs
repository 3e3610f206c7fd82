#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(code) = reqprobe::fuzzing::parse_status_input(data) {
        debug_assert!(code <= 999);
        debug_assert_eq!(reqprobe::fuzzing::parse_status_input(data).ok(), Some(code));
    }
});
