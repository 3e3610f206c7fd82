#![no_main]

use libfuzzer_sys::fuzz_target;
use reqprobe::args::RunMode;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let RunMode::Profile(count) = reqprobe::fuzzing::run_mode_input(input) {
            debug_assert_eq!(input.parse::<usize>().ok(), Some(count.get()));
        }
    }
});
