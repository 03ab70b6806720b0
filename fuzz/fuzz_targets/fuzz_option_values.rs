#![no_main]

use libfuzzer_sys::fuzz_target;
use stackwright::domain::value_objects::{Addon, Backend, Frontend};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = s.parse::<Frontend>();
        let _ = s.parse::<Backend>();
        let _ = s.parse::<Addon>();
    }
});
