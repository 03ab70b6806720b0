#![no_main]

use libfuzzer_sys::fuzz_target;
use stackwright::infrastructure::repositories::{parse_state, strip_comments};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Stripping comments must never panic, whatever the quoting
        let _ = strip_comments(content);
        let _ = parse_state(content);
    }
});
