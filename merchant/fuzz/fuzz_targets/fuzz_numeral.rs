#![no_main]

use libfuzzer_sys::fuzz_target;
use merchant::{convert, to_roman};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(value) = convert(s) {
            assert!(value <= 3999);
            if value > 0 {
                assert_eq!(to_roman(value).as_deref(), Some(s.trim().to_ascii_uppercase().as_str()));
            }
        }
    }
});
