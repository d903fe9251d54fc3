#![no_main]

use libfuzzer_sys::fuzz_target;
use merchant::Engine;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut engine = Engine::new();

        for line in s.lines() {
            let _ = engine.submit(line);
        }
    }
});
