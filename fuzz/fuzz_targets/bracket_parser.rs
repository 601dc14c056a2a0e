#![no_main]

use libfuzzer_sys::fuzz_target;
use logtally::{BracketParser, RecordParser};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Malformed lines are fine; we only care about panics.
        if let Some(record) = BracketParser::new().parse(input) {
            assert!(!record.level.is_empty());
            assert!(!record.process.is_empty());
        }
    }
});
