#![no_main]

use libfuzzer_sys::fuzz_target;
use logtally::{count_lines, BracketParser};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes, including invalid UTF-8, must never abort a file.
    let (tally, stats) = count_lines(data, &BracketParser::new()).expect("in-memory read");
    assert_eq!(tally.total_events(), stats.lines_counted as u64);
    assert_eq!(stats.lines_counted + stats.lines_malformed, stats.lines_read);
});
