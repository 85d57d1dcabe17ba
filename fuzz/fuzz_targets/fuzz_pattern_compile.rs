#![no_main]
use libfuzzer_sys::fuzz_target;
use tagmatch::pattern;

fuzz_target!(|data: &str| {
    // Must not panic on any input, wildcard or `regex:`
    if let Ok(compiled) = pattern::compile(data) {
        let _ = compiled.is_match(data);
    }
});
