#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Must not panic on any input, including malformed source lines
    let _ = tagmatch::config::extract_sources(data);
    let _ = tagmatch::Config::parse(data);
});
