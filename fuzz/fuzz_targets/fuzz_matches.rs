#![no_main]
use libfuzzer_sys::fuzz_target;
use tagmatch::TagMatcher;

fuzz_target!(|data: (&str, &str)| {
    let (tag, pattern) = data;
    let matcher = TagMatcher::with_capacity(4);
    let matched = matcher.matches(tag, pattern);
    // Same answer from the cached entry
    assert_eq!(matched, matcher.matches(tag, pattern));
    assert!(matcher.cache_size() <= 4);
});
