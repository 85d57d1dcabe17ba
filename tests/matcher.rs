//! Tests for the public matching API.

use tagmatch::TagMatcher;

#[test]
fn single_wildcard_matches_last_segment() {
    let matcher = TagMatcher::new();
    assert!(matcher.matches("EduGo.Auth.Login", "EduGo.Auth.*"));
}

#[test]
fn single_wildcard_does_not_cross_segments() {
    let matcher = TagMatcher::new();
    assert!(!matcher.matches("EduGo.Auth.Login", "EduGo.*"));
    assert!(matcher.matches("EduGo.Auth", "EduGo.*"));
    assert!(matcher.matches("EduGo.Auth.Login", "EduGo.*.Login"));
}

#[test]
fn double_wildcard_spans_segments() {
    let matcher = TagMatcher::new();
    assert!(matcher.matches("EduGo.Auth.Login.OAuth", "EduGo.**"));
    assert!(matcher.matches("EduGo.Auth.Login.OAuth", "**.OAuth"));
    assert!(matcher.matches("EduGo.Auth.Login.OAuth", "EduGo.**.OAuth"));
    assert!(!matcher.matches("Other.Auth", "EduGo.**"));
}

#[test]
fn negative_case() {
    let matcher = TagMatcher::new();
    assert!(!matcher.matches("EduGo.Auth.Login", "EduGo.Network.*"));
}

#[test]
fn exact_match_without_wildcards() {
    let matcher = TagMatcher::new();
    assert!(matcher.matches("a.b.c", "a.b.c"));
    assert!(!matcher.matches("a.b.c", "a.b"));
    assert!(!matcher.matches("a.b", "a.b.c"));
}

#[test]
fn match_is_anchored() {
    let matcher = TagMatcher::new();
    assert!(!matcher.matches("xEduGo.Auth", "EduGo.*"));
    assert!(!matcher.matches("EduGo.Auth.Login", "Auth"));
}

#[test]
fn tags_are_not_normalized() {
    let matcher = TagMatcher::new();
    assert!(!matcher.matches("edugo.auth", "EduGo.*"));
    assert!(!matcher.matches(" EduGo.Auth", "EduGo.*"));
}

#[test]
fn dot_is_literal() {
    let matcher = TagMatcher::new();
    assert!(!matcher.matches("aXb", "a.b*"));
    assert!(matcher.matches("a.bc", "a.b*"));
}

#[test]
fn blank_pattern_never_matches() {
    let matcher = TagMatcher::new();
    assert!(!matcher.matches("anything", ""));
    assert!(!matcher.matches("", ""));
    assert!(!matcher.matches("   ", "   "));
    assert!(!matcher.is_valid_pattern(""));
    assert!(!matcher.is_valid_pattern("\t "));
    assert_eq!(matcher.cache_size(), 0);
}

#[test]
fn universal_wildcards() {
    let matcher = TagMatcher::new();
    for tag in ["a", "a.b", "EduGo.Auth.Login.OAuth", "x+y(z)"] {
        assert!(matcher.matches(tag, "*"), "* should match {tag}");
        assert!(matcher.matches(tag, "**"), "** should match {tag}");
    }
}

#[test]
fn explicit_regex() {
    let matcher = TagMatcher::new();
    assert!(matcher.matches("EduGo.Auth.Login", r"regex:EduGo\.(Auth|Network)\..*"));
    assert!(!matcher.matches("EduGo.Cache.Get", r"regex:EduGo\.(Auth|Network)\..*"));
    assert!(matcher.matches("Svc42", r"regex:Svc\d+"));
}

#[test]
fn invalid_regex_returns_false() {
    let matcher = TagMatcher::new();
    assert!(!matcher.matches("x", "regex:(unterminated"));
    assert!(!matcher.matches("x", "regex:"));
    assert!(!matcher.is_valid_pattern("regex:(unterminated"));
    assert!(!matcher.is_valid_pattern("regex:"));
    assert_eq!(matcher.cache_size(), 0);
}

#[test]
fn metacharacters_in_wildcards_are_literal() {
    let matcher = TagMatcher::new();
    assert!(matcher.matches("App(1).Core", "App(1).*"));
    assert!(!matcher.matches("App1.Core", "App(1).*"));
    assert!(matcher.matches("a+b.c", "a+b.*"));
    assert!(!matcher.matches("aab.c", "a+b.*"));
    assert!(matcher.matches("a|b.x", "a|b.*"));
    assert!(!matcher.matches("a.x", "a|b.*"));
    assert!(matcher.matches("$x.^y", "$x.*"));
}

#[test]
fn valid_patterns() {
    let matcher = TagMatcher::new();
    assert!(matcher.is_valid_pattern("EduGo.**"));
    assert!(matcher.is_valid_pattern("a(b"));
    assert!(matcher.is_valid_pattern("regex:^a.+$"));
    assert!(matcher.is_valid_pattern("*"));
}

#[test]
fn matches_any_is_logical_or() {
    let matcher = TagMatcher::new();
    let tag = "EduGo.Auth.Login";
    let patterns = ["EduGo.Network.*", "EduGo.Auth.*", "regex:("];
    let expected = patterns.iter().any(|p| matcher.matches(tag, p));
    assert!(expected);
    assert_eq!(matcher.matches_any(tag, patterns), expected);

    assert!(!matcher.matches_any(tag, ["Other.*", "", "regex:("]));
    assert!(!matcher.matches_any(tag, Vec::<String>::new()));
}

#[test]
fn matches_any_short_circuits() {
    let matcher = TagMatcher::new();
    // The first pattern is an exact match, so later ones are never compiled.
    assert!(matcher.matches_any("A.B", ["A.B", "C.*", "D.*"]));
    assert_eq!(matcher.cache_size(), 0);
}

#[test]
fn filter_preserves_order() {
    let matcher = TagMatcher::new();
    let tags = [
        "EduGo.Auth.Login",
        "EduGo.Network.Http",
        "EduGo.Auth.Logout",
        "Other.Auth.Login",
        "EduGo.Auth",
    ];
    let filtered = matcher.filter(tags, "EduGo.Auth.*");
    assert_eq!(filtered, vec!["EduGo.Auth.Login", "EduGo.Auth.Logout"]);

    for tag in tags {
        assert_eq!(filtered.contains(&tag), matcher.matches(tag, "EduGo.Auth.*"));
    }
}

#[test]
fn filter_with_invalid_pattern_is_empty() {
    let matcher = TagMatcher::new();
    let tags = vec!["a".to_string(), "b".to_string()];
    assert!(matcher.filter(tags.iter().map(String::as_str), "regex:[").is_empty());
    assert!(matcher.filter(tags.iter().map(String::as_str), "").is_empty());
}

#[test]
fn compile_reports_reason() {
    let matcher = TagMatcher::new();
    assert!(matches!(
        matcher.compile(""),
        Err(tagmatch::PatternError::Blank)
    ));
    assert!(matches!(
        matcher.compile("regex:"),
        Err(tagmatch::PatternError::EmptyRegex)
    ));
    assert!(matches!(
        matcher.compile("regex:(x"),
        Err(tagmatch::PatternError::InvalidRegex { .. })
    ));
}

#[test]
fn builder_warms_cache() {
    let matcher = TagMatcher::builder()
        .capacity(8)
        .warm(["A.*", "B.**", "regex:("])
        .build();
    assert_eq!(matcher.cache_capacity(), 8);
    assert_eq!(matcher.cache_size(), 2);
    assert!(matcher.cache().contains("A.*"));
}
