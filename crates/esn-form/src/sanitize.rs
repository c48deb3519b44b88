//! Input sanitization for contact form fields.
//!
//! Strips markup and script-injection patterns from raw input before it
//! is stored in form state. Stripping repeats until a fixpoint, so the
//! operation is idempotent even when one removal uncovers another
//! occurrence (`javajavascript:script:`).

use once_cell::sync::Lazy;
use regex::Regex;

static JS_SCHEME: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)javascript:").unwrap());
static EVENT_HANDLER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)on\w+=").unwrap());

/// Strip angle brackets, `javascript:` scheme prefixes, inline
/// event-handler patterns, and surrounding whitespace from one field's
/// raw value.
pub fn sanitize(input: &str) -> String {
    let mut current = input.to_string();
    loop {
        let next = strip_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn strip_once(input: &str) -> String {
    let no_brackets: String = input.chars().filter(|c| *c != '<' && *c != '>').collect();
    let no_scheme = JS_SCHEME.replace_all(&no_brackets, "");
    let no_handlers = EVENT_HANDLER.replace_all(&no_scheme, "");
    no_handlers.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_angle_brackets() {
        assert_eq!(sanitize("<b>hello</b>"), "bhello/b");
        assert_eq!(sanitize("5 < 6 > 4"), "5  6  4");
    }

    #[test]
    fn test_strips_javascript_scheme_case_insensitively() {
        assert_eq!(sanitize("JaVaScRiPt:alert(1)"), "alert(1)");
        assert_eq!(sanitize("see javascript:void(0) here"), "see void(0) here");
    }

    #[test]
    fn test_strips_inline_event_handlers() {
        assert_eq!(sanitize("x onclick=alert(1)"), "x alert(1)");
        assert_eq!(sanitize("img ONERROR=boom src"), "img boom src");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(sanitize("  Jane Doe \t"), "Jane Doe");
    }

    #[test]
    fn test_removal_uncovering_another_occurrence() {
        assert_eq!(sanitize("javajavascript:script:alert(1)"), "alert(1)");
        assert_eq!(sanitize("oonclick=nclick=x"), "x");
    }

    #[test]
    fn test_idempotent_on_hostile_inputs() {
        let inputs = [
            "<script>javascript:alert(1)</script>",
            "  onload= javascript:JAVASCRIPT: <<>> ",
            "javajavascript:script:",
            "plain text stays plain",
        ];
        for input in inputs {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_result_contains_no_hostile_patterns() {
        let out = sanitize("<a onclick=go() href=javascript:run()>hi</a>");
        assert!(!out.contains('<'));
        assert!(!out.contains('>'));
        assert!(!JS_SCHEME.is_match(&out));
        assert!(!EVENT_HANDLER.is_match(&out));
    }
}
