//! Parameter extraction from prompt text.

use std::sync::OnceLock;

use regex::Regex;

/// Value used when a rule's count is absent from the prompt.
pub const DEFAULT_COUNT: u32 = 3;

/// Inclusive range a rule's count is clamped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, n: u32) -> u32 {
        n.clamp(self.min, self.max)
    }
}

/// Extract a count using `pattern` (capture group 1 holds the digits).
///
/// Out-of-range values clamp to the nearest bound. ASCII digit runs too large
/// to represent clamp to the upper bound. No match, or a capture that is not
/// plain ASCII digits, yields [`DEFAULT_COUNT`].
pub fn extract_count(pattern: &Regex, text: &str, range: CountRange) -> u32 {
    let Some(digits) = pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|d| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()))
    else {
        return range.clamp(DEFAULT_COUNT);
    };

    match digits.parse::<u32>() {
        Ok(n) => range.clamp(n),
        Err(_) => range.max,
    }
}

fn title_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\btitle\s*:\s*([^\n,.;]+)").expect("valid title pattern")
    })
}

fn cta_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\b(?:cta|button text|button)\s*:\s*([^\n,.;]+)")
            .expect("valid cta pattern")
    })
}

fn capture_trimmed(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Inline `title: ...` override, case preserved.
pub fn title_override(raw: &str) -> Option<String> {
    capture_trimmed(title_pattern(), raw)
}

/// Inline `cta: ...` / `button text: ...` / `button: ...` override, case preserved.
pub fn cta_override(raw: &str) -> Option<String> {
    capture_trimmed(cta_pattern(), raw)
}
