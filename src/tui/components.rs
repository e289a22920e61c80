//! Fixed-width text helpers
//!
//! Every menu row is laid out to an exact display width. Widths are
//! measured in terminal columns, so wide characters never overflow a row.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `value` to at most `max_width` columns, never splitting a character
pub fn truncate(value: &str, max_width: usize) -> String {
    if value.width() <= max_width {
        return value.to_string();
    }

    let mut current_width = 0;
    let mut output = String::new();

    for ch in value.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width {
            break;
        }
        output.push(ch);
        current_width += ch_width;
    }

    output
}

/// Truncate, then right-pad with spaces to exactly `width` columns
pub fn fit(value: &str, width: usize) -> String {
    let mut output = truncate(value, width);
    let used = output.width();
    output.push_str(&" ".repeat(width.saturating_sub(used)));
    output
}

/// Left-align `left` and right-align `right` within exactly `width` columns
///
/// `left` is truncated first so `right` always stays visible; `right` is
/// only cut when it alone is wider than the row.
pub fn justify(left: &str, right: &str, width: usize) -> String {
    let right_width = right.width();
    if right_width >= width {
        return fit(right, width);
    }

    let left = truncate(left, width - right_width);
    let gap = width - right_width - left.width();
    format!("{}{}{}", left, " ".repeat(gap), right)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello", 3), "hel");
        assert_eq!(truncate("hello", 0), "");
        // Wide characters are never split
        assert_eq!(truncate("日本語", 5), "日本");
    }

    #[test]
    fn test_fit_pads_and_truncates() {
        assert_eq!(fit("ab", 5), "ab   ");
        assert_eq!(fit("abcdef", 4), "abcd");
        assert_eq!(fit("", 3), "   ");
        assert_eq!(fit("日本語", 5).width(), 5);
    }

    #[test]
    fn test_justify() {
        assert_eq!(justify("» EX", "[OK]", 10), "» EX  [OK]");
        assert_eq!(justify("» A LONG TITLE", "[OK]", 10), "» A LO[OK]");
        assert_eq!(justify("x", "[COMPLETED]", 5), "[COMP");
    }

    #[test]
    fn test_justify_exact_width() {
        for width in 11..40 {
            let row = justify("» SOME RATHER LONG EXERCISE TITLE", "[COMPLETED]", width);
            assert_eq!(row.width(), width);
            assert!(row.ends_with("[COMPLETED]"));
        }
    }
}
