//! Text helpers shared by the router, history and calculator reports.

/// Truncate to `max_chars` characters, appending "..." when anything was cut.
///
/// Counts characters, not bytes, so multi-byte input never splits a code point.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let head: String = text.chars().take(max_chars).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

/// Uppercase the first character ("wheat" -> "Wheat").
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Format an amount with comma thousands separators and at most two decimals.
///
/// Trailing fractional zeros are dropped: 390000.0 -> "390,000", 1234.5 -> "1,234.5".
pub fn format_amount(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let negative = rounded < 0.0;
    let abs = rounded.abs();

    let whole = abs.trunc() as u64;
    let cents = ((abs - abs.trunc()) * 100.0).round() as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative && (whole > 0 || cents > 0) {
        out.push('-');
    }
    out.push_str(&grouped);
    if cents > 0 {
        let frac = format!("{:02}", cents);
        out.push('.');
        out.push_str(frac.trim_end_matches('0'));
    }
    out
}

/// Format a number the way a form echoes it back: integers without a decimal point.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_query_untouched() {
        assert_eq!(truncate_with_ellipsis("best crop for clay", 50), "best crop for clay");
    }

    #[test]
    fn test_truncate_long_query() {
        let query = "a".repeat(60);
        let truncated = truncate_with_ellipsis(&query, 50);
        assert_eq!(truncated.len(), 53);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_truncate_exactly_fifty_has_no_ellipsis() {
        let query = "b".repeat(50);
        assert_eq!(truncate_with_ellipsis(&query, 50), query);
    }

    #[test]
    fn test_truncate_multibyte() {
        let query = "é".repeat(55);
        let truncated = truncate_with_ellipsis(&query, 50);
        assert_eq!(truncated.chars().count(), 53);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("wheat"), "Wheat");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(390000.0), "390,000");
        assert_eq!(format_amount(1234.5), "1,234.5");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(-160000.0), "-160,000");
        assert_eq!(format_amount(4166.029), "4,166.03");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(2.5), "2.5");
    }
}
