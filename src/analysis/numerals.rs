//! Numeral token parsing for chapter labels.
//!
//! Header labels arrive as digit strings ("12"), roman numerals ("XIV"),
//! or English words ("seven"). Parsing never fails: unrecognized tokens
//! resolve to 0 so a garbled header degrades instead of erroring.

/// Parse a chapter-number token: roman numeral, word numeral, or digits.
///
/// Priority: roman (if the token is made only of roman symbols), then the
/// words "one".."twelve", then base-10 digits. Returns 0 on failure.
pub fn parse_chapter_number(token: &str) -> u32 {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return 0;
    }

    if is_roman(trimmed) {
        return parse_roman(trimmed);
    }

    if let Some(n) = parse_word_numeral(trimmed) {
        return n;
    }

    trimmed.parse().unwrap_or(0)
}

/// True when every character is a roman-numeral symbol (case-insensitive).
fn is_roman(token: &str) -> bool {
    token
        .chars()
        .all(|c| matches!(c.to_ascii_uppercase(), 'I' | 'V' | 'X' | 'L' | 'C' | 'D' | 'M'))
}

/// Decode a roman numeral with the standard subtractive-pair scan.
///
/// Left to right: a symbol smaller than its successor is subtracted,
/// otherwise added. Malformed sequences still produce a number ("IIX" → 8)
/// rather than an error, matching the permissive header parser.
fn parse_roman(token: &str) -> u32 {
    let values: Vec<u32> = token
        .chars()
        .map(|c| match c.to_ascii_uppercase() {
            'I' => 1,
            'V' => 5,
            'X' => 10,
            'L' => 50,
            'C' => 100,
            'D' => 500,
            'M' => 1000,
            _ => 0,
        })
        .collect();

    let mut total: i64 = 0;
    for (i, &v) in values.iter().enumerate() {
        if values.get(i + 1).is_some_and(|&next| v < next) {
            total -= v as i64;
        } else {
            total += v as i64;
        }
    }
    total.max(0) as u32
}

/// Map the English words "one".."twelve" to 1–12.
fn parse_word_numeral(token: &str) -> Option<u32> {
    let n = match token.to_lowercase().as_str() {
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        _ => return None,
    };
    Some(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roman_numerals() {
        let cases = [
            ("I", 1),
            ("II", 2),
            ("III", 3),
            ("IV", 4),
            ("V", 5),
            ("IX", 9),
            ("X", 10),
            ("XIV", 14),
            ("XL", 40),
            ("MCMXCIV", 1994),
        ];
        for (token, expected) in cases {
            assert_eq!(parse_chapter_number(token), expected, "token {token}");
        }
    }

    #[test]
    fn test_roman_case_insensitive() {
        assert_eq!(parse_chapter_number("iv"), 4);
        assert_eq!(parse_chapter_number("xii"), 12);
    }

    #[test]
    fn test_word_numerals() {
        assert_eq!(parse_chapter_number("one"), 1);
        assert_eq!(parse_chapter_number("Seven"), 7);
        assert_eq!(parse_chapter_number("twelve"), 12);
        assert_eq!(parse_chapter_number("thirteen"), 0);
    }

    #[test]
    fn test_digits() {
        assert_eq!(parse_chapter_number("42"), 42);
        assert_eq!(parse_chapter_number(" 7 "), 7);
    }

    #[test]
    fn test_garbage_is_zero() {
        assert_eq!(parse_chapter_number(""), 0);
        assert_eq!(parse_chapter_number("abc"), 0);
        assert_eq!(parse_chapter_number("12a"), 0);
    }
}
