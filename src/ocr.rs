//! OCR output cleanup for mathematical text.
//!
//! OCR engines routinely mangle math: ligatures fused into single glyphs,
//! the Unicode minus and fraction slash where ASCII is wanted, letter `O`
//! inside digit groups. `clean_math_ocr` normalizes these. Every rule's
//! output is a fixed point of the rule set, so the function is idempotent
//! and safe to apply to already-cleaned text.

/// Character-level substitutions. Left side never appears on the right,
/// which is what keeps repeated application stable.
const SYMBOL_SUBSTITUTIONS: &[(char, &str)] = &[
    // Ligatures fused by the OCR engine.
    ('\u{fb00}', "ff"),
    ('\u{fb01}', "fi"),
    ('\u{fb02}', "fl"),
    ('\u{fb03}', "ffi"),
    ('\u{fb04}', "ffl"),
    // Math symbols folded to their ASCII equivalents.
    ('\u{2212}', "-"),  // minus sign
    ('\u{2044}', "/"),  // fraction slash
    ('\u{2215}', "/"),  // division slash
    ('\u{2217}', "*"),  // asterisk operator
    ('\u{2219}', "\u{b7}"), // bullet operator -> middle dot
    ('\u{22c5}', "\u{b7}"), // dot operator -> middle dot
    ('\u{ff0b}', "+"),  // fullwidth plus
    ('\u{ff0d}', "-"),  // fullwidth hyphen-minus
    ('\u{ff1d}', "="),  // fullwidth equals
];

/// Normalize common OCR mis-recognitions in mathematical text.
///
/// Idempotent: `clean_math_ocr(clean_math_ocr(s)) == clean_math_ocr(s)`.
pub fn clean_math_ocr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match SYMBOL_SUBSTITUTIONS.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => out.push_str(to),
            None => out.push(c),
        }
    }

    fix_o_between_digits(&out)
}

/// `1O0` and friends: letter O wedged between digits is a zero.
///
/// Neighbors are judged against the input, so `1O2O3` fixes both Os in a
/// single pass and the result is stable.
fn fix_o_between_digits(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let between_digits = i > 0
                && i + 1 < chars.len()
                && chars[i - 1].is_ascii_digit()
                && chars[i + 1].is_ascii_digit();
            if (c == 'O' || c == 'o') && between_digits {
                '0'
            } else {
                c
            }
        })
        .collect()
}
