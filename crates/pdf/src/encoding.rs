//! Text encodings
//!
//! Text shown with the standard 14 fonts is written as single-byte
//! *WinAnsiEncoding* strings. Characters outside that code page cannot be
//! shown without embedding a font, so the lossy encoder replaces them with
//! [`PLACEHOLDER`].

use std::borrow::Cow;

use thiserror::Error;

/// Byte written for characters that have no WinAnsiEncoding code
pub const PLACEHOLDER: u8 = b'?';

/// Codepoint is not valid in WinAnsiEncoding
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Codepoint {0:?} is not valid in WinAnsiEncoding")]
pub struct WinAnsiEncodingError(pub char);

/// Escape the characters that are structural within a literal string.
///
/// Every `\` becomes `\\`, every `(` becomes `\(` and every `)` becomes `\)`.
/// This is done in a single pass, so the inserted backslashes are never
/// escaped a second time.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(&['\\', '(', ')'][..]) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for chr in text.chars() {
        match chr {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            _ => out.push(chr),
        }
    }
    Cow::Owned(out)
}

/// Inverse of [`escape`]
pub fn unescape(text: &str) -> Cow<'_, str> {
    if !text.contains('\\') {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(chr) = chars.next() {
        if chr == '\\' {
            // a dangling backslash at the end is kept as-is
            out.push(chars.next().unwrap_or('\\'));
        } else {
            out.push(chr);
        }
    }
    Cow::Owned(out)
}

fn win_ansi_char_encode(chr: char) -> Result<u8, WinAnsiEncodingError> {
    match u32::from(chr) {
        0x20..=0x7E | 0xA0..=0xFF => Ok(chr as u8),

        0x20AC => Ok(0x80),
        0x201A => Ok(0x82),
        0x0192 => Ok(0x83),
        0x201E => Ok(0x84),
        0x2026 => Ok(0x85),
        0x2020 => Ok(0x86),
        0x2021 => Ok(0x87),
        0x02C6 => Ok(0x88),
        0x2030 => Ok(0x89),
        0x0160 => Ok(0x8A),
        0x2039 => Ok(0x8B),
        0x0152 => Ok(0x8C),
        0x017D => Ok(0x8E),

        0x2018 => Ok(0x91),
        0x2019 => Ok(0x92),
        0x201C => Ok(0x93),
        0x201D => Ok(0x94),
        0x2022 => Ok(0x95),
        0x2013 => Ok(0x96),
        0x2014 => Ok(0x97),
        0x02DC => Ok(0x98),
        0x2122 => Ok(0x99),
        0x0161 => Ok(0x9A),
        0x203A => Ok(0x9B),
        0x0153 => Ok(0x9C),
        0x017E => Ok(0x9E),
        0x0178 => Ok(0x9F),

        _ => Err(WinAnsiEncodingError(chr)),
    }
}

/// Encode a string as WinAnsiEncoding
pub fn win_ansi_encode(input: &str) -> Result<Vec<u8>, WinAnsiEncodingError> {
    input.chars().map(win_ansi_char_encode).collect()
}

/// Encode a string as WinAnsiEncoding, replacing unconvertible characters
/// with [`PLACEHOLDER`]
pub fn win_ansi_encode_lossy(input: &str) -> Vec<u8> {
    input
        .chars()
        .map(|chr| win_ansi_char_encode(chr).unwrap_or(PLACEHOLDER))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_parens_and_backslash() {
        assert_eq!(escape("A (test) \\value"), "A \\(test\\) \\\\value");
        assert_eq!(escape("\\("), "\\\\\\(");
        assert!(matches!(escape("plain text"), Cow::Borrowed(_)));
    }

    #[test]
    fn escape_leaves_no_bare_parens() {
        for text in ["()", "((a)", "x)y(z", "\\)", "a\\\\(b", ""] {
            let escaped = escape(text);
            let bytes = escaped.as_bytes();
            for (i, byte) in bytes.iter().enumerate() {
                if *byte == b'(' || *byte == b')' {
                    let slashes = bytes[..i].iter().rev().take_while(|b| **b == b'\\').count();
                    assert_eq!(slashes % 2, 1, "unescaped paren in {:?}", escaped);
                }
            }
            assert_eq!(unescape(&escaped), text);
        }
    }

    proptest::proptest! {
        #[test]
        fn escape_roundtrip(text in "[a-z ()\\\\]{0,40}|\\PC*") {
            let escaped = escape(&text);
            let bytes = escaped.as_bytes();
            for (i, byte) in bytes.iter().enumerate() {
                if *byte == b'(' || *byte == b')' {
                    let slashes = bytes[..i].iter().rev().take_while(|b| **b == b'\\').count();
                    proptest::prop_assert_eq!(slashes % 2, 1);
                }
            }
            proptest::prop_assert_eq!(unescape(&escaped), text.as_str());
        }
    }

    #[test]
    fn lossy_encoding() {
        assert_eq!(win_ansi_encode_lossy("Größe"), b"Gr\xf6\xdfe".to_vec());
        assert_eq!(win_ansi_encode_lossy("a \u{2014} b"), b"a \x97 b".to_vec());
        assert_eq!(win_ansi_encode_lossy("\u{2192} \u{4e2d}"), b"? ?".to_vec());
        assert_eq!(win_ansi_encode_lossy("tab\there"), b"tab?here".to_vec());
    }

    #[test]
    fn strict_encoding() {
        assert_eq!(win_ansi_encode("\u{20ac}5"), Ok(vec![0x80, b'5']));
        assert_eq!(
            win_ansi_encode("x \u{2192}"),
            Err(WinAnsiEncodingError('\u{2192}'))
        );
    }
}
