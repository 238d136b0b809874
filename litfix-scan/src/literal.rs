//! Escape decoding and re-encoding for string literals.
//!
//! Decode and encode live side by side so the quoting convention has a
//! single owner: whatever `decode_*` understands, `encode_literal` can
//! write back in the same literal kind.
//!
//! Decoding is best-effort. An unrecognized escape or a malformed `\u`
//! sequence passes through verbatim instead of failing the token; only an
//! unterminated literal is a scan error.

use litfix_types::LiteralKind;

/// Decode the inner content of a `"..."` literal.
pub fn decode_regular(inner: &str) -> String {
    let mut out = String::with_capacity(inner.len());
    let mut i = 0;
    while let Some(c) = inner[i..].chars().next() {
        if c != '\\' {
            out.push(c);
            i += c.len_utf8();
            continue;
        }
        let src = &inner[i..];
        match src[1..].chars().next() {
            None => {
                // Trailing backslash, nothing to escape.
                out.push('\\');
                i += 1;
            }
            Some('n') => {
                out.push('\n');
                i += 2;
            }
            Some('r') => {
                out.push('\r');
                i += 2;
            }
            Some('t') => {
                out.push('\t');
                i += 2;
            }
            Some('0') => {
                out.push('\0');
                i += 2;
            }
            Some('\\') => {
                out.push('\\');
                i += 2;
            }
            Some('"') => {
                out.push('"');
                i += 2;
            }
            Some('\'') => {
                out.push('\'');
                i += 2;
            }
            Some('a') => {
                out.push('\u{7}');
                i += 2;
            }
            Some('b') => {
                out.push('\u{8}');
                i += 2;
            }
            Some('v') => {
                out.push('\u{b}');
                i += 2;
            }
            Some('f') => {
                out.push('\u{c}');
                i += 2;
            }
            Some('e') => {
                out.push('\u{1b}');
                i += 2;
            }
            Some('u') => match decode_unicode_escape(src) {
                Some((decoded, consumed)) => {
                    out.push(decoded);
                    i += consumed;
                }
                None => {
                    // Malformed \u: keep it as written.
                    out.push_str("\\u");
                    i += 2;
                }
            },
            Some('x') => match decode_hex_escape(src) {
                Some((decoded, consumed)) => {
                    out.push(decoded);
                    i += consumed;
                }
                None => {
                    out.push_str("\\x");
                    i += 2;
                }
            },
            Some('U') => match decode_long_unicode_escape(src) {
                Some((decoded, consumed)) => {
                    out.push(decoded);
                    i += consumed;
                }
                None => {
                    out.push_str("\\U");
                    i += 2;
                }
            },
            Some(other) => {
                out.push('\\');
                out.push(other);
                i += 1 + other.len_utf8();
            }
        }
    }
    out
}

/// Decode the inner content of a `@"..."` literal (`""` stands for `"`).
pub fn decode_verbatim(inner: &str) -> String {
    inner.replace("\"\"", "\"")
}

/// Re-encode a decoded value in the given literal kind, quotes included.
pub fn encode_literal(value: &str, kind: LiteralKind) -> String {
    match kind {
        LiteralKind::Regular => encode_regular(value),
        LiteralKind::Verbatim => format!("@\"{}\"", value.replace('"', "\"\"")),
    }
}

fn encode_regular(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            '\u{7}' => out.push_str("\\a"),
            '\u{8}' => out.push_str("\\b"),
            '\u{b}' => out.push_str("\\v"),
            '\u{c}' => out.push_str("\\f"),
            '\u{1b}' => out.push_str("\\e"),
            c if c.is_control() => {
                // \u escapes address UTF-16 code units, so astral code
                // points become a surrogate pair.
                let mut buf = [0u16; 2];
                for unit in c.encode_utf16(&mut buf) {
                    out.push_str(&format!("\\u{unit:04x}"));
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Parse `\uXXXX` (and a following low-surrogate escape when the first
/// unit is a high surrogate) starting at `src`. Returns the decoded char
/// and the number of input bytes consumed.
fn decode_unicode_escape(src: &str) -> Option<(char, usize)> {
    let hi = parse_unit(src)?;
    if (0xD800..=0xDBFF).contains(&hi) {
        let lo = parse_unit(&src[6..])?;
        if !(0xDC00..=0xDFFF).contains(&lo) {
            return None;
        }
        let scalar = 0x10000 + ((u32::from(hi) - 0xD800) << 10) + (u32::from(lo) - 0xDC00);
        return char::from_u32(scalar).map(|c| (c, 12));
    }
    char::from_u32(u32::from(hi)).map(|c| (c, 6))
}

/// Parse `\x` followed by one to four hex digits (greedy, like the host
/// syntax) into a UTF-16 code unit. Surrogate units have no standalone
/// char and fall back to verbatim passthrough.
fn decode_hex_escape(src: &str) -> Option<(char, usize)> {
    let rest = src.strip_prefix("\\x")?;
    let digits = rest
        .bytes()
        .take(4)
        .take_while(|b| b.is_ascii_hexdigit())
        .count();
    if digits == 0 {
        return None;
    }
    let unit = u16::from_str_radix(&rest[..digits], 16).ok()?;
    char::from_u32(u32::from(unit)).map(|c| (c, 2 + digits))
}

/// Parse `\UXXXXXXXX` (8 hex digits) into a full code point.
fn decode_long_unicode_escape(src: &str) -> Option<(char, usize)> {
    let hex = src.strip_prefix("\\U")?.get(..8)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let scalar = u32::from_str_radix(hex, 16).ok()?;
    char::from_u32(scalar).map(|c| (c, 10))
}

/// Parse one `\uXXXX` escape at the start of `s` into its code unit.
fn parse_unit(s: &str) -> Option<u16> {
    let hex = s.strip_prefix("\\u")?.get(..4)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(hex, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decode_plain_passthrough() {
        assert_eq!(decode_regular("hello"), "hello");
        assert_eq!(decode_regular(""), "");
    }

    #[test]
    fn decode_named_escapes() {
        assert_eq!(decode_regular("a\\nb\\rc\\td\\0e\\\\f\\'g\\\"x"), "a\nb\rc\td\0e\\f'g\"x");
    }

    #[test]
    fn decode_control_escapes() {
        assert_eq!(
            decode_regular(r"\a\b\v\f\e"),
            "\u{7}\u{8}\u{b}\u{c}\u{1b}"
        );
    }

    #[test]
    fn decode_hex_escape_is_greedy_up_to_four_digits() {
        assert_eq!(decode_regular(r"\x41"), "A");
        assert_eq!(decode_regular(r"\x9"), "\t");
        assert_eq!(decode_regular(r"\x0041"), "A");
        assert_eq!(decode_regular(r"\x00411"), "A1");
    }

    #[test]
    fn malformed_hex_escape_passes_through() {
        assert_eq!(decode_regular(r"\xzz"), "\\xzz");
        // A surrogate code unit has no standalone char.
        assert_eq!(decode_regular(r"\xD800"), "\\xD800");
    }

    #[test]
    fn decode_long_unicode_escapes() {
        assert_eq!(decode_regular(r"\U0001F600"), "\u{1F600}");
        assert_eq!(decode_regular(r"\U00000041"), "A");
        // Too few digits, or not a scalar value: keep as written.
        assert_eq!(decode_regular(r"\U0041"), "\\U0041");
        assert_eq!(decode_regular(r"\UFFFFFFFF"), "\\UFFFFFFFF");
    }

    #[test]
    fn decode_unicode_bmp() {
        assert_eq!(decode_regular(r"\u0041"), "A");
        assert_eq!(decode_regular(r"\u00E9"), "é");
    }

    #[test]
    fn decode_surrogate_pair() {
        assert_eq!(decode_regular(r"\uD83D\uDE00"), "\u{1F600}");
    }

    #[test]
    fn malformed_unicode_passes_through() {
        assert_eq!(decode_regular(r"\u12"), "\\u12");
        assert_eq!(decode_regular(r"\uZZZZ"), "\\uZZZZ");
        // Lone high surrogate cannot be a char; keep it as written.
        assert_eq!(decode_regular(r"\uD83D x"), "\\uD83D x");
    }

    #[test]
    fn trailing_backslash_kept() {
        assert_eq!(decode_regular("a\\"), "a\\");
    }

    #[test]
    fn verbatim_decode() {
        assert_eq!(decode_verbatim(r#"say ""hi"""#), r#"say "hi""#);
        assert_eq!(decode_verbatim(r"c:\temp"), r"c:\temp");
    }

    #[test]
    fn encode_regular_escapes() {
        assert_eq!(
            encode_literal("A\nB\"C\\D", LiteralKind::Regular),
            r#""A\nB\"C\\D""#
        );
    }

    #[test]
    fn encode_named_control_escapes() {
        assert_eq!(
            encode_literal("\u{7}\u{8}\u{b}\u{c}\u{1b}", LiteralKind::Regular),
            "\"\\a\\b\\v\\f\\e\""
        );
    }

    #[test]
    fn encode_control_char_as_unicode_escape() {
        assert_eq!(encode_literal("\u{1}", LiteralKind::Regular), r#""\u0001""#);
    }

    #[test]
    fn encode_verbatim_doubles_quotes() {
        assert_eq!(
            encode_literal(r#"say "HI""#, LiteralKind::Verbatim),
            r#"@"say ""HI""""#
        );
    }

    #[test]
    fn decode_encode_roundtrip() {
        for value in [
            "",
            "plain",
            "a\n\t\"b\"\\c",
            "héllo \u{1F600}",
            "\0",
            "\u{7}\u{8}\u{b}\u{c}\u{1b}",
        ] {
            for kind in [LiteralKind::Regular, LiteralKind::Verbatim] {
                let encoded = encode_literal(value, kind);
                let decoded = match kind {
                    LiteralKind::Regular => decode_regular(&encoded[1..encoded.len() - 1]),
                    LiteralKind::Verbatim => decode_verbatim(&encoded[2..encoded.len() - 1]),
                };
                assert_eq!(decoded, value, "kind {kind:?}");
            }
        }
    }
}
