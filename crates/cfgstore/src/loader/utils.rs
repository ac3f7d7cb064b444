//! Helper utilities for search path handling.

use std::env;

/// Expand `$NAME` and `${NAME}` references using the process environment.
pub(super) fn expand_env(input: &str) -> String {
    expand_with(input, |name| env::var(name).ok())
}

/// Expand variable references with a custom lookup.
///
/// Follows shell conventions: unset variables expand to an empty string,
/// a single special character (`$1`, `$?`, `$$`, ...) is a complete name,
/// and a `$` followed by nothing name-like is kept as-is. Malformed braces
/// are consumed: `${}` is dropped and an unterminated `${` loses the `${`.
pub(super) fn expand_with<F>(input: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        match shell_name(after) {
            Reference::Name(name, width) => {
                out.push_str(&lookup(name).unwrap_or_default());
                rest = &after[width..];
            }
            Reference::Invalid(width) => rest = &after[width..],
            Reference::None => {
                out.push('$');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Variable reference following a `$`.
enum Reference<'a> {
    /// A name and the number of bytes it spans after the `$`.
    Name(&'a str, usize),
    /// Malformed syntax spanning this many bytes, which is dropped.
    Invalid(usize),
    /// Not a reference; the `$` is literal.
    None,
}

fn shell_name(s: &str) -> Reference<'_> {
    let bytes = s.as_bytes();
    if bytes.first() == Some(&b'{') {
        if bytes.len() > 2 && is_special(bytes[1]) && bytes[2] == b'}' {
            return Reference::Name(&s[1..2], 3);
        }
        return match s.find('}') {
            Some(1) => Reference::Invalid(2),
            Some(end) => Reference::Name(&s[1..end], end + 1),
            None => Reference::Invalid(1),
        };
    }
    match bytes.first() {
        Some(&first) if is_special(first) => Reference::Name(&s[..1], 1),
        _ => {
            let len = s
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(s.len());
            if len == 0 {
                Reference::None
            } else {
                Reference::Name(&s[..len], len)
            }
        }
    }
}

fn is_special(byte: u8) -> bool {
    matches!(byte, b'*' | b'#' | b'$' | b'@' | b'!' | b'?' | b'-') || byte.is_ascii_digit()
}
