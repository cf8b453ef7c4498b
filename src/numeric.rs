//! Lenient integer parsing for fixed-width worksheet fields.

/// Parse the integer at the front of `text`.
///
/// Leading whitespace is skipped and an optional sign is accepted. The longest
/// run of ASCII digits that follows is parsed and anything after it is ignored,
/// so padded fields such as `" 45 "` yield `45`.
///
/// Returns `None` when no digit follows the optional sign or the value does not
/// fit in an `i64`.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();

    let sign_len = match bytes.first() {
        Some(b'+' | b'-') => 1,
        _ => 0,
    };
    let digit_len = bytes[sign_len..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();

    if digit_len == 0 {
        return None;
    }

    trimmed[..sign_len + digit_len].parse().ok()
}
