/// Decode the first code point of raw key input.
///
/// Returns `None` for empty input and U+FFFD when the leading sequence is not
/// valid UTF-8.
pub fn decode_utf8(buf: &[u8]) -> Option<char> {
    if buf.is_empty() {
        return None;
    }
    let valid = match std::str::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => std::str::from_utf8(&buf[..e.valid_up_to()]).unwrap_or_default(),
    };
    Some(valid.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER))
}

/// True for code points that produce text (not C0/C1 controls or DEL).
pub fn is_printable(c: char) -> bool {
    !c.is_control()
}

#[cfg(test)]
#[path = "../../tests/unit/event/utf8.rs"]
mod tests;
