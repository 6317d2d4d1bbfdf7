use super::*;

#[test]
fn decodes_single_and_multibyte_sequences() {
    assert_eq!(decode_utf8(b"a"), Some('a'));
    assert_eq!(decode_utf8("é".as_bytes()), Some('é'));
    assert_eq!(decode_utf8("€x".as_bytes()), Some('€'));
    assert_eq!(decode_utf8("🎹".as_bytes()), Some('🎹'));
}

#[test]
fn empty_input_has_no_code_point() {
    assert_eq!(decode_utf8(&[]), None);
}

#[test]
fn invalid_leading_sequence_maps_to_replacement() {
    assert_eq!(decode_utf8(&[0xff, 0x41]), Some(char::REPLACEMENT_CHARACTER));
    assert_eq!(decode_utf8(&[0xe2, 0x82]), Some(char::REPLACEMENT_CHARACTER));
    // valid prefix survives trailing garbage
    assert_eq!(decode_utf8(&[b'q', 0xff]), Some('q'));
}

#[test]
fn controls_are_not_printable() {
    assert!(is_printable('a'));
    assert!(!is_printable('\u{8}'));
    assert!(!is_printable('\u{7f}'));
    assert!(!is_printable('\r'));
}
