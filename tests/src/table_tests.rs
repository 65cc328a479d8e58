//! Table contract tests: every entry must match the ITU reference

use morse_core::table::lookup;
use morse_core::Symbol;
use rstest::rstest;

fn render(ascii: u8) -> String {
    lookup(ascii)
        .symbols()
        .map(|symbol| match symbol {
            Symbol::Dot => '.',
            Symbol::Dash => '-',
        })
        .collect()
}

/// Every mapped code point and its canonical pattern. This is the wire
/// contract of the packed table; any reimplementation must match it
/// entry for entry.
const REFERENCE: &[(u8, &str)] = &[
    // Control-character prosigns
    (4, "...-.-"),  // EOT -> SK
    (10, ".-.-"),   // LF -> AA
    (11, "-...-"),  // VT -> BT
    (23, ".-.-."),  // ETB -> AR
    // Punctuation
    (b'!', "-.-.--"),
    (b'"', ".-..-."),
    (b'&', ".-..."),
    (b'\'', ".----."),
    (b'(', "-.--."),
    (b')', "-.--.-"),
    (b'+', ".-.-."),
    (b',', "--..--"),
    (b'-', "-....-"),
    (b'.', ".-.-.-"),
    (b'/', "-..-."),
    (b':', "---..."),
    (b'=', "-...-"),
    (b'?', "..--.."),
    (b'@', ".--.-."),
    // Digits
    (b'0', "-----"),
    (b'1', ".----"),
    (b'2', "..---"),
    (b'3', "...--"),
    (b'4', "....-"),
    (b'5', "....."),
    (b'6', "-...."),
    (b'7', "--..."),
    (b'8', "---.."),
    (b'9', "----."),
    // Letters
    (b'A', ".-"),
    (b'B', "-..."),
    (b'C', "-.-."),
    (b'D', "-.."),
    (b'E', "."),
    (b'F', "..-."),
    (b'G', "--."),
    (b'H', "...."),
    (b'I', ".."),
    (b'J', ".---"),
    (b'K', "-.-"),
    (b'L', ".-.."),
    (b'M', "--"),
    (b'N', "-."),
    (b'O', "---"),
    (b'P', ".--."),
    (b'Q', "--.-"),
    (b'R', ".-."),
    (b'S', "..."),
    (b'T', "-"),
    (b'U', "..-"),
    (b'V', "...-"),
    (b'W', ".--"),
    (b'X', "-..-"),
    (b'Y', "-.--"),
    (b'Z', "--.."),
    // Prosign aliases in the bracket range
    (b'[', ".-.-"),    // AA
    (b'\\', ".-.-."),  // AR
    (b']', ".-..."),   // AS
    (b'^', "-...-.-"), // BK
    (b'_', "-...-"),   // BT
    (b'`', "...-.-"),  // SK
];

#[test]
fn every_mapped_entry_matches_the_reference() {
    for &(ascii, pattern) in REFERENCE {
        assert_eq!(render(ascii), pattern, "code {} ({:?})", ascii, ascii as char);
    }
}

#[test]
fn every_code_point_outside_the_reference_is_unmapped() {
    for code in 0u8..128 {
        let mapped = REFERENCE.iter().any(|&(ascii, _)| ascii == code);
        let lowercase_letter = code.is_ascii_lowercase();
        if !mapped && !lowercase_letter {
            assert!(lookup(code).is_none(), "code {code} should have no mapping");
        }
    }
}

#[rstest]
#[case(b'A', &[Symbol::Dot, Symbol::Dash])]
#[case(b'B', &[Symbol::Dash, Symbol::Dot, Symbol::Dot, Symbol::Dot])]
#[case(b'E', &[Symbol::Dot])]
#[case(b'T', &[Symbol::Dash])]
#[case(b'S', &[Symbol::Dot, Symbol::Dot, Symbol::Dot])]
#[case(b'O', &[Symbol::Dash, Symbol::Dash, Symbol::Dash])]
fn decodes_to_canonical_sequence(#[case] ascii: u8, #[case] expected: &[Symbol]) {
    assert_eq!(lookup(ascii).decode().as_slice(), expected);
}

#[rstest]
#[case(b'A', 2)]
#[case(b'B', 4)]
#[case(b'E', 1)]
#[case(b'0', 5)]
#[case(b'?', 6)]
#[case(b'^', 7)]
fn decoded_length_matches_canonical_length(#[case] ascii: u8, #[case] len: usize) {
    assert_eq!(lookup(ascii).symbols().len(), len);
}

#[test]
fn lowercase_letters_share_uppercase_entries() {
    for upper in b'A'..=b'Z' {
        assert_eq!(lookup(upper), lookup(upper + 32), "letter {}", upper as char);
    }
}
