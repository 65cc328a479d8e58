//! ASCII to packed Morse lookup table

use crate::types::PackedMorse;

/// Mask restricting a byte to the 7-bit ASCII domain
pub const ASCII_MASK: u8 = 0x7F;

/// Look up the packed Morse form for an ASCII code point.
///
/// Total over the full byte range: the index is masked to 7 bits, the
/// same folding the encoder applies to its input. Code points without a
/// Morse equivalent return the all-zero sentinel.
pub fn lookup(ascii: u8) -> PackedMorse {
    PackedMorse::from_raw(ASCII_TO_MORSE[(ascii & ASCII_MASK) as usize])
}

/// Maps the first 128 ASCII code points to their packed Morse forms.
///
/// Zero marks code points with no equivalent. A handful of control
/// characters carry prosigns: EOT sends SK (end of transmission), LF
/// sends AA (new line), VT sends BT (new paragraph), ETB sends AR (end
/// of message). Lowercase letters repeat the uppercase encodings.
static ASCII_TO_MORSE: [u8; 128] = [
    0b00000000, // NUL
    0b00000000, // SOH
    0b00000000, // STX
    0b00000000, // ETX
    0b11000101, // EOT  prosign SK ...-.-
    0b00000000, // ENQ
    0b00000000, // ACK
    0b00000000, // BEL
    0b00000000, // BS
    0b00000000, // HT
    0b11110101, // LF   prosign AA .-.-
    0b00010001, // VT   prosign BT -...-
    0b00000000, // FF
    0b00000000, // CR
    0b00000000, // SO
    0b00000000, // SI
    0b00000000, // DLE
    0b00000000, // DC1
    0b00000000, // DC2
    0b00000000, // DC3
    0b00000000, // DC4
    0b00000000, // NAK
    0b00000000, // SYN
    0b11101010, // ETB  prosign AR .-.-.
    0b00000000, // CAN
    0b00000000, // EM
    0b00000000, // SUB
    0b00000000, // ESC
    0b00000000, // FS
    0b00000000, // GS
    0b00000000, // RS
    0b00000000, // US
    0b00000000, // ' '  handled by the encoder as a word gap
    0b00101011, // '!'  -.-.--
    0b11010010, // '"'  .-..-.
    0b00000000, // '#'
    0b00000000, // '$'
    0b00000000, // '%'
    0b11101000, // '&'  .-...
    0b11011110, // '\'' .----.
    0b00010110, // '('  -.--.
    0b00101101, // ')'  -.--.-
    0b00000000, // '*'
    0b11101010, // '+'  .-.-.
    0b00110011, // ','  --..--
    0b00100001, // '-'  -....-
    0b11010101, // '.'  .-.-.-
    0b00010010, // '/'  -..-.
    0b00011111, // '0'  -----
    0b11101111, // '1'  .----
    0b11100111, // '2'  ..---
    0b11100011, // '3'  ...--
    0b11100001, // '4'  ....-
    0b11100000, // '5'  .....
    0b00010000, // '6'  -....
    0b00011000, // '7'  --...
    0b00011100, // '8'  ---..
    0b00011110, // '9'  ----.
    0b00111000, // ':'  ---...
    0b00000000, // ';'
    0b00000000, // '<'
    0b00010001, // '='  -...-
    0b00000000, // '>'
    0b11001100, // '?'  ..--..
    0b11011010, // '@'  .--.-.
    0b11111101, // 'A'  .-
    0b00001000, // 'B'  -...
    0b00001010, // 'C'  -.-.
    0b00000100, // 'D'  -..
    0b11111110, // 'E'  .
    0b11110010, // 'F'  ..-.
    0b00000110, // 'G'  --.
    0b11110000, // 'H'  ....
    0b11111100, // 'I'  ..
    0b11110111, // 'J'  .---
    0b00000101, // 'K'  -.-
    0b11110100, // 'L'  .-..
    0b00000011, // 'M'  --
    0b00000010, // 'N'  -.
    0b00000111, // 'O'  ---
    0b11110110, // 'P'  .--.
    0b00001101, // 'Q'  --.-
    0b11111010, // 'R'  .-.
    0b11111000, // 'S'  ...
    0b00000001, // 'T'  -
    0b11111001, // 'U'  ..-
    0b11110001, // 'V'  ...-
    0b11111011, // 'W'  .--
    0b00001001, // 'X'  -..-
    0b00001011, // 'Y'  -.--
    0b00001100, // 'Z'  --..
    0b11110101, // '['  prosign AA .-.-
    0b11101010, // '\\' prosign AR .-.-.
    0b11101000, // ']'  prosign AS .-...
    0b01000101, // '^'  prosign BK -...-.-
    0b00010001, // '_'  prosign BT -...-
    0b11000101, // '`'  prosign SK ...-.-
    0b11111101, // 'a'  .-
    0b00001000, // 'b'  -...
    0b00001010, // 'c'  -.-.
    0b00000100, // 'd'  -..
    0b11111110, // 'e'  .
    0b11110010, // 'f'  ..-.
    0b00000110, // 'g'  --.
    0b11110000, // 'h'  ....
    0b11111100, // 'i'  ..
    0b11110111, // 'j'  .---
    0b00000101, // 'k'  -.-
    0b11110100, // 'l'  .-..
    0b00000011, // 'm'  --
    0b00000010, // 'n'  -.
    0b00000111, // 'o'  ---
    0b11110110, // 'p'  .--.
    0b00001101, // 'q'  --.-
    0b11111010, // 'r'  .-.
    0b11111000, // 's'  ...
    0b00000001, // 't'  -
    0b11111001, // 'u'  ..-
    0b11110001, // 'v'  ...-
    0b11111011, // 'w'  .--
    0b00001001, // 'x'  -..-
    0b00001011, // 'y'  -.--
    0b00001100, // 'z'  --..
    0b00000000, // '{'
    0b00000000, // '|'
    0b00000000, // '}'
    0b00000000, // '~'
    0b00000000, // DEL
];
