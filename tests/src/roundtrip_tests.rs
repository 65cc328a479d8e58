//! Pack/unpack round-trip properties

use morse_core::table::lookup;
use morse_core::{PackedMorse, Symbol};
use proptest::prelude::*;

fn symbol() -> impl Strategy<Value = Symbol> {
    prop_oneof![Just(Symbol::Dot), Just(Symbol::Dash)]
}

proptest! {
    #[test]
    fn pack_then_decode_reproduces_any_sequence(
        seq in proptest::collection::vec(symbol(), 1..=7)
    ) {
        let packed = PackedMorse::pack(&seq).expect("1..=7 symbols always pack");
        let decoded = packed.decode();
        prop_assert_eq!(decoded.as_slice(), seq.as_slice());
    }

    #[test]
    fn packed_padding_complements_the_first_symbol(
        seq in proptest::collection::vec(symbol(), 1..=7)
    ) {
        let packed = PackedMorse::pack(&seq).expect("1..=7 symbols always pack");
        // Bit 7 is always padding, so it must oppose the first symbol.
        let bit7 = packed.raw() & 0x80 != 0;
        prop_assert_eq!(Symbol::from_bit(bit7), seq[0].opposite());
    }
}

#[test]
fn decode_then_pack_reproduces_every_table_entry() {
    for code in 0u8..128 {
        let packed = lookup(code);
        if packed.is_none() {
            continue;
        }
        let seq = packed.decode();
        assert_eq!(
            PackedMorse::pack(&seq),
            Some(packed),
            "code {} ({:?})",
            code,
            code as char
        );
    }
}
