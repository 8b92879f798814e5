use proptest::prelude::*;

use crate::{H128, H256};

proptest! {
    #[test]
    fn le_slice_round_trip(input in prop::array::uniform32(any::<u8>())) {
        let hash = H256::from_le_slice(&input[..]).unwrap();
        prop_assert_eq!(hash.as_bytes(), &input[..]);
    }

    #[test]
    fn be_slice_reverses(input in prop::array::uniform32(any::<u8>())) {
        let hash = H256::from_be_slice(&input[..]).unwrap();
        let mut reversed = input;
        reversed.reverse();
        prop_assert_eq!(hash.as_bytes(), &reversed[..]);
    }

    #[test]
    fn hex_round_trip(input in prop::array::uniform32(any::<u8>())) {
        let hash = H256::from_le_slice(&input[..]).unwrap();
        let rendered = hash.to_hex();
        prop_assert_eq!(rendered.len(), 2 + 32 * 2);
        prop_assert_eq!(H256::from_hex(&rendered).unwrap(), hash);
    }

    #[test]
    fn ordering_matches_integer_interpretation(a in any::<u128>(), b in any::<u128>()) {
        // A little-endian 16-byte array compared most-significant-first must
        // order exactly like the u128 it encodes.
        let hash_a = H128(a.to_le_bytes());
        let hash_b = H128(b.to_le_bytes());
        prop_assert_eq!(hash_a.cmp(&hash_b), a.cmp(&b));
        prop_assert_eq!(hash_a == hash_b, a == b);
    }

    #[test]
    fn zero_sorts_first(input in prop::array::uniform32(any::<u8>())) {
        let hash = H256::from_le_slice(&input[..]).unwrap();
        let zero = H256::default();
        if hash.is_zero() {
            prop_assert_eq!(&hash, &zero);
        } else {
            prop_assert!(zero < hash);
        }
    }
}
