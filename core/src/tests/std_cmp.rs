use crate::{H128, H160, H256, H512};
use std::str::FromStr;

macro_rules! add_tests {
    ($test_name:ident, $type:ident, $bytes_size:literal) => {
        #[test]
        fn $test_name() {
            let zeros = $type([0; $bytes_size]);
            let zeros_str = format!("{:0>width$}", 0, width = $bytes_size * 2);
            let only_lowest_bit_is_one_str =
                format!("{:0>width$}{}", 0, 0b0001, width = $bytes_size * 2 - 1);
            let only_highest_bit_is_one_str =
                format!("{}{:0>width$}", 0b1000, 0, width = $bytes_size * 2 - 1);

            let from_zeros = $type::from_str(&zeros_str).unwrap();
            let only_lowest_bit_is_one = $type::from_str(&only_lowest_bit_is_one_str).unwrap();
            let only_highest_bit_is_one = $type::from_str(&only_highest_bit_is_one_str).unwrap();

            // The lowest bit of the big-endian rendering lands at storage
            // index 0, the highest at the last index.
            assert_eq!(only_lowest_bit_is_one.as_bytes()[0], 0x01);
            assert_eq!(
                only_highest_bit_is_one.as_bytes()[$bytes_size - 1],
                0x80
            );

            assert!(zeros == from_zeros);
            assert!(zeros >= from_zeros);
            assert!(zeros <= from_zeros);
            assert!(zeros.is_zero() && from_zeros.is_zero());

            assert!(from_zeros < only_lowest_bit_is_one);
            assert!(from_zeros <= only_lowest_bit_is_one);
            assert!(from_zeros != only_lowest_bit_is_one);
            assert!(only_lowest_bit_is_one > from_zeros);
            assert!(only_lowest_bit_is_one >= from_zeros);
            assert!(!only_lowest_bit_is_one.is_zero());

            assert!(from_zeros < only_highest_bit_is_one);
            assert!(from_zeros <= only_highest_bit_is_one);
            assert!(from_zeros != only_highest_bit_is_one);
            assert!(only_highest_bit_is_one > from_zeros);
            assert!(only_highest_bit_is_one >= from_zeros);
            assert!(!only_highest_bit_is_one.is_zero());

            assert!(only_lowest_bit_is_one < only_highest_bit_is_one);
            assert!(only_lowest_bit_is_one <= only_highest_bit_is_one);
            assert!(only_lowest_bit_is_one != only_highest_bit_is_one);
            assert!(only_highest_bit_is_one > only_lowest_bit_is_one);
            assert!(only_highest_bit_is_one >= only_lowest_bit_is_one);
        }
    };
}

add_tests!(test_h128, H128, 16);
add_tests!(test_h160, H160, 20);
add_tests!(test_h256, H256, 32);
add_tests!(test_h512, H512, 64);
