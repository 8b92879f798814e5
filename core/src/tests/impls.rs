use crate::{error::FromSliceError, H128, H160, H256, H512};

macro_rules! add_tests {
    ($test_name:ident, $type:ident, $bytes_size:literal) => {
        #[test]
        fn $test_name() {
            let mut input = [0u8; $bytes_size];
            for (idx, byte) in input.iter_mut().enumerate() {
                *byte = idx as u8 + 1;
            }

            {
                let hash = $type::from_le_slice(&input[..]).unwrap();
                assert_eq!(hash.as_bytes(), &input[..]);
                assert!(!hash.is_zero());
            }
            {
                let hash = $type::from_be_slice(&input[..]).unwrap();
                let mut reversed = input;
                reversed.reverse();
                assert_eq!(hash.as_bytes(), &reversed[..]);
            }
            {
                let le = $type::from_le_slice(&input[..]).unwrap();
                let be = $type::from_be_slice(&input[..]).unwrap();
                assert_eq!(le.to_hex(), format!("{}", le));
                assert_ne!(le, be);
            }

            // One byte short and one byte long are both rejected, never
            // truncated or padded.
            for bad_len in [$bytes_size - 1, $bytes_size + 1] {
                let long_input = vec![1u8; bad_len];
                let result = $type::from_le_slice(&long_input);
                assert_eq!(
                    result.unwrap_err(),
                    FromSliceError::InvalidLength(bad_len)
                );
                let result = $type::from_be_slice(&long_input);
                assert_eq!(
                    result.unwrap_err(),
                    FromSliceError::InvalidLength(bad_len)
                );
            }
        }
    };
}

add_tests!(test_h128, H128, 16);
add_tests!(test_h160, H160, 20);
add_tests!(test_h256, H256, 32);
add_tests!(test_h512, H512, 64);
