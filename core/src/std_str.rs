use crate::{error::FromStrError, H128, H160, H256, H512};

pub(crate) const DICT_HEX_ERROR: u8 = u8::MAX;
pub(crate) static DICT_HEX_LO: [u8; 256] = {
    const ____: u8 = DICT_HEX_ERROR;
    [
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, ____, ____,
        ____, ____, ____, ____, ____, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____,
    ]
};
pub(crate) static DICT_HEX_HI: [u8; 256] = {
    const ____: u8 = DICT_HEX_ERROR;
    [
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, 0x00, 0x10, 0x20, 0x30, 0x40, 0x50, 0x60, 0x70, 0x80, 0x90, ____, ____,
        ____, ____, ____, ____, ____, 0xa0, 0xb0, 0xc0, 0xd0, 0xe0, 0xf0, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, 0xa0, 0xb0, 0xc0, 0xd0, 0xe0, 0xf0, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____,
    ]
};

macro_rules! impl_from_hex {
    ($name:ident, $bytes_size:expr) => {
        impl $name {
            /// To convert a hexadecimal string into `Self`.
            ///
            /// An optional `0x` or `0X` prefix is accepted; after stripping
            /// it, the input must hold exactly `2 * size` hex digits, upper
            /// or lower case. The string is read as big-endian (the
            /// conventional hash display order): its tail fills storage
            /// index 0 upward, so storage ends up little-endian.
            pub fn from_hex(input: &str) -> Result<Self, FromStrError> {
                let bytes = input.as_bytes();
                let offset = if bytes.len() >= 2 && bytes[0] == b'0' && (bytes[1] | 0x20) == b'x'
                {
                    2
                } else {
                    0
                };
                let payload = &bytes[offset..];
                if payload.len() != $bytes_size * 2 {
                    return Err(FromStrError::InvalidLength(payload.len()));
                }
                let mut ret = Self::default();
                for (idx, chr) in payload.iter().copied().enumerate() {
                    let val = if idx % 2 == 0 {
                        DICT_HEX_HI[usize::from(chr)]
                    } else {
                        DICT_HEX_LO[usize::from(chr)]
                    };
                    if val == DICT_HEX_ERROR {
                        return Err(FromStrError::InvalidCharacter {
                            chr,
                            idx: idx + offset,
                        });
                    }
                    ret.0[$bytes_size - 1 - idx / 2] |= val;
                }
                Ok(ret)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = FromStrError;
            #[inline]
            fn from_str(input: &str) -> Result<Self, Self::Err> {
                Self::from_hex(input)
            }
        }
    };
}

macro_rules! impl_from_trimmed_str {
    ($name:ident, $bytes_size:expr, $use_stmt:expr) => {
        impl $name {
            /// To convert a trimmed hexadecimal string into `Self`.
            ///
            /// Leading zeros of the big-endian rendering are omitted: `""`
            /// and `"0"` both denote the zero value, and any other input must
            /// not start with `0`.
            ///
            /// ```rust
            #[doc = $use_stmt]
            ///
            /// let zero = Hash::from_trimmed_str("").unwrap();
            /// assert!(zero.is_zero());
            /// assert_eq!(zero, Hash::from_trimmed_str("0").unwrap());
            ///
            /// let one = Hash::from_trimmed_str("1").unwrap();
            /// assert_eq!(one.as_bytes()[0], 1);
            ///
            /// assert!(Hash::from_trimmed_str("00").is_err());
            /// assert!(Hash::from_trimmed_str("01").is_err());
            /// ```
            pub fn from_trimmed_str(input: &str) -> Result<Self, FromStrError> {
                let bytes = input.as_bytes();
                let len = bytes.len();
                if len > $bytes_size * 2 {
                    Err(FromStrError::InvalidLength(len))
                } else if len == 0 {
                    Ok(Self::default())
                } else if bytes[0] == b'0' {
                    if len == 1 {
                        Ok(Self::default())
                    } else {
                        Err(FromStrError::InvalidCharacter { chr: b'0', idx: 0 })
                    }
                } else {
                    let mut ret = Self::default();
                    // Walk the digits least-significant-first, so storage
                    // fills from index 0 without knowing the final length.
                    for (pos, chr) in bytes.iter().copied().rev().enumerate() {
                        let val = if pos % 2 == 0 {
                            DICT_HEX_LO[usize::from(chr)]
                        } else {
                            DICT_HEX_HI[usize::from(chr)]
                        };
                        if val == DICT_HEX_ERROR {
                            return Err(FromStrError::InvalidCharacter {
                                chr,
                                idx: len - 1 - pos,
                            });
                        }
                        ret.0[pos / 2] |= val;
                    }
                    Ok(ret)
                }
            }
        }
    };
    ($name:ident, $bytes_size:expr) => {
        impl_from_trimmed_str!(
            $name,
            $bytes_size,
            concat!("use hashblob_core::", stringify!($name), " as Hash;")
        );
    };
}

impl_from_hex!(H128, 16);
impl_from_hex!(H160, 20);
impl_from_hex!(H256, 32);
impl_from_hex!(H512, 64);

impl_from_trimmed_str!(H128, 16);
impl_from_trimmed_str!(H160, 20);
impl_from_trimmed_str!(H256, 32);
impl_from_trimmed_str!(H512, 64);
