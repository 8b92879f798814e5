use std::fmt;

use crate::{error::FromSliceError, H128, H160, H256, H512};

macro_rules! impl_methods {
    ($name:ident, $bytes_size:expr) => {
        impl $name {
            /// Converts `Self` to a byte slice, in internal little-endian order.
            #[inline]
            pub fn as_bytes(&self) -> &[u8] {
                &self.0[..]
            }
            /// To convert a little-endian byte slice back into `Self`.
            ///
            /// The bytes are copied verbatim: `input[0]` becomes the
            /// least-significant byte.
            pub fn from_le_slice(input: &[u8]) -> Result<Self, FromSliceError> {
                if input.len() != $bytes_size {
                    Err(FromSliceError::InvalidLength(input.len()))
                } else {
                    let mut ret = Self::default();
                    ret.0[..].copy_from_slice(input);
                    Ok(ret)
                }
            }
            /// To convert a big-endian byte slice back into `Self`.
            ///
            /// The bytes are reversed on the way in, so `input[0]` becomes the
            /// most-significant byte and storage stays little-endian.
            pub fn from_be_slice(input: &[u8]) -> Result<Self, FromSliceError> {
                let mut ret = Self::from_le_slice(input)?;
                ret.0.reverse();
                Ok(ret)
            }
            /// Returns `true` if and only if every byte is zero.
            #[inline]
            pub fn is_zero(&self) -> bool {
                self.0.iter().all(|chr| *chr == 0)
            }
            /// Writes the canonical rendering into `sink`: a `0x` prefix, then
            /// every byte as two lowercase digits, most-significant byte first.
            pub fn write_hex<W: fmt::Write>(&self, sink: &mut W) -> fmt::Result {
                sink.write_str("0x")?;
                for chr in self.0.iter().rev() {
                    write!(sink, "{:02x}", chr)?;
                }
                Ok(())
            }
            /// Returns the canonical rendering as an owned string.
            ///
            /// Allocates a single buffer of `2 * size + 2` bytes and fills it
            /// through [`write_hex`](#method.write_hex).
            pub fn to_hex(&self) -> String {
                let mut ret = String::with_capacity($bytes_size * 2 + 2);
                self.write_hex(&mut ret)
                    .expect("writing into a String cannot fail");
                ret
            }
        }
    };
}

impl_methods!(H128, 16);
impl_methods!(H160, 20);
impl_methods!(H256, 32);
impl_methods!(H512, 64);
