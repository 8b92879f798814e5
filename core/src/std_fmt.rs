use crate::{H128, H160, H256, H512};

macro_rules! impl_std_fmt {
    ($name:ident) => {
        impl ::std::fmt::Debug for $name {
            /// Prints the raw bytes in storage order, shaped like a
            /// constructor expression. The proc macros in the companion
            /// macros crate parse this output back into tokens, so the shape
            /// is load-bearing.
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                write!(f, stringify!($name))?;
                write!(f, " ( [")?;
                write!(f, " {:#04x}", self.0[0])?;
                for chr in self.0[1..].iter() {
                    write!(f, ", {:#04x}", chr)?;
                }
                write!(f, " ] )")
            }
        }
        impl ::std::fmt::LowerHex for $name {
            /// Hex digits only, most-significant byte first; `{:#x}` adds the
            /// `0x` prefix.
            #[inline]
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                if f.alternate() {
                    write!(f, "0x")?;
                }
                for chr in self.0.iter().rev() {
                    write!(f, "{:02x}", chr)?;
                }
                Ok(())
            }
        }
        impl ::std::fmt::Display for $name {
            /// The canonical rendering: always `0x`-prefixed, lowercase,
            /// most-significant byte first.
            #[inline]
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                self.write_hex(f)
            }
        }
    };
}

impl_std_fmt!(H128);
impl_std_fmt!(H160);
impl_std_fmt!(H256);
impl_std_fmt!(H512);
