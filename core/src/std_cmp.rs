use std::cmp::Ordering;

use crate::{H128, H160, H256, H512};

macro_rules! impl_std_cmp {
    ($name:ident) => {
        impl ::std::cmp::PartialEq for $name {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                self.0[..] == other.0[..]
            }
        }
        impl ::std::cmp::Eq for $name {}
        impl ::std::cmp::Ord for $name {
            /// Compares from the most-significant byte backward: storage is
            /// little-endian, so iteration starts at the last index. The
            /// result matches comparing the big-endian unsigned integers the
            /// canonical strings denote.
            #[inline]
            fn cmp(&self, other: &Self) -> Ordering {
                Iterator::cmp(self.0.iter().rev(), other.0.iter().rev())
            }
        }
        impl ::std::cmp::PartialOrd for $name {
            #[inline]
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }
    };
}

impl_std_cmp!(H128);
impl_std_cmp!(H160);
impl_std_cmp!(H256);
impl_std_cmp!(H512);
