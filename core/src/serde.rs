use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{H128, H160, H256, H512};

macro_rules! impl_serde {
    ($name:ident, $bytes_size:expr) => {
        impl Serialize for $name {
            /// Serializes as the canonical `0x`-prefixed string, streamed
            /// through the `Display` impl without an intermediate buffer.
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                struct Visitor;
                impl<'de> de::Visitor<'de> for Visitor {
                    type Value = $name;
                    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                        write!(
                            f,
                            "a 0x-prefixed hexadecimal string with {} digits",
                            $bytes_size * 2
                        )
                    }
                    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
                    where
                        E: de::Error,
                    {
                        $name::from_hex(value).map_err(E::custom)
                    }
                }
                deserializer.deserialize_str(Visitor)
            }
        }
    };
}

impl_serde!(H128, 16);
impl_serde!(H160, 20);
impl_serde!(H256, 32);
impl_serde!(H512, 64);
