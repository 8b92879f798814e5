//! Fixed-width binary hash-blob value types.
//!
//! Each type wraps a fixed-size byte array stored in **little-endian** order:
//! `data[0]` holds the least-significant byte of the canonical big-endian
//! hexadecimal rendering, `data[size - 1]` the most-significant. The canonical
//! string form is always `0x`-prefixed, lowercase, most-significant byte
//! first, so the last two characters of the string map to `data[0]`.
//!
//! These types hold digests, they never compute them: feed [`as_bytes`] to a
//! digest algorithm and build the value back with one of the fallible
//! constructors.
//!
//! [`as_bytes`]: struct.H256.html#method.as_bytes

pub mod error;

mod impls;
mod serde;
mod std_cmp;
mod std_convert;
mod std_default;
mod std_fmt;
mod std_hash;
mod std_str;

#[cfg(test)]
mod tests;

/// A 128-bit hash blob, 16 bytes in little-endian order.
#[derive(Clone)]
pub struct H128(pub [u8; 16]);
/// A 160-bit hash blob, 20 bytes in little-endian order.
#[derive(Clone)]
pub struct H160(pub [u8; 20]);
/// A 256-bit hash blob, 32 bytes in little-endian order.
#[derive(Clone)]
pub struct H256(pub [u8; 32]);
/// A 512-bit hash blob, 64 bytes in little-endian order.
#[derive(Clone)]
pub struct H512(pub [u8; 64]);
