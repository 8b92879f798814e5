//! Fixed-width binary hash-blob value types with const constructors.
//!
//! Each type holds exactly its width in bytes on the stack, stored in
//! little-endian order, and renders canonically as a `0x`-prefixed lowercase
//! big-endian hexadecimal string. The types hold digests, they never compute
//! them.
//!
//! # Examples
//!
//! Parse at runtime, or build a constant at compile time with the matching
//! proc-macro (the type has to be in scope for the macro expansion):
//!
//! ```rust
//! use hashblob::{h256, H256};
//!
//! const GENESIS: H256 =
//!     h256!("0x000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f");
//!
//! let parsed =
//!     H256::from_hex("0x000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f")
//!         .unwrap();
//! assert_eq!(parsed, GENESIS);
//!
//! // Storage is little-endian: the tail of the string is byte 0.
//! assert_eq!(GENESIS.as_bytes()[0], 0x6f);
//! assert_eq!(
//!     GENESIS.to_hex(),
//!     "0x000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f"
//! );
//! ```
//!
//! Leading zeros may be trimmed in macro literals, and underscores used as
//! separators:
//!
//! ```rust
//! use hashblob::{h128, H128};
//!
//! const ONE: H128 = h128!("0x1");
//! const BEAD: H128 = h128!("0x00000000_00000000_00000000_0000bead");
//!
//! assert_eq!(ONE, H128::from_hex("0x00000000000000000000000000000001").unwrap());
//! assert!(!BEAD.is_zero());
//! assert!(ONE < BEAD);
//! ```
//!
//! Values order like the big-endian unsigned integers their canonical
//! strings denote, and the zero value sorts first:
//!
//! ```rust
//! use hashblob::{h160, H160};
//!
//! let zero = H160::default();
//! let one = h160!("0x1");
//! let top = h160!("0x8000000000000000000000000000000000000000");
//!
//! assert!(zero.is_zero());
//! assert!(zero < one && one < top);
//! ```

pub use hashblob_core::{error, H128, H160, H256, H512};
pub use hashblob_macros::{h128, h160, h256, h512};
