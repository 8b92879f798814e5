//! Provide proc-macros to construct const hash-blob values.
//!
//! Building a value through [`from_hex`] at runtime costs a parse and can
//! fail; an array literal is constant but unreadable. These macros take a
//! human-readable hexadecimal string literal and expand to the array form at
//! compile time, so a malformed literal fails the build instead of the run.
//!
//! The input must be `0x`-prefixed. Underscores may be used as visual
//! separators and leading zeros may be trimmed the way
//! [`from_trimmed_str`] accepts them.
//!
//! # Notice
//!
//! **This is an internal crate used by crate `hashblob`, do not use this
//! crate directly.** All proc-macros here are re-exported in crate
//! `hashblob`, and the expansion refers to the target type by its bare name,
//! so the type has to be in scope at the call site.
//!
//! [`from_hex`]: ../hashblob_core/struct.H256.html#method.from_hex
//! [`from_trimmed_str`]: ../hashblob_core/struct.H256.html#method.from_trimmed_str

extern crate proc_macro;

use quote::quote;
use syn::parse_macro_input;

macro_rules! impl_hash_literal {
    ($name:ident, $type:ident, $type_str:expr, $link_str:expr) => {
        #[doc = "A proc-macro used to create a const [`"]
        #[doc = $type_str]
        #[doc = "`] from a hexadecimal string literal.\n\n[`"]
        #[doc = $type_str]
        #[doc = "`]:"]
        #[doc = $link_str]
        #[proc_macro]
        pub fn $name(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
            let input = parse_macro_input!(input as syn::LitStr);
            let expanded = {
                let input = input.value().replace('_', "");
                if input.len() < 3 || &input[..2] != "0x" {
                    panic!("Input has to be a hexadecimal string with 0x-prefix.");
                };
                let payload = &input[2..];
                let value = match &payload[..1] {
                    "0" => {
                        if payload.len() > 1 {
                            hashblob_core::$type::from_hex(payload)
                        } else {
                            hashblob_core::$type::from_trimmed_str(payload)
                        }
                    }
                    _ => hashblob_core::$type::from_trimmed_str(payload),
                }
                .unwrap_or_else(|err| {
                    panic!("Failed to parse the input hexadecimal string: {}", err);
                });
                // The Debug output is shaped like a constructor expression,
                // so it parses straight back into tokens.
                let eval_str = format!("{:?}", value);
                let eval_ts: proc_macro2::TokenStream = eval_str.parse().unwrap_or_else(|_| {
                    panic!("Failed to parse the string \"{}\" to TokenStream.", eval_str);
                });
                quote!(#eval_ts)
            };
            expanded.into()
        }
    };
    ($name:ident, $type:ident) => {
        impl_hash_literal!(
            $name,
            $type,
            stringify!($type),
            concat!("../hashblob_core/struct.", stringify!($type), ".html")
        );
    };
}

impl_hash_literal!(h128, H128);
impl_hash_literal!(h160, H160);
impl_hash_literal!(h256, H256);
impl_hash_literal!(h512, H512);
