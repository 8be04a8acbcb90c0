//! # littera
//!
//! ### Fixed-width letter-count multisets
//!
//! This crate provides a small, allocation-free multiset over the 26 ASCII
//! lowercase letters. It has 2 main types: [`LetterInventory`], the counted
//! multiset itself, and [`Letter`], a validated index into the alphabet.
//! Both are described in detail below.
//!
//! ---
//!
//! ## [`LetterInventory`]
//!
//! A fixed array of 26 counters, one per letter `'a'..='z'`, together with a
//! cached running total. Inventories are built from text (counting letters
//! case-insensitively and skipping everything else), mutated per slot via
//! [`set`](LetterInventory::set), and combined with the multiset-algebra
//! operations [`add`](LetterInventory::add) and
//! [`subtract`](LetterInventory::subtract).
//!
//! ### Example
//!
//! ```rust
//! use littera::LetterInventory;
//!
//! let greeting = LetterInventory::from_text("Hello, World!");
//! assert_eq!(greeting.len(), 10);
//! assert_eq!(greeting.to_string(), "[dehllloorw]");
//!
//! let abc = LetterInventory::from_text("abc");
//! let bcd = LetterInventory::from_text("bcd");
//! assert_eq!(LetterInventory::add(&abc, &bcd).to_string(), "[abbccd]");
//! assert_eq!(abc.subtract(&bcd), None);
//! ```
//!
//! ## [`Letter`]
//!
//! The [`Letter`] type is a zero-based offset from `'a'`, guaranteed by
//! construction to name one of the 26 slots of a [`LetterInventory`].
//! Validation is a raw range check on the character code: only `'a'..='z'`
//! is accepted, and uppercase input is rejected rather than folded.
//!
//! ### Example
//!
//! ```rust
//! use littera::Letter;
//!
//! # fn main() -> Result<(), littera::letter::NotALetterError> {
//! let e = Letter::try_from('e')?;
//! assert_eq!(e.index(), 4);
//! assert_eq!(e.as_char(), 'e');
//! assert!(Letter::try_from('E').is_err());
//! # Ok(())
//! # }
//! ```
//!
//! ---
//!
//! ## `no_std` Support
//!
//! These types are designed to be used in `no_std` environments, making them
//! suitable for embedded systems and other resource-constrained applications.
//!
//! ---
//!
//! ## Features
//!
//! - `std`: Enables integration with the Rust standard library. When disabled,
//!   which is the default, the crate operates in `no_std` mode.
//! - `serde`†: Enables serialization and deserialization support via Serde.
//! - `is_variant`†: Derives variant predicates on the error enum.
//! - `index`†: Allows indexing an inventory's counters by slot position.
//!
//! > † enabled by default

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;
extern crate core;

pub mod letter;
pub mod letter_inventory;

pub use letter::*;
pub use letter_inventory::*;
