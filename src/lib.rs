//! # Ring Deque
//!
//! A growable double-ended queue built on an explicit circular buffer, with
//! Python-style signed indexing and a compact textual form.
//!
//! ## Key Features
//!
//! * **Both Ends:** `push_back`, `push_front`, `pop_back` and `pop_front` are amortized O(1).
//! * **Signed Indexing:** `at(-1)` is the last element; out-of-range reads return `None`
//!   instead of failing.
//! * **Doubling Growth:** Capacity doubles (minimum 1) when full and never shrinks.
//! * **Sized Construction:** `with_len` / `from_elem` pre-fill the deque; the signed
//!   `try_*` variants reject negative sizes with [`DequeError::InvalidSize`].
//! * **Interoperability:** [`AnyDeque`] is implemented for both [`Deque`] and
//!   `std::collections::VecDeque`.
//!
//! ## Cargo Features
//!
//! * `std` (default): implements [`AnyDeque`] for `VecDeque`.  Without it the crate
//!   is `no_std` and needs only `alloc`.
//!
//! ## Examples
//!
//! ```rust
//! use ring_deque::{Deque, DequeError};
//!
//! let mut d = Deque::from_elem(3, 123);
//! d[0] = 456;
//!
//! assert_eq!(d.at(-3), Some(&456));
//! assert_eq!(d.at(-4), None);
//! assert_eq!(d.to_string(), ">[456, 123, 123]<");
//!
//! assert_eq!(
//!     d.set(10, 0),
//!     Err(DequeError::IndexOutOfRange { index: 10, len: 3 })
//! );
//! assert_eq!(Deque::<i32>::try_with_len(-1), Err(DequeError::InvalidSize(-1)));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

// --- Module Declarations ---

pub mod deque;
pub mod error;

// --- Re-exports ---

pub use deque::{AnyDeque, Deque, IntoIter, Iter};
pub use error::DequeError;
