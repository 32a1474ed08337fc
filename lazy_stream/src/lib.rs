//! Lazy, persistent, possibly infinite streams.
//!
//! A [`Stream`] is a singly linked list whose tail is computed on demand and
//! memoized: however many streams share a node, and however many threads
//! read it, each tail is computed at most once.
//!
//! ```
//! use lazy_stream::Stream;
//!
//! let odds = Stream::iterate(1_u64, |x| x + 1).filter(|x| x % 2 == 1);
//! assert_eq!(odds.take(4).to_vec(), vec![1, 3, 5, 7]);
//! ```

pub mod traits;
pub mod error;
pub mod cell;
pub mod core;
pub mod construct;
pub mod range;
pub mod map;
pub mod filter;
pub mod take;
pub mod zip;
pub mod fold;
pub mod iter;
pub mod reverse;
pub mod split;
pub mod destructure;
pub mod display;
pub mod cmp;

#[cfg(test)]
pub mod proptest;

pub use crate::core::Stream;
pub use crate::cell::Cell;
pub use crate::error::{EmptySequenceError, Result};
pub use crate::iter::Iter;
pub use crate::traits::{Element, Shared};
