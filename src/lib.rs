//! A doubly linked sequence with a cursor that can run either way.
//! *reverse it and `next` walks the other direction.*
//!
//! `O(1)` pretty much everything (at the cursor).
//!
//! ## Example
//!
//! ```rust
//! use reviter::{RevIter, Direction};
//!
//! let mut it = RevIter::new();
//!
//! it.add(5).unwrap();
//! it.add(3).unwrap();
//! it.reset();
//!
//! assert_eq!(it.next(), Some(&3));
//! assert_eq!(it.next(), Some(&5));
//! assert_eq!(it.next(), None);
//!
//! it.reverse();
//! assert_eq!(it.direction(), Direction::Backward);
//! assert_eq!(it.next(), Some(&5));
//!
//! it.set(50).unwrap();
//! assert_eq!(format!("{:?}", it), "[50, 3]");
//!
//! let mut it = RevIter::from(vec![1, 2, 3, 4, 5]);
//! let visited = it.advance(2).unwrap();
//! assert_eq!(format!("{:?}", visited), "[1, 2]");
//! assert_eq!(it.distance_from_start(), 2);
//!
//! let odd = it.find(|n| n % 2 == 1).unwrap();
//! assert_eq!(format!("{:?}", odd), "[3, 5]");
//! assert_eq!(it.peek_next(), Some(&3));
//! ```

#![allow(forbidden_lint_groups)]
#![forbid(clippy::all)]
#![allow(clippy::should_implement_trait)]

mod arena;
mod cursor;
mod direction;
mod error;
mod iter;
#[cfg(feature = "serde")]
mod serde_impl;

pub use direction::Direction;
pub use error::Error;
pub use iter::{RevIter, Iter};
