//! A word table for spell checking.
//!
//! [`Table`] is a set of words backed by an open-addressing hash table. Collisions are resolved
//! with quadratic probing, removal leaves a tombstone behind, and the table rebuilds itself at
//! roughly double the size once half of its slots have been used. The table can also suggest
//! corrections for a word it doesn't contain: every word in the table which is one inserted,
//! deleted or swapped character away from the query.
//!
//! ```
//! use probebook::Table;
//!
//! let mut table = Table::new();
//! table.insert("cat");
//! table.insert("bat");
//! assert!(table.contains("cat"));
//! assert!(!table.contains("cta"));
//!
//! # #[cfg(feature = "default-hasher")]
//! # {
//! let mut suggestions = Vec::new();
//! table.suggest("cta", &mut suggestions);
//! assert_eq!(suggestions, ["cat"]);
//! # }
//! ```
//!
//! Reading word lists, splitting prose into words and printing results are left to the caller.
//! See the `spellcheck` demo for one way to do that.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
pub mod hash;
pub mod prime;
mod suggester;
mod table;

pub use error::TableError;
pub use suggester::ALPHABET;
pub use table::{Iter, Table, DEFAULT_CAPACITY};

/// Default hasher used to de-duplicate suggestions.
///
/// This has no bearing on where words are stored in a [`Table`]: slot positions always come
/// from [`hash::hash`]. It is only used for the scratch set which remembers which suggestions
/// have already been collected.
#[cfg(feature = "default-hasher")]
pub type DefaultHashBuilder = ahash::RandomState;
