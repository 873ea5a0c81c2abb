//! A library of flat, sorted associative containers. Entries live in one contiguous vector that is kept sorted by key
//! at all times, with no two entries sharing a key. Lookups are a binary search over that vector, iteration is a
//! plain slice walk, and inserts and erases shift the entries that follow the mutation point.
//!
//! The same [SortedVec] implementation backs both layouts:
//!
//! - [SortedSet]: each entry is a bare key.
//! - [SortedMap]: each entry is a `(key, value)` tuple. Keys are never handed out mutably; values can be updated in
//!   place.
//!
//! The layout is selected by an [EntryMode] type parameter. Operations that only make sense for maps, such as
//! [try_emplace](SortedVec::try_emplace) or [insert_or_assign](SortedVec::insert_or_assign), require [MappedMode] and
//! are therefore not available on sets.
//!
//! Keys are ordered by a [Compare] implementation supplied at construction. [Natural] (the keys' [Ord]) is the
//! default; [Descending] and any `Fn(&K, &K) -> bool` closure can be used as well.
//!
//! The crate is `no_std` and requires `alloc` for the backing vector.
//!
//! ## Benchmarks
//!
//! The `benches` directory compares the flat containers against `BTreeSet`/`BTreeMap` with 4096 entries of 32bit,
//! 128bit, and 384bit keys:
//!
//! - Insertion: Time to completely fill the container with random numbers.
//! - Search: Time it takes to search for every element in the container once.
//! - Delete: Time it takes to delete every element in the container.
//!
//! ## Examples
//!
//! ```rust
//! use sorted_collections::{SortedMap, SortedSet};
//!
//! let mut set = SortedSet::new();
//! for num in [5, 1, 3] {
//!     set.insert(num);
//! }
//! assert_eq!(set.as_slice(), &[1, 3, 5]);
//! assert_eq!(set.erase(&3), 1);
//! assert_eq!(set.find(&3), None);
//!
//! let mut map = SortedMap::new();
//! assert_eq!(map.try_emplace(2, || "a"), (0, true));
//! assert_eq!(map.try_emplace(2, || "b"), (0, false));
//! assert_eq!(map.insert_or_assign(2, "b"), (0, false));
//! assert_eq!(map.at(&2), Ok(&"b"));
//! ```
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod compare;
mod entry;
mod mapped;
mod sorted_vec;

pub use compare::{Compare, Descending, Natural};
pub use entry::{EntryMode, MapMode, MappedMode, SetMode};
pub use sorted_vec::{SortedMap, SortedSet, SortedVec};

/// Public result type for the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Public error types for the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// No entry has the requested key.
    KeyNotFound,
    /// An entry with the key already exists.
    AlreadyExists,
    /// The entries need to be sorted before adding them to the container.
    NotSorted,
    /// The position or range lies outside the stored entries.
    OutOfBounds,
    /// The backing storage could not grow to hold more entries.
    OutOfSpace,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::KeyNotFound => write!(f, "key not found"),
            Error::AlreadyExists => write!(f, "key already exists"),
            Error::NotSorted => write!(f, "entries are not sorted"),
            Error::OutOfBounds => write!(f, "position out of bounds"),
            Error::OutOfSpace => write!(f, "out of space"),
        }
    }
}

impl core::error::Error for Error {}
