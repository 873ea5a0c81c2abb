//! Sorted Collections - Entry Modes
//!
//! A [SortedVec](crate::SortedVec) stores either bare keys ([SetMode]) or key/value pairs ([MapMode]). The mode type
//! tells the container how to read the key and the value out of a stored entry, so every search, insert and erase
//! routine is written once against [EntryMode] and shared by both layouts.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
use core::{fmt, marker::PhantomData};

/// Describes how a stored entry decomposes into a key view and a value view.
pub trait EntryMode {
    /// The type used for ordering entries.
    type Key;
    /// The type exposed as the "value" of an entry. In set-mode this is the key itself.
    type Value;
    /// The type actually stored in the backing vector.
    type Entry;

    /// Returns the key of an entry.
    fn key(entry: &Self::Entry) -> &Self::Key;

    /// Returns the value view of an entry.
    fn value(entry: &Self::Entry) -> &Self::Value;
}

/// Capability implemented only by modes that carry a value separate from the key.
///
/// Operations that need to build an entry from a key and a value, or to mutate a value in place, are bound on this
/// trait. They are unavailable on sets.
pub trait MappedMode: EntryMode {
    /// Builds an entry from its key and value.
    fn from_parts(key: Self::Key, value: Self::Value) -> Self::Entry;

    /// Splits an entry into its key and value.
    fn into_parts(entry: Self::Entry) -> (Self::Key, Self::Value);

    /// Returns a mutable reference to the value of an entry.
    fn value_mut(entry: &mut Self::Entry) -> &mut Self::Value;

    /// Returns the key and a mutable reference to the value of an entry.
    fn split_mut(entry: &mut Self::Entry) -> (&Self::Key, &mut Self::Value);
}

/// Set-mode: the entry is the key.
pub struct SetMode<K>(PhantomData<fn() -> K>);

impl<K> EntryMode for SetMode<K> {
    type Key = K;
    type Value = K;
    type Entry = K;

    #[inline]
    fn key(entry: &K) -> &K {
        entry
    }

    #[inline]
    fn value(entry: &K) -> &K {
        entry
    }
}

/// Map-mode: the entry is a `(key, value)` tuple.
pub struct MapMode<K, V>(PhantomData<fn() -> (K, V)>);

impl<K, V> EntryMode for MapMode<K, V> {
    type Key = K;
    type Value = V;
    type Entry = (K, V);

    #[inline]
    fn key(entry: &(K, V)) -> &K {
        &entry.0
    }

    #[inline]
    fn value(entry: &(K, V)) -> &V {
        &entry.1
    }
}

impl<K, V> MappedMode for MapMode<K, V> {
    #[inline]
    fn from_parts(key: K, value: V) -> (K, V) {
        (key, value)
    }

    #[inline]
    fn into_parts(entry: (K, V)) -> (K, V) {
        entry
    }

    #[inline]
    fn value_mut(entry: &mut (K, V)) -> &mut V {
        &mut entry.1
    }

    #[inline]
    fn split_mut(entry: &mut (K, V)) -> (&K, &mut V) {
        (&entry.0, &mut entry.1)
    }
}

impl<K> fmt::Debug for SetMode<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SetMode")
    }
}

impl<K, V> fmt::Debug for MapMode<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MapMode")
    }
}
