//! Sorted Collections - Map-only Operations
//!
//! Operations that build an entry from a separate key and value, or that mutate a value in place. They are bound on
//! [MappedMode], so they do not exist for a [SortedSet](crate::SortedSet).
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
use crate::{Compare, Error, MappedMode, Result, SortedVec};

impl<M, C> SortedVec<M, C>
where
    M: MappedMode,
    C: Compare<M::Key>,
{
    /// Inserts `key` with the value returned by `make`, unless the key already exists.
    ///
    /// `make` is only called when the entry is actually inserted. Returns the position of the entry holding the key,
    /// and whether it was inserted.
    ///
    /// # Time Complexity
    ///
    /// O(log n) to search, O(n) to shift the following entries.
    ///
    pub fn try_emplace<F>(&mut self, key: M::Key, make: F) -> (usize, bool)
    where
        F: FnOnce() -> M::Value,
    {
        let pos = self.lower_bound_idx(&key);
        if self.is_match(pos, &key) {
            return (pos, false);
        }
        self.entries.insert(pos, M::from_parts(key, make()));
        (pos, true)
    }

    /// Assigns `value` to `key`, inserting a new entry if the key is absent.
    ///
    /// An existing entry is updated in place; no entry moves. Returns the position of the entry and `true` if it was
    /// newly inserted, `false` if an existing value was overwritten.
    pub fn insert_or_assign(&mut self, key: M::Key, value: M::Value) -> (usize, bool) {
        let pos = self.lower_bound_idx(&key);
        if self.is_match(pos, &key) {
            *M::value_mut(&mut self.entries[pos]) = value;
            return (pos, false);
        }
        self.entries.insert(pos, M::from_parts(key, value));
        (pos, true)
    }

    /// Returns a mutable reference to the value for `key`, inserting the value returned by `make` first if the key
    /// is absent.
    pub fn get_or_insert_with<F>(&mut self, key: M::Key, make: F) -> &mut M::Value
    where
        F: FnOnce() -> M::Value,
    {
        let (pos, _) = self.try_emplace(key, make);
        M::value_mut(&mut self.entries[pos])
    }

    /// Returns a mutable reference to the value for `key`, inserting a default value first if the key is absent.
    pub fn get_or_insert_default(&mut self, key: M::Key) -> &mut M::Value
    where
        M::Value: Default,
    {
        self.get_or_insert_with(key, Default::default)
    }

    /// Returns a mutable reference to the value for `key`.
    pub fn get_mut(&mut self, key: &M::Key) -> Option<&mut M::Value> {
        let pos = self.find(key)?;
        Some(M::value_mut(&mut self.entries[pos]))
    }

    /// Returns a mutable reference to the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [KeyNotFound](Error::KeyNotFound) if no entry has that key.
    ///
    pub fn at_mut(&mut self, key: &M::Key) -> Result<&mut M::Value> {
        self.get_mut(key).ok_or(Error::KeyNotFound)
    }

    /// Removes the entry for `key` and returns its value.
    pub fn take(&mut self, key: &M::Key) -> Option<M::Value> {
        self.remove(key).map(|entry| M::into_parts(entry).1)
    }

    /// Returns an iterator over the values, in key order, that allows modifying each value.
    pub fn values_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut M::Value> + ExactSizeIterator + '_ {
        self.entries.iter_mut().map(M::value_mut)
    }

    /// Returns an iterator over the entries, in key order, with mutable access to the values.
    pub fn iter_mut(&mut self) -> impl DoubleEndedIterator<Item = (&M::Key, &mut M::Value)> + ExactSizeIterator + '_ {
        self.entries.iter_mut().map(M::split_mut)
    }
}
