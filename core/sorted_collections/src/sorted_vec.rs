//! Sorted Collections - Sorted Vector
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
use alloc::vec::{self, Vec};
use core::{
    cmp::Ordering,
    fmt,
    ops::{Bound, Deref, Range, RangeBounds},
    slice,
};

use crate::{Compare, EntryMode, Error, MapMode, Natural, Result, SetMode};

/// A vector whose entries are always sorted by key, with no two entries sharing a key.
///
/// Lookups are a binary search over contiguous memory. Inserting or erasing shifts every entry after the mutation
/// point, so mutations are O(n). Positions returned by the search functions are plain indices into the sorted entries
/// and are invalidated by any mutation.
///
/// The entry layout is chosen by the mode parameter; see [SortedSet] and [SortedMap].
pub struct SortedVec<M, C = Natural>
where
    M: EntryMode,
{
    pub(crate) entries: Vec<M::Entry>,
    pub(crate) comp: C,
}

/// A sorted vector of unique keys.
pub type SortedSet<K, C = Natural> = SortedVec<SetMode<K>, C>;

/// A sorted vector of unique keys, each mapped to a value.
pub type SortedMap<K, V, C = Natural> = SortedVec<MapMode<K, V>, C>;

impl<M> SortedVec<M, Natural>
where
    M: EntryMode,
{
    /// Creates an empty container ordered by the keys' [Ord] implementation. Does not allocate.
    pub const fn new() -> Self {
        SortedVec { entries: Vec::new(), comp: Natural }
    }

    /// Creates an empty container ordered by [Ord] that can hold `capacity` entries without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        SortedVec { entries: Vec::with_capacity(capacity), comp: Natural }
    }
}

impl<M, C> SortedVec<M, C>
where
    M: EntryMode,
    C: Compare<M::Key>,
{
    /// Creates an empty container that orders keys with `comp`.
    pub fn with_comparator(comp: C) -> Self {
        SortedVec { entries: Vec::new(), comp }
    }

    /// Creates an empty container that orders keys with `comp` and has room for `capacity` entries.
    pub fn with_capacity_and_comparator(capacity: usize, comp: C) -> Self {
        SortedVec { entries: Vec::with_capacity(capacity), comp }
    }

    /// Builds a container from entries in any order.
    ///
    /// The entries are stably sorted, and when several entries share a key only the first one is kept, which matches
    /// inserting them one at a time.
    ///
    /// # Time Complexity
    ///
    /// O(n log n).
    ///
    pub fn from_unsorted(mut entries: Vec<M::Entry>, comp: C) -> Self {
        entries.sort_by(|a, b| ordering(&comp, M::key(a), M::key(b)));
        entries.dedup_by(|later, earlier| !comp.less(M::key(earlier), M::key(later)));
        SortedVec { entries, comp }
    }

    /// Returns the key comparator.
    pub fn key_comp(&self) -> &C {
        &self.comp
    }

    /// Returns a predicate that orders whole entries by their keys.
    pub fn value_comp(&self) -> impl Fn(&M::Entry, &M::Entry) -> bool + '_ {
        move |a, b| self.comp.less(M::key(a), M::key(b))
    }

    /// Returns the key view of an entry.
    pub fn key_of(entry: &M::Entry) -> &M::Key {
        M::key(entry)
    }

    /// Returns the value view of an entry. In set-mode this is the key.
    pub fn value_of(entry: &M::Entry) -> &M::Value {
        M::value(entry)
    }

    /// Returns the number of entries the container can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Reserves room for at least `additional` more entries.
    pub fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional);
    }

    /// Reserves room for at least `additional` more entries, reporting allocation failure instead of aborting.
    ///
    /// # Errors
    ///
    /// Returns [OutOfSpace](Error::OutOfSpace) if the allocation fails. The container is left unchanged.
    ///
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        self.entries.try_reserve(additional).map_err(|_| {
            log::warn!("Failed to reserve room for {} more entries (len = {}).", additional, self.entries.len());
            Error::OutOfSpace
        })
    }

    /// Shrinks the backing storage as close to the current length as possible.
    pub fn shrink_to_fit(&mut self) {
        self.entries.shrink_to_fit();
    }

    /// Returns the sorted entries as a slice.
    pub fn as_slice(&self) -> &[M::Entry] {
        &self.entries
    }

    /// Consumes the container, returning the sorted entries.
    pub fn into_vec(self) -> Vec<M::Entry> {
        self.entries
    }

    /// Returns the position of the first entry whose key is not ordered before `key`.
    ///
    /// Stops early on an exact match. Since keys are unique, that match is the only candidate position.
    pub(crate) fn lower_bound_idx(&self, key: &M::Key) -> usize {
        let (mut left, mut right) = (0, self.entries.len());
        while left < right {
            let mid = left + (right - left) / 2;
            let probe = M::key(&self.entries[mid]);
            if self.comp.less(key, probe) {
                right = mid;
            } else if self.comp.less(probe, key) {
                left = mid + 1;
            } else {
                return mid;
            }
        }
        left
    }

    /// Returns the position of the first entry whose key is ordered after `key`.
    pub(crate) fn upper_bound_idx(&self, key: &M::Key) -> usize {
        let (mut left, mut right) = (0, self.entries.len());
        while left < right {
            let mid = left + (right - left) / 2;
            if self.comp.less(key, M::key(&self.entries[mid])) {
                right = mid;
            } else {
                left = mid + 1;
            }
        }
        left
    }

    /// Whether the entry at a lower bound position holds `key`.
    #[inline]
    pub(crate) fn is_match(&self, pos: usize, key: &M::Key) -> bool {
        pos < self.entries.len() && !self.comp.less(key, M::key(&self.entries[pos]))
    }

    /// Returns the position of the first entry whose key is not less than `key`, or `len()` if there is none.
    ///
    /// # Time Complexity
    ///
    /// O(log n).
    ///
    pub fn lower_bound(&self, key: &M::Key) -> usize {
        self.lower_bound_idx(key)
    }

    /// Returns the position of the first entry whose key is greater than `key`, or `len()` if there is none.
    ///
    /// # Time Complexity
    ///
    /// O(log n).
    ///
    pub fn upper_bound(&self, key: &M::Key) -> usize {
        self.upper_bound_idx(key)
    }

    /// Returns `lower_bound(key)..upper_bound(key)`. The range is empty if `key` is absent and holds exactly one
    /// position otherwise.
    pub fn equal_range(&self, key: &M::Key) -> Range<usize> {
        self.lower_bound_idx(key)..self.upper_bound_idx(key)
    }

    /// Returns the position of the entry with the given key.
    ///
    /// Returns `None` if no entry has that key.
    ///
    /// # Time Complexity
    ///
    /// O(log n).
    ///
    pub fn find(&self, key: &M::Key) -> Option<usize> {
        let pos = self.lower_bound_idx(key);
        self.is_match(pos, key).then_some(pos)
    }

    /// Returns `true` if an entry with the given key exists.
    pub fn contains(&self, key: &M::Key) -> bool {
        self.is_match(self.lower_bound_idx(key), key)
    }

    /// Returns the number of entries with the given key, which is always 0 or 1.
    pub fn count(&self, key: &M::Key) -> usize {
        usize::from(self.contains(key))
    }

    /// Returns the entry with the given key.
    pub fn get_entry(&self, key: &M::Key) -> Option<&M::Entry> {
        self.find(key).map(|pos| &self.entries[pos])
    }

    /// Returns the value view of the entry with the given key.
    pub fn get(&self, key: &M::Key) -> Option<&M::Value> {
        self.get_entry(key).map(M::value)
    }

    /// Returns the value view of the entry with the given key.
    ///
    /// # Errors
    ///
    /// Returns [KeyNotFound](Error::KeyNotFound) if no entry has that key.
    ///
    pub fn at(&self, key: &M::Key) -> Result<&M::Value> {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// Returns the entries whose keys fall inside `range`.
    ///
    /// A range whose start is ordered after its end yields an empty slice.
    pub fn range<R>(&self, range: R) -> &[M::Entry]
    where
        R: RangeBounds<M::Key>,
    {
        let start = match range.start_bound() {
            Bound::Included(key) => self.lower_bound_idx(key),
            Bound::Excluded(key) => self.upper_bound_idx(key),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(key) => self.upper_bound_idx(key),
            Bound::Excluded(key) => self.lower_bound_idx(key),
            Bound::Unbounded => self.entries.len(),
        };
        if start >= end {
            return &[];
        }
        &self.entries[start..end]
    }

    /// Returns an iterator over the keys, in order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &M::Key> + ExactSizeIterator + '_ {
        self.entries.iter().map(M::key)
    }

    /// Returns an iterator over the value views, in key order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &M::Value> + ExactSizeIterator + '_ {
        self.entries.iter().map(M::value)
    }

    /// Inserts an entry at its sorted position.
    ///
    /// Returns the position of the entry holding the key, and whether the entry was inserted. If the key already
    /// exists nothing is changed and the new entry is dropped.
    ///
    /// # Time Complexity
    ///
    /// O(log n) to search, O(n) to shift the following entries.
    ///
    pub fn insert(&mut self, entry: M::Entry) -> (usize, bool) {
        let pos = self.lower_bound_idx(M::key(&entry));
        if self.is_match(pos, M::key(&entry)) {
            return (pos, false);
        }
        self.entries.insert(pos, entry);
        (pos, true)
    }

    /// Builds an entry from anything convertible into one, then inserts it as [insert](Self::insert) does.
    pub fn emplace<A>(&mut self, arg: A) -> (usize, bool)
    where
        A: Into<M::Entry>,
    {
        self.insert(arg.into())
    }

    /// Inserts an entry, reporting allocation failure instead of aborting.
    ///
    /// # Errors
    ///
    /// Returns [OutOfSpace](Error::OutOfSpace) if the backing storage cannot grow. The container is left unchanged.
    ///
    pub fn try_insert(&mut self, entry: M::Entry) -> Result<(usize, bool)> {
        let pos = self.lower_bound_idx(M::key(&entry));
        if self.is_match(pos, M::key(&entry)) {
            return Ok((pos, false));
        }
        self.try_reserve(1)?;
        self.entries.insert(pos, entry);
        Ok((pos, true))
    }

    /// Inserts every item of `iter`, in whatever order it arrives.
    ///
    /// Room for the iterator's lower size hint is reserved up front. Items whose key is already present, including
    /// keys repeated within `iter`, are dropped.
    pub fn insert_many<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = M::Entry>,
    {
        let iter = iter.into_iter();
        let (additional, _) = iter.size_hint();
        if additional > 0 {
            log::trace!("Reserving room for {} entries on top of {}.", additional, self.entries.len());
            self.entries.reserve(additional);
        }
        for item in iter {
            self.insert(item);
        }
    }

    /// Merges a run of entries that is already sorted into the container in one shift.
    ///
    /// The run must be strictly ascending and must fit entirely between two neighbouring entries of the container.
    /// Returns the position of the first merged entry.
    ///
    /// # Errors
    ///
    /// Returns [NotSorted](Error::NotSorted) if the run is out of order or would interleave with existing entries.
    ///
    /// Returns [AlreadyExists](Error::AlreadyExists) if the run repeats a key or holds a key already present.
    ///
    /// Returns [OutOfSpace](Error::OutOfSpace) if the backing storage cannot grow.
    ///
    /// The container is unchanged on error.
    pub fn insert_sorted_run(&mut self, run: &[M::Entry]) -> Result<usize>
    where
        M::Entry: Clone,
    {
        let (Some(first), Some(last)) = (run.first(), run.last()) else {
            return Ok(0);
        };

        if run.windows(2).any(|pair| self.comp.less(M::key(&pair[1]), M::key(&pair[0]))) {
            return Err(Error::NotSorted);
        }
        if run.windows(2).any(|pair| !self.comp.less(M::key(&pair[0]), M::key(&pair[1]))) {
            return Err(Error::AlreadyExists);
        }

        let idx = self.lower_bound_idx(M::key(first));
        if self.is_match(idx, M::key(first)) {
            log::debug!("Rejected sorted run of {} entries: its first key is already present.", run.len());
            return Err(Error::AlreadyExists);
        }

        if let Some(next) = self.entries.get(idx) {
            let (last, next) = (M::key(last), M::key(next));
            if self.comp.less(next, last) {
                log::debug!("Rejected sorted run of {} entries: it overlaps entry {}.", run.len(), idx);
                return Err(Error::NotSorted);
            }
            if !self.comp.less(last, next) {
                log::debug!("Rejected sorted run of {} entries: its last key is already present.", run.len());
                return Err(Error::AlreadyExists);
            }
        }

        self.try_reserve(run.len())?;
        // Any prefix of the run fits the gap too, so a panicking clone cannot leave the entries unsorted.
        self.entries.splice(idx..idx, run.iter().cloned());
        Ok(idx)
    }

    /// Removes and returns the entry at `pos`. The entry that followed it, if any, now sits at `pos`.
    ///
    /// Returns `None` if `pos` is out of bounds.
    pub fn remove_at(&mut self, pos: usize) -> Option<M::Entry> {
        (pos < self.entries.len()).then(|| self.entries.remove(pos))
    }

    /// Removes the entries at the given positions and returns the position that now holds the entry which followed
    /// the removed range.
    ///
    /// # Errors
    ///
    /// Returns [OutOfBounds](Error::OutOfBounds) if the range is inverted or extends past the end. Nothing is removed.
    ///
    pub fn erase_range<R>(&mut self, range: R) -> Result<usize>
    where
        R: RangeBounds<usize>,
    {
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.checked_add(1).ok_or(Error::OutOfBounds)?,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => end.checked_add(1).ok_or(Error::OutOfBounds)?,
            Bound::Excluded(&end) => end,
            Bound::Unbounded => self.entries.len(),
        };
        if start > end || end > self.entries.len() {
            return Err(Error::OutOfBounds);
        }
        self.entries.drain(start..end);
        Ok(start)
    }

    /// Removes the entry with the given key, returning how many entries were removed (0 or 1).
    pub fn erase(&mut self, key: &M::Key) -> usize {
        usize::from(self.remove(key).is_some())
    }

    /// Removes and returns the entry with the given key.
    pub fn remove(&mut self, key: &M::Key) -> Option<M::Entry> {
        let pos = self.find(key)?;
        Some(self.entries.remove(pos))
    }

    /// Keeps only the entries for which `keep` returns `true`. Order is preserved.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&M::Entry) -> bool,
    {
        self.entries.retain(keep);
    }

    /// Removes every entry. The capacity is kept.
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            log::trace!("Clearing {} entries.", self.entries.len());
        }
        self.entries.clear();
    }

    /// Replaces the contents with the items of `iter`.
    pub fn assign<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = M::Entry>,
    {
        self.clear();
        self.insert_many(iter);
    }

    /// Exchanges the entries and comparators of two containers without moving any entry.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }
}

fn ordering<K, C>(comp: &C, a: &K, b: &K) -> Ordering
where
    C: Compare<K>,
{
    if comp.less(a, b) {
        Ordering::Less
    } else if comp.less(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

impl<M, C> Deref for SortedVec<M, C>
where
    M: EntryMode,
{
    type Target = [M::Entry];

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

impl<M, C> AsRef<[M::Entry]> for SortedVec<M, C>
where
    M: EntryMode,
{
    fn as_ref(&self) -> &[M::Entry] {
        &self.entries
    }
}

impl<M, C> Default for SortedVec<M, C>
where
    M: EntryMode,
    C: Default,
{
    fn default() -> Self {
        SortedVec { entries: Vec::new(), comp: C::default() }
    }
}

impl<M, C> Clone for SortedVec<M, C>
where
    M: EntryMode,
    M::Entry: Clone,
    C: Clone,
{
    fn clone(&self) -> Self {
        SortedVec { entries: self.entries.clone(), comp: self.comp.clone() }
    }

    /// Reuses the existing storage when both containers hold the same number of entries.
    fn clone_from(&mut self, source: &Self) {
        self.comp.clone_from(&source.comp);
        if source.is_empty() {
            self.entries.clear();
        } else if self.entries.len() == source.entries.len() {
            self.entries.clone_from_slice(&source.entries);
        } else {
            self.entries.clear();
            self.entries.extend_from_slice(&source.entries);
        }
    }
}

impl<M, C> PartialEq for SortedVec<M, C>
where
    M: EntryMode,
    M::Entry: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<M, C> Eq for SortedVec<M, C>
where
    M: EntryMode,
    M::Entry: Eq,
{
}

impl<M, C> FromIterator<M::Entry> for SortedVec<M, C>
where
    M: EntryMode,
    C: Compare<M::Key> + Default,
{
    fn from_iter<I: IntoIterator<Item = M::Entry>>(iter: I) -> Self {
        let mut sorted = Self::with_comparator(C::default());
        sorted.insert_many(iter);
        sorted
    }
}

impl<M, C> Extend<M::Entry> for SortedVec<M, C>
where
    M: EntryMode,
    C: Compare<M::Key>,
{
    fn extend<I: IntoIterator<Item = M::Entry>>(&mut self, iter: I) {
        self.insert_many(iter);
    }
}

impl<M, C> From<Vec<M::Entry>> for SortedVec<M, C>
where
    M: EntryMode,
    C: Compare<M::Key> + Default,
{
    fn from(entries: Vec<M::Entry>) -> Self {
        Self::from_unsorted(entries, C::default())
    }
}

impl<M, C, const N: usize> From<[M::Entry; N]> for SortedVec<M, C>
where
    M: EntryMode,
    C: Compare<M::Key> + Default,
{
    fn from(entries: [M::Entry; N]) -> Self {
        Self::from_unsorted(Vec::from(entries), C::default())
    }
}

impl<M, C> IntoIterator for SortedVec<M, C>
where
    M: EntryMode,
{
    type Item = M::Entry;
    type IntoIter = vec::IntoIter<M::Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, M, C> IntoIterator for &'a SortedVec<M, C>
where
    M: EntryMode,
{
    type Item = &'a M::Entry;
    type IntoIter = slice::Iter<'a, M::Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<M, C> fmt::Debug for SortedVec<M, C>
where
    M: EntryMode,
    M::Entry: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedVec").field("len", &self.entries.len()).field("entries", &self.entries).finish()
    }
}
