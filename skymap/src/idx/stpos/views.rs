/*
 * Created on Sat Feb 17 2024
 *
 * This file is a part of Skymap
 * Skymap is a free and open-source ordered indexed map library written by
 * Sayan Nandan ("the Author") with the vision to provide a positionally
 * addressable associative container without compromising on correctness
 * or performance.
 *
 * Copyright (c) 2024, Sayan Nandan <ohsayan@outlook.com>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 *
*/

use {
    super::{
        config::Config,
        iter::{IndexSTSeqVecIterOrdKey, IndexSTSeqVecIterOrdValue},
        IndexSTSeqVec,
    },
    crate::{
        error::PosResult,
        idx::{AsKey, AsValue},
    },
    std::fmt::{self, Debug},
};

/// A live, read-only list view of an index's keys in sequence order. The view carries no
/// state of its own: every call reads through to the backing index. Keys cannot be inserted,
/// replaced or removed through this view; all key mutation goes through the index itself
pub struct IndexSTSeqVecKeyView<'a, K: AsKey, V: AsValue, C: Config<K, V>> {
    idx: &'a IndexSTSeqVec<K, V, C>,
}

impl<'a, K: AsKey, V: AsValue, C: Config<K, V>> IndexSTSeqVecKeyView<'a, K, V, C> {
    pub(super) fn new(idx: &'a IndexSTSeqVec<K, V, C>) -> Self {
        Self { idx }
    }
    pub fn len(&self) -> usize {
        self.idx.len()
    }
    pub fn is_empty(&self) -> bool {
        self.idx.is_empty()
    }
    /// Returns the key at the given position. Fails for `index >= len`
    pub fn get(&self, index: usize) -> PosResult<&'a K> {
        self.idx._key_at(index)
    }
    pub fn iter(&self) -> IndexSTSeqVecIterOrdKey<'a, K> {
        IndexSTSeqVecIterOrdKey::new(self.idx)
    }
}

impl<'a, K: AsKey, V: AsValue, C: Config<K, V>> Clone for IndexSTSeqVecKeyView<'a, K, V, C> {
    fn clone(&self) -> Self {
        Self { idx: self.idx }
    }
}

impl<'a, K: AsKey, V: AsValue, C: Config<K, V>> IntoIterator
    for IndexSTSeqVecKeyView<'a, K, V, C>
{
    type Item = &'a K;
    type IntoIter = IndexSTSeqVecIterOrdKey<'a, K>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K: AsKey + Debug, V: AsValue, C: Config<K, V>> Debug
    for IndexSTSeqVecKeyView<'a, K, V, C>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// A live list view of an index's values, aligned index-for-index with the key view.
/// Replacement writes the value through to the backing index; removal removes the whole
/// entry, key included, since a value cannot exist without its key. There is no insertion
/// through this view
pub struct IndexSTSeqVecValueView<'a, K: AsKey, V: AsValue, C: Config<K, V>> {
    idx: &'a mut IndexSTSeqVec<K, V, C>,
}

impl<'a, K: AsKey, V: AsValue, C: Config<K, V>> IndexSTSeqVecValueView<'a, K, V, C> {
    pub(super) fn new(idx: &'a mut IndexSTSeqVec<K, V, C>) -> Self {
        Self { idx }
    }
    pub fn len(&self) -> usize {
        self.idx.len()
    }
    pub fn is_empty(&self) -> bool {
        self.idx.is_empty()
    }
    /// Returns the value at the given position. Fails for `index >= len`
    pub fn get(&self, index: usize) -> PosResult<&V> {
        self.idx._value_at(index)
    }
    /// Replaces the value at the given position, leaving the order untouched. Fails for
    /// `index >= len`
    pub fn set(&mut self, index: usize, val: V) -> PosResult<V> {
        self.idx._set_value_at(index, val)
    }
    /// Removes the entry at the given position from the backing index. Fails for
    /// `index >= len`
    pub fn remove(&mut self, index: usize) -> PosResult<V> {
        self.idx._remove_at(index)
    }
    pub fn iter(&self) -> IndexSTSeqVecIterOrdValue<'_, K, V, C::Hasher> {
        IndexSTSeqVecIterOrdValue::new(&*self.idx)
    }
}

impl<'a, K: AsKey, V: AsValue + Debug, C: Config<K, V>> Debug
    for IndexSTSeqVecValueView<'a, K, V, C>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
