/*
 * Created on Thu Feb 15 2024
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
    super::{config::Config, IndexSTSeqVec},
    crate::{
        error::{Error, PosResult},
        idx::{AsKey, AsValue},
    },
    std::{
        collections::HashMap as StdMap,
        fmt::{self, Debug},
        hash::BuildHasher,
        iter::FusedIterator,
        slice::Iter as OrdSeqIter,
        vec::IntoIter as OrdSeqIntoIter,
    },
};

/// An ordered iterator over the entries of a positional index
pub struct IndexSTSeqVecIterOrdKV<'a, K: 'a, V: 'a, S> {
    i: OrdSeqIter<'a, K>,
    m: &'a StdMap<K, V, S>,
}

impl<'a, K: 'a, V: 'a, S> IndexSTSeqVecIterOrdKV<'a, K, V, S> {
    #[inline(always)]
    pub(super) fn new<C: Config<K, V, Hasher = S>>(idx: &'a IndexSTSeqVec<K, V, C>) -> Self {
        Self {
            i: idx.o.iter(),
            m: &idx.m,
        }
    }
}

impl<'a, K, V, S> Clone for IndexSTSeqVecIterOrdKV<'a, K, V, S> {
    fn clone(&self) -> Self {
        Self {
            i: self.i.clone(),
            m: self.m,
        }
    }
}

impl<'a, K: AsKey, V: AsValue, S: BuildHasher> Iterator for IndexSTSeqVecIterOrdKV<'a, K, V, S> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<Self::Item> {
        self.i.next().map(|k| {
            // the order sequence never holds a key the lookup table doesn't
            (k, self.m.get(k).unwrap())
        })
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.i.size_hint()
    }
}

impl<'a, K: AsKey, V: AsValue, S: BuildHasher> DoubleEndedIterator
    for IndexSTSeqVecIterOrdKV<'a, K, V, S>
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.i.next_back().map(|k| (k, self.m.get(k).unwrap()))
    }
}

impl<'a, K: AsKey, V: AsValue, S: BuildHasher> ExactSizeIterator
    for IndexSTSeqVecIterOrdKV<'a, K, V, S>
{
    fn len(&self) -> usize {
        self.i.len()
    }
}

impl<'a, K: AsKey, V: AsValue, S: BuildHasher> FusedIterator
    for IndexSTSeqVecIterOrdKV<'a, K, V, S>
{
}

impl<'a, K: AsKey + Debug, V: AsValue + Debug, S: BuildHasher> Debug
    for IndexSTSeqVecIterOrdKV<'a, K, V, S>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// An ordered iterator over the keys of a positional index
pub struct IndexSTSeqVecIterOrdKey<'a, K: 'a> {
    i: OrdSeqIter<'a, K>,
}

impl<'a, K: 'a> IndexSTSeqVecIterOrdKey<'a, K> {
    #[inline(always)]
    pub(super) fn new<V, C: Config<K, V>>(idx: &'a IndexSTSeqVec<K, V, C>) -> Self {
        Self { i: idx.o.iter() }
    }
}

impl<'a, K> Clone for IndexSTSeqVecIterOrdKey<'a, K> {
    fn clone(&self) -> Self {
        Self { i: self.i.clone() }
    }
}

impl<'a, K> Iterator for IndexSTSeqVecIterOrdKey<'a, K> {
    type Item = &'a K;
    fn next(&mut self) -> Option<Self::Item> {
        self.i.next()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.i.size_hint()
    }
}

impl<'a, K> DoubleEndedIterator for IndexSTSeqVecIterOrdKey<'a, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.i.next_back()
    }
}

impl<'a, K> ExactSizeIterator for IndexSTSeqVecIterOrdKey<'a, K> {
    fn len(&self) -> usize {
        self.i.len()
    }
}

impl<'a, K> FusedIterator for IndexSTSeqVecIterOrdKey<'a, K> {}

impl<'a, K: Debug> Debug for IndexSTSeqVecIterOrdKey<'a, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// An ordered iterator over the values of a positional index
pub struct IndexSTSeqVecIterOrdValue<'a, K: 'a, V: 'a, S> {
    i: OrdSeqIter<'a, K>,
    m: &'a StdMap<K, V, S>,
}

impl<'a, K: 'a, V: 'a, S> IndexSTSeqVecIterOrdValue<'a, K, V, S> {
    #[inline(always)]
    pub(super) fn new<C: Config<K, V, Hasher = S>>(idx: &'a IndexSTSeqVec<K, V, C>) -> Self {
        Self {
            i: idx.o.iter(),
            m: &idx.m,
        }
    }
}

impl<'a, K, V, S> Clone for IndexSTSeqVecIterOrdValue<'a, K, V, S> {
    fn clone(&self) -> Self {
        Self {
            i: self.i.clone(),
            m: self.m,
        }
    }
}

impl<'a, K: AsKey, V: AsValue, S: BuildHasher> Iterator for IndexSTSeqVecIterOrdValue<'a, K, V, S> {
    type Item = &'a V;
    fn next(&mut self) -> Option<Self::Item> {
        self.i.next().map(|k| self.m.get(k).unwrap())
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.i.size_hint()
    }
}

impl<'a, K: AsKey, V: AsValue, S: BuildHasher> DoubleEndedIterator
    for IndexSTSeqVecIterOrdValue<'a, K, V, S>
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.i.next_back().map(|k| self.m.get(k).unwrap())
    }
}

impl<'a, K: AsKey, V: AsValue, S: BuildHasher> ExactSizeIterator
    for IndexSTSeqVecIterOrdValue<'a, K, V, S>
{
    fn len(&self) -> usize {
        self.i.len()
    }
}

impl<'a, K: AsKey, V: AsValue, S: BuildHasher> FusedIterator
    for IndexSTSeqVecIterOrdValue<'a, K, V, S>
{
}

impl<'a, K: AsKey, V: AsValue + Debug, S: BuildHasher> Debug
    for IndexSTSeqVecIterOrdValue<'a, K, V, S>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// An owned ordered iterator; drains the index in sequence order
pub struct IndexSTSeqVecIntoIter<K, V, S> {
    o: OrdSeqIntoIter<K>,
    m: StdMap<K, V, S>,
}

impl<K, V, S> IndexSTSeqVecIntoIter<K, V, S> {
    pub(super) fn new<C: Config<K, V, Hasher = S>>(idx: IndexSTSeqVec<K, V, C>) -> Self {
        Self {
            o: idx.o.into_iter(),
            m: idx.m,
        }
    }
}

impl<K: AsKey, V, S: BuildHasher> Iterator for IndexSTSeqVecIntoIter<K, V, S> {
    type Item = (K, V);
    fn next(&mut self) -> Option<Self::Item> {
        self.o.next().map(|k| {
            // same invariant as the borrowed iterators
            let v = self.m.remove(&k).unwrap();
            (k, v)
        })
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.o.size_hint()
    }
}

impl<K: AsKey, V, S: BuildHasher> DoubleEndedIterator for IndexSTSeqVecIntoIter<K, V, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.o.next_back().map(|k| {
            let v = self.m.remove(&k).unwrap();
            (k, v)
        })
    }
}

impl<K: AsKey, V, S: BuildHasher> ExactSizeIterator for IndexSTSeqVecIntoIter<K, V, S> {
    fn len(&self) -> usize {
        self.o.len()
    }
}

impl<K: AsKey, V, S: BuildHasher> FusedIterator for IndexSTSeqVecIntoIter<K, V, S> {}

/// A bidirectional cursor over the entries of a positional index, in sequence order.
///
/// The cursor starts before the first entry; [`Self::step_next`] and [`Self::step_back`] move
/// it one entry at a time, yielding the key of the entry stepped over. The value of that
/// current entry can then be read, replaced in place, or its whole entry removed. The cursor
/// holds a mutable borrow of the index for its entire lifetime, so the backing structure
/// cannot be mutated behind its back
pub struct IndexSTSeqVecCursor<'a, K: AsKey, V: AsValue, C: Config<K, V>> {
    idx: &'a mut IndexSTSeqVec<K, V, C>,
    nxt: usize,
    cur: Option<usize>,
}

impl<'a, K: AsKey, V: AsValue, C: Config<K, V>> IndexSTSeqVecCursor<'a, K, V, C> {
    pub(super) fn new(idx: &'a mut IndexSTSeqVec<K, V, C>) -> Self {
        Self {
            idx,
            nxt: 0,
            cur: None,
        }
    }
    pub fn has_next(&self) -> bool {
        self.nxt < self.idx.len()
    }
    pub fn has_prev(&self) -> bool {
        self.nxt != 0
    }
    /// Step over the next entry and return its key
    pub fn step_next(&mut self) -> PosResult<&K> {
        if !self.has_next() {
            return Err(Error::CursorExhausted);
        }
        self.cur = Some(self.nxt);
        self.nxt += 1;
        Ok(&self.idx.o[self.nxt - 1])
    }
    /// Step back over the previous entry and return its key
    pub fn step_back(&mut self) -> PosResult<&K> {
        if !self.has_prev() {
            return Err(Error::CursorExhausted);
        }
        self.nxt -= 1;
        self.cur = Some(self.nxt);
        Ok(&self.idx.o[self.nxt])
    }
    /// Returns the key of the current entry, if there is one
    pub fn key(&self) -> Option<&K> {
        self.cur.map(|i| &self.idx.o[i])
    }
    /// Returns the value of the current entry, if there is one
    pub fn value(&self) -> Option<&V> {
        self.cur.map(|i| {
            // the order sequence never holds a key the lookup table doesn't
            self.idx.m.get(&self.idx.o[i]).unwrap()
        })
    }
    /// Replaces the value of the current entry in place, without touching the order. Returns
    /// the previous value, or `None` when there is no current entry
    pub fn set_value(&mut self, val: V) -> Option<V> {
        let i = self.cur?;
        self.idx._set_value_at(i, val).ok()
    }
    /// Removes the current entry entirely (key and value). There is no current entry again
    /// until the next step
    pub fn remove(&mut self) -> Option<V> {
        let i = self.cur.take()?;
        if i < self.nxt {
            self.nxt -= 1;
        }
        self.idx._remove_at(i).ok()
    }
}
